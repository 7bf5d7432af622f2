#![allow(unexpected_cfgs)] // Silence cfg warnings inside objc macros

#[cfg(target_os = "macos")]
mod macos_main;

use time_shifty::logging::init_logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    #[cfg(target_os = "macos")]
    macos_main::run();

    #[cfg(not(target_os = "macos"))]
    tracing::error!("time-shifty needs macOS; nothing to run on this platform");

    Ok(())
}
