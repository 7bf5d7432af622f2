//! Platform-specific implementations.
//!
//! Only macOS has a UI; everything above this module is platform-free and
//! builds and tests on any target.

#[cfg(target_os = "macos")]
pub mod macos;
