//! Input handling module.
//!
//! - observers.rs: System observers (screen parameters, termination)
//!
//! Hover over the panel is delivered through the panel view's tracking
//! area, see `ui::panel::view`.

pub mod observers;

pub use observers::{install_screen_observer, install_termination_observer};
