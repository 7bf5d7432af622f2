//! Settings window module.
//!
//! This module contains the settings window and its controls.

pub mod actions;
pub mod window;

pub use actions::register_settings_actions;
pub use window::{open_settings_window, rebuild_settings_content};
