//! AppKit user interface: the floating panel, the status bar menu and the
//! settings window.

pub mod panel;
pub mod settings;
pub mod status_bar;

pub use panel::{create_panel, draw_panel, refresh_panel_rows, start_clock_timer};
pub use settings::{open_settings_window, rebuild_settings_content, register_settings_actions};
pub use status_bar::{install_status_bar, update_status_bar_language};
