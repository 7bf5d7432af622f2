//! Panel view module.
//!
//! Contains the floating panel window, its view class and the row drawing.

pub mod drawing;
pub mod view;

pub use drawing::draw_panel;
pub use view::{create_panel, refresh_panel_rows, start_clock_timer};
