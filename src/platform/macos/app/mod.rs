//! Application context and shared helpers.

pub mod context;
pub mod helpers;

pub use context::{attach_context, context, system_language, AppContext, SettingsRefs};
pub use helpers::{create_repeating_timer, request_drain, resolve_screen_bounds, screen_count};
