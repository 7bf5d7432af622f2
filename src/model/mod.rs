//! Application domain model.
//!
//! This module contains pure data definitions (no FFI dependencies):
//! configuration constants and the user's city selection.
//!
//! Platform-specific persistence is in `platform::macos::storage`.

pub mod constants;
pub mod selection;

pub use constants::*;
pub use selection::{default_selection, SelectedCity};
