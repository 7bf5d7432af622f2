//! Storage for macOS using NSUserDefaults.
//!
//! Backs the preferences store with the standard user defaults database.

pub mod user_defaults;

pub use user_defaults::UserDefaultsStore;
