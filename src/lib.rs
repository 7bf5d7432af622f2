#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

//! Core of the world clock. Everything outside `platform` is free of macOS
//! FFI so tests can run as normal integration tests on any host.

pub mod clock;
pub mod directory;
pub mod error;
pub mod events;
pub mod i18n;
pub mod logging;
pub mod model;
pub mod panel;
pub mod placement;
pub mod preferences;
pub mod settings;

#[cfg(target_os = "macos")]
pub mod platform;

// Re-export the types most callers need
pub use clock::{ClockFormatter, TimeFormat};
pub use directory::{City, CityDirectory};
pub use error::{ClockError, PlacementRejected, PrefsError};
pub use events::{AppEvent, EventBus, EventPublisher, PreferenceChange};
pub use i18n::{DisplayLanguage, Language};
pub use model::SelectedCity;
pub use placement::{Corner, PlacementController, ScreenBounds};
pub use preferences::{Preferences, PreferencesStore};
