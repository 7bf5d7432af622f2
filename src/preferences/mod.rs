//! User preferences: the selected cities and display settings.
//!
//! [`PreferencesStore`] owns the in-memory [`Preferences`] and a key-value
//! backend. Every mutation writes through to the backend and then publishes
//! [`AppEvent::PreferencesChanged`] so the dispatcher can refresh the UI.
//!
//! Absent or unreadable values fall back to their defaults with a warning;
//! loading never fails.

pub mod store;

pub use store::{KeyValueStore, MemoryStore};

use tracing::{debug, info, warn};

use crate::clock::{effective_pattern, TimeFormat};
use crate::error::PrefsError;
use crate::events::{AppEvent, EventPublisher, PreferenceChange};
use crate::i18n::Language;
use crate::model::constants::*;
use crate::model::{default_selection, SelectedCity};

/// Current values of every persisted setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub cities: Vec<SelectedCity>,
    pub time_format: TimeFormat,
    pub custom_format: String,
    /// `None` means the main screen.
    pub preferred_screen: Option<usize>,
    pub language: Language,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            cities: default_selection(),
            time_format: TimeFormat::default(),
            custom_format: DEFAULT_CUSTOM_FORMAT.to_string(),
            preferred_screen: None,
            language: Language::default(),
        }
    }
}

impl Preferences {
    /// The pattern the clock rows are rendered with.
    pub fn effective_pattern(&self) -> &str {
        effective_pattern(self.time_format, &self.custom_format)
    }
}

/// Decodes the JSON city list.
pub fn decode_cities(data: &[u8]) -> Result<Vec<SelectedCity>, PrefsError> {
    serde_json::from_slice(data).map_err(|source| PrefsError::Decode {
        key: PREF_CITIES,
        source,
    })
}

/// Encodes the city list as JSON.
pub fn encode_cities(cities: &[SelectedCity]) -> Result<Vec<u8>, PrefsError> {
    serde_json::to_vec(cities).map_err(|source| PrefsError::Encode {
        key: PREF_CITIES,
        source,
    })
}

fn screen_to_stored(screen: Option<usize>) -> i64 {
    screen
        .and_then(|i| i64::try_from(i).ok())
        .unwrap_or(MAIN_SCREEN_INDEX)
}

fn screen_from_stored(value: i64) -> Option<usize> {
    usize::try_from(value).ok()
}

/// Preferences bound to a persistent backend.
pub struct PreferencesStore<S: KeyValueStore> {
    backend: S,
    prefs: Preferences,
    publisher: Option<EventPublisher>,
}

impl<S: KeyValueStore> PreferencesStore<S> {
    /// Reads every key from `backend`, substituting defaults where needed.
    pub fn load(backend: S) -> Self {
        let defaults = Preferences::default();

        let cities = match backend.get_data(PREF_CITIES) {
            None => {
                debug!("no stored cities, using defaults");
                defaults.cities
            }
            Some(data) => decode_cities(&data).unwrap_or_else(|e| {
                warn!(error = %e, "stored cities unreadable, using defaults");
                default_selection()
            }),
        };

        let time_format = match backend.get_string(PREF_TIME_FORMAT) {
            None => defaults.time_format,
            Some(raw) => raw.parse().unwrap_or_else(|e: PrefsError| {
                warn!(error = %e, "falling back to 24-hour format");
                TimeFormat::default()
            }),
        };

        let custom_format = backend
            .get_string(PREF_CUSTOM_FORMAT)
            .unwrap_or(defaults.custom_format);

        let preferred_screen = backend
            .get_int(PREF_PREFERRED_SCREEN)
            .and_then(screen_from_stored);

        let language = match backend.get_string(PREF_LANGUAGE) {
            None => defaults.language,
            Some(raw) => raw.parse().unwrap_or_else(|e: PrefsError| {
                warn!(error = %e, "falling back to system language");
                Language::default()
            }),
        };

        let prefs = Preferences {
            cities,
            time_format,
            custom_format,
            preferred_screen,
            language,
        };
        info!(
            cities = prefs.cities.len(),
            format = %prefs.time_format,
            language = %prefs.language,
            "preferences loaded"
        );

        Self {
            backend,
            prefs,
            publisher: None,
        }
    }

    /// Publishes a change event after every mutation.
    pub fn with_publisher(mut self, publisher: EventPublisher) -> Self {
        self.publisher = Some(publisher);
        self
    }

    pub fn get(&self) -> &Preferences {
        &self.prefs
    }

    pub fn cities(&self) -> &[SelectedCity] {
        &self.prefs.cities
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn effective_pattern(&self) -> &str {
        self.prefs.effective_pattern()
    }

    // === City list ===

    pub fn add_city(&mut self, city: SelectedCity) {
        info!(city = %city.city_name, zone = %city.time_zone_identifier, "city added");
        self.prefs.cities.push(city);
        self.commit_cities();
    }

    /// Removes the city at `index`; out-of-range indices are ignored.
    pub fn remove_city(&mut self, index: usize) -> Option<SelectedCity> {
        if index >= self.prefs.cities.len() {
            warn!(index, "remove_city out of range");
            return None;
        }
        let removed = self.prefs.cities.remove(index);
        info!(city = %removed.city_name, "city removed");
        self.commit_cities();
        Some(removed)
    }

    /// Moves the city at `from` so it ends up at index `to`.
    /// Returns false (and changes nothing) when either index is out of range.
    pub fn move_city(&mut self, from: usize, to: usize) -> bool {
        let len = self.prefs.cities.len();
        if from >= len || to >= len {
            warn!(from, to, len, "move_city out of range");
            return false;
        }
        if from == to {
            return true;
        }
        let city = self.prefs.cities.remove(from);
        self.prefs.cities.insert(to, city);
        debug!(from, to, "city moved");
        self.commit_cities();
        true
    }

    /// Replaces the selection with the default cities.
    pub fn reset_cities(&mut self) {
        self.prefs.cities = default_selection();
        info!("cities reset to defaults");
        self.commit_cities();
    }

    // === Scalars ===

    pub fn set_time_format(&mut self, format: TimeFormat) {
        self.prefs.time_format = format;
        self.backend.set_string(PREF_TIME_FORMAT, format.raw_value());
        info!(format = %format, "time format updated");
        self.notify(PreferenceChange::TimeFormat);
    }

    pub fn set_custom_format(&mut self, pattern: &str) {
        self.prefs.custom_format = pattern.to_string();
        self.backend.set_string(PREF_CUSTOM_FORMAT, pattern);
        debug!(pattern, "custom format updated");
        self.notify(PreferenceChange::CustomFormat);
    }

    pub fn set_preferred_screen(&mut self, screen: Option<usize>) {
        self.prefs.preferred_screen = screen;
        self.backend
            .set_int(PREF_PREFERRED_SCREEN, screen_to_stored(screen));
        info!(?screen, "preferred screen updated");
        self.notify(PreferenceChange::Screen);
    }

    pub fn set_language(&mut self, language: Language) {
        self.prefs.language = language;
        self.backend.set_string(PREF_LANGUAGE, language.raw_value());
        info!(language = %language, "language updated");
        self.notify(PreferenceChange::Language);
    }

    /// Resets cities, time format, custom pattern and screen. The language
    /// is left alone.
    pub fn restore_defaults(&mut self) {
        let language = self.prefs.language;
        self.prefs = Preferences {
            language,
            ..Preferences::default()
        };

        self.write_cities();
        self.backend
            .set_string(PREF_TIME_FORMAT, self.prefs.time_format.raw_value());
        self.backend
            .set_string(PREF_CUSTOM_FORMAT, &self.prefs.custom_format);
        self.backend
            .set_int(PREF_PREFERRED_SCREEN, MAIN_SCREEN_INDEX);
        info!("settings restored to defaults");
        self.notify(PreferenceChange::All);
    }

    fn write_cities(&mut self) {
        match encode_cities(&self.prefs.cities) {
            Ok(data) => self.backend.set_data(PREF_CITIES, &data),
            Err(e) => warn!(error = %e, "cities not saved"),
        }
    }

    fn commit_cities(&mut self) {
        self.write_cities();
        self.notify(PreferenceChange::Cities);
    }

    fn notify(&self, change: PreferenceChange) {
        if let Some(publisher) = &self.publisher {
            publisher.publish(AppEvent::PreferencesChanged(change));
        }
    }
}
