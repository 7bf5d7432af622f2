//! Application events for inter-module communication.
//!
//! These events represent high-level application actions that can be
//! published by any module and handled by the event dispatcher.
//! This module is pure Rust with no FFI dependencies, making it fully testable.

/// Which preference a [`AppEvent::PreferencesChanged`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceChange {
    /// The selected city list (added, removed, reordered or reset).
    Cities,
    /// Time format choice.
    TimeFormat,
    /// Custom pattern text, edited live in the settings field.
    CustomFormat,
    /// Preferred screen index.
    Screen,
    /// UI language.
    Language,
    /// Everything at once (restore defaults).
    All,
}

impl PreferenceChange {
    /// True when the panel needs a new frame (size or screen).
    pub fn affects_placement(self) -> bool {
        matches!(
            self,
            PreferenceChange::Cities | PreferenceChange::Screen | PreferenceChange::All
        )
    }

    /// True when the status menu and settings texts must be rebuilt.
    pub fn affects_language(self) -> bool {
        matches!(self, PreferenceChange::Language | PreferenceChange::All)
    }

    /// True when the clock pattern may have changed.
    pub fn affects_format(self) -> bool {
        matches!(
            self,
            PreferenceChange::TimeFormat | PreferenceChange::CustomFormat | PreferenceChange::All
        )
    }

    /// False for edits the settings window already reflects while typing;
    /// rebuilding would take the text field away from the user.
    pub fn rebuilds_settings(self) -> bool {
        !matches!(self, PreferenceChange::CustomFormat)
    }
}

/// Application-level events for decoupled communication between modules.
///
/// Events flow from producers (panel view, menu, timers, observers) through
/// the EventBus to the dispatcher, which executes the appropriate actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // === Panel Events ===
    /// Mouse pointer entered the panel
    HoverEntered,

    /// The move animation with this generation finished
    AnimationFinished { generation: u64 },

    /// The cooldown after the move with this generation elapsed
    CooldownElapsed { generation: u64 },

    // === Menu Events ===
    /// Show or hide the panel
    ToggleWindow,

    /// Open settings window (Cmd+,)
    OpenSettings,

    /// Quit the application (Cmd+Q)
    Quit,

    // === UI Lifecycle Events ===
    /// Settings window was closed by user
    SettingsClosed,

    /// A preference was written
    PreferencesChanged(PreferenceChange),

    // === System Events ===
    /// Display configuration changed (screen added, removed or resized)
    ScreenChanged,
}

impl AppEvent {
    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::HoverEntered => "Pointer entered panel",
            AppEvent::AnimationFinished { .. } => "Move animation finished",
            AppEvent::CooldownElapsed { .. } => "Move cooldown elapsed",
            AppEvent::ToggleWindow => "Toggle panel visibility",
            AppEvent::OpenSettings => "Open settings window",
            AppEvent::Quit => "Quit application",
            AppEvent::SettingsClosed => "Settings window closed",
            AppEvent::PreferencesChanged(_) => "Preferences changed",
            AppEvent::ScreenChanged => "Screen parameters changed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_change_scope() {
        assert!(PreferenceChange::Cities.affects_placement());
        assert!(PreferenceChange::Screen.affects_placement());
        assert!(!PreferenceChange::TimeFormat.affects_placement());
        assert!(!PreferenceChange::Language.affects_placement());

        assert!(PreferenceChange::Language.affects_language());
        assert!(PreferenceChange::All.affects_language());
        assert!(!PreferenceChange::Cities.affects_language());

        assert!(PreferenceChange::CustomFormat.affects_format());
        assert!(!PreferenceChange::CustomFormat.rebuilds_settings());
        assert!(!PreferenceChange::CustomFormat.affects_placement());
        assert!(PreferenceChange::TimeFormat.rebuilds_settings());
    }

    #[test]
    fn test_event_equality_includes_payload() {
        assert_eq!(
            AppEvent::AnimationFinished { generation: 3 },
            AppEvent::AnimationFinished { generation: 3 }
        );
        assert_ne!(
            AppEvent::AnimationFinished { generation: 3 },
            AppEvent::AnimationFinished { generation: 4 }
        );
    }

    #[test]
    fn test_event_debug() {
        let event = AppEvent::HoverEntered;
        let debug_str = format!("{:?}", event);
        assert_eq!(debug_str, "HoverEntered");
    }

    #[test]
    fn test_all_events_have_descriptions() {
        let events = [
            AppEvent::HoverEntered,
            AppEvent::AnimationFinished { generation: 0 },
            AppEvent::CooldownElapsed { generation: 0 },
            AppEvent::ToggleWindow,
            AppEvent::OpenSettings,
            AppEvent::Quit,
            AppEvent::SettingsClosed,
            AppEvent::PreferencesChanged(PreferenceChange::All),
            AppEvent::ScreenChanged,
        ];

        for event in events {
            assert!(!event.description().is_empty());
        }
    }
}
