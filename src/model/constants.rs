//! Configuration constants and default values.
//!
//! This module contains all application constants including panel layout,
//! animation timings, NSUserDefaults keys, and the default city selection.

// === Panel Layout ===

/// Panel width in points.
pub const PANEL_WIDTH: f64 = 300.0;

/// Height of one city row in points.
pub const CITY_ROW_HEIGHT: f64 = 28.0;

/// Vertical spacing between city rows in points.
pub const CONTENT_SPACING: f64 = 14.0;

/// Gap between the panel and the edges of the screen's visible frame.
pub const SCREEN_PADDING: f64 = 40.0;

/// Horizontal inset of the row text inside the panel.
pub const ROW_HORIZONTAL_INSET: f64 = 20.0;

/// Corner radius of the panel background.
pub const PANEL_CORNER_RADIUS: f64 = 12.0;

/// Point size of the monospaced row font.
pub const ROW_FONT_SIZE: f64 = 15.0;

// === Timings (seconds) ===

/// Duration of the corner-to-corner move animation.
pub const ANIMATION_DURATION: f64 = 0.4;

/// Lock held after the move animation settles, before hover is accepted again.
pub const COOLDOWN_DURATION: f64 = 0.1;

/// Interval of the clock refresh timer.
pub const CLOCK_TICK_INTERVAL: f64 = 1.0;

// === NSUserDefaults Keys ===

/// Key for the JSON-encoded selected city list.
pub const PREF_CITIES: &str = "cities";

/// Key for the time format raw value.
pub const PREF_TIME_FORMAT: &str = "timeFormat";

/// Key for the custom format pattern.
pub const PREF_CUSTOM_FORMAT: &str = "customFormatString";

/// Key for the preferred screen index (-1 = main screen).
pub const PREF_PREFERRED_SCREEN: &str = "preferredScreenIndex";

/// Key for the UI language raw value.
pub const PREF_LANGUAGE: &str = "appLanguage";

// === Defaults ===

/// Default custom pattern offered when the user switches to a custom format.
pub const DEFAULT_CUSTOM_FORMAT: &str = "yyyy-MM-dd HH:mm:ss";

/// Stored value meaning "use the main screen".
pub const MAIN_SCREEN_INDEX: i64 = -1;

/// Cities shown on first launch: (name, IANA time zone).
pub const DEFAULT_CITIES: &[(&str, &str)] = &[
    ("Beijing", "Asia/Shanghai"),
    ("Tokyo", "Asia/Tokyo"),
    ("Los Angeles", "America/Los_Angeles"),
    ("London", "Europe/London"),
];

/// Placeholder drawn before the first clock tick fills a row.
pub const TIME_PLACEHOLDER: &str = "--:--:--";
