//! Clock formatting for the panel rows.
//!
//! A [`ClockFormatter`] holds one parsed pattern and renders it for any IANA
//! time zone. The panel builds a formatter whenever the time-format setting
//! changes and calls it once per second for every row.

pub mod pattern;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{ClockError, PrefsError};
use crate::i18n::{tr, DisplayLanguage, Key};
use pattern::Token;

/// The time-format choice in settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat {
    /// `HH:mm:ss`
    #[default]
    Hour24,
    /// `h:mm:ss a`
    Hour12,
    /// `HH:mm`
    Short,
    /// The user's own pattern.
    Custom,
}

impl TimeFormat {
    /// All choices, in picker order.
    pub const ALL: [TimeFormat; 4] = [
        TimeFormat::Hour24,
        TimeFormat::Hour12,
        TimeFormat::Short,
        TimeFormat::Custom,
    ];

    /// Stored value; for presets this is also the pattern.
    pub fn raw_value(self) -> &'static str {
        match self {
            TimeFormat::Hour24 => "HH:mm:ss",
            TimeFormat::Hour12 => "h:mm:ss a",
            TimeFormat::Short => "HH:mm",
            TimeFormat::Custom => "",
        }
    }

    /// String-table key of the picker label.
    pub fn label_key(self) -> Key {
        match self {
            TimeFormat::Hour24 => Key::Format24h,
            TimeFormat::Hour12 => Key::Format12h,
            TimeFormat::Short => Key::FormatShort,
            TimeFormat::Custom => Key::FormatCustom,
        }
    }
}

impl FromStr for TimeFormat {
    type Err = PrefsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeFormat::ALL
            .into_iter()
            .find(|format| format.raw_value() == s)
            .ok_or_else(|| PrefsError::UnknownTimeFormat(s.to_string()))
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw_value())
    }
}

/// The pattern actually used: the custom one when chosen and non-empty,
/// otherwise the preset (24-hour for an empty custom pattern).
pub fn effective_pattern(format: TimeFormat, custom: &str) -> &str {
    match format {
        TimeFormat::Custom if !custom.trim().is_empty() => custom,
        TimeFormat::Custom => TimeFormat::Hour24.raw_value(),
        preset => preset.raw_value(),
    }
}

/// Looks up an IANA time zone.
pub fn parse_time_zone(id: &str) -> Result<Tz, ClockError> {
    id.parse::<Tz>()
        .map_err(|_| ClockError::InvalidTimeZone(id.to_string()))
}

/// UTC offset of `id` at `instant`, in seconds east of UTC.
pub fn utc_offset_seconds(id: &str, instant: DateTime<Utc>) -> Result<i32, ClockError> {
    let tz = parse_time_zone(id)?;
    Ok(tz
        .offset_from_utc_datetime(&instant.naive_utc())
        .fix()
        .local_minus_utc())
}

/// `UTC+8`, `UTC+5:30`, `UTC-3:30`, `UTC+0`.
pub fn format_utc_offset(seconds: i32) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let abs = seconds.unsigned_abs();
    let hours = abs / 3600;
    let minutes = (abs % 3600) / 60;
    if minutes == 0 {
        format!("UTC{sign}{hours}")
    } else {
        format!("UTC{sign}{hours}:{minutes:02}")
    }
}

/// Renders wall-clock text for time zones with one fixed pattern.
#[derive(Debug, Clone)]
pub struct ClockFormatter {
    pattern: String,
    tokens: Vec<Token>,
}

impl ClockFormatter {
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            tokens: pattern::parse(pattern),
        }
    }

    /// Formatter for a settings choice.
    pub fn for_format(format: TimeFormat, custom: &str) -> Self {
        Self::new(effective_pattern(format, custom))
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Wall-clock text for `tz_id` at `instant`.
    pub fn format_at(&self, tz_id: &str, instant: DateTime<Utc>) -> Result<String, ClockError> {
        let tz = parse_time_zone(tz_id)?;
        Ok(pattern::render(&self.tokens, &instant.with_timezone(&tz)))
    }

    /// Wall-clock text for `tz_id` right now.
    pub fn format_now(&self, tz_id: &str) -> Result<String, ClockError> {
        self.format_at(tz_id, Utc::now())
    }

    /// Like [`format_at`](Self::format_at), but an unknown zone renders the
    /// localized "invalid time zone" text instead of failing.
    pub fn display(&self, tz_id: &str, instant: DateTime<Utc>, lang: DisplayLanguage) -> String {
        self.format_at(tz_id, instant)
            .unwrap_or_else(|_| tr(Key::InvalidTimeZone, lang).to_string())
    }
}

impl Default for ClockFormatter {
    fn default() -> Self {
        Self::for_format(TimeFormat::default(), "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant() -> DateTime<Utc> {
        // 06:30:00 UTC -> 14:30:00 in Shanghai
        Utc.with_ymd_and_hms(2026, 1, 15, 6, 30, 0).unwrap()
    }

    #[test]
    fn test_presets_render_in_zone() {
        let now = instant();
        let f24 = ClockFormatter::for_format(TimeFormat::Hour24, "");
        assert_eq!(f24.format_at("Asia/Shanghai", now).unwrap(), "14:30:00");

        let f12 = ClockFormatter::for_format(TimeFormat::Hour12, "");
        assert_eq!(f12.format_at("Asia/Shanghai", now).unwrap(), "2:30:00 PM");

        let short = ClockFormatter::for_format(TimeFormat::Short, "");
        assert_eq!(short.format_at("Europe/London", now).unwrap(), "06:30");
    }

    #[test]
    fn test_custom_pattern_is_used_when_selected() {
        let f = ClockFormatter::for_format(TimeFormat::Custom, "MM/dd HH:mm");
        assert_eq!(f.pattern(), "MM/dd HH:mm");
        assert_eq!(f.format_at("Asia/Tokyo", instant()).unwrap(), "01/15 15:30");
    }

    #[test]
    fn test_empty_custom_pattern_falls_back_to_24h() {
        assert_eq!(effective_pattern(TimeFormat::Custom, "  "), "HH:mm:ss");
        assert_eq!(effective_pattern(TimeFormat::Short, "yyyy"), "HH:mm");
    }

    #[test]
    fn test_invalid_zone_renders_sentinel() {
        let f = ClockFormatter::default();
        assert_eq!(
            f.format_at("Mars/Olympus", instant()),
            Err(ClockError::InvalidTimeZone("Mars/Olympus".into()))
        );
        assert_eq!(
            f.display("Mars/Olympus", instant(), DisplayLanguage::English),
            "Invalid time zone"
        );
        assert_eq!(
            f.display("Mars/Olympus", instant(), DisplayLanguage::Chinese),
            "无效时区"
        );
    }

    #[test]
    fn test_utc_offset_follows_dst() {
        let winter = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        let summer = Utc.with_ymd_and_hms(2026, 7, 15, 12, 0, 0).unwrap();
        assert_eq!(utc_offset_seconds("America/New_York", winter).unwrap(), -5 * 3600);
        assert_eq!(utc_offset_seconds("America/New_York", summer).unwrap(), -4 * 3600);
    }

    #[test]
    fn test_offset_labels() {
        assert_eq!(format_utc_offset(8 * 3600), "UTC+8");
        assert_eq!(format_utc_offset(5 * 3600 + 1800), "UTC+5:30");
        assert_eq!(format_utc_offset(-(3 * 3600 + 1800)), "UTC-3:30");
        assert_eq!(format_utc_offset(0), "UTC+0");
    }

    #[test]
    fn test_time_format_raw_values_parse() {
        for format in TimeFormat::ALL {
            assert_eq!(format.raw_value().parse::<TimeFormat>().unwrap(), format);
        }
        assert!("HH".parse::<TimeFormat>().is_err());
    }
}
