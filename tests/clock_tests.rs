//! Tests for clock formatting across time zones and patterns.

use chrono::{TimeZone, Utc};
use time_shifty::clock::{format_utc_offset, utc_offset_seconds, ClockFormatter, TimeFormat};
use time_shifty::i18n::DisplayLanguage;
use time_shifty::ClockError;

#[test]
fn presets_render_in_each_zone() {
    let at = Utc.with_ymd_and_hms(2026, 7, 1, 21, 5, 9).unwrap();
    let f12 = ClockFormatter::for_format(TimeFormat::Hour12, "");
    assert_eq!(f12.format_at("Asia/Tokyo", at).unwrap(), "6:05:09 AM");
    // London is on summer time in July
    let short = ClockFormatter::for_format(TimeFormat::Short, "");
    assert_eq!(short.format_at("Europe/London", at).unwrap(), "22:05");
}

#[test]
fn unknown_zone_is_an_error_or_a_sentinel() {
    let formatter = ClockFormatter::default();
    let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    assert!(matches!(
        formatter.format_at("Mars/Olympus", at),
        Err(ClockError::InvalidTimeZone(_))
    ));
    assert_eq!(
        formatter.display("Mars/Olympus", at, DisplayLanguage::English),
        "Invalid time zone"
    );
}

#[test]
fn empty_custom_pattern_falls_back_to_24_hour() {
    let formatter = ClockFormatter::for_format(TimeFormat::Custom, "");
    assert_eq!(formatter.pattern(), "HH:mm:ss");
}

#[test]
fn offsets_follow_daylight_saving() {
    let winter = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
    let summer = Utc.with_ymd_and_hms(2026, 7, 15, 12, 0, 0).unwrap();
    assert_eq!(utc_offset_seconds("America/New_York", winter), Ok(-5 * 3600));
    assert_eq!(utc_offset_seconds("America/New_York", summer), Ok(-4 * 3600));
    assert_eq!(format_utc_offset(-4 * 3600), "UTC-4");
    assert_eq!(format_utc_offset(5 * 3600 + 45 * 60), "UTC+5:45");
}
