//! Content of the settings window, independent of AppKit.
//!
//! The window in the macOS UI layer asks these helpers for labels, picker
//! entries and previews, and rebuilds itself whenever a preference changes.

use chrono::{DateTime, TimeZone, Utc};

use crate::clock::{pattern, ClockFormatter, TimeFormat};
use crate::directory::{City, CityDirectory};
use crate::i18n::{tr, DisplayLanguage, Key, Language};
use crate::model::SelectedCity;

/// Patterns listed under "Examples:" next to the custom format field.
pub const FORMAT_EXAMPLES: [(&str, Key); 5] = [
    ("HH:mm:ss", Key::Example24h),
    ("h:mm:ss a", Key::Example12h),
    ("yyyy-MM-dd HH:mm", Key::ExampleDateTime),
    ("MM/dd HH:mm", Key::ExampleShortDate),
    ("HH:mm", Key::ExampleTimeOnly),
];

/// Width the offset column of the add-city picker is padded to.
const OFFSET_COLUMN: usize = 10;

/// Time-format picker entries.
pub fn time_format_options(lang: DisplayLanguage) -> Vec<(TimeFormat, &'static str)> {
    TimeFormat::ALL
        .into_iter()
        .map(|f| (f, tr(f.label_key(), lang)))
        .collect()
}

/// `(pattern, description)` pairs for the examples list.
pub fn format_examples(lang: DisplayLanguage) -> Vec<(&'static str, &'static str)> {
    FORMAT_EXAMPLES
        .iter()
        .map(|(pattern, key)| (*pattern, tr(*key, lang)))
        .collect()
}

/// Live preview of a custom pattern; `None` while the field is empty.
pub fn format_preview<Tz: TimeZone>(custom: &str, at: &DateTime<Tz>) -> Option<String> {
    if custom.is_empty() {
        return None;
    }
    Some(pattern::render(&pattern::parse(custom), at))
}

/// Screen picker entries: the main screen, then `Screen 1..=count`.
pub fn screen_options(screen_count: usize, lang: DisplayLanguage) -> Vec<(Option<usize>, String)> {
    let mut options = Vec::with_capacity(screen_count + 1);
    options.push((None, tr(Key::ScreenMain, lang).to_string()));
    for index in 0..screen_count {
        options.push((
            Some(index),
            format!("{} {}", tr(Key::ScreenNumbered, lang), index + 1),
        ));
    }
    options
}

/// Language picker entries, titled in their own language.
pub fn language_options() -> Vec<(Language, &'static str)> {
    Language::ALL
        .into_iter()
        .map(|l| (l, l.picker_title()))
        .collect()
}

/// A row of the selected-cities list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityListEntry {
    pub name: String,
    pub time_zone: String,
    /// `HH:mm` in the city's zone, `--:--` for an unknown zone.
    pub time: String,
}

pub fn city_list_entries(
    cities: &[SelectedCity],
    directory: &CityDirectory,
    now: DateTime<Utc>,
) -> Vec<CityListEntry> {
    let short = ClockFormatter::for_format(TimeFormat::Short, "");
    cities
        .iter()
        .map(|city| CityListEntry {
            name: directory.localized_name(city).to_string(),
            time_zone: city.time_zone_identifier.clone(),
            time: short
                .format_at(&city.time_zone_identifier, now)
                .unwrap_or_else(|_| "--:--".to_string()),
        })
        .collect()
}

/// An entry of the add-city picker.
#[derive(Debug, Clone)]
pub struct AddCityCandidate {
    pub city: &'static City,
    /// `UTC+9      Tokyo (Japan)`
    pub label: String,
}

impl AddCityCandidate {
    /// Value stored on the picker item and resolved by [`picked_city`].
    pub fn key(&self) -> &'static str {
        self.city.english_name
    }
}

/// The directory city behind a picker item key.
pub fn picked_city(directory: &CityDirectory, key: &str) -> Option<&'static City> {
    directory.find_by_name(key)
}

/// Every directory city, sorted by UTC offset at `now`, with picker labels.
pub fn add_city_candidates(directory: &CityDirectory, now: DateTime<Utc>) -> Vec<AddCityCandidate> {
    let lang = directory.language();
    directory
        .sorted_by_utc_offset(now)
        .into_iter()
        .map(|city| AddCityCandidate {
            city,
            label: format!(
                "{:<width$} {} ({})",
                city.utc_offset_label(now),
                city.display_name(lang),
                city.display_country(lang),
                width = OFFSET_COLUMN
            ),
        })
        .collect()
}

/// The selection entry created when `city` is added; named in the
/// language the user picked it in.
pub fn selection_for(city: &City, lang: DisplayLanguage) -> SelectedCity {
    SelectedCity::new(city.display_name(lang), city.time_zone)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_screen_options_start_with_main() {
        let options = screen_options(2, DisplayLanguage::English);
        assert_eq!(
            options,
            vec![
                (None, "Main Screen".to_string()),
                (Some(0), "Screen 1".to_string()),
                (Some(1), "Screen 2".to_string()),
            ]
        );
        let zh = screen_options(1, DisplayLanguage::Chinese);
        assert_eq!(zh[1].1, "屏幕 1");
    }

    #[test]
    fn test_format_preview() {
        assert_eq!(format_preview("", &noon()), None);
        assert_eq!(
            format_preview("yyyy-MM-dd HH:mm", &noon()).as_deref(),
            Some("2026-01-15 12:00")
        );
    }

    #[test]
    fn test_examples_render_as_described() {
        let lang = DisplayLanguage::English;
        for (pattern, description) in format_examples(lang) {
            let at = Utc.with_ymd_and_hms(2026, 1, 15, 14, 30, 0).unwrap();
            let rendered = format_preview(pattern, &at).unwrap();
            assert!(
                description.starts_with(&rendered),
                "{pattern}: {rendered} vs {description}"
            );
        }
    }

    #[test]
    fn test_candidates_are_labelled_and_sorted() {
        let dir = CityDirectory::default();
        let candidates = add_city_candidates(&dir, noon());
        assert_eq!(candidates.len(), dir.all().len());
        let tokyo = candidates
            .iter()
            .find(|c| c.city.english_name == "Tokyo")
            .unwrap();
        assert_eq!(tokyo.label, "UTC+9      Tokyo (Japan)");
        assert!(candidates[0].label.starts_with("UTC-8"));
    }

    #[test]
    fn test_city_list_uses_short_time() {
        let cities = vec![
            SelectedCity::new("London", "Europe/London"),
            SelectedCity::new("Nowhere", "Not/AZone"),
        ];
        let entries = city_list_entries(&cities, &CityDirectory::default(), noon());
        assert_eq!(entries[0].time, "12:00");
        assert_eq!(entries[1].time, "--:--");
        assert_eq!(entries[1].time_zone, "Not/AZone");
    }

    #[test]
    fn test_selection_named_in_picking_language() {
        let dir = CityDirectory::default();
        let seoul = dir.find_by_name("Seoul").unwrap();
        let picked = selection_for(seoul, DisplayLanguage::Chinese);
        assert_eq!(picked.city_name, "首尔");
        assert_eq!(picked.time_zone_identifier, "Asia/Seoul");
    }

    #[test]
    fn test_every_candidate_adds_its_own_city() {
        for lang in [DisplayLanguage::English, DisplayLanguage::Chinese] {
            let dir = CityDirectory::new(lang);
            let candidates = add_city_candidates(&dir, noon());
            assert_eq!(candidates.len(), 45);
            for candidate in &candidates {
                let city = picked_city(&dir, candidate.key()).unwrap();
                assert_eq!(city, candidate.city);
                let picked = selection_for(city, lang);
                assert_eq!(picked.city_name, candidate.city.display_name(lang));
                assert_eq!(picked.time_zone_identifier, candidate.city.time_zone);
            }
        }
    }

    #[test]
    fn test_cities_sharing_a_zone_stay_distinct() {
        let dir = CityDirectory::default();
        let shanghai = picked_city(&dir, "Shanghai").unwrap();
        let beijing = picked_city(&dir, "Beijing").unwrap();
        assert_eq!(shanghai.time_zone, beijing.time_zone);
        assert_eq!(selection_for(shanghai, DisplayLanguage::English).city_name, "Shanghai");
        assert_eq!(selection_for(beijing, DisplayLanguage::English).city_name, "Beijing");
    }

    #[test]
    fn test_option_lists_cover_all_choices() {
        assert_eq!(time_format_options(DisplayLanguage::English).len(), 4);
        assert_eq!(language_options()[2].1, "简体中文");
    }
}
