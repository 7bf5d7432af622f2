//! The built-in directory of cities and their time zones.
//!
//! Backs the add-city picker in settings and supplies localized names for
//! the panel rows.

mod cities;

use chrono::{DateTime, Utc};

use crate::clock::{format_utc_offset, utc_offset_seconds};
use crate::i18n::DisplayLanguage;
use crate::model::SelectedCity;
use cities::CITIES;

/// A city the directory knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct City {
    pub english_name: &'static str,
    pub chinese_name: &'static str,
    /// IANA identifier, e.g. `Asia/Tokyo`.
    pub time_zone: &'static str,
    pub aliases: &'static [&'static str],
    pub country: &'static str,
    pub country_zh: &'static str,
    pub is_popular: bool,
}

impl City {
    pub fn display_name(&self, lang: DisplayLanguage) -> &'static str {
        match lang {
            DisplayLanguage::English => self.english_name,
            DisplayLanguage::Chinese => self.chinese_name,
        }
    }

    pub fn display_country(&self, lang: DisplayLanguage) -> &'static str {
        match lang {
            DisplayLanguage::English => self.country,
            DisplayLanguage::Chinese => self.country_zh,
        }
    }

    /// True when `needle` (already lowercased) occurs in any searchable field.
    fn matches(&self, needle: &str) -> bool {
        let fields = [
            self.english_name,
            self.chinese_name,
            self.country,
            self.country_zh,
            self.time_zone,
        ];
        fields
            .iter()
            .chain(self.aliases.iter())
            .any(|field| field.to_lowercase().contains(needle))
    }

    /// Offset from UTC at `now`, in seconds. Every zone in the table is a
    /// valid IANA zone, so lookup failure degrades to zero.
    pub fn utc_offset_seconds(&self, now: DateTime<Utc>) -> i32 {
        utc_offset_seconds(self.time_zone, now).unwrap_or(0)
    }

    /// `UTC+8`, `UTC+5:30`, `UTC-3` at `now`.
    pub fn utc_offset_label(&self, now: DateTime<Utc>) -> String {
        format_utc_offset(self.utc_offset_seconds(now))
    }
}

/// Read-only view over the city table, bound to a display language.
#[derive(Debug, Clone, Copy)]
pub struct CityDirectory {
    lang: DisplayLanguage,
}

impl CityDirectory {
    pub fn new(lang: DisplayLanguage) -> Self {
        Self { lang }
    }

    pub fn language(&self) -> DisplayLanguage {
        self.lang
    }

    pub fn set_language(&mut self, lang: DisplayLanguage) {
        self.lang = lang;
    }

    pub fn all(&self) -> &'static [City] {
        CITIES
    }

    pub fn popular(&self) -> Vec<&'static City> {
        let mut cities: Vec<_> = CITIES.iter().filter(|c| c.is_popular).collect();
        self.sort_by_name(&mut cities);
        cities
    }

    /// Case-insensitive substring search over names, aliases, countries and
    /// the zone id. An empty query lists the popular cities. Results are
    /// popular cities first, then by display name.
    pub fn search(&self, query: &str) -> Vec<&'static City> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.popular();
        }

        let mut hits: Vec<_> = CITIES.iter().filter(|c| c.matches(&needle)).collect();
        hits.sort_by(|a, b| {
            b.is_popular
                .cmp(&a.is_popular)
                .then_with(|| a.display_name(self.lang).cmp(b.display_name(self.lang)))
        });
        hits
    }

    /// Every city, ascending by UTC offset at `now`; equal offsets by
    /// display name. DST can reorder cities between calls.
    pub fn sorted_by_utc_offset(&self, now: DateTime<Utc>) -> Vec<&'static City> {
        let mut cities: Vec<_> = CITIES.iter().collect();
        cities.sort_by_cached_key(|c| (c.utc_offset_seconds(now), c.display_name(self.lang)));
        cities
    }

    /// The city whose English name is `english_name`. Several cities share
    /// a zone, so the English name is the table key.
    pub fn find_by_name(&self, english_name: &str) -> Option<&'static City> {
        CITIES.iter().find(|c| c.english_name == english_name)
    }

    /// Name to draw for a selected city: the localized directory name when
    /// the stored name is one of ours, otherwise the stored name.
    pub fn localized_name<'a>(&self, selected: &'a SelectedCity) -> &'a str {
        CITIES
            .iter()
            .find(|c| {
                c.time_zone == selected.time_zone_identifier
                    && (c.english_name == selected.city_name
                        || c.chinese_name == selected.city_name)
            })
            .map(|c| c.display_name(self.lang))
            .unwrap_or(selected.city_name.as_str())
    }

    fn sort_by_name(&self, cities: &mut [&'static City]) {
        cities.sort_by(|a, b| a.display_name(self.lang).cmp(b.display_name(self.lang)));
    }
}

impl Default for CityDirectory {
    fn default() -> Self {
        Self::new(DisplayLanguage::English)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn names(cities: &[&City]) -> Vec<&'static str> {
        cities.iter().map(|c| c.english_name).collect()
    }

    #[test]
    fn test_table_zones_are_valid() {
        for city in CITIES {
            assert!(
                city.time_zone.parse::<chrono_tz::Tz>().is_ok(),
                "{} has bad zone {}",
                city.english_name,
                city.time_zone
            );
        }
        assert_eq!(CITIES.len(), 45);
    }

    #[test]
    fn test_english_names_are_unique() {
        let dir = CityDirectory::default();
        for city in CITIES {
            assert_eq!(dir.find_by_name(city.english_name), Some(city));
        }
        assert!(dir.find_by_name("Atlantis").is_none());
    }

    #[test]
    fn test_empty_query_lists_popular_alphabetically() {
        let dir = CityDirectory::default();
        let hits = dir.search("");
        assert!(hits.iter().all(|c| c.is_popular));
        assert_eq!(hits.len(), CITIES.iter().filter(|c| c.is_popular).count());
        let mut sorted = names(&hits);
        sorted.sort();
        assert_eq!(names(&hits), sorted);
        assert_eq!(hits[0].english_name, "Bangkok");
    }

    #[test]
    fn test_search_by_english_and_chinese_name() {
        let dir = CityDirectory::default();
        assert_eq!(names(&dir.search("tokyo")), ["Tokyo"]);
        assert_eq!(names(&dir.search("TOKYO")), ["Tokyo"]);
        assert_eq!(names(&dir.search("东京")), ["Tokyo"]);
    }

    #[test]
    fn test_search_by_alias_country_and_zone() {
        let dir = CityDirectory::default();
        assert_eq!(names(&dir.search("bombay")), ["Mumbai"]);
        assert_eq!(names(&dir.search("Asia/Kolkata")), ["New Delhi", "Mumbai"]);
        let usa = dir.search("usa");
        assert!(usa.len() > 3);
        // popular first
        let first_unpopular = usa.iter().position(|c| !c.is_popular).unwrap();
        assert!(usa[first_unpopular..].iter().all(|c| !c.is_popular));
    }

    #[test]
    fn test_search_without_match_is_empty() {
        assert!(CityDirectory::default().search("atlantis").is_empty());
    }

    #[test]
    fn test_sorted_by_offset_is_ascending() {
        let dir = CityDirectory::default();
        let now = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        let sorted = dir.sorted_by_utc_offset(now);
        assert_eq!(sorted.len(), CITIES.len());
        for pair in sorted.windows(2) {
            assert!(pair[0].utc_offset_seconds(now) <= pair[1].utc_offset_seconds(now));
        }
        assert_eq!(sorted[0].english_name, "Los Angeles");
        assert_eq!(sorted.last().unwrap().english_name, "Auckland");
    }

    #[test]
    fn test_offset_labels() {
        let dir = CityDirectory::default();
        let now = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        let delhi = dir.find_by_name("New Delhi").unwrap();
        assert_eq!(delhi.utc_offset_label(now), "UTC+5:30");
        let tokyo = dir.find_by_name("Tokyo").unwrap();
        assert_eq!(tokyo.utc_offset_label(now), "UTC+9");
    }

    #[test]
    fn test_localized_name_for_selected_city() {
        let mut dir = CityDirectory::new(DisplayLanguage::Chinese);
        let tokyo = SelectedCity::new("Tokyo", "Asia/Tokyo");
        assert_eq!(dir.localized_name(&tokyo), "东京");
        dir.set_language(DisplayLanguage::English);
        assert_eq!(dir.localized_name(&tokyo), "Tokyo");

        let custom = SelectedCity::new("Home", "Asia/Tokyo");
        assert_eq!(dir.localized_name(&custom), "Home");
    }
}
