//! Tests for the built-in city directory.

use chrono::{TimeZone, Utc};
use time_shifty::directory::CityDirectory;
use time_shifty::i18n::DisplayLanguage;
use time_shifty::model::SelectedCity;

fn names(dir: &CityDirectory, query: &str) -> Vec<&'static str> {
    dir.search(query).iter().map(|c| c.english_name).collect()
}

#[test]
fn empty_query_lists_popular_cities_alphabetically() {
    let dir = CityDirectory::new(DisplayLanguage::English);
    let results = dir.search("");
    assert!(!results.is_empty());
    assert!(results.iter().all(|c| c.is_popular));

    let shown: Vec<&str> = results.iter().map(|c| c.english_name).collect();
    let mut sorted = shown.clone();
    sorted.sort();
    assert_eq!(shown, sorted);
}

#[test]
fn tokyo_found_in_both_languages() {
    let dir = CityDirectory::default();
    assert_eq!(names(&dir, "tokyo"), vec!["Tokyo"]);
    assert_eq!(names(&dir, "东京"), vec!["Tokyo"]);
}

#[test]
fn search_matches_aliases_and_countries() {
    let dir = CityDirectory::default();
    assert_eq!(names(&dir, "bombay"), vec!["Mumbai"]);
    assert!(names(&dir, "japan").contains(&"Tokyo"));
    assert!(names(&dir, "no such place").is_empty());
}

#[test]
fn chinese_directory_localizes_known_zones() {
    let dir = CityDirectory::new(DisplayLanguage::Chinese);
    let tokyo = SelectedCity::new("Tokyo", "Asia/Tokyo");
    let custom = SelectedCity::new("Home", "Europe/Berlin");
    assert_eq!(dir.localized_name(&tokyo), "东京");
    assert_eq!(dir.localized_name(&custom), "Home");
}

#[test]
fn offset_order_runs_west_to_east() {
    let dir = CityDirectory::default();
    let winter = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
    let sorted = dir.sorted_by_utc_offset(winter);
    let offsets: Vec<i32> = sorted.iter().map(|c| c.utc_offset_seconds(winter)).collect();
    assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(sorted.len(), dir.all().len());
}
