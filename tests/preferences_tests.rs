//! Tests for the preferences store over the in-memory backend.

use time_shifty::clock::TimeFormat;
use time_shifty::events::{AppEvent, EventBus, PreferenceChange};
use time_shifty::i18n::Language;
use time_shifty::model::constants::*;
use time_shifty::model::SelectedCity;
use time_shifty::preferences::{KeyValueStore, MemoryStore, PreferencesStore};

fn city_names(store: &PreferencesStore<MemoryStore>) -> Vec<String> {
    store.cities().iter().map(|c| c.city_name.clone()).collect()
}

#[test]
fn first_launch_uses_defaults() {
    let store = PreferencesStore::load(MemoryStore::new());
    assert_eq!(city_names(&store), ["Beijing", "Tokyo", "Los Angeles", "London"]);
    assert_eq!(store.get().time_format, TimeFormat::Hour24);
    assert_eq!(store.get().custom_format, DEFAULT_CUSTOM_FORMAT);
    assert_eq!(store.get().preferred_screen, None);
    assert_eq!(store.get().language, Language::System);
}

#[test]
fn saved_cities_reload_identically() {
    let mut store = PreferencesStore::load(MemoryStore::new());
    store.add_city(SelectedCity::new("Paris", "Europe/Paris"));
    store.add_city(SelectedCity::new("Sydney", "Australia/Sydney"));
    store.move_city(4, 0);
    let saved = store.cities().to_vec();

    let backend = store.backend().clone();
    let reloaded = PreferencesStore::load(backend);
    assert_eq!(reloaded.cities(), saved.as_slice());
}

#[test]
fn scalars_survive_a_reload() {
    let mut store = PreferencesStore::load(MemoryStore::new());
    store.set_time_format(TimeFormat::Custom);
    store.set_custom_format("MM/dd HH:mm");
    store.set_preferred_screen(Some(1));
    store.set_language(Language::Chinese);

    let reloaded = PreferencesStore::load(store.backend().clone());
    assert_eq!(reloaded.get(), store.get());
    assert_eq!(reloaded.effective_pattern(), "MM/dd HH:mm");
}

#[test]
fn stored_main_screen_is_minus_one() {
    let mut store = PreferencesStore::load(MemoryStore::new());
    store.set_preferred_screen(Some(0));
    store.set_preferred_screen(None);
    assert_eq!(store.backend().get_int(PREF_PREFERRED_SCREEN), Some(MAIN_SCREEN_INDEX));
}

#[test]
fn mutations_are_announced_on_the_bus() {
    let bus = EventBus::new();
    let mut store = PreferencesStore::load(MemoryStore::new()).with_publisher(bus.publisher());

    store.remove_city(0);
    store.set_time_format(TimeFormat::Short);
    store.set_preferred_screen(Some(1));

    assert_eq!(
        bus.drain(),
        vec![
            AppEvent::PreferencesChanged(PreferenceChange::Cities),
            AppEvent::PreferencesChanged(PreferenceChange::TimeFormat),
            AppEvent::PreferencesChanged(PreferenceChange::Screen),
        ]
    );
}
