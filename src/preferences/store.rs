//! Key-value backends for the preferences store.
//!
//! The app persists to NSUserDefaults (see the macOS storage module); tests
//! and non-macOS builds use [`MemoryStore`].

use std::collections::HashMap;

/// The subset of a defaults database the preferences need.
///
/// Getters return `None` when the key is absent or holds another type.
pub trait KeyValueStore {
    fn get_string(&self, key: &str) -> Option<String>;
    fn set_string(&mut self, key: &str, value: &str);

    fn get_data(&self, key: &str) -> Option<Vec<u8>>;
    fn set_data(&mut self, key: &str, value: &[u8]);

    fn get_int(&self, key: &str) -> Option<i64>;
    fn set_int(&mut self, key: &str, value: i64);
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum StoredValue {
    String(String),
    Data(Vec<u8>),
    Int(i64),
}

/// In-memory [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, StoredValue>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get_string(&self, key: &str) -> Option<String> {
        match self.values.get(key) {
            Some(StoredValue::String(s)) => Some(s.clone()),
            _ => None,
        }
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.values
            .insert(key.to_string(), StoredValue::String(value.to_string()));
    }

    fn get_data(&self, key: &str) -> Option<Vec<u8>> {
        match self.values.get(key) {
            Some(StoredValue::Data(d)) => Some(d.clone()),
            _ => None,
        }
    }

    fn set_data(&mut self, key: &str, value: &[u8]) {
        self.values
            .insert(key.to_string(), StoredValue::Data(value.to_vec()));
    }

    fn get_int(&self, key: &str) -> Option<i64> {
        match self.values.get(key) {
            Some(StoredValue::Int(n)) => Some(*n),
            _ => None,
        }
    }

    fn set_int(&mut self, key: &str, value: i64) {
        self.values.insert(key.to_string(), StoredValue::Int(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_getters_are_typed() {
        let mut store = MemoryStore::new();
        store.set_int("n", 3);
        store.set_string("s", "x");
        assert_eq!(store.get_int("n"), Some(3));
        assert_eq!(store.get_string("n"), None);
        assert_eq!(store.get_data("s"), None);
    }

    #[test]
    fn test_set_overwrites_previous_type() {
        let mut store = MemoryStore::new();
        assert!(!store.contains("k"));
        store.set_string("k", "x");
        store.set_int("k", 7);
        assert!(store.contains("k"));
        assert_eq!(store.get_int("k"), Some(7));
        assert_eq!(store.get_string("k"), None);
    }
}
