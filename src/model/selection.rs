//! A city the user picked for the panel.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::constants::DEFAULT_CITIES;

/// One entry of the user's ordered city selection.
///
/// Serialized with the same field names the defaults database has always
/// used, so existing selections survive upgrades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedCity {
    pub id: Uuid,
    pub city_name: String,
    pub time_zone_identifier: String,
}

impl SelectedCity {
    /// Creates an entry with a fresh random id.
    pub fn new(city_name: impl Into<String>, time_zone_identifier: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            city_name: city_name.into(),
            time_zone_identifier: time_zone_identifier.into(),
        }
    }
}

/// The selection used on first launch and after a reset.
pub fn default_selection() -> Vec<SelectedCity> {
    DEFAULT_CITIES
        .iter()
        .map(|(name, tz)| SelectedCity::new(*name, *tz))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let city = SelectedCity::new("Tokyo", "Asia/Tokyo");
        let json = serde_json::to_string(&city).unwrap();
        assert!(json.contains("\"cityName\":\"Tokyo\""));
        assert!(json.contains("\"timeZoneIdentifier\":\"Asia/Tokyo\""));
    }

    #[test]
    fn test_decodes_uppercase_uuid() {
        let json = r#"{"id":"6F1C2D3E-4A5B-4C6D-8E9F-0A1B2C3D4E5F","cityName":"Paris","timeZoneIdentifier":"Europe/Paris"}"#;
        let city: SelectedCity = serde_json::from_str(json).unwrap();
        assert_eq!(city.city_name, "Paris");
        assert_eq!(city.time_zone_identifier, "Europe/Paris");
    }

    #[test]
    fn test_default_selection_has_four_cities_with_unique_ids() {
        let cities = default_selection();
        assert_eq!(cities.len(), 4);
        assert_eq!(cities[0].city_name, "Beijing");
        assert_eq!(cities[3].time_zone_identifier, "Europe/London");
        assert_ne!(cities[0].id, cities[1].id);
    }
}
