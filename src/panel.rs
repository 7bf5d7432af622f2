//! What the floating panel draws: one row per selected city.
//!
//! The AppKit view asks for [`panel_rows`] on every clock tick and lays the
//! rows out with [`row_rect`]. Rows are stacked top-down in a flipped view.

use chrono::{DateTime, Utc};

use crate::clock::ClockFormatter;
use crate::directory::CityDirectory;
use crate::model::constants::{CITY_ROW_HEIGHT, CONTENT_SPACING, ROW_HORIZONTAL_INSET};
use crate::model::SelectedCity;
use crate::placement::{Point, Size};

/// A rendered panel row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRow {
    /// Localized city name, drawn on the left.
    pub name: String,
    /// Wall-clock text, drawn right-aligned.
    pub time: String,
}

/// Rows for `cities` at `instant`, in selection order.
pub fn panel_rows(
    cities: &[SelectedCity],
    formatter: &ClockFormatter,
    directory: &CityDirectory,
    instant: DateTime<Utc>,
) -> Vec<PanelRow> {
    cities
        .iter()
        .map(|city| PanelRow {
            name: directory.localized_name(city).to_string(),
            time: formatter.display(&city.time_zone_identifier, instant, directory.language()),
        })
        .collect()
}

/// Frame of row `index` inside a flipped panel of width `panel_width`.
pub fn row_rect(index: usize, panel_width: f64) -> (Point, Size) {
    let y = index as f64 * (CITY_ROW_HEIGHT + CONTENT_SPACING);
    (
        Point::new(ROW_HORIZONTAL_INSET, y),
        Size::new(panel_width - 2.0 * ROW_HORIZONTAL_INSET, CITY_ROW_HEIGHT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::TimeFormat;
    use crate::i18n::DisplayLanguage;
    use crate::placement::window_height;
    use chrono::TimeZone;

    #[test]
    fn test_rows_follow_selection_order_and_language() {
        let cities = vec![
            SelectedCity::new("Tokyo", "Asia/Tokyo"),
            SelectedCity::new("Moon Base", "Moon/Base"),
        ];
        let formatter = ClockFormatter::for_format(TimeFormat::Short, "");
        let instant = Utc.with_ymd_and_hms(2026, 1, 15, 6, 30, 0).unwrap();

        let rows = panel_rows(
            &cities,
            &formatter,
            &CityDirectory::new(DisplayLanguage::Chinese),
            instant,
        );
        assert_eq!(
            rows,
            vec![
                PanelRow {
                    name: "东京".into(),
                    time: "15:30".into()
                },
                PanelRow {
                    name: "Moon Base".into(),
                    time: "无效时区".into()
                },
            ]
        );
    }

    #[test]
    fn test_last_row_ends_at_panel_height() {
        for n in 1..6 {
            let (origin, size) = row_rect(n - 1, 300.0);
            assert_eq!(origin.y + size.height, window_height(n));
        }
        let (origin, size) = row_rect(0, 300.0);
        assert_eq!(origin.x, 20.0);
        assert_eq!(size.width, 260.0);
    }
}
