//! Localisation: UI language selection and the string table.

use std::fmt;
use std::str::FromStr;

use crate::error::PrefsError;

/// The language chosen in settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// Follow the first preferred language of the system.
    #[default]
    System,
    English,
    Chinese,
}

/// The language strings are actually rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayLanguage {
    English,
    Chinese,
}

impl Language {
    /// All choices, in the order the settings picker lists them.
    pub const ALL: [Language; 3] = [Language::System, Language::English, Language::Chinese];

    /// Value stored in the defaults database.
    pub fn raw_value(self) -> &'static str {
        match self {
            Language::System => "system",
            Language::English => "en",
            Language::Chinese => "zh-Hans",
        }
    }

    /// Name shown in the language picker (not translated).
    pub fn picker_title(self) -> &'static str {
        match self {
            Language::System => "System / 跟随系统",
            Language::English => "English",
            Language::Chinese => "简体中文",
        }
    }

    /// Resolves `System` using the system's first preferred language tag
    /// (e.g. `zh-Hans-CN`, `en-US`).
    pub fn resolve(self, system_locale: Option<&str>) -> DisplayLanguage {
        match self {
            Language::English => DisplayLanguage::English,
            Language::Chinese => DisplayLanguage::Chinese,
            Language::System => match system_locale {
                Some(tag) if tag.starts_with("zh") => DisplayLanguage::Chinese,
                _ => DisplayLanguage::English,
            },
        }
    }
}

impl FromStr for Language {
    type Err = PrefsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.raw_value() == s)
            .ok_or_else(|| PrefsError::UnknownLanguage(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw_value())
    }
}

/// Keys of the string table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    AppName,
    Add,
    Cancel,

    // Status menu
    MenuShowHide,
    MenuSettings,
    MenuQuit,

    // Settings window
    SettingsTitle,
    TabCities,
    TabDisplay,

    // Cities tab
    CitiesTitle,
    CitiesAdd,
    CitiesDelete,
    CitiesMoveUp,
    CitiesMoveDown,
    CitiesResetToDefault,
    CitiesAddDescription,
    CitiesSelectCity,

    // Display tab
    DisplayTimeFormat,
    Format24h,
    Format12h,
    FormatShort,
    FormatCustom,
    CustomFormatPlaceholder,
    CustomFormatExamples,
    CustomFormatPreview,
    DisplayScreen,
    ScreenMain,
    ScreenNumbered,
    DisplayLanguage,
    RestoreDefaults,

    // Format examples
    Example24h,
    Example12h,
    ExampleDateTime,
    ExampleShortDate,
    ExampleTimeOnly,

    // Panel
    InvalidTimeZone,
}

/// Looks up the string for `key` in `lang`.
pub fn tr(key: Key, lang: DisplayLanguage) -> &'static str {
    use DisplayLanguage::{Chinese as Zh, English as En};

    match (key, lang) {
        (Key::AppName, _) => "Time Shifty",

        (Key::Add, En) => "Add",
        (Key::Add, Zh) => "添加",
        (Key::Cancel, En) => "Cancel",
        (Key::Cancel, Zh) => "取消",

        (Key::MenuShowHide, En) => "Show/Hide Window",
        (Key::MenuShowHide, Zh) => "显示/隐藏窗口",
        (Key::MenuSettings, En) => "Settings...",
        (Key::MenuSettings, Zh) => "设置...",
        (Key::MenuQuit, En) => "Quit",
        (Key::MenuQuit, Zh) => "退出",

        (Key::SettingsTitle, En) => "Time Shifty - Settings",
        (Key::SettingsTitle, Zh) => "Time Shifty - 设置",
        (Key::TabCities, En) => "Cities",
        (Key::TabCities, Zh) => "城市",
        (Key::TabDisplay, En) => "Display",
        (Key::TabDisplay, Zh) => "显示",

        (Key::CitiesTitle, En) => "Cities & Time Zones",
        (Key::CitiesTitle, Zh) => "城市和时区",
        (Key::CitiesAdd, En) => "Add City",
        (Key::CitiesAdd, Zh) => "添加城市",
        (Key::CitiesDelete, En) => "Delete",
        (Key::CitiesDelete, Zh) => "删除",
        (Key::CitiesMoveUp, En) => "Up",
        (Key::CitiesMoveUp, Zh) => "上移",
        (Key::CitiesMoveDown, En) => "Down",
        (Key::CitiesMoveDown, Zh) => "下移",
        (Key::CitiesResetToDefault, En) => "Reset to Default",
        (Key::CitiesResetToDefault, Zh) => "重置为默认",
        (Key::CitiesAddDescription, En) => "Cities sorted by time zone (UTC-12 to UTC+14)",
        (Key::CitiesAddDescription, Zh) => "城市按时区从早到晚排列（UTC-12 到 UTC+14）",
        (Key::CitiesSelectCity, En) => "Select City:",
        (Key::CitiesSelectCity, Zh) => "选择城市：",

        (Key::DisplayTimeFormat, En) => "Time Format",
        (Key::DisplayTimeFormat, Zh) => "时间格式",
        (Key::Format24h, En) => "24-Hour (14:30:00)",
        (Key::Format24h, Zh) => "24 小时制 (14:30:00)",
        (Key::Format12h, En) => "12-Hour (2:30:00 PM)",
        (Key::Format12h, Zh) => "12 小时制 (2:30:00 PM)",
        (Key::FormatShort, En) => "24-Hour - Short (14:30)",
        (Key::FormatShort, Zh) => "24 小时制 - 简短 (14:30)",
        (Key::FormatCustom, En) => "Custom Format",
        (Key::FormatCustom, Zh) => "自定义格式",
        (Key::CustomFormatPlaceholder, En) => "Format String",
        (Key::CustomFormatPlaceholder, Zh) => "格式字符串",
        (Key::CustomFormatExamples, En) => "Examples:",
        (Key::CustomFormatExamples, Zh) => "示例：",
        (Key::CustomFormatPreview, En) => "Preview:",
        (Key::CustomFormatPreview, Zh) => "预览：",
        (Key::DisplayScreen, En) => "Display Screen",
        (Key::DisplayScreen, Zh) => "显示屏幕",
        (Key::ScreenMain, En) => "Main Screen",
        (Key::ScreenMain, Zh) => "主屏幕",
        (Key::ScreenNumbered, En) => "Screen",
        (Key::ScreenNumbered, Zh) => "屏幕",
        (Key::DisplayLanguage, En) => "Language",
        (Key::DisplayLanguage, Zh) => "语言",
        (Key::RestoreDefaults, En) => "Restore Defaults",
        (Key::RestoreDefaults, Zh) => "恢复默认设置",

        (Key::Example24h, En) => "14:30:00 (24-hour)",
        (Key::Example24h, Zh) => "14:30:00 (24小时)",
        (Key::Example12h, En) => "2:30:00 PM (12-hour)",
        (Key::Example12h, Zh) => "2:30:00 PM (12小时)",
        (Key::ExampleDateTime, _) => "2026-01-15 14:30",
        (Key::ExampleShortDate, _) => "01/15 14:30",
        (Key::ExampleTimeOnly, En) => "14:30 (time only)",
        (Key::ExampleTimeOnly, Zh) => "14:30 (仅时分)",

        (Key::InvalidTimeZone, En) => "Invalid time zone",
        (Key::InvalidTimeZone, Zh) => "无效时区",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_resolves_from_locale_tag() {
        assert_eq!(
            Language::System.resolve(Some("zh-Hans-CN")),
            DisplayLanguage::Chinese
        );
        assert_eq!(
            Language::System.resolve(Some("en-GB")),
            DisplayLanguage::English
        );
        assert_eq!(Language::System.resolve(None), DisplayLanguage::English);
    }

    #[test]
    fn test_explicit_language_ignores_locale() {
        assert_eq!(
            Language::English.resolve(Some("zh-Hans")),
            DisplayLanguage::English
        );
        assert_eq!(Language::Chinese.resolve(None), DisplayLanguage::Chinese);
    }

    #[test]
    fn test_raw_value_parses_back() {
        for lang in Language::ALL {
            assert_eq!(lang.raw_value().parse::<Language>().unwrap(), lang);
        }
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_tr_switches_language() {
        assert_eq!(tr(Key::MenuQuit, DisplayLanguage::English), "Quit");
        assert_eq!(tr(Key::MenuQuit, DisplayLanguage::Chinese), "退出");
        assert_eq!(tr(Key::AppName, DisplayLanguage::Chinese), "Time Shifty");
    }
}
