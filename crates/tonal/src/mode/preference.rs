//! User-facing mode preference.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::source::{ModeSource, SystemMode};
use super::ColorMode;
use crate::style::UnknownName;

/// How the application chooses its display mode.
///
/// This is the shape to read from an application's own settings file or
/// command-line flags. `System` follows the operating system setting;
/// `Light` and `Dark` pin the mode.
///
/// # Example
///
/// ```rust
/// use tonal::{ColorMode, ModePreference, ModeSource};
///
/// let pref: ModePreference = "dark".parse().unwrap();
/// assert_eq!(pref.color_mode(), ColorMode::Dark);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ModePreference {
    #[default]
    System,
    Light,
    Dark,
}

impl ModeSource for ModePreference {
    fn color_mode(&self) -> ColorMode {
        match self {
            ModePreference::System => SystemMode.color_mode(),
            ModePreference::Light => ColorMode::Light,
            ModePreference::Dark => ColorMode::Dark,
        }
    }
}

impl From<ColorMode> for ModePreference {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Light => ModePreference::Light,
            ColorMode::Dark => ModePreference::Dark,
        }
    }
}

impl FromStr for ModePreference {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" | "auto" => Ok(ModePreference::System),
            "light" => Ok(ModePreference::Light),
            "dark" => Ok(ModePreference::Dark),
            _ => Err(UnknownName::new("mode preference", s)),
        }
    }
}

/// Settings files accept the same spellings as [`FromStr`].
impl TryFrom<String> for ModePreference {
    type Error = UnknownName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Settings {
        #[serde(default)]
        mode: ModePreference,
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Dark".parse::<ModePreference>(), Ok(ModePreference::Dark));
        assert_eq!(" light ".parse::<ModePreference>(), Ok(ModePreference::Light));
        assert_eq!("auto".parse::<ModePreference>(), Ok(ModePreference::System));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "dusk".parse::<ModePreference>().unwrap_err();
        assert!(err.to_string().contains("dusk"));
        assert!(err.to_string().contains("mode preference"));
    }

    #[test]
    fn test_pinned_preferences_ignore_system() {
        assert_eq!(ModePreference::Light.color_mode(), ColorMode::Light);
        assert_eq!(ModePreference::Dark.color_mode(), ColorMode::Dark);
    }

    #[test]
    fn test_settings_from_yaml() {
        let settings: Settings = serde_yaml::from_str("mode: dark\n").unwrap();
        assert_eq!(settings.mode, ModePreference::Dark);
    }

    #[test]
    fn test_settings_accept_parse_spellings() {
        let settings: Settings = serde_yaml::from_str("mode: auto\n").unwrap();
        assert_eq!(settings.mode, ModePreference::System);

        let settings: Settings = serde_yaml::from_str("mode: Dark\n").unwrap();
        assert_eq!(settings.mode, ModePreference::Dark);

        let settings: Settings = serde_json::from_str(r#"{"mode": " LIGHT "}"#).unwrap();
        assert_eq!(settings.mode, ModePreference::Light);
    }

    #[test]
    fn test_settings_reject_unknown_mode() {
        let err = serde_yaml::from_str::<Settings>("mode: dusk\n").unwrap_err();
        assert!(err.to_string().contains("dusk"));
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ModePreference::Dark).unwrap(),
            "\"dark\""
        );
    }

    #[test]
    fn test_settings_default_is_system() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.mode, ModePreference::System);
    }

    #[test]
    fn test_from_color_mode() {
        assert_eq!(ModePreference::from(ColorMode::Dark), ModePreference::Dark);
    }
}
