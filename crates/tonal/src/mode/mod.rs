//! Display mode input for theme derivation.
//!
//! This module provides:
//!
//! - [`ColorMode`]: Light or dark display mode
//! - [`ModeSource`]: Read-only capability that reports the current mode
//! - [`ModePreference`]: Serializable user preference (system, light or dark)
//! - [`SystemMode`]: Source backed by the operating system setting
//!
//! The mode itself is owned by the application. Theme derivation only reads
//! it through whatever [`ModeSource`] the caller injects.

mod preference;
mod source;

pub use preference::ModePreference;
pub use source::{from_fn, FnSource, ModeSource, SystemMode};

use serde::{Deserialize, Serialize};

/// The display mode a theme is derived for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    /// Returns `true` for [`ColorMode::Dark`].
    pub fn is_dark(self) -> bool {
        matches!(self, ColorMode::Dark)
    }

    /// Returns the opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }
}

/// Converts a dark-mode flag: `true` is dark, `false` is light.
impl From<bool> for ColorMode {
    fn from(dark_mode: bool) -> Self {
        if dark_mode {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorMode::Light => f.write_str("light"),
            ColorMode::Dark => f.write_str("dark"),
        }
    }
}
