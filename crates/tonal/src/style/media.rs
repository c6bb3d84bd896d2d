//! Max-width breakpoints and the wrappers built from them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::content::{Interpolation, StyleContent};
use super::error::UnknownName;

/// A named maximum viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Breakpoint {
    /// Up to 500px.
    UpToExtraSmall,
    /// Up to 720px.
    UpToSmall,
    /// Up to 960px.
    UpToMedium,
    /// Up to 1280px.
    UpToLarge,
}

impl Breakpoint {
    /// Number of breakpoints.
    pub const COUNT: usize = 4;

    /// Every breakpoint, narrowest first.
    pub const ALL: [Breakpoint; Breakpoint::COUNT] = [
        Breakpoint::UpToExtraSmall,
        Breakpoint::UpToSmall,
        Breakpoint::UpToMedium,
        Breakpoint::UpToLarge,
    ];

    /// The largest viewport width, in pixels, this breakpoint applies to.
    pub fn max_width(self) -> u32 {
        match self {
            Breakpoint::UpToExtraSmall => 500,
            Breakpoint::UpToSmall => 720,
            Breakpoint::UpToMedium => 960,
            Breakpoint::UpToLarge => 1280,
        }
    }

    /// The stable identifier of this breakpoint.
    pub fn name(self) -> &'static str {
        match self {
            Breakpoint::UpToExtraSmall => "upToExtraSmall",
            Breakpoint::UpToSmall => "upToSmall",
            Breakpoint::UpToMedium => "upToMedium",
            Breakpoint::UpToLarge => "upToLarge",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Breakpoint {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Breakpoint::ALL
            .into_iter()
            .find(|bp| bp.name() == s)
            .ok_or_else(|| UnknownName::new("breakpoint", s))
    }
}

/// Wraps style content in an `@media (max-width: ...)` guard.
///
/// # Example
///
/// ```rust
/// use tonal::{build_theme, Breakpoint, ColorMode, MediaQuery};
///
/// let query = MediaQuery::new(Breakpoint::UpToSmall);
/// let content = query.wrap("padding: 0;");
///
/// let css = content.render(&build_theme(ColorMode::Light));
/// assert_eq!(css.as_str(), "@media (max-width: 720px) {\n  padding: 0;\n}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaQuery {
    breakpoint: Breakpoint,
}

impl MediaQuery {
    /// Creates the wrapper for `breakpoint`.
    pub fn new(breakpoint: Breakpoint) -> Self {
        Self { breakpoint }
    }

    /// The breakpoint this wrapper guards on.
    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    /// The media condition, e.g. `(max-width: 500px)`.
    pub fn condition(&self) -> String {
        format!("(max-width: {}px)", self.breakpoint.max_width())
    }

    /// Guards `content` so it only applies up to this breakpoint's width.
    ///
    /// The content is forwarded unchanged; it may itself be interpolated,
    /// theme-dependent, or another wrapper.
    pub fn wrap(&self, content: impl Into<StyleContent>) -> StyleContent {
        StyleContent::from_iter([
            Interpolation::from(format!("@media {} {{\n  ", self.condition())),
            Interpolation::Content(content.into()),
            Interpolation::from("\n}"),
        ])
    }
}

/// One [`MediaQuery`] per [`Breakpoint`].
///
/// Built from [`Breakpoint::ALL`], so every breakpoint always has exactly
/// one wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaWidths {
    queries: [MediaQuery; Breakpoint::COUNT],
}

impl MediaWidths {
    /// Builds one wrapper per breakpoint.
    pub fn new() -> Self {
        Self {
            queries: Breakpoint::ALL.map(MediaQuery::new),
        }
    }

    /// Returns the wrapper for `breakpoint`.
    pub fn get(&self, breakpoint: Breakpoint) -> &MediaQuery {
        &self.queries[breakpoint.index()]
    }

    /// Iterates over the wrappers, narrowest first.
    pub fn iter(&self) -> impl Iterator<Item = &MediaQuery> {
        self.queries.iter()
    }

    /// Wrapper for [`Breakpoint::UpToExtraSmall`] (500px).
    pub fn up_to_extra_small(&self) -> &MediaQuery {
        self.get(Breakpoint::UpToExtraSmall)
    }

    /// Wrapper for [`Breakpoint::UpToSmall`] (720px).
    pub fn up_to_small(&self) -> &MediaQuery {
        self.get(Breakpoint::UpToSmall)
    }

    /// Wrapper for [`Breakpoint::UpToMedium`] (960px).
    pub fn up_to_medium(&self) -> &MediaQuery {
        self.get(Breakpoint::UpToMedium)
    }

    /// Wrapper for [`Breakpoint::UpToLarge`] (1280px).
    pub fn up_to_large(&self) -> &MediaQuery {
        self.get(Breakpoint::UpToLarge)
    }
}

impl Default for MediaWidths {
    fn default() -> Self {
        Self::new()
    }
}
