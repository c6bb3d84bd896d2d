//! Style content variants and their rendering.

use std::borrow::Cow;
use std::fmt::Write as _;
use std::sync::Arc;

use serde::Serialize;

use crate::palette::ColorSlot;
use crate::theme::ThemeSnapshot;

/// Rendered CSS text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Css(String);

impl Css {
    /// Returns the rendered text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value and returns the rendered text.
    pub fn into_string(self) -> String {
        self.0
    }

    pub(crate) fn from_string(text: String) -> Self {
        Self(text)
    }
}

impl std::fmt::Display for Css {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Css {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

type ThemeFn = dyn Fn(&ThemeSnapshot) -> StyleContent + Send + Sync;

/// A block of style declarations.
///
/// Content comes in three shapes, all of which can be nested inside each
/// other and rendered with [`StyleContent::render`]:
///
/// - [`Literal`](StyleContent::Literal): fixed text
/// - [`Interpolated`](StyleContent::Interpolated): text mixed with values
///   looked up at render time
/// - [`Themed`](StyleContent::Themed): a function of the active theme
///
/// # Example
///
/// ```rust
/// use tonal::{build_theme, ColorMode, ColorSlot, Interpolation, StyleContent};
///
/// let border = StyleContent::from_iter([
///     Interpolation::from("border: 1px solid "),
///     Interpolation::Color(ColorSlot::Bg3),
///     Interpolation::from(";"),
/// ]);
///
/// let theme = build_theme(ColorMode::Dark);
/// assert_eq!(border.render(&theme).as_str(), "border: 1px solid #40444F;");
/// ```
#[derive(Clone)]
pub enum StyleContent {
    Literal(Cow<'static, str>),
    Interpolated(Vec<Interpolation>),
    Themed(Arc<ThemeFn>),
}

/// One piece of [`StyleContent::Interpolated`].
#[derive(Debug, Clone)]
pub enum Interpolation {
    /// Text copied verbatim.
    Text(Cow<'static, str>),
    /// A palette color, resolved against the active theme.
    Color(ColorSlot),
    /// A pixel length, rendered as `{n}px`.
    Px(u32),
    /// Nested content, rendered in place.
    Content(StyleContent),
}

impl StyleContent {
    /// Fixed text content.
    pub fn literal(text: impl Into<Cow<'static, str>>) -> Self {
        StyleContent::Literal(text.into())
    }

    /// Content computed from the active theme each time it is rendered.
    pub fn themed<F>(f: F) -> Self
    where
        F: Fn(&ThemeSnapshot) -> StyleContent + Send + Sync + 'static,
    {
        StyleContent::Themed(Arc::new(f))
    }

    /// Renders this content against `theme`.
    pub fn render(&self, theme: &ThemeSnapshot) -> Css {
        let mut out = String::new();
        self.write_into(&mut out, theme);
        Css(out)
    }

    fn write_into(&self, out: &mut String, theme: &ThemeSnapshot) {
        match self {
            StyleContent::Literal(text) => out.push_str(text),
            StyleContent::Interpolated(parts) => {
                for part in parts {
                    match part {
                        Interpolation::Text(text) => out.push_str(text),
                        Interpolation::Color(slot) => out.push_str(theme.color(*slot)),
                        Interpolation::Px(px) => {
                            // Writing to a String cannot fail.
                            let _ = write!(out, "{px}px");
                        }
                        Interpolation::Content(content) => content.write_into(out, theme),
                    }
                }
            }
            StyleContent::Themed(f) => f(theme).write_into(out, theme),
        }
    }
}

impl std::fmt::Debug for StyleContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleContent::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            StyleContent::Interpolated(parts) => f.debug_tuple("Interpolated").field(parts).finish(),
            StyleContent::Themed(_) => f.write_str("Themed(..)"),
        }
    }
}

impl From<&'static str> for StyleContent {
    fn from(text: &'static str) -> Self {
        StyleContent::Literal(Cow::Borrowed(text))
    }
}

impl From<String> for StyleContent {
    fn from(text: String) -> Self {
        StyleContent::Literal(Cow::Owned(text))
    }
}

impl From<Css> for StyleContent {
    fn from(css: Css) -> Self {
        StyleContent::Literal(Cow::Owned(css.0))
    }
}

impl FromIterator<Interpolation> for StyleContent {
    fn from_iter<I: IntoIterator<Item = Interpolation>>(iter: I) -> Self {
        StyleContent::Interpolated(iter.into_iter().collect())
    }
}

impl From<&'static str> for Interpolation {
    fn from(text: &'static str) -> Self {
        Interpolation::Text(Cow::Borrowed(text))
    }
}

impl From<String> for Interpolation {
    fn from(text: String) -> Self {
        Interpolation::Text(Cow::Owned(text))
    }
}

impl From<ColorSlot> for Interpolation {
    fn from(slot: ColorSlot) -> Self {
        Interpolation::Color(slot)
    }
}

impl From<StyleContent> for Interpolation {
    fn from(content: StyleContent) -> Self {
        Interpolation::Content(content)
    }
}
