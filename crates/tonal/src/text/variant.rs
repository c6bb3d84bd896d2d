//! Text variant catalog and resolution.

use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::palette::ColorSlot;
use crate::style::{Css, UnknownName};
use crate::theme::ThemeSnapshot;

/// CSS `font-style`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Normal,
    Italic,
    Oblique,
}

impl FontStyle {
    /// The CSS keyword for this style.
    pub fn as_css(self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
            FontStyle::Oblique => "oblique",
        }
    }
}

/// Caller overrides applied on top of a variant's preset.
///
/// Any field that is set wins over the preset value. `error` is only read
/// by [`TextVariant::Error`].
///
/// # Example
///
/// ```rust
/// use tonal::{ColorSlot, TextProps, TextVariant};
///
/// let style = TextVariant::Error.resolve(&TextProps::new().error(true));
/// assert_eq!(style.color, Some(ColorSlot::Red1));
///
/// let style = TextVariant::Error.resolve(&TextProps::new().error(true).color(ColorSlot::Text1));
/// assert_eq!(style.color, Some(ColorSlot::Text1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextProps {
    pub font_weight: Option<u16>,
    /// Font size in pixels.
    pub font_size: Option<u16>,
    pub font_style: Option<FontStyle>,
    pub color: Option<ColorSlot>,
    /// Selects `red1` over `text2` for [`TextVariant::Error`].
    pub error: bool,
}

impl TextProps {
    /// Overrides nothing; every preset value applies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the font weight.
    pub fn weight(mut self, weight: u16) -> Self {
        self.font_weight = Some(weight);
        self
    }

    /// Font size in pixels.
    pub fn size(mut self, size: u16) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Overrides the font style.
    pub fn style(mut self, style: FontStyle) -> Self {
        self.font_style = Some(style);
        self
    }

    /// Overrides the color slot.
    pub fn color(mut self, slot: ColorSlot) -> Self {
        self.color = Some(slot);
        self
    }

    /// Sets the flag read by [`TextVariant::Error`].
    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }
}

/// A fully resolved text style request.
///
/// `None` for size, style or color means the value is inherited from the
/// surrounding element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// CSS `font-weight`.
    pub font_weight: u16,
    /// Font size in pixels.
    pub font_size: Option<u16>,
    pub font_style: Option<FontStyle>,
    /// Palette slot for `color`.
    pub color: Option<ColorSlot>,
}

impl TextStyle {
    const fn weighted(font_weight: u16) -> Self {
        Self {
            font_weight,
            font_size: None,
            font_style: None,
            color: None,
        }
    }

    const fn sized(mut self, size: u16) -> Self {
        self.font_size = Some(size);
        self
    }

    const fn colored(mut self, slot: ColorSlot) -> Self {
        self.color = Some(slot);
        self
    }

    /// Renders the declarations for this style, resolving the color slot
    /// against `theme`.
    pub fn to_css(&self, theme: &ThemeSnapshot) -> Css {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = write!(out, "font-weight: {};", self.font_weight);
        if let Some(size) = self.font_size {
            let _ = write!(out, " font-size: {size}px;");
        }
        if let Some(style) = self.font_style {
            let _ = write!(out, " font-style: {};", style.as_css());
        }
        if let Some(slot) = self.color {
            let _ = write!(out, " color: {};", theme.color(slot));
        }
        Css::from_string(out)
    }
}

/// The catalog of named text presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextVariant {
    Main,
    Link,
    Black,
    White,
    Body,
    LargeHeader,
    MediumHeader,
    SubHeader,
    Small,
    Blue,
    Yellow,
    DarkGray,
    Gray,
    Italic,
    Error,
}

impl TextVariant {
    /// Every variant, in catalog order.
    pub const ALL: [TextVariant; 15] = [
        TextVariant::Main,
        TextVariant::Link,
        TextVariant::Black,
        TextVariant::White,
        TextVariant::Body,
        TextVariant::LargeHeader,
        TextVariant::MediumHeader,
        TextVariant::SubHeader,
        TextVariant::Small,
        TextVariant::Blue,
        TextVariant::Yellow,
        TextVariant::DarkGray,
        TextVariant::Gray,
        TextVariant::Italic,
        TextVariant::Error,
    ];

    /// The stable identifier of this variant.
    pub fn name(self) -> &'static str {
        match self {
            TextVariant::Main => "main",
            TextVariant::Link => "link",
            TextVariant::Black => "black",
            TextVariant::White => "white",
            TextVariant::Body => "body",
            TextVariant::LargeHeader => "largeHeader",
            TextVariant::MediumHeader => "mediumHeader",
            TextVariant::SubHeader => "subHeader",
            TextVariant::Small => "small",
            TextVariant::Blue => "blue",
            TextVariant::Yellow => "yellow",
            TextVariant::DarkGray => "darkGray",
            TextVariant::Gray => "gray",
            TextVariant::Italic => "italic",
            TextVariant::Error => "error",
        }
    }

    /// The preset before any caller overrides.
    ///
    /// `error` selects the color of [`TextVariant::Error`] and is ignored by
    /// every other variant.
    pub fn preset(self, error: bool) -> TextStyle {
        match self {
            TextVariant::Main => TextStyle::weighted(500).colored(ColorSlot::Text2),
            TextVariant::Link => TextStyle::weighted(500).colored(ColorSlot::Primary1),
            TextVariant::Black => TextStyle::weighted(500).colored(ColorSlot::Text1),
            TextVariant::White => TextStyle::weighted(500).colored(ColorSlot::White),
            TextVariant::Body => TextStyle::weighted(400).sized(16).colored(ColorSlot::Text1),
            TextVariant::LargeHeader => TextStyle::weighted(600).sized(24),
            TextVariant::MediumHeader => TextStyle::weighted(500).sized(20),
            TextVariant::SubHeader => TextStyle::weighted(400).sized(14),
            TextVariant::Small => TextStyle::weighted(500).sized(11),
            TextVariant::Blue => TextStyle::weighted(500).colored(ColorSlot::Primary1),
            TextVariant::Yellow => TextStyle::weighted(500).colored(ColorSlot::Yellow1),
            TextVariant::DarkGray => TextStyle::weighted(500).colored(ColorSlot::Text3),
            TextVariant::Gray => TextStyle::weighted(500).colored(ColorSlot::Bg3),
            TextVariant::Italic => TextStyle {
                font_style: Some(FontStyle::Italic),
                ..TextStyle::weighted(500).sized(12).colored(ColorSlot::Text2)
            },
            TextVariant::Error => TextStyle::weighted(500).colored(if error {
                ColorSlot::Red1
            } else {
                ColorSlot::Text2
            }),
        }
    }

    /// Resolves this variant with caller overrides; set overrides always win.
    pub fn resolve(self, overrides: &TextProps) -> TextStyle {
        let preset = self.preset(overrides.error);
        TextStyle {
            font_weight: overrides.font_weight.unwrap_or(preset.font_weight),
            font_size: overrides.font_size.or(preset.font_size),
            font_style: overrides.font_style.or(preset.font_style),
            color: overrides.color.or(preset.color),
        }
    }

    /// Resolves with `overrides` and renders against `theme`.
    pub fn css(self, overrides: &TextProps, theme: &ThemeSnapshot) -> Css {
        self.resolve(overrides).to_css(theme)
    }
}

impl std::fmt::Display for TextVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextVariant {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextVariant::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| UnknownName::new("text variant", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::ColorMode;
    use crate::theme::build_theme;
    use proptest::prelude::*;

    #[test]
    fn test_error_variant_follows_flag() {
        let on = TextVariant::Error.resolve(&TextProps::new().error(true));
        let off = TextVariant::Error.resolve(&TextProps::new().error(false));
        assert_eq!(on.color, Some(ColorSlot::Red1));
        assert_eq!(off.color, Some(ColorSlot::Text2));
        assert_eq!(on.font_weight, 500);
    }

    #[test]
    fn test_explicit_color_beats_error_flag() {
        let props = TextProps::new().error(true).color(ColorSlot::Text1);
        assert_eq!(
            TextVariant::Error.resolve(&props).color,
            Some(ColorSlot::Text1)
        );
    }

    #[test]
    fn test_white_and_black_use_base_slots() {
        assert_eq!(TextVariant::White.preset(false).color, Some(ColorSlot::White));
        assert_eq!(TextVariant::Black.preset(false).color, Some(ColorSlot::Text1));
    }

    #[test]
    fn test_error_flag_ignored_elsewhere() {
        let props = TextProps::new().error(true);
        assert_eq!(
            TextVariant::Main.resolve(&props),
            TextVariant::Main.resolve(&TextProps::new())
        );
    }

    #[test]
    fn test_presets() {
        let body = TextVariant::Body.preset(false);
        assert_eq!(body.font_weight, 400);
        assert_eq!(body.font_size, Some(16));
        assert_eq!(body.color, Some(ColorSlot::Text1));

        let header = TextVariant::LargeHeader.preset(false);
        assert_eq!(header.font_weight, 600);
        assert_eq!(header.font_size, Some(24));
        assert_eq!(header.color, None);

        let italic = TextVariant::Italic.preset(false);
        assert_eq!(italic.font_style, Some(FontStyle::Italic));
        assert_eq!(italic.font_size, Some(12));
        assert_eq!(italic.color, Some(ColorSlot::Text2));

        assert_eq!(TextVariant::Gray.preset(false).color, Some(ColorSlot::Bg3));
        assert_eq!(TextVariant::Yellow.preset(false).color, Some(ColorSlot::Yellow1));
    }

    #[test]
    fn test_overrides_merge_per_field() {
        let style = TextVariant::Body.resolve(&TextProps::new().weight(700));
        assert_eq!(style.font_weight, 700);
        assert_eq!(style.font_size, Some(16));
        assert_eq!(style.color, Some(ColorSlot::Text1));
    }

    #[test]
    fn test_to_css_resolves_against_theme() {
        let light = build_theme(ColorMode::Light);
        let dark = build_theme(ColorMode::Dark);
        let props = TextProps::new();

        assert_eq!(
            TextVariant::Body.css(&props, &light).as_str(),
            "font-weight: 400; font-size: 16px; color: #000000;"
        );
        assert_eq!(
            TextVariant::Body.css(&props, &dark).as_str(),
            "font-weight: 400; font-size: 16px; color: #FFFFFF;"
        );
        assert_eq!(
            TextVariant::Italic.css(&props, &light).as_str(),
            "font-weight: 500; font-size: 12px; font-style: italic; color: #565A69;"
        );
        assert_eq!(
            TextVariant::SubHeader.css(&props, &light).as_str(),
            "font-weight: 400; font-size: 14px;"
        );
    }

    #[test]
    fn test_every_preset_color_exists_in_both_modes() {
        let themes = [build_theme(ColorMode::Light), build_theme(ColorMode::Dark)];
        for variant in TextVariant::ALL {
            for error in [false, true] {
                if let Some(slot) = variant.preset(error).color {
                    for theme in &themes {
                        assert!(!theme.color(slot).is_empty());
                    }
                }
            }
        }
    }

    #[test]
    fn test_names_parse_back() {
        for variant in TextVariant::ALL {
            assert_eq!(variant.name().parse::<TextVariant>(), Ok(variant));
            assert_eq!(
                serde_json::to_string(&variant).unwrap(),
                format!("\"{}\"", variant.name())
            );
        }
        assert!("title".parse::<TextVariant>().is_err());
    }

    #[test]
    fn test_props_from_json() {
        let props: TextProps =
            serde_json::from_str(r#"{"error": true, "color": "text1", "fontSize": 18}"#).unwrap();
        assert_eq!(props, TextProps::new().error(true).color(ColorSlot::Text1).size(18));
    }

    proptest! {
        #[test]
        fn prop_explicit_overrides_win(
            variant in 0..TextVariant::ALL.len(),
            slot in 0..ColorSlot::COUNT,
            weight in 100u16..=900,
            error in any::<bool>(),
        ) {
            let variant = TextVariant::ALL[variant];
            let slot = ColorSlot::ALL[slot];
            let props = TextProps::new().error(error).color(slot).weight(weight);

            let style = variant.resolve(&props);
            prop_assert_eq!(style.color, Some(slot));
            prop_assert_eq!(style.font_weight, weight);
        }
    }
}
