//! Theme snapshot construction.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::mode::ColorMode;
use crate::palette::{build_palette, ColorSlot, Palette};
use crate::style::{MediaWidths, StyleContent};

/// Spacing constants, in abstract grid units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Grids {
    /// Small spacing (8).
    pub sm: u32,
    /// Medium spacing (12).
    pub md: u32,
    /// Large spacing (24).
    pub lg: u32,
}

const GRIDS: Grids = Grids {
    sm: 8,
    md: 12,
    lg: 24,
};

const FLEX_COLUMN_NO_WRAP: &str = "display: flex;\nflex-flow: column nowrap;";
const FLEX_ROW_NO_WRAP: &str = "display: flex;\nflex-flow: row nowrap;";

/// Everything a style declaration may read from the theme, for one mode.
///
/// Snapshots are immutable. A different mode produces a new snapshot
/// rather than changing an existing one, so consumers holding an
/// `Arc<ThemeSnapshot>` can compare by pointer to detect a theme change.
///
/// When serialized, the palette slots appear as top-level keys next to
/// `mode`, `grids` and `shadow1`, which is the shape the global stylesheet
/// templates read.
#[derive(Debug, Clone)]
pub struct ThemeSnapshot {
    mode: ColorMode,
    palette: Palette,
    grids: Grids,
    shadow1: &'static str,
    media_width: MediaWidths,
    flex_column_no_wrap: StyleContent,
    flex_row_no_wrap: StyleContent,
}

/// Builds the complete theme for `mode`.
///
/// ```rust
/// use tonal::{build_theme, ColorMode, ColorSlot};
///
/// let theme = build_theme(ColorMode::Light);
/// assert_eq!(theme.color(ColorSlot::Text1), "#000000");
/// assert_eq!(theme.grids().md, 12);
/// assert_eq!(theme.shadow1(), "#2F80ED");
/// ```
pub fn build_theme(mode: ColorMode) -> ThemeSnapshot {
    ThemeSnapshot {
        mode,
        palette: build_palette(mode),
        grids: GRIDS,
        // Not a palette slot; the light value has no dark counterpart there.
        shadow1: match mode {
            ColorMode::Dark => "#000",
            ColorMode::Light => "#2F80ED",
        },
        media_width: MediaWidths::new(),
        flex_column_no_wrap: StyleContent::from(FLEX_COLUMN_NO_WRAP),
        flex_row_no_wrap: StyleContent::from(FLEX_ROW_NO_WRAP),
    }
}

impl ThemeSnapshot {
    /// The mode this snapshot was built for.
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Every color slot resolved for this mode.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Shorthand for `self.palette().get(slot)`.
    pub fn color(&self, slot: ColorSlot) -> &'static str {
        self.palette.get(slot)
    }

    /// Spacing constants.
    pub fn grids(&self) -> Grids {
        self.grids
    }

    /// Shadow color: `#000` in dark mode, `#2F80ED` in light mode.
    pub fn shadow1(&self) -> &'static str {
        self.shadow1
    }

    /// Breakpoint wrappers, one per [`Breakpoint`](crate::Breakpoint).
    pub fn media_width(&self) -> &MediaWidths {
        &self.media_width
    }

    /// `display: flex` laid out as a non-wrapping column.
    pub fn flex_column_no_wrap(&self) -> &StyleContent {
        &self.flex_column_no_wrap
    }

    /// `display: flex` laid out as a non-wrapping row.
    pub fn flex_row_no_wrap(&self) -> &StyleContent {
        &self.flex_row_no_wrap
    }
}

impl Serialize for ThemeSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ColorSlot::COUNT + 3))?;
        for (slot, color) in self.palette.iter() {
            map.serialize_entry(slot.name(), color)?;
        }
        map.serialize_entry("mode", &self.mode)?;
        map.serialize_entry("grids", &self.grids)?;
        map.serialize_entry("shadow1", self.shadow1)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Breakpoint;

    #[test]
    fn test_theme_uses_mode_palette() {
        let dark = build_theme(ColorMode::Dark);
        assert_eq!(dark.mode(), ColorMode::Dark);
        assert_eq!(dark.palette(), &build_palette(ColorMode::Dark));
        assert_eq!(dark.color(ColorSlot::Text1), "#FFFFFF");
    }

    #[test]
    fn test_shadow_branches_independently() {
        assert_eq!(build_theme(ColorMode::Dark).shadow1(), "#000");
        assert_eq!(build_theme(ColorMode::Light).shadow1(), "#2F80ED");
        assert_ne!(
            build_theme(ColorMode::Dark).shadow1(),
            build_theme(ColorMode::Light).shadow1()
        );
    }

    #[test]
    fn test_grids_are_fixed() {
        for mode in [ColorMode::Light, ColorMode::Dark] {
            assert_eq!(build_theme(mode).grids(), Grids { sm: 8, md: 12, lg: 24 });
        }
    }

    #[test]
    fn test_flex_fragments() {
        let theme = build_theme(ColorMode::Light);
        let column = theme.flex_column_no_wrap().render(&theme);
        let row = theme.flex_row_no_wrap().render(&theme);
        assert!(column.as_str().contains("display: flex;"));
        assert!(column.as_str().contains("flex-flow: column nowrap;"));
        assert!(row.as_str().contains("flex-flow: row nowrap;"));
    }

    #[test]
    fn test_media_width_covers_every_breakpoint() {
        let theme = build_theme(ColorMode::Dark);
        for bp in Breakpoint::ALL {
            assert_eq!(theme.media_width().get(bp).breakpoint(), bp);
        }
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(build_theme(ColorMode::Dark)).unwrap();
        assert_eq!(value["text1"], "#FFFFFF");
        assert_eq!(value["bg2"], "#2C2F36");
        assert_eq!(value["mode"], "dark");
        assert_eq!(value["grids"]["lg"], 24);
        assert_eq!(value["shadow1"], "#000");
    }
}
