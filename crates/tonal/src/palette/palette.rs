//! Palette construction.

use std::ops::Index;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::slot::ColorSlot;
use crate::mode::ColorMode;

/// Every [`ColorSlot`] resolved to a CSS color literal for one mode.
///
/// A palette is complete by construction: it is produced in one pass over
/// [`ColorSlot::ALL`] and offers no way to remove or change a slot.
///
/// # Example
///
/// ```rust
/// use tonal::{build_palette, ColorMode, ColorSlot};
///
/// let light = build_palette(ColorMode::Light);
/// assert_eq!(&light[ColorSlot::Text1], "#000000");
///
/// let dark = build_palette(ColorMode::Dark);
/// assert_eq!(&dark[ColorSlot::Text1], "#FFFFFF");
/// assert_eq!(dark[ColorSlot::Green1], light[ColorSlot::Green1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    mode: ColorMode,
    colors: [&'static str; ColorSlot::COUNT],
}

/// Resolves every color slot for `mode`.
///
/// Pure and total: the same mode always yields an equal palette.
pub fn build_palette(mode: ColorMode) -> Palette {
    Palette {
        mode,
        colors: ColorSlot::ALL.map(|slot| slot.value().resolve(mode)),
    }
}

impl Palette {
    /// The mode this palette was built for.
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Returns the CSS color literal for `slot`.
    pub fn get(&self, slot: ColorSlot) -> &'static str {
        self.colors[slot.index()]
    }

    /// Iterates over `(slot, color)` pairs in [`ColorSlot::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorSlot, &'static str)> + '_ {
        ColorSlot::ALL.into_iter().zip(self.colors.iter().copied())
    }
}

impl Index<ColorSlot> for Palette {
    type Output = str;

    fn index(&self, slot: ColorSlot) -> &str {
        self.get(slot)
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ColorSlot::COUNT))?;
        for (slot, color) in self.iter() {
            map.serialize_entry(slot.name(), color)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_slot_defined_in_both_modes() {
        for mode in [ColorMode::Light, ColorMode::Dark] {
            let palette = build_palette(mode);
            assert_eq!(palette.iter().count(), ColorSlot::COUNT);
            for (slot, color) in palette.iter() {
                assert!(!color.is_empty(), "{slot} is empty in {mode} mode");
            }
        }
    }

    #[test]
    fn test_fixed_hues_identical_across_modes() {
        let light = build_palette(ColorMode::Light);
        let dark = build_palette(ColorMode::Dark);
        for slot in [
            ColorSlot::Red1,
            ColorSlot::Red2,
            ColorSlot::Green1,
            ColorSlot::Yellow1,
            ColorSlot::Yellow2,
            ColorSlot::Blue1,
            ColorSlot::White,
            ColorSlot::Black,
        ] {
            assert_eq!(light[slot], dark[slot], "{slot} differs between modes");
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(build_palette(ColorMode::Dark), build_palette(ColorMode::Dark));
        assert_eq!(build_palette(ColorMode::Light), build_palette(ColorMode::Light));
        assert_ne!(build_palette(ColorMode::Dark), build_palette(ColorMode::Light));
    }

    #[test]
    fn test_known_literals() {
        let light = build_palette(ColorMode::Light);
        assert_eq!(&light[ColorSlot::Bg2], "#F7F8FA");
        assert_eq!(&light[ColorSlot::Primary1], "#ff007a");
        assert_eq!(&light[ColorSlot::ModalBg], "rgba(0,0,0,0.3)");

        let dark = build_palette(ColorMode::Dark);
        assert_eq!(&dark[ColorSlot::Bg2], "#2C2F36");
        assert_eq!(&dark[ColorSlot::Primary5], "#153d6f70");
        assert_eq!(&dark[ColorSlot::PrimaryText1], "#6da8ff");
    }

    #[test]
    fn test_index_matches_get() {
        for mode in [ColorMode::Light, ColorMode::Dark] {
            let palette = build_palette(mode);
            for slot in ColorSlot::ALL {
                assert_eq!(&palette[slot], palette.get(slot));
            }
        }
    }

    #[test]
    fn test_palette_records_mode() {
        assert_eq!(build_palette(ColorMode::Dark).mode(), ColorMode::Dark);
    }

    #[test]
    fn test_serializes_as_slot_map() {
        let json = serde_json::to_value(build_palette(ColorMode::Light)).unwrap();
        let map = json.as_object().unwrap();
        assert_eq!(map.len(), ColorSlot::COUNT);
        assert_eq!(map["text1"], "#000000");
        assert_eq!(map["advancedBG"], "rgba(255,255,255,0.6)");
    }
}
