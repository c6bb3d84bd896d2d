//! Named color roles and their per-mode literals.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::mode::ColorMode;
use crate::style::UnknownName;

/// How a slot's literal depends on the display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotValue {
    /// Same literal in both modes.
    Fixed(&'static str),
    /// One literal per mode.
    Toggle {
        dark: &'static str,
        light: &'static str,
    },
}

impl SlotValue {
    /// Picks the literal for `mode`.
    pub fn resolve(self, mode: ColorMode) -> &'static str {
        match (self, mode) {
            (SlotValue::Fixed(color), _) => color,
            (SlotValue::Toggle { dark, .. }, ColorMode::Dark) => dark,
            (SlotValue::Toggle { light, .. }, ColorMode::Light) => light,
        }
    }

    /// Returns `true` if the literal does not depend on the mode.
    pub fn is_fixed(self) -> bool {
        matches!(self, SlotValue::Fixed(_))
    }
}

const WHITE: &str = "#FFFFFF";
const BLACK: &str = "#000000";

const fn toggle(dark: &'static str, light: &'static str) -> SlotValue {
    SlotValue::Toggle { dark, light }
}

/// A named logical color role, such as `text1` or `bg2`.
///
/// The set is closed: every theme defines every slot in both modes, so a
/// `ColorSlot` can always be resolved against any [`Palette`](super::Palette).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorSlot {
    // base
    White,
    Black,

    // text
    Text1,
    Text2,
    Text3,
    Text4,
    Text5,

    // backgrounds / greys
    Bg1,
    Bg2,
    Bg3,
    Bg4,
    Bg5,

    // specialty
    #[serde(rename = "modalBG")]
    ModalBg,
    #[serde(rename = "advancedBG")]
    AdvancedBg,

    // primary
    Primary1,
    Primary2,
    Primary3,
    Primary4,
    Primary5,
    PrimaryText1,

    // secondary
    Secondary1,
    Secondary2,
    Secondary3,

    // hues
    Red1,
    Red2,
    Green1,
    Yellow1,
    Yellow2,
    Blue1,
}

impl ColorSlot {
    /// Number of slots in every palette.
    pub const COUNT: usize = 29;

    /// Every slot, in declaration order.
    pub const ALL: [ColorSlot; ColorSlot::COUNT] = [
        ColorSlot::White,
        ColorSlot::Black,
        ColorSlot::Text1,
        ColorSlot::Text2,
        ColorSlot::Text3,
        ColorSlot::Text4,
        ColorSlot::Text5,
        ColorSlot::Bg1,
        ColorSlot::Bg2,
        ColorSlot::Bg3,
        ColorSlot::Bg4,
        ColorSlot::Bg5,
        ColorSlot::ModalBg,
        ColorSlot::AdvancedBg,
        ColorSlot::Primary1,
        ColorSlot::Primary2,
        ColorSlot::Primary3,
        ColorSlot::Primary4,
        ColorSlot::Primary5,
        ColorSlot::PrimaryText1,
        ColorSlot::Secondary1,
        ColorSlot::Secondary2,
        ColorSlot::Secondary3,
        ColorSlot::Red1,
        ColorSlot::Red2,
        ColorSlot::Green1,
        ColorSlot::Yellow1,
        ColorSlot::Yellow2,
        ColorSlot::Blue1,
    ];

    /// Position of this slot in [`ColorSlot::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The stable identifier of this slot.
    pub fn name(self) -> &'static str {
        match self {
            ColorSlot::White => "white",
            ColorSlot::Black => "black",
            ColorSlot::Text1 => "text1",
            ColorSlot::Text2 => "text2",
            ColorSlot::Text3 => "text3",
            ColorSlot::Text4 => "text4",
            ColorSlot::Text5 => "text5",
            ColorSlot::Bg1 => "bg1",
            ColorSlot::Bg2 => "bg2",
            ColorSlot::Bg3 => "bg3",
            ColorSlot::Bg4 => "bg4",
            ColorSlot::Bg5 => "bg5",
            ColorSlot::ModalBg => "modalBG",
            ColorSlot::AdvancedBg => "advancedBG",
            ColorSlot::Primary1 => "primary1",
            ColorSlot::Primary2 => "primary2",
            ColorSlot::Primary3 => "primary3",
            ColorSlot::Primary4 => "primary4",
            ColorSlot::Primary5 => "primary5",
            ColorSlot::PrimaryText1 => "primaryText1",
            ColorSlot::Secondary1 => "secondary1",
            ColorSlot::Secondary2 => "secondary2",
            ColorSlot::Secondary3 => "secondary3",
            ColorSlot::Red1 => "red1",
            ColorSlot::Red2 => "red2",
            ColorSlot::Green1 => "green1",
            ColorSlot::Yellow1 => "yellow1",
            ColorSlot::Yellow2 => "yellow2",
            ColorSlot::Blue1 => "blue1",
        }
    }

    /// The literal(s) this slot takes.
    pub fn value(self) -> SlotValue {
        match self {
            ColorSlot::White => SlotValue::Fixed(WHITE),
            ColorSlot::Black => SlotValue::Fixed(BLACK),

            ColorSlot::Text1 => toggle("#FFFFFF", "#000000"),
            ColorSlot::Text2 => toggle("#C3C5CB", "#565A69"),
            ColorSlot::Text3 => toggle("#6C7284", "#888D9B"),
            ColorSlot::Text4 => toggle("#565A69", "#C3C5CB"),
            ColorSlot::Text5 => toggle("#2C2F36", "#EDEEF2"),

            ColorSlot::Bg1 => toggle("#212429", "#FFFFFF"),
            ColorSlot::Bg2 => toggle("#2C2F36", "#F7F8FA"),
            ColorSlot::Bg3 => toggle("#40444F", "#EDEEF2"),
            ColorSlot::Bg4 => toggle("#565A69", "#CED0D9"),
            ColorSlot::Bg5 => toggle("#6C7284", "#888D9B"),

            ColorSlot::ModalBg => toggle("rgba(0,0,0,.425)", "rgba(0,0,0,0.3)"),
            ColorSlot::AdvancedBg => toggle("rgba(0,0,0,0.1)", "rgba(255,255,255,0.6)"),

            ColorSlot::Primary1 => toggle("#2172E5", "#ff007a"),
            ColorSlot::Primary2 => toggle("#3680E7", "#FF8CC3"),
            ColorSlot::Primary3 => toggle("#4D8FEA", "#FF99C9"),
            ColorSlot::Primary4 => toggle("#376bad70", "#F6DDE8"),
            ColorSlot::Primary5 => toggle("#153d6f70", "#FDEAF1"),
            ColorSlot::PrimaryText1 => toggle("#6da8ff", "#ff007a"),

            ColorSlot::Secondary1 => toggle("#2172E5", "#ff007a"),
            ColorSlot::Secondary2 => toggle("#17000b26", "#F6DDE8"),
            ColorSlot::Secondary3 => toggle("#17000b26", "#FDEAF1"),

            ColorSlot::Red1 => SlotValue::Fixed("#FF6871"),
            ColorSlot::Red2 => SlotValue::Fixed("#F82D3A"),
            ColorSlot::Green1 => SlotValue::Fixed("#27AE60"),
            ColorSlot::Yellow1 => SlotValue::Fixed("#FFE270"),
            ColorSlot::Yellow2 => SlotValue::Fixed("#F3841E"),
            ColorSlot::Blue1 => SlotValue::Fixed("#2172E5"),
        }
    }
}

impl std::fmt::Display for ColorSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSlot {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorSlot::ALL
            .into_iter()
            .find(|slot| slot.name() == s)
            .ok_or_else(|| UnknownName::new("color slot", s))
    }
}
