//! Mode-keyed color palettes.
//!
//! - [`ColorSlot`]: the closed set of named color roles
//! - [`SlotValue`]: a slot's literal, fixed or toggled by mode
//! - [`Palette`]: every slot resolved for one mode
//! - [`build_palette`]: derives a [`Palette`] from a [`ColorMode`](crate::ColorMode)

#[allow(clippy::module_inception)]
mod palette;
mod slot;

pub use palette::{build_palette, Palette};
pub use slot::{ColorSlot, SlotValue};
