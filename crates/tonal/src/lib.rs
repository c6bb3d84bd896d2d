//! # Tonal - light/dark theme derivation for web clients
//!
//! Tonal derives a complete visual theme from a single display-mode flag:
//! a palette of named color slots, spacing constants, responsive breakpoint
//! wrappers and reusable layout fragments. A [`ThemeSession`] memoizes the
//! theme per mode so consumers can compare snapshots by pointer.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::cell::Cell;
//! use tonal::{ColorSlot, TextProps, TextVariant, ThemeSession};
//!
//! // The application owns the mode; tonal only reads it.
//! let dark_mode = Cell::new(false);
//! let session = ThemeSession::new(&dark_mode);
//!
//! let theme = session.current();
//! assert_eq!(theme.color(ColorSlot::Text1), "#000000");
//!
//! let card = theme.media_width().up_to_small().wrap(theme.flex_column_no_wrap().clone());
//! assert!(card.render(&theme).as_str().starts_with("@media (max-width: 720px)"));
//!
//! let error = TextVariant::Error.css(&TextProps::new().error(true), &theme);
//! assert_eq!(error.as_str(), "font-weight: 500; color: #FF6871;");
//!
//! dark_mode.set(true);
//! assert_eq!(session.current().color(ColorSlot::Text1), "#FFFFFF");
//! ```
//!
//! ## Modules
//!
//! - [`mode`]: [`ColorMode`], the [`ModeSource`] capability and [`ModePreference`]
//! - [`palette`]: [`ColorSlot`] and [`build_palette`]
//! - [`style`]: [`StyleContent`] composition and [`Breakpoint`] wrappers
//! - [`theme`]: [`build_theme`] and [`ThemeSession`]
//! - [`text`]: the [`TextVariant`] catalog
//! - [`global`]: the global stylesheets

pub mod global;
pub mod mode;
pub mod palette;
pub mod style;
pub mod text;
pub mod theme;

pub use mode::{ColorMode, ModePreference, ModeSource, SystemMode};
pub use palette::{build_palette, ColorSlot, Palette, SlotValue};
pub use style::{
    Breakpoint, Css, GlobalStyleError, Interpolation, MediaQuery, MediaWidths, StyleContent,
    UnknownName,
};
pub use text::{FontStyle, TextProps, TextStyle, TextVariant};
pub use theme::{build_theme, Grids, ThemeSession, ThemeSnapshot};
