//! Style content composition and responsive breakpoints.
//!
//! This module provides the styling primitives the theme is built from:
//!
//! - [`StyleContent`]: a block of declarations that is literal, interpolated,
//!   or computed from the active theme
//! - [`Css`]: rendered output of any [`StyleContent`]
//! - [`Breakpoint`], [`MediaQuery`], [`MediaWidths`]: max-width guards
//! - [`UnknownName`], [`GlobalStyleError`]: errors at the API boundary
//!
//! All content shapes render through the single [`StyleContent::render`]
//! operator, so wrappers such as media queries accept any of them.

mod content;
mod error;
mod media;

pub use content::{Css, Interpolation, StyleContent};
pub use error::{GlobalStyleError, UnknownName};
pub use media::{Breakpoint, MediaQuery, MediaWidths};
