//! Pre-styled text variants.
//!
//! A [`TextVariant`] bundles a font weight, optional size and style, and a
//! color slot. Callers resolve it with their own [`TextProps`] overrides into
//! a [`TextStyle`], then render that against the active theme.

mod variant;

pub use variant::{FontStyle, TextProps, TextStyle, TextVariant};
