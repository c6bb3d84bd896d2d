//! Global stylesheets installed once by the web client.
//!
//! Two sheets are provided:
//!
//! - [`fixed_global_style`]: font stacks and element resets, independent of
//!   the display mode (links use the light palette's `blue1`)
//! - [`themed_global_style`]: root text and background colors for a given
//!   snapshot, followed by the overlay skin
//!
//! Both are embedded minijinja templates rendered against the serialized
//! [`ThemeSnapshot`]. The overlay skin is a static asset appended verbatim.

use minijinja::Environment;
use once_cell::sync::OnceCell;

use crate::mode::ColorMode;
use crate::style::{Css, GlobalStyleError};
use crate::theme::{build_theme, ThemeSnapshot};

const FIXED_TEMPLATE: &str = include_str!("../assets/fixed.css.j2");
const THEMED_TEMPLATE: &str = include_str!("../assets/themed.css.j2");

/// Literal class-name overrides for the overlay skin.
pub const OVERLAY_STYLESHEET: &str = include_str!("../assets/overlay.css");

static FIXED_GLOBAL_STYLE: OnceCell<Css> = OnceCell::new();

/// Returns the mode-independent global stylesheet.
///
/// Rendered on first use and cached for the life of the process.
pub fn fixed_global_style() -> Result<&'static Css, GlobalStyleError> {
    FIXED_GLOBAL_STYLE.get_or_try_init(|| {
        render("fixed", FIXED_TEMPLATE, &build_theme(ColorMode::Light))
    })
}

/// Renders the themed global stylesheet for `theme`.
///
/// # Example
///
/// ```rust
/// use tonal::{build_theme, global, ColorMode};
///
/// let css = global::themed_global_style(&build_theme(ColorMode::Dark)).unwrap();
/// assert!(css.as_str().contains("background-color: #2C2F36;"));
/// ```
pub fn themed_global_style(theme: &ThemeSnapshot) -> Result<Css, GlobalStyleError> {
    let head = render("themed", THEMED_TEMPLATE, theme)?;
    let mut sheet = head.into_string();
    sheet.push('\n');
    sheet.push_str(OVERLAY_STYLESHEET);
    Ok(Css::from_string(sheet))
}

fn render(
    name: &'static str,
    source: &'static str,
    theme: &ThemeSnapshot,
) -> Result<Css, GlobalStyleError> {
    let wrap = |err: minijinja::Error| GlobalStyleError::Template { name, source: err };

    let mut env = Environment::new();
    env.add_template(name, source).map_err(wrap)?;
    let text = env
        .get_template(name)
        .and_then(|tmpl| tmpl.render(theme))
        .map_err(wrap)?;

    tracing::debug!(stylesheet = name, mode = %theme.mode(), bytes = text.len(), "rendered global stylesheet");
    Ok(Css::from_string(text))
}
