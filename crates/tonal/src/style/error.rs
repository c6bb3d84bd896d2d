//! Errors raised at the edges of theme derivation.
//!
//! Deriving a theme never fails. These errors only appear when callers hand
//! in names from outside the type system or render the embedded stylesheets.

use thiserror::Error;

/// A name that does not match any entry of a closed catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{name}'")]
pub struct UnknownName {
    /// The catalog that was searched ("color slot", "breakpoint", ...)
    pub kind: &'static str,
    /// The name that was requested
    pub name: String,
}

impl UnknownName {
    pub(crate) fn new(kind: &'static str, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

/// Error returned when a global stylesheet template fails to render.
#[derive(Debug, Error)]
pub enum GlobalStyleError {
    /// The embedded template could not be compiled or rendered
    #[error("failed to render {name} stylesheet: {source}")]
    Template {
        name: &'static str,
        #[source]
        source: minijinja::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_name_display() {
        let err = UnknownName::new("color slot", "text9");
        let msg = err.to_string();
        assert!(msg.contains("color slot"));
        assert!(msg.contains("text9"));
    }

    #[test]
    fn test_global_style_error_display() {
        let err = GlobalStyleError::Template {
            name: "themed",
            source: minijinja::Error::new(minijinja::ErrorKind::UndefinedError, "missing"),
        };
        assert!(err.to_string().contains("themed"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
