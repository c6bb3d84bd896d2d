//! Memoized theme for the current display mode.

use std::cell::RefCell;
use std::sync::Arc;

use super::snapshot::{build_theme, ThemeSnapshot};
use crate::mode::{ColorMode, ModeSource};

/// Publishes the theme snapshot for whatever mode `source` reports.
///
/// Each call to [`current`](ThemeSession::current) reads the mode once. If
/// it matches the last observed mode, the cached snapshot is returned
/// as the same `Arc`; otherwise exactly one new snapshot is built and
/// replaces the cache.
///
/// The session is meant to live on the rendering thread: it is not `Sync`.
/// The snapshots it hands out are, and may be shared freely.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::sync::Arc;
/// use tonal::{ColorMode, ThemeSession};
///
/// let dark_mode = Cell::new(false);
/// let session = ThemeSession::new(&dark_mode);
///
/// let first = session.current();
/// assert!(Arc::ptr_eq(&first, &session.current()));
///
/// dark_mode.set(true);
/// let toggled = session.current();
/// assert!(!Arc::ptr_eq(&first, &toggled));
/// assert_eq!(toggled.mode(), ColorMode::Dark);
/// ```
#[derive(Debug)]
pub struct ThemeSession<S> {
    source: S,
    cache: RefCell<Option<Arc<ThemeSnapshot>>>,
}

impl<S: ModeSource> ThemeSession<S> {
    /// Creates a session reading the mode from `source`.
    ///
    /// Nothing is built until the first call to [`current`](Self::current).
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: RefCell::new(None),
        }
    }

    /// Returns the snapshot for the source's current mode.
    pub fn current(&self) -> Arc<ThemeSnapshot> {
        let mode = self.source.color_mode();
        let mut cache = self.cache.borrow_mut();

        if let Some(snapshot) = cache.as_ref().filter(|s| s.mode() == mode) {
            tracing::trace!(%mode, "theme cache hit");
            return Arc::clone(snapshot);
        }

        tracing::debug!(%mode, "building theme snapshot");
        let snapshot = Arc::new(build_theme(mode));
        *cache = Some(Arc::clone(&snapshot));
        snapshot
    }

    /// The mode of the cached snapshot, if one has been built.
    pub fn mode(&self) -> Option<ColorMode> {
        self.cache.borrow().as_ref().map(|s| s.mode())
    }

    /// The injected mode source.
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: ModeSource + Default> Default for ThemeSession<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
