//! Capabilities that report the current display mode.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

use super::ColorMode;

/// A read-only view of the application's display mode.
///
/// The theme session polls this on every access and rebuilds its snapshot
/// only when the reported mode differs from the last one it saw. Sources
/// must be cheap to query; they never mutate the mode themselves.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use tonal::{ColorMode, ModeSource};
///
/// let flag = Cell::new(false);
/// assert_eq!(flag.color_mode(), ColorMode::Light);
///
/// flag.set(true);
/// assert_eq!(flag.color_mode(), ColorMode::Dark);
/// ```
pub trait ModeSource {
    /// Returns the mode the theme should currently be derived for.
    fn color_mode(&self) -> ColorMode;
}

impl ModeSource for ColorMode {
    fn color_mode(&self) -> ColorMode {
        *self
    }
}

impl ModeSource for bool {
    fn color_mode(&self) -> ColorMode {
        ColorMode::from(*self)
    }
}

impl ModeSource for Cell<ColorMode> {
    fn color_mode(&self) -> ColorMode {
        self.get()
    }
}

impl ModeSource for Cell<bool> {
    fn color_mode(&self) -> ColorMode {
        ColorMode::from(self.get())
    }
}

impl<T: ModeSource + ?Sized> ModeSource for &T {
    fn color_mode(&self) -> ColorMode {
        (**self).color_mode()
    }
}

impl<T: ModeSource + ?Sized> ModeSource for Rc<T> {
    fn color_mode(&self) -> ColorMode {
        (**self).color_mode()
    }
}

impl<T: ModeSource + ?Sized> ModeSource for Arc<T> {
    fn color_mode(&self) -> ColorMode {
        (**self).color_mode()
    }
}

/// A [`ModeSource`] backed by a closure.
///
/// Created with [`from_fn`].
#[derive(Clone)]
pub struct FnSource<F> {
    f: F,
}

impl<F> std::fmt::Debug for FnSource<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnSource").finish_non_exhaustive()
    }
}

impl<F: Fn() -> ColorMode> ModeSource for FnSource<F> {
    fn color_mode(&self) -> ColorMode {
        (self.f)()
    }
}

/// Wraps a closure as a [`ModeSource`].
///
/// Useful when the mode lives in an application store that exposes a getter.
///
/// ```rust
/// use tonal::{mode, ColorMode, ModeSource};
///
/// let source = mode::from_fn(|| ColorMode::Dark);
/// assert!(source.color_mode().is_dark());
/// ```
pub fn from_fn<F: Fn() -> ColorMode>(f: F) -> FnSource<F> {
    FnSource { f }
}

/// Reports the operating system's light/dark setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemMode;

impl ModeSource for SystemMode {
    fn color_mode(&self) -> ColorMode {
        let mode = match detect_os_theme() {
            OsThemeMode::Dark => ColorMode::Dark,
            OsThemeMode::Light => ColorMode::Light,
        };
        tracing::trace!(%mode, "detected system color mode");
        mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_sources() {
        assert_eq!(ColorMode::Dark.color_mode(), ColorMode::Dark);
        assert_eq!(true.color_mode(), ColorMode::Dark);
        assert_eq!(false.color_mode(), ColorMode::Light);
    }

    #[test]
    fn test_cell_source_follows_updates() {
        let flag = Cell::new(ColorMode::Light);
        let source = &flag;
        assert_eq!(source.color_mode(), ColorMode::Light);

        flag.set(ColorMode::Dark);
        assert_eq!(source.color_mode(), ColorMode::Dark);
    }

    #[test]
    fn test_shared_pointer_sources() {
        let shared = Rc::new(Cell::new(true));
        let handle = Rc::clone(&shared);
        assert!(handle.color_mode().is_dark());

        shared.set(false);
        assert!(!handle.color_mode().is_dark());

        let arc: Arc<dyn ModeSource + Send + Sync> = Arc::new(ColorMode::Dark);
        assert!(arc.color_mode().is_dark());
    }

    #[test]
    fn test_fn_source() {
        let counter = Cell::new(0u8);
        let source = from_fn(|| {
            counter.set(counter.get() + 1);
            ColorMode::from(counter.get() % 2 == 0)
        });

        assert_eq!(source.color_mode(), ColorMode::Light);
        assert_eq!(source.color_mode(), ColorMode::Dark);
    }
}
