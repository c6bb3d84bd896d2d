//! Theme snapshots and the session that memoizes them.
//!
//! - [`build_theme`]: derives a complete [`ThemeSnapshot`] for one mode
//! - [`ThemeSession`]: publishes the snapshot for the current mode,
//!   rebuilding only when the mode changes
//! - [`Grids`]: fixed spacing constants

mod session;
mod snapshot;

pub use session::ThemeSession;
pub use snapshot::{build_theme, Grids, ThemeSnapshot};
