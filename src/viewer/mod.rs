//! Slideshow viewer state.
//!
//! Pure state, no rendering: the `ui` module draws whatever these types hold.

/// Event image lookup with extension fallback
pub mod assets;
/// Sorted grid ordering over the event catalogue
pub mod grid;
/// Cursor and overlay state machine
pub mod navigation;

pub use assets::{EventImage, ImageLookup};
pub use grid::{locale_compare, sort_events, GridSorter, SortBy, SortOrder};
pub use navigation::{NavKey, Navigator};
