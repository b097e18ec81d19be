#![forbid(unsafe_code)]

//! Layout solvers.
//!
//! Two pure decisions live here:
//!
//! - [`pagination::compute_window`]: which page tiles a pagination strip
//!   shows around the selected page, collapsing skipped runs into ellipses.
//! - [`placement::compute_placement`]: where a popup opens relative to its
//!   anchor so it stays inside the viewport.
//!
//! Both are total over their documented domains, allocate at most the
//! returned tile list, and keep no state between calls.

pub mod pagination;
pub mod placement;

pub use pagination::{PaginationError, Tile, compute_window};
pub use placement::{
    DropdownPlacement, HorizontalAlignment, Placement, PlacementCalculator, VerticalSide,
    compute_placement,
};
pub use sirio_core::geometry::{Offset, Rect, Size};
