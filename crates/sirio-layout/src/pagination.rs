#![forbid(unsafe_code)]

//! Pagination window computation.
//!
//! Given a page count, the selected page, and how many page tiles fit in the
//! strip, [`compute_window`] decides which tiles to show. The selected page
//! is kept as close to the middle as the edges allow, and skipped runs of
//! pages are collapsed into a single [`Tile::Ellipsis`] anchored by the
//! first or last page.
//!
//! ```
//! use sirio_layout::pagination::{Tile, compute_window};
//!
//! let tiles = compute_window(10, 4, 7).unwrap();
//! assert_eq!(
//!     tiles,
//!     vec![
//!         Tile::Number(0),
//!         Tile::Ellipsis,
//!         Tile::Number(3),
//!         Tile::Number(4),
//!         Tile::Number(5),
//!         Tile::Ellipsis,
//!         Tile::Number(9),
//!     ]
//! );
//! ```
//!
//! # Invariants
//!
//! 1. The selected page is always present as a `Number` tile.
//! 2. Tiles are in ascending page order and ellipses are never adjacent.
//! 3. When the strip is collapsed the tile count equals the slot budget.
//! 4. With five or more slots a collapsed strip starts at page 0 and ends at
//!    the last page. Smaller budgets only anchor an edge when doing so leaves
//!    the selected tile in place.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One rendered unit of a pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// A clickable page, zero-based.
    Number(usize),
    /// A non-interactive marker standing in for skipped pages.
    Ellipsis,
}

impl Tile {
    /// The page index, or `None` for an ellipsis.
    #[inline]
    pub const fn page(self) -> Option<usize> {
        match self {
            Self::Number(page) => Some(page),
            Self::Ellipsis => None,
        }
    }

    #[inline]
    pub const fn is_ellipsis(self) -> bool {
        matches!(self, Self::Ellipsis)
    }
}

impl fmt::Display for Tile {
    /// Pages are shown one-based.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(page) => write!(f, "{}", page + 1),
            Self::Ellipsis => f.write_str("…"),
        }
    }
}

/// Precondition violations of [`compute_window`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error(
        "invalid pagination arguments: selected page {selected_page} with {total_pages} total pages"
    )]
    InvalidArgument {
        total_pages: usize,
        selected_page: usize,
    },
}

/// Check the pagination preconditions without computing anything.
pub fn validate(total_pages: usize, selected_page: usize) -> Result<(), PaginationError> {
    if total_pages == 0 || selected_page >= total_pages {
        return Err(PaginationError::InvalidArgument {
            total_pages,
            selected_page,
        });
    }
    Ok(())
}

/// Compute the ordered tiles for a pagination strip.
///
/// `available_slots` counts page tiles only; the previous/next arrows are
/// not part of the budget. A budget of zero yields no tiles.
///
/// # Errors
///
/// [`PaginationError::InvalidArgument`] if `total_pages` is zero or
/// `selected_page` is not below it.
pub fn compute_window(
    total_pages: usize,
    selected_page: usize,
    available_slots: usize,
) -> Result<Vec<Tile>, PaginationError> {
    validate(total_pages, selected_page)?;

    if available_slots == 0 {
        return Ok(Vec::new());
    }
    if available_slots >= total_pages {
        return Ok((0..total_pages).map(Tile::Number).collect());
    }

    let last = total_pages - 1;
    let before = available_slots / 2;

    // Shift the centered window back inside [0, last]; it always spans
    // exactly `available_slots` pages.
    let start = selected_page
        .saturating_sub(before)
        .min(total_pages - available_slots);
    let end = start + available_slots - 1;

    let mut tiles: Vec<Tile> = (start..=end).map(Tile::Number).collect();
    let len = tiles.len();

    if start != 0 && selected_page - start >= 2 {
        tiles[0] = Tile::Number(0);
        tiles[1] = Tile::Ellipsis;
    }
    if end != last && end - selected_page >= 2 {
        tiles[len - 1] = Tile::Number(last);
        tiles[len - 2] = Tile::Ellipsis;
    }

    Ok(tiles)
}

#[cfg(test)]
mod tests {
    use super::Tile::{Ellipsis, Number};
    use super::*;

    fn window(total: usize, selected: usize, slots: usize) -> Vec<Tile> {
        compute_window(total, selected, slots).unwrap()
    }

    #[test]
    fn fits_without_collapsing() {
        assert_eq!(
            window(4, 2, 7),
            vec![Number(0), Number(1), Number(2), Number(3)]
        );
        assert_eq!(window(5, 0, 5).len(), 5);
    }

    #[test]
    fn centered_window_collapses_both_sides() {
        assert_eq!(
            window(10, 4, 7),
            vec![
                Number(0),
                Ellipsis,
                Number(3),
                Number(4),
                Number(5),
                Ellipsis,
                Number(9)
            ]
        );
    }

    #[test]
    fn first_page_shifts_window_right() {
        assert_eq!(
            window(10, 0, 5),
            vec![Number(0), Number(1), Number(2), Ellipsis, Number(9)]
        );
    }

    #[test]
    fn last_page_shifts_window_left() {
        assert_eq!(
            window(10, 9, 5),
            vec![Number(0), Ellipsis, Number(7), Number(8), Number(9)]
        );
    }

    #[test]
    fn near_start_collapses_only_the_tail() {
        assert_eq!(
            window(20, 2, 7),
            vec![
                Number(0),
                Number(1),
                Number(2),
                Number(3),
                Number(4),
                Ellipsis,
                Number(19)
            ]
        );
    }

    #[test]
    fn even_budget_puts_extra_tile_before_selection() {
        // before = 3, after = 2
        assert_eq!(
            window(12, 6, 6),
            vec![Number(0), Ellipsis, Number(5), Number(6), Ellipsis, Number(11)]
        );
    }

    #[test]
    fn single_page() {
        assert_eq!(window(1, 0, 1), vec![Number(0)]);
        assert_eq!(window(1, 0, 9), vec![Number(0)]);
    }

    #[test]
    fn zero_slots_yields_no_tiles() {
        assert!(window(10, 3, 0).is_empty());
    }

    #[test]
    fn tiny_budgets_keep_selected_page() {
        assert_eq!(window(10, 5, 1), vec![Number(5)]);
        assert_eq!(window(10, 5, 2), vec![Number(4), Number(5)]);
        assert_eq!(window(10, 5, 3), vec![Number(4), Number(5), Number(6)]);
        assert_eq!(
            window(10, 5, 4),
            vec![Number(0), Ellipsis, Number(5), Number(6)]
        );
        assert_eq!(window(10, 0, 3), vec![Number(0), Ellipsis, Number(9)]);
    }

    #[test]
    fn rejects_invalid_arguments() {
        assert_eq!(
            compute_window(0, 0, 5),
            Err(PaginationError::InvalidArgument {
                total_pages: 0,
                selected_page: 0
            })
        );
        assert!(compute_window(5, 5, 5).is_err());
        assert!(compute_window(5, 99, 0).is_err());
    }

    #[test]
    fn error_message_names_both_values() {
        let err = compute_window(3, 7, 2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid pagination arguments: selected page 7 with 3 total pages"
        );
    }

    #[test]
    fn tile_helpers_and_display() {
        assert_eq!(Number(3).page(), Some(3));
        assert_eq!(Ellipsis.page(), None);
        assert!(Ellipsis.is_ellipsis());
        assert_eq!(Number(0).to_string(), "1");
        assert_eq!(Ellipsis.to_string(), "…");
    }

    #[test]
    fn tiles_serialize_as_tagged_values() {
        let json = serde_json::to_string(&window(10, 0, 5)).unwrap();
        assert_eq!(json, r#"[{"Number":0},{"Number":1},{"Number":2},"Ellipsis",{"Number":9}]"#);
    }
}
