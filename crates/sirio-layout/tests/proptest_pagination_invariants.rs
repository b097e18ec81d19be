//! Property-based invariant tests for the pagination window.
//!
//! 1. No-collapse: when every page fits, all pages are shown in order
//! 2. The selected page is always present as a number tile
//! 3. Collapsed strips with five or more slots start at page 0 and end at
//!    the last page
//! 4. Ellipses are never adjacent
//! 5. Collapsed strips use exactly the slot budget
//! 6. Page numbers are strictly ascending
//! 7. A single page always yields one tile
//! 8. Out-of-range selections are rejected

use proptest::prelude::*;
use sirio_layout::pagination::{PaginationError, Tile, compute_window};

// ── Helpers ──────────────────────────────────────────────────────────

/// (total_pages, selected_page, available_slots) with a valid selection.
fn valid_args() -> impl Strategy<Value = (usize, usize, usize)> {
    (1usize..200).prop_flat_map(|total| (Just(total), 0..total, 1usize..40))
}

fn pages(tiles: &[Tile]) -> Vec<usize> {
    tiles.iter().filter_map(|t| t.page()).collect()
}

proptest! {
    #[test]
    fn no_collapse_when_everything_fits(total in 1usize..60, extra in 0usize..10, seed in any::<usize>()) {
        let selected = seed % total;
        let tiles = compute_window(total, selected, total + extra).unwrap();
        prop_assert_eq!(tiles, (0..total).map(Tile::Number).collect::<Vec<_>>());
    }

    #[test]
    fn selected_page_is_always_visible((total, selected, slots) in valid_args()) {
        let tiles = compute_window(total, selected, slots).unwrap();
        prop_assert!(
            tiles.contains(&Tile::Number(selected)),
            "tiles {:?} miss selected {} (total {}, slots {})",
            tiles, selected, total, slots
        );
    }

    #[test]
    fn collapsed_strip_is_anchored_at_both_edges((total, selected, slots) in valid_args()) {
        prop_assume!(slots >= 5 && slots < total);
        let tiles = compute_window(total, selected, slots).unwrap();
        prop_assert_eq!(tiles.first().copied(), Some(Tile::Number(0)));
        prop_assert_eq!(tiles.last().copied(), Some(Tile::Number(total - 1)));
    }

    #[test]
    fn ellipses_are_never_adjacent((total, selected, slots) in valid_args()) {
        let tiles = compute_window(total, selected, slots).unwrap();
        for pair in tiles.windows(2) {
            prop_assert!(!(pair[0].is_ellipsis() && pair[1].is_ellipsis()), "{:?}", tiles);
        }
    }

    #[test]
    fn collapsed_strip_fills_the_budget((total, selected, slots) in valid_args()) {
        prop_assume!(slots < total);
        let tiles = compute_window(total, selected, slots).unwrap();
        prop_assert_eq!(tiles.len(), slots);
    }

    #[test]
    fn page_numbers_strictly_ascend((total, selected, slots) in valid_args()) {
        let tiles = compute_window(total, selected, slots).unwrap();
        let pages = pages(&tiles);
        for pair in pages.windows(2) {
            prop_assert!(pair[0] < pair[1], "{:?}", pages);
        }
        prop_assert!(pages.iter().all(|&p| p < total));
    }

    #[test]
    fn ellipsis_marks_a_real_gap((total, selected, slots) in valid_args()) {
        let tiles = compute_window(total, selected, slots).unwrap();
        for (i, tile) in tiles.iter().enumerate() {
            if tile.is_ellipsis() {
                let before = tiles[..i].iter().rev().find_map(|t| t.page());
                let after = tiles[i + 1..].iter().find_map(|t| t.page());
                if let (Some(b), Some(a)) = (before, after) {
                    prop_assert!(a > b + 1, "ellipsis between {} and {} hides nothing", b, a);
                }
            }
        }
    }

    #[test]
    fn single_page_yields_one_tile(slots in 1usize..100) {
        prop_assert_eq!(compute_window(1, 0, slots).unwrap(), vec![Tile::Number(0)]);
    }

    #[test]
    fn out_of_range_selection_is_rejected(total in 0usize..50, over in 0usize..50, slots in 0usize..20) {
        let selected = total + over;
        prop_assert_eq!(
            compute_window(total, selected, slots),
            Err(PaginationError::InvalidArgument { total_pages: total, selected_page: selected })
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Fixed cases
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn concrete_centered_case() {
    use Tile::{Ellipsis, Number};
    assert_eq!(
        compute_window(10, 4, 7).unwrap(),
        vec![Number(0), Ellipsis, Number(3), Number(4), Number(5), Ellipsis, Number(9)]
    );
}

#[test]
fn boundary_selection_case() {
    let tiles = compute_window(10, 0, 5).unwrap();
    assert_eq!(tiles.len(), 5);
    assert!(tiles.contains(&Tile::Number(0)));
    assert!(tiles.contains(&Tile::Number(9)));
}
