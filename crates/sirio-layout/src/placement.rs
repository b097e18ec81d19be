// SPDX-License-Identifier: Apache-2.0
//! Adaptive popup placement.
//!
//! [`compute_placement`] decides where a floating panel (dropdown, menu,
//! tooltip) opens relative to its anchor. The two axes are resolved
//! independently:
//!
//! - **Horizontal**: candidates are tried in the order End, Center, Start
//!   and the first that keeps the panel inside the viewport wins. If none
//!   does, the candidate with the least overflow wins.
//! - **Vertical**: Below is preferred unless only Above fits, or the anchor
//!   itself is already past the bottom of the viewport. When neither side
//!   fits, a short list of fallbacks is tried before settling on Above.
//!
//! Alignment names follow the fallback preference order, not the visual
//! side: `End` aligns the panel's left edge with the anchor's left edge and
//! `Start` aligns the right edges.
//!
//! # Example
//!
//! ```
//! use sirio_layout::placement::{HorizontalAlignment, VerticalSide, compute_placement};
//! use sirio_layout::{Offset, Rect, Size};
//!
//! let anchor = Rect::new(100, 700, 200, 740);
//! let placement = compute_placement(
//!     anchor,
//!     Size::new(150, 200),
//!     Size::new(400, 800),
//!     Offset::new(0, 4),
//! );
//! assert_eq!(placement.horizontal, HorizontalAlignment::End);
//! assert_eq!(placement.vertical, VerticalSide::Above); // no room below
//! assert_eq!(placement.position, Offset::new(100, 496));
//! ```

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use sirio_core::geometry::{Offset, Rect, Size};

/// Horizontal alignment of a popup against its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HorizontalAlignment {
    /// Right edges aligned.
    Start,
    /// Centered on the anchor.
    Center,
    /// Left edges aligned.
    End,
}

/// Which side of the anchor a popup opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerticalSide {
    Above,
    Below,
}

/// A resolved popup placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalSide,
    /// Top-left corner of the popup in viewport pixels.
    pub position: Offset,
}

impl Placement {
    /// The popup's bounds for the given content size.
    #[inline]
    pub const fn bounds(&self, content: Size) -> Rect {
        Rect::from_origin_size(self.position, content)
    }

    /// Whether the popup lies entirely inside the viewport.
    #[inline]
    pub const fn fits(&self, content: Size, viewport: Size) -> bool {
        viewport.to_rect().contains_rect(&self.bounds(content))
    }
}

/// Computes where a popup goes. Kept separate from anything that draws it.
pub trait PlacementCalculator {
    fn place(&self, anchor: Rect, content: Size, viewport: Size) -> Placement;
}

impl<F> PlacementCalculator for F
where
    F: Fn(Rect, Size, Size) -> Placement,
{
    fn place(&self, anchor: Rect, content: Size, viewport: Size) -> Placement {
        self(anchor, content, viewport)
    }
}

/// The stock dropdown placement: [`compute_placement`] with a fixed gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DropdownPlacement {
    /// Gap between anchor and popup.
    pub offset: Offset,
}

impl DropdownPlacement {
    pub const fn new(offset: Offset) -> Self {
        Self { offset }
    }
}

impl PlacementCalculator for DropdownPlacement {
    fn place(&self, anchor: Rect, content: Size, viewport: Size) -> Placement {
        compute_placement(anchor, content, viewport, self.offset)
    }
}

/// Resolve the placement of `content` next to `anchor` inside `viewport`.
///
/// Total over all inputs, including empty viewports: the worst case is a
/// best-effort position that overflows.
pub fn compute_placement(anchor: Rect, content: Size, viewport: Size, offset: Offset) -> Placement {
    let (horizontal, x) = resolve_horizontal(anchor, content.width, viewport.width, offset.x);
    let (vertical, y) = resolve_vertical(anchor, content.height, viewport.height, offset.y);
    Placement {
        horizontal,
        vertical,
        position: Offset::new(x, y),
    }
}

/// Horizontal candidates in preference order.
pub fn horizontal_candidates(
    anchor: Rect,
    width: i32,
    offset_x: i32,
) -> [(HorizontalAlignment, i32); 3] {
    [
        (HorizontalAlignment::End, anchor.left.saturating_sub(offset_x)),
        (
            HorizontalAlignment::Center,
            anchor.center_x().saturating_sub(width / 2),
        ),
        (
            HorizontalAlignment::Start,
            anchor
                .right
                .saturating_add(offset_x)
                .saturating_sub(width),
        ),
    ]
}

/// Below and Above candidates, in that order.
pub fn vertical_candidates(anchor: Rect, height: i32, offset_y: i32) -> [(VerticalSide, i32); 2] {
    [
        (VerticalSide::Below, anchor.bottom.saturating_add(offset_y)),
        (
            VerticalSide::Above,
            anchor.top.saturating_sub(offset_y).saturating_sub(height),
        ),
    ]
}

fn resolve_horizontal(
    anchor: Rect,
    width: i32,
    viewport_width: i32,
    offset_x: i32,
) -> (HorizontalAlignment, i32) {
    let candidates = horizontal_candidates(anchor, width, offset_x);
    if let Some(&fit) = candidates
        .iter()
        .find(|(_, x)| fits(*x, width, viewport_width))
    {
        return fit;
    }

    // Strict comparison keeps the earlier candidate on ties.
    let mut best = candidates[0];
    for &candidate in &candidates[1..] {
        if overflow(candidate.1, width, viewport_width) < overflow(best.1, width, viewport_width) {
            best = candidate;
        }
    }
    best
}

fn resolve_vertical(
    anchor: Rect,
    height: i32,
    viewport_height: i32,
    offset_y: i32,
) -> (VerticalSide, i32) {
    let [below, above] = vertical_candidates(anchor, height, offset_y);
    let fits_below = fits(below.1, height, viewport_height);
    let fits_above = fits(above.1, height, viewport_height);

    let prefer_above = (fits_above && !fits_below) || anchor.top > viewport_height;
    let (preferred, other) = if prefer_above {
        (above, below)
    } else {
        (below, above)
    };

    if fits(preferred.1, height, viewport_height) {
        return preferred;
    }
    if fits(other.1, height, viewport_height) {
        return other;
    }

    let fallbacks = [
        anchor.top,
        anchor.center_y().saturating_sub(height / 2),
        viewport_height.saturating_sub(height),
    ];
    match fallbacks
        .into_iter()
        .find(|&y| fits(y, height, viewport_height))
    {
        Some(y) => (side_of(anchor, y, height), y),
        None => above,
    }
}

/// Side reported for a fallback position: where the popup's middle sits
/// relative to the anchor's middle.
fn side_of(anchor: Rect, y: i32, height: i32) -> VerticalSide {
    if y.saturating_add(height / 2) > anchor.center_y() {
        VerticalSide::Below
    } else {
        VerticalSide::Above
    }
}

#[inline]
fn fits(pos: i32, len: i32, limit: i32) -> bool {
    pos >= 0 && pos.saturating_add(len) <= limit
}

#[inline]
fn overflow(pos: i32, len: i32, limit: i32) -> i64 {
    let start = i64::from(pos);
    let end = start + i64::from(len);
    (-start).max(0) + (end - i64::from(limit)).max(0)
}
