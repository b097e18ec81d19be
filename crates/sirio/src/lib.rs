#![forbid(unsafe_code)]

//! Sirio public facade crate.
//!
//! This crate provides the stable surface area for users. It re-exports the
//! common types from the internal crates and offers a small prelude.

use thiserror::Error;

// --- Core re-exports -------------------------------------------------------

pub use sirio_core::geometry::{Offset, Rect, Size};
pub use sirio_core::transition::{Transition, TransitionPhase};

// --- Layout re-exports -----------------------------------------------------

pub use sirio_layout::pagination::{PaginationError, Tile, compute_window};
pub use sirio_layout::placement::{
    DropdownPlacement, HorizontalAlignment, Placement, PlacementCalculator, VerticalSide,
    compute_placement,
};

// --- Style re-exports ------------------------------------------------------

pub use sirio_style::{Color, ColorState, InteractionState, ParseColorError, palette};

// --- Widget re-exports -----------------------------------------------------

pub use sirio_widgets::pagination::{
    ArrowView, Pagination, PaginationHit, PaginationLayout, PaginationSizeError, PaginationState,
    TileView,
};
pub use sirio_widgets::popup::{Popup, PopupFrame, PopupRenderer, TransformOrigin};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for Sirio applications.
#[derive(Debug, Error)]
pub enum Error {
    /// Pagination arguments violated their preconditions.
    #[error(transparent)]
    Pagination(#[from] PaginationError),
    /// Pagination sizes violated their invariants.
    #[error(transparent)]
    PaginationSize(#[from] PaginationSizeError),
    /// A color literal could not be parsed.
    #[error(transparent)]
    Color(#[from] ParseColorError),
    /// I/O failure, e.g. while reading configuration.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Configuration was readable but invalid.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Standard result type for Sirio APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Color, ColorState, Error, InteractionState, Offset, Pagination, PaginationState, Placement,
        PlacementCalculator, Popup, PopupRenderer, Rect, Result, Size, Tile,
    };

    pub use crate::{core, layout, style, widgets};
}

pub use sirio_core as core;
pub use sirio_layout as layout;
pub use sirio_style as style;
pub use sirio_widgets as widgets;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_errors_convert() {
        let err: Error = PaginationState::new(0).unwrap_err().into();
        assert!(matches!(err, Error::Pagination(_)));
        assert_eq!(
            err.to_string(),
            "invalid pagination arguments: selected page 0 with 0 total pages"
        );
    }

    #[test]
    fn pagination_size_errors_convert() {
        let err: Error = PaginationSizeError::TileWidth(0).into();
        assert!(matches!(err, Error::PaginationSize(_)));
        assert_eq!(
            err.to_string(),
            "pagination tile_width must be at least 1, got 0"
        );
    }

    #[test]
    fn color_errors_convert() {
        fn parse(hex: &str) -> Result<Color> {
            Ok(Color::from_hex(hex)?)
        }
        assert!(matches!(parse("#12"), Err(Error::Color(_))));
        assert_eq!(parse("#FFFFFF").unwrap(), Color::WHITE);
    }

    #[test]
    fn prelude_covers_common_flow() {
        use crate::prelude::*;

        let state = PaginationState::with_selected(10, 4).unwrap();
        let layout = Pagination::new().layout(&state, 400).unwrap();
        assert_eq!(layout.tiles.len(), 6);

        let mut popup = Popup::dropdown(Offset::new(0, 4)).content_size(Size::new(50, 50));
        popup.set_expanded(true);
        assert!(popup.frame(Rect::new(0, 0, 10, 10), Size::new(100, 100)).is_some());
    }
}
