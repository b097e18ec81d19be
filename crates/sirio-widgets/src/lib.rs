#![forbid(unsafe_code)]

//! Components for Sirio.
//!
//! Components here own interaction state and turn it into render-ready
//! decisions. Drawing stays with the caller:
//!
//! - [`pagination`]: page selection state, the slot budget for a container
//!   width, and the laid-out strip of arrows and tiles.
//! - [`popup`]: expand/collapse transition plus anchored placement, handed
//!   to a [`popup::PopupRenderer`] each frame.

pub mod pagination;
pub mod popup;

pub use pagination::{
    Pagination, PaginationHit, PaginationLayout, PaginationSizeError, PaginationState,
};
pub use popup::{Popup, PopupFrame, PopupRenderer, TransformOrigin};
