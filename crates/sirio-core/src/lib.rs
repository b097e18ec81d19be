#![forbid(unsafe_code)]

//! Core: geometry primitives, popup visibility transitions, and logging.
//!
//! # Role in Sirio
//! `sirio-core` is the vocabulary layer. It owns the pixel-space geometry
//! types that layout decisions are expressed in, the boolean-driven
//! expand/collapse transition used by popups, and the logging facade the
//! other crates emit through.
//!
//! # How it fits in the system
//! `sirio-layout` computes pagination windows and popup placements from
//! these types, and `sirio-widgets` drives them from component state. Nothing
//! here renders; callers own drawing.

pub mod geometry;
pub mod logging;
pub mod transition;

pub use geometry::{Offset, Rect, Size};
pub use transition::{Transition, TransitionPhase};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
