#![forbid(unsafe_code)]

//! Color and interaction-state vocabulary for Sirio components.
//!
//! # Role in Sirio
//! Components never read colors from mutable globals. Each one is handed an
//! immutable [`ColorState`] and resolves it against the current
//! [`InteractionState`] at render time.
//!
//! # This crate provides
//! - [`Color`], a packed RGBA value with hex parsing.
//! - [`InteractionState`] and [`ColorState`] for per-state color lookup.
//! - [`palette`], the design-system color tokens.

/// Packed RGBA color.
pub mod color;
/// Interaction states and per-state color lookup.
pub mod color_state;
/// Design-system color tokens.
pub mod palette;

pub use color::{Color, ParseColorError};
pub use color_state::{ColorState, InteractionState};
