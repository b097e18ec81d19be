#![forbid(unsafe_code)]

//! Expand/collapse transition for floating surfaces.
//!
//! A [`Transition`] is a boolean-driven two-state machine (`Dismissed` /
//! `Visible`) with a transient animation phase of fixed duration on each
//! change. The caller drives time explicitly through [`Transition::tick`], so
//! the type is deterministic and needs no clock.
//!
//! # Invariants
//!
//! 1. `progress()` is always in `[0.0, 1.0]`; `0.0` exactly when
//!    `Dismissed`, `1.0` exactly when `Visible`.
//! 2. A new target overrides an in-flight animation. The reverse animation
//!    starts from the current progress, so there is no visual jump.
//! 3. `tick()` only moves time while `Expanding` or `Collapsing`.
//!
//! # Failure Modes
//!
//! - Zero duration: target changes settle immediately.

use std::time::Duration;

/// Default duration of one expand or collapse animation.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(200);

/// Scale applied to a fully collapsed surface.
const COLLAPSED_SCALE: f32 = 0.8;

/// Current phase of a [`Transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    /// Not shown; nothing should render.
    Dismissed,
    /// Animating toward `Visible`.
    Expanding,
    /// Fully shown.
    Visible,
    /// Animating toward `Dismissed`.
    Collapsing,
}

impl TransitionPhase {
    /// Whether the phase is one of the two animating phases.
    #[inline]
    pub const fn is_animating(self) -> bool {
        matches!(self, Self::Expanding | Self::Collapsing)
    }

    /// Whether the target of this phase is the expanded state.
    #[inline]
    pub const fn targets_expanded(self) -> bool {
        matches!(self, Self::Expanding | Self::Visible)
    }
}

/// Expand/collapse state machine with a fixed-duration animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    duration: Duration,
    /// Time position along the expand curve, in `[0, duration]`.
    position: Duration,
    phase: TransitionPhase,
}

impl Transition {
    /// A dismissed transition with the default duration.
    pub fn new() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            position: Duration::ZERO,
            phase: TransitionPhase::Dismissed,
        }
    }

    /// Set the duration of each animation.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self.position = match self.phase {
            TransitionPhase::Visible => duration,
            TransitionPhase::Dismissed => Duration::ZERO,
            _ => self.position.min(duration),
        };
        self.settle();
        self
    }

    /// Start fully visible, with no entry animation.
    #[must_use]
    pub fn visible(mut self) -> Self {
        self.phase = TransitionPhase::Visible;
        self.position = self.duration;
        self
    }

    /// Animation duration.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Current phase.
    #[inline]
    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// Whether the surface should be drawn at all.
    #[inline]
    pub fn is_rendered(&self) -> bool {
        self.phase != TransitionPhase::Dismissed
    }

    /// Set the target state.
    ///
    /// Returns `true` if the target changed.
    pub fn set_expanded(&mut self, expanded: bool) -> bool {
        if self.phase.targets_expanded() == expanded {
            return false;
        }
        self.phase = if expanded {
            TransitionPhase::Expanding
        } else {
            TransitionPhase::Collapsing
        };
        self.settle();
        true
    }

    /// Advance the animation by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        match self.phase {
            TransitionPhase::Expanding => {
                self.position = self.position.saturating_add(dt).min(self.duration);
            }
            TransitionPhase::Collapsing => {
                self.position = self.position.saturating_sub(dt);
            }
            TransitionPhase::Dismissed | TransitionPhase::Visible => return,
        }
        self.settle();
    }

    /// Linear progress toward fully visible, in `[0.0, 1.0]`.
    pub fn progress(&self) -> f32 {
        match self.phase {
            TransitionPhase::Dismissed => 0.0,
            TransitionPhase::Visible => 1.0,
            _ => {
                let total = self.duration.as_secs_f64();
                if total <= 0.0 {
                    return if self.phase.targets_expanded() { 1.0 } else { 0.0 };
                }
                (self.position.as_secs_f64() / total).clamp(0.0, 1.0) as f32
            }
        }
    }

    /// Eased progress (ease-out cubic).
    pub fn eased_progress(&self) -> f32 {
        let inv = 1.0 - self.progress();
        1.0 - inv * inv * inv
    }

    /// Opacity of the surface.
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.eased_progress()
    }

    /// Uniform scale of the surface, from 0.8 collapsed to 1.0 expanded.
    #[inline]
    pub fn scale(&self) -> f32 {
        COLLAPSED_SCALE + (1.0 - COLLAPSED_SCALE) * self.eased_progress()
    }

    fn settle(&mut self) {
        match self.phase {
            TransitionPhase::Expanding if self.position >= self.duration => {
                self.position = self.duration;
                self.phase = TransitionPhase::Visible;
            }
            TransitionPhase::Collapsing if self.position.is_zero() => {
                self.phase = TransitionPhase::Dismissed;
            }
            _ => {}
        }
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new()
    }
}
