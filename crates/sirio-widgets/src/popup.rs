// SPDX-License-Identifier: Apache-2.0
//! Popup widget for anchored floating content.
//!
//! [`Popup`] combines an expand/collapse [`Transition`] with a
//! [`PlacementCalculator`]. Each frame the caller passes the anchor bounds
//! and viewport size; the popup resolves where it goes and hands a
//! [`PopupFrame`] to a [`PopupRenderer`]. Deciding the placement and drawing
//! it are separate capabilities, so either side can be swapped.
//!
//! Whenever the resolved placement changes, the `on_placement` callback
//! receives it together with a [`TransformOrigin`], letting the caller scale
//! the surface out of the edge that touches the anchor.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use sirio_core::geometry::{Offset, Rect, Size};
//! use sirio_widgets::popup::{Popup, PopupFrame, PopupRenderer};
//!
//! struct Log(Vec<Rect>);
//!
//! impl PopupRenderer for Log {
//!     fn render(&mut self, frame: &PopupFrame) {
//!         self.0.push(frame.bounds);
//!     }
//! }
//!
//! let mut popup = Popup::dropdown(Offset::new(0, 4)).content_size(Size::new(150, 200));
//! popup.set_expanded(true);
//! popup.tick(Duration::from_millis(200));
//!
//! let mut log = Log(Vec::new());
//! popup.render(Rect::new(100, 100, 200, 140), Size::new(400, 800), &mut log);
//! assert_eq!(log.0, vec![Rect::new(100, 144, 250, 344)]);
//! ```

#![forbid(unsafe_code)]

use std::fmt;
use std::time::Duration;

use sirio_core::geometry::{Offset, Rect, Size};
use sirio_core::transition::{Transition, TransitionPhase};
use sirio_layout::placement::{
    DropdownPlacement, HorizontalAlignment, Placement, PlacementCalculator, VerticalSide,
};
use sirio_style::{Color, palette};

/// Pivot of the popup's scale animation, as fractions of its size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformOrigin {
    /// 0.0 is the left edge, 1.0 the right edge.
    pub pivot_x: f32,
    /// 0.0 is the top edge, 1.0 the bottom edge.
    pub pivot_y: f32,
}

impl TransformOrigin {
    pub const CENTER: Self = Self {
        pivot_x: 0.5,
        pivot_y: 0.5,
    };

    /// The origin that grows the popup out of its anchor.
    pub const fn from_placement(placement: &Placement) -> Self {
        let pivot_x = match placement.horizontal {
            HorizontalAlignment::End => 0.0,
            HorizontalAlignment::Center => 0.5,
            HorizontalAlignment::Start => 1.0,
        };
        let pivot_y = match placement.vertical {
            VerticalSide::Below => 0.0,
            VerticalSide::Above => 1.0,
        };
        Self { pivot_x, pivot_y }
    }
}

/// Everything a renderer needs to draw one frame of the popup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupFrame {
    /// Popup bounds in viewport pixels, before scaling.
    pub bounds: Rect,
    pub placement: Placement,
    pub origin: TransformOrigin,
    pub phase: TransitionPhase,
    pub scale: f32,
    pub alpha: f32,
    /// Background color of the popup surface.
    pub surface: Color,
}

/// Draws a popup frame. Implemented by the host toolkit.
pub trait PopupRenderer {
    fn render(&mut self, frame: &PopupFrame);
}

type PlacementCallback = Box<dyn FnMut(&Placement, TransformOrigin) + Send>;

/// An anchored popup with an animated visibility transition.
pub struct Popup<C = DropdownPlacement> {
    calculator: C,
    transition: Transition,
    content_size: Size,
    surface: Color,
    last_placement: Option<Placement>,
    on_placement: Option<PlacementCallback>,
}

impl<C: fmt::Debug> fmt::Debug for Popup<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Popup")
            .field("calculator", &self.calculator)
            .field("transition", &self.transition)
            .field("content_size", &self.content_size)
            .field("surface", &self.surface)
            .field("last_placement", &self.last_placement)
            .finish_non_exhaustive()
    }
}

impl Popup<DropdownPlacement> {
    /// A popup using the stock dropdown placement with the given gap.
    pub fn dropdown(offset: Offset) -> Self {
        Self::new(DropdownPlacement::new(offset))
    }
}

impl<C: PlacementCalculator> Popup<C> {
    /// Create a dismissed popup with a custom placement calculator.
    pub fn new(calculator: C) -> Self {
        Self {
            calculator,
            transition: Transition::new(),
            content_size: Size::ZERO,
            surface: palette::POPUP_SURFACE,
            last_placement: None,
            on_placement: None,
        }
    }

    /// Set the measured size of the popup content.
    #[must_use]
    pub fn content_size(mut self, size: Size) -> Self {
        self.content_size = size;
        self
    }

    /// Set the surface background color.
    #[must_use]
    pub fn surface(mut self, color: Color) -> Self {
        self.surface = color;
        self
    }

    /// Set the expand/collapse animation duration.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.transition = self.transition.with_duration(duration);
        self
    }

    /// Register a callback fired whenever the resolved placement changes.
    #[must_use]
    pub fn on_placement<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Placement, TransformOrigin) + Send + 'static,
    {
        self.on_placement = Some(Box::new(callback));
        self
    }

    /// Update the measured content size, e.g. after a relayout.
    pub fn set_content_size(&mut self, size: Size) {
        self.content_size = size;
    }

    /// Show or hide the popup. A new target overrides an in-flight animation.
    ///
    /// Returns `true` if the target changed.
    pub fn set_expanded(&mut self, expanded: bool) -> bool {
        let changed = self.transition.set_expanded(expanded);
        #[cfg(feature = "tracing")]
        if changed {
            tracing::debug!(
                message = "popup.target",
                expanded,
                phase = ?self.transition.phase(),
                progress = self.transition.progress()
            );
        }
        changed
    }

    /// Flip the target state.
    pub fn toggle(&mut self) {
        let target = !self.is_expanded();
        self.set_expanded(target);
    }

    /// Whether the popup is shown or on its way to being shown.
    pub fn is_expanded(&self) -> bool {
        self.transition.phase().targets_expanded()
    }

    /// Advance the animation.
    pub fn tick(&mut self, dt: Duration) {
        self.transition.tick(dt);
    }

    pub fn phase(&self) -> TransitionPhase {
        self.transition.phase()
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    /// The most recently resolved placement, if any.
    pub fn last_placement(&self) -> Option<Placement> {
        self.last_placement
    }

    /// Resolve the placement for the current anchor and viewport.
    ///
    /// Fires the placement callback when the result differs from the
    /// previous one.
    pub fn resolve(&mut self, anchor: Rect, viewport: Size) -> Placement {
        let placement = self.calculator.place(anchor, self.content_size, viewport);
        if self.last_placement != Some(placement) {
            let origin = TransformOrigin::from_placement(&placement);
            #[cfg(feature = "tracing")]
            tracing::trace!(
                message = "popup.placement",
                horizontal = ?placement.horizontal,
                vertical = ?placement.vertical,
                x = placement.position.x,
                y = placement.position.y
            );
            if let Some(callback) = self.on_placement.as_mut() {
                callback(&placement, origin);
            }
            self.last_placement = Some(placement);
        }
        placement
    }

    /// Build the frame to draw, or `None` while dismissed.
    pub fn frame(&mut self, anchor: Rect, viewport: Size) -> Option<PopupFrame> {
        if !self.transition.is_rendered() {
            return None;
        }
        let placement = self.resolve(anchor, viewport);
        Some(PopupFrame {
            bounds: placement.bounds(self.content_size),
            placement,
            origin: TransformOrigin::from_placement(&placement),
            phase: self.transition.phase(),
            scale: self.transition.scale(),
            alpha: self.transition.alpha(),
            surface: self.surface,
        })
    }

    /// Draw the popup through `renderer`. Returns `false` while dismissed.
    pub fn render<R>(&mut self, anchor: Rect, viewport: Size, renderer: &mut R) -> bool
    where
        R: PopupRenderer + ?Sized,
    {
        match self.frame(anchor, viewport) {
            Some(frame) => {
                renderer.render(&frame);
                true
            }
            None => false,
        }
    }
}
