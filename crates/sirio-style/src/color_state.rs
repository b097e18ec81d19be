// SPDX-License-Identifier: Apache-2.0
//! Per-interaction-state color lookup.
//!
//! [`ColorState`] holds the color a component uses in each interaction state:
//! default, pressed, hovered, focused, and disabled. Missing overrides fall
//! back to the default color. The table is an immutable value handed to a
//! component, never a shared mutable singleton.
//!
//! # Example
//!
//! ```
//! use sirio_style::{Color, ColorState, InteractionState};
//!
//! let background = ColorState::new(Color::rgb(0, 102, 204))
//!     .pressed(Color::rgb(0, 61, 122))
//!     .disabled(Color::rgb(204, 204, 204));
//!
//! let state = InteractionState::from_flags(true, true, false, false);
//! assert_eq!(background.resolve(state), Color::rgb(0, 61, 122));
//! ```

#![forbid(unsafe_code)]

use crate::color::Color;

/// The interaction state of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InteractionState {
    /// No user interaction.
    #[default]
    Default,
    /// Being pressed.
    Pressed,
    /// Pointer is over the component.
    Hovered,
    /// Component has keyboard focus.
    Focused,
    /// Component is non-interactive.
    Disabled,
}

impl InteractionState {
    /// Collapse raw interaction flags into a single state.
    ///
    /// Priority: disabled, pressed, hovered, focused, default.
    pub const fn from_flags(enabled: bool, pressed: bool, hovered: bool, focused: bool) -> Self {
        if !enabled {
            Self::Disabled
        } else if pressed {
            Self::Pressed
        } else if hovered {
            Self::Hovered
        } else if focused {
            Self::Focused
        } else {
            Self::Default
        }
    }
}

/// Colors for each interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorState {
    /// Color used when no override applies.
    pub default: Color,
    /// Override when pressed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub pressed: Option<Color>,
    /// Override when hovered.
    #[cfg_attr(feature = "serde", serde(default))]
    pub hovered: Option<Color>,
    /// Override when focused.
    #[cfg_attr(feature = "serde", serde(default))]
    pub focused: Option<Color>,
    /// Override when disabled.
    #[cfg_attr(feature = "serde", serde(default))]
    pub disabled: Option<Color>,
}

impl ColorState {
    /// Create a color state with only a default color.
    pub const fn new(default: Color) -> Self {
        Self {
            default,
            pressed: None,
            hovered: None,
            focused: None,
            disabled: None,
        }
    }

    /// Set the pressed override.
    #[must_use]
    pub const fn pressed(mut self, color: Color) -> Self {
        self.pressed = Some(color);
        self
    }

    /// Set the hovered override.
    #[must_use]
    pub const fn hovered(mut self, color: Color) -> Self {
        self.hovered = Some(color);
        self
    }

    /// Set the focused override.
    #[must_use]
    pub const fn focused(mut self, color: Color) -> Self {
        self.focused = Some(color);
        self
    }

    /// Set the disabled override.
    #[must_use]
    pub const fn disabled(mut self, color: Color) -> Self {
        self.disabled = Some(color);
        self
    }

    /// Resolve the color for the given interaction state.
    pub const fn resolve(&self, state: InteractionState) -> Color {
        let over = match state {
            InteractionState::Default => None,
            InteractionState::Pressed => self.pressed,
            InteractionState::Hovered => self.hovered,
            InteractionState::Focused => self.focused,
            InteractionState::Disabled => self.disabled,
        };
        match over {
            Some(color) => color,
            None => self.default,
        }
    }

    /// Check whether the given state has a specific override.
    pub const fn has_override(&self, state: InteractionState) -> bool {
        match state {
            InteractionState::Default => true,
            InteractionState::Pressed => self.pressed.is_some(),
            InteractionState::Hovered => self.hovered.is_some(),
            InteractionState::Focused => self.focused.is_some(),
            InteractionState::Disabled => self.disabled.is_some(),
        }
    }
}

impl Default for ColorState {
    fn default() -> Self {
        Self::new(Color::TRANSPARENT)
    }
}

impl From<Color> for ColorState {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}
