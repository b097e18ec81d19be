#![forbid(unsafe_code)]

//! Color tokens and the stock per-state tables built from them.

use crate::color::Color;
use crate::color_state::ColorState;

pub const BRAND: Color = Color::rgb(0x00, 0x66, 0xCC);
pub const BRAND_DARK: Color = Color::rgb(0x00, 0x3D, 0x7A);
pub const BRAND_LIGHT: Color = Color::rgb(0x33, 0x85, 0xD6);
pub const NEUTRAL_100: Color = Color::rgb(0xF5, 0xF7, 0xFA);
pub const NEUTRAL_300: Color = Color::rgb(0xCC, 0xD2, 0xD9);
pub const NEUTRAL_600: Color = Color::rgb(0x5C, 0x6F, 0x82);
pub const SURFACE: Color = Color::WHITE;

/// Background of the selected pagination tile.
pub const fn pagination_selected() -> ColorState {
    ColorState::new(BRAND)
        .pressed(BRAND_DARK)
        .hovered(BRAND_LIGHT)
        .focused(BRAND_DARK)
        .disabled(NEUTRAL_300)
}

/// Background of an unselected pagination tile.
pub const fn pagination_unselected() -> ColorState {
    ColorState::new(SURFACE)
        .pressed(NEUTRAL_300)
        .hovered(NEUTRAL_100)
        .focused(NEUTRAL_100)
        .disabled(SURFACE)
}

/// Foreground of the pagination arrows.
pub const fn pagination_arrow() -> ColorState {
    ColorState::new(BRAND)
        .pressed(BRAND_DARK)
        .hovered(BRAND_LIGHT)
        .disabled(NEUTRAL_300)
}

/// Text color of the ellipsis marker. It is never interactive.
pub const ELLIPSIS: Color = NEUTRAL_600;

/// Background of a popup surface.
pub const POPUP_SURFACE: Color = SURFACE;
