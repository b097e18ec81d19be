#![forbid(unsafe_code)]

//! Plain-text renderers for the showcase.

use sirio::{PaginationLayout, PopupFrame, PopupRenderer};

/// One-line rendering of a pagination strip.
///
/// Disabled arrows show as `·`, the selected page is bracketed.
pub fn strip(layout: &PaginationLayout) -> String {
    let arrow = |enabled: bool, glyph: &str| {
        if enabled {
            glyph.to_owned()
        } else {
            "·".to_owned()
        }
    };

    let mut parts = Vec::with_capacity(layout.tiles.len() + 2);
    parts.push(arrow(layout.previous.enabled, "‹"));
    parts.extend(layout.tiles.iter().map(|view| {
        if view.selected {
            format!("[{}]", view.label())
        } else {
            view.label()
        }
    }));
    parts.push(arrow(layout.next.enabled, "›"));
    parts.join(" ")
}

/// Collects a textual description of every popup frame it is asked to draw.
#[derive(Debug, Default)]
pub struct TextPopupRenderer {
    pub lines: Vec<String>,
}

impl PopupRenderer for TextPopupRenderer {
    fn render(&mut self, frame: &PopupFrame) {
        let b = frame.bounds;
        self.lines.push(format!(
            "{:<10} {:?}/{:?} at ({}, {})..({}, {}) scale {:.2} alpha {:.2} on {}",
            format!("{:?}", frame.phase),
            frame.placement.horizontal,
            frame.placement.vertical,
            b.left,
            b.top,
            b.right,
            b.bottom,
            frame.scale,
            frame.alpha,
            frame.surface,
        ));
    }
}
