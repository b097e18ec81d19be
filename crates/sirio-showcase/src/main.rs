#![forbid(unsafe_code)]

//! Sirio showcase
//!
//! Sample application that lays out pagination strips for a range of
//! container widths and animates dropdowns opening from anchors in each
//! corner of a phone-sized viewport, printing the results as text.
//!
//! # Running
//!
//! ```sh
//! cargo run -p sirio-showcase -- [CONFIG.json]
//! ```
//!
//! `RUST_LOG=sirio_widgets=debug` shows page switches and popup transitions.

mod config;
mod render;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use sirio::{PaginationState, Popup, Rect, Result, TransitionPhase};
use tracing_subscriber::EnvFilter;

use crate::config::ShowcaseConfig;
use crate::render::{TextPopupRenderer, strip};

fn main() -> ExitCode {
    init_logging();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "showcase failed");
            eprintln!("sirio-showcase: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run() -> Result<()> {
    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = config::load(path.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    pagination_demo(&config, &mut out)?;
    writeln!(out)?;
    popup_demo(&config, &mut out)?;
    Ok(())
}

fn pagination_demo(config: &ShowcaseConfig, out: &mut impl Write) -> Result<()> {
    let total = config.total_pages;
    writeln!(out, "Pagination: {total} pages")?;

    let mut selections = vec![0, total / 2, total - 1];
    selections.dedup();

    for &width in &config.container_widths {
        let slots = config.pagination.available_slots(width);
        writeln!(out, "  width {width} ({slots} slots)")?;
        for &page in &selections {
            let state = PaginationState::with_selected(total, page)?;
            let layout = config.pagination.layout(&state, width)?;
            writeln!(out, "    {}", strip(&layout))?;
        }
    }

    // Walk the strip by clicking the next arrow until it disables itself.
    let width = config.container_widths.last().copied().unwrap_or(400);
    let mut state = PaginationState::new(total)?;
    let mut clicks = 0;
    loop {
        let layout = config.pagination.layout(&state, width)?;
        let Some(hit) = layout.hit_test(layout.next.x) else {
            break;
        };
        state.handle_hit(hit);
        clicks += 1;
    }
    writeln!(
        out,
        "  clicked next {clicks} times, now on page {}",
        state.selected() + 1
    )?;
    Ok(())
}

fn popup_demo(config: &ShowcaseConfig, out: &mut impl Write) -> Result<()> {
    let vw = config.viewport.width;
    let vh = config.viewport.height;
    writeln!(out, "Dropdowns in a {vw}x{vh} viewport")?;

    let mid = vw / 2;
    let anchors = [
        ("top-left", Rect::new(16, 16, 116, 56)),
        (
            "top-right",
            Rect::new(vw.saturating_sub(116), 16, vw.saturating_sub(16), 56),
        ),
        (
            "bottom-center",
            Rect::new(
                mid.saturating_sub(50),
                vh.saturating_sub(56),
                mid.saturating_add(50),
                vh.saturating_sub(16),
            ),
        ),
        (
            "below-viewport",
            Rect::new(16, vh.saturating_add(20), 116, vh.saturating_add(60)),
        ),
    ];
    let step = Duration::from_millis(config.frame_step_ms);

    for (name, anchor) in anchors {
        writeln!(out, "  {name}")?;
        let mut popup = Popup::dropdown(config.offset)
            .content_size(config.popup_size)
            .on_placement(move |placement, origin| {
                tracing::info!(
                    anchor = name,
                    horizontal = ?placement.horizontal,
                    vertical = ?placement.vertical,
                    pivot_x = origin.pivot_x,
                    pivot_y = origin.pivot_y,
                    "placement resolved"
                );
            });

        let mut renderer = TextPopupRenderer::default();
        popup.set_expanded(true);
        loop {
            popup.tick(step);
            popup.render(anchor, config.viewport, &mut renderer);
            if popup.phase() == TransitionPhase::Visible {
                break;
            }
        }
        popup.set_expanded(false);
        while popup.render(anchor, config.viewport, &mut renderer) {
            popup.tick(step);
        }

        for line in &renderer.lines {
            writeln!(out, "    {line}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sirio::Size;

    fn run_to_string(f: fn(&ShowcaseConfig, &mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&ShowcaseConfig::default(), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn pagination_demo_walks_to_last_page() {
        let text = run_to_string(|c, out| pagination_demo(c, out));
        assert!(text.starts_with("Pagination: 20 pages"));
        assert!(text.contains("width 136 (1 slots)"));
        assert!(text.contains("clicked next 19 times, now on page 20"));
    }

    #[test]
    fn popup_demo_opens_and_closes_every_anchor() {
        let text = run_to_string(|c, out| popup_demo(c, out));
        for name in ["top-left", "top-right", "bottom-center", "below-viewport"] {
            assert!(text.contains(name), "missing {name}");
        }
        assert!(text.contains("Visible"));
        assert!(text.contains("Collapsing"));
        assert!(text.contains("Start/Below")); // top-right anchor right-aligns
        assert!(text.contains("End/Above")); // bottom anchor flips up
    }

    #[test]
    fn popup_demo_handles_huge_viewport() {
        let config = ShowcaseConfig {
            viewport: Size::new(i32::MAX, i32::MAX),
            ..ShowcaseConfig::default()
        };
        let mut buf = Vec::new();
        popup_demo(&config, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("below-viewport"));
    }
}
