#![forbid(unsafe_code)]

//! Pagination strip.
//!
//! [`PaginationState`] tracks the selected page. [`Pagination`] holds the
//! visual configuration, works out how many page tiles fit a container and
//! lays out the strip: a previous arrow, the tiles chosen by
//! [`compute_window`], and a next arrow, packed left to right.

use sirio_layout::pagination::{PaginationError, Tile, compute_window, validate};
use sirio_style::{Color, ColorState, InteractionState, palette};
use thiserror::Error;

/// Selection state for a pagination strip.
///
/// Always holds `selected < total_pages` and `total_pages >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PersistedPagination")
)]
pub struct PaginationState {
    selected: usize,
    total_pages: usize,
}

#[cfg(feature = "state-persistence")]
#[derive(serde::Deserialize)]
struct PersistedPagination {
    selected: usize,
    total_pages: usize,
}

#[cfg(feature = "state-persistence")]
impl TryFrom<PersistedPagination> for PaginationState {
    type Error = PaginationError;

    fn try_from(raw: PersistedPagination) -> Result<Self, Self::Error> {
        Self::with_selected(raw.total_pages, raw.selected)
    }
}

impl PaginationState {
    /// State with the first page selected.
    pub fn new(total_pages: usize) -> Result<Self, PaginationError> {
        Self::with_selected(total_pages, 0)
    }

    /// State with a specific page selected.
    pub fn with_selected(total_pages: usize, selected: usize) -> Result<Self, PaginationError> {
        validate(total_pages, selected)?;
        Ok(Self {
            selected,
            total_pages,
        })
    }

    #[inline]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    #[inline]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Whether the previous arrow is enabled.
    #[inline]
    pub const fn has_previous(&self) -> bool {
        self.selected > 0
    }

    /// Whether the next arrow is enabled.
    #[inline]
    pub const fn has_next(&self) -> bool {
        self.selected + 1 < self.total_pages
    }

    /// Select a page.
    ///
    /// Returns `Ok(true)` if the selection changed.
    pub fn select(&mut self, page: usize) -> Result<bool, PaginationError> {
        validate(self.total_pages, page)?;
        Ok(self.switch_to(page, "select"))
    }

    /// Move to the next page. No-op on the last page.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.switch_to(self.selected + 1, "next")
    }

    /// Move to the previous page. No-op on the first page.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.switch_to(self.selected - 1, "previous")
    }

    /// Change the page count, keeping the selection in range.
    pub fn set_total_pages(&mut self, total_pages: usize) -> Result<(), PaginationError> {
        validate(total_pages, 0)?;
        self.total_pages = total_pages;
        if self.selected >= total_pages {
            self.switch_to(total_pages - 1, "shrink");
        }
        Ok(())
    }

    /// Apply a hit from [`PaginationLayout::hit_test`].
    ///
    /// Returns `true` if the selection changed.
    pub fn handle_hit(&mut self, hit: PaginationHit) -> bool {
        match hit {
            PaginationHit::Previous => self.previous(),
            PaginationHit::Next => self.next(),
            PaginationHit::Page(page) => self.select(page).unwrap_or(false),
        }
    }

    fn switch_to(&mut self, page: usize, reason: &str) -> bool {
        if self.selected == page {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "pagination.switch",
            reason,
            from = self.selected,
            to = page,
            total = self.total_pages
        );
        #[cfg(not(feature = "tracing"))]
        let _ = reason;
        self.selected = page;
        true
    }
}

/// What a point on the strip hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaginationHit {
    Previous,
    Next,
    Page(usize),
}

/// Sizes a [`Pagination`] cannot be laid out with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationSizeError {
    #[error("pagination tile_width must be at least 1, got {0}")]
    TileWidth(i32),
    #[error("pagination arrow_width must not be negative, got {0}")]
    ArrowWidth(i32),
    #[error("pagination spacing must not be negative, got {0}")]
    Spacing(i32),
}

/// Visual configuration of a pagination strip.
///
/// Always holds `tile_width >= 1`, `arrow_width >= 0` and `spacing >= 0`:
/// the builder clamps, deserialization rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PersistedStyle")
)]
pub struct Pagination {
    tile_width: i32,
    arrow_width: i32,
    spacing: i32,
    selected_colors: ColorState,
    unselected_colors: ColorState,
    arrow_colors: ColorState,
    ellipsis_color: Color,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            tile_width: 40,
            arrow_width: 40,
            spacing: 8,
            selected_colors: palette::pagination_selected(),
            unselected_colors: palette::pagination_unselected(),
            arrow_colors: palette::pagination_arrow(),
            ellipsis_color: palette::ELLIPSIS,
        }
    }
}

#[cfg(feature = "state-persistence")]
#[derive(serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PersistedStyle {
    tile_width: i32,
    arrow_width: i32,
    spacing: i32,
    selected_colors: ColorState,
    unselected_colors: ColorState,
    arrow_colors: ColorState,
    ellipsis_color: Color,
}

#[cfg(feature = "state-persistence")]
impl Default for PersistedStyle {
    fn default() -> Self {
        let stock = Pagination::default();
        Self {
            tile_width: stock.tile_width,
            arrow_width: stock.arrow_width,
            spacing: stock.spacing,
            selected_colors: stock.selected_colors,
            unselected_colors: stock.unselected_colors,
            arrow_colors: stock.arrow_colors,
            ellipsis_color: stock.ellipsis_color,
        }
    }
}

#[cfg(feature = "state-persistence")]
impl TryFrom<PersistedStyle> for Pagination {
    type Error = PaginationSizeError;

    fn try_from(raw: PersistedStyle) -> Result<Self, Self::Error> {
        let pagination = Self {
            tile_width: raw.tile_width,
            arrow_width: raw.arrow_width,
            spacing: raw.spacing,
            selected_colors: raw.selected_colors,
            unselected_colors: raw.unselected_colors,
            arrow_colors: raw.arrow_colors,
            ellipsis_color: raw.ellipsis_color,
        };
        pagination.check_sizes()?;
        Ok(pagination)
    }
}

impl Pagination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the size invariants.
    pub fn check_sizes(&self) -> Result<(), PaginationSizeError> {
        if self.tile_width < 1 {
            return Err(PaginationSizeError::TileWidth(self.tile_width));
        }
        if self.arrow_width < 0 {
            return Err(PaginationSizeError::ArrowWidth(self.arrow_width));
        }
        if self.spacing < 0 {
            return Err(PaginationSizeError::Spacing(self.spacing));
        }
        Ok(())
    }

    /// Width of one page tile. Clamped to at least 1.
    #[must_use]
    pub fn tile_width(mut self, width: i32) -> Self {
        self.tile_width = width.max(1);
        self
    }

    /// Width of each arrow button.
    #[must_use]
    pub fn arrow_width(mut self, width: i32) -> Self {
        self.arrow_width = width.max(0);
        self
    }

    /// Gap between adjacent items.
    #[must_use]
    pub fn spacing(mut self, spacing: i32) -> Self {
        self.spacing = spacing.max(0);
        self
    }

    #[must_use]
    pub fn selected_colors(mut self, colors: ColorState) -> Self {
        self.selected_colors = colors;
        self
    }

    #[must_use]
    pub fn unselected_colors(mut self, colors: ColorState) -> Self {
        self.unselected_colors = colors;
        self
    }

    #[must_use]
    pub fn arrow_colors(mut self, colors: ColorState) -> Self {
        self.arrow_colors = colors;
        self
    }

    #[must_use]
    pub fn ellipsis_color(mut self, color: Color) -> Self {
        self.ellipsis_color = color;
        self
    }

    /// How many page tiles fit in `container_width` next to both arrows.
    ///
    /// Zero when the container is too narrow for even one tile.
    pub fn available_slots(&self, container_width: i32) -> usize {
        let inner = i64::from(container_width)
            - 2 * i64::from(self.arrow_width)
            - 2 * i64::from(self.spacing);
        if inner < i64::from(self.tile_width) {
            return 0;
        }
        let step = (i64::from(self.tile_width) + i64::from(self.spacing)).max(1);
        usize::try_from((inner + i64::from(self.spacing)) / step).unwrap_or(0)
    }

    /// Lay out the strip for `state` inside `container_width`.
    pub fn layout(
        &self,
        state: &PaginationState,
        container_width: i32,
    ) -> Result<PaginationLayout, PaginationError> {
        let slots = self.available_slots(container_width);
        let window = compute_window(state.total_pages(), state.selected(), slots)?;

        // Positions saturate at i32::MAX for oversized configurations.
        let step = self.tile_width.saturating_add(self.spacing);
        let first_tile_x = self.arrow_width.saturating_add(self.spacing);
        let tiles: Vec<TileView> = window
            .into_iter()
            .zip((0i32..).map(|i| first_tile_x.saturating_add(i.saturating_mul(step))))
            .map(|(tile, x)| {
                let selected = tile == Tile::Number(state.selected());
                let colors = match tile {
                    Tile::Ellipsis => ColorState::new(self.ellipsis_color),
                    Tile::Number(_) if selected => self.selected_colors,
                    Tile::Number(_) => self.unselected_colors,
                };
                TileView {
                    tile,
                    x,
                    width: self.tile_width,
                    selected,
                    colors,
                }
            })
            .collect();

        let next_x = match tiles.last() {
            Some(last) => last.end().saturating_add(self.spacing),
            None => first_tile_x,
        };

        Ok(PaginationLayout {
            previous: ArrowView {
                x: 0,
                width: self.arrow_width,
                enabled: state.has_previous(),
                colors: self.arrow_colors,
            },
            tiles,
            next: ArrowView {
                x: next_x,
                width: self.arrow_width,
                enabled: state.has_next(),
                colors: self.arrow_colors,
            },
        })
    }
}

/// A laid-out previous/next arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowView {
    pub x: i32,
    pub width: i32,
    pub enabled: bool,
    colors: ColorState,
}

impl ArrowView {
    /// Arrow color; a disabled arrow ignores the pointer state.
    pub fn color(&self, interaction: InteractionState) -> Color {
        if self.enabled {
            self.colors.resolve(interaction)
        } else {
            self.colors.resolve(InteractionState::Disabled)
        }
    }

    #[inline]
    fn contains(&self, x: i32) -> bool {
        x >= self.x && x < self.x.saturating_add(self.width)
    }
}

/// A laid-out page tile or ellipsis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileView {
    pub tile: Tile,
    pub x: i32,
    pub width: i32,
    pub selected: bool,
    colors: ColorState,
}

impl TileView {
    /// Tile background color. Ellipses are not interactive.
    pub fn color(&self, interaction: InteractionState) -> Color {
        match self.tile {
            Tile::Ellipsis => self.colors.default,
            Tile::Number(_) => self.colors.resolve(interaction),
        }
    }

    /// Label text, one-based.
    pub fn label(&self) -> String {
        self.tile.to_string()
    }

    #[inline]
    fn end(&self) -> i32 {
        self.x.saturating_add(self.width)
    }
}

/// Output of [`Pagination::layout`], x positions relative to the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationLayout {
    pub previous: ArrowView,
    pub tiles: Vec<TileView>,
    pub next: ArrowView,
}

impl PaginationLayout {
    /// Map an x coordinate to what it would activate.
    ///
    /// Disabled arrows, ellipses and gaps hit nothing.
    pub fn hit_test(&self, x: i32) -> Option<PaginationHit> {
        if self.previous.contains(x) {
            return self.previous.enabled.then_some(PaginationHit::Previous);
        }
        if self.next.contains(x) {
            return self.next.enabled.then_some(PaginationHit::Next);
        }
        self.tiles
            .iter()
            .find(|view| x >= view.x && x < view.end())
            .and_then(|view| view.tile.page())
            .map(PaginationHit::Page)
    }

    /// Total width used by the strip.
    pub fn width(&self) -> i32 {
        self.next.x.saturating_add(self.next.width)
    }
}
