#![forbid(unsafe_code)]

//! Showcase configuration, optionally loaded from a JSON file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sirio::{Error, Offset, Pagination, Result, Size};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShowcaseConfig {
    /// Page count of the demo pagination strip.
    pub total_pages: usize,
    /// Container widths the strip is laid out in.
    pub container_widths: Vec<i32>,
    /// Viewport the popups are placed in.
    pub viewport: Size,
    /// Measured popup content size.
    pub popup_size: Size,
    /// Gap between anchor and popup.
    pub offset: Offset,
    /// Time step between rendered animation frames.
    pub frame_step_ms: u64,
    pub pagination: Pagination,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            total_pages: 20,
            container_widths: vec![136, 280, 400, 1200],
            viewport: Size::new(360, 640),
            popup_size: Size::new(180, 220),
            offset: Offset::new(0, 4),
            frame_step_ms: 50,
            pagination: Pagination::default(),
        }
    }
}

impl ShowcaseConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| Error::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.total_pages == 0 {
            return Err(Error::Config("total_pages must be at least 1".into()));
        }
        if self.frame_step_ms == 0 {
            return Err(Error::Config("frame_step_ms must be positive".into()));
        }
        if self.viewport.width <= 0 || self.viewport.height <= 0 {
            return Err(Error::Config(format!(
                "viewport must be non-empty, got {}x{}",
                self.viewport.width, self.viewport.height
            )));
        }
        self.pagination.check_sizes()?;
        Ok(())
    }
}

/// Load the configuration from `path`, or the defaults when absent.
pub fn load(path: Option<&Path>) -> Result<ShowcaseConfig> {
    match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading showcase config");
            ShowcaseConfig::from_json(&fs::read_to_string(path)?)
        }
        None => Ok(ShowcaseConfig::default()),
    }
}
