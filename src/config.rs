//! User settings for the paint widget.
//!
//! Settings are read from `<config dir>/pypaint/config.json`. Every field is
//! optional; anything missing falls back to the defaults below.
//!
//! ```json
//! {
//!     "save_dir": "/home/me/Pictures/PyPaint",
//!     "title_bar_height": 30.0,
//!     "brush_color": [255, 0, 0],
//!     "brush_size": 4
//! }
//! ```

use crate::error::{PaintError, PaintResult};
use crate::tool::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};
use egui::Color32;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const MIN_FONT_SIZE: f32 = 6.0;
const MAX_FONT_SIZE: f32 = 72.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    /// Directory saved images are written to.
    pub save_dir: PathBuf,
    /// Saved images are named `<file_prefix>_<n>.<file_extension>`.
    pub file_prefix: String,
    pub file_extension: String,
    /// Height of the host window's title bar. Pointer positions are shifted
    /// up by this much before hit-testing.
    pub title_bar_height: f32,
    /// Optional font file; the built-in proportional font is used when unset.
    pub font_path: Option<PathBuf>,
    pub font_size: f32,
    pub brush_color: [u8; 3],
    pub brush_size: u32,
    pub background_color: [u8; 3],
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            save_dir: dirs::picture_dir()
                .unwrap_or_else(|| PathBuf::from("Pictures"))
                .join("PyPaint"),
            file_prefix: "pypaint".to_owned(),
            file_extension: "png".to_owned(),
            title_bar_height: 30.0,
            font_path: None,
            font_size: 18.0,
            brush_color: [255, 255, 255],
            brush_size: 4,
            background_color: [0, 0, 0],
        }
    }
}

impl PaintConfig {
    /// Location of the user's config file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pypaint").join("config.json"))
    }

    /// Loads the config at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> PaintResult<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&text).map_err(|source| PaintError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate_and_clamp();

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Clamps out-of-range values, logging a warning for each one.
    pub fn validate_and_clamp(&mut self) {
        if !(MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE).contains(&self.brush_size) {
            log::warn!(
                "Invalid brush_size {}, clamping to {}-{} range",
                self.brush_size,
                MIN_BRUSH_SIZE,
                MAX_BRUSH_SIZE
            );
            self.brush_size = self.brush_size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
        }

        if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&self.font_size) {
            log::warn!(
                "Invalid font_size {:.1}, clamping to {:.0}-{:.0} range",
                self.font_size,
                MIN_FONT_SIZE,
                MAX_FONT_SIZE
            );
            self.font_size = self.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        }

        if self.title_bar_height.is_nan() || self.title_bar_height < 0.0 {
            log::warn!("Invalid title_bar_height {:.1}, using 0", self.title_bar_height);
            self.title_bar_height = 0.0;
        }
    }

    pub fn brush_color32(&self) -> Color32 {
        let [r, g, b] = self.brush_color;
        Color32::from_rgb(r, g, b)
    }

    pub fn background_color32(&self) -> Color32 {
        let [r, g, b] = self.background_color;
        Color32::from_rgb(r, g, b)
    }
}
