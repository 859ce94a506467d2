use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// RGBA color as stored in the TOML config (`[r, g, b, a]`).
pub type Color = [u8; 4];

/// Inclusive integer box `[x0, y0, x1, y1]`, the same convention the
/// rectangle primitives of common imaging libraries use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl Rect {
    pub fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// An inverted box covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Color,
    pub page: Color,
    pub border: Color,
    pub text_bar: Color,
    pub glyph: Color,
    pub placeholder: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [102, 126, 234, 255],
            page: [255, 255, 255, 255],
            border: [200, 200, 200, 255],
            text_bar: [150, 150, 150, 255],
            glyph: [255, 255, 255, 255],
            placeholder: [255, 255, 255, 200],
        }
    }
}

/// What ended up in the middle of the icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlyphOutcome {
    Drawn { source: String },
    Placeholder { reason: String },
}

impl GlyphOutcome {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, GlyphOutcome::Placeholder { .. })
    }
}

#[derive(Debug, Clone)]
pub struct RenderReport {
    pub size: u32,
    pub path: PathBuf,
    pub glyph: GlyphOutcome,
}

/// Per-size result of a driver run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub created: Vec<RenderReport>,
    pub skipped: Vec<(u32, PathBuf)>,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.created.len() + self.skipped.len()
    }
}
