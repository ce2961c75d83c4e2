//! Export settings.

use sg_core::{AspectRatio, DEFAULT_FONT_SIZE};
use std::time::Duration;

/// Width of the output canvas in inches; the height follows the aspect ratio.
pub const CANVAS_WIDTH_IN: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    /// File name written inside the output directory.
    pub file_name: String,
    /// Output canvas width in inches.
    pub canvas_width: f64,
    /// Font size, in points, for text whose size is missing or unparsable.
    pub default_font_size: f32,
    /// Per-asset fetch timeout. `None` leaves the HTTP client default.
    pub fetch_timeout: Option<Duration>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: "MyPresentation.pptx".to_string(),
            canvas_width: CANVAS_WIDTH_IN,
            default_font_size: DEFAULT_FONT_SIZE,
            fetch_timeout: None,
        }
    }
}

impl ExportConfig {
    /// Output canvas `(width, height)` in inches: 10 × 5.625 for 16:9,
    /// 10 × 7.5 for 4:3.
    pub fn canvas_size(&self, aspect: AspectRatio) -> (f64, f64) {
        let height = match aspect {
            AspectRatio::Widescreen => self.canvas_width * 9.0 / 16.0,
            AspectRatio::Standard => self.canvas_width * 3.0 / 4.0,
        };
        (self.canvas_width, height)
    }
}
