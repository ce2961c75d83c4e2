//! Unit conversion from editor pixels to output inches.
//!
//! A pixel length is scaled by `canvas / node`, so a box keeps its relative
//! place when the slide is mapped onto the fixed-size output canvas.
//! Percentages pass through untouched: the output format places them
//! relative to the canvas itself.

use crate::element::{Coord, Frame};
use sg_core::{CssLength, Length, LayerStyle};

pub const EMU_PER_INCH: f64 = 914_400.0;

/// Convert one length measured against `node_px` pixels.
pub fn to_output(length: Length, node_px: f32, canvas_in: f64) -> Coord {
    match length {
        Length::Percent(p) => Coord::Percent(f64::from(p)),
        Length::Px(_) if node_px <= 0.0 => Coord::Inches(0.0),
        Length::Px(v) => Coord::Inches(f64::from(v) / f64::from(node_px) * canvas_in),
    }
}

/// Bounding box of a layer on the output canvas.
///
/// Horizontal values scale against the slide width, vertical ones against
/// its height. Missing values count as zero.
pub fn frame_of(style: &LayerStyle, node_size: (f32, f32), canvas: (f64, f64)) -> Frame {
    let conv = |value: &Option<CssLength>, px: f32, inches: f64| {
        let length = value.as_ref().map(CssLength::length).unwrap_or_default();
        to_output(length, px, inches)
    };
    Frame {
        x: conv(&style.left, node_size.0, canvas.0),
        y: conv(&style.top, node_size.1, canvas.1),
        w: conv(&style.width, node_size.0, canvas.0),
        h: conv(&style.height, node_size.1, canvas.1),
    }
}

impl Coord {
    /// Absolute inches along an axis of `axis_in` inches.
    pub fn resolve(self, axis_in: f64) -> f64 {
        match self {
            Coord::Inches(v) => v,
            Coord::Percent(p) => p / 100.0 * axis_in,
        }
    }

    /// English Metric Units along an axis of `axis_in` inches.
    pub fn to_emu(self, axis_in: f64) -> i64 {
        (self.resolve(axis_in) * EMU_PER_INCH).round() as i64
    }
}
