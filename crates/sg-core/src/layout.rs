//! Auto-layout: place slides left-to-right in presentation order.
//!
//! Single pass over the ordered slides. Every slide shares one `y`; the
//! `x` cursor starts at `origin_x` and advances by the slide's width plus
//! `gap`, so the strip never overlaps regardless of where slides were.

use crate::model::{Position, SlideNode};

/// Auto-layout parameters, in canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Left edge of the first slide.
    pub origin_x: f32,
    /// Shared top edge of every slide.
    pub row_y: f32,
    /// Horizontal space between neighbouring slides.
    pub gap: f32,
    /// Width assumed for slides without an explicit width.
    pub default_width: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            origin_x: 150.0,
            row_y: 150.0,
            gap: 50.0,
            default_width: crate::model::NOMINAL_SLIDE_WIDTH,
        }
    }
}

impl LayoutConfig {
    /// Width a slide occupies on the strip.
    pub fn width_of(&self, node: &SlideNode) -> f32 {
        node.width
            .filter(|w| w.is_finite() && *w > 0.0)
            .unwrap_or(self.default_width)
    }
}

/// Reposition `ordered` slides into a horizontal strip.
///
/// Returns new nodes; everything except `position` is carried over unchanged.
pub fn auto_layout<'a, I>(ordered: I, config: &LayoutConfig) -> Vec<SlideNode>
where
    I: IntoIterator<Item = &'a SlideNode>,
{
    let mut cursor = config.origin_x;
    ordered
        .into_iter()
        .map(|node| {
            let placed = SlideNode {
                position: Position::new(cursor, config.row_y),
                ..node.clone()
            };
            cursor += config.width_of(node) + config.gap;
            placed
        })
        .collect()
}
