//! Geometry model: content extent and boundary predicates
//!
//! Pure functions over widths and offsets. Offsets here are physical, i.e.
//! measured from the content's left edge.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::CarouselConfig;

/// Tolerance for boundary comparisons. Hosts round scroll positions to
/// device pixels, so exact equality against the extent is unreliable.
pub const BOUNDARY_EPSILON: f32 = 0.5;

/// Snapshot of the widths that decide whether and how far the strip scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ViewportGeometry {
    /// Visible width of the scroll container.
    pub viewport_width: f32,
    /// Total width of all items.
    pub content_width: f32,
}

impl ViewportGeometry {
    /// Geometry from explicit widths.
    pub fn new(viewport_width: f32, content_width: f32) -> Self {
        Self {
            viewport_width,
            content_width,
        }
    }

    /// Geometry of `config`'s items inside a viewport of the given width.
    pub fn for_config(config: &CarouselConfig, viewport_width: f32) -> Self {
        Self::new(viewport_width, content_width(config))
    }

    /// Largest valid physical offset.
    pub fn max_scroll(&self) -> f32 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    /// Whether everything is visible without scrolling.
    pub fn fits_without_scroll(&self) -> bool {
        fits_without_scroll(self)
    }
}

/// Total width of all items laid end to end.
pub fn content_width(config: &CarouselConfig) -> f32 {
    config.content_width()
}

/// Whether the viewport shows the left edge of the content.
pub fn is_at_start(offset: f32) -> bool {
    offset <= BOUNDARY_EPSILON
}

/// Whether the viewport shows the right edge of the content.
pub fn is_at_end(offset: f32, geometry: &ViewportGeometry) -> bool {
    offset.abs() + geometry.viewport_width
        >= geometry.content_width - BOUNDARY_EPSILON
}

/// Whether all content is visible at once.
pub fn fits_without_scroll(geometry: &ViewportGeometry) -> bool {
    geometry.viewport_width >= geometry.content_width
}
