//! Interface to the rendering collaborator that owns the scroll container

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{ContentAlignment, OffsetOrigin};

/// Commands and queries the carousel issues against its host viewport.
///
/// Offsets passed through this trait are raw, in the host's own convention
/// (see [`OffsetOrigin`]).
pub trait Viewport {
    /// Visible width of the scroll container.
    fn viewport_width(&self) -> f32;

    /// Current raw scroll offset.
    fn scroll_offset(&self) -> f32;

    /// Scroll to a raw offset.
    fn set_scroll_offset(&mut self, offset: f32);

    /// Toggle the "being dragged" presentation (grabbing cursor etc).
    fn set_drag_presentation(&mut self, active: bool);

    /// Lay the strip out at the given alignment.
    fn set_content_alignment(&mut self, _alignment: ContentAlignment) {}

    /// Total width of the items the host lays out. Hosts that measure their
    /// own content can ignore this.
    fn set_content_width(&mut self, _content_width: f32) {}

    /// Convention the host reports offsets in. Only consulted for mirrored
    /// layouts; non-mirrored hosts always measure from the left.
    fn offset_origin(&self) -> OffsetOrigin {
        OffsetOrigin::Left
    }

    /// Whether the host clamps offsets to its scroll range on its own.
    fn clamps_offsets(&self) -> bool {
        true
    }
}

/// A scroll container kept in memory.
///
/// Behaves like a native scroll region: writes are clamped to the valid
/// range for the configured content width, unless clamping is switched off
/// to model hosts that accept any value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MemoryViewport {
    width: f32,
    content_width: f32,
    offset: f32,
    origin: OffsetOrigin,
    clamps: bool,
    drag_presentation: bool,
    alignment: ContentAlignment,
    writes: usize,
}

impl MemoryViewport {
    /// Left-origin viewport of `width` over `content_width`, scrolled to 0.
    pub fn new(width: f32, content_width: f32) -> Self {
        Self {
            width,
            content_width,
            offset: 0.0,
            origin: OffsetOrigin::Left,
            clamps: true,
            drag_presentation: false,
            alignment: ContentAlignment::Start,
            writes: 0,
        }
    }

    /// Report offsets from `origin`.
    pub fn with_origin(mut self, origin: OffsetOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Switch clamping of written offsets.
    pub fn with_clamping(mut self, clamps: bool) -> Self {
        self.clamps = clamps;
        self
    }

    /// Start at a raw offset.
    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    /// Change the visible width, reclamping the offset.
    pub fn resize(&mut self, width: f32) {
        self.width = width.max(0.0);
        self.reclamp();
    }

    /// Width of the content being scrolled.
    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    /// Largest physical offset.
    pub fn max_scroll(&self) -> f32 {
        (self.content_width - self.width).max(0.0)
    }

    /// Whether the drag presentation is on.
    pub fn drag_presentation(&self) -> bool {
        self.drag_presentation
    }

    /// Alignment last requested.
    pub fn alignment(&self) -> ContentAlignment {
        self.alignment
    }

    /// Number of offset writes received.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Current offset measured from the content's left edge.
    pub fn physical_offset(&self) -> f32 {
        self.origin.to_physical(self.offset, self.max_scroll())
    }

    fn reclamp(&mut self) {
        if self.clamps {
            self.offset = self.origin.clamp(self.offset, self.max_scroll());
        }
    }
}

impl Viewport for MemoryViewport {
    fn viewport_width(&self) -> f32 {
        self.width
    }

    fn scroll_offset(&self) -> f32 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: f32) {
        self.writes += 1;
        self.offset = offset;
        self.reclamp();
    }

    fn set_drag_presentation(&mut self, active: bool) {
        self.drag_presentation = active;
    }

    fn set_content_alignment(&mut self, alignment: ContentAlignment) {
        self.alignment = alignment;
    }

    fn set_content_width(&mut self, content_width: f32) {
        self.content_width = content_width.max(0.0);
        self.reclamp();
    }

    fn offset_origin(&self) -> OffsetOrigin {
        self.origin
    }

    fn clamps_offsets(&self) -> bool {
        self.clamps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_writes_to_scroll_range() {
        let mut viewport = MemoryViewport::new(250.0, 300.0);
        viewport.set_scroll_offset(500.0);
        assert_eq!(viewport.scroll_offset(), 50.0);
        viewport.set_scroll_offset(-20.0);
        assert_eq!(viewport.scroll_offset(), 0.0);
        assert_eq!(viewport.writes(), 2);
    }

    #[test]
    fn right_origin_clamps_to_negative_range() {
        let mut viewport =
            MemoryViewport::new(250.0, 300.0).with_origin(OffsetOrigin::Right);
        viewport.set_scroll_offset(-500.0);
        assert_eq!(viewport.scroll_offset(), -50.0);
        assert_eq!(viewport.physical_offset(), 0.0);
        viewport.set_scroll_offset(20.0);
        assert_eq!(viewport.scroll_offset(), 0.0);
        assert_eq!(viewport.physical_offset(), 50.0);
    }

    #[test]
    fn unclamped_viewport_keeps_raw_values() {
        let mut viewport = MemoryViewport::new(250.0, 300.0).with_clamping(false);
        viewport.set_scroll_offset(-75.0);
        assert_eq!(viewport.scroll_offset(), -75.0);
    }

    #[test]
    fn resize_pulls_offset_back_into_range() {
        let mut viewport = MemoryViewport::new(100.0, 300.0).with_offset(200.0);
        viewport.resize(200.0);
        assert_eq!(viewport.scroll_offset(), 100.0);
        viewport.resize(400.0);
        assert_eq!(viewport.scroll_offset(), 0.0);
    }

    #[test]
    fn shrinking_content_reclamps() {
        let mut viewport = MemoryViewport::new(100.0, 500.0).with_offset(350.0);
        viewport.set_content_width(300.0);
        assert_eq!(viewport.scroll_offset(), 200.0);
    }
}
