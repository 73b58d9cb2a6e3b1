//! Carousel controller: owns the offset and drag session, wires events to
//! the viewport and keeps control visibility in step with the offset.

use std::ops::Range;

use crate::{
    config::CarouselConfig,
    drag::DragTracker,
    error::Result,
    events::{EventTarget, GestureEvent},
    geometry::ViewportGeometry,
    step::compute_target,
    types::{ContentAlignment, Direction, OffsetOrigin, Side},
    viewport::Viewport,
    visibility::{VisibilityState, derive_visibility},
};

/// A mounted carousel driving a host [`Viewport`].
///
/// All mutation happens synchronously inside the handler for one event, and
/// visibility is re-derived in the same call that changed the offset. During
/// a drag, visibility is held until the gesture ends.
#[derive(Debug)]
pub struct Carousel<V> {
    config: CarouselConfig,
    viewport: V,
    drag: DragTracker,
    visibility: VisibilityState,
    /// Geometry the current visibility was derived from.
    layout: ViewportGeometry,
    /// Distance from the reading start, kept across geometry changes.
    reading_position: f32,
}

impl<V: Viewport> Carousel<V> {
    /// Mount onto `viewport`: lay out, seed the initial offset and derive
    /// visibility once.
    pub fn mount(config: CarouselConfig, mut viewport: V) -> Self {
        viewport.set_content_width(config.content_width());
        let mut carousel = Self {
            config,
            viewport,
            drag: DragTracker::new(config.draggable()),
            visibility: VisibilityState::HIDDEN,
            layout: ViewportGeometry::default(),
            reading_position: 0.0,
        };

        if carousel.apply_alignment() {
            log::debug!(
                "carousel content fits ({} items in {}), controls disabled",
                config.item_count(),
                carousel.viewport.viewport_width()
            );
        } else {
            carousel.seed_initial_offset();
        }
        carousel.recompute_visibility();

        log::debug!(
            "carousel mounted: items={}, item_width={}, mirrored={}, visibility={:?}",
            config.item_count(),
            config.item_width(),
            config.mirrored(),
            carousel.visibility
        );
        carousel
    }

    /// Configuration in effect.
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Control visibility as last derived.
    pub fn visibility(&self) -> VisibilityState {
        self.visibility
    }

    /// Whether a drag session is open.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// The host viewport.
    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Mutable access for hosts that resize or reconfigure the viewport.
    /// Follow up with [`Carousel::refresh_geometry`].
    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    /// Unmount, handing the viewport back.
    pub fn into_viewport(self) -> V {
        self.viewport
    }

    /// Current widths as reported by the viewport and configuration.
    pub fn geometry(&self) -> ViewportGeometry {
        ViewportGeometry::for_config(
            &self.config,
            self.viewport.viewport_width(),
        )
    }

    /// Current offset measured from the content's left edge.
    pub fn physical_offset(&self) -> f32 {
        let max_scroll = self.geometry().max_scroll();
        self.origin()
            .to_physical(self.viewport.scroll_offset(), max_scroll)
    }

    /// Feed one pointer or touch event.
    pub fn handle(&mut self, event: GestureEvent) {
        let Some(event) = event.as_pointer() else {
            log::trace!("ignoring touch event without touch points");
            return;
        };

        match event {
            GestureEvent::PointerDown {
                client_x,
                target: EventTarget::Track,
            } => {
                let was_dragging = self.drag.is_dragging();
                self.drag
                    .pointer_down(client_x, self.viewport.scroll_offset());
                if !was_dragging {
                    self.viewport.set_drag_presentation(true);
                    log::debug!("drag started at x={client_x}");
                }
            }
            GestureEvent::PointerDown {
                target: EventTarget::Control(direction),
                ..
            } => {
                log::trace!("pointer down on {direction:?} control, no drag");
            }
            GestureEvent::PointerMove { client_x } => {
                if let Some(offset) = self.drag.pointer_move(client_x) {
                    log::trace!("drag to x={client_x}, offset={offset}");
                    self.write_offset(offset);
                }
            }
            GestureEvent::PointerUp | GestureEvent::PointerLeave => {
                if self.drag.release().is_some() {
                    self.viewport.set_drag_presentation(false);
                    log::debug!(
                        "drag ended at offset={}",
                        self.viewport.scroll_offset()
                    );
                }
                self.recompute_visibility();
            }
            GestureEvent::TouchStart { .. }
            | GestureEvent::TouchMove { .. }
            | GestureEvent::TouchEnd
            | GestureEvent::TouchCancel => {}
        }
    }

    /// Step one page in `direction`. Returns false when the control for
    /// that direction is not shown and nothing moved. An open drag keeps
    /// following the pointer from the stepped position.
    pub fn activate(&mut self, direction: Direction) -> bool {
        if !self.visibility.shows(direction) {
            log::debug!("ignoring {direction:?}: control hidden");
            return false;
        }

        let current = self.viewport.scroll_offset();
        let target = compute_target(
            current,
            &self.config,
            direction == Direction::Advance,
        );
        log::debug!("{direction:?}: offset {current} -> {target}");
        self.write_offset(target);
        self.drag.shift_anchor(self.viewport.scroll_offset() - current);
        self.recompute_visibility();
        true
    }

    /// Activate whichever control sits on the given physical side.
    pub fn activate_side(&mut self, side: Side) -> bool {
        self.activate(Direction::from_side(side, self.config.mirrored()))
    }

    /// Re-read geometry after the host resized the viewport.
    ///
    /// Content that starts scrolling opens at the initial item, as on
    /// mount. Mirrored layouts on left-origin hosts keep their distance from
    /// the right edge, where reading starts.
    pub fn refresh_geometry(&mut self) {
        let was_fitting = self.layout.fits_without_scroll();
        let fits = self.apply_alignment();
        if was_fitting && !fits {
            self.seed_initial_offset();
        } else if !fits && self.anchored_right() {
            self.restore_reading_position();
        }
        self.recompute_visibility();
        log::debug!(
            "geometry refreshed: viewport={}, visibility={:?}",
            self.viewport.viewport_width(),
            self.visibility
        );
    }

    /// The host's item list changed length.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.config.set_item_count(item_count);
        self.viewport.set_content_width(self.config.content_width());
        self.refresh_geometry();
    }

    /// The item width changed. Invalid widths leave the carousel untouched.
    pub fn set_item_width(&mut self, item_width: f32) -> Result<()> {
        self.config.set_item_width(item_width)?;
        self.viewport.set_content_width(self.config.content_width());
        self.refresh_geometry();
        Ok(())
    }

    /// Reading-order indices of the items at least partly in view.
    pub fn visible_items(&self) -> Range<usize> {
        let count = self.config.item_count();
        let geometry = self.geometry();
        if count == 0 || geometry.fits_without_scroll() {
            return 0..count;
        }

        let width = self.config.item_width();
        let left = self.physical_offset().clamp(0.0, geometry.max_scroll());
        let right = left + geometry.viewport_width;
        let first_slot = ((left / width).floor() as usize).min(count);
        let end_slot = ((right / width).ceil() as usize).min(count);

        if self.config.mirrored() {
            (count - end_slot)..(count - first_slot)
        } else {
            first_slot..end_slot
        }
    }

    /// First item in reading order that is at least partly in view.
    pub fn first_visible_item(&self) -> Option<usize> {
        let range = self.visible_items();
        (!range.is_empty()).then_some(range.start)
    }

    /// Mirrored layout whose host measures offsets from the left, so raw
    /// offsets drift against reading order when widths change.
    fn anchored_right(&self) -> bool {
        self.config.mirrored()
            && self.viewport.offset_origin() == OffsetOrigin::Left
    }

    fn reading_distance(&self) -> f32 {
        let physical = self.physical_offset();
        if self.config.mirrored() {
            self.geometry().max_scroll() - physical
        } else {
            physical
        }
    }

    fn restore_reading_position(&mut self) {
        let max_scroll = self.geometry().max_scroll();
        let physical =
            (max_scroll - self.reading_position).clamp(0.0, max_scroll);
        let raw = self.origin().from_physical(physical, max_scroll);
        if (raw - self.viewport.scroll_offset()).abs() > f32::EPSILON {
            log::debug!("keeping reading position: offset -> {raw}");
            self.write_offset(raw);
        }
    }

    fn origin(&self) -> OffsetOrigin {
        if self.config.mirrored() {
            self.viewport.offset_origin()
        } else {
            OffsetOrigin::Left
        }
    }

    /// Center fitting content, start-align scrolling content. Returns
    /// whether the content fits.
    fn apply_alignment(&mut self) -> bool {
        let fits = self.geometry().fits_without_scroll();
        self.viewport.set_content_alignment(if fits {
            ContentAlignment::Center
        } else {
            ContentAlignment::Start
        });
        fits
    }

    /// Scroll so item `initial_index` leads in reading order.
    fn seed_initial_offset(&mut self) {
        let max_scroll = self.geometry().max_scroll();
        let reading_offset =
            self.config.initial_index() as f32 * self.config.item_width();
        let physical = if self.config.mirrored() {
            max_scroll - reading_offset
        } else {
            reading_offset
        };
        let raw = self.origin().from_physical(physical, max_scroll);
        self.write_offset(raw);
    }

    fn write_offset(&mut self, raw: f32) {
        let raw = if self.viewport.clamps_offsets() {
            raw
        } else {
            self.origin().clamp(raw, self.geometry().max_scroll())
        };
        self.viewport.set_scroll_offset(raw);
        self.reading_position = self.reading_distance();
    }

    fn recompute_visibility(&mut self) {
        self.layout = self.geometry();
        self.reading_position = self.reading_distance();
        self.visibility = derive_visibility(
            self.physical_offset(),
            &self.layout,
            &self.config,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::MemoryViewport;

    fn config(items: usize) -> CarouselConfig {
        CarouselConfig::builder(100.0, items).build().unwrap()
    }

    fn mount(config: CarouselConfig, width: f32) -> Carousel<MemoryViewport> {
        Carousel::mount(config, MemoryViewport::new(width, 0.0))
    }

    #[test]
    fn mount_pushes_content_width_to_viewport() {
        let carousel = mount(config(3), 250.0);
        assert_eq!(carousel.viewport().content_width(), 300.0);
        assert_eq!(carousel.viewport().alignment(), ContentAlignment::Start);
    }

    #[test]
    fn mount_centers_fitting_content() {
        let carousel = mount(config(2), 300.0);
        assert_eq!(carousel.viewport().alignment(), ContentAlignment::Center);
        assert_eq!(carousel.visibility(), VisibilityState::HIDDEN);
        assert_eq!(carousel.viewport().writes(), 0);
    }

    #[test]
    fn mount_seeds_offset_from_initial_index() {
        let cfg = CarouselConfig::builder(100.0, 10)
            .initial_index(3)
            .build()
            .unwrap();
        let carousel = mount(cfg, 250.0);
        assert_eq!(carousel.viewport().scroll_offset(), 300.0);
        assert!(carousel.visibility().show_retreat);
        assert!(carousel.visibility().show_advance);
    }

    #[test]
    fn drag_toggles_presentation() {
        let mut carousel = mount(config(10), 250.0);
        carousel.handle(GestureEvent::down(100.0));
        assert!(carousel.is_dragging());
        assert!(carousel.viewport().drag_presentation());
        carousel.handle(GestureEvent::PointerUp);
        assert!(!carousel.is_dragging());
        assert!(!carousel.viewport().drag_presentation());
    }

    #[test]
    fn down_on_control_does_not_drag() {
        let mut carousel = mount(config(10), 250.0);
        carousel.handle(GestureEvent::PointerDown {
            client_x: 5.0,
            target: EventTarget::Control(Direction::Advance),
        });
        assert!(!carousel.is_dragging());
        assert!(!carousel.viewport().drag_presentation());
    }

    #[test]
    fn hidden_control_activation_is_ignored() {
        let mut carousel = mount(config(10), 250.0);
        assert!(!carousel.activate(Direction::Retreat));
        assert_eq!(carousel.viewport().writes(), 0);
    }

    #[test]
    fn activate_side_resolves_direction() {
        let mut carousel = mount(config(10), 250.0);
        assert!(carousel.activate_side(Side::Right));
        assert_eq!(carousel.viewport().scroll_offset(), 100.0);
        assert!(carousel.activate_side(Side::Left));
        assert_eq!(carousel.viewport().scroll_offset(), 0.0);
    }

    #[test]
    fn visible_items_cover_partial_slots() {
        let mut carousel = mount(config(10), 250.0);
        assert_eq!(carousel.visible_items(), 0..3);
        carousel.activate(Direction::Advance);
        assert_eq!(carousel.visible_items(), 1..4);
        assert_eq!(carousel.first_visible_item(), Some(1));
    }

    #[test]
    fn visible_items_in_mirrored_layout_count_from_the_right() {
        let cfg = CarouselConfig::builder(100.0, 10)
            .mirrored(true)
            .build()
            .unwrap();
        let carousel = mount(cfg, 250.0);
        // Seeded at the right edge, where reading order starts
        assert_eq!(carousel.physical_offset(), 750.0);
        assert_eq!(carousel.visible_items(), 0..3);
    }

    #[test]
    fn empty_carousel_has_no_visible_items() {
        let carousel = mount(config(0), 250.0);
        assert_eq!(carousel.visible_items(), 0..0);
        assert_eq!(carousel.first_visible_item(), None);
    }
}
