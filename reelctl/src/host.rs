//! Terminal host state: a carousel over an in-memory viewport plus the item
//! labels it shows.

use std::ops::Range;

use anyhow::Result;
use reel_config::CarouselSettings;
use reel_core::{
    Carousel, ContentAlignment, Direction, EventTarget, GestureEvent,
    MemoryViewport, Side, Viewport, VisibilityState,
};
use serde::Serialize;

/// Widest viewport the host lays out, in columns.
pub const MAX_VIEWPORT_WIDTH: f32 = 4096.0;

/// Clamp a requested viewport width to what the host can draw.
pub fn clamp_viewport_width(width: f32) -> f32 {
    if width.is_nan() {
        0.0
    } else {
        width.clamp(0.0, MAX_VIEWPORT_WIDTH)
    }
}

/// Input the host understands, whether it came from the terminal or from a
/// script.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// Activate the control on a physical side (arrow keys).
    Activate(Side),
    /// Activate a control by its logical direction.
    Step(Direction),
    /// A click on a drawn control.
    ControlClick(Side),
    /// Pointer or touch input on the track.
    Gesture(GestureEvent),
    /// New viewport width in columns.
    Resize(f32),
    /// Stop the host.
    Quit,
}

/// Observable host state, printed as JSON by headless runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostSnapshot {
    /// Viewport width in columns.
    pub viewport_width: f32,
    /// Width of all items.
    pub content_width: f32,
    /// Largest physical offset.
    pub max_scroll: f32,
    /// Offset as stored by the viewport.
    pub offset: f32,
    /// Offset from the content's left edge.
    pub physical_offset: f32,
    /// Right-to-left layout.
    pub mirrored: bool,
    /// Whether a drag is open.
    pub dragging: bool,
    /// Current content alignment.
    pub alignment: ContentAlignment,
    /// Controls shown.
    pub visibility: VisibilityState,
    /// Reading-order indices in view.
    pub visible_items: Range<usize>,
    /// First item in view, in reading order.
    pub first_visible: Option<usize>,
    /// Label of `first_visible`.
    pub first_visible_label: Option<String>,
}

/// A carousel mounted on an in-memory viewport, with its item labels.
#[derive(Debug)]
pub struct TerminalHost {
    carousel: Carousel<MemoryViewport>,
    labels: Vec<String>,
}

impl TerminalHost {
    /// Mount a carousel for `settings` in a viewport `viewport_width` columns wide.
    pub fn new(settings: &CarouselSettings, viewport_width: f32) -> Result<Self> {
        let config = settings.to_config()?;
        let carousel = Carousel::mount(
            config,
            MemoryViewport::new(clamp_viewport_width(viewport_width), 0.0),
        );
        Ok(Self {
            carousel,
            labels: settings.labels(),
        })
    }

    /// The mounted carousel.
    pub fn carousel(&self) -> &Carousel<MemoryViewport> {
        &self.carousel
    }

    /// Labels in reading order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Current viewport width in columns.
    pub fn viewport_width(&self) -> f32 {
        self.carousel.viewport().viewport_width()
    }

    /// Apply one event. Returns false once the host should shut down.
    pub fn apply(&mut self, event: HostEvent) -> bool {
        tracing::trace!(?event, "host event");
        match event {
            HostEvent::Activate(side) => {
                if !self.carousel.activate_side(side) {
                    tracing::debug!(?side, "no control on that side");
                }
            }
            HostEvent::Step(direction) => {
                self.carousel.activate(direction);
            }
            HostEvent::ControlClick(side) => {
                let mirrored = self.carousel.config().mirrored();
                if let Some(direction) =
                    self.carousel.visibility().control_at(side, mirrored)
                {
                    self.carousel.handle(GestureEvent::PointerDown {
                        client_x: 0.0,
                        target: EventTarget::Control(direction),
                    });
                    self.carousel.activate(direction);
                }
            }
            HostEvent::Gesture(gesture) => self.carousel.handle(gesture),
            HostEvent::Resize(width) => {
                let width = clamp_viewport_width(width);
                if (width - self.viewport_width()).abs() > f32::EPSILON {
                    self.carousel.viewport_mut().resize(width);
                    self.carousel.refresh_geometry();
                    tracing::debug!(width, "viewport resized");
                }
            }
            HostEvent::Quit => return false,
        }
        true
    }

    /// Capture the observable state.
    pub fn snapshot(&self) -> HostSnapshot {
        let viewport = self.carousel.viewport();
        let first_visible = self.carousel.first_visible_item();
        HostSnapshot {
            viewport_width: viewport.viewport_width(),
            content_width: viewport.content_width(),
            max_scroll: viewport.max_scroll(),
            offset: viewport.scroll_offset(),
            physical_offset: self.carousel.physical_offset(),
            mirrored: self.carousel.config().mirrored(),
            dragging: self.carousel.is_dragging(),
            alignment: viewport.alignment(),
            visibility: self.carousel.visibility(),
            visible_items: self.carousel.visible_items(),
            first_visible,
            first_visible_label: first_visible
                .and_then(|index| self.labels.get(index).cloned()),
        }
    }
}
