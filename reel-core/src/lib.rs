//! Navigation state machine for a horizontally scrolling item carousel.
//!
//! The crate turns pointer/touch drags and discrete advance/retreat
//! activations into scroll offsets, and keeps the visibility of the
//! directional controls consistent with the resulting position. Mirrored
//! (right-to-left) layouts are handled throughout.
//!
//! Rendering is left to the host, which plugs in through the [`Viewport`]
//! trait. [`Carousel`] is the composition root hosts talk to; the pure
//! building blocks ([`geometry`], [`drag`], [`step`], [`visibility`]) are
//! public for hosts that want to drive them directly.

pub mod config;
pub mod controller;
pub mod drag;
pub mod error;
pub mod events;
pub mod geometry;
pub mod step;
pub mod types;
pub mod viewport;
pub mod visibility;

pub use config::{
    CarouselConfig, CarouselConfigBuilder, DEFAULT_SPACE_BETWEEN,
};
pub use controller::Carousel;
pub use drag::{DRAG_GAIN, DragSession, DragTracker};
pub use error::{ConfigError, Result};
pub use events::{EventTarget, GestureEvent};
pub use geometry::{BOUNDARY_EPSILON, ViewportGeometry};
pub use step::compute_target;
pub use types::{ContentAlignment, Direction, EdgeFades, OffsetOrigin, Side};
pub use viewport::{MemoryViewport, Viewport};
pub use visibility::{VisibilityState, derive_visibility};
