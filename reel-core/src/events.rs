//! Gesture events accepted by the carousel

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::Direction;

/// Element a pointer or touch went down on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EventTarget {
    /// The scrollable item strip.
    #[default]
    Track,
    /// One of the directional controls. Downs here never start a drag;
    /// activation goes through [`crate::Carousel::activate`].
    Control(Direction),
}

/// Pointer and touch input, in host screen coordinates.
///
/// Touch variants carry the x coordinates of the changed touch points; only
/// the first one is tracked.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GestureEvent {
    /// Primary button pressed.
    PointerDown {
        /// Pointer x in host coordinates.
        client_x: f32,
        /// What the pointer went down on.
        target: EventTarget,
    },
    /// Pointer moved, with or without a button held.
    PointerMove {
        /// Pointer x in host coordinates.
        client_x: f32,
    },
    /// Primary button released.
    PointerUp,
    /// Pointer left the strip.
    PointerLeave,
    /// Touch began.
    TouchStart {
        /// x of each changed touch point.
        touches: Vec<f32>,
        /// What the touch began on.
        target: EventTarget,
    },
    /// Touch moved.
    TouchMove {
        /// x of each changed touch point.
        touches: Vec<f32>,
    },
    /// Touch lifted.
    TouchEnd,
    /// Touch interrupted by the host.
    TouchCancel,
}

impl GestureEvent {
    /// Pointer down on the item strip.
    pub fn down(client_x: f32) -> Self {
        GestureEvent::PointerDown {
            client_x,
            target: EventTarget::Track,
        }
    }

    /// Pointer move to `client_x`.
    pub fn moved(client_x: f32) -> Self {
        GestureEvent::PointerMove { client_x }
    }

    /// Collapse touch input onto the pointer vocabulary. Returns `None` for
    /// touch events without a touch point.
    pub fn as_pointer(&self) -> Option<GestureEvent> {
        match self {
            GestureEvent::TouchStart { touches, target } => {
                touches.first().map(|&client_x| GestureEvent::PointerDown {
                    client_x,
                    target: *target,
                })
            }
            GestureEvent::TouchMove { touches } => touches
                .first()
                .map(|&client_x| GestureEvent::PointerMove { client_x }),
            GestureEvent::TouchEnd => Some(GestureEvent::PointerUp),
            GestureEvent::TouchCancel => Some(GestureEvent::PointerLeave),
            other => Some(other.clone()),
        }
    }
}
