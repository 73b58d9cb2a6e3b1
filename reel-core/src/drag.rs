//! Drag tracker: pointer gestures to scroll offsets
//!
//! Two states, idle and dragging. A [`DragSession`] exists exactly while a
//! pointer is down on the strip.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Amplification from pointer travel to scroll travel. One unit of pointer
/// movement scrolls two units of content.
pub const DRAG_GAIN: f32 = 2.0;

/// Anchor of an in-progress drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DragSession {
    /// Pointer x when the drag started.
    pub anchor_client_x: f32,
    /// Raw scroll offset when the drag started.
    pub anchor_scroll_offset: f32,
}

impl DragSession {
    /// Offset implied by the pointer being at `client_x`.
    pub fn offset_at(&self, client_x: f32) -> f32 {
        let delta = (client_x - self.anchor_client_x) * DRAG_GAIN;
        self.anchor_scroll_offset - delta
    }
}

/// Idle/dragging state machine for one strip.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragTracker {
    session: Option<DragSession>,
    inert: bool,
}

impl DragTracker {
    /// A tracker for a strip that moves under drags when `draggable`.
    pub fn new(draggable: bool) -> Self {
        Self {
            session: None,
            inert: !draggable,
        }
    }

    /// Whether a session is open.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The open session, if any.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Open a session anchored at `client_x` and the strip's current offset.
    /// A down while already dragging re-anchors the single session.
    pub fn pointer_down(&mut self, client_x: f32, current_offset: f32) {
        if self.session.is_some() {
            log::trace!("drag re-anchored at x={client_x}");
        }
        self.session = Some(DragSession {
            anchor_client_x: client_x,
            anchor_scroll_offset: current_offset,
        });
    }

    /// New offset for a pointer at `client_x`, or `None` when idle or inert.
    pub fn pointer_move(&self, client_x: f32) -> Option<f32> {
        let Some(session) = self.session else {
            log::trace!("ignoring pointer move at x={client_x} while idle");
            return None;
        };
        if self.inert {
            return None;
        }
        Some(session.offset_at(client_x))
    }

    /// Move the anchor offset by `delta`, so that a strip moved by other
    /// means mid-drag keeps following the pointer from where it now is.
    pub fn shift_anchor(&mut self, delta: f32) {
        if let Some(session) = self.session.as_mut() {
            session.anchor_scroll_offset += delta;
        }
    }

    /// Close the session on up, leave or cancel. Returns the closed session,
    /// `None` if no drag was in progress.
    pub fn release(&mut self) -> Option<DragSession> {
        self.session.take()
    }
}
