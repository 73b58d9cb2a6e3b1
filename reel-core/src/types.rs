//! Shared value types for carousel navigation

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Semantic navigation direction, relative to reading order.
///
/// `Advance` moves toward later items and `Retreat` toward earlier ones. How
/// that maps onto the coordinate axis depends on whether the layout is
/// mirrored, see [`Direction::side`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Toward later items.
    Advance,
    /// Toward earlier items.
    Retreat,
}

impl Direction {
    /// Both directions.
    pub const ALL: [Direction; 2] = [Direction::Advance, Direction::Retreat];

    /// The other direction.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Advance => Direction::Retreat,
            Direction::Retreat => Direction::Advance,
        }
    }

    /// Physical side of the viewport the control for this direction sits on.
    pub fn side(self, mirrored: bool) -> Side {
        match (self, mirrored) {
            (Direction::Advance, false) | (Direction::Retreat, true) => {
                Side::Right
            }
            (Direction::Retreat, false) | (Direction::Advance, true) => {
                Side::Left
            }
        }
    }

    /// Inverse of [`Direction::side`].
    pub fn from_side(side: Side, mirrored: bool) -> Self {
        match (side, mirrored) {
            (Side::Right, false) | (Side::Left, true) => Direction::Advance,
            (Side::Left, false) | (Side::Right, true) => Direction::Retreat,
        }
    }
}

/// Physical edge of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    /// Left edge.
    Left,
    /// Right edge.
    Right,
}

/// Edge gradient hints: a fade is shown on each physical edge beyond which
/// more content lies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EdgeFades {
    /// Fade on the left edge.
    pub left: bool,
    /// Fade on the right edge.
    pub right: bool,
}

impl EdgeFades {
    /// Whether `side` shows a fade.
    pub fn on(&self, side: Side) -> bool {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Horizontal placement of the item strip inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ContentAlignment {
    /// Items start at the leading edge and scroll.
    #[default]
    Start,
    /// Content fits; items are centered and nothing scrolls.
    Center,
}

/// Where a host measures its raw scroll offset from.
///
/// In both conventions a larger value means the viewport sits further to
/// the right, so drag and step arithmetic apply to raw values unchanged.
/// Only boundary checks need the normalized (left based) value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OffsetOrigin {
    /// Offsets run from `0` (left edge) to `max_scroll`.
    #[default]
    Left,
    /// Offsets run from `0` (right edge) down to `-max_scroll`. Browsers
    /// report mirrored scroll containers this way.
    Right,
}

impl OffsetOrigin {
    /// Convert a raw host offset to a distance from the left edge.
    pub fn to_physical(self, raw: f32, max_scroll: f32) -> f32 {
        match self {
            OffsetOrigin::Left => raw,
            OffsetOrigin::Right => raw + max_scroll,
        }
    }

    /// Convert a distance from the left edge to the host's raw offset.
    pub fn from_physical(self, physical: f32, max_scroll: f32) -> f32 {
        match self {
            OffsetOrigin::Left => physical,
            OffsetOrigin::Right => physical - max_scroll,
        }
    }

    /// Valid raw offset range for the given scroll extent.
    pub fn raw_bounds(self, max_scroll: f32) -> (f32, f32) {
        match self {
            OffsetOrigin::Left => (0.0, max_scroll),
            OffsetOrigin::Right => (-max_scroll, 0.0),
        }
    }

    /// Clamp `raw` into [`OffsetOrigin::raw_bounds`].
    pub fn clamp(self, raw: f32, max_scroll: f32) -> f32 {
        let (lo, hi) = self.raw_bounds(max_scroll);
        raw.clamp(lo, hi)
    }
}
