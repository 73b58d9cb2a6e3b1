//! Visibility controller: which directional controls to show
//!
//! Visibility is always derived from scratch from the current geometry and
//! offset, never patched incrementally.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    config::CarouselConfig,
    geometry::{ViewportGeometry, fits_without_scroll, is_at_end, is_at_start},
    types::{Direction, EdgeFades, Side},
};

/// Which directional controls are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VisibilityState {
    /// False when there is nothing to scroll or the host hid the controls.
    pub controls_enabled: bool,
    /// Advance control shown.
    pub show_advance: bool,
    /// Retreat control shown.
    pub show_retreat: bool,
}

impl VisibilityState {
    /// Controls disabled, nothing shown.
    pub const HIDDEN: Self = Self {
        controls_enabled: false,
        show_advance: false,
        show_retreat: false,
    };

    /// Whether the control for `direction` is shown.
    pub fn shows(&self, direction: Direction) -> bool {
        match direction {
            Direction::Advance => self.show_advance,
            Direction::Retreat => self.show_retreat,
        }
    }

    /// Direction of the visible control on `side`, if any.
    pub fn control_at(&self, side: Side, mirrored: bool) -> Option<Direction> {
        let direction = Direction::from_side(side, mirrored);
        self.shows(direction).then_some(direction)
    }

    /// Edge fades follow the visible controls onto their physical sides.
    pub fn edge_fades(&self, mirrored: bool) -> EdgeFades {
        EdgeFades {
            left: self.control_at(Side::Left, mirrored).is_some(),
            right: self.control_at(Side::Right, mirrored).is_some(),
        }
    }

    /// Same state with the advance and retreat flags exchanged.
    pub fn swapped(self) -> Self {
        Self {
            controls_enabled: self.controls_enabled,
            show_advance: self.show_retreat,
            show_retreat: self.show_advance,
        }
    }
}

/// Derive control visibility for a physical `offset`.
///
/// In a mirrored layout reading order starts at the right edge, so the
/// roles of the two boundaries swap.
pub fn derive_visibility(
    offset: f32,
    geometry: &ViewportGeometry,
    config: &CarouselConfig,
) -> VisibilityState {
    if !config.show_controls() || fits_without_scroll(geometry) {
        return VisibilityState::HIDDEN;
    }

    let at_start = is_at_start(offset);
    let at_end = is_at_end(offset, geometry);
    let (show_advance, show_retreat) = if config.mirrored() {
        (!at_start, !at_end)
    } else {
        (!at_end, !at_start)
    };

    VisibilityState {
        controls_enabled: true,
        show_advance,
        show_retreat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(mirrored: bool) -> CarouselConfig {
        CarouselConfig::builder(100.0, 3)
            .mirrored(mirrored)
            .build()
            .unwrap()
    }

    fn geometry() -> ViewportGeometry {
        ViewportGeometry::new(250.0, 300.0)
    }

    #[test]
    fn at_leading_edge_only_advance_shows() {
        let state = derive_visibility(0.0, &geometry(), &config(false));
        assert!(state.controls_enabled);
        assert!(!state.show_retreat);
        assert!(state.show_advance);
    }

    #[test]
    fn at_trailing_edge_only_retreat_shows() {
        let state = derive_visibility(50.0, &geometry(), &config(false));
        assert!(!state.show_advance);
        assert!(state.show_retreat);
    }

    #[test]
    fn in_between_both_show() {
        let state = derive_visibility(25.0, &geometry(), &config(false));
        assert!(state.show_advance);
        assert!(state.show_retreat);
    }

    #[test]
    fn mirrored_swaps_roles_at_left_edge() {
        let state = derive_visibility(0.0, &geometry(), &config(true));
        assert!(!state.show_advance);
        assert!(state.show_retreat);
    }

    #[test]
    fn fitting_content_disables_controls() {
        let cfg = CarouselConfig::builder(100.0, 2).build().unwrap();
        let g = ViewportGeometry::for_config(&cfg, 300.0);
        for offset in [-20.0, 0.0, 50.0, 400.0] {
            assert_eq!(derive_visibility(offset, &g, &cfg), VisibilityState::HIDDEN);
        }
    }

    #[test]
    fn host_switch_hides_controls() {
        let cfg = CarouselConfig::builder(100.0, 3)
            .show_controls(false)
            .build()
            .unwrap();
        assert_eq!(
            derive_visibility(25.0, &geometry(), &cfg),
            VisibilityState::HIDDEN
        );
    }

    #[test]
    fn control_sides_follow_layout_direction() {
        let state = VisibilityState {
            controls_enabled: true,
            show_advance: true,
            show_retreat: false,
        };
        assert_eq!(state.control_at(Side::Right, false), Some(Direction::Advance));
        assert_eq!(state.control_at(Side::Left, false), None);
        assert_eq!(state.control_at(Side::Left, true), Some(Direction::Advance));
        assert_eq!(
            state.edge_fades(true),
            EdgeFades {
                left: true,
                right: false
            }
        );
    }
}
