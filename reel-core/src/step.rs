//! Step navigator: target offset for one advance/retreat activation

use crate::config::CarouselConfig;

/// Raw offset one step away from `current_offset`.
///
/// Advancing moves right in a normal layout and left in a mirrored one, so
/// the step is added exactly when `advancing` and `mirrored` differ. The
/// result is not clamped; callers whose host does not clamp must do so.
pub fn compute_target(
    current_offset: f32,
    config: &CarouselConfig,
    advancing: bool,
) -> f32 {
    let step = config.step_width();
    let delta = if advancing != config.mirrored() {
        step
    } else {
        -step
    };
    current_offset + delta
}
