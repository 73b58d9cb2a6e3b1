//! Sampled checks of the navigation invariants over random geometries.

use rand::{Rng, SeedableRng, rngs::StdRng};
use reel_core::{
    CarouselConfig, DragTracker, GestureEvent, ViewportGeometry,
    compute_target, derive_visibility,
};

const SAMPLES: usize = 2_000;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x0c0f_fee5)
}

fn random_config(rng: &mut StdRng, mirrored: bool) -> CarouselConfig {
    CarouselConfig::builder(
        rng.random_range(10.0f32..400.0),
        rng.random_range(0..40usize),
    )
    .step_items(rng.random_range(1..5usize))
    .mirrored(mirrored)
    .build()
    .expect("sampled config is valid")
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-3 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn fitting_content_disables_controls_at_any_offset() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let mirrored = rng.random_bool(0.5);
        let cfg = random_config(&mut rng, mirrored);
        let content = cfg.content_width();
        let geometry = ViewportGeometry::new(
            content + rng.random_range(0.0f32..500.0),
            content,
        );
        let offset = rng.random_range(-1000.0f32..1000.0);
        let state = derive_visibility(offset, &geometry, &cfg);
        assert!(!state.controls_enabled, "{cfg:?} {geometry:?} at {offset}");
        assert!(!state.show_advance && !state.show_retreat);
    }
}

#[test]
fn boundaries_hide_the_matching_control() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let cfg = random_config(&mut rng, false);
        let content = cfg.content_width();
        if content < 2.0 {
            continue;
        }
        let geometry = ViewportGeometry::new(
            rng.random_range(0.0..content - 1.0),
            content,
        );

        let at_start = derive_visibility(0.0, &geometry, &cfg);
        assert!(!at_start.show_retreat, "{geometry:?}");

        let at_end = derive_visibility(geometry.max_scroll(), &geometry, &cfg);
        assert!(!at_end.show_advance, "{geometry:?}");
    }
}

#[test]
fn mirrored_visibility_is_the_swapped_normal_visibility() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let normal = random_config(&mut rng, false);
        let mirrored = CarouselConfig::builder(
            normal.item_width(),
            normal.item_count(),
        )
        .step_items(normal.step_items())
        .mirrored(true)
        .build()
        .unwrap();

        let geometry = ViewportGeometry::for_config(
            &normal,
            rng.random_range(0.0f32..4000.0),
        );
        let offset = rng.random_range(0.0..=geometry.max_scroll());

        assert_eq!(
            derive_visibility(offset, &geometry, &mirrored),
            derive_visibility(offset, &geometry, &normal).swapped(),
            "{geometry:?} at {offset}"
        );
    }
}

#[test]
fn advance_then_retreat_is_identity() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let mirrored = rng.random_bool(0.5);
        let cfg = random_config(&mut rng, mirrored);
        let x = rng.random_range(-5000.0f32..5000.0);
        let there_and_back =
            compute_target(compute_target(x, &cfg, true), &cfg, false);
        assert!(close(there_and_back, x), "{cfg:?}: {x} -> {there_and_back}");
    }
}

#[test]
fn drag_out_and_back_returns_to_anchor() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let anchor_offset = rng.random_range(0.0f32..3000.0);
        let anchor_x = rng.random_range(0.0f32..1920.0);
        let d = rng.random_range(-500.0f32..500.0);

        let mut tracker = DragTracker::new(true);
        tracker.pointer_down(anchor_x, anchor_offset);
        let away = tracker.pointer_move(anchor_x + d).unwrap();
        assert!(close(away, anchor_offset - 2.0 * d));
        let back = tracker.pointer_move(anchor_x + d - d).unwrap();
        assert!(close(back, anchor_offset), "{anchor_offset} vs {back}");
    }
}

#[test]
fn stray_moves_after_release_report_nothing() {
    let mut rng = rng();
    for _ in 0..SAMPLES / 10 {
        let mut tracker = DragTracker::new(true);
        tracker.pointer_down(rng.random_range(0.0f32..800.0), 0.0);
        if rng.random_bool(0.5) {
            tracker.pointer_move(rng.random_range(0.0f32..800.0));
        }
        tracker.release();
        assert_eq!(tracker.pointer_move(rng.random_range(0.0f32..800.0)), None);
    }
}

#[test]
fn touch_lists_collapse_to_pointer_events() {
    let event = GestureEvent::TouchMove {
        touches: vec![12.0, 99.0],
    };
    assert_eq!(event.as_pointer(), Some(GestureEvent::moved(12.0)));
}
