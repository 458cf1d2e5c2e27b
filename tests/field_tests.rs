// Host-side tests for the pure point-field engine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod field {
    include!("../src/core/field.rs");
}

use field::*;

fn still_params() -> FieldParams {
    // Breathing off so baseline-relative assertions are exact.
    FieldParams {
        breathing_amplitude: 0.0,
        ..FieldParams::default()
    }
}

#[test]
fn layout_has_exact_count_evenly_spaced_inclusive() {
    let params = FieldParams::default();
    let field = PointField::new(800.0, 400.0, params);
    let points = field.points();
    assert_eq!(points.len(), params.point_count);

    let spacing = 800.0 / (params.point_count - 1) as f32;
    for (i, p) in points.iter().enumerate() {
        assert!((p.x - i as f32 * spacing).abs() < 1e-3);
    }
    assert!((points[0].x - 0.0).abs() < 1e-6);
    assert!((points.last().unwrap().x - 800.0).abs() < 1e-3);
}

#[test]
fn baseline_is_symmetric_about_center() {
    let params = FieldParams::default();
    let (w, h) = (800.0, 400.0);
    let mean = w / 2.0;
    for d in [1.0, 17.5, 120.0, 399.0] {
        let left = baseline_y(mean - d, w, h, &params);
        let right = baseline_y(mean + d, w, h, &params);
        assert!(
            (left - right).abs() < 1e-3,
            "baseline asymmetric at d={}: {} vs {}",
            d,
            left,
            right
        );
    }
}

#[test]
fn points_start_at_rest_on_the_baseline() {
    let field = PointField::new(800.0, 400.0, FieldParams::default());
    for p in field.points() {
        assert_eq!(p.y_current, p.y_base);
        assert_eq!(p.y_target, p.y_base);
        assert_eq!(p.velocity, 0.0);
    }
}

#[test]
fn offscreen_pointer_leaves_target_on_current_base() {
    let mut field = PointField::new(800.0, 400.0, still_params());
    for _ in 0..5 {
        field.tick(PointerState::offscreen());
    }
    for p in field.points() {
        assert_eq!(p.y_target, p.y_base);
        assert_eq!(p.y_current, p.y_base);
        assert_eq!(p.velocity, 0.0);
    }
}

#[test]
fn offscreen_pointer_target_tracks_breathing_base_exactly() {
    let params = FieldParams::default();
    let mut field = PointField::new(800.0, 400.0, params);
    field.tick(PointerState::offscreen());

    // One tick in: phase has advanced once.
    let phase = params.breathing_speed;
    for (i, p) in field.points().iter().enumerate() {
        let breath = (phase + i as f32 * params.phase_step).sin() * params.breathing_amplitude;
        assert_eq!(p.y_target, p.y_base + breath);
    }
}

#[test]
fn pointer_within_radius_displaces_target_by_gaussian_weight() {
    let params = still_params();
    let mut field = PointField::new(800.0, 400.0, params);

    let mut pointer = PointerState::offscreen();
    pointer.set(400.0, 200.0);
    field.tick(pointer);

    // Center point sits at the hump peak, well within the influence radius.
    let center = field.points()[params.point_count / 2 - 1];
    let center_at_rest = PointField::new(800.0, 400.0, params).points()[params.point_count / 2 - 1];
    let dx = 400.0 - center_at_rest.x;
    let dy = 200.0 - center_at_rest.y_current;
    let dist = (dx * dx + dy * dy).sqrt();
    assert!(dist < params.pointer_radius);

    let falloff_sigma = params.pointer_radius * 0.5;
    let weight = (-(dist * dist) / (2.0 * falloff_sigma * falloff_sigma)).exp();
    let expected = center_at_rest.y_base
        + (200.0 - center_at_rest.y_base) * weight * params.pointer_strength;
    assert!(
        (center.y_target - expected).abs() < 1e-3,
        "target {} expected {}",
        center.y_target,
        expected
    );
    // Displacement is toward the pointer's vertical position.
    assert!(center.y_target > center_at_rest.y_base);

    // A point far outside the radius keeps its base as the target.
    let far = field.points()[2];
    assert_eq!(far.y_target, far.y_base);
}

#[test]
fn spring_decays_velocity_with_target_at_current() {
    let damping = 0.85;
    let mut current = 100.0_f32;
    let mut velocity = 12.0_f32;
    let mut last_mag = velocity.abs();
    for _ in 0..50 {
        let (c, v) = spring_step(current, current, velocity, 0.08, damping);
        current = c;
        velocity = v;
        assert!(velocity.abs() <= last_mag);
        last_mag = velocity.abs();
    }
    assert!(last_mag < 1e-2);
}

#[test]
fn field_settles_back_to_baseline_after_an_impulse() {
    let params = still_params();
    let mut field = PointField::new(800.0, 400.0, params);

    let mut pointer = PointerState::offscreen();
    pointer.set(400.0, 200.0);
    for _ in 0..30 {
        field.tick(pointer);
    }
    pointer.clear();
    for _ in 0..600 {
        field.tick(pointer);
    }
    for p in field.points() {
        assert!((p.y_current - p.y_base).abs() < 1e-2);
        assert!(p.velocity.abs() < 1e-2);
    }
}

#[test]
fn resize_fully_replaces_the_point_set() {
    let params = still_params();
    let mut field = PointField::new(800.0, 400.0, params);

    // Disturb the field so stale state would be visible.
    let mut pointer = PointerState::offscreen();
    pointer.set(400.0, 200.0);
    for _ in 0..20 {
        field.tick(pointer);
    }

    field.resize(1000.0, 500.0);
    let points = field.points();
    assert_eq!(points.len(), params.point_count);
    let spacing = 1000.0 / (params.point_count - 1) as f32;
    for (i, p) in points.iter().enumerate() {
        assert!((p.x - i as f32 * spacing).abs() < 1e-3);
        assert_eq!(p.y_base, baseline_y(p.x, 1000.0, 500.0, &params));
        assert_eq!(p.y_current, p.y_base);
        assert_eq!(p.velocity, 0.0);
    }
}

#[test]
fn degenerate_layouts_are_empty_and_tick_is_a_noop() {
    let mut zero_w = PointField::new(0.0, 400.0, FieldParams::default());
    assert!(zero_w.points().is_empty());
    zero_w.tick(PointerState::offscreen());
    assert!(zero_w.points().is_empty());

    let zero_h = PointField::new(800.0, 0.0, FieldParams::default());
    assert!(zero_h.points().is_empty());

    let too_few = PointField::new(800.0, 400.0, FieldParams {
        point_count: 1,
        ..FieldParams::default()
    });
    assert!(too_few.points().is_empty());

    // Shrinking to a degenerate surface also discards the old layout.
    let mut field = PointField::new(800.0, 400.0, FieldParams::default());
    assert!(!field.points().is_empty());
    field.resize(0.0, 0.0);
    assert!(field.points().is_empty());
}

#[test]
fn reveal_limit_ramps_from_stub_to_full_curve() {
    assert_eq!(reveal_limit(0, 0.5), 0);
    assert_eq!(reveal_limit(1, 1.0), 0);
    assert_eq!(reveal_limit(160, 0.0), 2);
    assert_eq!(reveal_limit(160, 0.5), 80);
    assert_eq!(reveal_limit(160, 1.0), 160);
    // Out-of-range ratios clamp instead of over- or under-running.
    assert_eq!(reveal_limit(160, 1.7), 160);
    assert_eq!(reveal_limit(160, -0.3), 2);
}

#[test]
fn pointer_state_sentinel_round_trip() {
    let mut pointer = PointerState::default();
    assert_eq!(pointer.pos, POINTER_OFFSCREEN);
    pointer.set(12.0, 34.0);
    assert_eq!(pointer.pos.x, 12.0);
    assert_eq!(pointer.pos.y, 34.0);
    pointer.clear();
    assert_eq!(pointer.pos, POINTER_OFFSCREEN);
}
