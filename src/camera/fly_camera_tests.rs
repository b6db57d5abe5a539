use glam::{Mat4, Vec3};

use super::*;
use crate::config::CameraConfig;

const EPSILON: f32 = 1e-5;

fn assert_vec3_near(actual: Vec3, expected: Vec3, epsilon: f32) {
    assert!(
        (actual - expected).length() <= epsilon,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

fn assert_mat4_near(actual: Mat4, expected: Mat4, epsilon: f32) {
    let a = actual.to_cols_array();
    let b = expected.to_cols_array();
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        assert!(
            (x - y).abs() <= epsilon,
            "matrices differ at element {}: expected {}, got {}",
            i,
            y,
            x
        );
    }
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_default_orientation() {
    let camera = FlyCamera::new();

    assert_eq!(camera.position(), Vec3::ZERO);
    assert_eq!(camera.yaw(), -90.0);
    assert_eq!(camera.pitch(), 0.0);
    assert_eq!(camera.fov(), 45.0);
    // Yaw -90 / pitch 0 faces -Z in the spherical parameterization
    assert_vec3_near(camera.front(), Vec3::NEG_Z, EPSILON);
    assert_vec3_near(camera.up(), Vec3::Y, EPSILON);
    assert_vec3_near(camera.right(), Vec3::X, EPSILON);
}

#[test]
fn test_from_config_overrides() {
    let config = CameraConfig {
        move_speed: 5.0,
        mouse_sens: 0.25,
        fov: 60.0,
        normalize_combined_input: false,
    };
    let camera = FlyCamera::from_config(&config);

    assert_eq!(camera.move_speed(), 5.0);
    assert_eq!(camera.mouse_sens(), 0.25);
    assert_eq!(camera.fov(), 60.0);
}

#[test]
fn test_from_config_clamps_fov() {
    let too_wide = CameraConfig {
        fov: 500.0,
        ..CameraConfig::default()
    };
    assert_eq!(FlyCamera::from_config(&too_wide).fov(), FOV_MAX);

    let too_narrow = CameraConfig {
        fov: -10.0,
        ..CameraConfig::default()
    };
    assert_eq!(FlyCamera::from_config(&too_narrow).fov(), FOV_MIN);
}

#[test]
fn test_default_trait_matches_new() {
    let a = FlyCamera::default();
    let b = FlyCamera::new();
    assert_eq!(a.position(), b.position());
    assert_eq!(a.yaw(), b.yaw());
    assert_eq!(a.fov(), b.fov());
}

// ============================================================================
// view_matrix
// ============================================================================

#[test]
fn test_view_matrix_matches_look_at() {
    let mut camera = FlyCamera::new();
    camera.set_position(Vec3::new(0.0, 0.0, 3.0));

    // Eye (0,0,3) looking toward (0,0,2) with +Y up
    let expected = Mat4::look_at_rh(
        Vec3::new(0.0, 0.0, 3.0),
        Vec3::new(0.0, 0.0, 2.0),
        Vec3::Y,
    );
    assert_mat4_near(camera.view_matrix(), expected, EPSILON);
}

#[test]
fn test_view_matrix_is_pure() {
    let camera = FlyCamera::new();

    let first = camera.view_matrix();
    let second = camera.view_matrix();

    assert_eq!(first, second);
    assert_eq!(camera.position(), Vec3::ZERO);
    assert_vec3_near(camera.front(), Vec3::NEG_Z, EPSILON);
}

#[test]
fn test_view_matrix_follows_orientation() {
    let mut camera = FlyCamera::new();
    camera.process_mouse(450.0, 0.0); // 45 degrees at default sensitivity

    let expected = Mat4::look_at_rh(Vec3::ZERO, camera.front(), camera.up());
    assert_mat4_near(camera.view_matrix(), expected, EPSILON);
}

// ============================================================================
// process_keyboard
// ============================================================================

#[test]
fn test_forward_then_backward_returns_to_start() {
    let mut camera = FlyCamera::new();
    let start = camera.position();

    camera.process_keyboard(MoveDirection::Forward, 0.37);
    camera.process_keyboard(MoveDirection::Backward, 0.37);

    assert_vec3_near(camera.position(), start, EPSILON);
}

#[test]
fn test_left_then_right_returns_to_start() {
    let mut camera = FlyCamera::new();
    let start = camera.position();

    camera.process_keyboard(MoveDirection::Left, 1.25);
    camera.process_keyboard(MoveDirection::Right, 1.25);

    assert_vec3_near(camera.position(), start, EPSILON);
}

#[test]
fn test_forward_moves_along_front() {
    let mut camera = FlyCamera::new();
    camera.process_keyboard(MoveDirection::Forward, 0.5);

    // Default speed 2.0 * 0.5s = 1 unit along -Z
    assert_vec3_near(camera.position(), Vec3::new(0.0, 0.0, -1.0), EPSILON);
}

#[test]
fn test_strafe_moves_along_right() {
    let mut camera = FlyCamera::new();
    camera.process_keyboard(MoveDirection::Right, 0.5);

    assert_vec3_near(camera.position(), Vec3::new(1.0, 0.0, 0.0), EPSILON);
}

#[test]
fn test_strafe_follows_new_heading_after_mouse_look() {
    let mut camera = FlyCamera::new();
    // Turn 90 degrees right: yaw -90 -> 0, now facing +X
    camera.process_mouse(900.0, 0.0);
    camera.process_keyboard(MoveDirection::Right, 0.5);

    // Right basis was rederived, so strafing goes along +Z, not stale +X
    assert_vec3_near(camera.position(), Vec3::new(0.0, 0.0, 1.0), 1e-4);
}

#[test]
fn test_zero_elapsed_time_moves_nothing() {
    let mut camera = FlyCamera::new();
    camera.process_keyboard(MoveDirection::Forward, 0.0);
    assert_eq!(camera.position(), Vec3::ZERO);
}

// ============================================================================
// process_keyboard_combined
// ============================================================================

#[test]
fn test_combined_unnormalized_equals_independent_calls() {
    let mut combined = FlyCamera::new();
    combined.process_keyboard_combined(
        &[MoveDirection::Forward, MoveDirection::Right],
        0.5,
        false,
    );

    let mut independent = FlyCamera::new();
    independent.process_keyboard(MoveDirection::Forward, 0.5);
    independent.process_keyboard(MoveDirection::Right, 0.5);

    assert_vec3_near(combined.position(), independent.position(), EPSILON);
}

#[test]
fn test_combined_unnormalized_diagonal_exceeds_move_speed() {
    let mut camera = FlyCamera::new();
    camera.process_keyboard_combined(&[MoveDirection::Forward, MoveDirection::Right], 1.0, false);

    // sqrt(2) * move_speed for one second of diagonal movement
    let expected = 2.0 * std::f32::consts::SQRT_2;
    assert!((camera.position().length() - expected).abs() <= EPSILON);
}

#[test]
fn test_combined_normalized_diagonal_matches_move_speed() {
    let mut camera = FlyCamera::new();
    camera.process_keyboard_combined(&[MoveDirection::Forward, MoveDirection::Right], 1.0, true);

    assert!((camera.position().length() - 2.0).abs() <= EPSILON);
}

#[test]
fn test_combined_opposing_keys_cancel() {
    let mut camera = FlyCamera::new();
    camera.process_keyboard_combined(&[MoveDirection::Forward, MoveDirection::Backward], 1.0, true);

    // normalize_or_zero keeps the zero vector zero
    assert_vec3_near(camera.position(), Vec3::ZERO, EPSILON);
}

#[test]
fn test_combined_empty_slice_is_noop() {
    let mut camera = FlyCamera::new();
    camera.process_keyboard_combined(&[], 1.0, false);
    assert_eq!(camera.position(), Vec3::ZERO);
}

// ============================================================================
// process_scroll
// ============================================================================

#[test]
fn test_scroll_zooms_in() {
    let mut camera = FlyCamera::new();
    camera.process_scroll(5.0);
    assert_eq!(camera.fov(), 40.0);
}

#[test]
fn test_scroll_clamp_scenario() {
    let mut camera = FlyCamera::new();

    // 45 - 200 = -155, clamps to the minimum
    camera.process_scroll(200.0);
    assert_eq!(camera.fov(), FOV_MIN);

    // 1 - (-500) = 501, clamps to the maximum
    camera.process_scroll(-500.0);
    assert_eq!(camera.fov(), FOV_MAX);
}

#[test]
fn test_fov_always_in_range_after_scroll_sequences() {
    let mut camera = FlyCamera::new();
    for offset in [3.0, -7.5, 200.0, -0.1, -1000.0, 42.0, 129.0, -129.0] {
        camera.process_scroll(offset);
        assert!(camera.fov() >= FOV_MIN && camera.fov() <= FOV_MAX);
    }
}

// ============================================================================
// process_mouse
// ============================================================================

#[test]
fn test_mouse_accumulates_scaled_by_sensitivity() {
    let mut camera = FlyCamera::new();
    camera.process_mouse(10.0, 20.0);

    // Default sensitivity 0.1
    assert!((camera.yaw() - -89.0).abs() <= EPSILON);
    assert!((camera.pitch() - 2.0).abs() <= EPSILON);
}

#[test]
fn test_pitch_clamped_after_any_sequence() {
    let mut camera = FlyCamera::new();
    for dy in [5000.0, -20000.0, 123.4, 890.0, -3.0, 100000.0] {
        camera.process_mouse(0.0, dy);
        assert!(camera.pitch() >= -PITCH_LIMIT && camera.pitch() <= PITCH_LIMIT);
    }
}

#[test]
fn test_front_unit_length_after_any_mouse_move() {
    let mut camera = FlyCamera::new();
    let deltas = [
        (0.0, 0.0),
        (1.0, 1.0),
        (-350.0, 900.0),
        (10000.0, -10000.0),
        (0.001, -0.002),
        (-1e6, 1e6),
    ];
    for (dx, dy) in deltas {
        camera.process_mouse(dx, dy);
        assert!((camera.front().length() - 1.0).abs() <= EPSILON);
    }
}

#[test]
fn test_basis_stays_orthonormal_after_mouse_move() {
    let mut camera = FlyCamera::new();
    camera.process_mouse(537.0, -212.0);

    assert!((camera.right().length() - 1.0).abs() <= EPSILON);
    assert!((camera.up().length() - 1.0).abs() <= EPSILON);
    assert!(camera.front().dot(camera.right()).abs() <= EPSILON);
    assert!(camera.front().dot(camera.up()).abs() <= EPSILON);
    assert!(camera.right().dot(camera.up()).abs() <= EPSILON);
}

#[test]
fn test_yaw_is_never_wrapped() {
    let mut camera = FlyCamera::new();
    for _ in 0..20 {
        camera.process_mouse(3600.0, 0.0); // +360 degrees per call
    }

    // 20 full turns accumulated on top of the initial -90
    assert!((camera.yaw() - (-90.0 + 20.0 * 360.0)).abs() <= 1e-2);
    // Orientation is back where it started (large-angle trig is less exact)
    assert_vec3_near(camera.front(), Vec3::NEG_Z, 5e-3);
}

#[test]
fn test_full_pitch_up_looks_close_to_world_up() {
    let mut camera = FlyCamera::new();
    camera.process_mouse(0.0, 10000.0);

    assert_eq!(camera.pitch(), PITCH_LIMIT);
    assert!(camera.front().y > 0.999);
}

#[test]
fn test_mouse_zero_delta_keeps_orientation() {
    let mut camera = FlyCamera::new();
    camera.process_mouse(0.0, 0.0);

    assert_eq!(camera.yaw(), -90.0);
    assert_eq!(camera.pitch(), 0.0);
    assert_vec3_near(camera.front(), Vec3::NEG_Z, EPSILON);
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_replaying_events_reproduces_pose() {
    let events: [(f32, f32, f32, f32); 4] = [
        // (dx, dy, scroll, dt)
        (12.0, -4.0, 1.0, 0.016),
        (-300.0, 80.0, -2.5, 0.033),
        (0.5, 0.5, 0.0, 0.008),
        (90.0, -90.0, 10.0, 0.020),
    ];

    let run = || {
        let mut camera = FlyCamera::new();
        for (dx, dy, scroll, dt) in events {
            camera.process_mouse(dx, dy);
            camera.process_scroll(scroll);
            camera.process_keyboard(MoveDirection::Forward, dt);
        }
        camera
    };

    let a = run();
    let b = run();

    assert_eq!(a.position(), b.position());
    assert_eq!(a.yaw(), b.yaw());
    assert_eq!(a.pitch(), b.pitch());
    assert_eq!(a.fov(), b.fov());
    assert_eq!(a.view_matrix(), b.view_matrix());
}
