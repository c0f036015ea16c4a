use glam::Vec3;
use lane_runner::vector_math::{horizontal_direction, move_towards};

#[test]
fn move_towards_never_overshoots() {
    let target = Vec3::new(1.0, 0.0, 0.0);
    let result = move_towards(Vec3::ZERO, target, 50.0);
    assert_eq!(result, target);
}

#[test]
fn move_towards_with_zero_step_stays_put() {
    let start = Vec3::new(2.0, 1.0, -3.0);
    let result = move_towards(start, Vec3::ZERO, 0.0);
    assert_eq!(result, start);
}

#[test]
fn horizontal_direction_ignores_height() {
    let dir = horizontal_direction(Vec3::ZERO, Vec3::new(0.0, 5.0, -4.0));
    assert_eq!(dir, Vec3::new(0.0, 0.0, -1.0));
}

#[test]
fn horizontal_direction_is_zero_for_vertical_offsets() {
    let dir = horizontal_direction(Vec3::ZERO, Vec3::new(0.0, 5.0, 0.0));
    assert_eq!(dir, Vec3::ZERO);
}
