//! Unit tests for the locomotion state machine.

use approx::assert_relative_eq;
use glam::Vec3;
use rstest::{fixture, rstest};

use super::*;
use crate::ground::{FlatGround, MockGroundProbe};

/// Frame delta that is exact in binary floating point.
const DT: f32 = 1.0 / 64.0;
const GROUND: FlatGround = FlatGround::new(0.0);

fn three_lanes() -> LaneSet {
    LaneSet::new(evenly_spaced_lanes(3, 2.0)).expect("three lanes")
}

#[fixture]
fn resting() -> Locomotion {
    let mut actor = Locomotion::new(three_lanes(), 2.0, LocomotionSettings::default());
    for _ in 0..100 {
        actor.apply_gravity(&GROUND);
        if actor.is_grounded() {
            break;
        }
    }
    assert!(actor.is_grounded(), "actor never settled");
    actor
}

fn run_ticks(actor: &mut Locomotion, ticks: usize, dt: f32) {
    for _ in 0..ticks {
        actor.tick(dt, &GROUND);
    }
}

#[test]
fn spawns_above_middle_lane() {
    let actor = Locomotion::new(three_lanes(), 2.0, LocomotionSettings::default());
    assert_eq!(actor.lane(), 1);
    assert_eq!(actor.position(), Vec3::new(0.0, 3.0, 0.0));
    assert_eq!(actor.vertical_motion(), VerticalMotion::Gravity);
}

#[rstest]
fn swipe_left_reaches_lane_exactly(mut resting: Locomotion) {
    resting.move_left();
    resting.tick(DT, &GROUND);
    assert_eq!(resting.lane(), 0);
    assert!(resting.is_moving());
    assert_relative_eq!(resting.movement_target().x, -2.0);

    run_ticks(&mut resting, 20, DT);
    assert_eq!(resting.position().x, -2.0);
    assert!(!resting.is_moving());

    let settled = resting.position();
    run_ticks(&mut resting, 5, DT);
    assert_eq!(resting.position(), settled);
}

#[rstest]
#[case::past_left_edge(-2)]
#[case::past_right_edge(2)]
fn out_of_range_shift_is_discarded(mut resting: Locomotion, #[case] shift: i32) {
    for _ in 0..shift.abs() {
        if shift < 0 {
            resting.move_left();
        } else {
            resting.move_right();
        }
    }
    resting.tick(DT, &GROUND);
    assert_eq!(resting.lane(), 1);
    assert!(!resting.is_moving());
    assert_eq!(resting.pending_shift(), 0);
}

#[rstest]
fn edge_lane_rejects_further_shift(mut resting: Locomotion) {
    resting.move_right();
    run_ticks(&mut resting, 20, DT);
    assert_eq!(resting.lane(), 2);

    resting.move_right();
    resting.tick(DT, &GROUND);
    assert_eq!(resting.lane(), 2);
    assert_relative_eq!(resting.position().x, 2.0);
}

#[rstest]
fn jump_targets_apex_above_ground(mut resting: Locomotion) {
    assert!(resting.jump(&GROUND));
    assert!(resting.is_jumping());
    assert_eq!(resting.vertical_motion(), VerticalMotion::Jump);
    assert_relative_eq!(resting.jump_target().y, 3.8);
    assert_relative_eq!(resting.jump_time_left(), 4.0);
}

#[rstest]
fn jump_ends_after_hover_time(mut resting: Locomotion) {
    let dt = 0.125;
    assert!(resting.jump(&GROUND));

    run_ticks(&mut resting, 3, dt);
    assert!(resting.is_jumping());
    assert_relative_eq!(resting.position().y, 3.8);

    resting.tick(dt, &GROUND);
    assert!(!resting.is_jumping());
    assert_eq!(resting.vertical_motion(), VerticalMotion::Gravity);
    assert_eq!(resting.jump_time_left(), 0.0);
}

#[rstest]
fn gravity_waits_for_the_jump(mut resting: Locomotion) {
    assert!(resting.jump(&GROUND));
    resting.tick(0.125, &GROUND);
    let apex = resting.position();
    resting.apply_gravity(&GROUND);
    assert_eq!(resting.position(), apex);
}

#[rstest]
fn gravity_returns_actor_to_rest_after_jump(mut resting: Locomotion) {
    assert!(resting.jump(&GROUND));
    run_ticks(&mut resting, 4, 0.125);
    assert!(!resting.is_jumping());

    for _ in 0..60 {
        resting.apply_gravity(&GROUND);
    }
    assert!(resting.is_grounded());
    assert!(resting.position().y <= 2.0 + f32::EPSILON);
}

#[test]
fn jump_while_airborne_is_rejected() {
    let mut actor = Locomotion::new(three_lanes(), 2.0, LocomotionSettings::default());
    let mut probe = MockGroundProbe::new();
    probe.expect_cast_down().return_const(None::<f32>);

    assert!(!actor.jump(&probe));
    assert!(!actor.is_jumping());
    assert_eq!(actor.vertical_motion(), VerticalMotion::Gravity);
}

#[rstest]
fn sneak_cancels_jump(mut resting: Locomotion) {
    assert!(resting.jump(&GROUND));
    assert!(resting.sneak());
    assert!(!resting.is_jumping());
    assert!(resting.is_sneaking());
    assert_relative_eq!(resting.sneak_time_left(), 10.0);
    assert_relative_eq!(resting.clearance(), 0.01);
    assert_eq!(resting.vertical_motion(), VerticalMotion::Gravity);
}

#[rstest]
fn jump_cancels_sneak(mut resting: Locomotion) {
    assert!(resting.sneak());
    // The shorter sneak ray only reaches the ground once the actor has sunk.
    assert!(!resting.jump(&GROUND));
    for _ in 0..30 {
        resting.apply_gravity(&GROUND);
    }

    assert!(resting.jump(&GROUND));
    assert!(!resting.is_sneaking());
    assert!(resting.is_jumping());
    assert_relative_eq!(resting.clearance(), 1.0);
    assert_relative_eq!(resting.jump_target().y, 3.8);
}

#[rstest]
fn sneak_lowers_then_restores_height(mut resting: Locomotion) {
    assert!(resting.sneak());
    for _ in 0..30 {
        resting.apply_gravity(&GROUND);
    }
    assert_relative_eq!(resting.position().y, 1.0, epsilon = 1e-4);

    // Sneak timer drains at ten units per second of frame time.
    for _ in 0..200 {
        resting.tick(DT, &GROUND);
        resting.apply_gravity(&GROUND);
        if !resting.is_sneaking() {
            break;
        }
    }
    assert!(!resting.is_sneaking());
    assert_relative_eq!(resting.clearance(), 1.0);
    assert_relative_eq!(resting.position().y, 1.99, epsilon = 1e-4);
}

#[rstest]
fn locked_controls_ignore_requests(mut resting: Locomotion) {
    assert!(resting.toggle_controls_lock());
    resting.move_left();
    assert_eq!(resting.pending_shift(), 0);
    assert!(!resting.jump(&GROUND));
    assert!(!resting.sneak());

    assert!(!resting.toggle_controls_lock());
    resting.move_left();
    resting.tick(DT, &GROUND);
    assert_eq!(resting.lane(), 0);
}

#[rstest]
fn lock_freezes_transition_in_flight(mut resting: Locomotion) {
    resting.move_right();
    resting.tick(DT, &GROUND);
    let frozen = resting.position();
    resting.toggle_controls_lock();
    run_ticks(&mut resting, 10, DT);
    assert_eq!(resting.position(), frozen);
    assert!(resting.is_moving());
}

#[rstest]
fn game_over_lock_cannot_be_toggled(mut resting: Locomotion) {
    let knockback = resting.end_run();
    assert_relative_eq!(knockback.impulse.y, 10.0);
    assert_eq!(knockback.spin, Vec3::Z);
    assert!(resting.toggle_controls_lock());
    assert!(resting.controls_locked());
    assert_eq!(resting.vertical_motion(), VerticalMotion::Released);
}

#[test]
fn released_actor_ignores_gravity() {
    let mut actor = Locomotion::new(three_lanes(), 2.0, LocomotionSettings::default());
    let start = actor.position();
    let _knockback = actor.end_run();
    actor.apply_gravity(&GROUND);
    assert_eq!(actor.position(), start);
}

#[test]
fn repeated_requests_in_one_frame_accumulate() {
    let lanes = LaneSet::new(evenly_spaced_lanes(5, 1.0)).expect("five lanes");
    let mut actor = Locomotion::new(lanes, 2.0, LocomotionSettings::default());
    actor.move_left();
    actor.move_left();
    actor.tick(DT, &GROUND);
    assert_eq!(actor.lane(), 0);
}

#[test]
fn paused_actor_still_falls() {
    let mut actor = Locomotion::new(three_lanes(), 2.0, LocomotionSettings::default());
    assert!(actor.toggle_controls_lock());
    let start = actor.position();
    actor.apply_gravity(&GROUND);
    assert!(!actor.is_grounded());
    assert_relative_eq!(
        actor.position().y,
        start.y - actor.settings().fall_step(),
        epsilon = 1e-5
    );

    for _ in 0..100 {
        actor.apply_gravity(&GROUND);
    }
    assert!(actor.is_grounded());
    assert!(actor.controls_locked());
}

#[rstest]
fn lane_requests_saturate(mut resting: Locomotion) {
    resting.pending_shift = i32::MAX;
    resting.move_right();
    assert_eq!(resting.pending_shift(), i32::MAX);

    resting.pending_shift = i32::MIN;
    resting.move_left();
    assert_eq!(resting.pending_shift(), i32::MIN);

    resting.tick(DT, &GROUND);
    assert_eq!(resting.lane(), 1);
    assert_eq!(resting.pending_shift(), 0);
}
