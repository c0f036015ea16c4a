//! Obstacle contact resolution and overlap tests.
//!
//! Contacts arrive from whatever detects them (the ECS contact system in
//! this crate); this module decides what a contact means for the run.

use glam::Vec3;
use log::debug;

use crate::constants::NEAR_MISS_DISTANCE;
use crate::locomotion::{Knockback, Locomotion};

/// What an obstacle contact did to the run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObstacleOutcome {
    /// The run is over; the knockback goes to the physics body.
    GameOver(Knockback),
    /// A lane switch clipped the obstacle and was reverted to `lane`.
    Bounced {
        /// Lane the actor returns to.
        lane: usize,
    },
}

/// Resolves contact with an obstacle at `obstacle`.
///
/// Contacts are ignored while controls are locked. A contact outside a lane
/// switch, or one with an obstacle lying within [`NEAR_MISS_DISTANCE`] of
/// where the switch started, ends the run. Any other contact during a switch
/// sends the actor back to the lane it came from.
pub fn resolve_obstacle(actor: &mut Locomotion, obstacle: Vec3) -> Option<ObstacleOutcome> {
    if actor.controls_locked() {
        return None;
    }

    if !actor.is_moving() || actor.distance_along_transition(obstacle) < NEAR_MISS_DISTANCE {
        return Some(ObstacleOutcome::GameOver(actor.end_run()));
    }

    actor.roll_back_transition();
    debug!("bounced off obstacle at {obstacle:?}");
    Some(ObstacleOutcome::Bounced { lane: actor.lane() })
}

/// Whether two centred boxes overlap.
#[must_use]
pub fn boxes_overlap(a_center: Vec3, a_size: Vec3, b_center: Vec3, b_size: Vec3) -> bool {
    let reach = (a_size.abs() + b_size.abs()) * 0.5;
    let gap = (a_center - b_center).abs();
    gap.cmplt(reach).all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ground::FlatGround;
    use crate::locomotion::{evenly_spaced_lanes, LaneSet, VerticalMotion};
    use crate::settings::LocomotionSettings;
    use rstest::{fixture, rstest};

    const GROUND: FlatGround = FlatGround::new(0.0);

    #[fixture]
    fn actor() -> Locomotion {
        let lanes = LaneSet::new(evenly_spaced_lanes(3, 2.0)).expect("three lanes");
        Locomotion::new(lanes, 2.0, LocomotionSettings::default())
    }

    fn start_switch_left(actor: &mut Locomotion) {
        actor.move_left();
        actor.tick(1.0 / 64.0, &GROUND);
        assert!(actor.is_moving());
    }

    #[rstest]
    fn contact_while_idle_ends_run(mut actor: Locomotion) {
        let outcome = resolve_obstacle(&mut actor, Vec3::new(0.0, 3.0, 1.0));
        assert!(matches!(outcome, Some(ObstacleOutcome::GameOver(_))));
        assert!(actor.controls_locked());
        assert!(actor.is_game_over());
        assert_eq!(actor.vertical_motion(), VerticalMotion::Released);

        actor.tick(1.0, &GROUND);
        assert!(actor.controls_locked());
    }

    #[rstest]
    fn contact_near_switch_origin_ends_run(mut actor: Locomotion) {
        start_switch_left(&mut actor);
        let outcome = resolve_obstacle(&mut actor, Vec3::new(-0.3, 3.0, 0.0));
        assert!(matches!(outcome, Some(ObstacleOutcome::GameOver(_))));
    }

    #[rstest]
    #[case::halfway(-1.0)]
    #[case::at_destination(-2.0)]
    #[case::exactly_at_threshold(-0.5)]
    fn contact_away_from_origin_bounces_back(mut actor: Locomotion, #[case] obstacle_x: f32) {
        start_switch_left(&mut actor);
        let outcome = resolve_obstacle(&mut actor, Vec3::new(obstacle_x, 3.0, 0.0));
        assert_eq!(outcome, Some(ObstacleOutcome::Bounced { lane: 1 }));
        assert_eq!(actor.lane(), 1);
        assert_eq!(actor.movement_target().x, 0.0);
        assert!(!actor.controls_locked());

        for _ in 0..20 {
            actor.tick(1.0 / 64.0, &GROUND);
        }
        assert_eq!(actor.position().x, 0.0);
        assert!(!actor.is_moving());
    }

    #[rstest]
    fn distance_is_measured_along_switch_axis(mut actor: Locomotion) {
        start_switch_left(&mut actor);
        // Far ahead on the track but only 0.2 across from the origin lane.
        let outcome = resolve_obstacle(&mut actor, Vec3::new(-0.2, 3.0, 8.0));
        assert!(matches!(outcome, Some(ObstacleOutcome::GameOver(_))));
    }

    #[rstest]
    fn contact_after_game_over_is_ignored(mut actor: Locomotion) {
        let _first = resolve_obstacle(&mut actor, Vec3::ZERO);
        assert_eq!(resolve_obstacle(&mut actor, Vec3::ZERO), None);
    }

    #[rstest]
    fn contact_while_paused_is_ignored(mut actor: Locomotion) {
        actor.toggle_controls_lock();
        assert_eq!(resolve_obstacle(&mut actor, Vec3::ZERO), None);
        assert!(!actor.is_game_over());
    }

    #[rstest]
    #[case::touching_inside(Vec3::new(0.9, 0.0, 0.0), true)]
    #[case::edge_contact(Vec3::new(1.0, 0.0, 0.0), false)]
    #[case::apart(Vec3::new(0.0, 0.0, 3.0), false)]
    fn overlap_test(#[case] other: Vec3, #[case] expected: bool) {
        assert_eq!(boxes_overlap(Vec3::ZERO, Vec3::ONE, other, Vec3::ONE), expected);
    }
}
