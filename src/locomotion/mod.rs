//! Player locomotion state machine.
//!
//! [`Locomotion`] owns everything about how the runner moves: the current
//! lane, the pending lane request, the lane and jump targets, the jump and
//! sneak countdowns, and which integrator currently owns vertical motion.
//!
//! Two integrators advance it:
//!
//! - [`Locomotion::tick`] runs once per rendered frame with a variable delta
//!   and handles lane transitions, jumps and sneaks;
//! - [`Locomotion::apply_gravity`] runs at the fixed physics rate and only
//!   writes the height while [`VerticalMotion::Gravity`] owns it.
//!
//! Neither integrator touches colliders; both ask a [`GroundProbe`].

mod lanes;

#[cfg(test)]
mod tests;

use std::mem;

use glam::Vec3;
use log::debug;

use crate::constants::{
    FAR_TARGET_DISTANCE, GAME_OVER_SPIN, GROUND_SKIN, SNAP_EPSILON, SPAWN_HEIGHT, TIMER_RATE,
};
use crate::ground::{ground_height, is_grounded, GroundProbe};
use crate::settings::LocomotionSettings;
use crate::vector_math::{horizontal, horizontal_direction, move_towards};

pub use lanes::{evenly_spaced_lanes, LaneError, LaneSet};

/// Which integrator may write the actor's height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalMotion {
    /// The fixed-rate gravity integrator pulls the actor to the ground.
    #[default]
    Gravity,
    /// A jump is rising toward, or hovering at, its apex.
    Jump,
    /// The run is over and the physics body moves freely.
    Released,
}

/// Velocity changes handed to the physics body when the run ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knockback {
    /// Linear impulse.
    pub impulse: Vec3,
    /// Angular velocity to add.
    pub spin: Vec3,
}

/// Decrements a countdown by one frame, never going below zero.
fn count_down(remaining: f32, dt: f32) -> f32 {
    (remaining - dt * TIMER_RATE).max(0.0)
}

/// The runner's movement state.
#[derive(Debug, Clone, PartialEq)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "Moving, jumping, sneaking and locked are independent flags of one actor."
)]
pub struct Locomotion {
    settings: LocomotionSettings,
    lanes: LaneSet,
    collider_height: f32,
    position: Vec3,
    lane: usize,
    previous_lane: usize,
    pending_shift: i32,
    movement_target: Vec3,
    transition_origin: Vec3,
    transition_axis: Vec3,
    jump_target: Vec3,
    moving: bool,
    jumping: bool,
    sneaking: bool,
    controls_locked: bool,
    game_over: bool,
    grounded: bool,
    vertical: VerticalMotion,
    jump_left: f32,
    sneak_left: f32,
    clearance: f32,
}

impl Locomotion {
    /// Places a new actor in the middle lane, [`SPAWN_HEIGHT`] above it.
    #[must_use]
    pub fn new(lanes: LaneSet, collider_height: f32, settings: LocomotionSettings) -> Self {
        let lane = lanes.start_index();
        let position = lanes.start_position() + Vec3::Y * SPAWN_HEIGHT;
        Self {
            settings,
            lanes,
            collider_height,
            position,
            lane,
            previous_lane: lane,
            pending_shift: 0,
            movement_target: position,
            transition_origin: position,
            transition_axis: Vec3::ZERO,
            jump_target: position,
            moving: false,
            jumping: false,
            sneaking: false,
            controls_locked: false,
            game_over: false,
            grounded: false,
            vertical: VerticalMotion::Gravity,
            jump_left: 0.0,
            sneak_left: 0.0,
            clearance: settings.levitate_clearance,
        }
    }

    /// Current world position.
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Overwrites the world position, e.g. from the engine transform.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Index of the lane the actor is in or moving into.
    #[must_use]
    pub const fn lane(&self) -> usize {
        self.lane
    }

    /// Lane positions.
    #[must_use]
    pub const fn lanes(&self) -> &LaneSet {
        &self.lanes
    }

    /// Settings captured at construction.
    #[must_use]
    pub const fn settings(&self) -> &LocomotionSettings {
        &self.settings
    }

    /// Lane shift requested since the last tick.
    #[must_use]
    pub const fn pending_shift(&self) -> i32 {
        self.pending_shift
    }

    /// Where the current lane transition is heading.
    #[must_use]
    pub const fn movement_target(&self) -> Vec3 {
        self.movement_target
    }

    /// Apex of the current jump.
    #[must_use]
    pub const fn jump_target(&self) -> Vec3 {
        self.jump_target
    }

    /// Whether a lane transition is in progress.
    #[must_use]
    pub const fn is_moving(&self) -> bool {
        self.moving
    }

    /// Whether a jump is in progress.
    #[must_use]
    pub const fn is_jumping(&self) -> bool {
        self.jumping
    }

    /// Whether the actor is sneaking.
    #[must_use]
    pub const fn is_sneaking(&self) -> bool {
        self.sneaking
    }

    /// Whether input-driven transitions are suppressed.
    #[must_use]
    pub const fn controls_locked(&self) -> bool {
        self.controls_locked
    }

    /// Whether the run has ended.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Result of the most recent resting test.
    #[must_use]
    pub const fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Which integrator currently owns the height.
    #[must_use]
    pub const fn vertical_motion(&self) -> VerticalMotion {
        self.vertical
    }

    /// Remaining jump hover time.
    #[must_use]
    pub const fn jump_time_left(&self) -> f32 {
        self.jump_left
    }

    /// Remaining sneak time.
    #[must_use]
    pub const fn sneak_time_left(&self) -> f32 {
        self.sneak_left
    }

    /// Current hover height above the ground.
    #[must_use]
    pub const fn clearance(&self) -> f32 {
        self.clearance
    }

    fn half_height(&self) -> f32 {
        self.collider_height * 0.5
    }

    /// Length of the resting ray: clearance plus half the collider.
    fn resting_reach(&self) -> f32 {
        self.clearance + self.half_height()
    }

    fn check_grounded(&mut self, ground: &dyn GroundProbe) -> bool {
        self.grounded = is_grounded(ground, self.position, self.resting_reach());
        self.grounded
    }

    /// Requests a switch one lane toward index zero.
    pub fn move_left(&mut self) {
        if !self.controls_locked {
            self.pending_shift = self.pending_shift.saturating_sub(1);
        }
    }

    /// Requests a switch one lane toward the last index.
    pub fn move_right(&mut self) {
        if !self.controls_locked {
            self.pending_shift = self.pending_shift.saturating_add(1);
        }
    }

    /// Starts a jump from the ground. Returns whether the jump started.
    ///
    /// Rejected while controls are locked or when the actor is airborne. A
    /// running sneak is cancelled first, so the apex is measured with the
    /// normal clearance.
    pub fn jump(&mut self, ground: &dyn GroundProbe) -> bool {
        if self.controls_locked || !self.check_grounded(ground) {
            return false;
        }
        if self.sneaking {
            self.cancel_sneak();
        }

        let floor = ground_height(ground, self.position, self.position.y);
        self.jump_target = Vec3::new(
            self.position.x,
            floor + self.clearance + self.half_height() + self.settings.jump_height,
            self.position.z,
        );
        self.jumping = true;
        self.vertical = VerticalMotion::Jump;
        self.jump_left = self.settings.jump_duration;
        debug!("jump towards y={}", self.jump_target.y);
        true
    }

    /// Drops to the sneak clearance. Returns whether the sneak started.
    ///
    /// A running jump is cancelled first.
    pub fn sneak(&mut self) -> bool {
        if self.controls_locked {
            return false;
        }
        if self.jumping {
            self.cancel_jump();
        }

        self.clearance = self.settings.sneak_clearance;
        self.sneak_left = self.settings.sneak_duration;
        self.sneaking = true;
        debug!("sneak for {}", self.sneak_left);
        true
    }

    /// Flips the pause lock. Has no effect once the run is over.
    ///
    /// Returns the new lock state.
    pub fn toggle_controls_lock(&mut self) -> bool {
        if !self.game_over {
            self.controls_locked = !self.controls_locked;
        }
        self.controls_locked
    }

    /// Advances lane transitions, jumps and sneaks by one frame.
    pub fn tick(&mut self, dt: f32, ground: &dyn GroundProbe) {
        if self.controls_locked {
            return;
        }

        self.apply_lane_request();

        if self.moving {
            self.advance_lane_transition(dt);
        }
        if self.jumping {
            self.advance_jump(dt);
        }
        if self.sneaking {
            self.advance_sneak(dt, ground);
        }
    }

    /// Advances the fixed-rate gravity integrator by one physics tick.
    ///
    /// Does nothing while grounded or while another integrator owns the
    /// height. Otherwise snaps onto ground that is within one fall step, or
    /// falls by that step.
    pub fn apply_gravity(&mut self, ground: &dyn GroundProbe) {
        if self.check_grounded(ground) || self.vertical != VerticalMotion::Gravity {
            return;
        }

        let step = self.settings.fall_step();
        if is_grounded(ground, self.position, self.resting_reach() + step) {
            self.snap_to_ground(ground);
            return;
        }

        self.position = move_towards(
            self.position,
            self.position - Vec3::Y * FAR_TARGET_DISTANCE,
            step,
        );
    }

    fn apply_lane_request(&mut self) {
        let shift = mem::take(&mut self.pending_shift);
        if shift == 0 {
            return;
        }

        let Some((next, lane_position)) = isize::try_from(shift)
            .ok()
            .and_then(|delta| self.lane.checked_add_signed(delta))
            .and_then(|next| self.lanes.get(next).map(|position| (next, position)))
        else {
            debug!("discarding lane shift {shift} from lane {}", self.lane);
            return;
        };

        self.previous_lane = self.lane;
        self.lane = next;
        self.transition_origin = self.position;
        self.movement_target = Vec3::new(lane_position.x, self.position.y, lane_position.z);
        self.transition_axis = horizontal_direction(self.transition_origin, self.movement_target);
        self.moving = true;
        debug!("lane {} -> {next}", self.previous_lane);
    }

    fn advance_lane_transition(&mut self, dt: f32) {
        self.movement_target.y = self.position.y;
        self.position = move_towards(self.position, self.movement_target, self.settings.speed * dt);

        let gap = (horizontal(self.position) - horizontal(self.movement_target)).abs();
        if gap.x < SNAP_EPSILON && gap.y < SNAP_EPSILON {
            self.position = self.movement_target;
            self.moving = false;
        }
    }

    fn advance_jump(&mut self, dt: f32) {
        self.jump_target.x = self.position.x;
        self.jump_target.z = self.position.z;
        self.position = move_towards(self.position, self.jump_target, self.settings.jump_speed * dt);

        if (self.position.y - self.jump_target.y).abs() < SNAP_EPSILON {
            self.jump_left = count_down(self.jump_left, dt);
            if self.jump_left <= 0.0 {
                self.cancel_jump();
            }
        }
    }

    fn advance_sneak(&mut self, dt: f32, ground: &dyn GroundProbe) {
        if self.sneak_left > 0.0 {
            self.sneak_left = count_down(self.sneak_left, dt);
            if self.sneak_left > 0.0 {
                return;
            }
        }

        self.clearance = self.settings.levitate_clearance;
        self.rise_out_of_sneak(dt, ground);
    }

    /// Rises back to the normal clearance, ending the sneak once the ground
    /// is out of reach of the shortened resting ray.
    fn rise_out_of_sneak(&mut self, dt: f32, ground: &dyn GroundProbe) {
        let step = self.settings.jump_speed * dt;
        if !is_grounded(ground, self.position, self.resting_reach() - step) {
            self.snap_to_ground(ground);
            self.cancel_sneak();
            return;
        }

        self.position = move_towards(
            self.position,
            self.position + Vec3::Y * FAR_TARGET_DISTANCE,
            step,
        );
    }

    fn snap_to_ground(&mut self, ground: &dyn GroundProbe) {
        let floor = ground_height(ground, self.position, self.position.y);
        self.position.y = floor + self.clearance - GROUND_SKIN + self.half_height();
    }

    fn cancel_jump(&mut self) {
        self.jump_left = 0.0;
        self.jumping = false;
        self.vertical = VerticalMotion::Gravity;
        debug!("jump finished");
    }

    fn cancel_sneak(&mut self) {
        self.clearance = self.settings.levitate_clearance;
        self.sneak_left = 0.0;
        self.sneaking = false;
        debug!("sneak finished");
    }

    /// Distance from the pre-transition location to `point`, measured along
    /// the axis of the latest lane transition.
    pub(crate) fn distance_along_transition(&self, point: Vec3) -> f32 {
        let offset = point - self.transition_origin;
        if self.transition_axis == Vec3::ZERO {
            horizontal(offset).length()
        } else {
            offset.dot(self.transition_axis).abs()
        }
    }

    /// Sends the actor back toward the lane it was leaving.
    pub(crate) fn roll_back_transition(&mut self) {
        self.lane = self.previous_lane;
        self.movement_target = self.transition_origin;
        debug!("rolled back to lane {}", self.lane);
    }

    /// Ends the run: locks controls for good and releases the body.
    pub(crate) fn end_run(&mut self) -> Knockback {
        self.controls_locked = true;
        self.game_over = true;
        self.vertical = VerticalMotion::Released;
        debug!("run ended at {:?}", self.position);
        Knockback {
            impulse: Vec3::Y * self.settings.collision_force,
            spin: GAME_OVER_SPIN,
        }
    }
}
