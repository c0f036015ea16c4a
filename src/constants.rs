//! Gameplay constants shared by the locomotion, collision and input modules.
//!
//! Designer-tunable values live in [`crate::settings`]; everything here is a
//! fixed property of the game's feel.
use glam::Vec3;

/// Distance under which a moving value snaps exactly onto its target.
pub const SNAP_EPSILON: f32 = 0.01;
/// Countdown timers drain at this multiple of the frame delta.
pub const TIMER_RATE: f32 = 10.0;
/// Maximum reach of the ground height probe.
pub const GROUND_PROBE_DISTANCE: f32 = 10.0;
/// Gap left between the collider and the surface when snapping to ground.
pub const GROUND_SKIN: f32 = 0.01;
/// Height above the start lane at which the actor spawns.
pub const SPAWN_HEIGHT: f32 = 3.0;
/// Distance to the far point targeted while rising out of a sneak or falling.
pub const FAR_TARGET_DISTANCE: f32 = 100.0;
/// Obstacles closer than this to the pre-transition location end the run.
pub const NEAR_MISS_DISTANCE: f32 = 0.5;
/// Angular velocity added to the released body when the run ends.
pub const GAME_OVER_SPIN: Vec3 = Vec3::new(0.0, 0.0, 1.0);
