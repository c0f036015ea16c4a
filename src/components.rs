//! ECS component types used by the game.
//! Covers the player and its visual model, the physics body released on game
//! over, and the tagged track objects the player collides with.
use bevy::prelude::*;
use hashbrown::HashSet;

use crate::locomotion::Locomotion;

/// The runner. Wraps its locomotion state machine.
#[derive(Component, Debug, Clone, Deref, DerefMut)]
pub struct Player(pub Locomotion);

/// The visual model following a [`Player`] entity.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PlayerModel {
    /// The logic entity this model follows.
    pub owner: Entity,
    /// Model translation relative to the logic entity while playing.
    pub position_offset: Vec3,
    /// Model rotation relative to the logic entity once controls lock.
    pub rotation_offset: Quat,
}

/// Velocities of the body that takes over when the run ends.
///
/// While `constrained` the locomotion systems own the transform and the
/// velocities are ignored.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PhysicsBody {
    /// Linear velocity in units per second.
    pub linear_velocity: Vec3,
    /// Angular velocity as a scaled axis in radians per second.
    pub angular_velocity: Vec3,
    /// Mass used to turn impulses into velocity.
    pub mass: f32,
    /// Whether locomotion, rather than the body, drives the transform.
    pub constrained: bool,
}

impl Default for PhysicsBody {
    fn default() -> Self {
        Self {
            linear_velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            mass: 1.0,
            constrained: true,
        }
    }
}

impl PhysicsBody {
    /// Adds `impulse / mass` to the linear velocity. Non-positive masses
    /// leave the velocity unchanged.
    pub fn apply_impulse(&mut self, impulse: Vec3) {
        if self.mass > 0.0 {
            self.linear_velocity += impulse / self.mass;
        }
    }
}

/// Axis-aligned box collider centred on the entity's translation.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    /// Full size of the box.
    pub size: Vec3,
}

/// Ends the run, or bounces a lane switch back, on contact.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Obstacle;

/// Collected and despawned on contact.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Coin;

/// A box whose top face the ground probe can hit.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Ground {
    /// Full size of the box, centred on the entity's translation.
    pub size: Vec3,
}

/// Cosmetic hover effect that stops when the run ends.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverEffect {
    /// Whether the effect is playing.
    pub playing: bool,
}

/// Entities the player overlapped on the previous frame.
#[derive(Component, Debug, Clone, Default)]
pub struct ContactTracker {
    pub(crate) touching: HashSet<Entity>,
}

impl ContactTracker {
    /// Whether `entity` was overlapping on the previous frame.
    #[must_use]
    pub fn is_touching(&self, entity: Entity) -> bool {
        self.touching.contains(&entity)
    }
}
