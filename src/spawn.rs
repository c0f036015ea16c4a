//! Spawning the player and track objects into a Bevy world.

use bevy::prelude::*;
use log::debug;
use thiserror::Error;

use crate::components::{
    Coin, Collider, ContactTracker, Ground, HoverEffect, Obstacle, PhysicsBody, Player,
    PlayerModel,
};
use crate::locomotion::{LaneError, LaneSet, Locomotion};
use crate::settings::LocomotionSettings;

/// Fatal misconfiguration found while spawning the player.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SetupError {
    /// The player has no physics body to release on game over.
    #[error("player has no physics body")]
    MissingBody,
    /// The lane layout is unusable.
    #[error(transparent)]
    Lanes(#[from] LaneError),
}

/// Everything needed to put a runner on the track.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerBlueprint {
    /// Lane positions, ordered left to right.
    pub lanes: Vec<Vec3>,
    /// Full size of the player's box collider.
    pub collider_size: Vec3,
    /// Body released when the run ends.
    pub body: Option<PhysicsBody>,
    /// Model translation relative to the logic entity.
    pub model_offset: Vec3,
    /// Model rotation relative to the logic entity.
    pub model_rotation_offset: Quat,
}

impl PlayerBlueprint {
    /// A blueprint with a default body and a unit-wide, two-unit-tall
    /// collider whose model sits on the logic entity.
    #[must_use]
    pub fn new(lanes: Vec<Vec3>) -> Self {
        Self {
            lanes,
            collider_size: Vec3::new(1.0, 2.0, 1.0),
            body: Some(PhysicsBody::default()),
            model_offset: Vec3::ZERO,
            model_rotation_offset: Quat::IDENTITY,
        }
    }
}

/// Entities created by [`spawn_player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerHandles {
    /// The logic entity carrying [`Player`].
    pub player: Entity,
    /// The visual model following it.
    pub model: Entity,
}

/// Spawns the player and its model.
///
/// Locomotion uses the world's [`LocomotionSettings`] resource, or the
/// defaults when none is inserted. The player starts above the middle lane
/// with its hover effect playing.
///
/// # Errors
/// Returns [`SetupError::MissingBody`] when the blueprint has no body, and
/// [`SetupError::Lanes`] when it has fewer than two lanes. Nothing is
/// spawned on error.
pub fn spawn_player(world: &mut World, blueprint: PlayerBlueprint) -> Result<PlayerHandles, SetupError> {
    let PlayerBlueprint {
        lanes,
        collider_size,
        body,
        model_offset,
        model_rotation_offset,
    } = blueprint;

    let released = body.ok_or(SetupError::MissingBody)?;
    let lane_set = LaneSet::new(lanes)?;
    let settings = world
        .get_resource::<LocomotionSettings>()
        .copied()
        .unwrap_or_default();

    let locomotion = Locomotion::new(lane_set, collider_size.y, settings);
    let start = locomotion.position();
    let player = world
        .spawn((
            Name::new("Player"),
            Player(locomotion),
            Transform::from_translation(start),
            Collider {
                size: collider_size,
            },
            ContactTracker::default(),
            PhysicsBody {
                constrained: true,
                ..released
            },
            HoverEffect { playing: true },
        ))
        .id();
    let model = world
        .spawn((
            Name::new("PlayerModel"),
            PlayerModel {
                owner: player,
                position_offset: model_offset,
                rotation_offset: model_rotation_offset,
            },
            Transform::from_translation(start + model_offset),
        ))
        .id();

    debug!("spawned player {player:?} with model {model:?} at {start:?}");
    Ok(PlayerHandles { player, model })
}

/// Spawns a ground box centred on `center`.
pub fn spawn_ground(world: &mut World, center: Vec3, size: Vec3) -> Entity {
    world
        .spawn((
            Name::new("Ground"),
            Ground { size },
            Transform::from_translation(center),
        ))
        .id()
}

/// Spawns an obstacle box centred on `center`.
pub fn spawn_obstacle(world: &mut World, center: Vec3, size: Vec3) -> Entity {
    world
        .spawn((
            Name::new("Obstacle"),
            Obstacle,
            Collider { size },
            Transform::from_translation(center),
        ))
        .id()
}

/// Spawns a coin centred on `center`.
pub fn spawn_coin(world: &mut World, center: Vec3, size: Vec3) -> Entity {
    world
        .spawn((
            Name::new("Coin"),
            Coin,
            Collider { size },
            Transform::from_translation(center),
        ))
        .id()
}
