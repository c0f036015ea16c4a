//! Systems driving the player from Bevy's schedules.

use bevy::prelude::*;
use hashbrown::HashSet;
use log::info;

use crate::collision::{boxes_overlap, resolve_obstacle, ObstacleOutcome};
use crate::components::{
    Coin, Collider, ContactTracker, Ground, HoverEffect, Obstacle, PhysicsBody, Player,
    PlayerModel,
};
use crate::events::{CollectCoin, GameOver, ObstacleCollision};
use crate::ground::{BoxGround, SurfaceBox};

/// Ground boxes, kept disjoint from the player's mutable transform.
pub type GroundQuery<'w, 's> =
    Query<'w, 's, (&'static Transform, &'static Ground), Without<Player>>;

type TrackObjects<'w, 's, T> =
    Query<'w, 's, (Entity, &'static Transform, &'static Collider), (With<T>, Without<Player>)>;

type MovingPlayer<'w> = (&'w mut Player, &'w mut Transform, &'w PhysicsBody);

type ContactRow<'w> = (
    &'w mut Player,
    &'w Transform,
    &'w Collider,
    &'w mut ContactTracker,
    &'w mut PhysicsBody,
    Option<&'w mut HoverEffect>,
);

/// Snapshot of every [`Ground`] box as a ground probe.
pub(crate) fn surface_boxes(grounds: &GroundQuery<'_, '_>) -> BoxGround {
    grounds
        .iter()
        .map(|(transform, ground)| SurfaceBox::from_center_size(transform.translation, ground.size))
        .collect()
}

fn write_translation(transform: &mut Transform, position: Vec3) {
    if transform.translation != position {
        transform.translation = position;
    }
}

/// Runs the variable-rate locomotion tick for players still under control
/// of their state machine.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn advance_locomotion_system(
    time: Res<Time>,
    mut players: Query<MovingPlayer<'_>>,
    grounds: GroundQuery<'_, '_>,
) {
    let dt = time.delta_secs();
    let ground = surface_boxes(&grounds);
    for (mut player, mut transform, body) in &mut players {
        if !body.constrained {
            continue;
        }
        player.set_position(transform.translation);
        player.tick(dt, &ground);
        write_translation(&mut transform, player.position());
    }
}

/// Runs the fixed-rate gravity integrator.
pub fn apply_gravity_system(mut players: Query<MovingPlayer<'_>>, grounds: GroundQuery<'_, '_>) {
    let ground = surface_boxes(&grounds);
    for (mut player, mut transform, body) in &mut players {
        if !body.constrained {
            continue;
        }
        player.set_position(transform.translation);
        player.apply_gravity(&ground);
        write_translation(&mut transform, player.position());
    }
}

fn overlapping<T: Component>(
    objects: &TrackObjects<'_, '_, T>,
    centre: Vec3,
    size: Vec3,
) -> Vec<(Entity, Vec3)> {
    objects
        .iter()
        .filter(|(_, transform, collider)| {
            boxes_overlap(centre, size, transform.translation, collider.size)
        })
        .map(|(entity, transform, _)| (entity, transform.translation))
        .collect()
}

/// Detects new overlaps with obstacles and coins and resolves them.
///
/// An obstacle counts once when the overlap begins. Each coin is despawned
/// and reported once, even when several players touch it together.
pub fn resolve_contacts_system(
    mut commands: Commands,
    mut players: Query<ContactRow<'_>>,
    obstacles: TrackObjects<'_, '_, Obstacle>,
    coins: TrackObjects<'_, '_, Coin>,
) {
    let mut collected = HashSet::new();
    for (mut player, transform, collider, mut tracker, mut body, mut hover) in &mut players {
        let centre = transform.translation;
        let mut touching = HashSet::new();

        for (obstacle, position) in overlapping(&obstacles, centre, collider.size) {
            touching.insert(obstacle);
            if tracker.is_touching(obstacle) {
                continue;
            }
            match resolve_obstacle(&mut player.0, position) {
                Some(ObstacleOutcome::GameOver(knockback)) => {
                    body.constrained = false;
                    body.apply_impulse(knockback.impulse);
                    body.angular_velocity += knockback.spin;
                    if let Some(effect) = hover.as_mut() {
                        effect.playing = false;
                    }
                    info!("game over after hitting {obstacle:?}");
                    commands.trigger(GameOver);
                }
                Some(ObstacleOutcome::Bounced { lane }) => {
                    info!("lane switch blocked by {obstacle:?}, back to lane {lane}");
                    commands.trigger(ObstacleCollision);
                }
                None => {}
            }
        }

        for (coin, _) in overlapping(&coins, centre, collider.size) {
            touching.insert(coin);
            if tracker.is_touching(coin) || !collected.insert(coin) {
                continue;
            }
            commands.entity(coin).despawn();
            commands.trigger(CollectCoin);
        }

        tracker.touching = touching;
    }
}

/// Keeps each player model on its logic entity.
///
/// While playing the model keeps its offset; once controls lock it sits on
/// the logic entity and takes its rotation.
pub fn sync_model_pose_system(
    players: Query<(&Player, &Transform), Without<PlayerModel>>,
    mut models: Query<(&PlayerModel, &mut Transform), Without<Player>>,
) {
    for (model, mut transform) in &mut models {
        let Ok((player, owner)) = players.get(model.owner) else {
            continue;
        };
        if player.controls_locked() {
            transform.translation = owner.translation;
            transform.rotation = owner.rotation * model.rotation_offset;
        } else {
            transform.translation = owner.translation + model.position_offset;
        }
    }
}

/// Moves released bodies by their velocities, one fixed tick at a time.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn integrate_released_bodies_system(
    time: Res<Time>,
    mut bodies: Query<(&PhysicsBody, &mut Transform)>,
) {
    let dt = time.delta_secs();
    for (body, mut transform) in &mut bodies {
        if body.constrained {
            continue;
        }
        transform.translation += body.linear_velocity * dt;
        transform.rotation = Quat::from_scaled_axis(body.angular_velocity * dt) * transform.rotation;
    }
}
