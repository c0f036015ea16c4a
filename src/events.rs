//! Gameplay notifications.
//!
//! Each notification is a Bevy observer event: fired synchronously to every
//! observer registered at that moment. Observers are registered by the
//! plugins and live as long as the `App`.
use bevy::prelude::*;

use crate::gesture::Gesture;

/// A gameplay segment has started.
#[derive(Event, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackStart;

/// The run ended after an obstacle contact.
#[derive(Event, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameOver;

/// A coin was collected.
#[derive(Event, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectCoin;

/// A lane switch clipped an obstacle and was reverted.
#[derive(Event, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObstacleCollision;

/// The pause control was used.
#[derive(Event, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PauseToggled;

/// Touch or keyboard input produced a gesture.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureDetected(pub Gesture);
