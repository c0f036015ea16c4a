//! Utility helpers for tests.
//!
//! Builds headless runner apps with a fixed frame length and counts the
//! gameplay events they fire.

use std::time::Duration;

use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use glam::Vec3;
use lane_runner::{
    evenly_spaced_lanes, spawn_coin, spawn_ground, spawn_obstacle, spawn_player,
    CameraBlendPlugin, CollectCoin, GameOver, Gesture, GestureDetected, LaneRunnerPlugin,
    LocomotionSettings, ObstacleCollision, PlayerBlueprint, PlayerHandles, TrackStart,
};

/// Frame length used by every test app, matching the default physics rate.
pub const FRAME: Duration = Duration::from_nanos(16_666_667);

/// Distance between the lanes built by [`three_lanes`].
pub const LANE_SPACING: f32 = 2.0;

/// Three lanes at x = -2, 0 and 2.
#[must_use]
pub fn three_lanes() -> Vec<Vec3> {
    evenly_spaced_lanes(3, LANE_SPACING)
}

/// Number of each gameplay event fired so far.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EventCounts {
    /// [`TrackStart`] events.
    pub track_starts: usize,
    /// [`GameOver`] events.
    pub game_overs: usize,
    /// [`CollectCoin`] events.
    pub coins: usize,
    /// [`ObstacleCollision`] events.
    pub obstacle_collisions: usize,
    /// [`GestureDetected`] events carrying [`Gesture::Tap`].
    pub taps: usize,
}

/// Registers observers that tally gameplay events into [`EventCounts`].
pub fn install_event_counters(app: &mut App) {
    app.init_resource::<EventCounts>();
    app.add_observer(|_: On<TrackStart>, mut counts: ResMut<EventCounts>| {
        counts.track_starts += 1;
    });
    app.add_observer(|_: On<GameOver>, mut counts: ResMut<EventCounts>| {
        counts.game_overs += 1;
    });
    app.add_observer(|_: On<CollectCoin>, mut counts: ResMut<EventCounts>| {
        counts.coins += 1;
    });
    app.add_observer(|_: On<ObstacleCollision>, mut counts: ResMut<EventCounts>| {
        counts.obstacle_collisions += 1;
    });
    app.add_observer(
        |event: On<GestureDetected>, mut counts: ResMut<EventCounts>| {
            if event.event().0 == Gesture::Tap {
                counts.taps += 1;
            }
        },
    );
}

/// Builder for headless runner apps.
pub struct RunnerAppBuilder {
    app: App,
    settings: Option<LocomotionSettings>,
}

impl Default for RunnerAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RunnerAppBuilder {
    /// Starts from `MinimalPlugins` with manual frame timing.
    #[must_use]
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
        Self {
            app,
            settings: None,
        }
    }

    /// Overrides the locomotion settings.
    #[must_use]
    pub fn with_settings(mut self, settings: LocomotionSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Installs the plugins and a ground slab under [`three_lanes`], and
    /// returns the app.
    #[must_use]
    pub fn build(mut self) -> App {
        if let Some(settings) = self.settings {
            self.app.insert_resource(settings);
        }
        self.app.add_plugins((LaneRunnerPlugin, CameraBlendPlugin));
        install_event_counters(&mut self.app);
        spawn_ground(
            self.app.world_mut(),
            Vec3::new(0.0, -0.5, 0.0),
            Vec3::new(8.0, 1.0, 100.0),
        );
        self.app
    }
}

/// Spawns a player on [`three_lanes`].
///
/// # Panics
/// Panics if the default blueprint is rejected.
pub fn spawn_runner(app: &mut App) -> PlayerHandles {
    spawn_player(app.world_mut(), PlayerBlueprint::new(three_lanes()))
        .unwrap_or_else(|e| panic!("default blueprint rejected: {e}"))
}

/// Spawns an obstacle standing on the ground in `lane`.
///
/// # Panics
/// Panics if `lane` is not one of [`three_lanes`].
pub fn obstacle_in_lane(app: &mut App, lane: usize) -> Entity {
    let base = lane_base(lane);
    spawn_obstacle(app.world_mut(), base + Vec3::Y, Vec3::ONE)
}

/// Spawns a coin at chest height in `lane`.
///
/// # Panics
/// Panics if `lane` is not one of [`three_lanes`].
pub fn coin_in_lane(app: &mut App, lane: usize) -> Entity {
    let base = lane_base(lane);
    spawn_coin(app.world_mut(), base + Vec3::Y * 2.0, Vec3::splat(0.5))
}

fn lane_base(lane: usize) -> Vec3 {
    three_lanes()
        .get(lane)
        .copied()
        .unwrap_or_else(|| panic!("no lane {lane}"))
}

/// Runs `frames` updates.
pub fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

/// Presses `key` for exactly one frame.
pub fn tap_key(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
    app.update();
    let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keys.release(key);
    keys.clear();
}

/// Writes a raw touch message for pointer `id` at window `position`.
pub fn touch(app: &mut App, id: u64, phase: TouchPhase, position: Vec2) {
    app.world_mut().write_message(TouchInput {
        phase,
        position,
        window: Entity::PLACEHOLDER,
        force: None,
        id,
    });
}

/// Presses at `from` and lifts at `to` within one frame, with no move
/// reported in between. Positions are in window coordinates, y down.
pub fn flick(app: &mut App, from: Vec2, to: Vec2) {
    touch(app, 0, TouchPhase::Started, from);
    touch(app, 0, TouchPhase::Ended, to);
    app.update();
}

/// Current tallies of gameplay events.
///
/// # Panics
/// Panics if [`install_event_counters`] was not called.
#[must_use]
pub fn event_counts(app: &App) -> EventCounts {
    *app.world().resource::<EventCounts>()
}
