//! Bevy plugin wiring the runner systems into the schedule.

use bevy::input::touch::TouchInput;
use bevy::prelude::*;
use log::debug;

use crate::settings::{GestureSettings, LocomotionSettings};

use super::input::{
    apply_gesture, read_keyboard_input_system, read_touch_input_system, toggle_pause, SwipeState,
};
use super::systems::{
    advance_locomotion_system, apply_gravity_system, integrate_released_bodies_system,
    resolve_contacts_system, sync_model_pose_system,
};

/// Installs input handling, locomotion and contact resolution.
///
/// Settings already inserted by the host are kept but clamped to their
/// ranges; otherwise defaults are used. The fixed timestep follows
/// [`LocomotionSettings::physics_hz`]. Input resources and touch messages
/// are registered when no input plugin provides them, so the plugin also
/// runs headless on top of `MinimalPlugins`.
#[derive(Debug, Default)]
pub struct LaneRunnerPlugin;

impl Plugin for LaneRunnerPlugin {
    fn build(&self, app: &mut App) {
        let settings = app
            .world()
            .get_resource::<LocomotionSettings>()
            .copied()
            .unwrap_or_default()
            .clamped();
        debug!("physics running at {} Hz", settings.physics_hz);

        let gestures = app
            .world()
            .get_resource::<GestureSettings>()
            .copied()
            .unwrap_or_default()
            .clamped();

        app.insert_resource(settings);
        app.insert_resource(gestures);
        app.init_resource::<SwipeState>();
        app.init_resource::<ButtonInput<KeyCode>>();
        app.init_resource::<ButtonInput<MouseButton>>();
        app.add_message::<TouchInput>();
        app.insert_resource(Time::<Fixed>::from_hz(f64::from(settings.physics_hz)));

        app.add_observer(apply_gesture);
        app.add_observer(toggle_pause);

        app.add_systems(
            Update,
            (
                read_touch_input_system,
                read_keyboard_input_system,
                advance_locomotion_system,
                resolve_contacts_system,
                sync_model_pose_system,
            )
                .chain(),
        );
        app.add_systems(
            FixedUpdate,
            (apply_gravity_system, integrate_released_bodies_system).chain(),
        );
    }
}
