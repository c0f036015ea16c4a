//! ECS wiring for the runner.
//!
//! This module re-exports the plugin, the input systems that turn touches
//! and keys into gestures, and the simulation systems that drive
//! [`crate::locomotion::Locomotion`] from Bevy's schedules.

mod input;
mod plugin;
mod systems;

pub use input::{
    apply_gesture, key_gesture, read_keyboard_input_system, read_touch_input_system,
    toggle_pause, SwipeState, PAUSE_KEY,
};
pub use plugin::LaneRunnerPlugin;
pub use systems::{
    advance_locomotion_system, apply_gravity_system, integrate_released_bodies_system,
    resolve_contacts_system, sync_model_pose_system,
};
