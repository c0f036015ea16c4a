//! Input systems and the observers that apply gestures to the player.

use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use log::debug;

use crate::components::Player;
use crate::events::{GestureDetected, PauseToggled};
use crate::gesture::{Gesture, SwipeTracker};
use crate::settings::GestureSettings;

use super::systems::{surface_boxes, GroundQuery};

/// Arrow keys mirror the four swipes.
const KEY_BINDINGS: [(KeyCode, Gesture); 4] = [
    (KeyCode::ArrowLeft, Gesture::SwipeLeft),
    (KeyCode::ArrowRight, Gesture::SwipeRight),
    (KeyCode::ArrowUp, Gesture::SwipeUp),
    (KeyCode::ArrowDown, Gesture::SwipeDown),
];

/// Key that fires [`PauseToggled`], standing in for the pause button.
pub const PAUSE_KEY: KeyCode = KeyCode::Escape;

/// Press state of the tracked touch.
#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct SwipeState(pub SwipeTracker);

/// Gesture bound to `key`, if any.
///
/// # Examples
/// ```
/// use bevy::input::keyboard::KeyCode;
/// use lane_runner::gesture::Gesture;
/// use lane_runner::runner::key_gesture;
/// assert_eq!(key_gesture(KeyCode::ArrowUp), Some(Gesture::SwipeUp));
/// assert_eq!(key_gesture(KeyCode::KeyQ), None);
/// ```
#[must_use]
pub fn key_gesture(key: KeyCode) -> Option<Gesture> {
    KEY_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, gesture)| *gesture)
}

/// Window coordinates grow downward; the classifier expects y-up.
const fn to_y_up(position: Vec2) -> Vec2 {
    Vec2::new(position.x, -position.y)
}

/// Classifies completed touches into gestures.
///
/// Reads raw touch messages so the release point is the one carried by the
/// `Ended` or `Canceled` message, even when no move was reported before it.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn read_touch_input_system(
    mut touches: MessageReader<TouchInput>,
    settings: Res<GestureSettings>,
    mut tracker: ResMut<SwipeState>,
    mut commands: Commands,
) {
    for touch in touches.read() {
        let position = to_y_up(touch.position);
        match touch.phase {
            TouchPhase::Started => tracker.press(touch.id, position),
            TouchPhase::Ended | TouchPhase::Canceled => {
                if let Some(gesture) = tracker.release(touch.id, position, settings.tap_distance) {
                    commands.trigger(GestureDetected(gesture));
                }
            }
            TouchPhase::Moved => {}
        }
    }
}

/// Emits gestures for arrow keys and the primary mouse button, and the
/// pause toggle for [`PAUSE_KEY`].
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn read_keyboard_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut commands: Commands,
) {
    for (key, gesture) in KEY_BINDINGS {
        if keys.just_pressed(key) {
            commands.trigger(GestureDetected(gesture));
        }
    }
    if mouse.just_pressed(MouseButton::Left) {
        commands.trigger(GestureDetected(Gesture::Tap));
    }
    if keys.just_pressed(PAUSE_KEY) {
        commands.trigger(PauseToggled);
    }
}

/// Applies a gesture to every player. Taps are left to UI observers.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
pub fn apply_gesture(
    event: On<GestureDetected>,
    mut players: Query<&mut Player>,
    grounds: GroundQuery<'_, '_>,
) {
    let GestureDetected(gesture) = *event.event();
    debug!("gesture {gesture:?}");
    let ground = surface_boxes(&grounds);
    for mut player in &mut players {
        match gesture {
            Gesture::SwipeLeft => player.move_left(),
            Gesture::SwipeRight => player.move_right(),
            Gesture::SwipeUp => {
                player.jump(&ground);
            }
            Gesture::SwipeDown => {
                player.sneak();
            }
            Gesture::Tap => {}
        }
    }
}

/// Flips the controls lock of every player.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
pub fn toggle_pause(event: On<PauseToggled>, mut players: Query<&mut Player>) {
    for mut player in &mut players {
        let locked = player.toggle_controls_lock();
        debug!("{:?}: controls locked: {locked}", event.event());
    }
}
