//! Designer-tunable gameplay settings.
//!
//! Settings are plain resources with serde support so they can be loaded from
//! a JSON file. Each field is clamped to its own range; fields are never
//! checked against each other.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bevy::prelude::Resource;
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tuning for lane switching, jumping, sneaking and falling.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionSettings {
    /// Lane switch speed in world units per second. Range `0..=100`.
    pub speed: f32,
    /// Hover height above the ground in the normal stance. Range `0..=10`.
    pub levitate_clearance: f32,
    /// Upward impulse applied to the body when the run ends. Range `0..=100`.
    pub collision_force: f32,
    /// Rise speed during jumps and un-sneaking, also the fall speed per
    /// second of fixed-rate time. Range `0..=100`.
    pub jump_speed: f32,
    /// Jump apex above the resting height. Range `0..=100`.
    pub jump_height: f32,
    /// Time spent hovering at the apex, in timer units. Range `0..=100`.
    pub jump_duration: f32,
    /// Time spent sneaking, in timer units. Range `0..=100`.
    pub sneak_duration: f32,
    /// Hover height above the ground while sneaking. Range `0..=1`.
    pub sneak_clearance: f32,
    /// Fixed-rate physics ticks per second. Range `1..=1000`.
    pub physics_hz: f32,
}

impl Default for LocomotionSettings {
    fn default() -> Self {
        Self {
            speed: 30.0,
            levitate_clearance: 1.0,
            collision_force: 10.0,
            jump_speed: 20.0,
            jump_height: 1.8,
            jump_duration: 4.0,
            sneak_duration: 10.0,
            sneak_clearance: 0.01,
            physics_hz: 60.0,
        }
    }
}

impl LocomotionSettings {
    /// Returns a copy with every field clamped to its allowed range.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            speed: self.speed.clamp(0.0, 100.0),
            levitate_clearance: self.levitate_clearance.clamp(0.0, 10.0),
            collision_force: self.collision_force.clamp(0.0, 100.0),
            jump_speed: self.jump_speed.clamp(0.0, 100.0),
            jump_height: self.jump_height.clamp(0.0, 100.0),
            jump_duration: self.jump_duration.clamp(0.0, 100.0),
            sneak_duration: self.sneak_duration.clamp(0.0, 100.0),
            sneak_clearance: self.sneak_clearance.clamp(0.0, 1.0),
            physics_hz: self.physics_hz.clamp(1.0, 1000.0),
        }
    }

    /// Length of one fixed-rate physics tick in seconds.
    #[must_use]
    pub fn fixed_delta(&self) -> f32 {
        self.physics_hz.recip()
    }

    /// Distance fallen during one fixed-rate physics tick.
    #[must_use]
    pub fn fall_step(&self) -> f32 {
        self.jump_speed * self.fixed_delta()
    }
}

/// Tuning for the swipe classifier.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    /// Largest pointer travel, in pixels, still classified as a tap.
    /// Range `0..=100`.
    pub tap_distance: f32,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self { tap_distance: 10.0 }
    }
}

impl GestureSettings {
    /// Returns a copy with every field clamped to its allowed range.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            tap_distance: self.tap_distance.clamp(0.0, 100.0),
        }
    }
}

/// On-disk settings layout. Missing sections and fields take their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsFile {
    /// Locomotion tuning.
    pub locomotion: LocomotionSettings,
    /// Input tuning.
    pub gestures: GestureSettings,
}

impl SettingsFile {
    /// Returns a copy with both sections clamped.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            locomotion: self.locomotion.clamped(),
            gestures: self.gestures.clamped(),
        }
    }
}

/// Failure while loading a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The file could not be read.
    #[error("failed to read settings from {path}: {source}")]
    Read {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The file was read but is not valid settings JSON.
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parses settings from a JSON document and clamps them.
///
/// # Examples
/// ```
/// use lane_runner::settings::parse_settings;
/// let settings = parse_settings(r#"{"locomotion": {"speed": 500.0}}"#).unwrap();
/// assert!((settings.locomotion.speed - 100.0).abs() < f32::EPSILON);
/// assert!((settings.gestures.tap_distance - 10.0).abs() < f32::EPSILON);
/// ```
///
/// # Errors
/// Returns [`SettingsError::Parse`] when the document is not valid JSON or a
/// field has the wrong type.
pub fn parse_settings(json: &str) -> Result<SettingsFile, SettingsError> {
    let parsed: SettingsFile = serde_json::from_str(json)?;
    Ok(parsed.clamped())
}

/// Loads and clamps settings from the JSON file at `path`.
///
/// # Errors
/// Returns [`SettingsError::Read`] if the file cannot be read and
/// [`SettingsError::Parse`] if its contents are invalid.
pub fn load_settings(path: &Path) -> Result<SettingsFile, SettingsError> {
    let json = fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = parse_settings(&json)?;
    info!("loaded settings from {}", path.display());
    Ok(settings)
}
