//! Camera blend trigger.
//!
//! Virtual cameras are plain components; whatever blends between them reads
//! `enabled` and `priority` and arbitrates exclusivity. This module only
//! reacts to [`TrackStart`] by enabling the primary one.

use bevy::prelude::*;
use log::debug;

use crate::events::TrackStart;

/// A camera viewpoint the blend system may cut or blend to.
#[derive(Component, Reflect, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct VirtualCamera {
    /// Whether the viewpoint competes for the live camera.
    pub enabled: bool,
    /// Higher priorities win when several viewpoints are enabled.
    pub priority: i32,
}

/// Marks the viewpoint enabled when a track starts.
#[derive(Component, Reflect, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct PrimaryBlendCamera;

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
fn blend_to_primary(
    event: On<TrackStart>,
    mut cameras: Query<(Entity, &mut VirtualCamera), With<PrimaryBlendCamera>>,
) {
    for (entity, mut camera) in &mut cameras {
        if !camera.enabled {
            camera.enabled = true;
            debug!("{:?}: blending to {entity:?}", event.event());
        }
    }
}

/// Registers the camera components and the [`TrackStart`] observer.
#[derive(Debug, Default)]
pub struct CameraBlendPlugin;

impl Plugin for CameraBlendPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<VirtualCamera>();
        app.register_type::<PrimaryBlendCamera>();
        app.add_observer(blend_to_primary);
    }
}
