//! Library crate providing the lane runner's movement core.
//!
//! The pure modules ([`ground`], [`gesture`], [`locomotion`], [`collision`])
//! hold the rules and know nothing about Bevy. The [`runner`], [`camera`]
//! and [`spawn`] modules wire them into an `App`.
pub mod camera;
pub mod collision;
pub mod components;
pub mod constants;
pub mod events;
pub mod gesture;
pub mod ground;
pub mod locomotion;
pub mod logging;
pub mod runner;
pub mod settings;
pub mod spawn;
pub mod vector_math;
pub use constants::*;

// Re-export commonly used items
pub use camera::{CameraBlendPlugin, PrimaryBlendCamera, VirtualCamera};
pub use collision::{boxes_overlap, resolve_obstacle, ObstacleOutcome};
pub use components::{
    Coin, Collider, ContactTracker, Ground, HoverEffect, Obstacle, PhysicsBody, Player,
    PlayerModel,
};
pub use events::{
    CollectCoin, GameOver, GestureDetected, ObstacleCollision, PauseToggled, TrackStart,
};
pub use gesture::{classify, Gesture, SwipeTracker};
pub use ground::{BoxGround, FlatGround, GroundProbe, SurfaceBox};
pub use locomotion::{
    evenly_spaced_lanes, Knockback, LaneError, LaneSet, Locomotion, VerticalMotion,
};
pub use logging::init as init_logging;
pub use runner::LaneRunnerPlugin;
pub use settings::{
    load_settings, parse_settings, GestureSettings, LocomotionSettings, SettingsError,
    SettingsFile,
};
pub use spawn::{
    spawn_coin, spawn_ground, spawn_obstacle, spawn_player, PlayerBlueprint, PlayerHandles,
    SetupError,
};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use lane_runner::prelude::*;
    //! ```

    pub use crate::events::{CollectCoin, GameOver, GestureDetected, TrackStart};
    pub use crate::gesture::Gesture;
    pub use crate::locomotion::{evenly_spaced_lanes, Locomotion};
    pub use crate::settings::LocomotionSettings;
    pub use crate::spawn::{spawn_player, PlayerBlueprint};
    pub use crate::CameraBlendPlugin;
    pub use crate::LaneRunnerPlugin;
}
