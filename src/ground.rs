//! Downward ground probing.
//!
//! The locomotion state machine never looks at colliders directly. It asks a
//! [`GroundProbe`] whether a surface lies within some distance straight below
//! a point, and how high that surface is.

use glam::Vec3;

use crate::constants::GROUND_PROBE_DISTANCE;

/// A ray test straight down from a point.
#[cfg_attr(test, mockall::automock)]
pub trait GroundProbe {
    /// Casts a ray from `origin` toward negative Y.
    ///
    /// Returns the height of the first surface hit within `max_distance`, or
    /// `None` when nothing is in reach. A negative `max_distance` never hits.
    fn cast_down(&self, origin: Vec3, max_distance: f32) -> Option<f32>;
}

/// Height of the ground below `origin`, or `fallback` when the probe misses.
#[must_use]
pub fn ground_height(probe: &dyn GroundProbe, origin: Vec3, fallback: f32) -> f32 {
    probe
        .cast_down(origin, GROUND_PROBE_DISTANCE)
        .unwrap_or(fallback)
}

/// Whether any surface lies within `reach` below `origin`.
#[must_use]
pub fn is_grounded(probe: &dyn GroundProbe, origin: Vec3, reach: f32) -> bool {
    probe.cast_down(origin, reach).is_some()
}

/// An infinite horizontal plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatGround {
    /// Height of the plane.
    pub height: f32,
}

impl FlatGround {
    /// Creates a plane at `height`.
    #[must_use]
    pub const fn new(height: f32) -> Self {
        Self { height }
    }
}

impl GroundProbe for FlatGround {
    fn cast_down(&self, origin: Vec3, max_distance: f32) -> Option<f32> {
        let drop = origin.y - self.height;
        (drop >= 0.0 && drop <= max_distance).then_some(self.height)
    }
}

/// An axis-aligned box whose top face can be stood on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceBox {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl SurfaceBox {
    /// Builds a box from its centre and full size.
    #[must_use]
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    fn covers_column(&self, origin: Vec3) -> bool {
        (self.min.x..=self.max.x).contains(&origin.x) && (self.min.z..=self.max.z).contains(&origin.z)
    }
}

/// A set of surface boxes; the ray hits the highest top face below it.
///
/// A ray that starts inside a box does not hit that box.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoxGround {
    boxes: Vec<SurfaceBox>,
}

impl BoxGround {
    /// Creates a probe over `boxes`.
    #[must_use]
    pub const fn new(boxes: Vec<SurfaceBox>) -> Self {
        Self { boxes }
    }

    /// Adds a surface.
    pub fn push(&mut self, surface: SurfaceBox) {
        self.boxes.push(surface);
    }
}

impl FromIterator<SurfaceBox> for BoxGround {
    fn from_iter<I: IntoIterator<Item = SurfaceBox>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl GroundProbe for BoxGround {
    fn cast_down(&self, origin: Vec3, max_distance: f32) -> Option<f32> {
        self.boxes
            .iter()
            .filter(|surface| surface.covers_column(origin))
            .map(|surface| surface.max.y)
            .filter(|top| {
                let drop = origin.y - top;
                drop >= 0.0 && drop <= max_distance
            })
            .max_by(f32::total_cmp)
    }
}
