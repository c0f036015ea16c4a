//! The fixed set of lane positions an actor switches between.

use glam::Vec3;
use thiserror::Error;

/// Errors raised when building a [`LaneSet`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum LaneError {
    /// Fewer than two lanes leave nothing to switch between.
    #[error("at least two lanes are required, found {0}")]
    TooFew(usize),
}

/// Ordered, immutable lane positions. Always holds at least two lanes.
#[derive(Debug, Clone, PartialEq)]
pub struct LaneSet {
    positions: Vec<Vec3>,
}

impl LaneSet {
    /// Minimum number of lanes.
    pub const MIN_LANES: usize = 2;

    /// Builds a lane set from world positions.
    ///
    /// # Errors
    /// Returns [`LaneError::TooFew`] when fewer than [`Self::MIN_LANES`]
    /// positions are given.
    pub fn new(positions: Vec<Vec3>) -> Result<Self, LaneError> {
        if positions.len() < Self::MIN_LANES {
            return Err(LaneError::TooFew(positions.len()));
        }
        Ok(Self { positions })
    }

    /// Number of lanes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position of lane `index`, if it exists.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Vec3> {
        self.positions.get(index).copied()
    }

    /// The middle lane (the left one of the two middles for even counts).
    #[must_use]
    pub fn start_index(&self) -> usize {
        (self.len() - 1) / 2
    }

    /// Position of the start lane.
    #[must_use]
    pub fn start_position(&self) -> Vec3 {
        self.get(self.start_index()).unwrap_or(Vec3::ZERO)
    }

    /// Iterates over lane positions in index order.
    pub fn iter(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.positions.iter().copied()
    }
}

/// Lays out `count` lanes along X, `spacing` apart and centred on the origin.
///
/// # Examples
/// ```
/// use lane_runner::locomotion::evenly_spaced_lanes;
/// let lanes = evenly_spaced_lanes(3, 2.0);
/// assert_eq!(lanes.iter().map(|lane| lane.x).collect::<Vec<_>>(), vec![-2.0, 0.0, 2.0]);
/// ```
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "Lane counts are single digits."
)]
pub fn evenly_spaced_lanes(count: usize, spacing: f32) -> Vec<Vec3> {
    let centre = (count.saturating_sub(1)) as f32 * 0.5;
    (0..count)
        .map(|index| Vec3::new((index as f32 - centre) * spacing, 0.0, 0.0))
        .collect()
}
