//! Basic vector math helper functions.
//! Small helpers for stepping positions toward targets and measuring
//! horizontal offsets.
use glam::{Vec2, Vec3};

/// Moves `current` toward `target` by at most `max_delta` units.
///
/// Returns `target` itself once it lies within reach, so repeated calls
/// settle exactly on it rather than oscillating around it.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use lane_runner::vector_math::move_towards;
/// let step = move_towards(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 4.0);
/// assert!((step.x - 4.0).abs() < f32::EPSILON);
/// let arrived = move_towards(step, Vec3::new(5.0, 0.0, 0.0), 4.0);
/// assert_eq!(arrived, Vec3::new(5.0, 0.0, 0.0));
/// ```
#[must_use]
pub fn move_towards(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let offset = target - current;
    let distance = offset.length();
    if distance <= max_delta || distance == 0.0 {
        return target;
    }
    current + offset / distance * max_delta
}

/// Returns the horizontal (XZ-plane) part of a vector.
#[must_use]
pub const fn horizontal(vector: Vec3) -> Vec2 {
    Vec2::new(vector.x, vector.z)
}

/// Returns the unit horizontal direction from `from` to `to`.
///
/// The result is [`Vec3::ZERO`] when both points share the same XZ
/// coordinates or any component is not finite.
#[must_use]
pub fn horizontal_direction(from: Vec3, to: Vec3) -> Vec3 {
    let offset = to - from;
    Vec3::new(offset.x, 0.0, offset.z)
        .try_normalize()
        .unwrap_or(Vec3::ZERO)
}
