//! Swipe and tap classification.
//!
//! Pointer positions are expected in y-up screen space. The ECS input system
//! flips window coordinates before feeding them here.

use glam::Vec2;

/// A classified player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// Switch one lane toward index zero.
    SwipeLeft,
    /// Switch one lane toward the last index.
    SwipeRight,
    /// Jump.
    SwipeUp,
    /// Sneak.
    SwipeDown,
    /// A short touch or click.
    Tap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Classifies a press-minus-release displacement.
///
/// The axis with the larger magnitude dominates and the horizontal axis wins
/// exact ties. A dominant magnitude within `tap_distance` is a tap. The
/// direction mapping follows the displacement sign, which points from the
/// release back to the press: positive X is a left swipe and negative Y an
/// up swipe. Displacements with non-finite components classify as nothing.
///
/// # Examples
/// ```
/// use glam::Vec2;
/// use lane_runner::gesture::{classify, Gesture};
/// assert_eq!(classify(Vec2::new(40.0, 5.0), 10.0), Some(Gesture::SwipeLeft));
/// assert_eq!(classify(Vec2::new(3.0, -4.0), 10.0), Some(Gesture::Tap));
/// assert_eq!(classify(Vec2::new(20.0, -20.0), 10.0), Some(Gesture::SwipeLeft));
/// ```
#[must_use]
pub fn classify(displacement: Vec2, tap_distance: f32) -> Option<Gesture> {
    let (axis, dominant) = if displacement.y.abs() > displacement.x.abs() {
        (Axis::Vertical, displacement.y)
    } else {
        (Axis::Horizontal, displacement.x)
    };

    if dominant.abs() <= tap_distance {
        return Some(Gesture::Tap);
    }

    match axis {
        Axis::Horizontal if dominant > 0.0 => Some(Gesture::SwipeLeft),
        Axis::Horizontal if dominant < 0.0 => Some(Gesture::SwipeRight),
        Axis::Vertical if dominant < 0.0 => Some(Gesture::SwipeUp),
        Axis::Vertical if dominant > 0.0 => Some(Gesture::SwipeDown),
        _ => None,
    }
}

/// Tracks one pointer from press to release.
///
/// Only the first pointer pressed is followed; other pointers are ignored
/// until it lifts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    active: Option<(u64, Vec2)>,
}

impl SwipeTracker {
    /// Records a press, unless another pointer is already tracked.
    pub fn press(&mut self, pointer: u64, position: Vec2) {
        if self.active.is_none() {
            self.active = Some((pointer, position));
        }
    }

    /// Ends the tracked press and classifies the travel.
    ///
    /// Releases of untracked pointers yield `None`, as do presses that
    /// never started.
    pub fn release(&mut self, pointer: u64, position: Vec2, tap_distance: f32) -> Option<Gesture> {
        match self.active {
            Some((tracked, start)) if tracked == pointer => {
                self.active = None;
                classify(start - position, tap_distance)
            }
            _ => None,
        }
    }

    /// Whether a press is currently being tracked.
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.active.is_some()
    }
}
