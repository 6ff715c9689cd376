//! Per-frame read queries over the star set.
//!
//! - [`visible`] : stars inside the view cone, farthest first, with render hints
//! - [`target`] : the single star closest to the view center
//!
//! Both are pure functions of a [`Catalog`](crate::Catalog), a [`CameraPose`]
//! and a parameter struct. Neither keeps state between calls.

pub mod target;
pub mod visible;

use universe_core::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use target::{select_target, TargetParams, TargetReason, TargetSelection};
pub use visible::{render_hints, visible_stars, RenderHints, VisibleParams, VisibleStar};

/// Where the viewer is and which way it looks.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CameraPose {
    /// Position in light-years.
    pub position: Vector3,
    /// Unit view direction.
    pub forward: Vector3,
}

impl CameraPose {
    /// Normalizes `forward`. A zero direction stays zero and sees nothing.
    pub fn new(position: Vector3, forward: Vector3) -> Self {
        Self {
            position,
            forward: forward.normalize(),
        }
    }

    /// Distance to `point` and the unit direction toward it.
    pub(crate) fn sight_line(&self, point: &Vector3) -> (f64, Vector3) {
        let offset = *point - self.position;
        (offset.magnitude(), offset.normalize())
    }
}
