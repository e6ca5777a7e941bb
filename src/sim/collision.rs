//! Axis-aligned bounding-box collision tests
//!
//! The whole collision model is rectangles falling through rectangles, so
//! everything here is a pure predicate over [`Aabb`] values. The scan order
//! (blasts, then stars, then the player) lives in `tick`, not here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box in playfield coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Aabb {
    /// Build a box from its top-left corner and a size.
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            left: pos.x,
            top: pos.y,
            right: pos.x + size.x,
            bottom: pos.y + size.y,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Strict-inequality overlap test.
///
/// Boxes that share only an edge or a corner do NOT intersect; a hazard
/// grazing a star's boundary is a miss.
#[inline]
pub fn intersects(a: &Aabb, b: &Aabb) -> bool {
    a.left < b.right && a.right > b.left && a.top < b.bottom && a.bottom > b.top
}
