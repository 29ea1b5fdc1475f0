//! Axis-aligned rectangular collider.
//!
//! Every collision query in the simulation (food pickup, wall blocking,
//! actor-vs-actor contact, portal zones) goes through
//! [`BoxCollider::overlaps`]. The test uses strict inequalities, so boxes
//! that merely touch along an edge do not count as overlapping.
use bevy_ecs::prelude::Component;

use crate::components::mapposition::MapPosition;

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub width: f32,
    pub height: f32,
}

impl BoxCollider {
    /// Create a BoxCollider with the given extent.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns (min_x, min_y, max_x, max_y) of the AABB at `position`.
    pub fn aabb(&self, position: MapPosition) -> (f32, f32, f32, f32) {
        (
            position.x,
            position.y,
            position.x + self.width,
            position.y + self.height,
        )
    }

    /// AABB vs AABB overlap test against another collider at another position.
    ///
    /// True iff the boxes intersect with non-zero area. Symmetric and pure.
    pub fn overlaps(&self, position: MapPosition, other: &Self, other_position: MapPosition) -> bool {
        let (min_ax, min_ay, max_ax, max_ay) = self.aabb(position);
        let (min_bx, min_by, max_bx, max_by) = other.aabb(other_position);
        min_ax < max_bx && max_ax > min_bx && min_ay < max_by && max_ay > min_by
    }
}
