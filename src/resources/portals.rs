//! Screen-edge portal zones.
//!
//! Two static rects in scaled pixel space. An actor overlapping one zone is
//! relocated to just inside the opposite zone's boundary, adjusting x only.
use bevy_ecs::prelude::Resource;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;

/// One portal zone rectangle.
#[derive(Debug, Clone, Copy)]
pub struct PortalZone {
    pub pos: MapPosition,
    pub collider: BoxCollider,
}

impl PortalZone {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: MapPosition::new(x, y),
            collider: BoxCollider::new(width, height),
        }
    }

    /// Does a box at `pos` with `collider` overlap this zone?
    pub fn contains(&self, pos: MapPosition, collider: &BoxCollider) -> bool {
        collider.overlaps(pos, &self.collider, self.pos)
    }
}

#[derive(Resource, Debug, Clone, Copy)]
pub struct Portals {
    pub left: PortalZone,
    pub right: PortalZone,
}

impl Portals {
    /// X coordinate that places a box of `width` just inside the left edge,
    /// one unit clear of the left portal.
    pub fn left_entry_x(&self, width: f32) -> f32 {
        self.left.pos.x + width + 1.0
    }

    /// X coordinate that places a box of `width` just inside the right edge,
    /// one unit clear of the right portal.
    pub fn right_entry_x(&self, width: f32) -> f32 {
        self.right.pos.x - width - 1.0
    }
}
