//! World-space position component.
use bevy_ecs::prelude::Component;

use crate::components::direction::Direction;

/// Top-left corner of an entity's box in scaled pixel space.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub x: f32,
    pub y: f32,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// This position displaced by `amount` units along `dir`.
    ///
    /// Used by the steering probe; the original position is never mutated.
    pub fn displaced(&self, dir: Direction, amount: f32) -> Self {
        let (ux, uy) = dir.unit();
        Self {
            x: self.x + ux * amount,
            y: self.y + uy * amount,
        }
    }

    /// This position advanced by one tick of the given velocity.
    pub fn advanced(&self, vx: f32, vy: f32, speed: f32) -> Self {
        Self {
            x: self.x + vx * speed,
            y: self.y + vy * speed,
        }
    }
}
