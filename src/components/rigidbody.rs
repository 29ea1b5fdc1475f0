//! Kinematic body component.
//!
//! Maze actors move on one axis at a time at a fixed speed, so the body
//! stores a unit velocity with each component in {-1, 0, 1}. The movement
//! system multiplies it by the configured speed unit when integrating
//! positions once per tick.
use bevy_ecs::prelude::Component;

use crate::components::direction::Direction;

/// Unit velocity of a maze actor.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct RigidBody {
    pub vx: f32,
    pub vy: f32,
}

impl RigidBody {
    /// Create a body at rest.
    pub fn new() -> Self {
        Self { vx: 0.0, vy: 0.0 }
    }

    /// Create a body already heading in `dir`.
    pub fn heading(dir: Direction) -> Self {
        let (vx, vy) = dir.unit();
        Self { vx, vy }
    }

    /// Point the body along `dir` with unit speed.
    pub fn set_direction(&mut self, dir: Direction) {
        let (vx, vy) = dir.unit();
        self.vx = vx;
        self.vy = vy;
    }

    /// Zero both velocity components.
    pub fn stop(&mut self) {
        self.vx = 0.0;
        self.vy = 0.0;
    }

    /// True when both velocity components are zero.
    pub fn is_stopped(&self) -> bool {
        self.vx == 0.0 && self.vy == 0.0
    }
}
