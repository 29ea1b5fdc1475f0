//! Power-window expiry resource.
//!
//! When the player eats a power pellet, ghosts become vulnerable until a
//! fixed real-time delay has passed. The window is stored as an expiry
//! timestamp on simulation time and checked once per tick, so there is no
//! detached timer that could fire against already-removed ghosts, and a
//! second pellet simply moves the expiry forward.
use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PowerWindow {
    expires_at: Option<f32>,
}

impl PowerWindow {
    /// Open (or extend) the window until `now + duration`.
    pub fn open(&mut self, now: f32, duration: f32) {
        self.expires_at = Some(now + duration);
    }

    /// True when a window is open and `now` has passed its expiry.
    pub fn expired(&self, now: f32) -> bool {
        matches!(self.expires_at, Some(expiry) if now >= expiry)
    }

    pub fn is_open(&self) -> bool {
        self.expires_at.is_some()
    }

    /// Close the window.
    pub fn clear(&mut self) {
        self.expires_at = None;
    }
}
