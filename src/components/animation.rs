//! Animation track state for an actor.
//!
//! The core never decodes sprite frames; that is the renderer's job. What
//! it does own is which track is active, because the track key doubles as
//! the actor's facing (`up`, `down`, `left`, `right`, the blocked `wait*`
//! variants, and `die`), and because the death sequence ends when its
//! non-looping track completes.
//!
//! Tracks belong to a named set (`pacman`, `redGhost`, ...). The power
//! window swaps every ghost's set for the frightened one and restores the
//! snapshot on reversion, keeping the current track key across the swap.
use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::components::direction::Direction;

/// Track key for the player death sequence.
pub const DEATH_TRACK: &str = "die";

/// Animation set ghosts wear while vulnerable.
pub const FRIGHTENED_SET: &str = "frightened";

#[derive(Debug, Clone, Component, Serialize, Deserialize)]
pub struct Animation {
    /// Animation set the track belongs to.
    pub set: String,
    /// Active track key within the set.
    pub key: String,
    /// Seconds since the track started.
    pub elapsed: f32,
    /// Total length in seconds for non-looping tracks. Ignored when looping.
    pub duration: f32,
    /// Looping tracks never complete; non-looping ones fire a completion
    /// event once.
    pub looping: bool,
    /// Set once a non-looping track has run past its duration.
    pub finished: bool,
}

impl Animation {
    /// Start a looping track in the given set.
    pub fn new(set: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            set: set.into(),
            key: key.into(),
            elapsed: 0.0,
            duration: 0.0,
            looping: true,
            finished: false,
        }
    }

    /// Switch to a looping track, restarting playback.
    pub fn start(&mut self, key: impl Into<String>) {
        self.key = key.into();
        self.elapsed = 0.0;
        self.duration = 0.0;
        self.looping = true;
        self.finished = false;
    }

    /// Switch to a non-looping track of the given length, restarting playback.
    pub fn start_once(&mut self, key: impl Into<String>, duration: f32) {
        self.key = key.into();
        self.elapsed = 0.0;
        self.duration = duration;
        self.looping = false;
        self.finished = false;
    }

    /// Restart the current track from the beginning, keeping its mode.
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
        self.finished = false;
    }

    /// Facing inferred from the active track key.
    ///
    /// `None` for non-directional tracks such as the death sequence.
    pub fn facing(&self) -> Option<Direction> {
        Direction::from_track(&self.key)
    }
}
