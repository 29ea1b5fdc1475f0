//! Simulation clock resource.
//!
//! Tracks elapsed virtual time and the last tick's delta. The power-window
//! expiry check compares against `elapsed`, so tests can drive the clock
//! with arbitrary deltas instead of waiting on wall-clock timers.
use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    /// Seconds of simulated time since the world was built.
    pub elapsed: f32,
    /// Seconds covered by the current tick.
    pub delta: f32,
    /// Multiplier applied to incoming deltas.
    pub time_scale: f32,
    /// Ticks run so far.
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
