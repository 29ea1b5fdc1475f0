//! Injectable random number source.
//!
//! The ghost redirection AI is the only consumer of randomness. Wrapping
//! `fastrand::Rng` in a resource lets tests seed it and make redirection
//! decisions deterministic.
use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug)]
pub struct GameRng {
    rng: fastrand::Rng,
}

impl Default for GameRng {
    fn default() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }
}

impl GameRng {
    /// Seeded source for deterministic runs and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Uniform draw in [0, 1).
    pub fn f32(&mut self) -> f32 {
        self.rng.f32()
    }

    /// Pick one of two values with equal probability.
    pub fn pick<T: Copy>(&mut self, pair: [T; 2]) -> T {
        pair[self.rng.usize(0..2)]
    }
}
