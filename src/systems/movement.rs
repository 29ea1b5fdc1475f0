//! Position integration.
//!
//! Runs last in the tick: every earlier pass has already stopped actors
//! whose next position would be illegal, so integration is unconditional.
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::gameconfig::GameConfig;

/// Advance each body's position by one tick of its unit velocity.
pub fn movement(mut query: Query<(&mut MapPosition, &RigidBody)>, config: Res<GameConfig>) {
    for (mut position, rigidbody) in query.iter_mut() {
        position.x += rigidbody.vx * config.actor_speed;
        position.y += rigidbody.vy * config.actor_speed;
    }
}
