//! Player wall blocking.
use bevy_ecs::prelude::*;

use crate::components::actors::{Dying, Player, Wall};
use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::gameconfig::GameConfig;
use crate::systems::steering::hits_wall;

/// Stop the player when its next-tick position would intersect a wall.
///
/// The animation switches to the directional waiting variant: facing is
/// kept, but the track signals "blocked". Velocity is zeroed so the
/// movement system leaves the player in place until a turn is accepted.
pub fn player_wall_block(
    mut player_q: Query<
        (&MapPosition, &BoxCollider, &mut RigidBody, &mut Animation),
        (With<Player>, Without<Dying>),
    >,
    walls: Query<(&MapPosition, &BoxCollider), With<Wall>>,
    config: Res<GameConfig>,
) {
    let Ok((pos, collider, mut rb, mut anim)) = player_q.single_mut() else {
        return;
    };
    if rb.is_stopped() {
        return;
    }
    let next = pos.advanced(rb.vx, rb.vy, config.actor_speed);
    if hits_wall(next, collider, &walls) {
        if let Some(facing) = anim.facing() {
            anim.start(facing.wait_track());
        }
        rb.stop();
    }
}
