//! Turn resolution — the movement resolver.
//!
//! An actor with a pending direction gets a speculative probe: its box is
//! displaced by a fixed offset in the candidate direction and tested
//! against every wall. A clear probe commits the turn (velocity, facing
//! track, cleared intent); a blocked probe changes nothing, so the intent
//! is retried on a later tick. This gives the "lazy turning" feel: a
//! queued turn is honored as soon as it becomes geometrically legal,
//! without requiring exact corridor alignment beyond the probe distance.
use bevy_ecs::prelude::*;

use crate::components::actors::{Ghost, Player, Wall};
use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::direction::PendingDirection;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;

/// Probe displacement in scaled units for speculative turns.
pub const TURN_PROBE: f32 = 10.0;

/// True when a box at `pos` intersects any wall.
///
/// An empty wall set never collides.
pub(crate) fn hits_wall(
    pos: MapPosition,
    collider: &BoxCollider,
    walls: &Query<(&MapPosition, &BoxCollider), With<Wall>>,
) -> bool {
    walls
        .iter()
        .any(|(wall_pos, wall_col)| collider.overlaps(pos, wall_col, *wall_pos))
}

/// Attempt to commit an actor's pending turn.
///
/// Returns true when the turn was accepted. No pending intent is a no-op.
fn try_turn(
    pos: MapPosition,
    collider: &BoxCollider,
    rb: &mut RigidBody,
    pending: &mut PendingDirection,
    anim: &mut Animation,
    walls: &Query<(&MapPosition, &BoxCollider), With<Wall>>,
) -> bool {
    let Some(dir) = pending.0 else {
        return false;
    };
    let probed = pos.displaced(dir, TURN_PROBE);
    if hits_wall(probed, collider, walls) {
        // Blocked: keep velocity, facing, and the intent for retry.
        return false;
    }
    pending.0 = None;
    rb.set_direction(dir);
    anim.start(dir.track());
    true
}

/// Resolve pending turns: the player first, then every ghost.
///
/// Each attempt is independent; an actor whose turn fails keeps its
/// previous velocity and facing.
pub fn resolve_turns(
    mut player_q: Query<
        (
            &MapPosition,
            &BoxCollider,
            &mut RigidBody,
            &mut PendingDirection,
            &mut Animation,
        ),
        (With<Player>, Without<Ghost>),
    >,
    mut ghost_q: Query<
        (
            &MapPosition,
            &BoxCollider,
            &mut RigidBody,
            &mut PendingDirection,
            &mut Animation,
        ),
        (With<Ghost>, Without<Player>),
    >,
    walls: Query<(&MapPosition, &BoxCollider), With<Wall>>,
) {
    if let Ok((pos, collider, mut rb, mut pending, mut anim)) = player_q.single_mut() {
        try_turn(*pos, collider, &mut rb, &mut pending, &mut anim, &walls);
    }
    for (pos, collider, mut rb, mut pending, mut anim) in ghost_q.iter_mut() {
        try_turn(*pos, collider, &mut rb, &mut pending, &mut anim, &walls);
    }
}
