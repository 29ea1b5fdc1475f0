//! Per-tick ghost passes: wall stop, randomized redirection, and player
//! contact resolution.
//!
//! The original arcade loop bailed out of the entire remaining update when
//! it met an inactive ghost mid-iteration. Captured ghosts here are
//! despawned outright, so each pass simply iterates the live set; the
//! bail-out quirk is deliberately not preserved (see DESIGN.md).
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::actors::{Dying, Ghost, Player, Wall};
use crate::components::animation::{Animation, DEATH_TRACK};
use crate::components::boxcollider::BoxCollider;
use crate::components::direction::PendingDirection;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::events::capture::GhostCapturedEvent;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamerng::GameRng;
use crate::systems::steering::hits_wall;

/// Stop any ghost whose next-tick position would intersect a wall.
///
/// The ghost keeps its facing; the redirection pass will hand it a new
/// intent next time it runs.
pub fn ghost_wall_stop(
    mut ghosts: Query<(&MapPosition, &BoxCollider, &mut RigidBody), With<Ghost>>,
    walls: Query<(&MapPosition, &BoxCollider), With<Wall>>,
    config: Res<GameConfig>,
) {
    for (pos, collider, mut rb) in ghosts.iter_mut() {
        let next = pos.advanced(rb.vx, rb.vy, config.actor_speed);
        if hits_wall(next, collider, &walls) {
            rb.stop();
        }
    }
}

/// Randomized ghost redirection — the whole of the enemy AI.
///
/// A stopped ghost always picks a new intent; a moving one re-rolls with
/// roughly 5% probability per tick. The new heading is drawn uniformly
/// from the two directions orthogonal to the current facing, so a ghost
/// never re-selects its current axis of motion.
pub fn ghost_redirect(
    mut ghosts: Query<(&RigidBody, &Animation, &mut PendingDirection), With<Ghost>>,
    mut rng: ResMut<GameRng>,
    config: Res<GameConfig>,
) {
    for (rb, anim, mut pending) in ghosts.iter_mut() {
        if !(rb.is_stopped() || rng.f32() > config.redirect_threshold) {
            continue;
        }
        let Some(facing) = anim.facing() else {
            continue;
        };
        pending.0 = Some(rng.pick(facing.orthogonal()));
    }
}

/// Resolve player/ghost overlaps.
///
/// A vulnerable ghost is captured: the capture observer awards the bonus
/// and despawns it permanently. A normal ghost is lethal: the player
/// stops, the death track starts, and the dying marker blocks input and
/// further contact until the completion event removes the player. The two
/// outcomes are mutually exclusive, gated solely by the vulnerability
/// flag.
pub fn ghost_contact(
    mut commands: Commands,
    mut player_q: Query<
        (
            Entity,
            &MapPosition,
            &BoxCollider,
            &mut RigidBody,
            &mut Animation,
        ),
        (With<Player>, Without<Dying>, Without<Ghost>),
    >,
    ghosts: Query<(Entity, &MapPosition, &BoxCollider, &Ghost), Without<Player>>,
    config: Res<GameConfig>,
) {
    let Ok((player, player_pos, player_col, mut rb, mut anim)) = player_q.single_mut() else {
        return;
    };
    for (ghost_entity, ghost_pos, ghost_col, ghost) in ghosts.iter() {
        if !player_col.overlaps(*player_pos, ghost_col, *ghost_pos) {
            continue;
        }
        if ghost.vulnerable {
            debug!("Player caught vulnerable ghost {:?}", ghost_entity);
            commands.trigger(GhostCapturedEvent {
                ghost: ghost_entity,
            });
        } else {
            info!("Player killed by ghost {:?}", ghost_entity);
            rb.stop();
            anim.start_once(DEATH_TRACK, config.death_track_secs);
            commands.entity(player).insert(Dying);
            break;
        }
    }
}
