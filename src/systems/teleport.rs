//! Portal teleportation.
//!
//! An actor overlapping one portal zone is relocated to just inside the
//! opposite zone's boundary, one unit clear of it. Only x changes; y is
//! untouched.
use bevy_ecs::prelude::*;

use crate::components::actors::{Ghost, Player};
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::resources::portals::Portals;

fn wrap_through_portals(pos: &mut MapPosition, collider: &BoxCollider, portals: &Portals) {
    if portals.left.contains(*pos, collider) {
        pos.x = portals.right_entry_x(collider.width);
    }
    if portals.right.contains(*pos, collider) {
        pos.x = portals.left_entry_x(collider.width);
    }
}

/// Teleport ghosts between the screen edges.
pub fn teleport_ghosts(
    mut ghosts: Query<(&mut MapPosition, &BoxCollider), With<Ghost>>,
    portals: Res<Portals>,
) {
    for (mut pos, collider) in ghosts.iter_mut() {
        wrap_through_portals(&mut pos, collider, &portals);
    }
}

/// Teleport the player between the screen edges.
pub fn teleport_player(
    mut player_q: Query<(&mut MapPosition, &BoxCollider), With<Player>>,
    portals: Res<Portals>,
) {
    if let Ok((mut pos, collider)) = player_q.single_mut() {
        wrap_through_portals(&mut pos, collider, &portals);
    }
}
