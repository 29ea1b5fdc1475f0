//! Buffered input application.
//!
//! Copies the latest direction press from the
//! [`InputState`](crate::resources::input::InputState) resource into the
//! player's pending direction. Presses are dropped entirely while the
//! player is dying or removed from play.
use bevy_ecs::prelude::*;

use crate::components::actors::{Dying, Player};
use crate::components::direction::PendingDirection;
use crate::resources::input::InputState;

/// Forward the buffered press to the player's pending direction.
///
/// The press is consumed either way; an uncontrollable player does not
/// accumulate stale intents.
pub fn apply_buffered_input(
    mut input: ResMut<InputState>,
    mut player_q: Query<&mut PendingDirection, (With<Player>, Without<Dying>)>,
) {
    let Ok(mut pending) = player_q.single_mut() else {
        input.take();
        return;
    };
    if let Some(dir) = input.take() {
        pending.0 = Some(dir);
    }
}
