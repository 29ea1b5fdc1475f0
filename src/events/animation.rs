//! Animation completion event and the player death observer.
//!
//! The animation system fires [`AnimationFinishedEvent`] exactly once when
//! a non-looping track runs past its duration. The observer in this module
//! implements the dying→dead terminal transition: a player whose death
//! track has completed is despawned and leaves the simulation for good.
//!
//! Representing the transition as an event instead of a completion callback
//! keeps it observable in isolation: tests can drive the clock and assert
//! the despawn.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::actors::{Dying, Player};
use crate::components::animation::DEATH_TRACK;

/// Event fired when a non-looping animation track completes.
#[derive(Event, Debug, Clone)]
pub struct AnimationFinishedEvent {
    pub entity: Entity,
    pub key: String,
}

/// Observer that finalizes the player death sequence.
///
/// Contract
/// - Only reacts to the death track finishing on a player that is dying.
/// - Despawns the player; the simulation keeps ticking without one, and
///   every player-dependent system degrades to a no-op.
pub fn observe_player_death(
    trigger: On<AnimationFinishedEvent>,
    mut commands: Commands,
    dying: Query<(), (With<Player>, With<Dying>)>,
) {
    let event = trigger.event();
    if event.key != DEATH_TRACK {
        return;
    }
    if dying.get(event.entity).is_err() {
        return;
    }
    info!("Player death sequence complete, removing from play");
    commands.entity(event.entity).despawn();
}
