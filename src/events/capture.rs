//! Ghost capture event and observer.
//!
//! The contact system fires [`GhostCapturedEvent`] when the player touches
//! a vulnerable ghost. The observer awards the capture bonus and despawns
//! the ghost permanently; no further collision is evaluated against it.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::score::{CAPTURE_POINTS, Score};

/// Event fired when the player captures a vulnerable ghost.
#[derive(Event, Debug, Clone, Copy)]
pub struct GhostCapturedEvent {
    pub ghost: Entity,
}

/// Observer that removes a captured ghost and awards its bonus.
///
/// Contract
/// - Awards [`CAPTURE_POINTS`] to the [`Score`] sink.
/// - Despawns the ghost entity; the ghost set only ever shrinks.
pub fn observe_ghost_captured(
    trigger: On<GhostCapturedEvent>,
    mut commands: Commands,
    mut score: ResMut<Score>,
) {
    let ghost = trigger.event().ghost;
    score.award(CAPTURE_POINTS);
    info!("Ghost {:?} captured, score is now {}", ghost, score.points());
    commands.entity(ghost).despawn();
}
