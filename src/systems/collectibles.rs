//! Collectible consumption and the power window.
//!
//! Regular food is consumed greedily: every overlapping piece on a tick is
//! removed and awarded. Power pellets are consumed at most one per tick;
//! the first overlap opens (or extends) the vulnerability window for all
//! live ghosts.
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::actors::{Food, Ghost, Player, PowerPellet};
use crate::components::animation::{Animation, FRIGHTENED_SET};
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::resources::gameconfig::GameConfig;
use crate::resources::powerwindow::PowerWindow;
use crate::resources::score::{FOOD_POINTS, Score};
use crate::resources::worldtime::WorldTime;

/// Consume every food the player overlaps this tick.
///
/// Removal goes through `Commands`, so the scan never mutates the
/// collection it walks; all pieces eaten on one tick are awarded in the
/// same tick, 100 points each, each instance at most once.
pub fn consume_food(
    mut commands: Commands,
    mut score: ResMut<Score>,
    player_q: Query<(&MapPosition, &BoxCollider), With<Player>>,
    foods: Query<(Entity, &MapPosition, &BoxCollider), With<Food>>,
) {
    let Ok((player_pos, player_col)) = player_q.single() else {
        return;
    };
    for (food, food_pos, food_col) in foods.iter() {
        if player_col.overlaps(*player_pos, food_col, *food_pos) {
            commands.entity(food).despawn();
            score.award(FOOD_POINTS);
            debug!("Food {:?} eaten, score is now {}", food, score.points());
        }
    }
}

/// Consume the first power pellet the player overlaps this tick.
///
/// Every live ghost immediately becomes vulnerable: its animation set is
/// snapshotted (only if this is the first pellet of the window, so an
/// overlapping window keeps the true original), swapped for the frightened
/// set, and its facing track restarted. The window closes after the
/// configured delay of simulated time.
pub fn consume_pellet(
    mut commands: Commands,
    player_q: Query<(&MapPosition, &BoxCollider), (With<Player>, Without<Ghost>)>,
    pellets: Query<(Entity, &MapPosition, &BoxCollider), With<PowerPellet>>,
    mut ghosts: Query<(&mut Ghost, &mut Animation)>,
    mut window: ResMut<PowerWindow>,
    time: Res<WorldTime>,
    config: Res<GameConfig>,
) {
    let Ok((player_pos, player_col)) = player_q.single() else {
        return;
    };
    for (pellet, pellet_pos, pellet_col) in pellets.iter() {
        if !player_col.overlaps(*player_pos, pellet_col, *pellet_pos) {
            continue;
        }
        commands.entity(pellet).despawn();
        for (mut ghost, mut anim) in ghosts.iter_mut() {
            if ghost.original_set.is_none() {
                ghost.original_set = Some(anim.set.clone());
            }
            anim.set = FRIGHTENED_SET.to_string();
            ghost.vulnerable = true;
            anim.restart();
        }
        window.open(time.elapsed, config.power_window_secs);
        info!(
            "Power pellet eaten, window open until t={:.2}s",
            time.elapsed + config.power_window_secs
        );
        // At most one pellet per tick.
        break;
    }
}

/// Close the power window once its expiry has passed.
///
/// Each surviving ghost gets its original animation set back, loses the
/// vulnerability flag, and restarts its facing track. Ghosts captured
/// during the window are already gone and need nothing.
pub fn revert_power_window(
    mut window: ResMut<PowerWindow>,
    time: Res<WorldTime>,
    mut ghosts: Query<(&mut Ghost, &mut Animation)>,
) {
    if !window.expired(time.elapsed) {
        return;
    }
    for (mut ghost, mut anim) in ghosts.iter_mut() {
        if let Some(set) = ghost.original_set.take() {
            anim.set = set;
        }
        ghost.vulnerable = false;
        anim.restart();
    }
    window.clear();
    info!("Power window closed at t={:.2}s", time.elapsed);
}
