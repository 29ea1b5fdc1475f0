//! World construction and the tick schedule.
//!
//! [`build_world`] turns a validated [`MazeLayout`] into a populated ECS
//! world: scaled wall/food/pellet entities, the player, the ghosts, and
//! every resource the systems need. [`tick_schedule`] assembles the
//! per-tick system chain; its order is load-bearing, since later passes
//! depend on state changes made by earlier ones within the same tick.
//! [`tick`] advances the clock and runs the schedule once.
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::actors::{Food, Ghost, Player, PowerPellet, Wall};
use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::direction::PendingDirection;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::events::animation::observe_player_death;
use crate::events::capture::observe_ghost_captured;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamerng::GameRng;
use crate::resources::input::InputState;
use crate::resources::layout::{MazeLayout, RectDef};
use crate::resources::portals::{PortalZone, Portals};
use crate::resources::powerwindow::PowerWindow;
use crate::resources::score::Score;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation;
use crate::systems::collectibles::{consume_food, consume_pellet, revert_power_window};
use crate::systems::ghosts::{ghost_contact, ghost_redirect, ghost_wall_stop};
use crate::systems::input::apply_buffered_input;
use crate::systems::movement::movement;
use crate::systems::player::player_wall_block;
use crate::systems::steering::resolve_turns;
use crate::systems::teleport::{teleport_ghosts, teleport_player};
use crate::systems::time::update_world_time;

/// Animation set used by the player actor.
pub const PLAYER_SET: &str = "pacman";

fn zone(rect: RectDef) -> PortalZone {
    PortalZone::new(rect.x, rect.y, rect.width, rect.height)
}

fn spawn_rects(world: &mut World, rects: &[RectDef], scale: f32, marker: impl Component + Copy) {
    for rect in rects {
        let rect = rect.scaled(scale);
        world.spawn((
            marker,
            MapPosition::new(rect.x, rect.y),
            BoxCollider::new(rect.width, rect.height),
        ));
    }
}

/// Build a simulation world from a validated layout.
///
/// All layout coordinates are multiplied by the configured scale factor.
/// The player spawns already moving in its spawn direction; ghosts spawn
/// stopped with their spawn direction buffered as intent, exactly as a
/// level starts in the original game. Fails on an invalid layout; the tick
/// loop never re-validates.
pub fn build_world(layout: &MazeLayout, config: GameConfig, rng: GameRng) -> Result<World, String> {
    layout.validate()?;
    let scale = config.scale;

    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(Score::new());
    world.insert_resource(InputState::default());
    world.insert_resource(PowerWindow::default());
    world.insert_resource(rng);
    world.insert_resource(Portals {
        left: zone(layout.portals.left.scaled(scale)),
        right: zone(layout.portals.right.scaled(scale)),
    });

    spawn_rects(&mut world, &layout.walls, scale, Wall);
    spawn_rects(&mut world, &layout.foods, scale, Food);
    spawn_rects(&mut world, &layout.pellets, scale, PowerPellet);

    let player = layout.player;
    let player_rect = player.rect().scaled(scale);
    world.spawn((
        Player,
        MapPosition::new(player_rect.x, player_rect.y),
        BoxCollider::new(player_rect.width, player_rect.height),
        RigidBody::heading(player.direction),
        PendingDirection::default(),
        Animation::new(PLAYER_SET, player.direction.track()),
    ));

    for ghost in &layout.ghosts {
        let rect = ghost.rect().scaled(scale);
        world.spawn((
            Ghost::default(),
            MapPosition::new(rect.x, rect.y),
            BoxCollider::new(rect.width, rect.height),
            RigidBody::new(),
            PendingDirection(Some(ghost.direction)),
            Animation::new(ghost.name.clone(), ghost.direction.track()),
        ));
    }

    world.spawn(Observer::new(observe_ghost_captured));
    world.spawn(Observer::new(observe_player_death));
    // Observers must be registered before any system can trigger events.
    world.flush();

    world.insert_resource(config);

    info!(
        "World built: {} walls, {} foods, {} pellets, {} ghosts",
        layout.walls.len(),
        layout.foods.len(),
        layout.pellets.len(),
        layout.ghosts.len()
    );
    Ok(world)
}

/// Assemble the per-tick schedule.
///
/// Fixed order: input, food consumption, turn resolution (player first,
/// then ghosts), ghost wall stop, ghost redirection, ghost contact, ghost
/// portals, player wall block, player portal, pellet consumption, power
/// window reversion, animation advance, position integration.
pub fn tick_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            apply_buffered_input,
            consume_food,
            resolve_turns,
            ghost_wall_stop,
            ghost_redirect,
            ghost_contact,
            teleport_ghosts,
            player_wall_block,
            teleport_player,
            consume_pellet,
            revert_power_window,
            animation,
            movement,
        )
            .chain(),
    );
    schedule
}

/// Advance the simulation by one tick of `dt` seconds.
pub fn tick(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
    world.clear_trackers();
}

/// True while the player actor is still in the world.
pub fn player_in_play(world: &mut World) -> bool {
    world
        .query_filtered::<(), With<Player>>()
        .iter(world)
        .next()
        .is_some()
}
