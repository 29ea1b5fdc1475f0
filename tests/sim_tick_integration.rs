//! Tick integration tests for turn resolution, collectibles, ghost
//! contact, portals, and the power window.

use bevy_ecs::prelude::*;

use mazechase::components::actors::{Dying, Food, Ghost, Player, PowerPellet, Wall};
use mazechase::components::animation::{Animation, FRIGHTENED_SET};
use mazechase::components::direction::{Direction, PendingDirection};
use mazechase::components::mapposition::MapPosition;
use mazechase::components::rigidbody::RigidBody;
use mazechase::game;
use mazechase::resources::gameconfig::GameConfig;
use mazechase::resources::gamerng::GameRng;
use mazechase::resources::input::InputState;
use mazechase::resources::layout::{GhostDef, MazeLayout, PortalsDef, RectDef, SpawnDef};
use mazechase::resources::score::Score;

const DT: f32 = 1.0 / 60.0;

fn rect(x: f32, y: f32, width: f32, height: f32) -> RectDef {
    RectDef {
        x,
        y,
        width,
        height,
    }
}

fn ghost_def(name: &str, x: f32, y: f32, direction: Direction) -> GhostDef {
    GhostDef {
        name: name.to_string(),
        x,
        y,
        width: 13.0,
        height: 13.0,
        direction,
    }
}

/// Open plain: no walls or collectibles, portals far out of reach,
/// player at (100, 100) heading right.
fn base_layout() -> MazeLayout {
    MazeLayout {
        walls: vec![],
        foods: vec![],
        pellets: vec![],
        portals: PortalsDef {
            left: rect(-1000.0, 0.0, 2.0, 13.0),
            right: rect(1000.0, 0.0, 2.0, 13.0),
        },
        player: SpawnDef {
            x: 100.0,
            y: 100.0,
            width: 13.0,
            height: 13.0,
            direction: Direction::Right,
        },
        ghosts: vec![],
    }
}

/// Scale 1.0 so layout coordinates are world coordinates verbatim.
fn test_config() -> GameConfig {
    GameConfig {
        scale: 1.0,
        ..GameConfig::new()
    }
}

fn build(layout: &MazeLayout) -> (World, Schedule) {
    let world = game::build_world(layout, test_config(), GameRng::seeded(7))
        .expect("layout should be valid");
    (world, game::tick_schedule())
}

fn tick(world: &mut World, schedule: &mut Schedule) {
    game::tick(world, schedule, DT);
}

fn player_entity(world: &mut World) -> Entity {
    world
        .query_filtered::<Entity, With<Player>>()
        .iter(world)
        .next()
        .expect("player should be in play")
}

fn ghost_entities(world: &mut World) -> Vec<Entity> {
    world
        .query_filtered::<Entity, With<Ghost>>()
        .iter(world)
        .collect()
}

fn count<C: Component>(world: &mut World) -> usize {
    world.query_filtered::<(), With<C>>().iter(world).count()
}

fn points(world: &World) -> u32 {
    world.resource::<Score>().points()
}

// ==================== TURN RESOLUTION ====================

#[test]
fn accepted_turn_clears_pending_and_sets_unit_velocity() {
    let (mut world, mut schedule) = build(&base_layout());
    let player = player_entity(&mut world);

    world.resource_mut::<InputState>().press(Direction::Up);
    tick(&mut world, &mut schedule);

    let pending = world.get::<PendingDirection>(player).unwrap();
    assert!(pending.0.is_none(), "accepted turn must clear the intent");
    let rb = world.get::<RigidBody>(player).unwrap();
    assert_eq!((rb.vx, rb.vy), (0.0, -1.0));
    let anim = world.get::<Animation>(player).unwrap();
    assert_eq!(anim.key, "up");
}

#[test]
fn blocked_turn_keeps_velocity_and_pending_then_succeeds_later() {
    let mut layout = base_layout();
    // A wall 10 units above the player blocks the upward probe.
    layout.walls.push(rect(100.0, 85.0, 13.0, 10.0));
    let (mut world, mut schedule) = build(&layout);
    let player = player_entity(&mut world);

    world.resource_mut::<InputState>().press(Direction::Up);
    tick(&mut world, &mut schedule);

    let pending = world.get::<PendingDirection>(player).unwrap();
    assert_eq!(pending.0, Some(Direction::Up), "blocked intent is retained");
    let rb = world.get::<RigidBody>(player).unwrap();
    assert_eq!((rb.vx, rb.vy), (1.0, 0.0), "velocity unchanged");
    assert_eq!(world.get::<Animation>(player).unwrap().key, "right");

    // Lazy turning: once the wall is gone, the buffered intent is honored
    // with no new input.
    let wall = world
        .query_filtered::<Entity, With<Wall>>()
        .iter(&world)
        .next()
        .unwrap();
    world.despawn(wall);
    tick(&mut world, &mut schedule);

    let pending = world.get::<PendingDirection>(player).unwrap();
    assert!(pending.0.is_none());
    let rb = world.get::<RigidBody>(player).unwrap();
    assert_eq!((rb.vx, rb.vy), (0.0, -1.0));
}

// ==================== COLLECTIBLES ====================

#[test]
fn foods_award_100_each_and_are_removed_once() {
    let mut layout = base_layout();
    // Two foods under the player, one far away.
    layout.foods.push(rect(102.0, 102.0, 4.0, 4.0));
    layout.foods.push(rect(108.0, 102.0, 4.0, 4.0));
    layout.foods.push(rect(500.0, 500.0, 4.0, 4.0));
    let (mut world, mut schedule) = build(&layout);

    tick(&mut world, &mut schedule);

    assert_eq!(points(&world), 200, "both overlapping foods awarded atomically");
    assert_eq!(count::<Food>(&mut world), 1, "only the distant food remains");

    // No double award on the next tick.
    tick(&mut world, &mut schedule);
    assert_eq!(points(&world), 200);
}

#[test]
fn at_most_one_pellet_is_consumed_per_tick() {
    let mut layout = base_layout();
    layout.pellets.push(rect(100.0, 100.0, 8.0, 8.0));
    layout.pellets.push(rect(104.0, 100.0, 8.0, 8.0));
    let (mut world, mut schedule) = build(&layout);
    // Hold the player in place so both pellets stay overlapped.
    let player = player_entity(&mut world);
    world.get_mut::<RigidBody>(player).unwrap().stop();

    tick(&mut world, &mut schedule);
    assert_eq!(count::<PowerPellet>(&mut world), 1);
    tick(&mut world, &mut schedule);
    assert_eq!(count::<PowerPellet>(&mut world), 0);
}

// ==================== GHOST CONTACT ====================

#[test]
fn normal_ghost_contact_is_lethal_and_awards_nothing() {
    let mut layout = base_layout();
    layout.ghosts.push(ghost_def("redGhost", 100.0, 100.0, Direction::Up));
    let (mut world, mut schedule) = build(&layout);
    let player = player_entity(&mut world);

    tick(&mut world, &mut schedule);

    assert_eq!(points(&world), 0, "lethal contact never scores");
    assert_eq!(count::<Ghost>(&mut world), 1, "the ghost is not removed");
    assert!(world.get::<Dying>(player).is_some());
    let rb = world.get::<RigidBody>(player).unwrap();
    assert!(rb.is_stopped());
    assert_eq!(world.get::<Animation>(player).unwrap().key, "die");

    // The death track (1s by default) completes and removes the player.
    for _ in 0..70 {
        tick(&mut world, &mut schedule);
    }
    assert_eq!(count::<Player>(&mut world), 0);
    assert_eq!(points(&world), 0);
}

#[test]
fn vulnerable_ghost_contact_captures_and_awards_5000() {
    let mut layout = base_layout();
    layout.pellets.push(rect(100.0, 100.0, 8.0, 8.0));
    layout.ghosts.push(ghost_def("redGhost", 300.0, 300.0, Direction::Up));
    let (mut world, mut schedule) = build(&layout);
    let player = player_entity(&mut world);

    // Tick 1: pellet eaten, ghost becomes vulnerable at a distance.
    tick(&mut world, &mut schedule);
    let ghost = ghost_entities(&mut world)[0];
    assert!(world.get::<Ghost>(ghost).unwrap().vulnerable);
    assert_eq!(count::<PowerPellet>(&mut world), 0);

    // Move the ghost onto the player and collide.
    let player_pos = *world.get::<MapPosition>(player).unwrap();
    *world.get_mut::<MapPosition>(ghost).unwrap() = player_pos;
    tick(&mut world, &mut schedule);

    assert_eq!(points(&world), 5000);
    assert_eq!(count::<Ghost>(&mut world), 0, "captured ghost is gone for good");
    assert!(world.get::<Dying>(player).is_none(), "capture never harms the player");
}

// ==================== POWER WINDOW ====================

#[test]
fn power_window_swaps_sets_and_reverts_after_five_seconds() {
    let mut layout = base_layout();
    layout.pellets.push(rect(100.0, 100.0, 8.0, 8.0));
    layout.ghosts.push(ghost_def("redGhost", 300.0, 300.0, Direction::Up));
    layout.ghosts.push(ghost_def("pinkGhost", 400.0, 300.0, Direction::Left));
    let (mut world, mut schedule) = build(&layout);

    tick(&mut world, &mut schedule);
    for ghost in ghost_entities(&mut world) {
        let anim = world.get::<Animation>(ghost).unwrap();
        assert_eq!(anim.set, FRIGHTENED_SET);
        assert!(world.get::<Ghost>(ghost).unwrap().vulnerable);
    }

    // Drive the clock past the 5s expiry in one large step.
    game::tick(&mut world, &mut schedule, 6.0);

    let ghosts = ghost_entities(&mut world);
    let sets: Vec<String> = ghosts
        .iter()
        .map(|&g| world.get::<Animation>(g).unwrap().set.clone())
        .collect();
    assert!(sets.contains(&"redGhost".to_string()));
    assert!(sets.contains(&"pinkGhost".to_string()));
    for ghost in ghosts {
        assert!(!world.get::<Ghost>(ghost).unwrap().vulnerable);
    }
}

#[test]
fn reversion_is_a_safe_noop_for_captured_ghosts() {
    let mut layout = base_layout();
    layout.pellets.push(rect(100.0, 100.0, 8.0, 8.0));
    layout.ghosts.push(ghost_def("redGhost", 300.0, 300.0, Direction::Up));
    layout.ghosts.push(ghost_def("pinkGhost", 400.0, 300.0, Direction::Left));
    let (mut world, mut schedule) = build(&layout);
    let player = player_entity(&mut world);

    tick(&mut world, &mut schedule);
    // Capture the red ghost specifically; query order is unspecified.
    let red = ghost_entities(&mut world)
        .into_iter()
        .find(|&g| {
            world.get::<Ghost>(g).unwrap().original_set.as_deref() == Some("redGhost")
        })
        .unwrap();
    let player_pos = *world.get::<MapPosition>(player).unwrap();
    *world.get_mut::<MapPosition>(red).unwrap() = player_pos;
    tick(&mut world, &mut schedule);
    assert_eq!(count::<Ghost>(&mut world), 1);

    // Expiry fires with one ghost already removed: the survivor reverts,
    // nothing faults.
    game::tick(&mut world, &mut schedule, 6.0);
    let survivor = ghost_entities(&mut world)[0];
    assert!(!world.get::<Ghost>(survivor).unwrap().vulnerable);
    assert_eq!(world.get::<Animation>(survivor).unwrap().set, "pinkGhost");
}

// ==================== PORTALS ====================

#[test]
fn right_portal_relocates_to_just_inside_the_left_edge() {
    let mut layout = base_layout();
    layout.portals = PortalsDef {
        left: rect(0.0, 100.0, 2.0, 13.0),
        right: rect(222.0, 100.0, 2.0, 13.0),
    };
    // Ghost one unit past the right portal's x, overlapping its zone.
    layout.ghosts.push(ghost_def("redGhost", 223.0, 100.0, Direction::Up));
    // Keep the player well away from both zones.
    layout.player.x = 100.0;
    let (mut world, mut schedule) = build(&layout);

    // Clear the spawn intent so the ghost stays stopped this tick and the
    // teleport is the only thing that moves it.
    let ghost = ghost_entities(&mut world)[0];
    world.get_mut::<PendingDirection>(ghost).unwrap().0 = None;

    tick(&mut world, &mut schedule);

    let pos = world.get::<MapPosition>(ghost).unwrap();
    assert_eq!(pos.x, 0.0 + 13.0 + 1.0);
    assert_eq!(pos.y, 100.0, "only x is adjusted");
}

#[test]
fn left_portal_relocates_to_just_inside_the_right_edge() {
    let mut layout = base_layout();
    layout.portals = PortalsDef {
        left: rect(0.0, 100.0, 2.0, 13.0),
        right: rect(222.0, 100.0, 2.0, 13.0),
    };
    layout.player = SpawnDef {
        x: 1.0,
        y: 100.0,
        width: 13.0,
        height: 13.0,
        direction: Direction::Left,
    };
    let (mut world, mut schedule) = build(&layout);
    let player = player_entity(&mut world);
    world.get_mut::<RigidBody>(player).unwrap().stop();

    tick(&mut world, &mut schedule);

    let pos = world.get::<MapPosition>(player).unwrap();
    assert_eq!(pos.x, 222.0 - 13.0 - 1.0);
    assert_eq!(pos.y, 100.0);
}

// ==================== WALL BLOCKING ====================

#[test]
fn player_blocked_by_wall_waits_and_stops() {
    let mut layout = base_layout();
    // Wall flush against the player's right edge: touching now, overlapping
    // on the next tick's position.
    layout.walls.push(rect(113.0, 100.0, 10.0, 13.0));
    let (mut world, mut schedule) = build(&layout);
    let player = player_entity(&mut world);

    tick(&mut world, &mut schedule);

    let rb = world.get::<RigidBody>(player).unwrap();
    assert!(rb.is_stopped());
    assert_eq!(world.get::<Animation>(player).unwrap().key, "waitright");
    let pos = world.get::<MapPosition>(player).unwrap();
    assert_eq!((pos.x, pos.y), (100.0, 100.0), "blocked player does not advance");
}

// ==================== GHOST AI ====================

#[test]
fn redirection_only_draws_orthogonal_directions() {
    let mut layout = base_layout();
    layout.ghosts.push(ghost_def("redGhost", 300.0, 300.0, Direction::Up));
    let (mut world, mut schedule) = build(&layout);
    let ghost = ghost_entities(&mut world)[0];

    for _ in 0..50 {
        // Reset to "stopped, facing up, no intent" so every tick forces a
        // fresh redirection draw.
        world.get_mut::<RigidBody>(ghost).unwrap().stop();
        world.get_mut::<PendingDirection>(ghost).unwrap().0 = None;
        world.get_mut::<Animation>(ghost).unwrap().start("up");

        tick(&mut world, &mut schedule);

        let pending = world.get::<PendingDirection>(ghost).unwrap().0;
        assert!(
            matches!(pending, Some(Direction::Left) | Some(Direction::Right)),
            "facing up must redirect horizontally, got {:?}",
            pending
        );
    }
}

#[test]
fn redirection_from_horizontal_facing_draws_vertical() {
    let mut layout = base_layout();
    layout.ghosts.push(ghost_def("redGhost", 300.0, 300.0, Direction::Left));
    let (mut world, mut schedule) = build(&layout);
    let ghost = ghost_entities(&mut world)[0];

    for _ in 0..50 {
        world.get_mut::<RigidBody>(ghost).unwrap().stop();
        world.get_mut::<PendingDirection>(ghost).unwrap().0 = None;
        world.get_mut::<Animation>(ghost).unwrap().start("left");

        tick(&mut world, &mut schedule);

        let pending = world.get::<PendingDirection>(ghost).unwrap().0;
        assert!(matches!(
            pending,
            Some(Direction::Up) | Some(Direction::Down)
        ));
    }
}

// ==================== QUIESCENT TICK ====================

#[test]
fn tick_with_no_overlaps_and_no_intents_changes_nothing() {
    let mut layout = base_layout();
    layout.ghosts.push(ghost_def("redGhost", 300.0, 300.0, Direction::Up));
    layout.foods.push(rect(500.0, 500.0, 4.0, 4.0));
    let (mut world, mut schedule) = build(&layout);
    let player = player_entity(&mut world);
    let ghost = ghost_entities(&mut world)[0];

    // Quiesce: everyone stopped, no pending intents anywhere.
    world.get_mut::<RigidBody>(player).unwrap().stop();
    world.get_mut::<PendingDirection>(ghost).unwrap().0 = None;

    let before_player = *world.get::<MapPosition>(player).unwrap();
    let before_ghost = *world.get::<MapPosition>(ghost).unwrap();
    let before_points = points(&world);

    tick(&mut world, &mut schedule);

    assert_eq!(*world.get::<MapPosition>(player).unwrap(), before_player);
    assert_eq!(*world.get::<MapPosition>(ghost).unwrap(), before_ghost);
    assert!(world.get::<RigidBody>(player).unwrap().is_stopped());
    assert!(world.get::<RigidBody>(ghost).unwrap().is_stopped());
    assert_eq!(points(&world), before_points);
}

// ==================== INPUT GATING ====================

#[test]
fn input_is_ignored_while_the_player_is_dying() {
    let mut layout = base_layout();
    layout.ghosts.push(ghost_def("redGhost", 100.0, 100.0, Direction::Up));
    let (mut world, mut schedule) = build(&layout);
    let player = player_entity(&mut world);

    tick(&mut world, &mut schedule);
    assert!(world.get::<Dying>(player).is_some());

    world.resource_mut::<InputState>().press(Direction::Left);
    tick(&mut world, &mut schedule);

    let pending = world.get::<PendingDirection>(player).unwrap();
    assert!(pending.0.is_none(), "presses are dropped while dying");
    assert!(world.resource::<InputState>().peek().is_none());
}
