//! Mazechase headless runner.
//!
//! Loads a maze layout, builds the simulation world, and runs the tick
//! loop for a fixed number of ticks (or until the player is removed from
//! play), then prints the final score. This binary stands in for the
//! rendering/input host: it drives the same schedule a real front end
//! would.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --layout assets/maze.json --ticks 3600 --seed 7
//! ```

use clap::Parser;
use std::path::PathBuf;

use mazechase::game;
use mazechase::resources::gameconfig::GameConfig;
use mazechase::resources::gamerng::GameRng;
use mazechase::resources::layout::MazeLayout;
use mazechase::resources::score::Score;

/// Headless maze-chase simulation
#[derive(Parser)]
#[command(version, about = "Runs the mazechase simulation core without a renderer")]
struct Cli {
    /// Maze layout JSON file.
    #[arg(long, default_value = "assets/maze.json")]
    layout: PathBuf,

    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    /// Ticks per second of simulated time.
    #[arg(long, default_value_t = 60.0)]
    tick_rate: f32,

    /// RNG seed for deterministic ghost behavior (random when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Configuration file path (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::with_path(path.clone()),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::debug!("Config file not loaded, using defaults: {}", e);
    }

    let layout = match MazeLayout::load_from_file(&cli.layout) {
        Ok(layout) => layout,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let rng = match cli.seed {
        Some(seed) => GameRng::seeded(seed),
        None => GameRng::default(),
    };

    let mut world = match game::build_world(&layout, config, rng) {
        Ok(world) => world,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let mut schedule = game::tick_schedule();

    let dt = 1.0 / cli.tick_rate;
    log::info!(
        "Starting simulation: {} ticks at {} ticks/s",
        cli.ticks,
        cli.tick_rate
    );
    for t in 0..cli.ticks {
        game::tick(&mut world, &mut schedule, dt);
        if !game::player_in_play(&mut world) {
            log::info!("Player removed from play after {} ticks", t + 1);
            break;
        }
    }

    let score = world.resource::<Score>();
    log::info!("Simulation finished: {}", score.display());
    println!("{}", score.display());
}
