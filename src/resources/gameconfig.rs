//! Simulation configuration resource.
//!
//! Tunables loaded from an INI file with safe defaults, so the simulation
//! starts even without a config file present.
//!
//! # Configuration File Format
//!
//! ```ini
//! [simulation]
//! scale = 3.0
//! actor_speed = 1.0
//! power_window_secs = 5.0
//! death_track_secs = 1.0
//!
//! [ai]
//! redirect_threshold = 0.95
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_SCALE: f32 = 3.0;
const DEFAULT_ACTOR_SPEED: f32 = 1.0;
const DEFAULT_POWER_WINDOW_SECS: f32 = 5.0;
const DEFAULT_DEATH_TRACK_SECS: f32 = 1.0;
const DEFAULT_REDIRECT_THRESHOLD: f32 = 0.95;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Simulation configuration resource.
///
/// Stores the coordinate scale, per-tick speed unit, timing windows, and
/// the ghost redirection threshold.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Multiplier applied to all unscaled layout coordinates at spawn.
    pub scale: f32,
    /// Pixels per tick covered by a unit velocity component.
    pub actor_speed: f32,
    /// Seconds of simulated time a power window stays open.
    pub power_window_secs: f32,
    /// Length of the player death track in seconds.
    pub death_track_secs: f32,
    /// A ghost re-rolls its heading when a uniform draw exceeds this value
    /// (0.95 gives roughly a 5% chance per tick) or when it is stopped.
    pub redirect_threshold: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            actor_speed: DEFAULT_ACTOR_SPEED,
            power_window_secs: DEFAULT_POWER_WINDOW_SECS,
            death_track_secs: DEFAULT_DEATH_TRACK_SECS,
            redirect_threshold: DEFAULT_REDIRECT_THRESHOLD,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [simulation] section
        if let Some(scale) = config.getfloat("simulation", "scale").ok().flatten() {
            self.scale = scale as f32;
        }
        if let Some(speed) = config.getfloat("simulation", "actor_speed").ok().flatten() {
            self.actor_speed = speed as f32;
        }
        if let Some(secs) = config
            .getfloat("simulation", "power_window_secs")
            .ok()
            .flatten()
        {
            self.power_window_secs = secs as f32;
        }
        if let Some(secs) = config
            .getfloat("simulation", "death_track_secs")
            .ok()
            .flatten()
        {
            self.death_track_secs = secs as f32;
        }

        // [ai] section
        if let Some(threshold) = config.getfloat("ai", "redirect_threshold").ok().flatten() {
            self.redirect_threshold = threshold as f32;
        }

        info!(
            "Loaded config: scale={}, speed={}, power_window={}s, death_track={}s, redirect_threshold={}",
            self.scale,
            self.actor_speed,
            self.power_window_secs,
            self.death_track_secs,
            self.redirect_threshold
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_safe() {
        let config = GameConfig::new();
        assert_eq!(config.scale, 3.0);
        assert_eq!(config.actor_speed, 1.0);
        assert_eq!(config.power_window_secs, 5.0);
        assert_eq!(config.redirect_threshold, 0.95);
    }

    #[test]
    fn missing_file_is_an_error_and_leaves_defaults() {
        let mut config = GameConfig::with_path("/nonexistent/config.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.scale, 3.0);
    }
}
