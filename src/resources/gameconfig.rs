//! Game configuration resource.
//!
//! Manages simulation tunables loaded from an INI configuration file.
//! Provides defaults for safe startup; missing keys keep their defaults.
//! The core never mutates configuration after the loop starts.
//!
//! # Configuration File Format
//!
//! ```ini
//! [playfield]
//! width = 1280
//! height = 720
//!
//! [timing]
//! update_rate = 60
//! max_steps = 5
//!
//! [player]
//! speed = 300
//! fire_rate = 10
//! health = 3
//!
//! [enemy]
//! health = 2
//! size = 48
//!
//! [bullet]
//! speed = 600
//! size = 8
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_PLAYFIELD_WIDTH: f32 = 1280.0;
const DEFAULT_PLAYFIELD_HEIGHT: f32 = 720.0;
const DEFAULT_UPDATE_RATE: u32 = 60;
const DEFAULT_MAX_STEPS: u32 = 5;
const DEFAULT_PLAYER_SPEED: f32 = 300.0;
const DEFAULT_PLAYER_FIRE_RATE: f32 = 10.0;
const DEFAULT_PLAYER_HEALTH: u32 = 3;
const DEFAULT_PLAYER_SIZE: f32 = 32.0;
const DEFAULT_ENEMY_HEALTH: u32 = 2;
const DEFAULT_ENEMY_SIZE: f32 = 48.0;
const DEFAULT_BULLET_SPEED: f32 = 600.0;
const DEFAULT_BULLET_SIZE: f32 = 8.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores playfield dimensions, fixed-step timing, and per-kind tunables.
/// Loaded once at startup; the simulation reads it, never writes it.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Playfield width in world units.
    pub playfield_width: f32,
    /// Playfield height in world units.
    pub playfield_height: f32,
    /// Simulation update rate in Hz; fixed_dt is its reciprocal.
    pub update_rate: u32,
    /// Maximum catch-up steps per frame.
    pub max_steps: u32,
    /// Player movement speed in world units per second.
    pub player_speed: f32,
    /// Player shots per second.
    pub player_fire_rate: f32,
    /// Player starting hit points.
    pub player_health: u32,
    /// Player hull collider side length.
    pub player_size: f32,
    /// Enemy starting hit points.
    pub enemy_health: u32,
    /// Enemy collider side length.
    pub enemy_size: f32,
    /// Bullet speed in world units per second.
    pub bullet_speed: f32,
    /// Bullet collider side length.
    pub bullet_size: f32,
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
            playfield_width: DEFAULT_PLAYFIELD_WIDTH,
            playfield_height: DEFAULT_PLAYFIELD_HEIGHT,
            update_rate: DEFAULT_UPDATE_RATE,
            max_steps: DEFAULT_MAX_STEPS,
            player_speed: DEFAULT_PLAYER_SPEED,
            player_fire_rate: DEFAULT_PLAYER_FIRE_RATE,
            player_health: DEFAULT_PLAYER_HEALTH,
            player_size: DEFAULT_PLAYER_SIZE,
            enemy_health: DEFAULT_ENEMY_HEALTH,
            enemy_size: DEFAULT_ENEMY_SIZE,
            bullet_speed: DEFAULT_BULLET_SPEED,
            bullet_size: DEFAULT_BULLET_SIZE,
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

    /// Duration of one fixed simulation step in seconds.
    pub fn fixed_dt(&self) -> f32 {
        1.0 / self.update_rate.max(1) as f32
    }

    /// Seconds between player shots.
    pub fn fire_cooldown(&self) -> f32 {
        1.0 / self.player_fire_rate.max(f32::EPSILON)
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

        // [playfield] section
        if let Some(width) = config.getfloat("playfield", "width").ok().flatten() {
            self.playfield_width = width as f32;
        }
        if let Some(height) = config.getfloat("playfield", "height").ok().flatten() {
            self.playfield_height = height as f32;
        }

        // [timing] section
        if let Some(rate) = config.getuint("timing", "update_rate").ok().flatten() {
            self.update_rate = rate as u32;
        }
        if let Some(steps) = config.getuint("timing", "max_steps").ok().flatten() {
            self.max_steps = steps as u32;
        }

        // [player] section
        if let Some(speed) = config.getfloat("player", "speed").ok().flatten() {
            self.player_speed = speed as f32;
        }
        if let Some(rate) = config.getfloat("player", "fire_rate").ok().flatten() {
            self.player_fire_rate = rate as f32;
        }
        if let Some(health) = config.getuint("player", "health").ok().flatten() {
            self.player_health = health as u32;
        }
        if let Some(size) = config.getfloat("player", "size").ok().flatten() {
            self.player_size = size as f32;
        }

        // [enemy] section
        if let Some(health) = config.getuint("enemy", "health").ok().flatten() {
            self.enemy_health = health as u32;
        }
        if let Some(size) = config.getfloat("enemy", "size").ok().flatten() {
            self.enemy_size = size as f32;
        }

        // [bullet] section
        if let Some(speed) = config.getfloat("bullet", "speed").ok().flatten() {
            self.bullet_speed = speed as f32;
        }
        if let Some(size) = config.getfloat("bullet", "size").ok().flatten() {
            self.bullet_size = size as f32;
        }

        info!(
            "Loaded config: {}x{} playfield, {} Hz (cap {}), player speed={} rate={} hp={}",
            self.playfield_width,
            self.playfield_height,
            self.update_rate,
            self.max_steps,
            self.player_speed,
            self.player_fire_rate,
            self.player_health
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.update_rate, 60);
        assert_eq!(config.max_steps, 5);
        assert_eq!(config.player_health, 3);
        assert!((config.fixed_dt() - 1.0 / 60.0).abs() < 1e-6);
        assert!((config.fire_cooldown() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut config = GameConfig::with_path("/nonexistent/config.ini");
        assert!(config.load_from_file().is_err());
        // Defaults survive a failed load.
        assert_eq!(config.update_rate, 60);
    }

    #[test]
    fn test_fixed_dt_guards_zero_rate() {
        let mut config = GameConfig::new();
        config.update_rate = 0;
        assert!((config.fixed_dt() - 1.0).abs() < 1e-6);
    }
}
