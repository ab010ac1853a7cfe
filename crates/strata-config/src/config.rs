//! Configuration structs with canonical defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// World geometry and surface shape.
    pub world: WorldConfig,
    /// Cave carving and in-cave ore seeding.
    pub caves: CaveConfig,
    /// Player physics tuning.
    pub physics: PhysicsConfig,
    /// Presentation-layer window settings.
    pub window: WindowConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// World generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// World seed. `None` draws a fresh seed at startup.
    pub seed: Option<u64>,
    /// Number of generated rows.
    pub height: usize,
    /// First world column, inclusive.
    pub min_column: i32,
    /// Last world column, inclusive.
    pub max_column: i32,
    /// Columns at or beyond this absolute value are forced to sky.
    pub edge_margin: i32,
    /// Elevation curve amplitude in rows.
    pub amplitude: f64,
    /// Elevation curve frequency in radians per column.
    pub frequency: f64,
}

/// Cave carving configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CaveConfig {
    /// First row (inclusive) where carving may occur.
    pub start_row: usize,
    /// Number of bottom rows protected from carving.
    pub floor_margin: usize,
    /// Per-cell cave seeding probability.
    pub fill_chance: f64,
    /// Number of automaton refinement sweeps.
    pub smoothing_passes: u32,
    /// Per-cave-cell diamond chance.
    pub diamond_chance: f64,
    /// Iron chance, drawn when the diamond check fails.
    pub iron_chance: f64,
    /// Coal chance, drawn when the iron check fails.
    pub coal_chance: f64,
}

/// Player physics configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration in px/s².
    pub gravity: f32,
    /// Jump impulse in px/s, negative = up.
    pub jump_force: f32,
    /// Player body width in pixels.
    pub body_width: f32,
    /// Player body height in pixels.
    pub body_height: f32,
    /// Horizontal walk speed in px/s.
    pub walk_speed: f32,
}

/// Window settings consumed by the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
    /// Target frame (and simulation tick) rate in Hz.
    pub target_fps: u32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g. "debug", "info,strata_terrain=trace").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: None,
            height: 128,
            min_column: -512,
            max_column: 512,
            edge_margin: 500,
            amplitude: 3.0,
            frequency: 0.005,
        }
    }
}

impl Default for CaveConfig {
    fn default() -> Self {
        Self {
            start_row: 90,
            floor_margin: 10,
            fill_chance: 0.45,
            smoothing_passes: 3,
            diamond_chance: 0.02,
            iron_chance: 0.05,
            coal_chance: 0.05,
        }
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 800.0,
            jump_force: -300.0,
            body_width: 10.0,
            body_height: 10.0,
            walk_speed: 300.0,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "strata".to_string(),
            target_fps: 60,
        }
    }
}

// --- Load / Save ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new().depth_limit(3);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Default config directory (platform config dir), or the current
    /// directory when the platform offers none.
    pub fn default_dir() -> std::path::PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("strata"))
            .unwrap_or_else(|| std::path::PathBuf::from("."))
    }
}
