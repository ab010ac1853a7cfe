//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Strata sandbox command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "strata", about = "2D tile sandbox world generator & simulator")]
pub struct CliArgs {
    /// World seed (defaults to a random seed).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Viewport width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Viewport height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Target frame rate in Hz.
    #[arg(long)]
    pub fps: Option<u32>,

    /// Cave seeding probability in [0, 1].
    #[arg(long)]
    pub cave_chance: Option<f64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to the config directory (overrides the platform default).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.world.seed = Some(seed);
        }
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(fps) = args.fps {
            self.window.target_fps = fps;
        }
        if let Some(chance) = args.cave_chance {
            self.caves.fill_chance = chance;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
