//! Configuration for the strata sandbox.
//!
//! Runtime-tunable settings persisted as RON, with CLI overrides via clap and
//! `#[serde(default)]` forward compatibility. Defaults reproduce the
//! canonical world, so a missing or empty config file changes nothing.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CaveConfig, Config, DebugConfig, PhysicsConfig, WindowConfig, WorldConfig};
pub use error::ConfigError;
