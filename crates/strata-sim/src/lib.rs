//! Simulation driver: fixed-timestep tick loop, per-tick input sampling,
//! camera offsets for the presentation layer, and the session that wires
//! generation, spawn, input and physics together.

mod camera;
mod game_loop;
mod input;
mod session;

pub use camera::{camera_offset, screen_to_tile, visible_tiles};
pub use game_loop::FixedTimestep;
pub use input::InputState;
pub use session::Session;
