//! Player body simulation against the tile grid: gravity, jumping, collision
//! snapping, block breaking, and background lighting reclassification.

mod body;
mod mining;
mod physics;

pub use body::{Body, PhysicsParams};
pub use mining::apply_background;
pub use physics::{TilePhysics, is_solid};
