//! Procedural terrain: depth-threshold strata synthesis, cellular-automaton
//! cave carving, ore seeding, and player spawn location.

mod carver;
mod generator;
mod seed;
mod spawn;

pub use carver::{CaveCarver, CaveParams};
pub use generator::{TerrainGenerator, TerrainParams};
pub use seed::{hash_grid, world_rng};
pub use spawn::find_spawn;
