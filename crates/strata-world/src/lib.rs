//! Tile grid storage, tile kinds, and the color table for the strata world.

mod grid;
mod tile;

pub use grid::{BLOCK_SIZE, TileGrid, tile_coord};
pub use tile::{Rgb, TileKind};
