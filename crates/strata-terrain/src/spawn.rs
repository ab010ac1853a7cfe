//! Player spawn location: the first grass tile in scan order.

use glam::Vec2;
use strata_world::{BLOCK_SIZE, TileGrid, TileKind};

/// Pixel coordinate immediately above the first grass tile, scanning rows
/// top-to-bottom and columns left-to-right.
///
/// A world with no grass anywhere yields the origin — a degenerate fallback,
/// not an error.
pub fn find_spawn(grid: &TileGrid) -> Vec2 {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if grid.get(x as i32, y as i32) == Some(TileKind::Grass) {
                return Vec2::new(x as f32 * BLOCK_SIZE, (y as f32 - 1.0) * BLOCK_SIZE);
            }
        }
    }
    Vec2::ZERO
}
