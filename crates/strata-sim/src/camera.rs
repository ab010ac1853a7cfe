//! Camera offset and visible-window math for the presentation layer.
//!
//! The camera is derived from the player position every frame and never
//! persisted. Tile coordinates here are array coordinates (column index,
//! row), the same space the physics uses.

use glam::Vec2;
use std::ops::RangeInclusive;

use strata_world::{BLOCK_SIZE, tile_coord};

/// Pixel offset of the viewport's top-left corner, keeping the player
/// centered.
pub fn camera_offset(player_pos: Vec2, viewport: (u32, u32)) -> Vec2 {
    Vec2::new(
        player_pos.x - viewport.0 as f32 / 2.0,
        player_pos.y - viewport.1 as f32 / 2.0,
    )
}

/// Inclusive tile ranges covered by the viewport at the given camera offset.
///
/// One extra tile per axis covers the partially visible edge row/column.
/// Callers clamp through the grid's bounds-checked accessor, so ranges that
/// extend past the world are harmless.
pub fn visible_tiles(
    offset: Vec2,
    viewport: (u32, u32),
) -> (RangeInclusive<i32>, RangeInclusive<i32>) {
    let first_x = tile_coord(offset.x);
    let first_y = tile_coord(offset.y);
    let span_x = (viewport.0 as f32 / BLOCK_SIZE) as i32;
    let span_y = (viewport.1 as f32 / BLOCK_SIZE) as i32;
    (first_x..=first_x + span_x, first_y..=first_y + span_y)
}

/// Tile coordinate under a screen-space pixel, given the camera offset.
pub fn screen_to_tile(screen: Vec2, offset: Vec2) -> (i32, i32) {
    (
        tile_coord(screen.x + offset.x),
        tile_coord(screen.y + offset.y),
    )
}
