//! Flat row-major tile storage with offset column addressing.
//!
//! Row 0 is the top of the generated range; the depth of a row is
//! `height - row`. World columns are signed and symmetric around zero;
//! array index 0 corresponds to `min_column`.

use crate::tile::TileKind;

/// Side length of one tile in pixels.
pub const BLOCK_SIZE: f32 = 10.0;

/// Tile coordinate containing a pixel coordinate (floors toward negative
/// infinity, so slightly-negative pixels land in tile -1, not tile 0).
pub fn tile_coord(px: f32) -> i32 {
    (px / BLOCK_SIZE).floor() as i32
}

/// A fixed-size 2D grid of [`TileKind`] cells.
///
/// Dimensions are set at construction and never change. Every cell always
/// holds exactly one kind; empty space is [`TileKind::Sky`], never an absent
/// value.
#[derive(Clone, Debug)]
pub struct TileGrid {
    tiles: Vec<TileKind>,
    width: usize,
    height: usize,
    min_column: i32,
}

impl TileGrid {
    /// Allocates a `width` x `height` grid uniformly filled with `fill`.
    ///
    /// `min_column` is the signed world column of array index 0.
    pub fn filled(width: usize, height: usize, min_column: i32, fill: TileKind) -> Self {
        Self {
            tiles: vec![fill; width * height],
            width,
            height,
            min_column,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Signed world column of array index 0.
    pub fn min_column(&self) -> i32 {
        self.min_column
    }

    /// Array index of a signed world column, or `None` outside the range.
    pub fn column_index(&self, column: i32) -> Option<usize> {
        let idx = column - self.min_column;
        (0 <= idx && (idx as usize) < self.width).then_some(idx as usize)
    }

    /// The kind at array coordinates `(x, y)`, or `None` out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<TileKind> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.tiles[y as usize * self.width + x as usize])
    }

    /// Overwrites the kind at `(x, y)`. Coordinates must be in bounds.
    pub fn set(&mut self, x: usize, y: usize, kind: TileKind) {
        self.tiles[y * self.width + x] = kind;
    }

    /// Number of cells currently holding `kind`.
    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|&&t| t == kind).count()
    }
}
