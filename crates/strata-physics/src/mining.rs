//! Block breaking and the background lighting reclassification that follows.

use strata_world::{TileGrid, TileKind};
use tracing::debug;

use crate::body::Body;
use crate::physics::TilePhysics;

impl TilePhysics {
    /// Break the tile at `(x, y)`.
    ///
    /// Bare cave rock cannot be mined; any other kind — ores included — is
    /// replaced with sky. The cell's background classification is then
    /// recomputed, the body's grounded flag re-derived, and a zero-dt gravity
    /// step run so a body whose support was just removed starts falling
    /// immediately instead of waiting for the next tick.
    ///
    /// Out-of-bounds coordinates are a no-op.
    pub fn break_block(&self, body: &mut Body, grid: &mut TileGrid, x: i32, y: i32) {
        let Some(kind) = grid.get(x, y) else {
            return;
        };
        if kind == TileKind::Cave {
            return;
        }

        grid.set(x as usize, y as usize, TileKind::Sky);
        apply_background(grid, x, y);
        self.check_ground(body, grid);
        self.apply_gravity(body, grid, 0.0);

        debug!(x, y, kind = kind.name(), "block broken");
    }
}

/// Reclassify a cell's backdrop from its exposure to daylight.
///
/// A sky cell is left untouched. Otherwise the column straight above is
/// scanned: if every cell up to the top is sky or cave (an unobstructed shaft
/// to the surface) the cell becomes [`TileKind::DaylitCave`], else
/// [`TileKind::DarkCave`]. Cosmetic only — neither marker is solid.
pub fn apply_background(grid: &mut TileGrid, x: i32, y: i32) {
    let Some(kind) = grid.get(x, y) else {
        return;
    };
    if kind == TileKind::Sky {
        return;
    }

    let daylight = (0..y).all(|row| {
        matches!(
            grid.get(x, row),
            Some(TileKind::Sky) | Some(TileKind::Cave)
        )
    });

    let marker = if daylight {
        TileKind::DaylitCave
    } else {
        TileKind::DarkCave
    };
    grid.set(x as usize, y as usize, marker);
}
