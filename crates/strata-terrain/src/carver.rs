//! Stochastic cave carving refined by a Moore-neighborhood cellular automaton,
//! followed by ore seeding inside the surviving caverns.
//!
//! All three passes stay within the row band `[start_row, height - floor_margin)`.
//! The refinement sweep is in-place over a single buffer, row-major: later
//! cells in a pass observe flips made earlier in the same pass. That sweep
//! order is part of the contract — double-buffering would change the cavern
//! shapes produced by a given seed.

use rand::Rng;
use strata_world::{TileGrid, TileKind};
use tracing::debug;

/// A cave cell with fewer cave neighbors than this is filled back in.
const DEATH_LIMIT: usize = 4;
/// A non-cave cell with more cave neighbors than this is opened up.
const BIRTH_LIMIT: usize = 4;

/// Tuning for cave carving and in-cave ore seeding.
#[derive(Clone, Debug)]
pub struct CaveParams {
    /// First row (inclusive) where carving may occur.
    pub start_row: usize,
    /// Number of bottom rows protected from carving.
    pub floor_margin: usize,
    /// Per-cell probability of seeding a cave cell.
    pub fill_chance: f64,
    /// Number of automaton refinement sweeps.
    pub smoothing_passes: u32,
    /// Per-cave-cell chance of a diamond deposit.
    pub diamond_chance: f64,
    /// Chance of an iron deposit, drawn only when the diamond check fails.
    pub iron_chance: f64,
    /// Chance of a coal deposit, drawn only when the iron check fails.
    pub coal_chance: f64,
}

impl Default for CaveParams {
    fn default() -> Self {
        Self {
            start_row: 90,
            floor_margin: 10,
            fill_chance: 0.45,
            smoothing_passes: 3,
            diamond_chance: 0.02,
            iron_chance: 0.05,
            coal_chance: 0.05,
        }
    }
}

/// Carves cave systems into an already-filled strata grid.
pub struct CaveCarver {
    params: CaveParams,
}

impl CaveCarver {
    /// Create a carver with the given tuning.
    pub fn new(params: CaveParams) -> Self {
        Self { params }
    }

    /// The carver's tuning.
    pub fn params(&self) -> &CaveParams {
        &self.params
    }

    /// Run all three passes (seed, refine, ore) in place.
    ///
    /// Seeding overwrites whatever the strata generator placed; caves take
    /// priority over ore and stone.
    pub fn carve(&self, grid: &mut TileGrid, rng: &mut impl Rng) {
        let floor = grid.height().saturating_sub(self.params.floor_margin);

        for y in self.params.start_row..floor {
            for x in 0..grid.width() {
                if rng.random::<f64>() < self.params.fill_chance {
                    grid.set(x, y, TileKind::Cave);
                }
            }
        }

        for _ in 0..self.params.smoothing_passes {
            self.refine(grid);
        }

        self.seed_ores(grid, rng);

        debug!(
            caves = grid.count(TileKind::Cave),
            start_row = self.params.start_row,
            floor,
            "cave carving finished"
        );
    }

    /// One automaton sweep: kill lonely cave cells, open crowded rock cells.
    fn refine(&self, grid: &mut TileGrid) {
        if grid.width() < 3 {
            return;
        }
        let floor = grid.height().saturating_sub(self.params.floor_margin);

        for y in self.params.start_row..floor {
            for x in 1..grid.width() - 1 {
                let neighbors = cave_neighbors(grid, x as i32, y as i32);
                if grid.get(x as i32, y as i32) == Some(TileKind::Cave) {
                    if neighbors < DEATH_LIMIT {
                        grid.set(x, y, TileKind::Stone);
                    }
                } else if neighbors > BIRTH_LIMIT {
                    grid.set(x, y, TileKind::Cave);
                }
            }
        }
    }

    /// Seed ore deposits inside surviving cave cells.
    ///
    /// The checks form a conditional chain with independent draws: the iron
    /// draw happens only when the diamond check fails, and the coal draw only
    /// when the iron check fails. The chances are not mutually normalized, and
    /// the draw order is pinned by seed reproducibility.
    fn seed_ores(&self, grid: &mut TileGrid, rng: &mut impl Rng) {
        let floor = grid.height().saturating_sub(self.params.floor_margin);

        for y in self.params.start_row..floor {
            for x in 0..grid.width() {
                if grid.get(x as i32, y as i32) != Some(TileKind::Cave) {
                    continue;
                }
                if rng.random::<f64>() < self.params.diamond_chance {
                    grid.set(x, y, TileKind::Diamond);
                } else if rng.random::<f64>() < self.params.iron_chance {
                    grid.set(x, y, TileKind::Iron);
                } else if rng.random::<f64>() < self.params.coal_chance {
                    grid.set(x, y, TileKind::Coal);
                }
            }
        }
    }
}

/// Count of Moore-neighborhood (8) cells holding cave.
///
/// Coordinates outside the grid contribute zero; the count never exceeds 8
/// and never touches out-of-bounds storage.
fn cave_neighbors(grid: &TileGrid, x: i32, y: i32) -> usize {
    let mut neighbors = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            if grid.get(x + dx, y + dy) == Some(TileKind::Cave) {
                neighbors += 1;
            }
        }
    }
    neighbors
}
