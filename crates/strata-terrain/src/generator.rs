//! Base strata synthesis: depth thresholds, ore bands, and a sinusoidal
//! surface elevation, finished by the cave carver.

use rand::Rng;
use strata_world::{TileGrid, TileKind};
use tracing::info;

use crate::carver::CaveCarver;

/// Upper bound of the per-cell ore draw (`1..=ORE_DRAW_BOUND`).
const ORE_DRAW_BOUND: i32 = 300;
/// Draw at or below this places diamond in the 7..=10 depth band.
const DIAMOND_THRESHOLD: i32 = 4;
/// Draw at or below this places iron in the 21..=30 depth band.
const IRON_THRESHOLD: i32 = 7;
/// Coal / iron thresholds for the 31..=35 depth band.
const DEEP_COAL_THRESHOLD: i32 = 3;
const DEEP_IRON_THRESHOLD: i32 = 6;
/// Coal threshold for the 36..=39 depth band.
const SHALLOW_COAL_THRESHOLD: i32 = 11;

/// Geometry and surface-shape tuning for the strata generator.
#[derive(Clone, Debug)]
pub struct TerrainParams {
    /// Number of generated rows.
    pub height: usize,
    /// First (most negative) world column, inclusive.
    pub min_column: i32,
    /// Last world column, inclusive.
    pub max_column: i32,
    /// Columns with `|column| >= edge_margin` are forced to sky, capping the
    /// playable width.
    pub edge_margin: i32,
    /// Elevation curve amplitude in rows.
    pub amplitude: f64,
    /// Elevation curve frequency in radians per column.
    pub frequency: f64,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            height: 128,
            min_column: -512,
            max_column: 512,
            edge_margin: 500,
            amplitude: 3.0,
            frequency: 0.005,
        }
    }
}

impl TerrainParams {
    /// Number of grid columns spanned by the inclusive column range.
    pub fn width(&self) -> usize {
        (self.max_column - self.min_column + 1) as usize
    }
}

/// Whole-world generator: fills the strata grid, then hands it to the cave
/// carver as a finishing pass.
pub struct TerrainGenerator {
    params: TerrainParams,
    carver: CaveCarver,
}

impl TerrainGenerator {
    /// Create a generator from strata tuning and a configured cave carver.
    pub fn new(params: TerrainParams, carver: CaveCarver) -> Self {
        Self { params, carver }
    }

    /// The generator's tuning.
    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    /// Generate the complete world grid in one allocation.
    pub fn generate(&self, rng: &mut impl Rng) -> TileGrid {
        let mut grid = self.generate_strata(rng);
        self.carver.carve(&mut grid, rng);

        info!(
            width = grid.width(),
            height = grid.height(),
            caves = grid.count(TileKind::Cave),
            grass = grid.count(TileKind::Grass),
            "world generated"
        );
        grid
    }

    /// Fill the raw strata grid without the cave pass.
    ///
    /// One uniform draw in `1..=300` is consumed per non-edge cell, before the
    /// depth branch; reproducing a seed requires matching that draw order
    /// exactly.
    pub fn generate_strata(&self, rng: &mut impl Rng) -> TileGrid {
        let p = &self.params;
        let mut grid = TileGrid::filled(p.width(), p.height, p.min_column, TileKind::Sky);
        // Integer midline, as in the elevation formula `a·sin(f·col) + h/2`.
        let midline = (p.height / 2) as f64;

        for row in 0..p.height {
            let depth = (p.height - row) as i32;
            for column in p.min_column..=p.max_column {
                let x = (column - p.min_column) as usize;
                if column.abs() >= p.edge_margin {
                    grid.set(x, row, TileKind::Sky);
                    continue;
                }
                let draw = rng.random_range(1..=ORE_DRAW_BOUND);
                let elevation =
                    p.amplitude * libm::sin(p.frequency * f64::from(column)) + midline;
                grid.set(x, row, strata_kind(depth, draw, elevation, midline));
            }
        }
        grid
    }
}

/// The depth-threshold rule for one cell. First matching band wins.
fn strata_kind(depth: i32, draw: i32, elevation: f64, midline: f64) -> TileKind {
    let depth_f = f64::from(depth);
    if depth <= 2 {
        TileKind::Bedrock
    } else if depth <= 6 {
        TileKind::Stone
    } else if depth <= 10 {
        if draw <= DIAMOND_THRESHOLD {
            TileKind::Diamond
        } else {
            TileKind::Stone
        }
    } else if depth <= 20 {
        TileKind::Stone
    } else if depth <= 30 {
        if draw <= IRON_THRESHOLD {
            TileKind::Iron
        } else {
            TileKind::Stone
        }
    } else if depth <= 35 {
        if draw <= DEEP_COAL_THRESHOLD {
            TileKind::Coal
        } else if draw <= DEEP_IRON_THRESHOLD {
            TileKind::Iron
        } else {
            TileKind::Stone
        }
    } else if depth <= 39 {
        if draw <= SHALLOW_COAL_THRESHOLD {
            TileKind::Coal
        } else {
            TileKind::Stone
        }
    } else if depth <= 40 {
        TileKind::Stone
    } else if depth_f <= elevation {
        if elevation > midline {
            TileKind::Mountain
        } else {
            TileKind::Grass
        }
    } else if depth_f <= elevation + 1.0 {
        TileKind::Grass
    } else if depth_f <= elevation + 4.0 {
        if elevation > midline {
            TileKind::Snow
        } else {
            TileKind::Grass
        }
    } else {
        TileKind::Sky
    }
}
