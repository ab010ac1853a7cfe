//! Deterministic seeded generation utilities.

use std::hash::{DefaultHasher, Hash, Hasher};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strata_world::TileGrid;

/// Derive the world RNG from a seed.
///
/// The returned RNG produces an identical draw sequence for the same seed on
/// every platform, so a seed fully determines the generated world.
pub fn world_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Hash every cell of a grid into a u64 digest for determinism comparison.
pub fn hash_grid(grid: &TileGrid) -> u64 {
    let mut hasher = DefaultHasher::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if let Some(kind) = grid.get(x as i32, y as i32) {
                kind.hash(&mut hasher);
            }
        }
    }
    hasher.finish()
}
