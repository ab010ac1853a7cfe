//! Gravity integration and tile-grid collision resolution.

use strata_world::{BLOCK_SIZE, TileGrid, TileKind, tile_coord};

use crate::body::{Body, PhysicsParams};

/// Bounds-checked solidity test. Out-of-bounds coordinates are never solid.
pub fn is_solid(grid: &TileGrid, x: i32, y: i32) -> bool {
    grid.get(x, y).is_some_and(TileKind::is_solid)
}

/// Resolves one player body against the tile grid.
///
/// All methods are total: boundary conditions clamp or no-op, they never
/// fault. The grid and body are only touched through the exclusive references
/// passed in, one step at a time.
pub struct TilePhysics {
    params: PhysicsParams,
}

impl TilePhysics {
    /// Create a resolver with the given tuning.
    pub fn new(params: PhysicsParams) -> Self {
        Self { params }
    }

    /// The resolver's tuning.
    pub fn params(&self) -> &PhysicsParams {
        &self.params
    }

    /// One gravity step: semi-implicit Euler integration followed by
    /// collision resolution.
    ///
    /// If the integrated position falls past the bottom of the map the body
    /// is snapped onto the world floor and the collision check is skipped for
    /// this step — the bottom-of-world safety net.
    pub fn apply_gravity(&self, body: &mut Body, grid: &mut TileGrid, dt: f32) {
        if !body.grounded {
            body.velocity_y += self.params.gravity * dt;
        }
        body.pos.y += body.velocity_y * dt;

        let floor_y = (grid.height() as f32 - 1.0) * BLOCK_SIZE;
        if body.pos.y > floor_y {
            body.pos.y = floor_y;
            body.velocity_y = 0.0;
            body.grounded = true;
            return;
        }

        self.check_collisions(body, grid);
    }

    /// Ground snap against the cell below the body, then lateral resolution.
    fn check_collisions(&self, body: &mut Body, grid: &mut TileGrid) {
        let block_x = tile_coord(body.pos.x);
        let block_y = tile_coord(body.pos.y);

        if is_solid(grid, block_x, block_y + 1) {
            body.pos.y = block_y as f32 * BLOCK_SIZE;
            body.velocity_y = 0.0;
            body.grounded = true;
        } else {
            body.grounded = false;
        }

        self.check_horizontal_collisions(body, grid);
    }

    /// Push the body out of solid cells beyond its left and right edges.
    ///
    /// For offsets 1 and 2, the left side is checked before the right and the
    /// first match wins — a single correction per offset, not a full
    /// both-sides sweep.
    fn check_horizontal_collisions(&self, body: &mut Body, grid: &TileGrid) {
        let half_width = self.params.body_width / 2.0;
        let block_left = tile_coord(body.pos.x - half_width);
        let block_right = tile_coord(body.pos.x + half_width);
        let block_y = tile_coord(body.pos.y);

        for offset in 1..3 {
            if is_solid(grid, block_left - offset, block_y) {
                body.pos.x = (block_left + offset) as f32 * BLOCK_SIZE;
            } else if is_solid(grid, block_right + offset, block_y) {
                body.pos.x = (block_right - offset) as f32 * BLOCK_SIZE - self.params.body_width;
            }
        }
    }

    /// Launch upward if grounded; a no-op while airborne (no air jump).
    pub fn jump(&self, body: &mut Body) {
        if body.grounded {
            body.velocity_y = self.params.jump_force;
            body.grounded = false;
        }
    }

    /// Re-derive the grounded flag from the cell below the body's feet.
    ///
    /// Used after the grid changes underneath a stationary body, where no
    /// integration step would otherwise notice the missing support.
    pub fn check_ground(&self, body: &mut Body, grid: &TileGrid) {
        let block_x = tile_coord(body.pos.x);
        let block_y = tile_coord(body.pos.y + self.params.body_height);
        body.grounded = is_solid(grid, block_x, block_y + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn sky_grid(width: usize, height: usize) -> TileGrid {
        TileGrid::filled(width, height, 0, TileKind::Sky)
    }

    fn physics() -> TilePhysics {
        TilePhysics::new(PhysicsParams::default())
    }

    #[test]
    fn out_of_bounds_is_never_solid() {
        let grid = TileGrid::filled(4, 4, 0, TileKind::Stone);
        assert!(is_solid(&grid, 0, 0));
        assert!(!is_solid(&grid, -1, 0));
        assert!(!is_solid(&grid, 0, -1));
        assert!(!is_solid(&grid, 4, 0));
        assert!(!is_solid(&grid, 0, 4));
    }

    #[test]
    fn falling_body_lands_on_the_tile_below() {
        let mut grid = sky_grid(10, 10);
        grid.set(1, 5, TileKind::Stone);

        // One block above the stone: crossing the boundary in one step must
        // snap the body onto the tile top and zero the velocity.
        let mut body = Body::at(Vec2::new(15.0, 39.0));
        physics().apply_gravity(&mut body, &mut grid, 0.1);

        assert!(body.grounded, "body must be grounded after landing");
        assert_eq!(body.velocity_y, 0.0, "landing must zero vertical velocity");
        assert_eq!(body.pos.y, 40.0, "body snaps to the top of the tile below");
    }

    #[test]
    fn mountain_and_snow_do_not_catch_a_falling_body() {
        // Same drop that lands on stone, but mountain and snow are not in
        // the solid set, so the body passes straight through.
        for kind in [TileKind::Mountain, TileKind::Snow] {
            let mut grid = sky_grid(10, 10);
            grid.set(1, 5, kind);

            let mut body = Body::at(Vec2::new(15.0, 39.0));
            physics().apply_gravity(&mut body, &mut grid, 0.1);

            assert!(!body.grounded, "{} must not ground the body", kind.name());
            assert!(body.velocity_y > 0.0, "the body keeps falling");
            assert_eq!(body.pos.y, 47.0, "no landing snap occurs");
        }
    }

    #[test]
    fn airborne_body_keeps_accelerating() {
        let mut grid = sky_grid(10, 4);
        let mut body = Body::at(Vec2::new(15.0, 0.0));
        physics().apply_gravity(&mut body, &mut grid, 0.01);
        let v1 = body.velocity_y;
        physics().apply_gravity(&mut body, &mut grid, 0.01);
        assert!(
            body.velocity_y > v1 && v1 > 0.0,
            "velocity must grow while airborne: {v1} -> {}",
            body.velocity_y
        );
    }

    #[test]
    fn world_bottom_clamps_instead_of_falling_forever() {
        let mut grid = sky_grid(10, 10);
        let mut body = Body::at(Vec2::new(15.0, 80.0));
        body.velocity_y = 500.0;
        physics().apply_gravity(&mut body, &mut grid, 1.0);

        assert_eq!(body.pos.y, 90.0, "body clamps to the floor line");
        assert_eq!(body.velocity_y, 0.0);
        assert!(body.grounded, "the floor clamp forces grounded");
    }

    #[test]
    fn jump_only_works_from_the_ground() {
        let p = physics();

        let mut grounded = Body::at(Vec2::ZERO);
        grounded.grounded = true;
        p.jump(&mut grounded);
        assert_eq!(grounded.velocity_y, -300.0);
        assert!(!grounded.grounded, "jumping leaves the ground");

        let mut airborne = Body::at(Vec2::ZERO);
        airborne.velocity_y = -50.0;
        p.jump(&mut airborne);
        assert_eq!(
            airborne.velocity_y, -50.0,
            "jump while airborne must not change velocity"
        );
    }

    #[test]
    fn left_wall_pushes_the_body_right() {
        let mut grid = sky_grid(10, 10);
        grid.set(1, 4, TileKind::Stone);

        // Body center at x=25, left edge at block 2; the wall sits one cell
        // beyond the left edge.
        let mut body = Body::at(Vec2::new(25.0, 40.0));
        body.grounded = true;
        physics().apply_gravity(&mut body, &mut grid, 0.0);

        assert_eq!(body.pos.x, 30.0, "left edge snaps just past the wall");
    }

    #[test]
    fn right_wall_pushes_the_body_left() {
        let mut grid = sky_grid(10, 10);
        grid.set(5, 4, TileKind::Stone);

        // Body center at x=35, right edge at block 4; the wall sits one cell
        // beyond the right edge. The correction is
        // (block_right - offset) * BLOCK_SIZE - body_width = 20.
        let mut body = Body::at(Vec2::new(35.0, 40.0));
        body.grounded = true;
        physics().apply_gravity(&mut body, &mut grid, 0.0);

        assert_eq!(body.pos.x, 20.0, "body snaps back from the right wall");
    }

    #[test]
    fn walls_two_tiles_out_still_push_the_body() {
        // Left: center at x=45, left edge in block 4; the wall at block 2 is
        // two cells out and only matches at offset 2, snapping to
        // (block_left + offset) * BLOCK_SIZE = 60.
        let mut grid = sky_grid(10, 10);
        grid.set(2, 4, TileKind::Stone);
        let mut body = Body::at(Vec2::new(45.0, 40.0));
        body.grounded = true;
        physics().apply_gravity(&mut body, &mut grid, 0.0);
        assert_eq!(body.pos.x, 60.0, "offset-2 left wall snaps the body right");

        // Right: center at x=35, right edge in block 4; the wall at block 6
        // matches at offset 2, snapping to
        // (block_right - offset) * BLOCK_SIZE - body_width = 10.
        let mut grid = sky_grid(10, 10);
        grid.set(6, 4, TileKind::Stone);
        let mut body = Body::at(Vec2::new(35.0, 40.0));
        body.grounded = true;
        physics().apply_gravity(&mut body, &mut grid, 0.0);
        assert_eq!(body.pos.x, 10.0, "offset-2 right wall snaps the body left");
    }

    #[test]
    fn check_ground_reflects_the_grid_under_the_feet() {
        let p = physics();
        let mut grid = sky_grid(10, 10);
        grid.set(1, 6, TileKind::Stone);

        // Feet at pos.y + body_height = 50, block 5; support cell is block 6.
        let mut body = Body::at(Vec2::new(15.0, 40.0));
        p.check_ground(&mut body, &grid);
        assert!(body.grounded);

        grid.set(1, 6, TileKind::Sky);
        p.check_ground(&mut body, &grid);
        assert!(!body.grounded);
    }
}
