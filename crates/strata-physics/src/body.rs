//! The player body value and physics tuning.

use glam::Vec2;

/// Physics tuning constants.
///
/// Defaults reproduce the canonical feel: 800 px/s² gravity, a -300 px/s jump
/// impulse, and a 10x10 px body walking at 300 px/s.
#[derive(Clone, Debug)]
pub struct PhysicsParams {
    /// Downward acceleration in px/s².
    pub gravity: f32,
    /// Vertical velocity applied on jump, negative = up.
    pub jump_force: f32,
    /// Body width in pixels.
    pub body_width: f32,
    /// Body height in pixels.
    pub body_height: f32,
    /// Horizontal walk speed in px/s.
    pub walk_speed: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity: 800.0,
            jump_force: -300.0,
            body_width: 10.0,
            body_height: 10.0,
            walk_speed: 300.0,
        }
    }
}

/// The single player body: position, vertical velocity, and grounded flag.
///
/// One owned value per player, handed to [`TilePhysics`](crate::TilePhysics)
/// by exclusive mutable reference each simulation step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    /// Position in pixel space. The y axis grows downward.
    pub pos: Vec2,
    /// Vertical velocity in px/s, positive = falling.
    pub velocity_y: f32,
    /// Whether the body currently rests on a solid tile.
    pub grounded: bool,
}

impl Body {
    /// A body at rest at `pos`, airborne until the first collision check.
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            velocity_y: 0.0,
            grounded: false,
        }
    }
}
