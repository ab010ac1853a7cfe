//! Per-tick input snapshot.

/// Input sampled once per simulation tick by the presentation layer.
///
/// `move_left`/`move_right` reflect held keys, `jump` is the edge of the jump
/// key, and `break_target` carries a break-block click already translated to
/// tile coordinates (see [`screen_to_tile`](crate::screen_to_tile)).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputState {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    pub break_target: Option<(i32, i32)>,
}

impl InputState {
    /// A tick with no input at all.
    pub fn idle() -> Self {
        Self::default()
    }
}
