//! Per-frame input snapshot
//!
//! The host reads the keyboard and fills one of these per frame; the
//! simulation never touches input devices directly.

/// Input state for a single frame (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Held directional keys (arrows or WASD, the host decides)
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// One-shot start key press (space)
    pub start_pressed: bool,
}

impl FrameInput {
    /// Horizontal axis folded to -1, 0, or 1 (opposing keys cancel)
    pub fn axis_x(&self) -> f32 {
        (self.right as i8 - self.left as i8) as f32
    }

    /// Vertical axis folded to -1, 0, or 1, positive pointing down-screen
    pub fn axis_y(&self) -> f32 {
        (self.down as i8 - self.up as i8) as f32
    }

    /// True when no directional key is held (or they all cancel out)
    pub fn is_idle(&self) -> bool {
        self.axis_x() == 0.0 && self.axis_y() == 0.0
    }

    /// Clear one-shot presses after the simulation consumed them
    pub fn clear_presses(&mut self) {
        self.start_pressed = false;
    }
}
