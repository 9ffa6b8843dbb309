//! Overlap tests and screen bounds
//!
//! Everything on screen is an axis-aligned box; the overlap test is the
//! per-frame check that drives candy pickup and game over.

use glam::Vec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// An axis-aligned box described by its center and half-extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    /// Pairwise overlap test; touching edges count as an overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        (self.center.x - other.center.x).abs() <= self.half.x + other.half.x
            && (self.center.y - other.center.y).abs() <= self.half.y + other.half.y
    }
}

/// Clamp a box center so the box stays fully on the 320x240 screen
pub fn clamp_to_screen(center: Vec2, half: Vec2) -> Vec2 {
    Vec2::new(
        center.x.clamp(half.x, SCREEN_WIDTH - half.x),
        center.y.clamp(half.y, SCREEN_HEIGHT - half.y),
    )
}

/// True once a box has fully left the screen plus the given margin
pub fn outside_screen(center: Vec2, half: Vec2, margin: f32) -> bool {
    center.x + half.x < -margin
        || center.x - half.x > SCREEN_WIDTH + margin
        || center.y + half.y < -margin
        || center.y - half.y > SCREEN_HEIGHT + margin
}
