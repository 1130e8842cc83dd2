//! Canvas/screen projection for the pannable node surface.
//!
//! Two pure functions parameterized by the surface origin (screen-space
//! top-left of the canvas) and the accumulated pan offset. They are exact
//! inverses: no rounding, no clamping, no zoom factor.

use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Serialize};

/// 2D point/offset in either canvas or screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

/// Project a canvas-space point onto the screen.
pub fn screen_from_canvas(canvas: Vec2, origin: Vec2, pan: Vec2) -> Vec2 {
    origin + pan + canvas
}

/// Project a screen-space point back into canvas space.
pub fn canvas_from_screen(screen: Vec2, origin: Vec2, pan: Vec2) -> Vec2 {
    (screen - origin) - pan
}
