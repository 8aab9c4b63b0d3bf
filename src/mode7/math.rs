//! 2D math for the plane projector

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Degrees to radians
pub const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;

/// 2D point / vector in world space
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn len(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn scale(self, s: f32) -> Vec2 {
        Vec2 {
            x: self.x * s,
            y: self.y * s,
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, s: f32) -> Vec2 {
        self.scale(s)
    }
}

/// Line segment from `a` to `b`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

impl Segment {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    /// Euclidean length
    pub fn length(&self) -> f32 {
        (self.a - self.b).len()
    }

    /// Point at normalized position `t` along the segment (0 = a, 1 = b)
    pub fn point_at(&self, t: f32) -> Vec2 {
        Vec2 {
            x: self.a.x + t * (self.b.x - self.a.x),
            y: self.a.y + t * (self.b.y - self.a.y),
        }
    }
}

/// Rotate a local-space point by `heading` degrees, then translate by `origin`.
/// Positive heading turns counter-clockwise in world space.
pub fn rotate_translate(p: Vec2, heading: f32, origin: Vec2) -> Vec2 {
    let (sin, cos) = (heading * DEG_TO_RAD).sin_cos();
    Vec2 {
        x: origin.x + p.x * cos - p.y * sin,
        y: origin.y + p.y * cos + p.x * sin,
    }
}
