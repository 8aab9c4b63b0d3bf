//! Camera pose and view frustum
//!
//! The camera lives on a 2D ground plane: a position, a heading in degrees
//! and a height above the plane. Each frame it derives a pair of world-space
//! segments (the near and far edges of the visible trapezoid) that the
//! projector interpolates between. Frustum half-widths scale with camera
//! height, which fixes the horizontal FOV at roughly 90 degrees regardless
//! of altitude.

use super::math::{rotate_translate, Segment, Vec2, DEG_TO_RAD};

/// Far edge distance as a multiple of camera height
pub const FAR_FACTOR: f32 = 20.0;

/// Minimum camera height; the projector divides by height, so it must stay
/// strictly positive
pub const MIN_HEIGHT: f32 = 0.5;

/// World-space near/far edges for one frame, recomputed from the camera pose
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    pub near: Segment,
    pub far: Segment,
    pub z_near: f32,
    pub z_far: f32,
}

/// Camera state
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec2,
    /// Heading in degrees, counter-clockwise
    pub heading: f32,
    /// Height above the ground plane, always >= MIN_HEIGHT
    pub height: f32,
}

impl Camera {
    pub fn new(position: Vec2, heading: f32, height: f32) -> Self {
        Self {
            position,
            heading,
            height: height.max(MIN_HEIGHT),
        }
    }

    /// Move along the current heading (negative = backward)
    pub fn advance(&mut self, dist: f32) {
        let (sin, cos) = (self.heading * DEG_TO_RAD).sin_cos();
        self.position.x -= sin * dist;
        self.position.y += cos * dist;
    }

    /// Turn by `degrees` (positive = left / counter-clockwise)
    pub fn turn(&mut self, degrees: f32) {
        self.heading += degrees;
    }

    /// Raise or lower the camera, clamped to MIN_HEIGHT
    pub fn climb(&mut self, dz: f32) {
        self.height = (self.height + dz).max(MIN_HEIGHT);
    }

    /// Derive the world-space frustum edges for the current pose.
    ///
    /// Local-space corners are (-z, z) and (z, z) for each edge, rotated by
    /// the heading and translated to the camera position.
    pub fn frustum(&self) -> Frustum {
        let z_near = self.height;
        let z_far = self.height * FAR_FACTOR;

        let near = Segment::new(
            rotate_translate(Vec2::new(-z_near, z_near), self.heading, self.position),
            rotate_translate(Vec2::new(z_near, z_near), self.heading, self.position),
        );
        let far = Segment::new(
            rotate_translate(Vec2::new(-z_far, z_far), self.heading, self.position),
            rotate_translate(Vec2::new(z_far, z_far), self.heading, self.position),
        );

        Frustum {
            near,
            far,
            z_near,
            z_far,
        }
    }
}
