//! Scanline projection, texture sampling and layer compositing

use super::camera::Frustum;
use super::math::{Segment, Vec2};
use super::types::{Color, Layer};

/// Off-screen buffer one layer is composited into (RGBA, 4 bytes per pixel)
pub struct Framebuffer {
    pub pixels: Vec<u8>,
    pub width: usize,
    pub height: usize,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height * 4],
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: Color) {
        let bytes = color.to_bytes();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&bytes);
        }
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            self.pixels[idx..idx + 4].copy_from_slice(&color.to_bytes());
        }
    }
}

/// Project the frustum onto one scanline.
///
/// `v` is the normalized depth of the scanline: 0 yields the near edge,
/// 1 the far edge. Interpolation happens in inverse-depth space so that
/// distant rows compress correctly instead of producing a zoomed look
/// near the horizon. The weighted form keeps both endpoints exact in f32:
/// at v=1 the near term vanishes instead of cancelling.
pub fn project_scanline(f: &Frustum, v: f32) -> Segment {
    let inv_near = 1.0 / f.z_near;
    let inv_far = 1.0 / f.z_far;
    let inv_z = (1.0 - v) * inv_near + v * inv_far;

    let lerp = |near: Vec2, far: Vec2| Vec2 {
        x: ((1.0 - v) * near.x * inv_near + v * far.x * inv_far) / inv_z,
        y: ((1.0 - v) * near.y * inv_near + v * far.y * inv_far) / inv_z,
    };

    Segment::new(lerp(f.near.a, f.far.a), lerp(f.near.b, f.far.b))
}

/// Resolve the texel for horizontal position `u` on a projected scanline.
///
/// The world point is interpolated along the segment, its y axis negated
/// (world up maps to texture down), truncated to integers and wrapped
/// toroidally so any world coordinate lands inside the texture.
pub fn tex_coords(u: f32, line: &Segment, tex_w: usize, tex_h: usize) -> (usize, usize) {
    let p = line.point_at(u);
    let tw = tex_w as i32;
    let th = tex_h as i32;
    let x = ((tw + (p.x as i32 % tw)) % tw) as usize;
    let y = ((th + (-p.y as i32 % th)) % th) as usize;
    (x, y)
}

/// Composite one layer into its framebuffer.
///
/// Projection runs once per row, sampling once per pixel. Row `y` maps to
/// depth `v = 1 - y/H`, so the bottom of the buffer is the nearest ground.
/// Layers with `flip_rows` write each scanline to the mirrored row, which
/// turns the same projection into a sky above the horizon.
pub fn render_layer(fb: &mut Framebuffer, layer: &Layer, frustum: &Frustum) {
    let tex = &layer.texture;
    let (w, h) = (fb.width, fb.height);

    for y in 0..h {
        let v = 1.0 - y as f32 / h as f32;
        let line = project_scanline(frustum, v);
        let dest_y = if layer.flip_rows { h - 1 - y } else { y };

        for x in 0..w {
            let u = x as f32 / w as f32;
            let (tx, ty) = tex_coords(u, &line, tex.width, tex.height);
            fb.set_pixel(x, dest_y, tex.pixel(tx, ty));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode7::camera::Camera;
    use crate::mode7::types::Texture;

    fn test_camera() -> Camera {
        Camera::new(Vec2::new(150.0, 150.0), 0.0, 16.0)
    }

    #[test]
    fn test_projection_endpoint_law() {
        let f = test_camera().frustum();

        let near = project_scanline(&f, 0.0);
        assert!((near.a.x - f.near.a.x).abs() < 1e-4);
        assert!((near.a.y - f.near.a.y).abs() < 1e-4);
        assert!((near.b.x - f.near.b.x).abs() < 1e-4);
        assert!((near.b.y - f.near.b.y).abs() < 1e-4);

        let far = project_scanline(&f, 1.0);
        assert!((far.a.x - f.far.a.x).abs() < 1e-4);
        assert!((far.a.y - f.far.a.y).abs() < 1e-4);
        assert!((far.b.x - f.far.b.x).abs() < 1e-4);
        assert!((far.b.y - f.far.b.y).abs() < 1e-4);
    }

    #[test]
    fn test_far_endpoint_exact_at_reference_pose() {
        // Height 16 at (150,150): z_far 320, so the far edge runs
        // (-170, 470)..(470, 470). The near contribution must vanish at
        // v=1 rather than leave a cancellation residual.
        let f = test_camera().frustum();
        let far = project_scanline(&f, 1.0);
        assert!((far.a.x + 170.0).abs() < 1e-4);
        assert!((far.a.y - 470.0).abs() < 1e-4);
        assert!((far.b.x - 470.0).abs() < 1e-4);
        assert!((far.b.y - 470.0).abs() < 1e-4);
    }

    #[test]
    fn test_projection_endpoint_law_rotated() {
        let f = Camera::new(Vec2::new(37.5, -12.0), 123.0, 5.0).frustum();
        let near = project_scanline(&f, 0.0);
        assert!((near.a.x - f.near.a.x).abs() < 1e-4);
        assert!((near.b.y - f.near.b.y).abs() < 1e-4);
    }

    #[test]
    fn test_depth_is_monotonic() {
        // Walking v from near to far must not fold depth
        let cam = test_camera();
        let f = cam.frustum();
        let mut last = 0.0f32;
        for i in 0..=100 {
            let v = i as f32 / 100.0;
            let p = project_scanline(&f, v).point_at(0.3);
            let dist = (p - cam.position).len();
            assert!(dist >= last - 1e-3, "depth folded at v={}", v);
            last = dist;
        }
    }

    #[test]
    fn test_sample_near_midpoint() {
        // Camera (150,150), heading 0, height 16: near runs (134,166)..(166,166).
        // Midpoint (150,166) mirrors to (150,-166) and wraps into 64x64.
        let f = test_camera().frustum();
        let (x, y) = tex_coords(0.5, &f.near, 64, 64);
        assert_eq!(x, 22);
        assert_eq!(y, 26);
    }

    #[test]
    fn test_wrap_negative_coordinate() {
        // World x = -1 wraps to the last texel, not -1
        let line = Segment::new(Vec2::new(-1.0, 0.0), Vec2::new(-1.0, 0.0));
        let (x, y) = tex_coords(0.0, &line, 64, 64);
        assert_eq!(x, 63);
        assert_eq!(y, 0);
    }

    #[test]
    fn test_wrap_idempotence() {
        // x and x + k*tw land on the same texel, for either sign of k
        let base = Segment::new(Vec2::new(13.0, -27.0), Vec2::new(13.0, -27.0));
        let (bx, by) = tex_coords(0.0, &base, 64, 32);
        for k in [-3i32, -1, 1, 2, 5] {
            let shifted = Segment::new(
                Vec2::new(13.0 + (k * 64) as f32, -27.0 + (k * 32) as f32),
                Vec2::new(13.0 + (k * 64) as f32, -27.0 + (k * 32) as f32),
            );
            let (sx, sy) = tex_coords(0.0, &shifted, 64, 32);
            assert_eq!((sx, sy), (bx, by), "wrap differs for k={}", k);
        }
    }

    #[test]
    fn test_render_layer_deterministic() {
        let layer = Layer::new(
            Texture::checkerboard(64, 64, Color::WHITE, Color::BLACK),
            false,
        );
        let f = test_camera().frustum();

        let mut fb1 = Framebuffer::new(40, 20);
        let mut fb2 = Framebuffer::new(40, 20);
        render_layer(&mut fb1, &layer, &f);
        render_layer(&mut fb2, &layer, &f);
        assert_eq!(fb1.pixels, fb2.pixels);
    }

    #[test]
    fn test_flip_rows_mirrors_layer() {
        let tex = Texture::checkerboard(64, 64, Color::WHITE, Color::BLACK);
        let f = test_camera().frustum();

        let mut ground = Framebuffer::new(40, 20);
        let mut sky = Framebuffer::new(40, 20);
        render_layer(&mut ground, &Layer::new(tex.clone(), false), &f);
        render_layer(&mut sky, &Layer::new(tex, true), &f);

        // Row y of the ground equals row H-1-y of the sky
        for y in 0..20 {
            let g = &ground.pixels[y * 40 * 4..(y + 1) * 40 * 4];
            let s = &sky.pixels[(19 - y) * 40 * 4..(20 - y) * 40 * 4];
            assert_eq!(g, s, "rows differ at y={}", y);
        }
    }

    #[test]
    fn test_framebuffer_clear() {
        let mut fb = Framebuffer::new(4, 4);
        fb.clear(Color::new(1, 2, 3));
        assert_eq!(&fb.pixels[0..4], &[1, 2, 3, 255]);
        assert_eq!(&fb.pixels[60..64], &[1, 2, 3, 255]);
    }
}
