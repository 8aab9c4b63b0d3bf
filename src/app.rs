//! Application state and per-frame phases
//!
//! One AppState owns the camera, both layers and their framebuffers.
//! The frame loop drives it in strict order: input, camera update,
//! composite, present. Nothing else mutates the camera.

use crate::config::SceneConfig;
use crate::mode7::{
    render_layer, Camera, Color, Framebuffer, Layer, Texture, BUFFER_HEIGHT, BUFFER_WIDTH,
    PIXEL_SCALE,
};
use macroquad::prelude::*;

pub struct AppState {
    pub camera: Camera,
    pub ground: Layer,
    pub sky: Layer,
    ground_fb: Framebuffer,
    sky_fb: Framebuffer,

    move_speed: f32,
    turn_speed: f32,
    climb_speed: f32,

    pub running: bool,
}

impl AppState {
    /// Build the render context from a scene config. Configured texture
    /// paths that fail to load are fatal; unconfigured layers fall back
    /// to procedural textures so the binary runs without assets.
    pub fn from_config(config: &SceneConfig) -> Result<Self, String> {
        let ground_tex = match &config.ground_texture {
            Some(path) => Texture::from_file(path)?,
            None => Texture::checkerboard(
                64,
                64,
                Color::new(96, 160, 72),
                Color::new(60, 110, 48),
            ),
        };
        println!(
            "Ground layer: {} ({}x{})",
            ground_tex.name, ground_tex.width, ground_tex.height
        );

        let sky_tex = match &config.sky_texture {
            Some(path) => Texture::from_file(path)?,
            None => Texture::sky_bands(64, 64, Color::new(16, 24, 64), Color::new(130, 170, 255)),
        };
        println!(
            "Sky layer: {} ({}x{})",
            sky_tex.name, sky_tex.width, sky_tex.height
        );

        Ok(Self {
            camera: Camera::new(
                config.camera_position,
                config.camera_heading,
                config.camera_height,
            ),
            ground: Layer::new(ground_tex, false),
            sky: Layer::new(sky_tex, true),
            ground_fb: Framebuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT),
            sky_fb: Framebuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT),
            move_speed: config.move_speed,
            turn_speed: config.turn_speed,
            climb_speed: config.climb_speed,
            running: true,
        })
    }

    /// Input phase: poll key state and mutate the camera pose.
    /// Height stays clamped by Camera::climb, so the projector never
    /// sees a degenerate frustum.
    pub fn handle_input(&mut self) {
        if is_key_down(KeyCode::W) {
            self.camera.climb(self.climb_speed);
        }
        if is_key_down(KeyCode::S) {
            self.camera.climb(-self.climb_speed);
        }
        if is_key_down(KeyCode::Left) {
            self.camera.turn(self.turn_speed);
        }
        if is_key_down(KeyCode::Right) {
            self.camera.turn(-self.turn_speed);
        }
        if is_key_down(KeyCode::Up) {
            self.camera.advance(self.move_speed);
        }
        if is_key_down(KeyCode::Down) {
            self.camera.advance(-self.move_speed);
        }
        if is_key_pressed(KeyCode::Escape) {
            self.running = false;
        }
    }

    /// Composite phase: recompute the frustum from the pose and fill
    /// both layer buffers (frustum is derived fresh every frame, never
    /// carried across)
    pub fn render(&mut self) {
        let frustum = self.camera.frustum();
        render_layer(&mut self.ground_fb, &self.ground, &frustum);
        render_layer(&mut self.sky_fb, &self.sky, &frustum);
    }

    /// Present phase: upload both buffers and draw them scaled, sky in
    /// the upper half of the window and ground in the lower half
    pub fn present(&self) {
        let w = (BUFFER_WIDTH * PIXEL_SCALE) as f32;
        let h = (BUFFER_HEIGHT * PIXEL_SCALE) as f32;

        let sky_tex = Texture2D::from_rgba8(
            self.sky_fb.width as u16,
            self.sky_fb.height as u16,
            &self.sky_fb.pixels,
        );
        sky_tex.set_filter(FilterMode::Nearest);
        draw_texture_ex(
            &sky_tex,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(Vec2::new(w, h)),
                ..Default::default()
            },
        );

        let ground_tex = Texture2D::from_rgba8(
            self.ground_fb.width as u16,
            self.ground_fb.height as u16,
            &self.ground_fb.pixels,
        );
        ground_tex.set_filter(FilterMode::Nearest);
        draw_texture_ex(
            &ground_tex,
            0.0,
            h,
            WHITE,
            DrawTextureParams {
                dest_size: Some(Vec2::new(w, h)),
                ..Default::default()
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_defaults() {
        let app = AppState::from_config(&SceneConfig::default()).unwrap();
        assert!((app.camera.height - 16.0).abs() < 0.001);
        assert!(!app.ground.flip_rows);
        assert!(app.sky.flip_rows);
        assert!(app.running);
    }

    #[test]
    fn test_from_config_missing_texture_is_fatal() {
        let config = SceneConfig {
            ground_texture: Some("assets/does-not-exist.png".to_string()),
            ..SceneConfig::default()
        };
        assert!(AppState::from_config(&config).is_err());
    }
}
