//! Mode 7 Engine: pseudo-3D plane renderer
//!
//! Renders a ground plane and sky from top-down textures, SNES Mode 7
//! style: per-scanline perspective projection of two infinite tiling
//! planes, driven by a camera with position, heading and height.
//!
//! Controls: arrows move and turn, W/S raise and lower, Escape quits.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod config;
mod mode7;

use app::AppState;
use macroquad::prelude::*;
use mode7::{BUFFER_HEIGHT, BUFFER_WIDTH, PIXEL_SCALE};

fn window_conf() -> Conf {
    Conf {
        window_title: "Pseudo 3D planes (Mode 7)".to_string(),
        window_width: (BUFFER_WIDTH * PIXEL_SCALE) as i32,
        // Sky buffer on top, ground buffer below
        window_height: (BUFFER_HEIGHT * PIXEL_SCALE * 2) as i32,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    println!("=== Mode 7 Engine v{} ===", VERSION);

    let scene = match config::load_scene_or_default(config::SCENE_PATH) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Failed to read {}: {}", config::SCENE_PATH, e);
            return;
        }
    };

    let mut app = match AppState::from_config(&scene) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Startup failed: {}", e);
            return;
        }
    };

    while app.running {
        app.handle_input();
        app.render();
        app.present();
        next_frame().await;
    }

    println!("Mode 7 Engine closing...");
}
