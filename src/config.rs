//! Scene configuration
//!
//! Uses RON (Rusty Object Notation) for a human-editable scene file:
//! layer texture paths, the starting camera pose and movement speeds.
//! A missing file is not an error (defaults apply); a malformed one is.

use crate::mode7::Vec2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default scene file path
pub const SCENE_PATH: &str = "assets/scene.ron";

/// Error type for scene loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

/// Scene description: what the two planes are made of and where the
/// camera starts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Ground texture path; None uses a procedural checkerboard
    pub ground_texture: Option<String>,
    /// Sky texture path; None uses a procedural banded sky
    pub sky_texture: Option<String>,
    pub camera_position: Vec2,
    pub camera_heading: f32,
    pub camera_height: f32,
    /// World units per forward/backward tick
    pub move_speed: f32,
    /// Degrees per turn tick
    pub turn_speed: f32,
    /// Height units per raise/lower tick
    pub climb_speed: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            ground_texture: None,
            sky_texture: None,
            camera_position: Vec2::new(150.0, 150.0),
            camera_heading: 0.0,
            camera_height: 16.0,
            move_speed: 3.0,
            turn_speed: 2.0,
            climb_speed: 0.5,
        }
    }
}

/// Load a scene config from a RON file
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<SceneConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: SceneConfig = ron::from_str(&contents)?;
    Ok(config)
}

/// Load the scene config if the file exists, otherwise fall back to defaults
pub fn load_scene_or_default<P: AsRef<Path>>(path: P) -> Result<SceneConfig, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        println!("No scene file at {}, using defaults", path.display());
        return Ok(SceneConfig::default());
    }
    let config = load_scene(path)?;
    println!("Loaded scene from {}", path.display());
    Ok(config)
}
