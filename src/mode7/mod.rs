//! Mode 7 style plane renderer
//!
//! Renders a pseudo-3D ground plane and sky from top-down 2D textures:
//! - Per-scanline perspective projection between near/far frustum edges
//! - Inverse-depth interpolation (no affine "zoom" at the horizon)
//! - Toroidal texture wrapping (planes tile forever)
//! - Nearest-neighbor sampling, one projection per row

mod camera;
mod math;
mod render;
mod types;

pub use camera::*;
pub use math::*;
pub use render::*;
pub use types::*;

/// Off-screen buffer dimensions (per layer, decoupled from window size)
pub const BUFFER_WIDTH: usize = 400;
pub const BUFFER_HEIGHT: usize = 200;

/// On-screen scale factor for the composited buffers
pub const PIXEL_SCALE: usize = 2;
