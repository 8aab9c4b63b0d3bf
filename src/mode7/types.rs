//! Core types for the plane renderer

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to [u8; 4] for framebuffer
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Simple texture (array of colors), immutable once loaded
#[derive(Debug, Clone)]
pub struct Texture {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Color>,
    pub name: String,
}

impl Texture {
    /// Load texture from an image file (PNG, JPEG or BMP)
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, String> {
        use image::GenericImageView;

        let path = path.as_ref();
        let img = image::open(path)
            .map_err(|e| format!("Failed to load {}: {}", path.display(), e))?;

        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(format!("Empty texture: {}", path.display()));
        }
        let rgba = img.to_rgba8();

        let pixels: Vec<Color> = rgba
            .pixels()
            .map(|p| Color::with_alpha(p[0], p[1], p[2], p[3]))
            .collect();

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self {
            width: width as usize,
            height: height as usize,
            pixels,
            name,
        })
    }

    /// Create a checkerboard test texture
    pub fn checkerboard(width: usize, height: usize, color1: Color, color2: Color) -> Self {
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let checker = ((x / 4) + (y / 4)) % 2 == 0;
                pixels.push(if checker { color1 } else { color2 });
            }
        }
        Self { width, height, pixels, name: "checkerboard".to_string() }
    }

    /// Create a banded sky texture fading from `top` to `horizon`
    pub fn sky_bands(width: usize, height: usize, top: Color, horizon: Color) -> Self {
        const BANDS: f32 = 8.0;
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            let t = ((y as f32 / height as f32) * BANDS).floor() / BANDS;
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
            let c = Color::new(mix(top.r, horizon.r), mix(top.g, horizon.g), mix(top.b, horizon.b));
            for _ in 0..width {
                pixels.push(c);
            }
        }
        Self { width, height, pixels, name: "sky".to_string() }
    }

    /// Get pixel at x,y coordinates
    pub fn pixel(&self, x: usize, y: usize) -> Color {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x]
        } else {
            Color::BLACK
        }
    }
}

/// One renderable plane: a source texture plus its compositing treatment.
/// When `flip_rows` is set the destination row order is reversed, which
/// mirrors the layer vertically (used by the sky).
#[derive(Debug, Clone)]
pub struct Layer {
    pub texture: Texture,
    pub flip_rows: bool,
}

impl Layer {
    pub fn new(texture: Texture, flip_rows: bool) -> Self {
        Self { texture, flip_rows }
    }
}
