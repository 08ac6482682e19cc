//! Ray-traced image synthesis.
//!
//! One primary ray per pixel center, closest hit, local shading. No
//! recursion, no shadow rays, no anti-aliasing.

use std::time::Instant;

use facet_core::{Color, Scene};
use facet_math::{Camera, Interval, Ray};

use crate::bucket::DEFAULT_BUCKET_SIZE;
use crate::query::closest_hit;
use crate::shading::shade_hit;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Color for rays that hit nothing
    pub background: Color,
    /// Edge length of a parallel render tile
    pub bucket_size: u32,
    /// Flip normals that face away from the viewer before shading
    pub two_sided: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: Color::splat(0.25),
            bucket_size: DEFAULT_BUCKET_SIZE,
            two_sided: true,
        }
    }
}

impl RenderConfig {
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// Color seen along `ray`: the shaded closest hit, or the background.
pub fn trace_ray(ray: &Ray, scene: &Scene, config: &RenderConfig) -> Color {
    match closest_hit(ray, &scene.primitives) {
        Some((primitive, hit)) => {
            shade_hit(&hit, ray, &primitive.material, &scene.lights, config.two_sided)
        }
        None => config.background,
    }
}

/// Convert a color to 8-bit RGBA: `round(clamp(c, 0, 1) * 255)`, opaque.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let to_byte = |c: f32| (Interval::UNIT.clamp(c) * 255.0).round() as u8;
    [to_byte(color.x), to_byte(color.y), to_byte(color.z), 255]
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    /// Row-major, top row first
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Color::ZERO)
    }

    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| color_to_rgba(*c)).collect()
    }
}

/// Render the entire scene to an image buffer on the calling thread.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let (width, height) = (config.width, config.height);
    log::info!(
        "Rendering {}x{} ({} primitives, {} lights)",
        width,
        height,
        scene.primitives.len(),
        scene.lights.len()
    );
    let start = Instant::now();

    let mut image = ImageBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let ray = camera.primary_ray(x, y, width, height);
            image.set(x, y, trace_ray(&ray, scene, config));
        }
    }

    log::info!("Render finished in {:.2?}", start.elapsed());
    image
}
