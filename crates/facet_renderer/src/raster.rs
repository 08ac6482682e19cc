//! Triangle rasterization with per-vertex color interpolation (Gouraud),
//! and Bresenham line drawing.
//!
//! Pixel `(x, y)` is sampled at its center `(x + 0.5, y + 0.5)` in window
//! coordinates (origin top-left, y down). A pixel is covered when the
//! barycentric weights of its center pass the [`FillRule`].

use facet_core::Color;
use facet_math::{IVec2, Interval, UVec2, Vec2};

use crate::barycentric::{barycentric, Barycentric};
use crate::renderer::ImageBuffer;

/// Tolerance on barycentric weights for boundary pixels.
pub const RASTER_EPSILON: f32 = 1e-6;

/// Policy for pixel centers that fall on a triangle edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    /// Every weight `>= -RASTER_EPSILON`. Pixels on an edge shared by two
    /// triangles are drawn by both.
    #[default]
    Inclusive,
    /// Edge pixels belong only to top and left edges, so a shared edge
    /// is drawn exactly once.
    TopLeft,
}

/// A triangle in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTriangle {
    pub v0: Vec2,
    pub v1: Vec2,
    pub v2: Vec2,
}

impl ScreenTriangle {
    pub fn new(v0: Vec2, v1: Vec2, v2: Vec2) -> Self {
        Self { v0, v1, v2 }
    }

    pub fn vertices(&self) -> [Vec2; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Barycentric weights of `p`, `None` if the triangle has no area.
    #[inline]
    pub fn weights_at(&self, p: Vec2) -> Option<Barycentric> {
        barycentric(p, self.v0, self.v1, self.v2)
    }

    pub fn is_degenerate(&self) -> bool {
        self.weights_at(self.v0).is_none()
    }

    /// Inclusive pixel range `(min, max)` that can contain covered pixel
    /// centers, clipped to a `width` x `height` raster.
    ///
    /// `None` if the triangle lies entirely outside the raster.
    pub fn pixel_bounds(&self, width: u32, height: u32) -> Option<(UVec2, UVec2)> {
        if width == 0 || height == 0 {
            return None;
        }

        let lo = self.v0.min(self.v1).min(self.v2).floor();
        let hi = self.v0.max(self.v1).max(self.v2).floor();
        if !lo.is_finite() || !hi.is_finite() {
            return None;
        }

        let last = Vec2::new((width - 1) as f32, (height - 1) as f32);
        if hi.x < 0.0 || hi.y < 0.0 || lo.x > last.x || lo.y > last.y {
            return None;
        }

        let min = UVec2::new(lo.x.max(0.0) as u32, lo.y.max(0.0) as u32);
        let max = UVec2::new((hi.x as u32).min(width - 1), (hi.y as u32).min(height - 1));
        Some((min, max))
    }

    /// For each weight, whether the edge opposite its vertex is a top or
    /// left edge. Independent of winding.
    fn top_left_edges(&self) -> [bool; 3] {
        let [a, b, c] = self.vertices();
        [
            is_top_left(b, c, a),
            is_top_left(c, a, b),
            is_top_left(a, b, c),
        ]
    }
}

/// Edge `(a, b)` with the third vertex `c`: top if horizontal with the
/// interior below it, left if the interior is to its right.
fn is_top_left(a: Vec2, b: Vec2, c: Vec2) -> bool {
    let dy = b.y - a.y;
    if dy == 0.0 {
        return c.y > a.y;
    }
    // Horizontal offset of c from the edge line, scaled by dy²
    let offset = (c.x - a.x) * dy - (c.y - a.y) * (b.x - a.x);
    offset * dy > 0.0
}

/// One covered pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fragment {
    pub x: u32,
    pub y: u32,
    /// Interpolated color, clamped to `[0, 1]`
    pub color: Color,
    pub weights: Barycentric,
}

/// Iterator over the fragments of one triangle, row by row.
#[derive(Debug, Clone)]
pub struct Fragments {
    triangle: ScreenTriangle,
    colors: [Color; 3],
    fill_rule: FillRule,
    owned_edges: [bool; 3],
    bounds: Option<(UVec2, UVec2)>,
    cursor: UVec2,
}

impl Fragments {
    fn empty(triangle: ScreenTriangle, colors: [Color; 3], fill_rule: FillRule) -> Self {
        Self {
            triangle,
            colors,
            fill_rule,
            owned_edges: [false; 3],
            bounds: None,
            cursor: UVec2::ZERO,
        }
    }

    fn covers(&self, weights: &Barycentric) -> bool {
        match self.fill_rule {
            FillRule::Inclusive => weights.is_inside(RASTER_EPSILON),
            FillRule::TopLeft => weights
                .to_array()
                .iter()
                .zip(self.owned_edges)
                .all(|(&w, owned)| w > RASTER_EPSILON || (owned && w >= -RASTER_EPSILON)),
        }
    }

    fn fragment_at(&self, x: u32, y: u32) -> Option<Fragment> {
        let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
        let weights = self.triangle.weights_at(center)?;
        if !self.covers(&weights) {
            return None;
        }

        let color = weights.interpolate(&self.colors);
        Some(Fragment {
            x,
            y,
            color: Color::new(
                Interval::UNIT.clamp(color.x),
                Interval::UNIT.clamp(color.y),
                Interval::UNIT.clamp(color.z),
            ),
            weights,
        })
    }
}

impl Iterator for Fragments {
    type Item = Fragment;

    fn next(&mut self) -> Option<Fragment> {
        let (min, max) = self.bounds?;

        while self.cursor.y <= max.y {
            let UVec2 { x, y } = self.cursor;
            if x == max.x {
                self.cursor = UVec2::new(min.x, y + 1);
            } else {
                self.cursor.x += 1;
            }

            if let Some(fragment) = self.fragment_at(x, y) {
                return Some(fragment);
            }
        }

        None
    }
}

/// Fragments covering `triangle` on a `width` x `height` raster, colored
/// by interpolating `colors` (one per vertex).
///
/// A zero-area triangle yields nothing.
pub fn rasterize(
    triangle: ScreenTriangle,
    colors: [Color; 3],
    width: u32,
    height: u32,
    fill_rule: FillRule,
) -> Fragments {
    if triangle.is_degenerate() {
        log::debug!("Skipping degenerate triangle {:?}", triangle.vertices());
        return Fragments::empty(triangle, colors, fill_rule);
    }

    let bounds = triangle.pixel_bounds(width, height);
    Fragments {
        triangle,
        colors,
        fill_rule,
        owned_edges: triangle.top_left_edges(),
        bounds,
        cursor: bounds.map_or(UVec2::ZERO, |(min, _)| min),
    }
}

/// Rasterize `triangle` into `image`, returning the number of pixels
/// written.
pub fn draw_triangle(
    image: &mut ImageBuffer,
    triangle: ScreenTriangle,
    colors: [Color; 3],
    fill_rule: FillRule,
) -> usize {
    let mut count = 0;
    for fragment in rasterize(triangle, colors, image.width, image.height, fill_rule) {
        image.set(fragment.x, fragment.y, fragment.color);
        count += 1;
    }
    count
}

/// Iterator over the pixels of a line segment.
#[derive(Debug, Clone)]
pub struct Line {
    x: i64,
    y: i64,
    end: (i64, i64),
    dx: i64,
    dy: i64,
    step: (i64, i64),
    err: i64,
    width: u32,
    height: u32,
    done: bool,
}

impl Line {
    fn advance(&mut self) {
        if (self.x, self.y) == self.end {
            self.done = true;
            return;
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.step.0;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.step.1;
        }
    }

    fn on_raster(&self) -> Option<UVec2> {
        let x = u32::try_from(self.x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(self.y).ok().filter(|&y| y < self.height)?;
        Some(UVec2::new(x, y))
    }
}

impl Iterator for Line {
    type Item = UVec2;

    fn next(&mut self) -> Option<UVec2> {
        while !self.done {
            let pixel = self.on_raster();
            self.advance();
            if pixel.is_some() {
                return pixel;
            }
        }
        None
    }
}

/// Pixels of the segment from `p0` to `p1`, both endpoints included, in
/// order from `p0`. Integer Bresenham: one pixel per step along the major
/// axis. Pixels outside a `width` x `height` raster are skipped.
pub fn line(p0: IVec2, p1: IVec2, width: u32, height: u32) -> Line {
    let (x0, y0) = (i64::from(p0.x), i64::from(p0.y));
    let (x1, y1) = (i64::from(p1.x), i64::from(p1.y));
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();

    Line {
        x: x0,
        y: y0,
        end: (x1, y1),
        dx,
        dy,
        step: (if x0 < x1 { 1 } else { -1 }, if y0 < y1 { 1 } else { -1 }),
        err: dx - dy,
        width,
        height,
        done: false,
    }
}

/// Draw a solid line into `image`, returning the number of pixels written.
pub fn draw_line(image: &mut ImageBuffer, p0: IVec2, p1: IVec2, color: Color) -> usize {
    let mut count = 0;
    for pixel in line(p0, p1, image.width, image.height) {
        image.set(pixel.x, pixel.y, color);
        count += 1;
    }
    count
}
