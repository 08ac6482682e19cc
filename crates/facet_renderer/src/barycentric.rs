//! Barycentric weights of a point relative to a 2D triangle.

use facet_core::Color;
use facet_math::Vec2;

/// Weights `(alpha, beta, gamma)` for vertices `(v0, v1, v2)`.
///
/// For points in the triangle's plane the weights sum to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Barycentric {
    pub alpha: f32,
    pub beta: f32,
    pub gamma: f32,
}

impl Barycentric {
    pub fn new(alpha: f32, beta: f32, gamma: f32) -> Self {
        Self { alpha, beta, gamma }
    }

    /// Weights as an array in vertex order.
    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.alpha, self.beta, self.gamma]
    }

    /// True if every weight is at least `-epsilon`.
    #[inline]
    pub fn is_inside(&self, epsilon: f32) -> bool {
        self.alpha >= -epsilon && self.beta >= -epsilon && self.gamma >= -epsilon
    }

    /// `alpha * c0 + beta * c1 + gamma * c2`, unclamped.
    #[inline]
    pub fn interpolate(&self, colors: &[Color; 3]) -> Color {
        colors[0] * self.alpha + colors[1] * self.beta + colors[2] * self.gamma
    }
}

/// Weights of `p` relative to triangle `(v0, v1, v2)`.
///
/// `p - v0` is projected onto the edge basis `(v2 - v0, v1 - v0)`; the
/// coefficient along `v1 - v0` is `beta`, along `v2 - v0` is `gamma`, and
/// `alpha = 1 - beta - gamma`. Returns `None` for a zero-area triangle.
pub fn barycentric(p: Vec2, v0: Vec2, v1: Vec2, v2: Vec2) -> Option<Barycentric> {
    let e2 = v2 - v0;
    let e1 = v1 - v0;
    let w = p - v0;

    let d22 = e2.dot(e2);
    let d21 = e2.dot(e1);
    let d11 = e1.dot(e1);
    let d2w = e2.dot(w);
    let d1w = e1.dot(w);

    // denom = |e1|²|e2|² sin²θ; relative test catches collinear vertices
    let scale = d22 * d11;
    let denom = d22 * d11 - d21 * d21;
    if scale <= 0.0 || denom.abs() <= scale * 1e-7 {
        return None;
    }

    let gamma = (d11 * d2w - d21 * d1w) / denom;
    let beta = (d22 * d1w - d21 * d2w) / denom;

    Some(Barycentric::new(1.0 - beta - gamma, beta, gamma))
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Vec2 = Vec2::new(200.0, 120.0);
    const B: Vec2 = Vec2::new(120.0, 420.0);
    const C: Vec2 = Vec2::new(520.0, 380.0);

    #[test]
    fn test_weights_at_vertices() {
        assert_eq!(barycentric(A, A, B, C), Some(Barycentric::new(1.0, 0.0, 0.0)));
        assert_eq!(barycentric(B, A, B, C), Some(Barycentric::new(0.0, 1.0, 0.0)));
        assert_eq!(barycentric(C, A, B, C), Some(Barycentric::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_weights_sum_to_one() {
        for p in [
            Vec2::new(250.0, 300.0),
            Vec2::new(300.5, 350.5),
            Vec2::new(180.0, 390.0),
            Vec2::new(0.0, 0.0),
        ] {
            let w = barycentric(p, A, B, C).unwrap();
            assert!((w.alpha + w.beta + w.gamma - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_weights_reconstruct_point() {
        let p = Vec2::new(280.0, 330.0);
        let w = barycentric(p, A, B, C).unwrap();
        let q = A * w.alpha + B * w.beta + C * w.gamma;
        assert!((q - p).length() < 1e-3);
        assert!(w.is_inside(0.0));
    }

    #[test]
    fn test_centroid_interpolates_average() {
        let v0 = Vec2::new(0.0, 0.0);
        let v1 = Vec2::new(1.0, 0.0);
        let v2 = Vec2::new(0.0, 1.0);
        let w = barycentric(Vec2::splat(1.0 / 3.0), v0, v1, v2).unwrap();

        for weight in w.to_array() {
            assert!((weight - 1.0 / 3.0).abs() < 1e-6);
        }

        let colors = [Color::X, Color::Y, Color::Z];
        let color = w.interpolate(&colors);
        assert!((color - Color::splat(1.0 / 3.0)).length() < 1e-6);
    }

    #[test]
    fn test_outside_point_has_negative_weight() {
        let w = barycentric(Vec2::new(600.0, 100.0), A, B, C).unwrap();
        assert!(!w.is_inside(1e-6));
    }

    #[test]
    fn test_degenerate_triangle() {
        let v0 = Vec2::new(0.0, 0.0);
        let v1 = Vec2::new(1.0, 1.0);
        let v2 = Vec2::new(3.0, 3.0);
        assert!(barycentric(Vec2::new(0.5, 0.5), v0, v1, v2).is_none());
        assert!(barycentric(Vec2::ZERO, v0, v0, v0).is_none());
    }
}
