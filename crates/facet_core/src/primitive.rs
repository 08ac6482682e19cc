//! The closed set of geometric primitives.
//!
//! Every primitive is immutable value data. The variant set is fixed at
//! compile time: code that dispatches over [`Shape`] matches exhaustively,
//! so an unrecognized primitive kind cannot reach the renderer. Scene
//! documents naming an unknown `type` are rejected when parsed.

use facet_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::Material;

/// A sphere given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    /// Outward unit normal at a point on the surface.
    #[inline]
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize_or_zero()
    }
}

/// An axis-aligned box given by its center and half extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBox {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl AxisBox {
    /// Create a new box. Negative half extents are folded to their magnitude.
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents: half_extents.abs(),
        }
    }

    /// A cube with the given edge length.
    pub fn cube(center: Vec3, size: f32) -> Self {
        Self::new(center, Vec3::splat(size * 0.5))
    }

    /// Minimum corner.
    #[inline]
    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents
    }

    /// Maximum corner.
    #[inline]
    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents
    }
}

/// A triangle given by three vertices.
///
/// The face normal follows the vertex winding:
/// `normalize((v1 - v0) × (v2 - v0))`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self { v0, v1, v2 }
    }

    /// Edge vectors `(v1 - v0, v2 - v0)`.
    #[inline]
    pub fn edges(&self) -> (Vec3, Vec3) {
        (self.v1 - self.v0, self.v2 - self.v0)
    }

    /// Unit face normal. Zero for a degenerate triangle.
    pub fn normal(&self) -> Vec3 {
        let (e1, e2) = self.edges();
        e1.cross(e2).normalize_or_zero()
    }

    /// Surface area.
    pub fn area(&self) -> f32 {
        let (e1, e2) = self.edges();
        0.5 * e1.cross(e2).length()
    }

    pub fn centroid(&self) -> Vec3 {
        (self.v0 + self.v1 + self.v2) / 3.0
    }
}

/// Geometry of a primitive, tagged by kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Sphere(Sphere),
    Box(AxisBox),
    Triangle(Triangle),
}

impl Shape {
    /// Short name of the variant, as used in scene documents.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Sphere(_) => "sphere",
            Shape::Box(_) => "box",
            Shape::Triangle(_) => "triangle",
        }
    }

    /// Axis-aligned bounds as `(min, max)`.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        match self {
            Shape::Sphere(s) => {
                let r = Vec3::splat(s.radius);
                (s.center - r, s.center + r)
            }
            Shape::Box(b) => (b.min(), b.max()),
            Shape::Triangle(t) => (t.v0.min(t.v1).min(t.v2), t.v0.max(t.v1).max(t.v2)),
        }
    }

    /// Check that the geometry can be intersected meaningfully.
    pub fn check(&self) -> Result<(), String> {
        match self {
            Shape::Sphere(s) => {
                if !s.center.is_finite() {
                    return Err(format!("sphere center must be finite, got {}", s.center));
                }
                if s.radius.is_nan() || s.radius <= 0.0 {
                    return Err(format!("sphere radius must be > 0, got {}", s.radius));
                }
            }
            Shape::Box(b) => {
                if !b.center.is_finite() {
                    return Err(format!("box center must be finite, got {}", b.center));
                }
                if !b.half_extents.is_finite() || b.half_extents.min_element() <= 0.0 {
                    return Err(format!("box half extents must be > 0, got {}", b.half_extents));
                }
            }
            Shape::Triangle(t) => {
                if !(t.v0.is_finite() && t.v1.is_finite() && t.v2.is_finite()) {
                    return Err("triangle vertices must be finite".to_string());
                }
                // Zero-area triangles are legal: they simply never get hit.
            }
        }
        Ok(())
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<AxisBox> for Shape {
    fn from(aabox: AxisBox) -> Self {
        Shape::Box(aabox)
    }
}

impl From<Triangle> for Shape {
    fn from(triangle: Triangle) -> Self {
        Shape::Triangle(triangle)
    }
}

/// A shape paired with the material it is shaded with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    #[serde(flatten)]
    pub shape: Shape,
    #[serde(default)]
    pub material: Material,
}

impl Primitive {
    pub fn new(shape: impl Into<Shape>, material: Material) -> Self {
        Self {
            shape: shape.into(),
            material,
        }
    }

    pub fn sphere(center: Vec3, radius: f32, material: Material) -> Self {
        Self::new(Sphere::new(center, radius), material)
    }

    pub fn aabox(center: Vec3, half_extents: Vec3, material: Material) -> Self {
        Self::new(AxisBox::new(center, half_extents), material)
    }

    pub fn triangle(v0: Vec3, v1: Vec3, v2: Vec3, material: Material) -> Self {
        Self::new(Triangle::new(v0, v1, v2), material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_normal_points_outward() {
        let sphere = Sphere::new(Vec3::new(1.0, 0.0, 0.0), 2.0);
        let n = sphere.normal_at(Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(n, Vec3::Y);
    }

    #[test]
    fn test_sphere_negative_radius_clamped() {
        assert_eq!(Sphere::new(Vec3::ZERO, -1.0).radius, 0.0);
    }

    #[test]
    fn test_box_corners() {
        let aabox = AxisBox::cube(Vec3::new(0.0, 0.75, 0.0), 1.5);
        assert_eq!(aabox.min(), Vec3::new(-0.75, 0.0, -0.75));
        assert_eq!(aabox.max(), Vec3::new(0.75, 1.5, 0.75));
    }

    #[test]
    fn test_triangle_normal_follows_winding() {
        let ccw = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y);
        assert_eq!(ccw.normal(), Vec3::Z);

        let cw = Triangle::new(Vec3::ZERO, Vec3::Y, Vec3::X);
        assert_eq!(cw.normal(), -Vec3::Z);

        assert!((ccw.area() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_triangle_normal_is_zero() {
        let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::X * 2.0);
        assert_eq!(tri.normal(), Vec3::ZERO);
        assert!(Shape::from(tri).check().is_ok());
    }

    #[test]
    fn test_shape_bounds() {
        let (min, max) = Shape::from(Sphere::new(Vec3::ONE, 1.0)).bounds();
        assert_eq!(min, Vec3::ZERO);
        assert_eq!(max, Vec3::splat(2.0));

        let tri = Triangle::new(Vec3::new(-1.0, 0.0, 2.0), Vec3::X, Vec3::Y);
        let (min, max) = Shape::from(tri).bounds();
        assert_eq!(min, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(max, Vec3::new(1.0, 1.0, 2.0));
    }

    #[test]
    fn test_shape_check() {
        assert!(Shape::from(Sphere::new(Vec3::ZERO, 0.0)).check().is_err());
        assert!(Shape::from(AxisBox::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 1.0)))
            .check()
            .is_err());
        assert!(Shape::from(AxisBox::cube(Vec3::ZERO, 2.0)).check().is_ok());
    }

    #[test]
    fn test_primitive_json_tagging() {
        let json = r#"{"type": "sphere", "center": [0.0, 1.0, 0.0], "radius": 2.0}"#;
        let primitive: Primitive = serde_json::from_str(json).unwrap();

        assert_eq!(primitive.shape, Shape::Sphere(Sphere::new(Vec3::Y, 2.0)));
        assert_eq!(primitive.material, Material::default());
    }

    #[test]
    fn test_unknown_primitive_kind_is_rejected() {
        let json = r#"{"type": "cone", "center": [0.0, 0.0, 0.0], "radius": 1.0}"#;
        assert!(serde_json::from_str::<Primitive>(json).is_err());
    }
}
