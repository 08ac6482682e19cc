//! Ray-triangle intersection.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use facet_core::Triangle;
use facet_math::Ray;

use crate::barycentric::Barycentric;
use crate::hit::{Hit, Hittable, RAY_EPSILON, TRIANGLE_PARALLEL_EPSILON};

/// Möller-Trumbore intersection that also reports the barycentric weights
/// of the hit point for `(v0, v1, v2)`.
///
/// The normal follows the vertex winding and is not flipped toward the ray.
pub fn intersect_triangle(triangle: &Triangle, ray: &Ray) -> Option<(Hit, Barycentric)> {
    let (edge1, edge2) = triangle.edges();

    let h = ray.direction().cross(edge2);
    let a = edge1.dot(h);

    // Ray is parallel to triangle (or the triangle has no area)
    if a.abs() <= TRIANGLE_PARALLEL_EPSILON * edge1.length() * h.length() {
        return None;
    }

    let f = 1.0 / a;
    let s = ray.origin() - triangle.v0;
    let u = f * s.dot(h);

    // Check if intersection is outside triangle (u parameter)
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * ray.direction().dot(q);

    // Check if intersection is outside triangle (v parameter)
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    // Only intersections strictly in front of the origin count
    let t = f * edge2.dot(q);
    if t <= RAY_EPSILON {
        return None;
    }

    let normal = edge1.cross(edge2).normalize_or_zero();
    Some((Hit::new(ray, t, normal), Barycentric::new(1.0 - u - v, u, v)))
}

impl Hittable for Triangle {
    #[inline]
    fn hit(&self, ray: &Ray) -> Option<Hit> {
        intersect_triangle(self, ray).map(|(hit, _)| hit)
    }
}
