//! Hit record and the Hittable trait for ray-primitive intersection.

use facet_core::{Primitive, Shape};
use facet_math::{Ray, Vec3};

/// Smallest accepted ray parameter.
pub const RAY_EPSILON: f32 = 1e-6;

/// Direction components smaller than this are treated as parallel to a
/// pair of box slab planes.
pub const PARALLEL_EPSILON: f32 = 1e-8;

/// A ray is parallel to a triangle's plane when the Möller-Trumbore
/// determinant is below this fraction of `|e1| * |d x e2|`. Relative, so
/// the test does not depend on the triangle's size.
pub const TRIANGLE_PARALLEL_EPSILON: f32 = 1e-7;

/// Record of a ray-primitive intersection.
///
/// Produced only for a successful intersection and consumed right away by
/// shading or picking; "no hit" is `None`, never an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Ray parameter of the intersection (always > 0)
    pub distance: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Unit surface normal. Outward for spheres and boxes, winding order
    /// for triangles; never flipped toward the ray.
    pub normal: Vec3,
}

impl Hit {
    pub fn new(ray: &Ray, distance: f32, normal: Vec3) -> Self {
        Self {
            distance,
            point: ray.at(distance),
            normal,
        }
    }

    /// True if the ray arrived on the side the normal points to.
    pub fn is_front_face(&self, ray: &Ray) -> bool {
        ray.direction().dot(self.normal) < 0.0
    }
}

/// Trait for geometry that can be hit by rays.
pub trait Hittable {
    /// Nearest intersection strictly in front of the ray origin, if any.
    fn hit(&self, ray: &Ray) -> Option<Hit>;
}

impl Hittable for Shape {
    fn hit(&self, ray: &Ray) -> Option<Hit> {
        match self {
            Shape::Sphere(sphere) => sphere.hit(ray),
            Shape::Box(aabox) => aabox.hit(ray),
            Shape::Triangle(triangle) => triangle.hit(ray),
        }
    }
}

impl Hittable for Primitive {
    #[inline]
    fn hit(&self, ray: &Ray) -> Option<Hit> {
        self.shape.hit(ray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_core::{AxisBox, Material, Sphere, Triangle};

    #[test]
    fn test_hit_point_on_ray() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -4.0), Vec3::Z);
        let hit = Hit::new(&ray, 3.0, -Vec3::Z);

        assert_eq!(hit.point, Vec3::new(0.0, 0.0, -1.0));
        assert!(hit.is_front_face(&ray));
    }

    #[test]
    fn test_shape_dispatch() {
        let ray = Ray::new(Vec3::new(0.2, 0.2, -5.0), Vec3::Z);

        let sphere: Shape = Sphere::new(Vec3::ZERO, 1.0).into();
        let aabox: Shape = AxisBox::cube(Vec3::ZERO, 2.0).into();
        let triangle: Shape = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y).into();

        assert!(sphere.hit(&ray).is_some());
        assert_eq!(aabox.hit(&ray).map(|h| h.distance), Some(4.0));
        assert_eq!(triangle.hit(&ray).map(|h| h.distance), Some(5.0));
    }

    #[test]
    fn test_primitive_delegates_to_shape() {
        let primitive = Primitive::sphere(Vec3::ZERO, 1.0, Material::default());
        let ray = Ray::new(Vec3::new(0.0, 0.0, -4.0), Vec3::Z);
        assert_eq!(primitive.hit(&ray), primitive.shape.hit(&ray));
    }
}
