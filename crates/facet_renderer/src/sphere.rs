//! Ray-sphere intersection.

use facet_core::Sphere;
use facet_math::Ray;

use crate::hit::{Hit, Hittable};

impl Hittable for Sphere {
    /// Solves `a t² + b t + c = 0` for the ray against the sphere surface.
    ///
    /// The near root is used when it is in front of the origin, otherwise
    /// the far root (the origin is inside the sphere).
    fn hit(&self, ray: &Ray) -> Option<Hit> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        // Zero direction: every t lands on the origin
        if a == 0.0 {
            return None;
        }

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let t_near = (-b - sqrtd) / (2.0 * a);
        let t_far = (-b + sqrtd) / (2.0 * a);

        let t = if t_near > 0.0 {
            t_near
        } else if t_far > 0.0 {
            t_far
        } else {
            return None;
        };

        let point = ray.at(t);
        Some(Hit {
            distance: t,
            point,
            normal: self.normal_at(point),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_math::Vec3;

    #[test]
    fn test_sphere_hit_front() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, -4.0), Vec3::Z);

        let hit = sphere.hit(&ray).unwrap();
        assert!((hit.distance - 3.0).abs() < 1e-6);
        assert!((hit.normal - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5);

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(sphere.hit(&ray).is_none());

        // Ray passing beside it
        let ray = Ray::new(Vec3::new(2.0, 0.0, 0.0), -Vec3::Z);
        assert!(sphere.hit(&ray).is_none());
    }

    #[test]
    fn test_sphere_behind_ray() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 4.0), Vec3::Z);
        assert!(sphere.hit(&ray).is_none());
    }

    #[test]
    fn test_sphere_origin_inside_hits_exit() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let hit = sphere.hit(&ray).unwrap();
        assert!((hit.distance - 2.0).abs() < 1e-6);
        // Normal still points out of the sphere, along the ray
        assert!((hit.normal - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn test_sphere_tangent_ray() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0);
        let ray = Ray::new(Vec3::new(1.0, 0.0, -5.0), Vec3::Z);

        let hit = sphere.hit(&ray).unwrap();
        assert!((hit.distance - 5.0).abs() < 1e-5);
        assert!((hit.point - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn test_sphere_unnormalized_direction() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, -4.0), Vec3::new(0.0, 0.0, 2.0));

        // Parameter is in units of the stored direction
        let hit = sphere.hit(&ray).unwrap();
        assert!((hit.distance - 1.5).abs() < 1e-6);
        assert!((hit.point - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_sphere_hit_point_on_surface() {
        let sphere = Sphere::new(Vec3::new(1.0, -2.0, 3.0), 1.5);
        let origin = Vec3::new(-4.0, 1.0, -2.0);

        for target in [
            Vec3::new(1.0, -2.0, 3.0),
            Vec3::new(1.5, -1.5, 3.2),
            Vec3::new(0.2, -2.9, 2.5),
            Vec3::new(1.8, -1.2, 3.3),
        ] {
            let ray = Ray::through(origin, target);
            let hit = sphere.hit(&ray).unwrap();
            let radius = (ray.at(hit.distance) - sphere.center).length();
            assert!((radius - sphere.radius).abs() < 1e-4, "radius {radius}");
            assert!((hit.normal.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_zero_direction_never_hits() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::ZERO);
        assert!(sphere.hit(&ray).is_none());
    }
}
