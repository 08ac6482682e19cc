//! Ray-box intersection using the slab method.

use facet_core::AxisBox;
use facet_math::{Interval, Ray, Vec3};

use crate::hit::{Hit, Hittable, PARALLEL_EPSILON};

impl Hittable for AxisBox {
    /// Narrows the ray parameter window one axis at a time.
    ///
    /// The hit is the entry parameter when it lies in front of the origin,
    /// otherwise the exit parameter (origin inside the box). The normal is
    /// the outward unit axis of the face that produced the chosen parameter.
    fn hit(&self, ray: &Ray) -> Option<Hit> {
        let origin = ray.origin();
        let direction = ray.direction();
        let (lo, hi) = (self.min(), self.max());

        let mut ray_t = Interval::UNIVERSE;
        let mut enter_axis = None;
        let mut exit_axis = None;

        for axis in 0..3 {
            let o = origin[axis];
            let d = direction[axis];

            if d.abs() < PARALLEL_EPSILON {
                // Parallel to this pair of planes: inside the slab or never
                if o < lo[axis] || o > hi[axis] {
                    return None;
                }
                continue;
            }

            let mut t0 = (lo[axis] - o) / d;
            let mut t1 = (hi[axis] - o) / d;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }

            if t0 > ray_t.min {
                ray_t.min = t0;
                enter_axis = Some(axis);
            }
            if t1 < ray_t.max {
                ray_t.max = t1;
                exit_axis = Some(axis);
            }
            if ray_t.is_empty() {
                return None;
            }
        }

        // Entirely behind the ray
        if ray_t.max < 0.0 {
            return None;
        }

        let (distance, axis, entering) = if ray_t.min > 0.0 {
            (ray_t.min, enter_axis, true)
        } else {
            (ray_t.max, exit_axis, false)
        };

        // No axis recorded only when the direction is zero
        let axis = axis?;
        if distance <= 0.0 {
            return None;
        }

        // Entering along +axis crosses the min face, leaving crosses the max face
        let sign = if (direction[axis] > 0.0) == entering { -1.0 } else { 1.0 };
        let mut normal = Vec3::ZERO;
        normal[axis] = sign;

        Some(Hit::new(ray, distance, normal))
    }
}
