//! Closest-hit scene query and object picking.
//!
//! Brute-force linear scan: every primitive is tested, the smallest hit
//! distance wins, and equal distances keep the earlier primitive.

use facet_core::{Primitive, Scene};
use facet_math::{Camera, Ray};

use crate::hit::{Hit, Hittable};

/// Index and hit of the nearest primitive along `ray`.
pub fn closest_hit_index(ray: &Ray, primitives: &[Primitive]) -> Option<(usize, Hit)> {
    let mut closest: Option<(usize, Hit)> = None;

    for (index, primitive) in primitives.iter().enumerate() {
        if let Some(hit) = primitive.hit(ray) {
            // Strict comparison: on a tie the first primitive in scan order wins
            let closer = closest.map_or(true, |(_, best)| hit.distance < best.distance);
            if closer {
                closest = Some((index, hit));
            }
        }
    }

    closest
}

/// Nearest primitive along `ray` together with its hit.
pub fn closest_hit<'a>(ray: &Ray, primitives: &'a [Primitive]) -> Option<(&'a Primitive, Hit)> {
    closest_hit_index(ray, primitives).map(|(index, hit)| (&primitives[index], hit))
}

/// Pick the primitive under a window coordinate.
///
/// `screen_x`/`screen_y` are pixels from the top-left corner of a
/// `width` x `height` viewport seen through `camera`. Returns the index of
/// the picked primitive in `scene.primitives`.
pub fn pick(
    camera: &Camera,
    screen_x: f32,
    screen_y: f32,
    width: u32,
    height: u32,
    scene: &Scene,
) -> Option<(usize, Hit)> {
    let ray = camera.unproject(screen_x, screen_y, width, height);
    closest_hit_index(&ray, &scene.primitives)
}
