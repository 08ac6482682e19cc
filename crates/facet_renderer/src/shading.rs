//! Local illumination: Lambertian diffuse plus Blinn-Phong specular.

use facet_core::{Color, Material, PointLight};
use facet_math::{Interval, Ray, Vec3};

use crate::hit::Hit;

/// Color of a surface point lit by a set of point lights.
///
/// `normal` and `view_dir` are unit vectors; `view_dir` points from the
/// surface toward the viewer. Per light, with `L` the unit vector toward
/// the light and `H = normalize(L + V)`:
///
/// - diffuse = `kd * I * max(0, N·L)`
/// - specular = `ks * I * max(0, N·H)^shininess`, only when `N·L > 0`
///
/// The ambient term `ka * base_color` is added once. Channels are clamped
/// to `[0, 1]` after every light has been summed.
pub fn shade(
    point: Vec3,
    normal: Vec3,
    view_dir: Vec3,
    material: &Material,
    lights: &[PointLight],
) -> Color {
    let mut color = material.base_color * material.ambient;

    for light in lights {
        let to_light = (light.position - point).normalize_or_zero();
        let n_dot_l = normal.dot(to_light);
        if n_dot_l <= 0.0 || light.intensity <= 0.0 {
            // Facing away from the light: no diffuse, no highlight
            continue;
        }

        let diffuse = material.diffuse * light.intensity * n_dot_l;

        let halfway = (to_light + view_dir).normalize_or_zero();
        let n_dot_h = normal.dot(halfway).max(0.0);
        let specular = material.specular * light.intensity * n_dot_h.powf(material.shininess);

        color += light.color * (material.base_color * diffuse + material.specular_color * specular);
    }

    clamp_color(color)
}

/// Shade a hit seen along `ray`.
///
/// With `two_sided` set, a normal facing away from the viewer is flipped
/// before lighting so back faces of triangles shade like front faces.
pub fn shade_hit(
    hit: &Hit,
    ray: &Ray,
    material: &Material,
    lights: &[PointLight],
    two_sided: bool,
) -> Color {
    let view_dir = (-ray.direction()).normalize_or_zero();
    let normal = if two_sided && hit.normal.dot(view_dir) < 0.0 {
        -hit.normal
    } else {
        hit.normal
    };

    shade(hit.point, normal, view_dir, material, lights)
}

/// Clamp each channel to [0, 1].
#[inline]
fn clamp_color(color: Color) -> Color {
    Color::new(
        Interval::UNIT.clamp(color.x),
        Interval::UNIT.clamp(color.y),
        Interval::UNIT.clamp(color.z),
    )
}
