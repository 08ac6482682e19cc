//! facet Renderer - software geometric rendering core.
//!
//! Two independent paths share the same geometric and lighting inputs:
//!
//! - **Ray path**: analytic ray/primitive intersection, closest-hit scene
//!   query (also used for picking), Blinn-Phong shading.
//! - **Raster path**: barycentric triangle rasterization with per-vertex
//!   color interpolation (Gouraud shading).
//!
//! Every query is a pure function of its arguments. Scenes are read-only
//! while a query runs, so image synthesis parallelizes per bucket without
//! locks.

mod aabox;
mod barycentric;
mod bucket;
mod hit;
mod query;
mod raster;
mod renderer;
mod shading;
mod sphere;
mod triangle;

pub use barycentric::{barycentric, Barycentric};
pub use bucket::{generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use hit::{Hit, Hittable, PARALLEL_EPSILON, RAY_EPSILON, TRIANGLE_PARALLEL_EPSILON};
pub use query::{closest_hit, closest_hit_index, pick};
pub use raster::{
    draw_line, draw_triangle, line, rasterize, FillRule, Fragment, Fragments, Line, ScreenTriangle,
    RASTER_EPSILON,
};
pub use renderer::{color_to_rgba, render, trace_ray, ImageBuffer, RenderConfig};
pub use shading::{shade, shade_hit};
pub use triangle::intersect_triangle;

/// Re-export the scene description and math types used in signatures
pub use facet_core::{AxisBox, Color, Material, PointLight, Primitive, Scene, Shape, Sphere, Triangle};
pub use facet_math::{Camera, Interval, Ray, Vec2, Vec3};
