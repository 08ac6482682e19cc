// Re-export glam for convenience
pub use glam::*;

// facet math types
mod camera;
mod interval;
mod ray;

pub use camera::Camera;
pub use interval::Interval;
pub use ray::Ray;
