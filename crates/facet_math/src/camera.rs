use glam::{Mat4, Vec3};

use crate::Ray;

/// Perspective camera described by an eye position and a look-at target.
///
/// The camera is a plain value: drivers rebuild or mutate it between
/// queries and pass it explicitly to whatever casts rays through it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Create a new camera
    pub fn new(position: Vec3, target: Vec3, aspect: f32) -> Self {
        Self {
            position,
            target,
            up: Vec3::Y,
            fov_y: 45.0_f32.to_radians(),
            aspect,
            near: 0.1,
            far: 300.0,
        }
    }

    /// Replace the vertical field of view (degrees).
    pub fn with_fov_degrees(mut self, fov_degrees: f32) -> Self {
        self.fov_y = fov_degrees.to_radians();
        self
    }

    /// Get the view matrix (world → camera space)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Get the projection matrix (camera → clip space)
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    /// Get the combined view-projection matrix
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Update aspect ratio (e.g., on window resize)
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Build a world-space ray through a window coordinate.
    ///
    /// `screen_x`/`screen_y` are in pixels with the origin at the top-left
    /// corner and y growing downward. The near-plane point (depth 0) and
    /// far-plane point (depth 1) are unprojected through the inverse
    /// view-projection; the ray starts on the near plane.
    pub fn unproject(&self, screen_x: f32, screen_y: f32, width: u32, height: u32) -> Ray {
        let ndc_x = 2.0 * screen_x / width.max(1) as f32 - 1.0;
        let ndc_y = 1.0 - 2.0 * screen_y / height.max(1) as f32;

        let inverse = self.view_projection_matrix().inverse();
        let near_point = inverse.project_point3(Vec3::new(ndc_x, ndc_y, 0.0));
        let far_point = inverse.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));

        Ray::new(near_point, (far_point - near_point).normalize_or_zero())
    }

    /// Primary ray through the center of pixel `(x, y)`.
    pub fn primary_ray(&self, x: u32, y: u32, width: u32, height: u32) -> Ray {
        self.unproject(x as f32 + 0.5, y as f32 + 0.5, width, height)
    }
}
