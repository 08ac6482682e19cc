//! Point lights.

use facet_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::Color;

/// A point light.
///
/// Lights in a scene form an unordered set; their contributions sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Color,
    /// Scalar multiplier on `color` (>= 0)
    pub intensity: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 6.0, 2.0),
            color: Color::ONE,
            intensity: 1.0,
        }
    }
}

impl PointLight {
    /// Create a point light. Negative intensities are clamped to zero.
    pub fn new(position: Vec3, color: Color, intensity: f32) -> Self {
        Self {
            position,
            color,
            intensity: intensity.max(0.0),
        }
    }

    /// A white light of unit intensity.
    pub fn white(position: Vec3) -> Self {
        Self::new(position, Color::ONE, 1.0)
    }

    /// Check the light's ranges. Returns a description of the first problem.
    pub fn check(&self) -> Result<(), String> {
        if !self.position.is_finite() {
            return Err(format!("position must be finite, got {}", self.position));
        }
        if self.intensity.is_nan() || self.intensity < 0.0 {
            return Err(format!("intensity must be >= 0, got {}", self.intensity));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_intensity_is_clamped() {
        let light = PointLight::new(Vec3::ZERO, Color::ONE, -2.0);
        assert_eq!(light.intensity, 0.0);
        assert!(light.check().is_ok());
    }

    #[test]
    fn test_check_rejects_negative_intensity() {
        let light = PointLight {
            intensity: -1.0,
            ..PointLight::default()
        };
        assert!(light.check().is_err());
    }
}
