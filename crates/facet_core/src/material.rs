//! Surface material coefficients for local illumination.

use facet_math::Vec3;
use serde::{Deserialize, Serialize};

/// Color type alias (RGB values in 0-1)
pub type Color = Vec3;

/// Blinn-Phong material.
///
/// Colors are linear RGB in `[0, 1]`. The three coefficients scale the
/// ambient, diffuse and specular terms independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Surface color, used by the ambient and diffuse terms
    pub base_color: Color,
    /// Highlight color, used by the specular term
    pub specular_color: Color,
    /// Blinn-Phong exponent (>= 1)
    pub shininess: f32,
    /// Ambient coefficient (ka)
    pub ambient: f32,
    /// Diffuse coefficient (kd)
    pub diffuse: f32,
    /// Specular coefficient (ks)
    pub specular: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            base_color: Color::ONE,
            specular_color: Color::ONE,
            shininess: 30.0,
            ambient: 0.18,
            diffuse: 1.0,
            specular: 0.5,
        }
    }
}

impl Material {
    /// A purely diffuse material of the given color.
    pub fn matte(base_color: Color) -> Self {
        Self {
            base_color,
            specular: 0.0,
            ..Self::default()
        }
    }

    /// A material with a white highlight of the given tightness and strength.
    pub fn glossy(base_color: Color, shininess: f32, specular: f32) -> Self {
        Self {
            base_color,
            shininess: shininess.max(1.0),
            specular,
            ..Self::default()
        }
    }

    /// Replace the ambient coefficient.
    pub fn with_ambient(mut self, ambient: f32) -> Self {
        self.ambient = ambient;
        self
    }

    /// Check the coefficient ranges. Returns a description of the first problem.
    pub fn check(&self) -> Result<(), String> {
        if self.shininess.is_nan() || self.shininess < 1.0 {
            return Err(format!("shininess must be >= 1, got {}", self.shininess));
        }
        for (name, k) in [
            ("ambient", self.ambient),
            ("diffuse", self.diffuse),
            ("specular", self.specular),
        ] {
            if k.is_nan() || k < 0.0 {
                return Err(format!("{name} coefficient must be >= 0, got {k}"));
            }
        }
        for (name, c) in [("base_color", self.base_color), ("specular_color", self.specular_color)] {
            if !c.is_finite() || c.min_element() < 0.0 {
                return Err(format!("{name} must be finite and non-negative, got {c}"));
            }
        }
        Ok(())
    }
}
