//! Scene container and JSON scene documents.
//!
//! A scene is an ordered list of primitives plus a set of point lights.
//! Scan order matters: when two primitives are hit at exactly the same
//! distance, the one listed first wins.
//!
//! Documents look like:
//!
//! ```json
//! {
//!   "version": "1.0",
//!   "objects": [
//!     { "type": "sphere", "center": [0, 1, 0], "radius": 1.0,
//!       "material": { "base_color": [1, 0, 0] } },
//!     { "type": "box", "center": [0, 0.75, 0], "half_extents": [0.75, 0.75, 0.75] }
//!   ],
//!   "lights": [ { "position": [0, 6, 2], "color": [1, 1, 1], "intensity": 1.0 } ]
//! }
//! ```

use std::fs;
use std::path::Path;

use facet_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::{AxisBox, Color, Material, PointLight, Primitive, SceneError, SceneResult};

/// Scene document version written by [`Scene::to_json_string`].
pub const SCENE_VERSION: &str = "1.0";

fn default_version() -> String {
    SCENE_VERSION.to_string()
}

/// Read-only input to every query: primitives in scan order plus lights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default = "default_version")]
    pub version: String,

    #[serde(rename = "objects", default)]
    pub primitives: Vec<Primitive>,

    #[serde(default)]
    pub lights: Vec<PointLight>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self {
            version: default_version(),
            primitives: Vec::new(),
            lights: Vec::new(),
        }
    }

    /// Append a primitive; returns its index.
    pub fn add(&mut self, primitive: Primitive) -> usize {
        self.primitives.push(primitive);
        self.primitives.len() - 1
    }

    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    /// Number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Remove all primitives and lights.
    pub fn clear(&mut self) {
        self.primitives.clear();
        self.lights.clear();
    }

    /// Bounds of all primitives as `(min, max)`, or `None` for an empty scene.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        self.primitives
            .iter()
            .map(|p| p.shape.bounds())
            .reduce(|(amin, amax), (bmin, bmax)| (amin.min(bmin), amax.max(bmax)))
    }

    /// Check every primitive, material and light. Reports the first problem.
    pub fn validate(&self) -> SceneResult<()> {
        for (index, primitive) in self.primitives.iter().enumerate() {
            primitive
                .shape
                .check()
                .map_err(|reason| SceneError::InvalidPrimitive { index, reason })?;
            primitive
                .material
                .check()
                .map_err(|reason| SceneError::InvalidMaterial { index, reason })?;
        }
        for (index, light) in self.lights.iter().enumerate() {
            light
                .check()
                .map_err(|reason| SceneError::InvalidLight { index, reason })?;
        }
        Ok(())
    }

    /// Parse and validate a scene document.
    pub fn from_json_str(json: &str) -> SceneResult<Self> {
        let scene: Scene = serde_json::from_str(json)?;

        let major = scene.version.split('.').next().unwrap_or_default();
        if major != "1" {
            return Err(SceneError::UnsupportedVersion(scene.version));
        }

        if let Err(e) = scene.validate() {
            log::warn!("Rejecting scene: {}", e);
            return Err(e);
        }

        Ok(scene)
    }

    /// Load a scene document from disk.
    pub fn load(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let scene = Self::from_json_str(&json)?;

        log::info!(
            "Loaded scene {} ({} primitives, {} lights)",
            path.display(),
            scene.len(),
            scene.lights.len()
        );

        Ok(scene)
    }

    /// Serialize to a pretty-printed scene document.
    pub fn to_json_string(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write a scene document to disk.
    pub fn save(&self, path: impl AsRef<Path>) -> SceneResult<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json_string()?)?;
        log::info!("Saved scene {} ({} primitives)", path.display(), self.len());
        Ok(())
    }

    /// Demo scene: a ring of colored spheres around a grey box,
    /// lit by one white light above.
    pub fn default_showcase() -> Self {
        // (center, radius, color, shininess, specular strength)
        let spheres = [
            (Vec3::new(-3.0, 2.0, 0.0), 2.0, Color::new(0.0, 1.0, 1.0), 60.0, 1.0),
            (Vec3::new(3.0, 2.0, 0.0), 2.0, Color::new(0.7, 0.7, 1.0), 30.0, 0.6),
            (Vec3::new(0.0, 3.5, -4.0), 1.5, Color::new(1.0, 0.2, 0.2), 40.0, 0.8),
            (Vec3::new(-6.0, 1.5, -3.0), 1.5, Color::new(0.2, 1.0, 0.2), 35.0, 0.7),
            (Vec3::new(6.0, 1.5, -3.0), 1.5, Color::new(1.0, 1.0, 0.2), 45.0, 0.6),
            (Vec3::new(-4.0, 1.0, 4.0), 1.0, Color::new(1.0, 0.5, 0.0), 50.0, 0.9),
            (Vec3::new(4.0, 1.0, 4.0), 1.0, Color::new(0.5, 0.0, 1.0), 55.0, 0.8),
            (Vec3::new(0.0, 1.0, 6.0), 1.2, Color::new(1.0, 0.0, 0.5), 40.0, 0.7),
            (Vec3::new(-8.0, 2.5, 0.0), 1.8, Color::new(0.0, 0.5, 1.0), 30.0, 0.5),
            (Vec3::new(8.0, 2.5, 0.0), 1.8, Color::new(1.0, 0.8, 0.0), 38.0, 0.85),
            (Vec3::new(0.0, 0.8, -8.0), 0.8, Color::new(0.5, 1.0, 0.5), 25.0, 0.6),
            (Vec3::new(2.0, 1.5, -6.0), 1.0, Color::new(0.8, 0.3, 0.8), 42.0, 0.75),
        ];

        let mut scene = Scene::new();
        for (center, radius, color, shininess, strength) in spheres {
            scene.add(Primitive::sphere(
                center,
                radius,
                Material::glossy(color, shininess, strength),
            ));
        }

        scene.add(Primitive::new(
            AxisBox::cube(Vec3::new(0.0, 0.75, 0.0), 1.5),
            Material::glossy(Color::splat(0.7), 20.0, 0.4),
        ));

        scene.add_light(PointLight::white(Vec3::new(0.0, 6.0, 2.0)));
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Shape, Sphere};

    #[test]
    fn test_add_returns_index() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());

        let first = scene.add(Primitive::sphere(Vec3::ZERO, 1.0, Material::default()));
        let second = scene.add(Primitive::sphere(Vec3::X, 1.0, Material::default()));

        assert_eq!((first, second), (0, 1));
        assert_eq!(scene.len(), 2);

        scene.clear();
        assert!(scene.is_empty());
    }

    #[test]
    fn test_default_showcase() {
        let scene = Scene::default_showcase();
        assert_eq!(scene.len(), 13);
        assert_eq!(scene.lights.len(), 1);
        assert!(scene.validate().is_ok());
        assert!(matches!(scene.primitives[12].shape, Shape::Box(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let scene = Scene::default_showcase();
        let json = scene.to_json_string().unwrap();
        let parsed = Scene::from_json_str(&json).unwrap();
        assert_eq!(parsed, scene);
    }

    #[test]
    fn test_parse_minimal_document() {
        let json = r#"{
            "objects": [
                { "type": "sphere", "center": [0, 0, 0], "radius": 1.0 },
                { "type": "box", "center": [0, 0, 0], "half_extents": [1, 1, 1],
                  "material": { "base_color": [1, 0, 0], "shininess": 8.0 } },
                { "type": "triangle", "v0": [0, 0, 0], "v1": [1, 0, 0], "v2": [0, 1, 0] }
            ]
        }"#;

        let scene = Scene::from_json_str(json).unwrap();
        assert_eq!(scene.version, SCENE_VERSION);
        assert_eq!(scene.len(), 3);
        assert!(scene.lights.is_empty());
        assert_eq!(scene.primitives[0].shape, Shape::Sphere(Sphere::new(Vec3::ZERO, 1.0)));
        assert_eq!(scene.primitives[1].material.shininess, 8.0);
    }

    #[test]
    fn test_unknown_type_fails_loudly() {
        let json = r#"{ "objects": [ { "type": "torus", "center": [0, 0, 0] } ] }"#;
        assert!(matches!(Scene::from_json_str(json), Err(SceneError::Parse(_))));
    }

    #[test]
    fn test_invalid_geometry_is_rejected() {
        let json = r#"{ "objects": [ { "type": "sphere", "center": [0, 0, 0], "radius": -2.0 } ] }"#;
        assert!(matches!(
            Scene::from_json_str(json),
            Err(SceneError::InvalidPrimitive { index: 0, .. })
        ));
    }

    #[test]
    fn test_invalid_light_is_rejected() {
        let json = r#"{ "lights": [ { "position": [0, 1, 0], "intensity": -1.0 } ] }"#;
        assert!(matches!(
            Scene::from_json_str(json),
            Err(SceneError::InvalidLight { index: 0, .. })
        ));
    }

    #[test]
    fn test_unsupported_version() {
        let json = r#"{ "version": "2.0", "objects": [] }"#;
        assert!(matches!(
            Scene::from_json_str(json),
            Err(SceneError::UnsupportedVersion(_))
        ));
    }

    #[test]
    fn test_bounds() {
        assert!(Scene::new().bounds().is_none());

        let mut scene = Scene::new();
        scene.add(Primitive::sphere(Vec3::ZERO, 1.0, Material::default()));
        scene.add(Primitive::aabox(Vec3::new(5.0, 0.0, 0.0), Vec3::ONE, Material::default()));

        let (min, max) = scene.bounds().unwrap();
        assert_eq!(min, Vec3::splat(-1.0));
        assert_eq!(max, Vec3::new(6.0, 1.0, 1.0));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("facet_scene_{}.json", std::process::id()));
        let scene = Scene::default_showcase();

        scene.save(&path).unwrap();
        let loaded = Scene::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, scene);
    }
}
