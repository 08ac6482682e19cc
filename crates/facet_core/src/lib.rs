//! facet Core - Scene description for the facet rendering core.
//!
//! This crate provides:
//!
//! - **Primitives**: `Sphere`, `AxisBox`, `Triangle`, wrapped in the closed
//!   `Shape` set and paired with a `Material` as a `Primitive`
//! - **Lighting inputs**: `Material` coefficients and `PointLight`s
//! - **Scene documents**: JSON load/save with validation
//!
//! # Example
//!
//! ```ignore
//! use facet_core::Scene;
//!
//! let scene = Scene::load("scene.json")?;
//! println!("Loaded {} primitives, {} lights",
//!     scene.len(),
//!     scene.lights.len());
//! ```

pub mod error;
pub mod light;
pub mod material;
pub mod primitive;
pub mod scene;

// Re-export commonly used types
pub use error::{SceneError, SceneResult};
pub use light::PointLight;
pub use material::{Color, Material};
pub use primitive::{AxisBox, Primitive, Shape, Sphere, Triangle};
pub use scene::{Scene, SCENE_VERSION};
