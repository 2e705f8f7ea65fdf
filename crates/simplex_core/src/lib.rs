//! SimplexRay Core - scene description for the path tracer.
//!
//! This crate provides:
//!
//! - **Scene graph types**: `Scene`, `ShapeNode`, `Transform`, `Camera`
//! - **Surface description**: `Material`, `Texture`
//! - **Output**: `ImageBuffer` of linear RGB
//!
//! # Example
//!
//! ```
//! use simplex_core::{Material, Scene, Shape};
//! use simplex_math::Vec3;
//!
//! let mut scene = Scene::new("demo");
//! scene
//!     .add_shape(Shape::Sphere)
//!     .set_translation(Vec3::new(0.0, 1.0, 0.0))
//!     .set_uniform_scale(2.0)
//!     .set_material(Material::dielectric(1.5));
//!
//! let mut camera = scene.add_camera().with_view(320, 200);
//! camera.set_projection(20.0, 0.0);
//! assert_eq!(scene.shape_count(), 1);
//! ```

pub mod camera;
pub mod image;
pub mod material;
pub mod scene;
pub mod texture;

/// Color type alias (linear RGB, typically 0-1)
pub type Color = simplex_math::Vec3;

// Re-export commonly used types
pub use camera::{Camera, View};
pub use image::{color_to_rgb8, ImageBuffer};
pub use material::Material;
pub use scene::{Scene, SceneError, SceneResult, Shape, ShapeNode, Transform};
pub use texture::Texture;
