//! Scene graph types for SimplexRay.
//!
//! A scene is a flat list of shape nodes plus any number of cameras handed
//! out by [`Scene::add_camera`]. Everything here is plain data; the renderer
//! validates and converts it into intersectable primitives.

use simplex_math::{Quat, Vec3};
use thiserror::Error;

use crate::{Camera, Material};

/// Relative tolerance when checking that a scale vector is uniform.
const UNIFORM_SCALE_EPSILON: f32 = 1e-6;

/// Errors caused by scene configuration that cannot be rendered.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("shape {index} has no material bound")]
    MissingMaterial { index: usize },

    #[error("shape {index} has non-uniform scale {scale:?}; only uniform scale is supported")]
    NonUniformScale { index: usize, scale: Vec3 },

    #[error("camera view must be at least 1x1, got {width}x{height}")]
    InvalidView { width: u32, height: u32 },
}

pub type SceneResult<T> = Result<T, SceneError>;

/// Transform components of a scene node.
#[derive(Clone, Debug, PartialEq)]
pub struct Transform {
    /// Translation
    pub translation: Vec3,

    /// Rotation (as unit quaternion)
    pub rotation: Quat,

    /// Scale
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// The scale factor if all three components agree, `None` otherwise.
    pub fn uniform_scale(&self) -> Option<f32> {
        let s = self.scale.x;
        let tolerance = UNIFORM_SCALE_EPSILON * s.abs().max(1.0);
        if (self.scale.y - s).abs() <= tolerance && (self.scale.z - s).abs() <= tolerance {
            Some(s)
        } else {
            None
        }
    }
}

/// Kinds of shape the scene builder can create.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Sphere of diameter `scale` centered at the node translation.
    Sphere,
}

/// A shape placed in the scene.
#[derive(Clone, Debug)]
pub struct ShapeNode {
    pub shape: Shape,
    pub transform: Transform,
    /// Must be set before rendering.
    pub material: Option<Material>,
}

impl ShapeNode {
    /// Create a node at the origin with unit scale and no material.
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            transform: Transform::default(),
            material: None,
        }
    }

    pub fn set_translation(&mut self, translation: Vec3) -> &mut Self {
        self.transform.translation = translation;
        self
    }

    pub fn set_rotation(&mut self, rotation: Quat) -> &mut Self {
        self.transform.rotation = rotation;
        self
    }

    pub fn set_scale(&mut self, scale: Vec3) -> &mut Self {
        self.transform.scale = scale;
        self
    }

    /// Set the same scale on all three axes.
    pub fn set_uniform_scale(&mut self, scale: f32) -> &mut Self {
        self.set_scale(Vec3::splat(scale))
    }

    pub fn set_material(&mut self, material: Material) -> &mut Self {
        self.material = Some(material);
        self
    }
}

/// A complete scene of shapes.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    /// Shapes in insertion order
    pub shapes: Vec<ShapeNode>,

    /// Scene name (for logging)
    pub name: String,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add a shape and return a handle for placing it.
    pub fn add_shape(&mut self, shape: Shape) -> &mut ShapeNode {
        self.shapes.push(ShapeNode::new(shape));
        let index = self.shapes.len() - 1;
        &mut self.shapes[index]
    }

    /// Create a camera with the default view and projection.
    ///
    /// Cameras are not owned by the scene; the same scene can be rendered
    /// from several of them.
    pub fn add_camera(&self) -> Camera {
        Camera::new()
    }

    /// Get shape count.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the scene has no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Count emissive shapes (lights).
    pub fn light_count(&self) -> usize {
        self.shapes
            .iter()
            .filter(|s| s.material.as_ref().is_some_and(Material::is_emissive))
            .count()
    }
}
