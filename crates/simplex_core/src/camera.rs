//! Pinhole camera for ray generation.

use simplex_math::{look_at_rotation, Quat, Ray, Vec3};

use crate::{SceneError, SceneResult, Transform};

/// Default vertical field of view in degrees.
pub const DEFAULT_VFOV: f32 = 60.0;

/// Output resolution of a camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View {
    pub width: u32,
    pub height: u32,
}

impl Default for View {
    fn default() -> Self {
        Self {
            width: 200,
            height: 100,
        }
    }
}

impl View {
    /// Width over height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Camera for generating rays into the scene.
///
/// In camera-local space the image plane sits at `z = -1`, spanned by
/// `horizontal` and `vertical` half-extents. Rays start at the camera
/// translation and are rotated by the camera rotation; scale is ignored.
#[derive(Debug, Clone)]
pub struct Camera {
    pub transform: Transform,
    view: View,

    // Projection settings
    vfov: f32,
    aspect: f32, // 0.0 means "derive from the view"

    // Cached image-plane basis (set by set_projection())
    center: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Camera {
    /// Create a camera with a 200x100 view and a 60 degree projection.
    pub fn new() -> Self {
        let mut camera = Self {
            transform: Transform::default(),
            view: View::default(),
            vfov: DEFAULT_VFOV,
            aspect: 0.0,
            center: Vec3::NEG_Z,
            horizontal: Vec3::X,
            vertical: Vec3::Y,
        };
        camera.set_projection(DEFAULT_VFOV, 0.0);
        camera
    }

    /// Set the vertical field of view (degrees) and aspect ratio.
    ///
    /// An aspect of `0.0` derives the ratio from the view, and keeps deriving
    /// it when the view is later resized.
    pub fn set_projection(&mut self, vfov: f32, aspect: f32) {
        self.vfov = vfov;
        self.aspect = aspect;

        let aspect = if aspect == 0.0 {
            self.view.aspect_ratio()
        } else {
            aspect
        };

        let theta = vfov.to_radians();
        let half_height = (theta / 2.0).tan();
        let half_width = aspect * half_height;

        self.center = Vec3::new(0.0, 0.0, -1.0);
        self.horizontal = Vec3::new(half_width, 0.0, 0.0);
        self.vertical = Vec3::new(0.0, half_height, 0.0);
    }

    /// Set the output resolution.
    pub fn set_view(&mut self, width: u32, height: u32) {
        self.view = View { width, height };
        if self.aspect == 0.0 {
            self.set_projection(self.vfov, 0.0);
        }
    }

    /// Builder form of [`Camera::set_view`].
    pub fn with_view(mut self, width: u32, height: u32) -> Self {
        self.set_view(width, height);
        self
    }

    /// Builder form of [`Camera::set_projection`].
    pub fn with_projection(mut self, vfov: f32, aspect: f32) -> Self {
        self.set_projection(vfov, aspect);
        self
    }

    /// Place the camera at `from`, looking at `to`.
    pub fn with_position(mut self, from: Vec3, to: Vec3) -> Self {
        self.transform.translation = from;
        self.look_at(to);
        self
    }

    /// Rotate the camera to face `target` from its current translation.
    pub fn look_at(&mut self, target: Vec3) {
        self.transform.rotation = look_at_rotation(self.transform.translation, target);
    }

    pub fn set_translation(&mut self, translation: Vec3) {
        self.transform.translation = translation;
    }

    pub fn set_rotation(&mut self, rotation: Quat) {
        self.transform.rotation = rotation;
    }

    /// Get the output resolution.
    pub fn view(&self) -> View {
        self.view
    }

    /// Check the view can be rendered.
    pub fn validate(&self) -> SceneResult<()> {
        if self.view.width == 0 || self.view.height == 0 {
            return Err(SceneError::InvalidView {
                width: self.view.width,
                height: self.view.height,
            });
        }
        Ok(())
    }

    /// Generate the ray through image-plane coordinates `(u, v)`.
    ///
    /// `u` and `v` run over roughly [-1, 1], with `v = 1` at the top edge.
    pub fn get_ray(&self, u: f32, v: f32) -> Ray {
        let local = self.center + u * self.horizontal + v * self.vertical;
        Ray::new(self.transform.translation, self.transform.rotation * local)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
