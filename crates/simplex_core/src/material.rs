//! Surface materials.
//!
//! Materials are plain data. How each kind scatters or emits light lives in
//! the renderer, which matches on this enum.

use crate::{Color, Texture};

/// The closed set of surface materials.
#[derive(Clone, Debug, PartialEq)]
pub enum Material {
    /// Ideal diffuse reflector.
    Lambertian { albedo: Texture },

    /// Specular reflector; `fuzz` in [0, 1] perturbs the mirror direction.
    Metal { albedo: Texture, fuzz: f32 },

    /// Clear refractive material such as glass or water.
    Dielectric { refractive_index: f32 },

    /// Emitter that does not scatter.
    DiffuseLight { emit: Texture },
}

impl Material {
    /// Create a Lambertian material.
    pub fn lambertian(albedo: impl Into<Texture>) -> Self {
        Material::Lambertian {
            albedo: albedo.into(),
        }
    }

    /// Create a Metal material.
    ///
    /// - `albedo`: The color of the metal
    /// - `fuzz`: Roughness, 0.0 = perfect mirror, 1.0 = very rough (clamped)
    pub fn metal(albedo: impl Into<Texture>, fuzz: f32) -> Self {
        Material::Metal {
            albedo: albedo.into(),
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    /// Create a Dielectric material.
    ///
    /// - `refractive_index`: 1.0 = air, 1.5 = glass, 2.4 = diamond
    pub fn dielectric(refractive_index: f32) -> Self {
        Material::Dielectric { refractive_index }
    }

    /// Create a diffuse light with the given emission.
    pub fn diffuse_light(emit: impl Into<Texture>) -> Self {
        Material::DiffuseLight { emit: emit.into() }
    }

    /// Whether this material emits light.
    pub fn is_emissive(&self) -> bool {
        matches!(self, Material::DiffuseLight { .. })
    }
}
