//! Procedural textures sampled by materials.
//!
//! A texture is a pure function of surface coordinates and world position.
//! Textures are small value types, cloned into every material that uses them.

use simplex_math::Vec3;

use crate::Color;

/// Spatial frequency of the checker pattern (cells per world unit times 2π).
const CHECKER_FREQUENCY: f32 = 10.0;

/// A texture mapping `(u, v, p)` to a color.
#[derive(Clone, Debug, PartialEq)]
pub enum Texture {
    /// The same color everywhere.
    Constant(Color),

    /// 3D checker: alternates between two textures on the sign of
    /// `sin(10 x) sin(10 y) sin(10 z)`.
    Checker {
        odd: Box<Texture>,
        even: Box<Texture>,
    },
}

impl Texture {
    /// Create a constant color texture.
    pub fn solid_color(color: Color) -> Self {
        Texture::Constant(color)
    }

    /// Create a checker texture from two sub-textures.
    pub fn checker(odd: Texture, even: Texture) -> Self {
        Texture::Checker {
            odd: Box::new(odd),
            even: Box::new(even),
        }
    }

    /// Sample the texture.
    pub fn value(&self, u: f32, v: f32, p: Vec3) -> Color {
        match self {
            Texture::Constant(color) => *color,
            Texture::Checker { odd, even } => {
                let sines = (CHECKER_FREQUENCY * p.x).sin()
                    * (CHECKER_FREQUENCY * p.y).sin()
                    * (CHECKER_FREQUENCY * p.z).sin();
                if sines < 0.0 {
                    odd.value(u, v, p)
                } else {
                    even.value(u, v, p)
                }
            }
        }
    }
}

impl From<Color> for Texture {
    fn from(color: Color) -> Self {
        Texture::Constant(color)
    }
}
