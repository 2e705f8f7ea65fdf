//! How each material kind scatters and emits light.

use rand::RngCore;
use simplex_core::{Color, Material};
use simplex_math::{Ray, Vec3};

use crate::hittable::HitRecord;
use crate::sampling::{gen_f32, random_in_unit_sphere};

/// Outcome of a scatter event.
#[derive(Debug, Clone, Copy)]
pub struct ScatterResult {
    /// Fraction of incoming light carried by the scattered ray
    pub attenuation: Color,
    /// The continuing ray
    pub scattered: Ray,
}

/// Light transport behavior at a surface.
pub trait Scatter {
    /// Scatter an incoming ray.
    ///
    /// Returns `None` when the ray is absorbed.
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult>;

    /// Light emitted at the hit point. Most materials return black.
    fn emitted(&self, _ray_in: &Ray, _rec: &HitRecord) -> Color {
        Color::ZERO
    }
}

impl Scatter for Material {
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult> {
        match self {
            Material::Lambertian { albedo } => {
                let mut direction = rec.normal + random_in_unit_sphere(rng);

                // Catch degenerate scatter direction
                if direction.length_squared() < 1e-8 {
                    direction = rec.normal;
                }

                Some(ScatterResult {
                    attenuation: albedo.value(rec.u, rec.v, rec.p),
                    scattered: Ray::new(rec.p, direction),
                })
            }

            Material::Metal { albedo, fuzz } => {
                let reflected = reflect(ray_in.direction(), rec.normal);
                let direction = reflected + *fuzz * random_in_unit_sphere(rng);

                // Scattering below the surface is absorption
                if direction.dot(rec.normal) <= 0.0 {
                    return None;
                }

                Some(ScatterResult {
                    attenuation: albedo.value(rec.u, rec.v, rec.p),
                    scattered: Ray::new(rec.p, direction),
                })
            }

            Material::Dielectric { refractive_index } => {
                let direction = dielectric_direction(ray_in.direction(), rec.normal, *refractive_index, rng);
                Some(ScatterResult {
                    attenuation: Color::ONE,
                    scattered: Ray::new(rec.p, direction),
                })
            }

            Material::DiffuseLight { .. } => None,
        }
    }

    fn emitted(&self, _ray_in: &Ray, rec: &HitRecord) -> Color {
        match self {
            Material::DiffuseLight { emit } => emit.value(rec.u, rec.v, rec.p),
            _ => Color::ZERO,
        }
    }
}

/// Choose the outgoing direction at a dielectric boundary.
///
/// `unit_direction` is the incoming unit direction and `normal` the outward
/// surface normal. A positive dot product means the ray is leaving the
/// medium.
fn dielectric_direction(unit_direction: Vec3, normal: Vec3, ior: f32, rng: &mut dyn RngCore) -> Vec3 {
    let d_dot_n = unit_direction.dot(normal);
    let (outward_normal, ratio, cosine) = if d_dot_n > 0.0 {
        (-normal, ior, ior * d_dot_n)
    } else {
        (normal, 1.0 / ior, -d_dot_n)
    };

    let reflected = reflect(unit_direction, normal);
    match refract(unit_direction, outward_normal, ratio) {
        Some(refracted) if gen_f32(rng) >= reflectance(cosine, ior) => refracted,
        // Total internal reflection, or Fresnel chose the reflection
        _ => reflected,
    }
}

/// Schlick's approximation for reflectance.
#[inline]
fn reflectance(cosine: f32, ior: f32) -> f32 {
    let r0 = ((1.0 - ior) / (1.0 + ior)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

/// Reflect a vector about a normal.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector through a surface with index ratio `ni_over_nt`.
///
/// `n` must face the incoming side. Returns `None` on total internal
/// reflection.
#[inline]
fn refract(uv: Vec3, n: Vec3, ni_over_nt: f32) -> Option<Vec3> {
    let dt = uv.dot(n);
    let discriminant = 1.0 - ni_over_nt * ni_over_nt * (1.0 - dt * dt);
    if discriminant > 0.0 {
        Some(ni_over_nt * (uv - n * dt) - n * discriminant.sqrt())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use simplex_core::Texture;

    fn record(material: &Material, p: Vec3, normal: Vec3) -> HitRecord<'_> {
        HitRecord {
            t: 1.0,
            p,
            normal,
            u: 0.25,
            v: 0.75,
            material,
        }
    }

    #[test]
    fn test_lambertian_always_scatters_into_hemisphere_ball() {
        let material = Material::lambertian(Color::new(0.2, 0.4, 0.6));
        let rec = record(&material, Vec3::ZERO, Vec3::Y);
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let result = material.scatter(&ray, &rec, &mut rng).unwrap();
            assert_eq!(result.attenuation, Color::new(0.2, 0.4, 0.6));
            assert_eq!(result.scattered.origin(), Vec3::ZERO);
            // normal + point in unit ball never points below the tangent plane
            assert!(result.scattered.direction().dot(Vec3::Y) >= 0.0);
        }
    }

    #[test]
    fn test_lambertian_samples_texture_at_hit() {
        let checker = Texture::checker(Color::ZERO.into(), Color::ONE.into());
        let material = Material::lambertian(checker);
        let rec = record(&material, Vec3::new(-0.1, 0.1, 0.1), Vec3::Y);
        let ray = Ray::new(Vec3::Y, Vec3::NEG_Y);
        let mut rng = StdRng::seed_from_u64(1);

        let result = material.scatter(&ray, &rec, &mut rng).unwrap();
        assert_eq!(result.attenuation, Color::ZERO);
    }

    #[test]
    fn test_metal_mirror_reflection() {
        let material = Material::metal(Color::new(0.8, 0.6, 0.4), 0.0);
        let rec = record(&material, Vec3::ZERO, Vec3::Y);
        let ray = Ray::new(Vec3::new(-1.0, 1.0, 0.0), Vec3::new(1.0, -1.0, 0.0));
        let mut rng = StdRng::seed_from_u64(42);

        let result = material.scatter(&ray, &rec, &mut rng).unwrap();
        assert_eq!(result.attenuation, Color::new(0.8, 0.6, 0.4));
        let expected = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert!((result.scattered.direction() - expected).length() < 1e-5);
    }

    #[test]
    fn test_metal_rejects_scatter_below_surface() {
        let material = Material::metal(Color::ONE, 0.0);
        let rec = record(&material, Vec3::ZERO, Vec3::Y);
        let mut rng = StdRng::seed_from_u64(42);

        // Travelling with the normal: the mirror direction points into the surface
        let ray = Ray::new(Vec3::new(-1.0, -1.0, 0.0), Vec3::new(1.0, 1.0, 0.0));
        assert!(material.scatter(&ray, &rec, &mut rng).is_none());

        // Grazing: reflection lies in the tangent plane, dot == 0
        let ray = Ray::new(Vec3::new(-1.0, 0.0, 0.0), Vec3::X);
        assert!(material.scatter(&ray, &rec, &mut rng).is_none());
    }

    #[test]
    fn test_dielectric_attenuation_is_white() {
        let material = Material::dielectric(1.5);
        let mut rng = StdRng::seed_from_u64(42);

        for i in 0..500 {
            let angle = i as f32 * 0.013;
            let direction = Vec3::new(angle.sin(), -angle.cos(), 0.0);
            // Alternate entering and exiting the surface
            let normal = if i % 2 == 0 { Vec3::Y } else { Vec3::NEG_Y };
            let rec = record(&material, Vec3::ZERO, normal);
            let ray = Ray::new(Vec3::Y, direction);

            let result = material.scatter(&ray, &rec, &mut rng).unwrap();
            assert_eq!(result.attenuation, Color::ONE);
        }
    }

    #[test]
    fn test_dielectric_total_internal_reflection() {
        let ior = 1.5;
        let normal = Vec3::Y;
        // Exiting the medium at a steep angle (sin > 1/1.5)
        let direction = Vec3::new(0.9, 0.1, 0.0).normalize();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let out = dielectric_direction(direction, normal, ior, &mut rng);
            assert!((out - reflect(direction, normal)).length() < 1e-6);
        }
    }

    #[test]
    fn test_dielectric_head_on_mostly_refracts() {
        let ior = 1.5;
        let direction = Vec3::NEG_Y;
        let mut rng = StdRng::seed_from_u64(42);

        let refracted = (0..1000)
            .map(|_| dielectric_direction(direction, Vec3::Y, ior, &mut rng))
            .filter(|d| d.y < 0.0)
            .count();

        // Normal incidence reflectance is r0 = 0.04
        assert!(refracted > 900, "refracted {} of 1000", refracted);
    }

    #[test]
    fn test_refract_straight_through() {
        let out = refract(Vec3::NEG_Y, Vec3::Y, 1.0 / 1.5).unwrap();
        assert!((out - Vec3::NEG_Y).length() < 1e-6);
    }

    #[test]
    fn test_reflectance_bounds() {
        assert!((reflectance(1.0, 1.5) - 0.04).abs() < 1e-6);
        assert!((reflectance(0.0, 1.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_diffuse_light_emits_and_absorbs() {
        let material = Material::diffuse_light(Color::new(4.0, 4.0, 4.0));
        let rec = record(&material, Vec3::ZERO, Vec3::Y);
        let ray = Ray::new(Vec3::Y, Vec3::NEG_Y);
        let mut rng = StdRng::seed_from_u64(42);

        assert!(material.scatter(&ray, &rec, &mut rng).is_none());
        assert_eq!(material.emitted(&ray, &rec), Color::new(4.0, 4.0, 4.0));
    }

    #[test]
    fn test_non_emitters_are_black() {
        let ray = Ray::new(Vec3::Y, Vec3::NEG_Y);
        for material in [
            Material::lambertian(Color::ONE),
            Material::metal(Color::ONE, 0.3),
            Material::dielectric(1.5),
        ] {
            let rec = record(&material, Vec3::ZERO, Vec3::Y);
            assert_eq!(material.emitted(&ray, &rec), Color::ZERO);
        }
    }
}
