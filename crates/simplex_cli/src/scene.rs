//! The random-spheres demo scene.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simplex_core::{Color, Material, Scene, Shape};
use simplex_math::Vec3;

/// Mixed into the user seed so scene layout does not share a stream with
/// the renderer, which seeds from `seed + n`.
const SCENE_STREAM: u64 = 0x5CE9_E5EE_D0C0_FFEE;

/// Random source for laying out the demo scene.
pub fn scene_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed ^ SCENE_STREAM),
        None => StdRng::from_entropy(),
    }
}

/// Build a large ground sphere, three feature spheres and a grid of small
/// randomly placed balls.
pub fn random_spheres(rng: &mut impl Rng) -> Scene {
    let mut scene = Scene::new("random spheres");

    scene
        .add_shape(Shape::Sphere)
        .set_translation(Vec3::new(0.0, -1000.0, 0.0))
        .set_uniform_scale(2000.0)
        .set_material(Material::lambertian(Color::splat(0.5)));

    let keep_out = Vec3::new(4.0, 0.2, 0.0);
    for a in -10..=10 {
        for b in -10..=10 {
            let center = Vec3::new(
                a as f32 + 0.9 * rng.gen::<f32>(),
                0.2,
                b as f32 + 0.9 * rng.gen::<f32>(),
            );
            if (center - keep_out).length() <= 0.9 {
                continue;
            }

            let choose = rng.gen::<f32>();
            let material = if choose < 0.8 {
                let albedo = Color::new(
                    rng.gen::<f32>() * rng.gen::<f32>(),
                    rng.gen::<f32>() * rng.gen::<f32>(),
                    rng.gen::<f32>() * rng.gen::<f32>(),
                );
                Material::lambertian(albedo)
            } else if choose < 0.95 {
                let albedo = Color::new(
                    0.5 * (1.0 + rng.gen::<f32>()),
                    0.5 * (1.0 + rng.gen::<f32>()),
                    0.5 * (1.0 + rng.gen::<f32>()),
                );
                Material::metal(albedo, 0.5 * rng.gen::<f32>())
            } else {
                Material::dielectric(1.5)
            };

            scene
                .add_shape(Shape::Sphere)
                .set_translation(center)
                .set_uniform_scale(0.4)
                .set_material(material);
        }
    }

    scene
        .add_shape(Shape::Sphere)
        .set_translation(Vec3::new(0.0, 1.0, 0.0))
        .set_uniform_scale(2.0)
        .set_material(Material::dielectric(1.5));
    scene
        .add_shape(Shape::Sphere)
        .set_translation(Vec3::new(-4.0, 1.0, 0.0))
        .set_uniform_scale(2.0)
        .set_material(Material::lambertian(Color::new(0.4, 0.2, 0.1)));
    scene
        .add_shape(Shape::Sphere)
        .set_translation(Vec3::new(4.0, 1.0, 0.0))
        .set_uniform_scale(2.0)
        .set_material(Material::metal(Color::new(0.7, 0.6, 0.5), 0.0));

    scene
}
