//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Path tracing with a hard depth limit
//! - Anti-aliasing via jittered multi-sampling
//! - Bucketed parallel rendering (see `bucket`)

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;
use simplex_core::{Camera, Color, ImageBuffer, Scene, SceneError};
use simplex_math::{Interval, Ray};
use thiserror::Error;

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::sampling::sample_square;
use crate::{BvhError, BvhNode, Hittable, Scatter, Sphere};

/// Lower bound on accepted hit distances; avoids shadow acne.
pub const HIT_EPSILON: f32 = 0.01;

/// Errors that stop a render before any pixel is traced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("invalid scene: {0}")]
    Scene(#[from] SceneError),

    #[error("failed to build acceleration structure: {0}")]
    Bvh(#[from] BvhError),
}

pub type RenderResult<T> = Result<T, RenderError>;

/// What a ray sees when it leaves the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Background {
    /// A flat color (black for scenes lit only by emitters).
    Solid(Color),
    /// White at the horizon blending to light blue overhead.
    SkyGradient,
}

impl Background {
    /// Color seen along an escaping ray.
    pub fn color(&self, ray: &Ray) -> Color {
        match self {
            Background::Solid(color) => *color,
            Background::SkyGradient => sky_gradient(ray),
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Background::Solid(Color::ZERO)
    }
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    /// Samples per pixel for anti-aliasing (values below 1 render as 1)
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Color of rays that miss every shape
    pub background: Background,
    /// Edge length of a render bucket in pixels
    pub bucket_size: u32,
    /// Seed for reproducible renders; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            samples_per_pixel: 10,
            max_depth: 50,
            background: Background::default(),
            bucket_size: DEFAULT_BUCKET_SIZE,
            seed: None,
        }
    }
}

impl RenderSettings {
    /// Samples per pixel after clamping to at least one.
    pub fn effective_samples(&self) -> u32 {
        self.samples_per_pixel.max(1)
    }

    /// Create the random source for one unit of work.
    ///
    /// With a seed, stream `n` is a pure function of `(seed, n)`, so a render
    /// is reproducible no matter how rayon schedules buckets.
    pub fn rng_for(&self, stream: u64) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(stream)),
            None => StdRng::from_entropy(),
        }
    }
}

/// Compute the color seen by a ray.
///
/// Light emitted at the hit point plus, while `depth < max_depth` and the
/// material scatters, the attenuated radiance of the scattered ray. The
/// bounces are unrolled into a loop carrying the path throughput, so the
/// stack stays flat for any `max_depth`.
pub fn radiance(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    max_depth: u32,
    background: &Background,
    rng: &mut dyn RngCore,
) -> Color {
    let mut color = Color::ZERO;
    let mut throughput = Color::ONE;
    let mut ray = *ray;
    let mut depth = depth;

    loop {
        let Some(rec) = world.hit(&ray, Interval::new(HIT_EPSILON, f32::INFINITY)) else {
            return color + throughput * background.color(&ray);
        };

        color += throughput * rec.material.emitted(&ray, &rec);
        if depth >= max_depth {
            return color;
        }

        match rec.material.scatter(&ray, &rec, rng) {
            Some(result) => {
                throughput *= result.attenuation;
                ray = result.scattered;
                depth += 1;
            }
            None => return color,
        }
    }
}

/// Compute sky gradient background.
fn sky_gradient(ray: &Ray) -> Color {
    let a = 0.5 * (ray.direction().y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Render a single pixel with multi-sampling.
///
/// Each sample jitters uniformly inside the pixel's footprint on the image
/// plane, where x spans [-1, 1] left to right and y spans [1, -1] top to
/// bottom.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    settings: &RenderSettings,
    rng: &mut dyn RngCore,
) -> Color {
    let view = camera.view();
    let half_width = view.width as f32 / 2.0;
    let half_height = view.height as f32 / 2.0;
    let samples = settings.effective_samples();

    let mut pixel_color = Color::ZERO;
    for _ in 0..samples {
        let (jx, jy) = sample_square(rng);
        let u = (x as f32 + jx - half_width) / half_width;
        let v = (half_height - (y as f32 + jy)) / half_height;

        let ray = camera.get_ray(u, v);
        pixel_color += radiance(&ray, world, 0, settings.max_depth, &settings.background, rng);
    }

    // Average the samples
    pixel_color / samples as f32
}

/// Validate the scene and build the acceleration structure for one render.
pub fn build_world(scene: &Scene, rng: &mut dyn RngCore) -> RenderResult<BvhNode> {
    let objects = scene
        .shapes
        .iter()
        .enumerate()
        .map(|(index, node)| Sphere::from_node(index, node).map(|s| Box::new(s) as Box<dyn Hittable>))
        .collect::<Result<Vec<_>, _>>()?;

    let start = Instant::now();
    let bvh = BvhNode::new(objects, rng)?;
    log::debug!(
        "Built BVH over {} primitives (depth {}) in {:?}",
        bvh.primitive_count(),
        bvh.depth(),
        start.elapsed()
    );

    Ok(bvh)
}

/// Render the scene as seen by `camera`.
///
/// The BVH is rebuilt from the current shapes on every call. Buckets are
/// traced in parallel, each with its own random source, and written back to
/// disjoint regions of the image.
pub fn render(scene: &Scene, camera: &Camera, settings: &RenderSettings) -> RenderResult<ImageBuffer> {
    camera.validate()?;

    if settings.samples_per_pixel < 1 {
        log::warn!(
            "samples_per_pixel = {} is below 1, rendering with 1 sample",
            settings.samples_per_pixel
        );
    }

    let view = camera.view();
    log::info!(
        "Rendering '{}': {} shapes ({} lights), {}x{} @ {} spp, max depth {}",
        scene.name,
        scene.shape_count(),
        scene.light_count(),
        view.width,
        view.height,
        settings.effective_samples(),
        settings.max_depth
    );

    let start = Instant::now();
    let mut build_rng = settings.rng_for(0);
    let world = build_world(scene, &mut build_rng)?;

    let buckets = generate_buckets(view.width, view.height, settings.bucket_size.max(1));
    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            let mut rng = settings.rng_for(bucket.index as u64 + 1);
            let pixels = render_bucket(bucket, camera, &world, settings, &mut rng);
            BucketResult::new(*bucket, pixels)
        })
        .collect();

    let mut image = ImageBuffer::new(view.width, view.height);
    for result in &results {
        result.write_to(&mut image);
    }

    log::info!(
        "Rendered {} buckets in {:?}",
        results.len(),
        start.elapsed()
    );

    Ok(image)
}
