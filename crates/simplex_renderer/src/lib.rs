//! SimplexRay Renderer - CPU Path Tracing
//!
//! A Monte Carlo path tracer over a scene of spheres:
//! - BVH-accelerated ray/scene intersection
//! - Lambertian, metal, dielectric and emissive materials
//! - Bucketed parallel rendering with per-bucket random streams

mod hittable;
mod sampling;
mod scatter;
mod sphere;
mod bvh;
mod renderer;
mod bucket;

pub use hittable::{HitRecord, Hittable, HittableList};
pub use scatter::{Scatter, ScatterResult};
pub use sphere::Sphere;
pub use bvh::{BvhError, BvhNode};
pub use renderer::{
    build_world, radiance, render, render_pixel, Background, RenderError, RenderResult,
    RenderSettings, HIT_EPSILON,
};
pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use sampling::random_in_unit_sphere;

/// Re-export common types from the scene and math crates
pub use simplex_core::{Camera, Color, ImageBuffer, Material, Scene, Shape, Texture};
pub use simplex_math::{Aabb, Interval, Ray, Vec3};
