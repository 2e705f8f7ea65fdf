use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use simplex_math::Vec3;
use simplex_renderer::{render, RenderSettings};

mod cli;
mod ppm;
mod scene;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::from(args.log_level))
        .init();

    let scene = scene::random_spheres(&mut scene::scene_rng(args.seed));

    let camera = scene
        .add_camera()
        .with_view(args.width, args.height)
        .with_projection(20.0, 0.0)
        .with_position(Vec3::new(13.0, 2.0, 3.0), Vec3::ZERO);

    let settings = RenderSettings {
        samples_per_pixel: args.samples,
        max_depth: args.max_depth,
        background: args.background.into(),
        seed: args.seed,
        ..Default::default()
    };

    let start = Instant::now();
    let image = render(&scene, &camera, &settings).context("render failed")?;
    log::info!("Rendered in {:?}", start.elapsed());

    ppm::save_ppm(&image, &args.output)?;
    log::info!("Saved {}", args.output.display());

    Ok(())
}
