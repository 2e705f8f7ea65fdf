use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use simplex_core::Color;
use simplex_renderer::Background;

/// Log verbosity accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// What escaping rays see.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum BackgroundArg {
    Black,
    Sky,
}

impl From<BackgroundArg> for Background {
    fn from(arg: BackgroundArg) -> Self {
        match arg {
            BackgroundArg::Black => Background::Solid(Color::ZERO),
            BackgroundArg::Sky => Background::SkyGradient,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "simplex")]
#[command(about = "Render the random-spheres demo scene to a PPM image")]
pub struct Args {
    /// Output image path
    #[arg(default_value = "output.ppm")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Samples per pixel
    #[arg(long, short = 's', default_value_t = 50)]
    pub samples: u32,

    /// Maximum bounce depth
    #[arg(long, default_value_t = 50)]
    pub max_depth: u32,

    /// Seed for a reproducible scene and render
    #[arg(long)]
    pub seed: Option<u64>,

    /// Background seen by rays that leave the scene
    #[arg(long, value_enum, default_value = "sky")]
    pub background: BackgroundArg,

    /// Logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
