use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glint_renderer::{RenderConfig, Shading, MAX_DEPTH};
use log::LevelFilter;

/// Log levels accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
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

/// Built-in scenes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneChoice {
    /// Diffuse center sphere flanked by a fuzzy and a rough metal sphere
    Materials,
    /// Grey diffuse sphere on a grey diffuse ground
    Diffuse,
    /// Diffuse center sphere flanked by two perfect mirrors
    Mirror,
}

/// How hits are shaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShadingChoice {
    /// Path trace through the materials
    Path,
    /// Color each pixel by the surface normal it hits
    Normals,
}

impl From<ShadingChoice> for Shading {
    fn from(choice: ShadingChoice) -> Self {
        match choice {
            ShadingChoice::Path => Shading::Path,
            ShadingChoice::Normals => Shading::Normals,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "glint")]
#[command(about = "Render spheres under a sky gradient with a Monte Carlo path tracer")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 200)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 100)]
    pub height: u32,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value_t = 100)]
    pub samples: u32,

    /// Maximum number of bounces per path
    #[arg(long, default_value_t = MAX_DEPTH)]
    pub max_depth: u32,

    /// Take one unjittered sample per pixel (disables anti-aliasing)
    #[arg(long)]
    pub no_jitter: bool,

    /// Random seed; a fresh one is drawn and logged when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Scene to render
    #[arg(long, value_enum, default_value_t = SceneChoice::Materials)]
    pub scene: SceneChoice,

    /// Shading mode
    #[arg(long, value_enum, default_value_t = ShadingChoice::Path)]
    pub shading: ShadingChoice,

    /// Output file (.ppm or .png); PPM goes to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Set the logging level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl Args {
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            samples_per_pixel: self.samples,
            max_depth: self.max_depth,
            jitter: !self.no_jitter,
            shading: self.shading.into(),
        }
    }
}
