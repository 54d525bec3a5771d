use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use glint_renderer::{Camera, ImageBuffer, PpmWriter, Renderer, Scene, Vec3};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

mod cli;
mod scenes;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.into())
        .parse_default_env()
        .init();

    let renderer = Renderer::new(args.render_config())?;
    let scene = scenes::build(args.scene).context("Failed to build scene")?;
    info!(
        "Scene {:?} with {} spheres, {:?} shading",
        args.scene,
        scene.len(),
        args.shading
    );

    // Look down -Z; at 2:1 this is the classic 4x2 image plane
    let aspect = args.width as f32 / args.height as f32;
    let camera = Camera::look_at(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y, 90.0, aspect)
        .context("Failed to build camera")?;

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Seed: {}", seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    match args.output.as_deref() {
        None => {
            let mut ppm = PpmWriter::new(BufWriter::new(io::stdout().lock()));
            renderer.render(&camera, &scene, &mut rng, &mut ppm)?;
        }
        Some(path) => render_to_file(&renderer, &camera, &scene, &mut rng, path)?,
    }

    Ok(())
}

fn render_to_file(
    renderer: &Renderer,
    camera: &Camera,
    scene: &Scene,
    rng: &mut ChaCha8Rng,
    path: &Path,
) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("ppm") => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut ppm = PpmWriter::new(BufWriter::new(file));
            renderer.render(camera, scene, rng, &mut ppm)?;
        }
        Some("png") => {
            let mut buffer = ImageBuffer::default();
            renderer
                .render(camera, scene, rng, &mut buffer)
                .unwrap_or_else(|never| match never {});
            save_png(&buffer, path)?;
        }
        _ => bail!(
            "Unsupported output extension for {}; use .ppm or .png",
            path.display()
        ),
    }

    info!("Output written to {}", path.display());
    Ok(())
}

fn save_png(buffer: &ImageBuffer, path: &Path) -> Result<()> {
    let image = image::RgbImage::from_raw(buffer.width, buffer.height, buffer.to_rgb8())
        .context("Image buffer size does not match its dimensions")?;
    image
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
