//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing bounded by a maximum depth
//! - Anti-aliasing via jittered multi-sampling
//! - Gamma correction
//! - A normal-shading preview mode

use std::time::Instant;

use crate::error::RenderError;
use crate::output::PixelSink;
use crate::random::gen_f32;
use crate::{Camera, Color, Hittable, Ray, Vec3};
use glint_math::Interval;
use rand::RngCore;

/// Maximum number of bounces before a path is terminated as black.
pub const MAX_DEPTH: u32 = 50;

/// Lower bound on hit distances, so a scattered ray does not re-hit the
/// surface it just left.
pub const T_MIN: f32 = 0.001;

/// How a primary ray's hit is turned into a color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Shading {
    /// Full path tracing through material scattering.
    #[default]
    Path,
    /// Map the outward surface normal to RGB, no bounces.
    Normals,
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Jitter samples inside each pixel. When off, one sample is taken at
    /// `u = x / width, v = y / height`: the pixel's lower-left corner, not
    /// its center, as in the classic unjittered scan.
    pub jitter: bool,
    /// Hit shading mode
    pub shading: Shading,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 200,
            height: 100,
            samples_per_pixel: 100,
            max_depth: MAX_DEPTH,
            jitter: true,
            shading: Shading::Path,
        }
    }
}

impl RenderConfig {
    /// Samples actually drawn per pixel.
    pub fn effective_samples(&self) -> u32 {
        if self.jitter {
            self.samples_per_pixel
        } else {
            1
        }
    }
}

/// Compute the color seen by a ray, with the default depth limit.
///
/// `depth` counts bounces already taken; start with 0.
pub fn trace(ray: &Ray, world: &dyn Hittable, depth: u32, rng: &mut dyn RngCore) -> Color {
    trace_bounded(ray, world, depth, MAX_DEPTH, rng)
}

/// Compute the color seen by a ray.
///
/// This is the core path tracing function. A hit below `max_depth` scatters
/// and recurses, multiplying by the material's attenuation. Absorption or
/// running out of depth yields black. A miss returns the sky gradient.
pub fn trace_bounded(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    max_depth: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let Some(rec) = world.hit(ray, Interval::from_min(T_MIN)) else {
        return sky_gradient(ray);
    };

    if depth >= max_depth {
        return Color::ZERO;
    }

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => {
            result.attenuation * trace_bounded(&result.scattered, world, depth + 1, max_depth, rng)
        }
        None => Color::ZERO,
    }
}

/// Map a unit normal's components from [-1, 1] to [0, 1].
#[inline]
pub fn normal_to_color(normal: Vec3) -> Color {
    0.5 * (normal + Color::ONE)
}

/// Color a ray by the normal of its first hit, or the sky on a miss.
pub fn trace_normals(ray: &Ray, world: &dyn Hittable) -> Color {
    match world.hit(ray, Interval::from_min(T_MIN)) {
        Some(rec) => normal_to_color(rec.normal),
        None => sky_gradient(ray),
    }
}

/// Vertical white-to-blue background gradient.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let t = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    (1.0 - t) * white + t * blue
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Gamma-correct a linear color and clamp it into [0, 1].
pub fn finish_color(linear: Color) -> Color {
    let gamma = |c: f32| Interval::UNIT.clamp(linear_to_gamma(c));
    Color::new(gamma(linear.x), gamma(linear.y), gamma(linear.z))
}

/// Pixel sampling loop.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a renderer, validating the configuration.
    pub fn new(config: RenderConfig) -> Result<Self, RenderError> {
        if config.width == 0 || config.height == 0 {
            return Err(RenderError::InvalidDimensions {
                width: config.width,
                height: config.height,
            });
        }
        if config.samples_per_pixel == 0 {
            return Err(RenderError::InvalidSampleCount);
        }
        if config.max_depth == 0 {
            return Err(RenderError::InvalidMaxDepth);
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render a single pixel with multi-sampling.
    ///
    /// `(x, y)` uses Cartesian orientation: `y = 0` is the bottom row.
    /// Returns the averaged, gamma-corrected color with channels in [0, 1].
    pub fn render_pixel(
        &self,
        camera: &Camera,
        world: &dyn Hittable,
        x: u32,
        y: u32,
        rng: &mut dyn RngCore,
    ) -> Color {
        let width = self.config.width as f32;
        let height = self.config.height as f32;
        let samples = self.config.effective_samples();

        let mut pixel_color = Color::ZERO;
        for _ in 0..samples {
            let (du, dv) = if self.config.jitter {
                (gen_f32(rng), gen_f32(rng))
            } else {
                (0.0, 0.0)
            };
            let u = (x as f32 + du) / width;
            let v = (y as f32 + dv) / height;

            let ray = camera.get_ray(u, v);
            pixel_color += match self.config.shading {
                Shading::Path => trace_bounded(&ray, world, 0, self.config.max_depth, rng),
                Shading::Normals => trace_normals(&ray, world),
            };
        }

        finish_color(pixel_color / samples as f32)
    }

    /// Render the entire scene into `sink`.
    ///
    /// Pixels are emitted top row first, left to right within a row.
    pub fn render<S: PixelSink>(
        &self,
        camera: &Camera,
        world: &dyn Hittable,
        rng: &mut dyn RngCore,
        sink: &mut S,
    ) -> Result<(), S::Error> {
        let RenderConfig { width, height, .. } = self.config;
        log::info!(
            "Rendering {}x{} @ {} spp, max depth {}, {:?} shading",
            width,
            height,
            self.config.effective_samples(),
            self.config.max_depth,
            self.config.shading
        );
        let start = Instant::now();

        sink.begin(width, height)?;
        for y in (0..height).rev() {
            log::debug!("Scanlines remaining: {}", y + 1);
            for x in 0..width {
                let color = self.render_pixel(camera, world, x, y, rng);
                sink.put(color)?;
            }
        }
        sink.finish()?;

        log::info!("Rendered in {:?}", start.elapsed());
        Ok(())
    }
}
