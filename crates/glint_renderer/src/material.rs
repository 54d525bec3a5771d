//! Surface materials and scattering.
//!
//! Materials form a closed set. Adding a variant means extending
//! [`Material`] and the match in [`Material::scatter`].

use crate::error::{SceneError, SceneResult};
use crate::random::random_in_unit_sphere;
use crate::{hittable::HitRecord, Ray};
use glint_math::{Interval, Vec3};
use rand::RngCore;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Result of a successful scatter: how much light survives and where it goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterResult {
    /// Per-channel attenuation, each component in [0, 1]
    pub attenuation: Color,
    /// The continuing ray, starting at the hit point
    pub scattered: Ray,
}

/// A surface material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Ideal diffuse surface.
    Lambertian { albedo: Color },
    /// Reflective surface. `fuzz` 0.0 is a perfect mirror, 1.0 is very rough.
    Metal { albedo: Color, fuzz: f32 },
}

impl Material {
    /// Create a Lambertian material with the given albedo color.
    pub fn lambertian(albedo: Color) -> SceneResult<Self> {
        Ok(Material::Lambertian {
            albedo: check_albedo(albedo)?,
        })
    }

    /// Create a Metal material.
    ///
    /// - `albedo`: The color of the metal
    /// - `fuzz`: Roughness in [0, 1]
    pub fn metal(albedo: Color, fuzz: f32) -> SceneResult<Self> {
        if !Interval::UNIT.contains(fuzz) {
            return Err(SceneError::InvalidRoughness(fuzz));
        }
        Ok(Material::Metal {
            albedo: check_albedo(albedo)?,
            fuzz,
        })
    }

    /// Surface color of the material.
    pub fn albedo(&self) -> Color {
        match *self {
            Material::Lambertian { albedo } | Material::Metal { albedo, .. } => albedo,
        }
    }

    /// Scatter an incoming ray.
    ///
    /// Returns `None` if the ray is absorbed.
    pub fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        match *self {
            Material::Lambertian { albedo } => Some(scatter_lambertian(albedo, rec, rng)),
            Material::Metal { albedo, fuzz } => scatter_metal(albedo, fuzz, ray_in, rec, rng),
        }
    }
}

fn check_albedo(albedo: Color) -> SceneResult<Color> {
    let valid = albedo.to_array().iter().all(|&c| Interval::UNIT.contains(c));
    if valid {
        Ok(albedo)
    } else {
        Err(SceneError::InvalidAlbedo(albedo))
    }
}

fn scatter_lambertian(albedo: Color, rec: &HitRecord, rng: &mut dyn RngCore) -> ScatterResult {
    // Aim at a random point in the unit sphere tangent to the hit point
    let mut scatter_direction = rec.normal + random_in_unit_sphere(rng);

    // Catch degenerate scatter direction
    if scatter_direction.length_squared() < 1e-8 {
        scatter_direction = rec.normal;
    }

    ScatterResult {
        attenuation: albedo,
        scattered: Ray::new(rec.p, scatter_direction),
    }
}

fn scatter_metal(
    albedo: Color,
    fuzz: f32,
    ray_in: &Ray,
    rec: &HitRecord,
    rng: &mut dyn RngCore,
) -> Option<ScatterResult> {
    let reflected = reflect(ray_in.direction().normalize(), rec.normal);

    // A mirror draws no random numbers
    let scattered_dir = if fuzz > 0.0 {
        reflected + fuzz * random_in_unit_sphere(rng)
    } else {
        reflected
    };

    // Fuzzed reflections that end up below the surface are absorbed
    if scattered_dir.dot(rec.normal) <= 0.0 {
        return None;
    }

    Some(ScatterResult {
        attenuation: albedo,
        scattered: Ray::new(rec.p, scattered_dir),
    })
}

/// Reflect a vector about a normal.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}
