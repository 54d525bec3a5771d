//! Glint Renderer - CPU Path Tracing
//!
//! A small Monte Carlo path tracer: spheres lit by a sky gradient, with
//! diffuse and metal surfaces, jittered anti-aliasing and gamma correction.
//!
//! Randomness is always injected as `&mut dyn RngCore`; seed the generator
//! to get bit-identical renders.

mod camera;
mod error;
mod hittable;
mod material;
mod output;
mod random;
mod renderer;
mod scene;
mod sphere;

pub use camera::Camera;
pub use error::{RenderError, SceneError, SceneResult};
pub use hittable::{HitRecord, Hittable};
pub use material::{Color, Material, ScatterResult};
pub use output::{color_to_rgb8, quantize, ImageBuffer, PixelSink, PpmWriter};
pub use random::{gen_f32, gen_f32_range, random_in_unit_sphere};
pub use renderer::{
    finish_color, linear_to_gamma, normal_to_color, sky_gradient, trace, trace_bounded,
    trace_normals, RenderConfig, Renderer, Shading, MAX_DEPTH, T_MIN,
};
pub use scene::{ObjectId, Scene};
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from glint_math
pub use glint_math::{Interval, Ray, Vec3};
