//! Error types for scene construction and rendering.
//!
//! Everything here is raised at construction time or by an output sink.
//! Once a scene is built, intersection, scattering and tracing are total.

use thiserror::Error;

/// Errors raised while building scene objects.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("Sphere center must be finite, got {0}")]
    InvalidCenter(glam::Vec3),

    #[error("Metal roughness must lie in [0, 1], got {0}")]
    InvalidRoughness(f32),

    #[error("Albedo components must lie in [0, 1], got {0}")]
    InvalidAlbedo(glam::Vec3),

    #[error("Degenerate camera: {0}")]
    DegenerateCamera(&'static str),
}

/// Errors raised by the renderer or an output sink.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Image dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Samples per pixel must be non-zero")]
    InvalidSampleCount,

    #[error("Maximum trace depth must be non-zero")]
    InvalidMaxDepth,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SceneResult<T> = Result<T, SceneError>;
