//! Camera for ray generation.

use crate::error::{SceneError, SceneResult};
use crate::Ray;
use glint_math::Vec3;

/// Pinhole camera described by its image-plane frame.
///
/// `(u, v) = (0, 0)` maps to the lower-left corner of the image plane and
/// `(1, 1)` to the upper-right corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Camera {
    /// Create a camera from an explicit frame.
    pub fn new(
        origin: Vec3,
        lower_left_corner: Vec3,
        horizontal: Vec3,
        vertical: Vec3,
    ) -> SceneResult<Self> {
        if !(origin.is_finite()
            && lower_left_corner.is_finite()
            && horizontal.is_finite()
            && vertical.is_finite())
        {
            return Err(SceneError::DegenerateCamera("frame vectors must be finite"));
        }
        if horizontal.length_squared() == 0.0 || vertical.length_squared() == 0.0 {
            return Err(SceneError::DegenerateCamera("image plane spans must be non-zero"));
        }
        if horizontal.cross(vertical).length_squared() == 0.0 {
            return Err(SceneError::DegenerateCamera("image plane spans are parallel"));
        }

        // The plane must not pass through the origin, or corner rays vanish
        let normal = horizontal.cross(vertical);
        if (lower_left_corner - origin).dot(normal) == 0.0 {
            return Err(SceneError::DegenerateCamera("image plane contains the origin"));
        }

        Ok(Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
        })
    }

    /// Create a camera positioned at `look_from`, aimed at `look_at`.
    ///
    /// - `vup`: world-space up hint
    /// - `vfov`: vertical field of view in degrees, in (0, 180)
    /// - `aspect`: image width over height
    pub fn look_at(
        look_from: Vec3,
        look_at: Vec3,
        vup: Vec3,
        vfov: f32,
        aspect: f32,
    ) -> SceneResult<Self> {
        if !(vfov > 0.0 && vfov < 180.0) {
            return Err(SceneError::DegenerateCamera("vertical fov must lie in (0, 180) degrees"));
        }
        if !(aspect.is_finite() && aspect > 0.0) {
            return Err(SceneError::DegenerateCamera("aspect ratio must be positive"));
        }
        let view = look_from - look_at;
        if view.length_squared() == 0.0 {
            return Err(SceneError::DegenerateCamera("look_from and look_at coincide"));
        }

        let half_height = (vfov.to_radians() / 2.0).tan();
        let half_width = aspect * half_height;

        // Camera basis vectors
        let w = view.normalize();
        let u = vup.cross(w).normalize_or_zero();
        if u == Vec3::ZERO {
            return Err(SceneError::DegenerateCamera("vup is parallel to the view direction"));
        }
        let v = w.cross(u);

        Self::new(
            look_from,
            look_from - half_width * u - half_height * v - w,
            2.0 * half_width * u,
            2.0 * half_height * v,
        )
    }

    /// Generate the ray through normalized image-plane coordinates `(u, v)`.
    #[inline]
    pub fn get_ray(&self, u: f32, v: f32) -> Ray {
        Ray::new(
            self.origin,
            self.lower_left_corner + u * self.horizontal + v * self.vertical - self.origin,
        )
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }
}

impl Default for Camera {
    /// Camera at the world origin looking down -Z through a 4x2 image plane.
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            lower_left_corner: Vec3::new(-2.0, -1.0, -1.0),
            horizontal: Vec3::new(4.0, 0.0, 0.0),
            vertical: Vec3::new(0.0, 2.0, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera_corners() {
        let camera = Camera::default();

        let ray = camera.get_ray(0.0, 0.0);
        assert_eq!(ray.origin(), Vec3::ZERO);
        assert_eq!(ray.direction(), Vec3::new(-2.0, -1.0, -1.0));

        assert_eq!(camera.get_ray(1.0, 1.0).direction(), Vec3::new(2.0, 1.0, -1.0));
        assert_eq!(camera.get_ray(0.5, 0.5).direction(), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_get_ray_is_pure() {
        let camera = Camera::default();
        assert_eq!(camera.get_ray(0.3, 0.7), camera.get_ray(0.3, 0.7));
    }

    #[test]
    fn test_look_at_matches_default_frame() {
        // 90 degree vertical fov at distance 1 gives a plane 2 units tall
        let camera = Camera::look_at(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::Y,
            90.0,
            2.0,
        )
        .unwrap();
        let default = Camera::default();

        for (u, v) in [(0.0, 0.0), (1.0, 1.0), (0.5, 0.5), (0.25, 0.75)] {
            let a = camera.get_ray(u, v).direction();
            let b = default.get_ray(u, v).direction();
            assert!((a - b).length() < 1e-5, "({u}, {v}): {a} != {b}");
        }
    }

    #[test]
    fn test_look_at_center_ray_points_at_target() {
        let from = Vec3::new(3.0, 3.0, 2.0);
        let at = Vec3::new(0.0, 0.0, -1.0);
        let camera = Camera::look_at(from, at, Vec3::Y, 20.0, 16.0 / 9.0).unwrap();

        let dir = camera.get_ray(0.5, 0.5).direction().normalize();
        assert!((dir - (at - from).normalize()).length() < 1e-5);
    }

    #[test]
    fn test_degenerate_cameras_rejected() {
        assert!(Camera::new(Vec3::ZERO, Vec3::new(-2.0, -1.0, -1.0), Vec3::ZERO, Vec3::Y).is_err());
        assert!(Camera::new(Vec3::ZERO, Vec3::new(-2.0, -1.0, -1.0), Vec3::X, Vec3::X).is_err());
        assert!(Camera::new(Vec3::ZERO, Vec3::new(-2.0, -1.0, 0.0), Vec3::X, Vec3::Y).is_err());
        assert!(Camera::new(Vec3::splat(f32::NAN), Vec3::NEG_Z, Vec3::X, Vec3::Y).is_err());

        assert!(Camera::look_at(Vec3::ZERO, Vec3::ZERO, Vec3::Y, 90.0, 2.0).is_err());
        assert!(Camera::look_at(Vec3::ZERO, Vec3::NEG_Y, Vec3::Y, 90.0, 2.0).is_err());
        assert!(Camera::look_at(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y, 0.0, 2.0).is_err());
        assert!(Camera::look_at(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y, 90.0, 0.0).is_err());
    }
}
