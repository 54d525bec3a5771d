use crate::Vec3;

/// A ray in 3D space with an origin and a direction.
///
/// Points along the ray are `origin + t * direction`. The direction does not
/// need to be normalized, but it must be finite and non-zero.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    ///
    /// # Panics
    ///
    /// Panics if `direction` is zero-length or not finite.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        assert!(
            direction.is_finite() && direction.length_squared() > 0.0,
            "ray direction must be finite and non-zero, got {direction}"
        );
        Self { origin, direction }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let direction = Vec3::new(0.0, 1.0, 0.0);
        let ray = Ray::new(origin, direction);

        assert_eq!(ray.origin, origin);
        assert_eq!(ray.direction, direction);
        assert_eq!(ray.origin(), origin);
        assert_eq!(ray.direction(), direction);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(1.0), Vec3::X);
        assert_eq!(ray.at(2.0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_at_unnormalized_direction() {
        let ray = Ray::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(0.0, 0.0, -2.0));
        assert_eq!(ray.at(0.25), Vec3::new(1.0, 1.0, 0.5));
    }

    #[test]
    #[should_panic(expected = "ray direction must be finite and non-zero")]
    fn test_zero_direction_rejected() {
        let _ = Ray::new(Vec3::ZERO, Vec3::ZERO);
    }

    #[test]
    #[should_panic(expected = "ray direction must be finite and non-zero")]
    fn test_nan_direction_rejected() {
        let _ = Ray::new(Vec3::ZERO, Vec3::new(f32::NAN, 0.0, -1.0));
    }
}
