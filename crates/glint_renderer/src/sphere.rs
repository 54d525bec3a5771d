//! Sphere primitive for ray tracing.

use crate::{
    error::{SceneError, SceneResult},
    hittable::{HitRecord, Hittable},
    Material, Ray,
};
use glint_math::{Interval, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Fails if the radius is not a positive finite number or the center is
    /// not finite.
    pub fn new(center: Vec3, radius: f32, material: Material) -> SceneResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SceneError::InvalidRadius(radius));
        }
        if !center.is_finite() {
            return Err(SceneError::InvalidCenter(center));
        }

        Ok(Self {
            center,
            radius,
            material,
        })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    fn record(&self, ray: &Ray, t: f32) -> HitRecord<'_> {
        let p = ray.at(t);
        HitRecord {
            t,
            p,
            normal: (p - self.center) / self.radius,
            material: &self.material,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        // Half-b form: b is half the textbook coefficient
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        // Tangent grazes (discriminant == 0) count as misses
        let discriminant = b * b - a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        let near = (-b - sqrtd) / a;
        if ray_t.surrounds(near) {
            return Some(self.record(ray, near));
        }

        let far = (-b + sqrtd) / a;
        if ray_t.surrounds(far) {
            return Some(self.record(ray, far));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grey() -> Material {
        Material::lambertian(Vec3::splat(0.5)).unwrap()
    }

    fn unit_sphere_ahead() -> Sphere {
        Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, grey()).unwrap()
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.hit(&ray, Interval::from_min(0.001)).unwrap();

        assert!((rec.t - 0.5).abs() < 1e-6);
        assert!((rec.p - Vec3::new(0.0, 0.0, -0.5)).length() < 1e-6);
        assert!((rec.normal - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-6);
        assert_eq!(rec.material, sphere.material());
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = unit_sphere_ahead();

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.hit(&ray, Interval::from_min(0.001)).is_none());
    }

    #[test]
    fn test_tangent_ray_is_a_miss() {
        let sphere = unit_sphere_ahead();

        // Grazes the top of the sphere at (0, 0.5, -1)
        let ray = Ray::new(Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(sphere.hit(&ray, Interval::from_min(0.001)).is_none());
    }

    #[test]
    fn test_far_root_when_near_root_out_of_range() {
        let sphere = unit_sphere_ahead();

        // Origin inside the sphere: the near root is behind the ray
        let ray = Ray::new(Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, -1.0));
        let rec = sphere.hit(&ray, Interval::from_min(0.001)).unwrap();

        assert!((rec.t - 0.5).abs() < 1e-6);
        assert!((rec.normal - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_roots_on_interval_bounds_are_rejected() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        // Roots are exactly 0.5 and 1.5
        assert!(sphere.hit(&ray, Interval::new(0.0, 0.5)).is_none());
        assert!(sphere.hit(&ray, Interval::new(0.5, 1.5)).is_none());

        let rec = sphere.hit(&ray, Interval::new(0.5, 1.6)).unwrap();
        assert!((rec.t - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_radius_rejected() {
        let center = Vec3::ZERO;
        assert_eq!(
            Sphere::new(center, 0.0, grey()),
            Err(SceneError::InvalidRadius(0.0))
        );
        assert!(Sphere::new(center, -1.0, grey()).is_err());
        assert!(Sphere::new(center, f32::NAN, grey()).is_err());
        assert!(Sphere::new(center, f32::INFINITY, grey()).is_err());
    }

    #[test]
    fn test_non_finite_center_rejected() {
        let center = Vec3::new(f32::NAN, 0.0, 0.0);
        assert!(matches!(
            Sphere::new(center, 1.0, grey()),
            Err(SceneError::InvalidCenter(_))
        ));
    }

    fn vec3_in(range: std::ops::Range<f32>) -> impl Strategy<Value = Vec3> {
        (range.clone(), range.clone(), range).prop_map(|(x, y, z)| Vec3::new(x, y, z))
    }

    proptest! {
        #[test]
        fn prop_hit_from_outside_lands_on_surface(
            center in vec3_in(-10.0..10.0),
            radius in 0.1f32..5.0,
            offset in vec3_in(-1.0..1.0),
            distance in 1.5f32..20.0,
        ) {
            prop_assume!(offset.length() > 0.1);
            let sphere = Sphere::new(center, radius, grey()).unwrap();

            // Start outside the sphere and aim straight at its center
            let origin = center + offset.normalize() * radius * distance;
            let ray = Ray::new(origin, center - origin);

            let rec = sphere.hit(&ray, Interval::from_min(0.001));
            prop_assert!(rec.is_some());
            let rec = rec.unwrap();

            prop_assert!(rec.t > 0.0);
            let dist = (rec.p - center).length();
            prop_assert!((dist - radius).abs() < 1e-3 * radius.max(1.0) * distance);
        }

        #[test]
        fn prop_normal_is_unit_and_outward(
            origin in vec3_in(-10.0..10.0),
            target in vec3_in(-1.0..1.0),
            radius in 0.2f32..2.0,
        ) {
            let center = Vec3::ZERO;
            prop_assume!(origin.length() > radius * 1.5);
            prop_assume!((target - origin).length() > 1e-3);
            let sphere = Sphere::new(center, radius, grey()).unwrap();
            let ray = Ray::new(origin, target - origin);

            if let Some(rec) = sphere.hit(&ray, Interval::from_min(0.001)) {
                prop_assert!((rec.normal.length() - 1.0).abs() < 1e-3);
                prop_assert!(rec.normal.dot(rec.p - center) > 0.0);
            }
        }
    }
}
