//! Scene: an arena of spheres with closest-hit queries.

use crate::{HitRecord, Hittable, Ray, Sphere};
use glint_math::Interval;

/// Stable handle to an object owned by a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(usize);

impl ObjectId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Ordered collection of primitives.
///
/// The scene owns its objects for its whole lifetime. Order only matters for
/// ties at exactly equal `t`, where the first object added wins.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<Sphere>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object to the scene and return its handle.
    pub fn add(&mut self, object: Sphere) -> ObjectId {
        let id = ObjectId(self.objects.len());
        log::trace!(
            "Added sphere {:?}: center={} radius={}",
            id,
            object.center(),
            object.radius()
        );
        self.objects.push(object);
        id
    }

    /// Look up an object by handle.
    pub fn get(&self, id: ObjectId) -> Option<&Sphere> {
        self.objects.get(id.0)
    }

    /// Iterate objects in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Sphere> {
        self.objects.iter()
    }

    /// Remove all objects. Previously issued handles become dangling.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl FromIterator<Sphere> for Scene {
    fn from_iter<I: IntoIterator<Item = Sphere>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}

impl Hittable for Scene {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;

        for object in &self.objects {
            let closest_so_far = closest.map_or(ray_t.max, |rec| rec.t);
            if let Some(rec) = object.hit(ray, ray_t.with_max(closest_so_far)) {
                closest = Some(rec);
            }
        }

        closest
    }
}
