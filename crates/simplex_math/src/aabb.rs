use crate::{Interval, Ray, Vec3};

/// Axis-Aligned Bounding Box for the BVH.
///
/// Stored as its minimum and maximum corners. Only ever used to prune
/// intersection queries, never for shading.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create an AABB from its minimum and maximum corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB from two arbitrary corner points.
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Create an AABB that surrounds two other AABBs.
    pub fn surrounding(box0: &Aabb, box1: &Aabb) -> Self {
        Self {
            min: box0.min.min(box1.min),
            max: box0.max.max(box1.max),
        }
    }

    /// Minimum corner coordinate on an axis (0=X, 1=Y, 2=Z).
    #[inline]
    pub fn axis_min(&self, n: usize) -> f32 {
        self.min[n.min(2)]
    }

    /// Test if a ray intersects this AABB within the given interval.
    ///
    /// Slab method. Zero direction components divide to ±infinity; a NaN
    /// slab bound (origin exactly on a slab plane) leaves the running window
    /// untouched because `f32::max`/`f32::min` ignore NaN operands.
    pub fn hit(&self, r: &Ray, mut ray_t: Interval) -> bool {
        let ray_orig = r.origin();
        let ray_dir = r.direction();

        for axis in 0..3 {
            let adinv = 1.0 / ray_dir[axis];
            let mut t0 = (self.min[axis] - ray_orig[axis]) * adinv;
            let mut t1 = (self.max[axis] - ray_orig[axis]) * adinv;
            if adinv < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }
            ray_t.min = t0.max(ray_t.min);
            ray_t.max = t1.min(ray_t.max);
            if ray_t.max <= ray_t.min {
                return false;
            }
        }

        true
    }

    /// A box containing nothing; the identity for `surrounding`.
    pub const EMPTY: Aabb = Aabb {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };
}
