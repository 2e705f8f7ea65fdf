//! Bounding Volume Hierarchy (BVH) acceleration structure.
//!
//! A binary tree over scene primitives, built once per render. Each split
//! picks a random axis, sorts by the boxes' minimum corner on that axis and
//! halves the list, which keeps axis-aligned clusters from always skewing
//! the tree the same way.

use rand::{Rng, RngCore};
use simplex_math::{Aabb, Interval, Ray};
use thiserror::Error;

use crate::{HitRecord, Hittable};

/// Errors raised while building a BVH.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BvhError {
    #[error("cannot build a BVH from an empty primitive list")]
    Empty,
}

/// BVH node - either a branch with two children or a leaf with one or two
/// primitives.
pub enum BvhNode {
    /// Internal node with two children.
    Branch {
        left: Box<BvhNode>,
        right: Box<BvhNode>,
        bbox: Aabb,
    },
    /// Leaf node holding one or two primitives.
    Leaf {
        objects: Vec<Box<dyn Hittable>>,
        bbox: Aabb,
    },
}

impl BvhNode {
    /// Create a BVH from a non-empty list of hittable objects.
    ///
    /// `rng` drives the split-axis choice.
    pub fn new(objects: Vec<Box<dyn Hittable>>, rng: &mut dyn RngCore) -> Result<Self, BvhError> {
        if objects.is_empty() {
            return Err(BvhError::Empty);
        }
        Ok(Self::build(objects, rng))
    }

    /// Recursive BVH construction.
    fn build(mut objects: Vec<Box<dyn Hittable>>, rng: &mut dyn RngCore) -> Self {
        let n = objects.len();

        if n <= 2 {
            let bbox = objects
                .iter()
                .fold(Aabb::EMPTY, |acc, o| Aabb::surrounding(&acc, &o.bounding_box()));
            return BvhNode::Leaf { objects, bbox };
        }

        let axis = rng.gen_range(0..3);
        objects.sort_unstable_by(|a, b| {
            a.bounding_box()
                .axis_min(axis)
                .total_cmp(&b.bounding_box().axis_min(axis))
        });

        // Split at midpoint
        let right_objects = objects.split_off(n / 2);
        let left_objects = objects;

        let left = Self::build(left_objects, rng);
        let right = Self::build(right_objects, rng);
        let bbox = Aabb::surrounding(&left.bounding_box(), &right.bounding_box());

        BvhNode::Branch {
            left: Box::new(left),
            right: Box::new(right),
            bbox,
        }
    }

    /// Number of levels in the tree (a single leaf has depth 1).
    pub fn depth(&self) -> usize {
        match self {
            BvhNode::Leaf { .. } => 1,
            BvhNode::Branch { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Number of primitives stored in the leaves.
    pub fn primitive_count(&self) -> usize {
        match self {
            BvhNode::Leaf { objects, .. } => objects.len(),
            BvhNode::Branch { left, right, .. } => left.primitive_count() + right.primitive_count(),
        }
    }
}

/// Pick the nearer of two optional hits.
fn closer<'a>(a: Option<HitRecord<'a>>, b: Option<HitRecord<'a>>) -> Option<HitRecord<'a>> {
    match (a, b) {
        (Some(a), Some(b)) => Some(if a.t < b.t { a } else { b }),
        (Some(hit), None) | (None, Some(hit)) => Some(hit),
        (None, None) => None,
    }
}

impl Hittable for BvhNode {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        if !self.bounding_box().hit(ray, ray_t) {
            return None;
        }

        match self {
            BvhNode::Leaf { objects, .. } => objects
                .iter()
                .map(|obj| obj.hit(ray, ray_t))
                .fold(None, closer),

            // Both children see the full window; the nearer result wins
            BvhNode::Branch { left, right, .. } => {
                closer(left.hit(ray, ray_t), right.hit(ray, ray_t))
            }
        }
    }

    fn bounding_box(&self) -> Aabb {
        match self {
            BvhNode::Leaf { bbox, .. } => *bbox,
            BvhNode::Branch { bbox, .. } => *bbox,
        }
    }
}
