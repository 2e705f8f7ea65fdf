//! Sphere primitive for ray tracing.

use std::f32::consts::PI;

use simplex_core::{Material, SceneError, SceneResult, Shape, ShapeNode};
use simplex_math::{Aabb, Interval, Ray, Vec3};

use crate::hittable::{HitRecord, Hittable};

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
    bbox: Aabb,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// A negative radius keeps the same surface but flips the normals
    /// inward.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        let rvec = Vec3::splat(radius.abs());
        let bbox = Aabb::from_points(center - rvec, center + rvec);

        Self {
            center,
            radius,
            material,
            bbox,
        }
    }

    /// Build the sphere described by scene node `index`.
    ///
    /// The node scale is the sphere diameter, so the radius is `scale / 2`.
    /// Rotation has no visible effect on a sphere and is ignored.
    pub fn from_node(index: usize, node: &ShapeNode) -> SceneResult<Self> {
        debug_assert_eq!(node.shape, Shape::Sphere);

        let material = node
            .material
            .clone()
            .ok_or(SceneError::MissingMaterial { index })?;
        let scale = node
            .transform
            .uniform_scale()
            .ok_or(SceneError::NonUniformScale {
                index,
                scale: node.transform.scale,
            })?;

        Ok(Self::new(node.transform.translation, scale / 2.0, material))
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

    /// Get the UV coordinates for a point on the unit sphere.
    fn get_sphere_uv(p: Vec3) -> (f32, f32) {
        // phi: angle around Y from -X, theta: latitude from the equator
        let phi = p.z.atan2(p.x);
        let theta = p.y.clamp(-1.0, 1.0).asin();

        let u = 1.0 - (phi + PI) / (2.0 * PI);
        let v = (theta + PI / 2.0) / PI;
        (u, v)
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let v = ray.origin() - self.center;
        let d = ray.direction();
        let a = d.dot(d);
        let b = v.dot(d);
        let c = v.dot(v) - self.radius * self.radius;

        let discriminant = b * b - a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Nearest root in the acceptable range
        let mut root = (-b - sqrtd) / a;
        if !ray_t.contains_exclusive_min(root) {
            root = (-b + sqrtd) / a;
            if !ray_t.contains_exclusive_min(root) {
                return None;
            }
        }

        let p = ray.at(root);
        let normal = (p - self.center) / self.radius;
        let (u, v) = Self::get_sphere_uv((p - self.center) / self.radius.abs());

        Some(HitRecord {
            t: root,
            p,
            normal,
            u,
            v,
            material: &self.material,
        })
    }

    fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simplex_core::{Color, Scene};

    fn grey() -> Material {
        Material::lambertian(Color::new(0.5, 0.5, 0.5))
    }

    #[test]
    fn test_sphere_hit_nearest_root() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, grey());
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.hit(&ray, Interval::new(0.01, f32::INFINITY)).unwrap();
        assert!((rec.t - 4.0).abs() < 1e-5);
        assert!((rec.normal - Vec3::Z).length() < 1e-5);
        assert!((rec.p - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_sphere_hit_far_root_when_near_excluded() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, grey());
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.hit(&ray, Interval::new(4.5, f32::INFINITY)).unwrap();
        assert!((rec.t - 6.0).abs() < 1e-5);
        // Outward normal, even though the ray is leaving the sphere
        assert!((rec.normal - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_sphere_window_upper_bound_inclusive() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, grey());
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

        assert!(sphere.hit(&ray, Interval::new(0.01, 4.0)).is_some());
        assert!(sphere.hit(&ray, Interval::new(0.01, 3.9)).is_none());
        assert!(sphere.hit(&ray, Interval::new(6.0, 10.0)).is_none());
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, grey());

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.hit(&ray, Interval::new(0.01, f32::INFINITY)).is_none());

        // Tangent ray: zero discriminant counts as a miss
        let ray = Ray::new(Vec3::new(0.5, 5.0, -1.0), Vec3::new(0.0, -1.0, 0.0));
        assert!(sphere.hit(&ray, Interval::new(0.01, f32::INFINITY)).is_none());
    }

    #[test]
    fn test_sphere_hit_from_inside() {
        let sphere = Sphere::new(Vec3::ZERO, 50.0, grey());
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let rec = sphere.hit(&ray, Interval::new(0.01, f32::INFINITY)).unwrap();
        assert!((rec.t - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_sphere_uv() {
        // +X: phi = 0 -> u = 0.5; equator -> v = 0.5
        let (u, v) = Sphere::get_sphere_uv(Vec3::X);
        assert!((u - 0.5).abs() < 1e-6);
        assert!((v - 0.5).abs() < 1e-6);

        // North pole
        let (_, v) = Sphere::get_sphere_uv(Vec3::Y);
        assert!((v - 1.0).abs() < 1e-6);

        // -Z: phi = -pi/2 -> u = 0.75
        let (u, _) = Sphere::get_sphere_uv(Vec3::NEG_Z);
        assert!((u - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_sphere_bounding_box() {
        let sphere = Sphere::new(Vec3::new(1.0, 2.0, 3.0), 0.5, grey());
        let bbox = sphere.bounding_box();

        assert_eq!(bbox.min, Vec3::new(0.5, 1.5, 2.5));
        assert_eq!(bbox.max, Vec3::new(1.5, 2.5, 3.5));
    }

    #[test]
    fn test_from_node() {
        let mut scene = Scene::new("test");
        scene
            .add_shape(Shape::Sphere)
            .set_translation(Vec3::new(4.0, 1.0, 0.0))
            .set_uniform_scale(2.0)
            .set_material(grey());

        let sphere = Sphere::from_node(0, &scene.shapes[0]).unwrap();
        assert_eq!(sphere.center(), Vec3::new(4.0, 1.0, 0.0));
        assert_eq!(sphere.radius(), 1.0);
    }

    #[test]
    fn test_from_node_errors() {
        let mut scene = Scene::new("test");
        scene.add_shape(Shape::Sphere);
        scene
            .add_shape(Shape::Sphere)
            .set_scale(Vec3::new(1.0, 2.0, 1.0))
            .set_material(grey());

        assert_eq!(
            Sphere::from_node(0, &scene.shapes[0]).unwrap_err(),
            SceneError::MissingMaterial { index: 0 }
        );
        assert_eq!(
            Sphere::from_node(1, &scene.shapes[1]).unwrap_err(),
            SceneError::NonUniformScale {
                index: 1,
                scale: Vec3::new(1.0, 2.0, 1.0)
            }
        );
    }
}
