use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simplex_renderer::{
    BvhNode, Color, Hittable, HittableList, Interval, Material, Ray, Sphere, Vec3, HIT_EPSILON,
};

fn random_spheres(rng: &mut StdRng, count: usize) -> Vec<Sphere> {
    (0..count)
        .map(|_| {
            let center = Vec3::new(
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
            );
            let radius = rng.gen_range(0.2..1.0);
            Sphere::new(center, radius, Material::lambertian(Color::splat(0.5)))
        })
        .collect()
}

fn boxed(spheres: &[Sphere]) -> Vec<Box<dyn Hittable>> {
    spheres
        .iter()
        .cloned()
        .map(|s| Box::new(s) as Box<dyn Hittable>)
        .collect()
}

#[test]
fn bvh_hit_matches_bruteforce() {
    let mut rng = StdRng::seed_from_u64(1);

    for count in [1, 2, 3, 17, 64] {
        let spheres = random_spheres(&mut rng, count);
        let bvh = BvhNode::new(boxed(&spheres), &mut rng).unwrap();

        let mut list = HittableList::new();
        for sphere in boxed(&spheres) {
            list.add(sphere);
        }

        let mut hits = 0;
        for _ in 0..256 {
            let origin = Vec3::new(
                rng.gen_range(-8.0..8.0),
                rng.gen_range(-8.0..8.0),
                rng.gen_range(-8.0..8.0),
            );
            let direction = Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            if direction.length_squared() < 1e-4 {
                continue;
            }
            let ray = Ray::new(origin, direction);
            let window = Interval::new(HIT_EPSILON, f32::INFINITY);

            let brute = list.hit(&ray, window);
            let accelerated = bvh.hit(&ray, window);

            assert_eq!(brute.is_some(), accelerated.is_some(), "count {count}, ray {ray:?}");
            if let (Some(a), Some(b)) = (brute, accelerated) {
                assert!((a.t - b.t).abs() < 1e-4, "count {count}: {} vs {}", a.t, b.t);
                hits += 1;
            }
        }

        // The sample should exercise both outcomes for the larger scenes
        if count >= 17 {
            assert!(hits > 0 && hits < 256, "count {count}: {hits} hits");
        }
    }
}

#[test]
fn bvh_builds_differ_by_seed_but_agree_on_hits() {
    let mut scene_rng = StdRng::seed_from_u64(5);
    let spheres = random_spheres(&mut scene_rng, 40);

    let bvh_a = BvhNode::new(boxed(&spheres), &mut StdRng::seed_from_u64(10)).unwrap();
    let bvh_b = BvhNode::new(boxed(&spheres), &mut StdRng::seed_from_u64(11)).unwrap();

    for i in 0..100 {
        let angle = i as f32 * 0.0628;
        let ray = Ray::new(Vec3::new(0.0, 0.0, 12.0), Vec3::new(angle.sin(), angle.cos() * 0.3, -1.0));
        let window = Interval::new(HIT_EPSILON, f32::INFINITY);

        let a = bvh_a.hit(&ray, window).map(|rec| rec.t);
        let b = bvh_b.hit(&ray, window).map(|rec| rec.t);
        assert_eq!(a, b);
    }
}
