use frame_animator::math::{intersect_aabb, Ray};
use frame_animator::scene::{Material, SceneObject, Shape};
use frame_animator::make_transform;
use glam::Vec3;

#[cfg(test)]
mod ray_intersection_tests {
    use super::*;

    #[test]
    fn test_ray_hits_aabb_at_angle() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0).normalize());
        let box_min = Vec3::new(5.0, 5.0, 5.0);
        let box_max = Vec3::new(10.0, 10.0, 10.0);

        let t = intersect_aabb(&ray, box_min, box_max, 1e-3).expect("Ray should hit AABB at angle");

        let hit_point = ray.at(t);
        assert!(
            hit_point.cmpge(box_min - 0.001).all() && hit_point.cmple(box_max + 0.001).all(),
            "Hit point {:?} should be within AABB bounds",
            hit_point
        );
    }

    #[test]
    fn test_ray_pointing_away_from_aabb() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_X);
        let t = intersect_aabb(&ray, Vec3::new(5.0, -1.0, -1.0), Vec3::new(10.0, 1.0, 1.0), 1e-3);
        assert!(t.is_none(), "Ray pointing away should not hit AABB");
    }

    #[test]
    fn test_ray_parallel_to_aabb_face() {
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::X);
        let t = intersect_aabb(&ray, Vec3::new(5.0, -1.0, -1.0), Vec3::new(10.0, 1.0, 1.0), 1e-3);
        assert!(t.is_none(), "Ray parallel above the box should miss");
    }

    #[test]
    fn test_rotated_cuboid_hit() {
        // Half a turn around y leaves a cube's silhouette unchanged
        let cube = SceneObject::new("cube", Shape::unit_cube(), Material::default())
            .with_transformation(make_transform(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 180.0, 0.0), Vec3::splat(2.0)));

        let hit = cube.intersect(&Ray::new(Vec3::ZERO, Vec3::Z), 1e-4).expect("cube straight ahead");
        assert!((hit.t - 9.0).abs() < 1e-3, "Hit distance should be ~9.0, got {}", hit.t);
        assert!((hit.normal - Vec3::NEG_Z).length() < 1e-3);
    }

    #[test]
    fn test_rotated_pyramid_is_missed_beside_it() {
        let pyramid = SceneObject::new(
            "pyramid",
            Shape::Mesh(frame_animator::scene::Mesh::new(frame_animator::scene::pyramid_triangles()).unwrap()),
            Material::default(),
        )
        .with_transformation(make_transform(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 45.0, 0.0), Vec3::ONE));

        assert!(pyramid.intersect(&Ray::new(Vec3::ZERO, Vec3::Z), 1e-4).is_some());
        assert!(pyramid.intersect(&Ray::new(Vec3::new(3.0, 0.0, 0.0), Vec3::Z), 1e-4).is_none());
    }
}
