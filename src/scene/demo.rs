use glam::Vec3;

use super::{Camera, Light, Material, Mesh, Scene, SceneObject, Shape};
use crate::animation::{EntityHandle, MotionSpec, MotionTrack};
use crate::transform::{TransformDelta, TransformParams};

const PLATONIC_POSE: TransformParams = TransformParams {
    translation: Vec3::new(-6.0, 4.0, 23.0),
    rotation: Vec3::ZERO,
    scale: Vec3::splat(7.0),
};

const COLUMN_POSE: TransformParams = TransformParams {
    translation: Vec3::new(-6.0, 0.0, 16.0),
    rotation: Vec3::ZERO,
    scale: Vec3::splat(3.0),
};

const KEY_LIGHT_POSITION: Vec3 = Vec3::new(0.0, 3.0, 12.0);

/// Motion of the demo scene: the pyramid slides right while turning half a
/// revolution, the column rises and stretches, and the key light sweeps
/// diagonally away from the camera.
pub fn default_tracks() -> Vec<MotionTrack> {
    vec![
        MotionTrack::new(
            EntityHandle::object("platonic"),
            MotionSpec::new(
                PLATONIC_POSE,
                TransformDelta::new(Vec3::new(12.0, 0.0, 0.0), Vec3::new(0.0, 180.0, 0.0), Vec3::ZERO),
            ),
        ),
        MotionTrack::new(
            EntityHandle::object("column"),
            MotionSpec::new(
                COLUMN_POSE,
                TransformDelta::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, 160.0, 0.0), Vec3::new(0.0, 2.0, 0.0)),
            ),
        ),
        MotionTrack::new(
            EntityHandle::light("key"),
            MotionSpec::new(
                TransformParams::new(KEY_LIGHT_POSITION, Vec3::ZERO, Vec3::ONE),
                TransformDelta::translation(Vec3::new(14.0, 0.0, 14.0)),
            ),
        ),
    ]
}

/// Square pyramid inside the unit cube: apex on top, four sides and a
/// two-triangle base.
pub fn pyramid_triangles() -> Vec<[Vec3; 3]> {
    let apex = Vec3::new(0.0, 0.5, 0.0);
    let p0 = Vec3::new(-0.5, -0.5, -0.5);
    let p1 = Vec3::new(0.5, -0.5, -0.5);
    let p2 = Vec3::new(0.5, -0.5, 0.5);
    let p3 = Vec3::new(-0.5, -0.5, 0.5);

    vec![
        [p0, p1, apex],
        [p1, p2, apex],
        [p2, p3, apex],
        [p3, p0, apex],
        [p0, p2, p1],
        [p0, p3, p2],
    ]
}

/// Room with a floor, a back wall, a mirror ball and the two animated
/// objects, lit by three point lights. The camera sits at the origin
/// looking down +Z.
pub fn build_initial_scene() -> Scene {
    let mut scene = Scene::new(Camera {
        position: Vec3::ZERO,
        forward: Vec3::Z,
        up: Vec3::Y,
        fov: 70.0,
    });
    scene.ambient_light = Vec3::splat(0.6);

    scene.add_object(SceneObject::new(
        "floor",
        Shape::Plane { normal: Vec3::Y, offset: -3.0 },
        Material::matte(Vec3::new(0.55, 0.55, 0.5)),
    ));
    scene.add_object(SceneObject::new(
        "mirror_ball",
        Shape::Sphere { center: Vec3::new(6.0, -0.5, 20.0), radius: 2.5 },
        Material::mirror(Vec3::new(0.9, 0.9, 0.95), 0.6),
    ));

    // Pyramid mesh is never empty, so this always yields the mesh
    let platonic = Mesh::new(pyramid_triangles()).map_or_else(Shape::unit_cube, Shape::Mesh);
    scene.add_object(
        SceneObject::new("platonic", platonic, Material::glossy(Vec3::new(0.85, 0.35, 0.2), 32.0))
            .with_transformation(PLATONIC_POSE.to_matrix()),
    );
    scene.add_object(
        SceneObject::new("column", Shape::unit_cube(), Material::glossy(Vec3::new(0.2, 0.45, 0.85), 16.0))
            .with_transformation(COLUMN_POSE.to_matrix()),
    );
    scene.add_object(SceneObject::new(
        "back_wall",
        Shape::Plane { normal: Vec3::NEG_Z, offset: -40.0 },
        Material::matte(Vec3::new(0.7, 0.7, 0.75)),
    ));

    scene.add_light(Light::new("fill", Vec3::new(0.0, 26.0, 5.0), Vec3::splat(0.4)));
    scene.add_light(Light::new("key", KEY_LIGHT_POSITION, Vec3::splat(0.4)));
    scene.add_light(Light::new("rim", Vec3::new(0.0, 5.0, 1.0), Vec3::splat(0.4)));

    log::debug!(
        "demo scene built: {} objects, {} lights",
        scene.objects.len(),
        scene.lights.len()
    );
    scene
}
