//! Scene data model: objects, lights and the camera that a renderer consumes.
//!
//! A [`Scene`] owns all of its entities, so `clone()` is a deep copy. The
//! animation rig relies on this to hand out per-frame snapshots without ever
//! touching the base scene.

mod demo;
mod material;
mod shape;

pub use demo::{build_initial_scene, default_tracks, pyramid_triangles};
pub use material::Material;
pub use shape::{LocalHit, Mesh, Shape};

use glam::{Mat4, Vec3};

use crate::math::Ray;
use crate::transform::Transform;

/// A renderable entity placed in the world by its transform
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub shape: Shape,
    pub material: Material,
    transform: Transform,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, shape: Shape, material: Material) -> Self {
        Self {
            name: name.into(),
            shape,
            material,
            transform: Transform::default(),
        }
    }

    pub fn with_transformation(mut self, matrix: Mat4) -> Self {
        self.set_transformation(matrix);
        self
    }

    pub fn set_transformation(&mut self, matrix: Mat4) {
        self.transform = Transform::new(matrix);
    }

    pub fn transformation(&self) -> &Mat4 {
        self.transform.matrix()
    }

    /// World-space hit: `t` is measured along `ray` as given
    pub fn intersect(&self, ray: &Ray, t_min: f32) -> Option<Hit> {
        let local_ray = ray.transformed(self.transform.inverse());
        let local = self.shape.intersect(&local_ray, t_min)?;
        Some(Hit {
            t: local.t,
            point: ray.at(local.t),
            normal: self.transform.normal_to_world(local.normal),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub t: f32,
    pub point: Vec3,
    pub normal: Vec3,
}

/// Point light
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub name: String,
    pub position: Vec3,
    pub color: Vec3,
}

impl Light {
    pub fn new(name: impl Into<String>, position: Vec3, color: Vec3) -> Self {
        Self {
            name: name.into(),
            position,
            color,
        }
    }
}

/// Pinhole camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub fov: f32,
}

impl Camera {
    pub fn right(&self) -> Vec3 {
        self.forward.cross(self.up).normalize()
    }

    /// Primary ray through the center of pixel `(x, y)`, with `y` growing downward
    pub fn primary_ray(&self, x: u32, y: u32, width: u32, height: u32) -> Ray {
        let aspect = width as f32 / height as f32;
        let half_height = (self.fov.to_radians() * 0.5).tan();
        let half_width = half_height * aspect;

        let ndc_x = ((x as f32 + 0.5) / width as f32) * 2.0 - 1.0;
        let ndc_y = 1.0 - ((y as f32 + 0.5) / height as f32) * 2.0;

        let forward = self.forward.normalize();
        let right = self.right();
        let up = right.cross(forward);

        let direction = forward + right * (ndc_x * half_width) + up * (ndc_y * half_height);
        Ray::new(self.position, direction.normalize())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            forward: Vec3::Z,
            up: Vec3::Y,
            fov: 60.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
    pub lights: Vec<Light>,
    pub camera: Camera,
    pub ambient_light: Vec3,
}

impl Scene {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            ambient_light: Vec3::ONE,
            ..Self::default()
        }
    }

    pub fn add_object(&mut self, object: SceneObject) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    pub fn add_light(&mut self, light: Light) -> usize {
        self.lights.push(light);
        self.lights.len() - 1
    }

    pub fn object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    pub fn object_mut(&mut self, name: &str) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.name == name)
    }

    pub fn light(&self, name: &str) -> Option<&Light> {
        self.lights.iter().find(|l| l.name == name)
    }

    pub fn light_mut(&mut self, name: &str) -> Option<&mut Light> {
        self.lights.iter_mut().find(|l| l.name == name)
    }

    /// Nearest object along `ray` beyond `t_min`
    pub fn closest_hit(&self, ray: &Ray, t_min: f32) -> Option<(Hit, &SceneObject)> {
        self.objects
            .iter()
            .filter_map(|object| object.intersect(ray, t_min).map(|hit| (hit, object)))
            .min_by(|(a, _), (b, _)| a.t.total_cmp(&b.t))
    }

    /// Whether anything blocks `ray` before parameter `max_t`
    pub fn occluded(&self, ray: &Ray, t_min: f32, max_t: f32) -> bool {
        self.objects
            .iter()
            .any(|object| object.intersect(ray, t_min).is_some_and(|hit| hit.t < max_t))
    }
}
