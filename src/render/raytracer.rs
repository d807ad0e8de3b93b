use std::path::Path;

use anyhow::Result;
use glam::Vec3;

use super::{Image, RenderSettings, Renderer};
use crate::math::{Ray, SURFACE_EPSILON};
use crate::scene::{Hit, Material, Scene};

/// Whitted-style CPU ray tracer: Phong shading, hard shadows and mirror
/// reflections, written out as PPM.
#[derive(Debug, Clone, Default)]
pub struct RayTracer {
    settings: RenderSettings,
}

impl RayTracer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Renders into memory without touching the filesystem
    pub fn render_image(&self, scene: &Scene) -> Image {
        let RenderSettings { width, height, .. } = self.settings;
        let mut image = Image::new(width, height);
        let inv_gamma = 1.0 / self.settings.gamma.max(f32::EPSILON);

        for y in 0..height {
            for x in 0..width {
                let ray = scene.camera.primary_ray(x, y, width, height);
                let color = self.trace(scene, &ray, 0);
                image.set(x, y, tone_map(color, inv_gamma));
            }
        }
        image
    }

    fn trace(&self, scene: &Scene, ray: &Ray, depth: u32) -> Vec3 {
        let Some((hit, object)) = scene.closest_hit(ray, SURFACE_EPSILON) else {
            return self.settings.background;
        };

        // Face the normal toward the viewer so both sides of open meshes shade
        let view = -ray.direction.normalize();
        let normal = if hit.normal.dot(view) < 0.0 { -hit.normal } else { hit.normal };
        let hit = Hit { normal, ..hit };

        let local = shade(scene, &hit, &object.material, view);

        let reflectivity = object.material.reflectivity;
        if reflectivity <= 0.0 || depth >= self.settings.max_depth {
            return local;
        }

        let reflected_dir = (-view).reflect(normal);
        let reflected = Ray::new(hit.point + normal * SURFACE_EPSILON, reflected_dir);
        local * (1.0 - reflectivity) + self.trace(scene, &reflected, depth + 1) * reflectivity
    }
}

impl Renderer for RayTracer {
    fn render(&mut self, scene: &Scene, output_path: &Path) -> Result<()> {
        self.render_image(scene).write_ppm(output_path)
    }
}

/// Ambient plus per-light diffuse and specular terms; lights blocked by
/// geometry contribute nothing.
fn shade(scene: &Scene, hit: &Hit, material: &Material, view: Vec3) -> Vec3 {
    let mut color = material.color * material.ambient * scene.ambient_light;
    let origin = hit.point + hit.normal * SURFACE_EPSILON;

    for light in &scene.lights {
        let to_light = light.position - origin;
        let distance = to_light.length();
        let light_dir = to_light / distance;

        let n_dot_l = hit.normal.dot(light_dir);
        if n_dot_l <= 0.0 {
            continue;
        }
        if scene.occluded(&Ray::new(origin, light_dir), SURFACE_EPSILON, distance) {
            continue;
        }

        let diffuse = material.color * material.diffuse * n_dot_l;
        let reflect_dir = (-light_dir).reflect(hit.normal);
        let specular = material.specular * reflect_dir.dot(view).max(0.0).powf(material.shininess);

        color += (diffuse + Vec3::splat(specular)) * light.color;
    }
    color
}

fn tone_map(color: Vec3, inv_gamma: f32) -> Vec3 {
    color.clamp(Vec3::ZERO, Vec3::ONE).powf(inv_gamma)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Camera, Light, SceneObject, Shape};
    use crate::transform::make_transform;

    fn small_settings() -> RenderSettings {
        RenderSettings {
            width: 16,
            height: 12,
            max_depth: 2,
            ..RenderSettings::default()
        }
    }

    fn lit_sphere_scene() -> Scene {
        let mut scene = Scene::new(Camera::default());
        scene.add_object(
            SceneObject::new(
                "ball",
                Shape::Sphere { center: Vec3::ZERO, radius: 1.0 },
                Material::matte(Vec3::new(1.0, 0.0, 0.0)),
            )
            .with_transformation(make_transform(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::ONE)),
        );
        scene.add_light(Light::new("key", Vec3::new(0.0, 0.0, 0.0), Vec3::ONE));
        scene
    }

    #[test]
    fn test_empty_scene_renders_background() {
        let settings = RenderSettings {
            background: Vec3::new(0.0, 0.0, 1.0),
            ..small_settings()
        };
        let image = RayTracer::new(settings).render_image(&Scene::new(Camera::default()));
        assert!(image.pixels().iter().all(|p| *p == Vec3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_lit_sphere_is_red_in_the_center() {
        let image = RayTracer::new(small_settings()).render_image(&lit_sphere_scene());
        let center = image.get(8, 6);
        assert!(center.x > 0.5);
        assert_eq!(center.y, 0.0);
        assert_eq!(center.z, 0.0);
        // Corners miss the sphere
        assert_eq!(image.get(0, 0), Vec3::ZERO);
    }

    #[test]
    fn test_blocked_light_leaves_only_ambient() {
        let mut scene = lit_sphere_scene();
        scene.add_object(
            SceneObject::new("shield", Shape::unit_cube(), Material::default())
                .with_transformation(make_transform(Vec3::new(0.0, 0.0, 2.0), Vec3::ZERO, Vec3::splat(0.2))),
        );
        scene.lights[0].position = Vec3::new(0.0, 0.0, 1.0);
        scene.ambient_light = Vec3::ZERO;

        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let ball = &scene.objects[0];
        let hit = ball.intersect(&ray, SURFACE_EPSILON).unwrap();
        let color = shade(&scene, &hit, &ball.material, -ray.direction);
        assert_eq!(color, Vec3::ZERO);

        // Without the shield the same point is lit
        scene.objects.truncate(1);
        let lit = shade(&scene, &hit, &scene.objects[0].material, -ray.direction);
        assert!(lit.x > 0.0);
    }

    #[test]
    fn test_render_writes_ppm_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.ppm");
        RayTracer::new(small_settings()).render(&lit_sphere_scene(), &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("P3\n16 12\n255\n"));
        assert_eq!(contents.lines().count(), 3 + 12);
    }

    #[test]
    fn test_tone_map_clamps_and_keeps_extremes() {
        assert_eq!(tone_map(Vec3::new(2.0, -1.0, 1.0), 1.0 / 2.2), Vec3::new(1.0, 0.0, 1.0));
    }
}
