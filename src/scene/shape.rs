use glam::Vec3;

use crate::math::{intersect_aabb, moller_trumbore_intersect, Ray, AABB};

/// Closest intersection with a shape, in the shape's own frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalHit {
    pub t: f32,
    pub normal: Vec3,
}

/// Geometry in object space; placement comes from the owning object's transform
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Sphere { center: Vec3, radius: f32 },
    /// Points `p` with `normal · p == offset`
    Plane { normal: Vec3, offset: f32 },
    Cuboid(AABB),
    Mesh(Mesh),
}

impl Shape {
    /// Axis-aligned box spanning `[-0.5, 0.5]` on every axis
    pub fn unit_cube() -> Self {
        Shape::Cuboid(AABB::new(Vec3::splat(-0.5), Vec3::splat(0.5)))
    }

    pub fn intersect(&self, ray: &Ray, t_min: f32) -> Option<LocalHit> {
        match self {
            Shape::Sphere { center, radius } => intersect_sphere(ray, *center, *radius, t_min),
            Shape::Plane { normal, offset } => intersect_plane(ray, *normal, *offset, t_min),
            Shape::Cuboid(aabb) => {
                let t = intersect_aabb(ray, aabb.min, aabb.max, t_min)?;
                Some(LocalHit {
                    t,
                    normal: aabb.face_normal(ray.at(t)),
                })
            }
            Shape::Mesh(mesh) => mesh.intersect(ray, t_min),
        }
    }
}

fn intersect_sphere(ray: &Ray, center: Vec3, radius: f32, t_min: f32) -> Option<LocalHit> {
    let oc = ray.origin - center;
    let a = ray.direction.dot(ray.direction);
    let half_b = oc.dot(ray.direction);
    let c = oc.dot(oc) - radius * radius;

    let discriminant = half_b * half_b - a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let near = (-half_b - sqrt_d) / a;
    let far = (-half_b + sqrt_d) / a;
    let t = [near, far].into_iter().find(|&t| t > t_min)?;

    Some(LocalHit {
        t,
        normal: (ray.at(t) - center) / radius,
    })
}

fn intersect_plane(ray: &Ray, normal: Vec3, offset: f32, t_min: f32) -> Option<LocalHit> {
    let denom = normal.dot(ray.direction);
    if denom.abs() < 1e-8 {
        return None;
    }
    let t = (offset - normal.dot(ray.origin)) / denom;
    (t > t_min).then_some(LocalHit { t, normal })
}

/// Triangle soup with a cached bounding box for early rejection
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    triangles: Vec<[Vec3; 3]>,
    bounds: AABB,
}

impl Mesh {
    /// Returns `None` when there are no triangles
    pub fn new(triangles: Vec<[Vec3; 3]>) -> Option<Self> {
        let corners: Vec<Vec3> = triangles.iter().flatten().copied().collect();
        let bounds = AABB::from_points(&corners)?;
        Some(Self { triangles, bounds })
    }

    pub fn triangles(&self) -> &[[Vec3; 3]] {
        &self.triangles
    }

    pub fn bounds(&self) -> &AABB {
        &self.bounds
    }

    fn intersect(&self, ray: &Ray, t_min: f32) -> Option<LocalHit> {
        intersect_aabb(ray, self.bounds.min, self.bounds.max, t_min)?;

        self.triangles
            .iter()
            .filter_map(|[v0, v1, v2]| moller_trumbore_intersect(ray.origin, ray.direction, *v0, *v1, *v2))
            .filter(|hit| hit.t > t_min)
            .min_by(|a, b| a.t.total_cmp(&b.t))
            .map(|hit| LocalHit {
                t: hit.t,
                normal: hit.normal,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_hit_from_outside() {
        let sphere = Shape::Sphere { center: Vec3::new(0.0, 0.0, 5.0), radius: 1.0 };
        let hit = sphere.intersect(&Ray::new(Vec3::ZERO, Vec3::Z), 1e-4).unwrap();
        assert!((hit.t - 4.0).abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::NEG_Z);
    }

    #[test]
    fn test_sphere_hit_from_inside_uses_far_root() {
        let sphere = Shape::Sphere { center: Vec3::ZERO, radius: 2.0 };
        let hit = sphere.intersect(&Ray::new(Vec3::ZERO, Vec3::X), 1e-4).unwrap();
        assert!((hit.t - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_plane_behind_ray_is_missed() {
        let floor = Shape::Plane { normal: Vec3::Y, offset: -3.0 };
        assert!(floor.intersect(&Ray::new(Vec3::ZERO, Vec3::Y), 1e-4).is_none());
        let hit = floor.intersect(&Ray::new(Vec3::ZERO, Vec3::NEG_Y), 1e-4).unwrap();
        assert!((hit.t - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_cuboid_reports_face_normal() {
        let hit = Shape::unit_cube()
            .intersect(&Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z), 1e-4)
            .unwrap();
        assert!((hit.t - 4.5).abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::NEG_Z);
    }

    #[test]
    fn test_cuboid_hit_from_just_outside_uses_far_face() {
        let hit = Shape::unit_cube()
            .intersect(&Ray::new(Vec3::new(0.0, 0.0, -0.5005), Vec3::Z), 1e-3)
            .expect("ray crossing the whole cube should hit the far face");
        assert!((hit.t - 1.0005).abs() < 1e-4);
        assert_eq!(hit.normal, Vec3::Z);
    }

    #[test]
    fn test_mesh_returns_closest_triangle() {
        let far = [Vec3::new(-1.0, -1.0, 10.0), Vec3::new(1.0, -1.0, 10.0), Vec3::new(0.0, 1.0, 10.0)];
        let near = [Vec3::new(-1.0, -1.0, 5.0), Vec3::new(1.0, -1.0, 5.0), Vec3::new(0.0, 1.0, 5.0)];
        let mesh = Shape::Mesh(Mesh::new(vec![far, near]).unwrap());
        let hit = mesh.intersect(&Ray::new(Vec3::ZERO, Vec3::Z), 1e-4).unwrap();
        assert!((hit.t - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_empty_mesh_is_rejected() {
        assert!(Mesh::new(Vec::new()).is_none());
    }
}
