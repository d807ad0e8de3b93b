use glam::{Mat4, Vec3};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Moves the ray into another frame. The direction is not renormalized,
    /// so a hit distance found in the new frame is valid in the old one.
    pub fn transformed(&self, matrix: &Mat4) -> Ray {
        Ray {
            origin: matrix.transform_point3(self.origin),
            direction: matrix.transform_vector3(self.direction),
        }
    }
}

/// Slab test. Returns the entry distance, or the exit distance when the
/// entry is not beyond `t_min` (origin inside or on the surface).
pub fn intersect_aabb(ray: &Ray, box_min: Vec3, box_max: Vec3, t_min: f32) -> Option<f32> {
    const EPSILON: f32 = 1e-8;

    // Near-zero components clamp to a huge inverse instead of dividing by zero
    let inv = |d: f32| {
        if d.abs() < EPSILON {
            1.0 / EPSILON.copysign(d)
        } else {
            1.0 / d
        }
    };
    let inv_dir = Vec3::new(inv(ray.direction.x), inv(ray.direction.y), inv(ray.direction.z));

    let t_lo = (box_min - ray.origin) * inv_dir;
    let t_hi = (box_max - ray.origin) * inv_dir;

    let t1 = t_lo.min(t_hi);
    let t2 = t_lo.max(t_hi);

    let t_near = t1.max_element();
    let t_far = t2.min_element();

    if t_near > t_far || t_far <= t_min {
        return None;
    }

    if t_near > t_min {
        Some(t_near)
    } else {
        Some(t_far)
    }
}
