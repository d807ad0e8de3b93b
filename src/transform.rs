use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Builds `T * Rx * Ry * Rz * S` from a translation, Euler angles in degrees
/// and a per-axis scale.
pub fn make_transform(translation: Vec3, rotation_deg: Vec3, scale: Vec3) -> Mat4 {
    let rotation = Quat::from_euler(
        EulerRot::XYZ,
        rotation_deg.x.to_radians(),
        rotation_deg.y.to_radians(),
        rotation_deg.z.to_radians(),
    );
    Mat4::from_scale_rotation_translation(scale, rotation, translation)
}

fn unit_scale() -> Vec3 {
    Vec3::ONE
}

/// Translation, rotation (Euler degrees) and scale of one entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformParams {
    #[serde(default)]
    pub translation: Vec3,
    #[serde(default)]
    pub rotation: Vec3,
    #[serde(default = "unit_scale")]
    pub scale: Vec3,
}

impl TransformParams {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub fn new(translation: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// `self + delta * amount`, component by component
    pub fn offset_by(&self, delta: &TransformDelta, amount: f32) -> TransformParams {
        TransformParams {
            translation: self.translation + delta.translation * amount,
            rotation: self.rotation + delta.rotation * amount,
            scale: self.scale + delta.scale * amount,
        }
    }

    pub fn to_matrix(&self) -> Mat4 {
        make_transform(self.translation, self.rotation, self.scale)
    }
}

impl Default for TransformParams {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Full-range displacement of a [`TransformParams`]; omitted fields do not move
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformDelta {
    pub translation: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl TransformDelta {
    pub fn new(translation: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    pub fn translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::default()
        }
    }

    pub fn moves_orientation_or_scale(&self) -> bool {
        self.rotation != Vec3::ZERO || self.scale != Vec3::ZERO
    }
}

/// Object-to-world matrix with the inverses needed for ray casting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Mat4,
    inverse: Mat4,
    normal_matrix: Mat4,
}

impl Transform {
    pub fn new(matrix: Mat4) -> Self {
        let inverse = matrix.inverse();
        Self {
            matrix,
            inverse,
            normal_matrix: inverse.transpose(),
        }
    }

    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }

    pub fn inverse(&self) -> &Mat4 {
        &self.inverse
    }

    /// Maps an object-space normal to a unit world-space normal
    pub fn normal_to_world(&self, normal: Vec3) -> Vec3 {
        self.normal_matrix.transform_vector3(normal).normalize()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY)
    }
}

impl From<Mat4> for Transform {
    fn from(matrix: Mat4) -> Self {
        Self::new(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_close(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-4, "{a:?} != {b:?}");
    }

    #[test]
    fn test_identity_params_give_identity_matrix() {
        assert!(TransformParams::IDENTITY.to_matrix().abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn test_translation_is_applied_last() {
        let m = make_transform(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, Vec3::splat(2.0));
        assert_vec_close(m.transform_point3(Vec3::X), Vec3::new(3.0, 2.0, 3.0));
    }

    #[test]
    fn test_rotation_is_in_degrees() {
        let m = make_transform(Vec3::ZERO, Vec3::new(0.0, 90.0, 0.0), Vec3::ONE);
        assert_vec_close(m.transform_point3(Vec3::X), Vec3::NEG_Z);
    }

    #[test]
    fn test_offset_by_scales_every_component() {
        let base = TransformParams::new(Vec3::new(-6.0, 0.0, 16.0), Vec3::ZERO, Vec3::splat(3.0));
        let delta = TransformDelta::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, 160.0, 0.0), Vec3::new(0.0, 2.0, 0.0));
        let half = base.offset_by(&delta, 0.5);
        assert_eq!(half.translation, Vec3::new(-6.0, 2.5, 16.0));
        assert_eq!(half.rotation, Vec3::new(0.0, 80.0, 0.0));
        assert_eq!(half.scale, Vec3::new(3.0, 4.0, 3.0));
    }

    #[test]
    fn test_omitted_delta_fields_are_zero() {
        let delta: TransformDelta = serde_json::from_str(r#"{ "translation": [14.0, 0.0, 14.0] }"#).unwrap();
        assert_eq!(delta, TransformDelta::translation(Vec3::new(14.0, 0.0, 14.0)));
        assert!(!delta.moves_orientation_or_scale());
    }

    #[test]
    fn test_omitted_pose_scale_is_one() {
        let pose: TransformParams = serde_json::from_str(r#"{ "translation": [1.0, 2.0, 3.0] }"#).unwrap();
        assert_eq!(pose.scale, Vec3::ONE);
        assert_eq!(pose.rotation, Vec3::ZERO);
    }

    #[test]
    fn test_normals_follow_non_uniform_scale() {
        let transform = Transform::new(make_transform(Vec3::ZERO, Vec3::ZERO, Vec3::new(4.0, 1.0, 1.0)));
        let n = transform.normal_to_world(Vec3::new(1.0, 1.0, 0.0).normalize());
        // Stretching along x flattens the slope, so the normal tips toward y
        assert!(n.y > n.x);
        assert!((n.length() - 1.0).abs() < 1e-5);
    }
}
