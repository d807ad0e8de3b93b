use glam::Vec3;

/// Phong surface description
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Vec3,
    pub ambient: f32,
    pub diffuse: f32,
    pub specular: f32,
    pub shininess: f32,
    /// Share of the reflected ray mixed into the final color, in `[0, 1]`
    pub reflectivity: f32,
}

impl Material {
    pub fn matte(color: Vec3) -> Self {
        Self {
            color,
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.0,
            shininess: 1.0,
            reflectivity: 0.0,
        }
    }

    pub fn glossy(color: Vec3, shininess: f32) -> Self {
        Self {
            specular: 0.5,
            shininess,
            ..Self::matte(color)
        }
    }

    pub fn mirror(color: Vec3, reflectivity: f32) -> Self {
        Self {
            reflectivity: reflectivity.clamp(0.0, 1.0),
            ..Self::glossy(color, 100.0)
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::matte(Vec3::splat(0.8))
    }
}
