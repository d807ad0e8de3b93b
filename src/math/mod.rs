mod aabb;
mod ray;
mod triangle;

pub use aabb::AABB;
pub use ray::{intersect_aabb, Ray};
pub use triangle::{moller_trumbore_intersect, TriangleHit};

/// Offset applied along normals when spawning secondary rays
pub const SURFACE_EPSILON: f32 = 1e-3;
