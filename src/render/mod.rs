//! Rendering collaborators: the [`Renderer`] seam the timeline calls, plus a
//! CPU ray tracer that writes PPM frames.

mod image;
mod raytracer;

pub use image::Image;
pub use raytracer::RayTracer;

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::scene::Scene;

/// Turns a scene snapshot into an image at `output_path`
pub trait Renderer {
    fn render(&mut self, scene: &Scene, output_path: &Path) -> anyhow::Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, scene: &Scene, output_path: &Path) -> anyhow::Result<()> {
        (**self).render(scene, output_path)
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, scene: &Scene, output_path: &Path) -> anyhow::Result<()> {
        (**self).render(scene, output_path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    /// Bounces for mirror reflections; 0 disables them
    pub max_depth: u32,
    pub background: Vec3,
    pub gamma: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            max_depth: 3,
            background: Vec3::ZERO,
            gamma: 2.2,
        }
    }
}
