use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec3;

/// Linear RGB framebuffer, row-major from the top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Vec3>,
}

impl Image {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Vec3::ZERO; width as usize * height as usize],
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &[Vec3] {
        &self.pixels
    }

    pub fn get(&self, x: u32, y: u32) -> Vec3 {
        self.pixels[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, color: Vec3) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Plain-text PPM (`P3`). Channels are clamped to `[0, 1]` and scaled to 0..=255.
    pub fn to_ppm(&self) -> String {
        let mut out = String::with_capacity(self.pixels.len() * 12 + 32);
        // Writing into a String cannot fail
        let _ = writeln!(out, "P3\n{} {}\n255", self.width, self.height);

        for row in self.pixels.chunks(self.width.max(1) as usize) {
            let line: Vec<String> = row
                .iter()
                .map(|c| {
                    let [r, g, b] = to_bytes(*c);
                    format!("{r} {g} {b}")
                })
                .collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }

    pub fn write_ppm(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_ppm()).with_context(|| format!("Failed to write image: {:?}", path))
    }
}

fn to_bytes(color: Vec3) -> [u8; 3] {
    let c = color.clamp(Vec3::ZERO, Vec3::ONE) * 255.0;
    [c.x.round() as u8, c.y.round() as u8, c.z.round() as u8]
}
