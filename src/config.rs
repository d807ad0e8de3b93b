//! Run configuration, loadable from JSON. Every field has a default, so a
//! config file only needs the values it changes.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::animation::{AnimationRig, EntityHandle, MotionTrack, PercentagePolicy};
use crate::error::ConfigError;
use crate::render::RenderSettings;
use crate::scene::default_tracks;
use crate::timeline::{FrameNaming, FrameSchedule};

pub const DEFAULT_FRAMES: u32 = 120;

/// Where frames land on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub directory: PathBuf,
    pub prefix: String,
    pub extension: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("render/animation"),
            prefix: "render_".to_string(),
            extension: "ppm".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Frame budget `F`; the schedule emits `F/2 + F/2 + 1` frames
    pub frames: u32,
    pub percentage_policy: PercentagePolicy,
    pub output: OutputSettings,
    pub render: RenderSettings,
    pub tracks: Vec<MotionTrack>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frames: DEFAULT_FRAMES,
            percentage_policy: PercentagePolicy::default(),
            output: OutputSettings::default(),
            render: RenderSettings::default(),
            tracks: default_tracks(),
        }
    }
}

impl AnimationConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).context(format!("Failed to read config file: {:?}", path))?;
        let config: Self =
            serde_json::from_str(&text).context(format!("Failed to parse config file: {:?}", path))?;
        log::debug!("loaded config from {:?}: {} tracks", path, config.tracks.len());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize config")
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frames == 0 {
            return Err(ConfigError::ZeroFrames);
        }
        let RenderSettings { width, height, .. } = self.render;
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyImage { width, height });
        }
        // A zero scale axis makes the object matrix singular; lights ignore scale
        for track in &self.tracks {
            let EntityHandle::Object { name } = &track.target else {
                continue;
            };
            for percentage in [0.0, 1.0] {
                if track.motion.at(percentage).scale.cmpeq(Vec3::ZERO).any() {
                    return Err(ConfigError::DegenerateScale {
                        name: name.clone(),
                        percentage,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn schedule(&self) -> FrameSchedule {
        FrameSchedule::new(self.frames)
    }

    pub fn naming(&self) -> FrameNaming {
        FrameNaming::new(
            &self.output.directory,
            &self.output.prefix,
            &self.output.extension,
            self.frames,
        )
    }

    pub fn rig(&self) -> AnimationRig {
        AnimationRig::new(self.tracks.clone(), self.percentage_policy)
    }
}
