use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

use super::{FrameNaming, FrameSchedule, FrameStep};
use crate::animation::AnimationRig;
use crate::render::Renderer;
use crate::scene::Scene;

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct TimelineSummary {
    pub frames_rendered: usize,
    pub first_path: Option<PathBuf>,
    pub last_path: Option<PathBuf>,
    pub started_at: DateTime<Local>,
    pub elapsed: Duration,
}

/// Renders every step of a [`FrameSchedule`] in order.
///
/// The base scene is borrowed for the whole run and never modified; each
/// frame gets a fresh snapshot from the rig. The first failure aborts the
/// run and frames already written stay on disk.
pub struct Timeline<'a, R: Renderer> {
    schedule: FrameSchedule,
    naming: FrameNaming,
    rig: &'a AnimationRig,
    base_scene: &'a Scene,
    renderer: R,
}

impl<'a, R: Renderer> Timeline<'a, R> {
    pub fn new(
        schedule: FrameSchedule,
        naming: FrameNaming,
        rig: &'a AnimationRig,
        base_scene: &'a Scene,
        renderer: R,
    ) -> Self {
        Self {
            schedule,
            naming,
            rig,
            base_scene,
            renderer,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Every step paired with its output path, without rendering anything
    pub fn plan(&self) -> Vec<(FrameStep, PathBuf)> {
        self.schedule
            .iter()
            .map(|step| (step, self.naming.path_for(step.output_index)))
            .collect()
    }

    pub fn run(&mut self) -> Result<TimelineSummary> {
        self.rig.validate(self.base_scene)?;

        let directory = self.naming.directory();
        if !directory.as_os_str().is_empty() {
            fs::create_dir_all(directory)
                .context(format!("Failed to create output directory: {:?}", directory))?;
        }

        let started_at = Local::now();
        let clock = Instant::now();
        let total = self.schedule.frames() as f32;
        let mut first_path = None;
        let mut last_path = None;
        let mut frames_rendered = 0;

        log::info!(
            "rendering {} frames into {:?} [{}]",
            self.schedule.len(),
            directory,
            started_at.format("%H:%M:%S")
        );

        for step in self.schedule.iter() {
            let path = self.naming.path_for(step.output_index);
            log::info!(
                "{:.1}% | animating {:.1}% ({:?} pass) -> {:?}",
                step.output_index as f32 / total * 100.0,
                step.percentage * 100.0,
                step.pass,
                path
            );

            let snapshot = self.rig.animate(step.percentage, self.base_scene)?;
            self.renderer
                .render(&snapshot, &path)
                .context(format!("Failed to render frame {}: {:?}", step.output_index, path))?;

            frames_rendered += 1;
            if first_path.is_none() {
                first_path = Some(path.clone());
            }
            last_path = Some(path);
        }

        let summary = TimelineSummary {
            frames_rendered,
            first_path,
            last_path,
            started_at,
            elapsed: clock.elapsed(),
        };
        log::info!(
            "done: {} frames in {:.2}s",
            summary.frames_rendered,
            summary.elapsed.as_secs_f32()
        );
        Ok(summary)
    }
}
