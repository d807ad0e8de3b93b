// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::animation::PercentagePolicy;
use crate::config::AnimationConfig;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "frame-animator")]
#[command(about = "Renders a there-and-back animation as numbered PPM frames", long_about = None)]
pub struct Cli {
    /// JSON config file; omitted fields use built-in defaults
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Frame budget F (the run emits F/2 + F/2 + 1 frames)
    #[arg(long, value_name = "N")]
    pub frames: Option<u32>,

    /// Directory frames are written to
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    #[arg(long, value_name = "PX")]
    pub width: Option<u32>,

    #[arg(long, value_name = "PX")]
    pub height: Option<u32>,

    /// Clamp the animation parameter to [0, 1] instead of extrapolating
    #[arg(long)]
    pub clamp: bool,

    /// List frames and output paths without rendering
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print the effective config as JSON and exit
    #[arg(long = "print-config")]
    pub print_config: bool,

    /// Only log warnings and errors
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl Cli {
    /// Applies command-line overrides on top of `config`
    pub fn apply(&self, mut config: AnimationConfig) -> AnimationConfig {
        if let Some(frames) = self.frames {
            config.frames = frames;
        }
        if let Some(dir) = &self.output_dir {
            config.output.directory = dir.clone();
        }
        if let Some(width) = self.width {
            config.render.width = width;
        }
        if let Some(height) = self.height {
            config.render.height = height;
        }
        if self.clamp {
            config.percentage_policy = PercentagePolicy::Clamp;
        }
        config
    }

    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}
