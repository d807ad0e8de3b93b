pub mod animation;
pub mod cli;
pub mod config;
pub mod error;
pub mod math;
pub mod render;
pub mod scene;
pub mod timeline;
pub mod transform;

pub use animation::{AnimationRig, EntityHandle, MotionSpec, MotionTrack, PercentagePolicy};
pub use config::AnimationConfig;
pub use error::{AnimationError, ConfigError};
pub use render::{RayTracer, Renderer};
pub use scene::{build_initial_scene, Scene};
pub use timeline::{FrameSchedule, Timeline};
pub use transform::make_transform;
