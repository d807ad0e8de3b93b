//! Error types for the animation core and its configuration

/// Structural problems between a rig and the scene it animates
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AnimationError {
    #[error("scene has no object named `{name}`")]
    MissingObject { name: String },

    #[error("scene has no light named `{name}`")]
    MissingLight { name: String },
}

/// Configuration values that cannot produce a timeline
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("frame count must be at least 1")]
    ZeroFrames,

    #[error("image size {width}x{height} has no pixels")]
    EmptyImage { width: u32, height: u32 },

    #[error("object `{name}` has a zero scale axis at {percentage}")]
    DegenerateScale { name: String, percentage: f32 },
}
