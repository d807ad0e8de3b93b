use std::fmt;

use serde::{Deserialize, Serialize};

use crate::transform::{TransformDelta, TransformParams};

/// Names the scene entity a track drives
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntityHandle {
    Object { name: String },
    Light { name: String },
}

impl EntityHandle {
    pub fn object(name: impl Into<String>) -> Self {
        EntityHandle::Object { name: name.into() }
    }

    pub fn light(name: impl Into<String>) -> Self {
        EntityHandle::Light { name: name.into() }
    }

    pub fn name(&self) -> &str {
        match self {
            EntityHandle::Object { name } | EntityHandle::Light { name } => name,
        }
    }
}

impl fmt::Display for EntityHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityHandle::Object { name } => write!(f, "object `{name}`"),
            EntityHandle::Light { name } => write!(f, "light `{name}`"),
        }
    }
}

/// Linear motion from `base` to `base + delta`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MotionSpec {
    #[serde(default)]
    pub base: TransformParams,
    #[serde(default)]
    pub delta: TransformDelta,
}

impl MotionSpec {
    pub fn new(base: TransformParams, delta: TransformDelta) -> Self {
        Self { base, delta }
    }

    /// Pose at `percentage`; values outside `[0, 1]` extrapolate
    pub fn at(&self, percentage: f32) -> TransformParams {
        self.base.offset_by(&self.delta, percentage)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionTrack {
    pub target: EntityHandle,
    #[serde(flatten)]
    pub motion: MotionSpec,
}

impl MotionTrack {
    pub fn new(target: EntityHandle, motion: MotionSpec) -> Self {
        Self { target, motion }
    }
}
