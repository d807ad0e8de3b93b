//! Transform interpolation: turns an animation parameter into a scene snapshot.

mod motion;
mod rig;

pub use motion::{EntityHandle, MotionSpec, MotionTrack};
pub use rig::{AnimationRig, PercentagePolicy};
