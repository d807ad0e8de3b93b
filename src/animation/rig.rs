use serde::{Deserialize, Serialize};

use super::motion::{EntityHandle, MotionTrack};
use crate::error::AnimationError;
use crate::scene::Scene;
use crate::transform::TransformParams;

/// What to do with an animation parameter outside `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentagePolicy {
    /// Use the value as given; motions continue past their endpoints
    #[default]
    Extrapolate,
    /// Pin the value to `[0, 1]`
    Clamp,
}

impl PercentagePolicy {
    pub fn apply(self, percentage: f32) -> f32 {
        match self {
            PercentagePolicy::Extrapolate => percentage,
            PercentagePolicy::Clamp => percentage.clamp(0.0, 1.0),
        }
    }
}

/// The set of animated entities and how each one moves.
///
/// Every entity not named by a track is copied into the snapshot untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnimationRig {
    tracks: Vec<MotionTrack>,
    policy: PercentagePolicy,
}

impl AnimationRig {
    pub fn new(tracks: Vec<MotionTrack>, policy: PercentagePolicy) -> Self {
        Self { tracks, policy }
    }

    pub fn tracks(&self) -> &[MotionTrack] {
        &self.tracks
    }

    pub fn policy(&self) -> PercentagePolicy {
        self.policy
    }

    /// Checks that every track resolves in `scene`
    pub fn validate(&self, scene: &Scene) -> Result<(), AnimationError> {
        for track in &self.tracks {
            match &track.target {
                EntityHandle::Object { name } => {
                    if scene.object(name).is_none() {
                        return Err(AnimationError::MissingObject { name: name.clone() });
                    }
                }
                EntityHandle::Light { name } => {
                    if scene.light(name).is_none() {
                        return Err(AnimationError::MissingLight { name: name.clone() });
                    }
                    if track.motion.delta.moves_orientation_or_scale() {
                        log::warn!("light `{name}` only follows translation; rotation and scale deltas are ignored");
                    }
                }
            }
        }
        Ok(())
    }

    /// Pose of `target` at `percentage`, after the rig's policy is applied
    pub fn sample(&self, percentage: f32, target: &EntityHandle) -> Option<TransformParams> {
        let percentage = self.policy.apply(percentage);
        self.tracks
            .iter()
            .find(|track| &track.target == target)
            .map(|track| track.motion.at(percentage))
    }

    /// Builds the snapshot for `percentage`. `scene` is only read; the
    /// returned scene is an independent copy.
    pub fn animate(&self, percentage: f32, scene: &Scene) -> Result<Scene, AnimationError> {
        let percentage = self.policy.apply(percentage);
        let mut snapshot = scene.clone();

        for track in &self.tracks {
            let pose = track.motion.at(percentage);
            match &track.target {
                EntityHandle::Object { name } => {
                    snapshot
                        .object_mut(name)
                        .ok_or_else(|| AnimationError::MissingObject { name: name.clone() })?
                        .set_transformation(pose.to_matrix());
                }
                EntityHandle::Light { name } => {
                    snapshot
                        .light_mut(name)
                        .ok_or_else(|| AnimationError::MissingLight { name: name.clone() })?
                        .position = pose.translation;
                }
            }
        }

        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::MotionSpec;
    use crate::scene::{build_initial_scene, default_tracks};
    use crate::transform::TransformDelta;
    use glam::Vec3;

    fn default_rig(policy: PercentagePolicy) -> AnimationRig {
        AnimationRig::new(default_tracks(), policy)
    }

    #[test]
    fn test_clamp_policy_pins_range() {
        assert_eq!(PercentagePolicy::Clamp.apply(1.5), 1.0);
        assert_eq!(PercentagePolicy::Clamp.apply(-0.5), 0.0);
        assert_eq!(PercentagePolicy::Clamp.apply(0.25), 0.25);
        assert_eq!(PercentagePolicy::Extrapolate.apply(1.5), 1.5);
    }

    #[test]
    fn test_default_rig_validates_against_demo_scene() {
        assert_eq!(default_rig(PercentagePolicy::Extrapolate).validate(&build_initial_scene()), Ok(()));
    }

    #[test]
    fn test_missing_object_is_reported() {
        let rig = AnimationRig::new(
            vec![MotionTrack::new(EntityHandle::object("ghost"), MotionSpec::default())],
            PercentagePolicy::Extrapolate,
        );
        let scene = build_initial_scene();
        let expected = AnimationError::MissingObject { name: "ghost".into() };
        assert_eq!(rig.validate(&scene), Err(expected.clone()));
        assert_eq!(rig.animate(0.5, &scene), Err(expected));
    }

    #[test]
    fn test_missing_light_is_reported() {
        let rig = AnimationRig::new(
            vec![MotionTrack::new(EntityHandle::light("sun"), MotionSpec::default())],
            PercentagePolicy::Extrapolate,
        );
        assert_eq!(
            rig.animate(0.0, &build_initial_scene()),
            Err(AnimationError::MissingLight { name: "sun".into() })
        );
    }

    #[test]
    fn test_light_follows_translation_only() {
        let scene = build_initial_scene();
        let rig = AnimationRig::new(
            vec![MotionTrack::new(
                EntityHandle::light("key"),
                MotionSpec::new(
                    TransformParams::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, Vec3::ONE),
                    TransformDelta::new(Vec3::X, Vec3::splat(90.0), Vec3::ONE),
                ),
            )],
            PercentagePolicy::Extrapolate,
        );
        let snapshot = rig.animate(1.0, &scene).unwrap();
        assert_eq!(snapshot.light("key").unwrap().position, Vec3::new(2.0, 2.0, 3.0));
    }

    #[test]
    fn test_sample_applies_policy() {
        let rig = default_rig(PercentagePolicy::Clamp);
        let handle = EntityHandle::light("key");
        assert_eq!(rig.sample(3.0, &handle), rig.sample(1.0, &handle));
        assert!(rig.sample(0.5, &EntityHandle::light("nobody")).is_none());
    }

    #[test]
    fn test_empty_rig_copies_scene() {
        let scene = build_initial_scene();
        assert_eq!(AnimationRig::default().animate(0.7, &scene).unwrap(), scene);
    }
}
