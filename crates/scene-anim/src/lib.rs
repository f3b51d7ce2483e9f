//! Continuous per-frame animation effects for the rendering layer.
//!
//! Discrete commands only flag which animations are active on an object; this
//! crate turns those flags into presentation transforms once per frame. Stored
//! scene state is never modified here.

use glam::{EulerRot, Quat, Vec3};
use scene_core::{AnimationKind, ObjectId, SceneObject};
use std::collections::HashMap;

/// Radians added around the world up axis each frame while Spin is active.
const SPIN_STEP: f32 = 0.01;
/// Jump oscillation frequency over elapsed seconds.
const JUMP_RATE: f32 = 2.0;

/// What the renderer draws for one object this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayTransform {
    pub position: [f32; 3],
    /// Quaternion, xyzw.
    pub rotation: [f32; 4],
    pub scale: [f32; 3],
}

/// Accumulates per-object spin angles across frames.
#[derive(Debug, Default)]
pub struct FrameAnimator {
    spin: HashMap<ObjectId, f32>,
}

impl FrameAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances one frame and yields the presentation transform per object,
    /// in scene order. `elapsed_secs` is time since session start and drives
    /// the jump oscillation; spin advances one fixed step per call.
    pub fn advance(
        &mut self,
        objects: &[SceneObject],
        elapsed_secs: f32,
    ) -> Vec<(ObjectId, DisplayTransform)> {
        self.spin.retain(|id, _| {
            objects
                .iter()
                .any(|obj| obj.id == *id && obj.animations.contains(&AnimationKind::Spin))
        });

        objects
            .iter()
            .map(|obj| {
                let mut position = Vec3::from_array(obj.position);
                if obj.animations.contains(&AnimationKind::Jump) {
                    position.y = obj.position[1] + (elapsed_secs * JUMP_RATE).sin().abs();
                }

                let base = Quat::from_euler(
                    EulerRot::XYZ,
                    obj.rotation[0],
                    obj.rotation[1],
                    obj.rotation[2],
                );
                let rotation = if obj.animations.contains(&AnimationKind::Spin) {
                    let angle = self.spin.entry(obj.id).or_insert(0.0);
                    *angle += SPIN_STEP;
                    // World-axis rotation composes on the outside.
                    Quat::from_rotation_y(*angle) * base
                } else {
                    base
                };

                (
                    obj.id,
                    DisplayTransform {
                        position: position.to_array(),
                        rotation: rotation.to_array(),
                        scale: obj.scale,
                    },
                )
            })
            .collect()
    }
}
