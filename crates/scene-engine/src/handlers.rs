//! One pure handler per command category.
//!
//! Handlers read the current state and return the whole next object
//! collection; the caller installs it. Only `add` touches the store directly,
//! to mint identifiers for the spawned objects.

use crate::{CameraRig, EngineError, MoveDirection, RotateDirection, ScaleDirection};
use glam::Vec3;
use rand::Rng;
use scene_core::{AnimationKind, ObjectId, Rgb, SceneObject, SceneState, ShapeKind};
use std::f32::consts::TAU;
use tracing::debug;

const SPAWN_RADIUS: f32 = 3.0;
const SPAWN_LIFT: f32 = 1.5;
const SPAWN_SCALE_MIN: f32 = 0.5;
const SPAWN_SCALE_MAX: f32 = 1.5;

pub fn add<R: Rng>(
    state: &mut SceneState,
    rng: &mut R,
    shape: ShapeKind,
    count: u32,
    color: Rgb,
) -> Vec<SceneObject> {
    let mut objects = state.objects().to_vec();
    for _ in 0..count {
        let id = state.mint_id();
        objects.push(spawn(rng, id, shape, color));
    }
    objects
}

pub fn remove(state: &SceneState) -> Result<Vec<SceneObject>, EngineError> {
    let active = state.active_id().ok_or(EngineError::NotApplicable)?;
    Ok(state
        .objects()
        .iter()
        .filter(|obj| obj.id != active)
        .cloned()
        .collect())
}

pub fn recolor(state: &SceneState, color: Rgb) -> Result<Vec<SceneObject>, EngineError> {
    map_active(state, |obj| obj.color = color.to_string())
}

pub fn rescale(
    state: &SceneState,
    direction: ScaleDirection,
    factor: f32,
) -> Result<Vec<SceneObject>, EngineError> {
    let factor = match direction {
        ScaleDirection::Up => factor,
        ScaleDirection::Down => 1.0 / factor,
    };
    map_active(state, |obj| {
        for component in &mut obj.scale {
            *component *= factor;
        }
    })
}

pub fn reposition(
    state: &SceneState,
    direction: MoveDirection,
    distance: f32,
    camera: &dyn CameraRig,
) -> Result<Vec<SceneObject>, EngineError> {
    let delta = match direction {
        // Both camera-relative moves apply the camera-forward delta as-is.
        MoveDirection::Away | MoveDirection::Closer => {
            camera.orientation() * Vec3::new(0.0, 0.0, distance)
        }
        MoveDirection::Backward => Vec3::new(0.0, 0.0, -distance),
        MoveDirection::Forward => Vec3::new(0.0, 0.0, distance),
        MoveDirection::Left => Vec3::new(-distance, 0.0, 0.0),
        MoveDirection::Right => Vec3::new(distance, 0.0, 0.0),
        MoveDirection::Up => Vec3::new(0.0, distance, 0.0),
        MoveDirection::Down => Vec3::new(0.0, -distance, 0.0),
    };
    debug!(?direction, ?delta, "move delta");
    map_active(state, |obj| {
        obj.position[0] += delta.x;
        obj.position[1] += delta.y;
        obj.position[2] += delta.z;
    })
}

pub fn rotate(
    state: &SceneState,
    direction: RotateDirection,
    degrees: f32,
) -> Result<Vec<SceneObject>, EngineError> {
    let mut radians = degrees.to_radians();
    if direction == RotateDirection::CounterClockwise {
        radians = -radians;
    }
    debug!(degrees, radians, "rotate delta");
    // Heading only; no wraparound normalization.
    map_active(state, |obj| obj.rotation[1] += radians)
}

/// `Some` starts an animation on the active object, `None` stops them all.
pub fn animate(
    state: &SceneState,
    start: Option<AnimationKind>,
) -> Result<Vec<SceneObject>, EngineError> {
    map_active(state, |obj| match start {
        Some(animation) => obj.animations.push(animation),
        None => obj.animations.clear(),
    })
}

fn map_active(
    state: &SceneState,
    mut mutate: impl FnMut(&mut SceneObject),
) -> Result<Vec<SceneObject>, EngineError> {
    let active = state.active_id().ok_or(EngineError::NotApplicable)?;
    Ok(state
        .objects()
        .iter()
        .cloned()
        .map(|mut obj| {
            if obj.id == active {
                mutate(&mut obj);
            }
            obj
        })
        .collect())
}

fn spawn<R: Rng>(rng: &mut R, id: ObjectId, shape: ShapeKind, color: Rgb) -> SceneObject {
    SceneObject {
        id,
        kind: shape,
        position: random_position(rng),
        rotation: random_rotation(rng),
        scale: random_scale(rng),
        color: color.to_string(),
        animations: Vec::new(),
    }
}

/// Random direction scaled by a random radius, lifted above the ground plane.
fn random_position<R: Rng>(rng: &mut R) -> [f32; 3] {
    let radius = rng.gen_range(0.0..SPAWN_RADIUS);
    let theta = rng.gen_range(0.0..TAU);
    let u: f32 = rng.gen_range(-1.0..1.0);
    let c = (1.0 - u * u).sqrt();
    let point = Vec3::new(c * theta.cos(), u, c * theta.sin()) * radius;
    [point.x, point.y + SPAWN_LIFT, point.z]
}

fn random_scale<R: Rng>(rng: &mut R) -> [f32; 3] {
    let scale = rng.gen_range(SPAWN_SCALE_MIN..SPAWN_SCALE_MAX);
    [scale, scale, scale]
}

fn random_rotation<R: Rng>(rng: &mut R) -> [f32; 3] {
    [
        rng.gen_range(0.0..TAU),
        rng.gen_range(0.0..TAU),
        rng.gen_range(0.0..TAU),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn object(id: ObjectId) -> SceneObject {
        SceneObject {
            id,
            kind: ShapeKind::Sphere,
            position: [1.0, 2.0, 3.0],
            rotation: [0.1, 0.2, 0.3],
            scale: [1.0; 3],
            color: Rgb([10, 20, 30]).to_string(),
            animations: Vec::new(),
        }
    }

    fn state_with_selection() -> SceneState {
        let mut state = SceneState::default();
        state.replace_all(vec![object(1), object(2)]);
        state.toggle_active(1);
        state
    }

    #[test]
    fn map_active_without_selection_declines() {
        let mut state = SceneState::default();
        state.replace_all(vec![object(1)]);
        let err = map_active(&state, |_| {}).unwrap_err();
        assert_eq!(err, EngineError::NotApplicable);
    }

    #[test]
    fn remove_filters_only_the_active_object() {
        let state = state_with_selection();
        let objects = remove(&state).unwrap();
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].id, 2);
    }

    #[test]
    fn rescale_down_inverts_the_factor() {
        let state = state_with_selection();
        let objects = rescale(&state, ScaleDirection::Down, 4.0).unwrap();
        assert_eq!(objects[0].scale, [0.25, 0.25, 0.25]);
        assert_eq!(objects[1].scale, [1.0; 3]);
    }

    #[test]
    fn reposition_left_moves_along_negative_x() {
        let state = state_with_selection();
        let camera = crate::FixedCamera(glam::Quat::IDENTITY);
        let objects = reposition(&state, MoveDirection::Left, 0.5, &camera).unwrap();
        assert_eq!(objects[0].position, [0.5, 2.0, 3.0]);
        assert_eq!(objects[1].position, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn rotate_counterclockwise_subtracts_from_heading() {
        let state = state_with_selection();
        let objects = rotate(&state, RotateDirection::CounterClockwise, 90.0).unwrap();
        let expected = 0.2 - std::f32::consts::FRAC_PI_2;
        assert!((objects[0].rotation[1] - expected).abs() < 1e-6);
        assert_eq!(objects[0].rotation[0], 0.1);
        assert_eq!(objects[0].rotation[2], 0.3);
    }

    #[test]
    fn animate_appends_and_clears() {
        let state = state_with_selection();
        let objects = animate(&state, Some(AnimationKind::Jump)).unwrap();
        assert_eq!(objects[0].animations, vec![AnimationKind::Jump]);

        let mut state = state;
        state.replace_all(objects);
        let objects = animate(&state, None).unwrap();
        assert!(objects[0].animations.is_empty());
    }

    #[test]
    fn spawn_samples_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let position = random_position(&mut rng);
            let lifted = Vec3::new(position[0], position[1] - SPAWN_LIFT, position[2]);
            assert!(lifted.length() <= SPAWN_RADIUS + 1e-4);

            let scale = random_scale(&mut rng);
            assert!((SPAWN_SCALE_MIN..SPAWN_SCALE_MAX).contains(&scale[0]));
            assert_eq!(scale[0], scale[1]);
            assert_eq!(scale[1], scale[2]);

            let rotation = random_rotation(&mut rng);
            for axis in rotation {
                assert!((0.0..TAU).contains(&axis));
            }
        }
    }

    #[test]
    fn add_mints_distinct_ids() {
        let mut state = SceneState::default();
        let mut rng = StdRng::seed_from_u64(1);
        let objects = add(&mut state, &mut rng, ShapeKind::Cube, 5, Rgb([0, 0, 0]));
        let mut ids: Vec<_> = objects.iter().map(|obj| obj.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }
}
