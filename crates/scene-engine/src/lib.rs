//! Command-to-scene-mutation engine.
//!
//! Takes commands already classified by the external NLP service, applies them
//! to the scene state, and produces the confirmation sentence shown to the
//! user. Everything here is synchronous: one `process` call either mutates the
//! scene and returns a description, or fails and leaves the scene untouched.

mod command;
mod describe;
mod handlers;

pub use command::{Command, MoveDirection, RotateDirection, ScaleDirection};
pub use describe::describe;

use glam::Quat;
use rand::Rng;
use scene_core::{ObjectId, SceneState};
use scene_protocol::ClassifiedCommand;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The general category or, for add, the specific shape tag is not
    /// recognized.
    #[error("unrecognized command")]
    UnknownCommand,
    /// A required active selection is absent, or a sub-action does not apply.
    #[error("command does not apply to the current scene")]
    NotApplicable,
}

/// Collaborator exposing the current camera rotation, consulted only by
/// camera-relative moves.
pub trait CameraRig {
    fn orientation(&self) -> Quat;
}

/// Camera with a fixed orientation. The server default and the test double.
#[derive(Debug, Clone, Copy)]
pub struct FixedCamera(pub Quat);

impl CameraRig for FixedCamera {
    fn orientation(&self) -> Quat {
        self.0
    }
}

/// One editor session: the scene aggregate plus the spawn randomness source.
///
/// The RNG is injected so tests can seed it deterministically.
pub struct Engine<R> {
    state: SceneState,
    rng: R,
}

impl<R: Rng> Engine<R> {
    pub fn new(rng: R) -> Self {
        Self {
            state: SceneState::default(),
            rng,
        }
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    /// Entry point for the pointer-selection collaborator.
    pub fn toggle_select(&mut self, id: ObjectId) {
        self.state.toggle_active(id);
    }

    /// Resolves a classifier response and applies it to the scene.
    pub fn process(
        &mut self,
        raw: &ClassifiedCommand,
        camera: &dyn CameraRig,
    ) -> Result<String, EngineError> {
        let command = Command::from_classified(raw)?;
        self.apply(&command, camera)
    }

    /// Applies an already-resolved command. On failure the scene is untouched.
    pub fn apply(
        &mut self,
        command: &Command,
        camera: &dyn CameraRig,
    ) -> Result<String, EngineError> {
        let objects = match command {
            Command::Add {
                shape,
                count,
                color,
            } => handlers::add(&mut self.state, &mut self.rng, *shape, *count, *color),
            Command::Remove => handlers::remove(&self.state)?,
            Command::Recolor { color } => handlers::recolor(&self.state, *color)?,
            Command::Scale { direction, factor } => {
                handlers::rescale(&self.state, *direction, *factor)?
            }
            Command::Move {
                direction,
                distance,
            } => handlers::reposition(&self.state, *direction, *distance, camera)?,
            Command::Rotate { direction, degrees } => {
                handlers::rotate(&self.state, *direction, *degrees)?
            }
            Command::StartAnimation { animation } => {
                handlers::animate(&self.state, Some(*animation))?
            }
            Command::StopAnimation => handlers::animate(&self.state, None)?,
        };
        self.state.replace_all(objects);
        Ok(describe(command))
    }
}
