//! Typed command vocabulary resolved from classifier output.
//!
//! Every known category and sub-action is a closed variant, so dispatch is
//! exhaustive; anything the vocabulary does not cover is rejected here, before
//! any handler runs.

use crate::EngineError;
use scene_core::{AnimationKind, Rgb, ShapeKind};
use scene_protocol::ClassifiedCommand;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add {
        shape: ShapeKind,
        count: u32,
        color: Rgb,
    },
    Remove,
    Recolor {
        color: Rgb,
    },
    Scale {
        direction: ScaleDirection,
        factor: f32,
    },
    Move {
        direction: MoveDirection,
        distance: f32,
    },
    Rotate {
        direction: RotateDirection,
        degrees: f32,
    },
    StartAnimation {
        animation: AnimationKind,
    },
    StopAnimation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Away,
    Backward,
    Closer,
    Down,
    Forward,
    Left,
    Right,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateDirection {
    Clockwise,
    CounterClockwise,
}

impl Command {
    /// Resolves the wire form into a typed command with defaults filled in
    /// (1 object added, scale factor 2, move distance 0.5, 90 degrees).
    ///
    /// A `value` of exactly zero counts as absent; the classifier emits it for
    /// commands that carry no magnitude.
    pub fn from_classified(raw: &ClassifiedCommand) -> Result<Self, EngineError> {
        let value = raw.value.filter(|v| *v != 0.0);
        match raw.general_label.as_str() {
            "add" => {
                let shape =
                    shape_for(&raw.specific_label).ok_or(EngineError::UnknownCommand)?;
                let color = required_color(raw)?;
                Ok(Command::Add {
                    shape,
                    count: value.map(|v| v as u32).unwrap_or(1),
                    color,
                })
            }
            "remove" => Ok(Command::Remove),
            "color" => Ok(Command::Recolor {
                color: required_color(raw)?,
            }),
            "scale" => Ok(Command::Scale {
                direction: if raw.specific_label == "scale_down" {
                    ScaleDirection::Down
                } else {
                    ScaleDirection::Up
                },
                factor: value.unwrap_or(2.0),
            }),
            "move" => Ok(Command::Move {
                direction: move_direction(&raw.specific_label)
                    .ok_or(EngineError::NotApplicable)?,
                distance: value.unwrap_or(0.5),
            }),
            "rotate" => Ok(Command::Rotate {
                direction: if raw.specific_label == "rotate_clockwise" {
                    RotateDirection::Clockwise
                } else {
                    RotateDirection::CounterClockwise
                },
                degrees: value.unwrap_or(90.0),
            }),
            "start_animation" => Ok(Command::StartAnimation {
                animation: animation_for(&raw.specific_label)
                    .ok_or(EngineError::NotApplicable)?,
            }),
            "stop_animation" => Ok(Command::StopAnimation),
            _ => Err(EngineError::UnknownCommand),
        }
    }
}

fn required_color(raw: &ClassifiedCommand) -> Result<Rgb, EngineError> {
    raw.color.map(Rgb).ok_or(EngineError::NotApplicable)
}

// add_pyramid lands on Cone: there is no dedicated pyramid primitive.
fn shape_for(label: &str) -> Option<ShapeKind> {
    match label {
        "add_cube" => Some(ShapeKind::Cube),
        "add_sphere" => Some(ShapeKind::Sphere),
        "add_plane" => Some(ShapeKind::Plane),
        "add_cylinder" => Some(ShapeKind::Cylinder),
        "add_torus" => Some(ShapeKind::Torus),
        "add_cone" | "add_pyramid" => Some(ShapeKind::Cone),
        _ => None,
    }
}

fn move_direction(label: &str) -> Option<MoveDirection> {
    match label {
        "move_away" => Some(MoveDirection::Away),
        "move_backward" => Some(MoveDirection::Backward),
        "move_closer" => Some(MoveDirection::Closer),
        "move_down" => Some(MoveDirection::Down),
        "move_forward" => Some(MoveDirection::Forward),
        "move_left" => Some(MoveDirection::Left),
        "move_right" => Some(MoveDirection::Right),
        "move_up" => Some(MoveDirection::Up),
        _ => None,
    }
}

fn animation_for(label: &str) -> Option<AnimationKind> {
    match label {
        "jump" => Some(AnimationKind::Jump),
        "spin" => Some(AnimationKind::Spin),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(general: &str, specific: &str) -> ClassifiedCommand {
        ClassifiedCommand {
            command: String::new(),
            general_label: general.to_string(),
            specific_label: specific.to_string(),
            value: None,
            color: None,
        }
    }

    #[test]
    fn unknown_general_label_is_unknown_command() {
        let err = Command::from_classified(&raw("fly", "fly_up")).unwrap_err();
        assert_eq!(err, EngineError::UnknownCommand);
    }

    #[test]
    fn unknown_shape_is_unknown_command() {
        let mut cmd = raw("add", "add_teapot");
        cmd.color = Some([1, 2, 3]);
        let err = Command::from_classified(&cmd).unwrap_err();
        assert_eq!(err, EngineError::UnknownCommand);
    }

    #[test]
    fn add_without_color_is_not_applicable() {
        let err = Command::from_classified(&raw("add", "add_cube")).unwrap_err();
        assert_eq!(err, EngineError::NotApplicable);
    }

    #[test]
    fn pyramid_maps_to_cone() {
        let mut cmd = raw("add", "add_pyramid");
        cmd.color = Some([1, 2, 3]);
        match Command::from_classified(&cmd).unwrap() {
            Command::Add { shape, count, .. } => {
                assert_eq!(shape, ShapeKind::Cone);
                assert_eq!(count, 1);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn zero_value_counts_as_absent() {
        let mut cmd = raw("scale", "scale_up");
        cmd.value = Some(0.0);
        match Command::from_classified(&cmd).unwrap() {
            Command::Scale { factor, .. } => assert_eq!(factor, 2.0),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn non_clockwise_rotations_fall_back_to_counterclockwise() {
        match Command::from_classified(&raw("rotate", "rotate_somehow")).unwrap() {
            Command::Rotate { direction, degrees } => {
                assert_eq!(direction, RotateDirection::CounterClockwise);
                assert_eq!(degrees, 90.0);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn unknown_move_direction_is_not_applicable() {
        let err = Command::from_classified(&raw("move", "move_diagonally")).unwrap_err();
        assert_eq!(err, EngineError::NotApplicable);
    }

    #[test]
    fn unknown_animation_is_not_applicable() {
        let err = Command::from_classified(&raw("start_animation", "dance")).unwrap_err();
        assert_eq!(err, EngineError::NotApplicable);
    }

    #[test]
    fn stop_animation_ignores_the_specific_label() {
        let cmd = Command::from_classified(&raw("stop_animation", "dance")).unwrap();
        assert_eq!(cmd, Command::StopAnimation);
    }
}
