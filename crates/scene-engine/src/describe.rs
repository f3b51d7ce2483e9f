//! Confirmation sentences for successfully applied commands.

use crate::{Command, MoveDirection, ScaleDirection};

/// Renders the sentence shown to the user after a command succeeds.
/// Pure and idempotent; magnitudes are the resolved values, so defaults show
/// up in the text (`"Scaled up 2 times"` for a bare scale command).
pub fn describe(command: &Command) -> String {
    match command {
        Command::Add { shape, count, .. } => {
            let plural = if *count > 1 { "s" } else { "" };
            format!("Added {count} {shape}{plural}")
        }
        Command::Remove => "Removed selected object".to_string(),
        Command::Recolor { .. } => "Changed color".to_string(),
        Command::Scale { direction, factor } => {
            let word = match direction {
                ScaleDirection::Up => "up",
                ScaleDirection::Down => "down",
            };
            format!("Scaled {word} {factor} times")
        }
        Command::Move {
            direction,
            distance,
        } => format!("Moved {} by {distance} meters", direction_phrase(*direction)),
        Command::Rotate { degrees, .. } => format!("Rotated by {degrees} degrees"),
        Command::StartAnimation { animation } => format!("Started {animation}"),
        Command::StopAnimation => "Stopped all animations".to_string(),
    }
}

fn direction_phrase(direction: MoveDirection) -> &'static str {
    match direction {
        MoveDirection::Away => "away from you",
        MoveDirection::Backward => "backward",
        MoveDirection::Closer => "closer to you",
        MoveDirection::Down => "down",
        MoveDirection::Forward => "forward",
        MoveDirection::Left => "left",
        MoveDirection::Right => "right",
        MoveDirection::Up => "up",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RotateDirection;
    use scene_core::{AnimationKind, Rgb, ShapeKind};

    #[test]
    fn add_pluralizes_above_one() {
        let two = Command::Add {
            shape: ShapeKind::Cube,
            count: 2,
            color: Rgb([255, 0, 0]),
        };
        assert_eq!(describe(&two), "Added 2 Cubes");

        let one = Command::Add {
            shape: ShapeKind::Cone,
            count: 1,
            color: Rgb([255, 0, 0]),
        };
        assert_eq!(describe(&one), "Added 1 Cone");
    }

    #[test]
    fn magnitudes_render_without_trailing_zeroes() {
        let scale = Command::Scale {
            direction: ScaleDirection::Up,
            factor: 2.0,
        };
        assert_eq!(describe(&scale), "Scaled up 2 times");

        let nudge = Command::Move {
            direction: MoveDirection::Closer,
            distance: 0.5,
        };
        assert_eq!(describe(&nudge), "Moved closer to you by 0.5 meters");
    }

    #[test]
    fn rotation_reports_the_unsigned_magnitude() {
        let rotate = Command::Rotate {
            direction: RotateDirection::CounterClockwise,
            degrees: 45.0,
        };
        assert_eq!(describe(&rotate), "Rotated by 45 degrees");
    }

    #[test]
    fn animation_sentences() {
        let start = Command::StartAnimation {
            animation: AnimationKind::Jump,
        };
        assert_eq!(describe(&start), "Started jump");
        assert_eq!(describe(&Command::StopAnimation), "Stopped all animations");
    }

    #[test]
    fn describe_is_idempotent() {
        let command = Command::Move {
            direction: MoveDirection::Up,
            distance: 2.0,
        };
        assert_eq!(describe(&command), describe(&command));
        assert_eq!(describe(&command), "Moved up by 2 meters");
    }
}
