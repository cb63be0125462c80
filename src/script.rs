//! Replaying recorded drawing sessions.
//!
//! A script is JSON lines, one command per line:
//!
//! ```text
//! # red diagonal, then undo it
//! {"op":"color","color":"red"}
//! {"op":"down","x":0,"y":0}
//! {"op":"move","x":10,"y":10}
//! {"op":"up"}
//! {"op":"undo"}
//! ```
//!
//! Blank lines and lines starting with `#` are ignored.

use crate::config::ColorSpec;
use crate::draw::{BrushSize, Color};
use crate::input::{Action, InputState, PointerEvent};
use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

/// One line of a drawing script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum ScriptCommand {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
    Undo,
    Redo,
    Clear,
    Color { color: ColorSpec },
    Brush { size: BrushSize },
    Width { width: f64 },
}

/// A parsed command with the line it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptStep {
    pub line: usize,
    pub command: ScriptCommand,
}

/// What a script does to the session, once resolved.
enum Input {
    Pointer(PointerEvent),
    Action(Action),
}

impl ScriptCommand {
    fn resolve(&self) -> Result<Input> {
        Ok(match self {
            ScriptCommand::Down { x, y } => Input::Pointer(PointerEvent::Down { x: *x, y: *y }),
            ScriptCommand::Move { x, y } => Input::Pointer(PointerEvent::Move { x: *x, y: *y }),
            ScriptCommand::Up => Input::Pointer(PointerEvent::Up),
            ScriptCommand::Undo => Input::Action(Action::Undo),
            ScriptCommand::Redo => Input::Action(Action::Redo),
            ScriptCommand::Clear => Input::Action(Action::Clear),
            ScriptCommand::Color { color } => {
                Input::Action(Action::SelectColor(resolve_color(color)?))
            }
            ScriptCommand::Brush { size } => Input::Action(Action::SelectBrushSize(*size)),
            ScriptCommand::Width { width } => Input::Action(Action::SetBrushWidth(*width)),
        })
    }
}

fn resolve_color(spec: &ColorSpec) -> Result<Color> {
    spec.try_to_color().ok_or_else(|| anyhow!("unknown color {:?}", spec))
}

/// Parses a whole script. Errors name the offending line (1-based).
pub fn parse_script(source: &str) -> Result<Vec<ScriptStep>> {
    let mut steps = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let command: ScriptCommand = serde_json::from_str(trimmed)
            .with_context(|| format!("Invalid script command on line {line}"))?;
        // Reject unknown colors up front rather than halfway through a replay
        command
            .resolve()
            .with_context(|| format!("Invalid script command on line {line}"))?;

        steps.push(ScriptStep { line, command });
    }
    log::debug!("Parsed {} script commands", steps.len());
    Ok(steps)
}

/// Feeds every step into `state`, in order.
pub fn run_script(state: &mut InputState, steps: &[ScriptStep]) -> Result<()> {
    for step in steps {
        match step
            .command
            .resolve()
            .with_context(|| format!("Invalid script command on line {}", step.line))?
        {
            Input::Pointer(event) => state.on_pointer(event),
            Input::Action(action) => {
                if !state.handle_action(action) {
                    log::debug!("Line {}: {:?} had no effect", step.line, step.command);
                }
            }
        }
    }

    if state.canvas.is_drawing() {
        log::warn!("Script ended with a stroke still in progress");
    }
    log::info!(
        "Replayed {} commands; {} strokes on canvas",
        steps.len(),
        state.canvas.strokes().len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Background, RED, StrokeCanvas};

    fn state() -> InputState {
        InputState::new(StrokeCanvas::new(), Background::default(), 32, 32)
    }

    #[test]
    fn parses_every_command_kind() {
        let source = r#"
# comment
{"op":"down","x":1,"y":2}
{"op":"move","x":3.5,"y":4}
{"op":"up"}

{"op":"undo"}
{"op":"redo"}
{"op":"clear"}
{"op":"color","color":"red"}
{"op":"color","color":[0,128,255]}
{"op":"brush","size":"very-small"}
{"op":"width","width":7.5}
"#;
        let steps = parse_script(source).unwrap();
        let commands: Vec<_> = steps.iter().map(|s| s.command.clone()).collect();
        assert_eq!(
            commands,
            vec![
                ScriptCommand::Down { x: 1.0, y: 2.0 },
                ScriptCommand::Move { x: 3.5, y: 4.0 },
                ScriptCommand::Up,
                ScriptCommand::Undo,
                ScriptCommand::Redo,
                ScriptCommand::Clear,
                ScriptCommand::Color {
                    color: ColorSpec::Name("red".into())
                },
                ScriptCommand::Color {
                    color: ColorSpec::Rgb([0, 128, 255])
                },
                ScriptCommand::Brush {
                    size: BrushSize::VerySmall
                },
                ScriptCommand::Width { width: 7.5 },
            ]
        );
        assert_eq!(steps[0].line, 3);
        assert_eq!(steps[3].line, 7);
    }

    #[test]
    fn parse_error_names_line() {
        let source = "{\"op\":\"up\"}\n\n{\"op\":\"jump\"}\n";
        let err = parse_script(source).unwrap_err();
        assert!(format!("{err}").contains("line 3"));
    }

    #[test]
    fn unknown_color_is_a_parse_error() {
        let err = parse_script("{\"op\":\"color\",\"color\":\"mauve\"}").unwrap_err();
        assert!(format!("{err}").contains("line 1"));
        assert!(format!("{err:#}").contains("mauve"));
    }

    #[test]
    fn replay_draws_and_undoes() {
        let steps = parse_script(
            r#"{"op":"color","color":"red"}
{"op":"width","width":8}
{"op":"down","x":0,"y":0}
{"op":"move","x":10,"y":10}
{"op":"up"}
{"op":"down","x":5,"y":5}
{"op":"up"}
{"op":"undo"}"#,
        )
        .unwrap();

        let mut state = state();
        run_script(&mut state, &steps).unwrap();

        let strokes = state.canvas.strokes();
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].color(), RED);
        assert_eq!(strokes[0].width(), 8.0);
        assert_eq!(strokes[0].len(), 2);
        assert!(state.canvas.can_redo());
    }

    #[test]
    fn unfinished_stroke_stays_in_progress() {
        let steps = parse_script("{\"op\":\"down\",\"x\":1,\"y\":1}").unwrap();
        let mut state = state();
        run_script(&mut state, &steps).unwrap();
        assert!(state.canvas.is_drawing());
        assert!(state.canvas.strokes().is_empty());
    }
}
