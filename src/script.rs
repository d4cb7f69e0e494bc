//! Recorded gesture scripts.
//!
//! A script is a JSON list of pointer events and tool actions that can be
//! replayed against a session without a windowing system:
//!
//! ```json
//! {
//!   "actions": [
//!     { "type": "color", "color": "#ff0000" },
//!     { "type": "down", "x": 10, "y": 10 },
//!     { "type": "move", "x": 20, "y": 10, "pointer": "touch" },
//!     { "type": "up" },
//!     { "type": "undo" }
//!   ]
//! }
//! ```

use crate::draw::{Canvas, Color, ColorParseError};
use crate::input::{GesturePhase, InputState, PointerEvent, PointerKind, Tool};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// One recorded step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptAction {
    Down {
        x: f64,
        y: f64,
        #[serde(default)]
        pointer: PointerKind,
    },
    Move {
        x: f64,
        y: f64,
        #[serde(default)]
        pointer: PointerKind,
    },
    Up {
        #[serde(default)]
        pointer: PointerKind,
    },
    Tool {
        tool: Tool,
    },
    Width {
        width: u32,
    },
    /// Hex pen color such as `#ff0000`
    Color {
        color: String,
    },
    Undo,
    Reset,
}

/// A sequence of actions replayed in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GestureScript {
    pub actions: Vec<ScriptAction>,
}

/// Errors raised while loading or replaying a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid script JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Action {index}: {source}")]
    Color {
        index: usize,
        #[source]
        source: ColorParseError,
    },

    #[error("Rendering failed: {0}")]
    Render(#[from] cairo::Error),
}

/// Counts gathered while replaying a script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub actions: usize,
    pub redraws: usize,
    pub strokes: usize,
}

impl GestureScript {
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Applies every action to `input` without rendering.
    pub fn apply(&self, input: &mut InputState) -> Result<(), ScriptError> {
        for (index, action) in self.actions.iter().enumerate() {
            apply_action(input, index, action)?;
        }
        Ok(())
    }

    /// Applies every action, redrawing `canvas` after each one that changed the picture.
    pub fn replay(
        &self,
        input: &mut InputState,
        canvas: &mut Canvas,
    ) -> Result<ReplaySummary, ScriptError> {
        let mut summary = ReplaySummary::default();
        for (index, action) in self.actions.iter().enumerate() {
            apply_action(input, index, action)?;
            summary.actions += 1;
            if canvas.sync(input)? {
                summary.redraws += 1;
            }
        }
        summary.strokes = input.strokes().len();
        log::debug!("Replayed script: {summary:?}");
        Ok(summary)
    }
}

fn apply_action(
    input: &mut InputState,
    index: usize,
    action: &ScriptAction,
) -> Result<(), ScriptError> {
    match action {
        ScriptAction::Down { x, y, pointer } => {
            input.handle_event(PointerEvent::new(*pointer, GesturePhase::Start, Some((*x, *y))));
        }
        ScriptAction::Move { x, y, pointer } => {
            input.handle_event(PointerEvent::new(*pointer, GesturePhase::Move, Some((*x, *y))));
        }
        ScriptAction::Up { pointer } => {
            input.handle_event(PointerEvent::new(*pointer, GesturePhase::End, None));
        }
        ScriptAction::Tool { tool } => input.select_tool(*tool),
        ScriptAction::Width { width } => input.set_width(*width),
        ScriptAction::Color { color } => {
            let color = Color::from_hex(color)
                .map_err(|source| ScriptError::Color { index, source })?;
            input.set_color(color);
        }
        ScriptAction::Undo => input.undo(),
        ScriptAction::Reset => input.reset(),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLUE, RED};

    const SCRIPT: &str = r##"{
        "actions": [
            { "type": "color", "color": "#ff0000" },
            { "type": "width", "width": 3 },
            { "type": "down", "x": 10, "y": 10 },
            { "type": "move", "x": 20, "y": 10 },
            { "type": "color", "color": "#0000ff" },
            { "type": "move", "x": 20, "y": 20 },
            { "type": "up" },
            { "type": "tool", "tool": "eraser" },
            { "type": "down", "x": 15, "y": 15, "pointer": "touch" },
            { "type": "up", "pointer": "touch" }
        ]
    }"##;

    #[test]
    fn replay_matches_direct_calls() {
        let script = GestureScript::from_json(SCRIPT).unwrap();
        let mut scripted = InputState::default();
        script.apply(&mut scripted).unwrap();

        let mut direct = InputState::default();
        direct.set_color(RED);
        direct.set_width(3);
        direct.on_pointer_down(PointerKind::Mouse, Some((10.0, 10.0)));
        direct.on_pointer_move(PointerKind::Mouse, Some((20.0, 10.0)));
        direct.set_color(BLUE);
        direct.on_pointer_move(PointerKind::Mouse, Some((20.0, 20.0)));
        direct.on_pointer_up(PointerKind::Mouse);
        direct.select_tool(Tool::Eraser);
        direct.on_pointer_down(PointerKind::Touch, Some((15.0, 15.0)));
        direct.on_pointer_up(PointerKind::Touch);

        assert_eq!(scripted.stroke_sequence(), direct.stroke_sequence());
        assert_eq!(scripted.strokes()[0].color, RED);
        assert_eq!(scripted.strokes()[1].tool, Tool::Eraser);
    }

    #[test]
    fn replay_redraws_canvas() {
        let script = GestureScript::from_json(SCRIPT).unwrap();
        let mut input = InputState::default();
        let mut canvas = Canvas::new(40, 40).unwrap();

        let summary = script.replay(&mut input, &mut canvas).unwrap();

        assert_eq!(summary.actions, 10);
        assert_eq!(summary.strokes, 2);
        assert!(summary.redraws > 0);
        assert!(!input.needs_redraw);
    }

    #[test]
    fn bad_color_reports_action_index() {
        let script =
            GestureScript::from_json(r#"{"actions":[{"type":"undo"},{"type":"color","color":"red"}]}"#)
                .unwrap();
        let err = script.apply(&mut InputState::default()).unwrap_err();
        assert!(matches!(err, ScriptError::Color { index: 1, .. }));
    }

    #[test]
    fn unknown_action_is_rejected() {
        let err = GestureScript::from_json(r#"{"actions":[{"type":"rotate"}]}"#).unwrap_err();
        assert!(matches!(err, ScriptError::Parse(_)));
    }
}
