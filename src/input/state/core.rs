//! Drawing state machine and input state management.

use crate::config::DrawingConfig;
use crate::draw::{Color, Stroke, StrokeSequence, StrokeWidth, color::BLACK};
use crate::input::{events::PointerKind, tool::Tool};
use serde::{Deserialize, Serialize};

/// Current drawing mode state machine.
///
/// `Idle → Drawing` on gesture start, `Drawing → Idle` on gesture end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingState {
    /// Not actively drawing - waiting for user input
    Idle,
    /// A gesture is in progress and moves extend the newest stroke
    Drawing {
        /// Device that started the gesture
        pointer: PointerKind,
    },
}

/// Tool settings applied to the next stroke.
///
/// A copy is taken when a stroke begins, so later changes only affect
/// strokes started afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToolState {
    pub tool: Tool,
    pub width: StrokeWidth,
    /// Pen color (unused by the eraser)
    pub color: Color,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            tool: Tool::Pen,
            width: StrokeWidth::DEFAULT,
            color: BLACK,
        }
    }
}

impl ToolState {
    /// Tool defaults taken from the `[drawing]` config section.
    pub fn from_config(config: &DrawingConfig) -> Self {
        Self {
            tool: config.default_tool,
            width: StrokeWidth::new(config.default_width),
            color: config.default_color.to_color(),
        }
    }
}

/// Main input state containing all drawing session state.
///
/// Holds the stroke sequence, tool settings and the drawing state machine.
/// Every mutation that changes what is on screen sets `needs_redraw`; the
/// owner of the [`Canvas`](crate::draw::Canvas) is expected to redraw and
/// clear the flag (see `Canvas::sync`).
#[derive(Debug)]
pub struct InputState {
    /// Strokes in draw order
    pub(crate) strokes: StrokeSequence,
    /// Settings copied into each new stroke
    pub(crate) tool_state: ToolState,
    /// Current drawing mode state machine
    pub state: DrawingState,
    /// Whether the canvas needs to be redrawn
    pub needs_redraw: bool,
    /// Maximum number of strokes kept on the canvas (0 = unlimited)
    pub max_strokes: usize,
}

impl Default for InputState {
    fn default() -> Self {
        Self::with_defaults(ToolState::default(), 0)
    }
}

impl InputState {
    /// Creates an idle session with an empty canvas.
    ///
    /// # Arguments
    /// * `tool_state` - Initial tool, width and pen color
    /// * `max_strokes` - Stroke cap, 0 for unlimited
    pub fn with_defaults(tool_state: ToolState, max_strokes: usize) -> Self {
        Self {
            strokes: StrokeSequence::new(),
            tool_state,
            state: DrawingState::Idle,
            needs_redraw: true,
            max_strokes,
        }
    }

    /// Creates a session from the `[drawing]` config section.
    pub fn from_config(config: &DrawingConfig) -> Self {
        Self::with_defaults(ToolState::from_config(config), config.max_strokes)
    }

    /// Strokes currently on the canvas, bottom first.
    pub fn strokes(&self) -> &[Stroke] {
        self.strokes.strokes()
    }

    pub fn stroke_sequence(&self) -> &StrokeSequence {
        &self.strokes
    }

    pub fn tool_state(&self) -> ToolState {
        self.tool_state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    /// Whether another stroke fits under `max_strokes`.
    pub(super) fn has_room_for_stroke(&self) -> bool {
        self.max_strokes == 0 || self.strokes.len() < self.max_strokes
    }
}
