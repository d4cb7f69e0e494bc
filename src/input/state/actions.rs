use crate::draw::{Color, StrokeWidth};
use crate::input::tool::Tool;
use log::debug;
use std::fmt;

use super::{DrawingState, InputState};

/// Summary of the current tool settings for a status display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInfo {
    pub tool: Tool,
    pub width: StrokeWidth,
    /// Hex color, present only while the pen is selected
    pub color_hex: Option<String>,
}

impl fmt::Display for ToolInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tool: {} | Width: {}", self.tool, self.width)?;
        if let Some(hex) = &self.color_hex {
            write!(f, " | Color: {hex}")?;
        }
        Ok(())
    }
}

impl InputState {
    /// Selects the tool used by the next stroke.
    pub fn select_tool(&mut self, tool: Tool) {
        self.tool_state.tool = tool;
        debug!("Tool set to {tool}");
    }

    /// Sets the width used by the next stroke, clamped to 1-10.
    pub fn set_width(&mut self, width: u32) {
        self.tool_state.width = StrokeWidth::new(width);
        debug!("Stroke width set to {}", self.tool_state.width);
    }

    /// Sets the pen color used by the next stroke.
    pub fn set_color(&mut self, color: Color) {
        self.tool_state.color = color;
        debug!("Pen color set to {color}");
    }

    /// Removes the most recent stroke.
    ///
    /// Ends any gesture in progress so later moves cannot extend a stroke
    /// that was already finished.
    pub fn undo(&mut self) {
        self.state = DrawingState::Idle;
        if self.strokes.undo().is_some() {
            self.needs_redraw = true;
            debug!("Undo: {} strokes remain", self.strokes.len());
        }
    }

    /// Removes every stroke.
    pub fn reset(&mut self) {
        self.state = DrawingState::Idle;
        let removed = self.strokes.len();
        self.strokes.reset();
        self.needs_redraw = true;
        debug!("Reset canvas, removed {removed} strokes");
    }

    /// Current tool settings for display.
    pub fn tool_info(&self) -> ToolInfo {
        let tools = self.tool_state;
        ToolInfo {
            tool: tools.tool,
            width: tools.width,
            color_hex: (tools.tool == Tool::Pen).then(|| tools.color.to_hex()),
        }
    }
}
