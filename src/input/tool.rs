//! Drawing tool selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Drawing tool selection.
///
/// The active tool is copied into each stroke when the gesture starts, so
/// changing tools never affects strokes already on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand drawing in the current pen color (default)
    #[default]
    Pen,
    /// Removes previously drawn pixels along the stroke path
    Eraser,
}

impl Tool {
    /// Lowercase identifier used in logs, scripts and the tool info line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::Pen => "pen",
            Tool::Eraser => "eraser",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
