//! Input handling and tool state machine.
//!
//! This module translates pointer and touch events into stroke operations.
//! It maintains the current tool state (tool, width, color) and the
//! idle/drawing state machine, and flags when the canvas must be redrawn.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{EventDisposition, GesturePhase, PointerEvent, PointerKind};
pub use state::{DrawingState, InputState, ToolInfo, ToolState};
pub use tool::Tool;
