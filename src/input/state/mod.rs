mod actions;
mod core;
mod pointer;

pub use actions::ToolInfo;
pub use core::{DrawingState, InputState, ToolState};
