//! Freehand drawing canvas.
//!
//! Pointer and touch events flow through [`input::InputState`] into an ordered
//! [`draw::StrokeSequence`]; a [`draw::Canvas`] re-renders the full sequence
//! after each change and [`export`] writes the result as `canvas.png`.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod script;

pub use config::Config;
