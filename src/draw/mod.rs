//! Stroke model, rendering primitives and the drawable canvas (Cairo-based).
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color representation with hex conversion
//! - [`Stroke`]: One freehand gesture with its tool, color, width and points
//! - [`StrokeSequence`]: Ordered stroke storage with undo and reset
//! - [`Canvas`]: Transparent surface rebuilt from the stroke sequence
//! - Rendering functions for Cairo-based output

pub mod canvas;
pub mod color;
pub mod render;
pub mod sequence;
pub mod smooth;
pub mod stroke;

// Re-export commonly used types at module level
pub use canvas::{Canvas, pixel_alpha};
pub use color::{Color, ColorParseError};
pub use render::{render_stroke, render_strokes};
pub use sequence::StrokeSequence;
pub use smooth::{DEFAULT_TENSION, PathSegment, tension_path};
pub use stroke::{Point, Stroke, StrokeWidth};

pub use color::{BLACK, BLUE, GREEN, RED, WHITE, YELLOW};
