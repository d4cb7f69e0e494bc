//! PNG export of the rendered canvas.
//!
//! The exporter only consumes pixels: it never touches the stroke sequence,
//! and always writes the same fixed file name.

pub mod file;
pub mod types;

pub use file::{encode_png, ensure_directory_exists, export_png};
pub use types::{EXPORT_FILE_NAME, ExportError, ExportOptions};
