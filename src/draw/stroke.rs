//! Stroke definitions for freehand drawing.

use super::color::Color;
use crate::input::Tool;
use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;

/// A surface coordinate in pixels, relative to the canvas origin.
pub type Point = (f64, f64);

/// Stroke width in whole pixels, always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct StrokeWidth(u8);

impl StrokeWidth {
    /// Thinnest selectable width.
    pub const MIN: u8 = 1;
    /// Thickest selectable width.
    pub const MAX: u8 = 10;
    /// Width selected when a canvas is first opened.
    pub const DEFAULT: StrokeWidth = StrokeWidth(5);

    /// Creates a width, clamping out-of-range values into `MIN..=MAX`.
    pub fn new(width: u32) -> Self {
        let clamped = width.clamp(u32::from(Self::MIN), u32::from(Self::MAX));
        Self(clamped as u8)
    }

    /// Returns the width in pixels.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the width as a Cairo line width.
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Every selectable width, thinnest first (the width menu).
    pub fn all() -> impl Iterator<Item = StrokeWidth> {
        (Self::MIN..=Self::MAX).map(StrokeWidth)
    }
}

impl Default for StrokeWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u32> for StrokeWidth {
    fn from(width: u32) -> Self {
        Self::new(width)
    }
}

impl From<StrokeWidth> for u32 {
    fn from(width: StrokeWidth) -> Self {
        u32::from(width.0)
    }
}

impl fmt::Display for StrokeWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One continuous pointer-down to pointer-up gesture.
///
/// Tool, color and width are fixed when the stroke is created. Only the point
/// list grows, and only while the stroke is the newest one in its sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Pen or eraser
    pub tool: Tool,
    /// Stroke color (ignored when erasing)
    pub color: Color,
    /// Line width in pixels
    pub width: StrokeWidth,
    /// Points in the order they were reported
    #[serde(deserialize_with = "non_empty_points")]
    points: Vec<Point>,
}

impl Stroke {
    /// Creates a stroke holding only its starting point.
    pub fn new(tool: Tool, color: Color, width: StrokeWidth, start: Point) -> Self {
        Self {
            tool,
            color,
            width,
            points: vec![start],
        }
    }

    /// Points traced by the gesture, oldest first. Never empty.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub(crate) fn push_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Returns true for strokes that subtract from the canvas.
    pub fn is_eraser(&self) -> bool {
        self.tool == Tool::Eraser
    }
}

fn non_empty_points<'de, D>(deserializer: D) -> Result<Vec<Point>, D::Error>
where
    D: Deserializer<'de>,
{
    let points = Vec::<Point>::deserialize(deserializer)?;
    if points.is_empty() {
        return Err(de::Error::invalid_length(0, &"at least one point"));
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;

    #[test]
    fn width_clamps_into_range() {
        assert_eq!(StrokeWidth::new(0).get(), 1);
        assert_eq!(StrokeWidth::new(7).get(), 7);
        assert_eq!(StrokeWidth::new(250).get(), 10);
        assert_eq!(StrokeWidth::default().get(), 5);
    }

    #[test]
    fn width_menu_lists_one_through_ten() {
        let widths: Vec<u8> = StrokeWidth::all().map(StrokeWidth::get).collect();
        assert_eq!(widths, (1..=10).collect::<Vec<u8>>());
    }

    #[test]
    fn width_deserializes_with_clamping() {
        let width: StrokeWidth = serde_json::from_str("42").unwrap();
        assert_eq!(width.get(), 10);
    }

    #[test]
    fn deserialized_stroke_needs_a_point() {
        let empty = r#"{"tool":"pen","color":{"r":0.0,"g":0.0,"b":0.0,"a":1.0},"width":5,"points":[]}"#;
        let err = serde_json::from_str::<Stroke>(empty).unwrap_err();
        assert!(err.to_string().contains("at least one point"));

        let dot = empty.replace("[]", "[[1.0,2.0]]");
        let stroke: Stroke = serde_json::from_str(&dot).unwrap();
        assert_eq!(stroke.points(), &[(1.0, 2.0)]);
    }

    #[test]
    fn new_stroke_has_single_point() {
        let stroke = Stroke::new(Tool::Pen, RED, StrokeWidth::new(3), (10.0, 10.0));
        assert_eq!(stroke.points(), &[(10.0, 10.0)]);
        assert!(!stroke.is_eraser());
    }
}
