//! Ordered stroke storage.

use super::color::Color;
use super::stroke::{Point, Stroke, StrokeWidth};
use crate::input::Tool;
use serde::{Deserialize, Serialize};

/// All strokes on the canvas in draw order (first = bottom, last = top).
///
/// Only the newest stroke is ever extended. Every operation is a no-op rather
/// than an error when the sequence is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrokeSequence {
    strokes: Vec<Stroke>,
}

impl StrokeSequence {
    /// Creates an empty sequence.
    pub const fn new() -> Self {
        Self {
            strokes: Vec::new(),
        }
    }

    /// Appends a new stroke containing only `point`.
    pub fn begin_stroke(&mut self, tool: Tool, color: Color, width: StrokeWidth, point: Point) {
        self.strokes.push(Stroke::new(tool, color, width, point));
    }

    /// Appends `point` to the newest stroke. Does nothing when there are no strokes.
    pub fn extend_stroke(&mut self, point: Point) {
        if let Some(last) = self.strokes.last_mut() {
            last.push_point(point);
        }
    }

    /// Removes and returns the newest stroke, if any.
    pub fn undo(&mut self) -> Option<Stroke> {
        self.strokes.pop()
    }

    /// Removes every stroke.
    pub fn reset(&mut self) {
        self.strokes.clear();
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn last(&self) -> Option<&Stroke> {
        self.strokes.last()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED};

    fn pen(sequence: &mut StrokeSequence, point: Point) {
        sequence.begin_stroke(Tool::Pen, BLACK, StrokeWidth::DEFAULT, point);
    }

    #[test]
    fn extend_on_empty_sequence_is_noop() {
        let mut sequence = StrokeSequence::new();
        sequence.extend_stroke((1.0, 2.0));
        assert!(sequence.is_empty());
    }

    #[test]
    fn extend_only_touches_newest_stroke() {
        let mut sequence = StrokeSequence::new();
        pen(&mut sequence, (0.0, 0.0));
        sequence.extend_stroke((1.0, 1.0));
        sequence.begin_stroke(Tool::Eraser, RED, StrokeWidth::new(8), (5.0, 5.0));
        sequence.extend_stroke((6.0, 6.0));

        assert_eq!(sequence.strokes()[0].points(), &[(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(sequence.strokes()[1].points(), &[(5.0, 5.0), (6.0, 6.0)]);
    }

    #[test]
    fn undo_never_goes_below_empty() {
        let mut sequence = StrokeSequence::new();
        for i in 0..3 {
            pen(&mut sequence, (f64::from(i), 0.0));
        }

        for _ in 0..5 {
            sequence.undo();
        }
        assert_eq!(sequence.len(), 0);
        assert!(sequence.undo().is_none());
    }

    #[test]
    fn undo_removes_newest_first() {
        let mut sequence = StrokeSequence::new();
        pen(&mut sequence, (1.0, 1.0));
        pen(&mut sequence, (2.0, 2.0));

        let removed = sequence.undo().unwrap();
        assert_eq!(removed.points(), &[(2.0, 2.0)]);
        assert_eq!(sequence.last().unwrap().points(), &[(1.0, 1.0)]);
    }

    #[test]
    fn reset_empties_any_state() {
        let mut sequence = StrokeSequence::new();
        sequence.reset();
        assert!(sequence.is_empty());

        pen(&mut sequence, (1.0, 1.0));
        pen(&mut sequence, (2.0, 2.0));
        sequence.reset();
        assert!(sequence.is_empty());
    }
}
