//! Generic pointer event types shared by mouse and touch input.

use crate::draw::Point;
use serde::{Deserialize, Serialize};

/// Which kind of device produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    /// Mouse or pen tablet
    #[default]
    Mouse,
    /// Finger on a touch screen
    Touch,
}

/// Position of an event within its gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// Button pressed / finger down
    Start,
    /// Pointer moved
    Move,
    /// Button released / finger lifted
    End,
}

/// What the host should do with the platform's default handling of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    /// Let the platform handle the event as usual
    Default,
    /// Suppress scrolling, zooming and similar default gestures
    PreventDefault,
}

/// A raw pointer event as reported by the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub phase: GesturePhase,
    /// Position relative to the canvas origin, if the host could derive one
    pub position: Option<Point>,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, phase: GesturePhase, position: Option<Point>) -> Self {
        Self {
            kind,
            phase,
            position,
        }
    }

    /// Builds an event from client (window) coordinates and the canvas origin.
    pub fn from_client(
        kind: PointerKind,
        phase: GesturePhase,
        client: Option<Point>,
        surface_origin: Point,
    ) -> Self {
        let position = client.map(|(x, y)| (x - surface_origin.0, y - surface_origin.1));
        Self::new(kind, phase, position)
    }

    /// Canvas-relative position, or `None` when missing or not finite.
    ///
    /// Mouse and touch events go through this same extraction. Points outside
    /// the canvas bounds are kept.
    pub fn surface_position(&self) -> Option<Point> {
        self.position.filter(|(x, y)| x.is_finite() && y.is_finite())
    }

    /// Touch gestures must not scroll or zoom the page underneath the canvas.
    pub fn disposition(&self) -> EventDisposition {
        match self.kind {
            PointerKind::Touch => EventDisposition::PreventDefault,
            PointerKind::Mouse => EventDisposition::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_coordinates_are_made_relative() {
        let event = PointerEvent::from_client(
            PointerKind::Mouse,
            GesturePhase::Start,
            Some((110.0, 60.0)),
            (100.0, 50.0),
        );
        assert_eq!(event.surface_position(), Some((10.0, 10.0)));
    }

    #[test]
    fn non_finite_positions_are_missing() {
        let event = PointerEvent::new(PointerKind::Touch, GesturePhase::Move, Some((f64::NAN, 1.0)));
        assert_eq!(event.surface_position(), None);
    }

    #[test]
    fn only_touch_suppresses_default() {
        let touch = PointerEvent::new(PointerKind::Touch, GesturePhase::End, None);
        let mouse = PointerEvent::new(PointerKind::Mouse, GesturePhase::End, None);
        assert_eq!(touch.disposition(), EventDisposition::PreventDefault);
        assert_eq!(mouse.disposition(), EventDisposition::Default);
    }
}
