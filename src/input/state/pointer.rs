use crate::draw::Point;
use crate::input::events::{EventDisposition, GesturePhase, PointerEvent, PointerKind};
use log::{debug, warn};

use super::{DrawingState, InputState};

impl InputState {
    /// Routes a pointer event to the matching gesture handler.
    ///
    /// Returns what the host should do with the platform's default handling,
    /// which is suppressed for touch so the page doesn't scroll or zoom.
    pub fn handle_event(&mut self, event: PointerEvent) -> EventDisposition {
        let position = event.surface_position();
        match event.phase {
            GesturePhase::Start => self.on_pointer_down(event.kind, position),
            GesturePhase::Move => self.on_pointer_move(event.kind, position),
            GesturePhase::End => self.on_pointer_up(event.kind),
        }
        event.disposition()
    }

    /// Processes a button press or touch start.
    ///
    /// # Behavior
    /// - Missing position: ignored
    /// - Otherwise: starts a new stroke with a snapshot of the current tool
    ///   state and enters `Drawing`. A start while already drawing begins a
    ///   fresh stroke.
    pub fn on_pointer_down(&mut self, pointer: PointerKind, position: Option<Point>) {
        let Some(point) = position else {
            debug!("Ignoring {pointer:?} press without a surface position");
            return;
        };

        if !self.has_room_for_stroke() {
            warn!(
                "Stroke limit ({}) reached; ignoring new stroke",
                self.max_strokes
            );
            self.state = DrawingState::Idle;
            return;
        }

        let tools = self.tool_state;
        self.strokes.begin_stroke(tools.tool, tools.color, tools.width, point);
        self.state = DrawingState::Drawing { pointer };
        self.needs_redraw = true;
        debug!(
            "Started {} stroke #{} at ({:.1}, {:.1})",
            tools.tool,
            self.strokes.len(),
            point.0,
            point.1
        );
    }

    /// Processes pointer motion.
    ///
    /// # Behavior
    /// - When drawing: appends the point to the newest stroke
    /// - When idle or without a position: ignored
    pub fn on_pointer_move(&mut self, pointer: PointerKind, position: Option<Point>) {
        let DrawingState::Drawing { pointer: started_by } = self.state else {
            return;
        };
        if let Some(point) = position {
            if pointer != started_by {
                debug!("{pointer:?} move extends stroke started by {started_by:?}");
            }
            self.strokes.extend_stroke(point);
            self.needs_redraw = true;
        }
    }

    /// Processes a button release or touch end, returning to `Idle`.
    pub fn on_pointer_up(&mut self, pointer: PointerKind) {
        if self.is_drawing() {
            if let Some(stroke) = self.strokes.last() {
                debug!(
                    "Finished {} stroke with {} points ({pointer:?})",
                    stroke.tool,
                    stroke.points().len()
                );
            }
        }
        self.state = DrawingState::Idle;
    }
}
