//! Gesture handling and listener registration.

use slidedom::{Document, Event, EventResult, Listener};

use crate::slider::Slider;

/// Gesture operations of a draggable widget.
///
/// The event dispatcher calls these through [`Listener`]; hosts with their
/// own input plumbing can call them directly. All methods default to
/// `EventResult::Ignored` so implementors only handle what they care about.
pub trait GestureHandler {
    /// Pointer or touch went down at horizontal position `x`.
    fn on_start(&self, _doc: &mut Document, _x: f64) -> EventResult {
        EventResult::Ignored
    }

    /// Pointer or touch moved to `x` while engaged.
    fn on_move(&self, _doc: &mut Document, _x: f64) -> EventResult {
        EventResult::Ignored
    }

    /// Pointer or touch was released, or the pointer left the widget.
    fn on_end(&self, _doc: &mut Document) -> EventResult {
        EventResult::Ignored
    }

    /// The window was resized.
    fn on_resize(&self, _doc: &mut Document) -> EventResult {
        EventResult::Ignored
    }
}

impl GestureHandler for Slider {
    /// Marks the container engaged and records the gesture baseline.
    fn on_start(&self, doc: &mut Document, x: f64) -> EventResult {
        self.start(doc, x)
    }

    /// Moves the track by the distance travelled since the last event and
    /// re-evaluates the active slide. Suppresses the default action.
    fn on_move(&self, doc: &mut Document, x: f64) -> EventResult {
        self.drag(doc, x)
    }

    /// Disengages; snaps when the active slide changed or sits at either end.
    fn on_end(&self, doc: &mut Document) -> EventResult {
        self.end(doc)
    }

    /// Keeps the active slide centred after a layout change.
    fn on_resize(&self, doc: &mut Document) -> EventResult {
        self.resize(doc)
    }
}

impl Listener for Slider {
    fn handle_event(&self, event: &Event, doc: &mut Document) -> EventResult {
        self.dispatch(event, doc)
    }
}
