//! Listener registration and event dispatch.
//!
//! Widgets implement [`Listener`] and are registered explicitly with a
//! [`Dispatcher`]. Every registered listener sees every event, in registration
//! order; each decides for itself whether the event concerns it.

use crate::document::Document;
use crate::event::Event;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored.
    Ignored,
    /// Event was handled; the host's default action still applies.
    Handled,
    /// Event started a drag operation on this listener.
    StartDrag,
    /// Event was handled and its default action (scrolling, text
    /// selection) must be suppressed.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled in any way.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }

    pub fn prevents_default(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// Something that reacts to events delivered by a [`Dispatcher`].
pub trait Listener {
    fn handle_event(&self, event: &Event, doc: &mut Document) -> EventResult;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

/// Outcome of delivering one event to all listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dispatch {
    /// Number of listeners that handled the event.
    pub handled: usize,
    pub default_prevented: bool,
}

#[derive(Default)]
pub struct Dispatcher {
    next_id: usize,
    listeners: Vec<(ListenerId, Box<dyn Listener>)>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, listener: impl Listener + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        log::debug!("[dispatch] registered {id}");
        id
    }

    /// Returns false if the listener was not registered.
    pub fn unregister(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver `event` to every listener, to completion, in registration order.
    pub fn dispatch(&self, event: &Event, doc: &mut Document) -> Dispatch {
        let mut outcome = Dispatch::default();
        for (_, listener) in &self.listeners {
            let result = listener.handle_event(event, doc);
            if result.is_handled() {
                outcome.handled += 1;
            }
            outcome.default_prevented |= result.prevents_default();
        }
        log::trace!("[dispatch] {event:?} -> {outcome:?}");
        outcome
    }
}
