use crossterm::event::{Event as CrosstermEvent, MouseEvent, MouseEventKind};

use crate::document::Document;
use crate::event::Event;
use crate::hit::hit_path;

/// Turns raw terminal input into targeted [`Event`]s.
///
/// Remembers which elements the pointer was over so that moving out of an
/// element produces a [`Event::PointerLeave`] for it, innermost first.
#[derive(Debug, Default)]
pub struct InputTranslator {
    hovered: Vec<String>,
}

impl InputTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elements currently under the pointer, outermost first.
    pub fn hovered(&self) -> &[String] {
        &self.hovered
    }

    /// Keys, focus and paste events are not translated.
    pub fn translate(&mut self, raw: &CrosstermEvent, doc: &Document) -> Vec<Event> {
        match raw {
            CrosstermEvent::Mouse(mouse) => self.translate_mouse(mouse, doc),
            CrosstermEvent::Resize(width, height) => vec![Event::Resize {
                width: f64::from(*width),
                height: f64::from(*height),
            }],
            _ => Vec::new(),
        }
    }

    fn translate_mouse(&mut self, mouse: &MouseEvent, doc: &Document) -> Vec<Event> {
        let x = f64::from(mouse.column);
        let y = f64::from(mouse.row);

        let layout = doc.layout();
        let path = hit_path(&layout, doc.root(), x, y);
        let target = path.last().cloned();

        let mut events: Vec<Event> = self
            .hovered
            .iter()
            .rev()
            .filter(|id| !path.contains(id))
            .map(|id| Event::PointerLeave { target: id.clone() })
            .collect();
        self.hovered = path;

        match mouse.kind {
            MouseEventKind::Down(button) => events.push(Event::PointerDown {
                target,
                x,
                y,
                button: button.into(),
            }),
            MouseEventKind::Up(button) => events.push(Event::PointerUp {
                target,
                x,
                y,
                button: button.into(),
            }),
            MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                events.push(Event::PointerMove { target, x, y })
            }
            _ => {}
        }

        events
    }
}
