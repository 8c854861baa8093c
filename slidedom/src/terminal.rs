//! Raw-mode terminal output for a [`Document`].

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent};
use crossterm::style::{Attribute, Color, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};

use crate::buffer::{Buffer, Cell};
use crate::document::Document;
use crate::render::render_to_buffer;
use crate::text::char_width;
use crate::types::{Rgb, StyleSheet, TextStyle};

/// Owns the terminal while alive: raw mode, alternate screen and mouse
/// capture are switched on in [`Terminal::new`] and restored on drop.
///
/// Each cell is one layout unit. Frames are double-buffered and only the
/// cells that changed since the previous frame are written.
pub struct Terminal {
    out: Stdout,
    frame: Buffer,
    shown: Buffer,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        Ok(Self {
            out,
            frame: Buffer::new(width, height),
            shown: Buffer::new(width, height),
        })
    }

    /// Size of the last rendered frame in cells.
    pub fn size(&self) -> (u16, u16) {
        (self.frame.width(), self.frame.height())
    }

    /// Wait up to `timeout` (forever when `None`) for input, then drain
    /// everything already queued.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let ready = match timeout {
            Some(timeout) => event::poll(timeout)?,
            None => true,
        };
        if !ready {
            return Ok(Vec::new());
        }

        let mut events = vec![event::read()?];
        while event::poll(Duration::ZERO)? {
            events.push(event::read()?);
        }
        Ok(events)
    }

    /// Lay out and paint `doc`, writing only what changed on screen.
    pub fn render(&mut self, doc: &Document, sheet: &StyleSheet) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        if (width, height) != self.size() {
            log::debug!("terminal resized to {width}x{height}, repainting");
            self.frame = Buffer::new(width, height);
            self.shown = Buffer::new(width, height);
            queue!(self.out, terminal::Clear(terminal::ClearType::All))?;
        }

        self.frame.reset();
        render_to_buffer(doc.root(), &doc.layout(), sheet, &mut self.frame);
        self.flush()?;

        std::mem::swap(&mut self.frame, &mut self.shown);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut pen = Pen::default();
        queue!(self.out, SetAttribute(Attribute::Reset))?;

        // Where the cursor sits after the previous write
        let mut cursor: Option<(u16, u16)> = None;
        for change in self.frame.changes(&self.shown) {
            if cursor != Some((change.x, change.y)) {
                queue!(self.out, cursor::MoveTo(change.x, change.y))?;
            }
            pen.apply(&mut self.out, change.cell)?;
            write!(self.out, "{}", change.cell.char)?;

            let advance = char_width(change.cell.char).max(1) as u16;
            cursor = Some((change.x.saturating_add(advance), change.y));
        }

        queue!(self.out, SetAttribute(Attribute::Reset))?;
        self.out.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Attributes currently active on the terminal, so unchanged ones are not
/// re-sent for every cell.
#[derive(Debug, Default)]
struct Pen {
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    style: TextStyle,
}

impl Pen {
    fn apply(&mut self, out: &mut impl Write, cell: &Cell) -> io::Result<()> {
        if cell.style != self.style {
            // Attributes can only be cleared all at once, which also drops colours
            queue!(out, SetAttribute(Attribute::Reset))?;
            for (on, attribute) in [
                (cell.style.bold, Attribute::Bold),
                (cell.style.dim, Attribute::Dim),
                (cell.style.underline, Attribute::Underlined),
            ] {
                if on {
                    queue!(out, SetAttribute(attribute))?;
                }
            }
            *self = Self {
                style: cell.style,
                ..Self::default()
            };
        }

        if self.fg != Some(cell.fg) {
            queue!(out, SetForegroundColor(color(cell.fg)))?;
            self.fg = Some(cell.fg);
        }
        if self.bg != Some(cell.bg) {
            queue!(out, SetBackgroundColor(color(cell.bg)))?;
            self.bg = Some(cell.bg);
        }
        Ok(())
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pen_skips_unchanged_attributes() {
        let mut pen = Pen::default();
        let cell = Cell::default();

        let mut first: Vec<u8> = Vec::new();
        pen.apply(&mut first, &cell).unwrap();
        assert!(!first.is_empty());

        let mut second: Vec<u8> = Vec::new();
        pen.apply(&mut second, &cell).unwrap();
        assert!(second.is_empty());
    }

    #[test]
    fn test_pen_style_change_resends_colours() {
        let mut pen = Pen::default();
        pen.apply(&mut Vec::<u8>::new(), &Cell::default()).unwrap();

        let bold = Cell {
            style: TextStyle::new().bold(),
            ..Cell::default()
        };
        pen.apply(&mut Vec::<u8>::new(), &bold).unwrap();

        assert_eq!(pen.style, bold.style);
        assert_eq!(pen.fg, Some(bold.fg));
        assert_eq!(pen.bg, Some(bold.bg));
    }
}
