//! Cell grid the renderer paints into.

use crate::types::{Rgb, TextStyle};

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: Rgb::WHITE,
            bg: Rgb::BLACK,
            style: TextStyle::new(),
        }
    }
}

/// A cell that differs between two frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Change<'a> {
    pub x: u16,
    pub y: u16,
    pub cell: &'a Cell,
}

/// Row-major grid of cells, blank on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); usize::from(width) * usize::from(height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.offset(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.offset(x, y).map(move |i| &mut self.cells[i])
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    /// Blank every cell, keeping the dimensions.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Cells of `self` that differ from `previous`, in row-major order.
    ///
    /// Buffers of different sizes are compared cell by cell up to the
    /// shorter one; callers resize both together.
    pub fn changes<'a>(&'a self, previous: &'a Buffer) -> impl Iterator<Item = Change<'a>> + 'a {
        let width = usize::from(self.width.max(1));
        self.cells
            .iter()
            .zip(&previous.cells)
            .enumerate()
            .filter(|(_, (now, before))| now != before)
            .map(move |(i, (cell, _))| Change {
                x: (i % width) as u16,
                y: (i / width) as u16,
                cell,
            })
    }

    /// The characters of one row, for inspection in tests and logs.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|cell| cell.char)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_is_none() {
        let mut buf = Buffer::new(3, 2);
        assert!(buf.get(3, 0).is_none());
        assert!(buf.get(0, 2).is_none());
        assert!(buf.get_mut(2, 1).is_some());
    }

    #[test]
    fn test_changes_report_positions() {
        let previous = Buffer::new(4, 2);
        let mut current = previous.clone();
        if let Some(cell) = current.get_mut(1, 1) {
            cell.char = 'x';
        }

        let changes: Vec<_> = current.changes(&previous).map(|c| (c.x, c.y, c.cell.char)).collect();
        assert_eq!(changes, vec![(1, 1, 'x')]);

        current.reset();
        assert_eq!(current, previous);
        assert_eq!(current.row_text(1), "    ");
    }
}
