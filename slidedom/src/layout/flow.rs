use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::{line_count, text_width};
use crate::types::{Direction, Size};

pub type LayoutResult = HashMap<String, Rect>;

/// Lay out the tree inside `available`.
///
/// Children flow along their parent's direction without wrapping. Overflowing
/// children keep their size and extend past the parent; clipping is a render
/// concern.
pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(element, available, &mut result);
    result
}

fn layout_element(element: &Element, slot: Rect, result: &mut LayoutResult) {
    let width = resolve_size(element.width, slot.width, element, true);
    let height = resolve_size(element.height, slot.height, element, false);

    // `left` is a relative offset: the slot (and therefore siblings) stay put
    let rect = Rect::new(slot.x + element.left, slot.y, width, height);
    result.insert(element.id.clone(), rect);

    layout_children(element, rect, result);
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };

    if children.is_empty() {
        return;
    }

    let inner = content_box(element, rect);
    let is_row = element.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };
    let gap_total = element.gap * children.len().saturating_sub(1) as f64;

    // First pass: everything that isn't Fill has a definite main size
    let mut fixed_total = 0.0;
    let mut fill_count = 0usize;
    for child in children {
        match main_axis(child, is_row) {
            Size::Fill => fill_count += 1,
            size => fixed_total += resolve_size(size, 0.0, child, is_row),
        }
    }

    let fill_size = if fill_count > 0 {
        ((main_size - fixed_total - gap_total) / fill_count as f64).max(0.0)
    } else {
        0.0
    };

    let mut cursor = if is_row { inner.x } else { inner.y };
    for child in children {
        let main = match main_axis(child, is_row) {
            Size::Fill => fill_size,
            size => resolve_size(size, 0.0, child, is_row),
        };

        let slot = if is_row {
            Rect::new(cursor, inner.y, main, inner.height)
        } else {
            Rect::new(inner.x, cursor, inner.width, main)
        };
        layout_element(child, slot, result);

        cursor += main + element.gap;
    }
}

fn main_axis(element: &Element, is_row: bool) -> Size {
    if is_row {
        element.width
    } else {
        element.height
    }
}

/// The box children are placed in: the element rect minus border and padding.
pub(crate) fn content_box(element: &Element, rect: Rect) -> Rect {
    let border = element.style.border.size();
    rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    )
}

fn resolve_size(size: Size, available: f64, element: &Element, horizontal: bool) -> f64 {
    match size {
        Size::Fixed(n) => n.max(0.0),
        Size::Fill => available.max(0.0),
        Size::Auto => intrinsic_size(element, horizontal),
    }
}

fn intrinsic_size(element: &Element, horizontal: bool) -> f64 {
    let border = element.style.border.size() * 2.0;
    let padding = if horizontal {
        element.padding.horizontal_total()
    } else {
        element.padding.vertical_total()
    };

    let content = match &element.content {
        Content::None => 0.0,
        Content::Text(text) => {
            if horizontal {
                text_width(text) as f64
            } else {
                line_count(text) as f64
            }
        }
        Content::Children(children) => {
            let along_main = (element.direction == Direction::Row) == horizontal;
            let sizes = children.iter().map(|child| {
                let size = if horizontal { child.width } else { child.height };
                match size {
                    // Fill has no intrinsic size of its own
                    Size::Fill => 0.0,
                    size => resolve_size(size, 0.0, child, horizontal),
                }
            });

            if along_main {
                let gaps = element.gap * children.len().saturating_sub(1) as f64;
                sizes.sum::<f64>() + gaps
            } else {
                sizes.fold(0.0, f64::max)
            }
        }
    };

    content + padding + border
}
