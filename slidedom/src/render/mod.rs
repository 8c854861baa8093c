use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{content_box, LayoutResult, Rect};
use crate::text::{display_width, truncate_to_width};
use crate::types::{Border, Overflow, Rgb, Style, StyleSheet, TextAlign};

/// Cell-space rectangle, half-open on the right and bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Area {
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
}

impl Area {
    fn from_rect(rect: Rect) -> Self {
        Self {
            x0: rect.left().round() as i32,
            y0: rect.top().round() as i32,
            x1: rect.right().round() as i32,
            y1: rect.bottom().round() as i32,
        }
    }

    fn intersect(self, other: Area) -> Self {
        Self {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        }
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }

    fn is_empty(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }
}

pub fn render_to_buffer(root: &Element, layout: &LayoutResult, sheet: &StyleSheet, buf: &mut Buffer) {
    let clip = Area {
        x0: 0,
        y0: 0,
        x1: i32::from(buf.width()),
        y1: i32::from(buf.height()),
    };
    render_element(root, layout, sheet, clip, buf);
}

fn render_element(
    element: &Element,
    layout: &LayoutResult,
    sheet: &StyleSheet,
    clip: Area,
    buf: &mut Buffer,
) {
    let Some(rect) = layout.get(&element.id) else {
        return;
    };

    let area = Area::from_rect(*rect);
    let visible = area.intersect(clip);
    if visible.is_empty() && element.overflow == Overflow::Hidden {
        return;
    }

    let style = sheet.computed(element);

    if let Some(bg) = style.background {
        fill(buf, visible, bg);
    }

    render_border(&style, area, clip, buf);

    let border = element.style.border.size();
    let inner = content_box(element, *rect);

    match &element.content {
        Content::None => {}
        Content::Text(text) => render_text(text, element, &style, Area::from_rect(inner), clip, buf),
        Content::Children(children) => {
            let child_clip = match element.overflow {
                Overflow::Hidden => {
                    clip.intersect(Area::from_rect(rect.shrink(border, border, border, border)))
                }
                Overflow::Visible => clip,
            };
            for child in children {
                render_element(child, layout, sheet, child_clip, buf);
            }
        }
    }
}

fn put(buf: &mut Buffer, clip: Area, x: i32, y: i32, apply: impl FnOnce(&mut Cell)) {
    if !clip.contains(x, y) {
        return;
    }
    let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
        return;
    };
    if let Some(cell) = buf.get_mut(x, y) {
        apply(cell);
    }
}

fn fill(buf: &mut Buffer, area: Area, bg: Rgb) {
    for y in area.y0..area.y1 {
        for x in area.x0..area.x1 {
            put(buf, area, x, y, |cell| cell.bg = bg);
        }
    }
}

fn border_chars(border: Border) -> Option<[char; 6]> {
    // top-left, top-right, bottom-left, bottom-right, horizontal, vertical
    match border {
        Border::None => None,
        Border::Single => Some(['┌', '┐', '└', '┘', '─', '│']),
        Border::Rounded => Some(['╭', '╮', '╰', '╯', '─', '│']),
        Border::Thick => Some(['┏', '┓', '┗', '┛', '━', '┃']),
    }
}

fn render_border(style: &Style, area: Area, clip: Area, buf: &mut Buffer) {
    let Some([tl, tr, bl, br, h, v]) = border_chars(style.border) else {
        return;
    };
    if area.x1 - area.x0 < 2 || area.y1 - area.y0 < 2 {
        return;
    }

    let fg = style.foreground.unwrap_or(Rgb::WHITE);
    let mut draw = |x: i32, y: i32, ch: char| {
        put(buf, clip, x, y, |cell| {
            cell.char = ch;
            cell.fg = fg;
        })
    };

    let (right, bottom) = (area.x1 - 1, area.y1 - 1);
    for x in area.x0 + 1..right {
        draw(x, area.y0, h);
        draw(x, bottom, h);
    }
    for y in area.y0 + 1..bottom {
        draw(area.x0, y, v);
        draw(right, y, v);
    }
    draw(area.x0, area.y0, tl);
    draw(right, area.y0, tr);
    draw(area.x0, bottom, bl);
    draw(right, bottom, br);
}

fn render_text(text: &str, element: &Element, style: &Style, inner: Area, clip: Area, buf: &mut Buffer) {
    let fg = style.foreground.unwrap_or(Rgb::WHITE);
    let max_width = usize::try_from(inner.x1 - inner.x0).unwrap_or(0);

    for (row, line) in text.lines().enumerate() {
        let y = inner.y0 + row as i32;
        if y >= inner.y1 {
            break;
        }

        let line = truncate_to_width(line, max_width);
        let slack = max_width.saturating_sub(display_width(&line)) as i32;
        let mut x = inner.x0
            + match element.text_align {
                TextAlign::Left => 0,
                TextAlign::Center => slack / 2,
                TextAlign::Right => slack,
            };

        for ch in line.chars() {
            put(buf, clip, x, y, |cell| {
                cell.char = ch;
                cell.fg = fg;
                cell.style = style.text_style;
            });
            x += crate::text::char_width(ch).max(1) as i32;
        }
    }
}
