//! Document and styles for the demo carousel.

use slidedom::{Border, Edges, Element, Overflow, Rgb, Size, Style, StyleSheet, TextAlign};
use slider::Slider;

pub const GALLERY_ID: &str = "gallery";
pub const STATUS_ID: &str = "status";

const SLIDE_WIDTH: f64 = 22.0;
const SLIDE_HEIGHT: f64 = 7.0;

const PALETTE: [&str; 6] = ["#e06c75", "#98c379", "#e5c07b", "#61afef", "#c678dd", "#56b6c2"];

pub fn document_root(count: usize) -> Element {
    Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .padding(Edges::symmetric(1.0, 2.0))
        .gap(1.0)
        .child(
            Element::text("Drag the slides with the mouse. ←/→ step, 1-9 jump, Home/End, q quits.")
                .id("title")
                .class("title"),
        )
        .child(
            Element::row()
                .id(GALLERY_ID)
                .class("gallery")
                .width(Size::Fill)
                .height(Size::Fixed(SLIDE_HEIGHT + 4.0))
                .padding(Edges::vertical(1.0))
                .overflow(Overflow::Hidden)
                .style(Style::new().border(Border::Rounded))
                .child(
                    Element::row()
                        .id("track")
                        .class("inner")
                        .gap(2.0)
                        .children((0..count).map(slide)),
                ),
        )
        .child(Element::text("").id(STATUS_ID).class("status"))
}

fn slide(index: usize) -> Element {
    let accent = PALETTE
        .get(index % PALETTE.len())
        .and_then(|hex| Rgb::from_hex(hex))
        .unwrap_or(Rgb::WHITE);

    Element::text(format!("\n\nSlide {}", index + 1))
        .id(format!("slide-{index}"))
        .class("slide")
        .width(Size::Fixed(SLIDE_WIDTH))
        .height(Size::Fixed(SLIDE_HEIGHT))
        .text_align(TextAlign::Center)
        .style(Style::new().border(Border::Single).foreground(accent))
}

pub fn style_sheet() -> StyleSheet {
    StyleSheet::new()
        .rule(".title", Style::new().foreground(Rgb::new(150, 150, 165)))
        .rule(".gallery", Style::new().foreground(Rgb::new(90, 90, 110)))
        .rule(".gallery.active", Style::new().foreground(Rgb::new(229, 192, 123)))
        .rule(".slide", Style::new().background(Rgb::new(30, 34, 48)))
        .rule(".slide.active", Style::new().background(Rgb::new(52, 61, 92)).bold())
        .rule(".status", Style::new().foreground(Rgb::new(150, 150, 165)).dim())
}

pub fn status_line(slider: &Slider) -> String {
    let position = slider
        .active_index()
        .map(|index| format!("slide {} of {}", index + 1, slider.slide_count()))
        .unwrap_or_else(|| "no slide selected".to_string());

    let state = if slider.is_engaged() { "dragging" } else { "idle" };
    format!("{position} · {state}")
}
