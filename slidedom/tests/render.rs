use slidedom::{
    render_to_buffer, Border, Buffer, Document, Element, Overflow, Rgb, Size, Style, StyleSheet,
    TextAlign,
};

const SLIDE_BG: Rgb = Rgb::new(30, 34, 48);
const ACTIVE_BG: Rgb = Rgb::new(60, 90, 160);

fn sheet() -> StyleSheet {
    StyleSheet::new()
        .rule(".slide", Style::new().background(SLIDE_BG))
        .rule(".slide.active", Style::new().background(ACTIVE_BG).bold())
}

fn render(doc: &Document, sheet: &StyleSheet, width: u16, height: u16) -> Buffer {
    let mut buf = Buffer::new(width, height);
    render_to_buffer(doc.root(), &doc.layout(), sheet, &mut buf);
    buf
}

// ============================================================================
// Style sheet
// ============================================================================

#[test]
fn test_compound_selector_requires_all_classes() {
    let sheet = sheet();
    let plain = Element::box_().class("slide");
    let active = Element::box_().class("slide").class("active");
    let stray = Element::box_().class("active");

    assert_eq!(sheet.computed(&plain).background, Some(SLIDE_BG));
    assert_eq!(sheet.computed(&active).background, Some(ACTIVE_BG));
    assert!(sheet.computed(&active).text_style.bold);
    assert_eq!(sheet.computed(&stray).background, None);
}

#[test]
fn test_inline_style_wins_over_rules() {
    let sheet = sheet();
    let el = Element::box_()
        .class("slide")
        .style(Style::new().background(Rgb::WHITE));

    assert_eq!(sheet.computed(&el).background, Some(Rgb::WHITE));
}

#[test]
fn test_empty_selector_is_ignored() {
    let sheet = StyleSheet::new().rule("..", Style::new().bold());
    assert!(sheet.is_empty());
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_active_class_changes_rendered_background() {
    let root = Element::row()
        .id("track")
        .child(Element::box_().id("a").class("slide").width(Size::Fixed(3.0)).height(Size::Fixed(1.0)))
        .child(Element::box_().id("b").class("slide").width(Size::Fixed(3.0)).height(Size::Fixed(1.0)));
    let mut doc = Document::new(root, 6.0, 1.0);
    let sheet = sheet();

    let buf = render(&doc, &sheet, 6, 1);
    assert_eq!(buf.get(4, 0).map(|c| c.bg), Some(SLIDE_BG));

    doc.add_class("b", "active");
    let buf = render(&doc, &sheet, 6, 1);
    assert_eq!(buf.get(1, 0).map(|c| c.bg), Some(SLIDE_BG));
    assert_eq!(buf.get(4, 0).map(|c| c.bg), Some(ACTIVE_BG));
}

#[test]
fn test_border_and_centered_text() {
    let root = Element::text("ab")
        .id("label")
        .width(Size::Fixed(6.0))
        .height(Size::Fixed(3.0))
        .text_align(TextAlign::Center)
        .style(Style::new().border(Border::Single));
    let doc = Document::new(root, 6.0, 3.0);

    let buf = render(&doc, &StyleSheet::new(), 6, 3);

    assert_eq!(buf.row_text(0), "┌────┐");
    assert_eq!(buf.row_text(1), "│ ab │");
    assert_eq!(buf.row_text(2), "└────┘");
}

#[test]
fn test_hidden_overflow_clips_offset_children() {
    let root = Element::row()
        .id("gallery")
        .width(Size::Fixed(4.0))
        .height(Size::Fixed(1.0))
        .overflow(Overflow::Hidden)
        .child(
            Element::row()
                .id("track")
                .left(-2.0)
                .child(Element::text("abcdefgh").id("strip")),
        );
    let doc = Document::new(root, 8.0, 1.0);

    let buf = render(&doc, &StyleSheet::new(), 8, 1);

    assert_eq!(buf.row_text(0), "cdef    ");
}
