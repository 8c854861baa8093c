use slidedom::{Border, Edges, Element, Rect, Size, Style};

fn layout_root(root: &Element, width: f64, height: f64) -> std::collections::HashMap<String, Rect> {
    slidedom::layout::layout(root, Rect::new(0.0, 0.0, width, height))
}

// ============================================================================
// Sizing
// ============================================================================

#[test]
fn test_fixed_and_fill_sizes() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(Element::box_().id("fixed").width(Size::Fixed(40.0)).height(Size::Fixed(10.0)))
        .child(Element::box_().id("fill").width(Size::Fill).height(Size::Fill));

    let layout = layout_root(&root, 200.0, 100.0);

    assert_eq!(layout["root"], Rect::new(0.0, 0.0, 200.0, 100.0));
    assert_eq!(layout["fixed"], Rect::new(0.0, 0.0, 40.0, 10.0));
    assert_eq!(layout["fill"], Rect::new(0.0, 10.0, 200.0, 90.0));
}

#[test]
fn test_fill_children_share_remaining_space() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(100.0))
        .height(Size::Fixed(10.0))
        .child(Element::box_().id("a").width(Size::Fixed(20.0)))
        .child(Element::box_().id("b").width(Size::Fill))
        .child(Element::box_().id("c").width(Size::Fill));

    let layout = layout_root(&root, 500.0, 500.0);

    assert_eq!(layout["b"].x, 20.0);
    assert_eq!(layout["b"].width, 40.0);
    assert_eq!(layout["c"].x, 60.0);
    assert_eq!(layout["c"].width, 40.0);
}

#[test]
fn test_auto_row_is_sum_of_children_plus_gaps() {
    let root = Element::row()
        .id("track")
        .gap(10.0)
        .children((0..3).map(|i| {
            Element::box_()
                .id(format!("s{i}"))
                .width(Size::Fixed(100.0))
                .height(Size::Fixed(30.0))
        }));

    let layout = layout_root(&root, 120.0, 100.0);

    // Auto width ignores the available space and overflows it
    assert_eq!(layout["track"].width, 320.0);
    assert_eq!(layout["track"].height, 30.0);
    assert_eq!(layout["s0"].x, 0.0);
    assert_eq!(layout["s1"].x, 110.0);
    assert_eq!(layout["s2"].x, 220.0);
}

#[test]
fn test_auto_text_size() {
    let root = Element::col()
        .id("root")
        .child(Element::text("hello\nworld!").id("text"));

    let layout = layout_root(&root, 100.0, 100.0);

    assert_eq!(layout["text"].width, 6.0);
    assert_eq!(layout["text"].height, 2.0);
}

// ============================================================================
// Padding and borders
// ============================================================================

#[test]
fn test_padding_and_border_offset_children() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(100.0))
        .height(Size::Fixed(20.0))
        .padding(Edges::symmetric(1.0, 2.0))
        .style(Style::new().border(Border::Single))
        .child(Element::box_().id("child").width(Size::Fill).height(Size::Fill));

    let layout = layout_root(&root, 200.0, 200.0);

    assert_eq!(layout["child"], Rect::new(3.0, 2.0, 94.0, 16.0));
}

#[test]
fn test_auto_size_includes_padding_and_border() {
    let root = Element::text("abc")
        .id("label")
        .padding(Edges::all(1.0))
        .style(Style::new().border(Border::Rounded));

    let layout = layout_root(&root, 200.0, 200.0);

    assert_eq!(layout["label"].width, 7.0);
    assert_eq!(layout["label"].height, 5.0);
}

// ============================================================================
// Relative offset
// ============================================================================

#[test]
fn test_left_offset_moves_element_and_descendants() {
    let root = Element::row()
        .id("container")
        .width(Size::Fixed(300.0))
        .child(
            Element::row()
                .id("track")
                .left(-50.0)
                .child(Element::box_().id("s0").width(Size::Fixed(100.0)))
                .child(Element::box_().id("s1").width(Size::Fixed(100.0))),
        )
        .child(Element::box_().id("after").width(Size::Fixed(10.0)));

    let layout = layout_root(&root, 1000.0, 100.0);

    assert_eq!(layout["track"].x, -50.0);
    assert_eq!(layout["s0"].x, -50.0);
    assert_eq!(layout["s1"].x, 50.0);
    assert_eq!(layout["s1"].center_x(), 100.0);
    // Siblings are placed as if the offset were zero
    assert_eq!(layout["after"].x, 200.0);
}

#[test]
fn test_fractional_offsets_are_preserved() {
    let root = Element::row()
        .id("track")
        .left(12.5)
        .child(Element::box_().id("s0").width(Size::Fixed(33.3)));

    let layout = layout_root(&root, 100.0, 100.0);

    assert_eq!(layout["s0"].x, 12.5);
    assert_eq!(layout["s0"].width, 33.3);
}
