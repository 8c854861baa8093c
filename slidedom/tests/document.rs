use slidedom::{Document, Element, Rect, Size};

fn gallery() -> Document {
    let root = Element::col()
        .id("page")
        .width(Size::Fill)
        .child(
            Element::row()
                .id("gallery")
                .class("gallery")
                .width(Size::Fill)
                .height(Size::Fixed(50.0))
                .child(
                    Element::row().id("track").class("inner").children((0..3).map(|i| {
                        Element::box_()
                            .id(format!("slide-{i}"))
                            .class("slide")
                            .width(Size::Fixed(100.0))
                            .child(Element::text(format!("Slide {i}")).id(format!("label-{i}")).class("slide-label"))
                    })),
                ),
        )
        .child(Element::box_().id("footer").class("slide"));
    Document::new(root, 400.0, 300.0)
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_query_class_is_scoped_and_ordered() {
    let doc = gallery();

    assert_eq!(doc.query_class("track", "slide"), vec!["slide-0", "slide-1", "slide-2"]);
    // The footer carries the class too but lives outside the scope
    assert_eq!(doc.query_class("page", "slide").len(), 4);
    assert!(doc.query_class("missing", "slide").is_empty());
}

#[test]
fn test_query_class_excludes_scope_itself() {
    let doc = gallery();

    assert!(doc.query_class("gallery", "gallery").is_empty());
    assert_eq!(doc.query_class("gallery", "inner"), vec!["track"]);
}

#[test]
fn test_count_by_id() {
    let doc = gallery();
    assert_eq!(doc.count_by_id("gallery"), 1);
    assert_eq!(doc.count_by_id("page"), 1);
    assert_eq!(doc.count_by_id("missing"), 0);

    let root = Element::col()
        .id("page")
        .child(Element::row().id("dup"))
        .child(Element::row().id("wrap").child(Element::box_().id("dup")));
    let doc = Document::new(root, 100.0, 100.0);
    assert_eq!(doc.count_by_id("dup"), 2);
}

#[test]
fn test_contains_is_inclusive() {
    let doc = gallery();

    assert!(doc.contains("gallery", "gallery"));
    assert!(doc.contains("gallery", "label-2"));
    assert!(!doc.contains("gallery", "footer"));
    assert!(!doc.contains("missing", "gallery"));
}

// ============================================================================
// Mutation
// ============================================================================

#[test]
fn test_class_mutation_by_id() {
    let mut doc = gallery();

    assert!(doc.add_class("slide-1", "active"));
    assert!(doc.has_class("slide-1", "active"));
    assert!(!doc.add_class("slide-1", "active"));

    assert!(doc.toggle_class("slide-1", "active", false));
    assert!(!doc.has_class("slide-1", "active"));

    assert!(!doc.remove_class("slide-1", "active"));
    assert!(!doc.add_class("missing", "active"));
}

#[test]
fn test_set_left_changes_geometry() {
    let mut doc = gallery();
    assert_eq!(doc.bounding_rect("slide-1").map(|r| r.x), Some(100.0));

    assert!(doc.set_left("track", -75.0));
    assert_eq!(doc.left("track"), Some(-75.0));
    assert_eq!(doc.bounding_rect("slide-1").map(|r| r.x), Some(25.0));
    assert_eq!(doc.bounding_rect("label-1").map(|r| r.x), Some(25.0));

    assert!(!doc.set_left("missing", 1.0));
    assert_eq!(doc.left("missing"), None);
}

#[test]
fn test_resize_changes_fill_geometry() {
    let mut doc = gallery();
    assert_eq!(doc.bounding_rect("gallery"), Some(Rect::new(0.0, 0.0, 400.0, 50.0)));

    doc.resize(640.0, 480.0);
    assert_eq!(doc.viewport(), Rect::from_size(640.0, 480.0));
    assert_eq!(doc.bounding_rect("gallery").map(|r| r.center_x()), Some(320.0));
}

#[test]
fn test_set_text() {
    let mut doc = gallery();

    assert!(doc.set_text("label-0", "First"));
    assert_eq!(doc.get_element_by_id("label-0").and_then(|el| el.text_content()), Some("First"));
    assert!(!doc.set_text("missing", "x"));
}
