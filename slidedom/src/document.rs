use crate::element::{collect_by_class, count_by_id, find_element, find_element_mut, Content, Element};
use crate::layout::{layout, LayoutResult, Rect};

/// An element tree bound to a viewport.
///
/// Geometry is never cached: [`Document::layout`] and
/// [`Document::bounding_rect`] lay the tree out again on every call, so reads
/// always reflect the latest class, offset and viewport mutations.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
    viewport: Rect,
}

impl Document {
    pub fn new(root: Element, width: f64, height: f64) -> Self {
        Self {
            root,
            viewport: Rect::from_size(width, height),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Change the viewport size (window resize).
    pub fn resize(&mut self, width: f64, height: f64) {
        log::debug!("[document] resize {}x{} -> {width}x{height}", self.viewport.width, self.viewport.height);
        self.viewport = Rect::from_size(width, height);
    }

    pub fn layout(&self) -> LayoutResult {
        layout(&self.root, self.viewport)
    }

    pub fn bounding_rect(&self, id: &str) -> Option<Rect> {
        self.layout().get(id).copied()
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn get_element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    /// How many elements carry `id`. Lookups by ID only see the first of
    /// them in document order, while layout keeps the last one's box.
    pub fn count_by_id(&self, id: &str) -> usize {
        count_by_id(&self.root, id)
    }

    /// IDs of descendants of `scope_id` carrying `class`, in document order.
    /// Empty when the scope does not exist.
    pub fn query_class(&self, scope_id: &str, class: &str) -> Vec<String> {
        self.get_element_by_id(scope_id)
            .map(|scope| collect_by_class(scope, class))
            .unwrap_or_default()
    }

    /// True if `id` is `ancestor_id` or one of its descendants.
    pub fn contains(&self, ancestor_id: &str, id: &str) -> bool {
        self.get_element_by_id(ancestor_id)
            .and_then(|ancestor| find_element(ancestor, id))
            .is_some()
    }

    // -------------------------------------------------------------------------
    // Class list
    // -------------------------------------------------------------------------

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.get_element_by_id(id)
            .map(|el| el.has_class(class))
            .unwrap_or(false)
    }

    pub fn add_class(&mut self, id: &str, class: &str) -> bool {
        self.get_element_by_id_mut(id)
            .map(|el| el.add_class(class))
            .unwrap_or(false)
    }

    pub fn remove_class(&mut self, id: &str, class: &str) -> bool {
        self.get_element_by_id_mut(id)
            .map(|el| el.remove_class(class))
            .unwrap_or(false)
    }

    pub fn toggle_class(&mut self, id: &str, class: &str, on: bool) -> bool {
        self.get_element_by_id_mut(id)
            .map(|el| el.toggle_class(class, on))
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Inline style
    // -------------------------------------------------------------------------

    /// Inline horizontal offset of an element.
    pub fn left(&self, id: &str) -> Option<f64> {
        self.get_element_by_id(id).map(|el| el.left)
    }

    /// Returns false if the element does not exist.
    pub fn set_left(&mut self, id: &str, left: f64) -> bool {
        match self.get_element_by_id_mut(id) {
            Some(el) => {
                el.left = left;
                true
            }
            None => false,
        }
    }

    /// Replace an element's content with text. Returns false if the element does not exist.
    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> bool {
        match self.get_element_by_id_mut(id) {
            Some(el) => {
                el.content = Content::Text(text.into());
                true
            }
            None => false,
        }
    }
}
