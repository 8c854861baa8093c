mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Number of elements in the tree whose ID is `id`, `root` included.
pub fn count_by_id(root: &Element, id: &str) -> usize {
    let own = usize::from(root.id == id);
    match &root.content {
        Content::Children(children) => {
            own + children
                .iter()
                .map(|child| count_by_id(child, id))
                .sum::<usize>()
        }
        _ => own,
    }
}

/// Collect the IDs of all descendants of `scope` carrying `class`, in document order.
/// The scope element itself is never included.
pub fn collect_by_class(scope: &Element, class: &str) -> Vec<String> {
    let mut result = Vec::new();
    if let Content::Children(children) = &scope.content {
        for child in children {
            collect_by_class_recursive(child, class, &mut result);
        }
    }
    result
}

fn collect_by_class_recursive(element: &Element, class: &str, result: &mut Vec<String>) {
    if element.has_class(class) {
        result.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_by_class_recursive(child, class, result);
        }
    }
}
