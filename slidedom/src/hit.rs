use crate::element::{Content, Element};
use crate::layout::LayoutResult;

/// Find the deepest element (of any kind) at the given coordinates.
pub fn hit_test_any(layout: &LayoutResult, root: &Element, x: f64, y: f64) -> Option<String> {
    hit_path(layout, root, x, y).pop()
}

/// IDs of every element containing the point, from the root down to the
/// deepest one. Empty if the root does not contain the point.
///
/// A child is only reachable through a parent that also contains the point,
/// so content overflowing its parent is not hit outside the parent's box.
pub fn hit_path(layout: &LayoutResult, root: &Element, x: f64, y: f64) -> Vec<String> {
    let mut path = Vec::new();
    hit_path_recursive(layout, root, x, y, &mut path);
    path
}

fn hit_path_recursive(
    layout: &LayoutResult,
    element: &Element,
    x: f64,
    y: f64,
    path: &mut Vec<String>,
) -> bool {
    let Some(rect) = layout.get(&element.id) else {
        return false;
    };

    if !rect.contains(x, y) {
        return false;
    }

    path.push(element.id.clone());

    // Check children in reverse order (last rendered = on top)
    if let Content::Children(children) = &element.content {
        for child in children.iter().rev() {
            if hit_path_recursive(layout, child, x, y, path) {
                break;
            }
        }
    }

    true
}
