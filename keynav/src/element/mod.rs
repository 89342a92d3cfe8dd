mod node;

pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in &root.children {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    for child in &mut root.children {
        if let Some(found) = find_element_mut(child, id) {
            return Some(found);
        }
    }

    None
}

/// IDs from the root down to (and including) the element, or None if absent.
pub fn path_to(root: &Element, id: &str) -> Option<Vec<String>> {
    let mut path = Vec::new();
    if path_to_recursive(root, id, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn path_to_recursive(element: &Element, id: &str, path: &mut Vec<String>) -> bool {
    path.push(element.id.clone());
    if element.id == id {
        return true;
    }
    for child in &element.children {
        if path_to_recursive(child, id, path) {
            return true;
        }
    }
    path.pop();
    false
}

/// Whether `id` is `ancestor` itself or one of its descendants.
pub fn is_inclusive_descendant(root: &Element, ancestor: &str, id: &str) -> bool {
    find_element(root, ancestor).is_some_and(|el| find_element(el, id).is_some())
}

/// The nearest element on the path from `id` up to the root that is in
/// `candidates`, the tree equivalent of `Element.closest()`.
pub fn closest<'a>(root: &Element, id: &str, candidates: &'a [String]) -> Option<&'a str> {
    let path = path_to(root, id)?;
    path.iter()
        .rev()
        .find_map(|p| candidates.iter().find(|c| *c == p))
        .map(String::as_str)
}
