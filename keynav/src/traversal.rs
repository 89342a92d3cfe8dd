use crate::element::Element;

/// Collect the focusable descendants of `element` in tree order.
///
/// The element itself is not included. Recomputed on every call so late
/// rendered or removed children are always reflected.
pub fn focusable_items(element: &Element) -> Vec<String> {
    let mut result = Vec::new();
    for child in &element.children {
        collect_focusable_recursive(child, &mut result);
    }
    result
}

fn collect_focusable_recursive(element: &Element, result: &mut Vec<String>) {
    // Hidden subtrees cannot take focus
    if element.has_attribute("hidden") {
        return;
    }
    if element.is_focusable() {
        result.push(element.id.clone());
    }
    for child in &element.children {
        collect_focusable_recursive(child, result);
    }
}

/// The element that should receive focus when `cell` becomes active: its
/// first focusable descendant, or the cell itself.
pub fn focus_target(cell: &Element) -> String {
    focusable_items(cell)
        .into_iter()
        .next()
        .unwrap_or_else(|| cell.id.clone())
}
