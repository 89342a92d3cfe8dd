//! Typed access to the host's live item collections.
//!
//! Controllers never look items up by property name; the host hands them a
//! source at construction and the source is consulted on every event.

use crate::document::Document;
use crate::element::Element;

/// An ordered, live collection of navigable items.
pub trait ItemSource {
    fn items(&self, doc: &Document) -> Vec<String>;
}

/// An ordered, live collection of rows, each an ordered list of cells.
pub trait GridSource {
    fn rows(&self, doc: &Document) -> Vec<Vec<String>>;
}

impl<F> ItemSource for F
where
    F: Fn(&Document) -> Vec<String>,
{
    fn items(&self, doc: &Document) -> Vec<String> {
        self(doc)
    }
}

impl<F> GridSource for F
where
    F: Fn(&Document) -> Vec<Vec<String>>,
{
    fn rows(&self, doc: &Document) -> Vec<Vec<String>> {
        self(doc)
    }
}

/// Fixed list of IDs, filtered to those present in the document.
#[derive(Debug, Clone)]
pub struct Listed(pub Vec<String>);

impl ItemSource for Listed {
    fn items(&self, doc: &Document) -> Vec<String> {
        self.0.iter().filter(|id| doc.contains(id)).cloned().collect()
    }
}

/// The direct children of an element (`parent > *`).
#[derive(Debug, Clone)]
pub struct ChildrenOf(pub String);

impl ChildrenOf {
    pub fn new(parent: impl Into<String>) -> Self {
        Self(parent.into())
    }
}

impl ItemSource for ChildrenOf {
    fn items(&self, doc: &Document) -> Vec<String> {
        doc.get(&self.0)
            .map(|el| el.children.iter().map(|c| c.id.clone()).collect())
            .unwrap_or_default()
    }
}

/// Descendants of an element with a given tag, in tree order.
#[derive(Debug, Clone)]
pub struct TagWithin {
    pub root: String,
    pub tag: String,
}

impl TagWithin {
    pub fn new(root: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            tag: tag.into(),
        }
    }
}

impl ItemSource for TagWithin {
    fn items(&self, doc: &Document) -> Vec<String> {
        let mut result = Vec::new();
        if let Some(root) = doc.get(&self.root) {
            for child in &root.children {
                collect_tag_recursive(child, &self.tag, &mut result);
            }
        }
        result
    }
}

fn collect_tag_recursive(element: &Element, tag: &str, result: &mut Vec<String>) {
    if element.tag == tag {
        result.push(element.id.clone());
    }
    for child in &element.children {
        collect_tag_recursive(child, tag, result);
    }
}

/// Rows are the children of the grid element, cells the children of each
/// row (`grid > * > *`).
#[derive(Debug, Clone)]
pub struct RowsOf(pub String);

impl RowsOf {
    pub fn new(grid: impl Into<String>) -> Self {
        Self(grid.into())
    }
}

impl GridSource for RowsOf {
    fn rows(&self, doc: &Document) -> Vec<Vec<String>> {
        doc.get(&self.0)
            .map(|grid| {
                grid.children
                    .iter()
                    .map(|row| row.children.iter().map(|c| c.id.clone()).collect())
                    .collect()
            })
            .unwrap_or_default()
    }
}
