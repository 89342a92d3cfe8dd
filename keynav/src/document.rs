//! The host element tree that navigation controllers read and mutate.

use crate::element::{find_element, find_element_mut, is_inclusive_descendant, path_to, Element};
use crate::event::KeyChange;
use crate::types::TextDirection;

/// Name of the notification dispatched when the active item changes.
pub const KEY_CHANGE: &str = "keychange";

/// A bubbling notification recorded by the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatched {
    pub name: &'static str,
    pub target: String,
    /// Propagation path, target first, root last.
    pub path: Vec<String>,
    pub detail: KeyChange,
}

impl Dispatched {
    /// Whether a listener on `id` would see this notification.
    pub fn reaches(&self, id: &str) -> bool {
        self.path.iter().any(|p| p == id)
    }
}

/// Owns the element tree, DOM focus and the dispatched notifications.
#[derive(Debug)]
pub struct Document {
    root: Element,
    focused: Option<String>,
    dispatched: Vec<Dispatched>,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            focused: None,
            dispatched: Vec::new(),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Whether `id` is `ancestor` or lies beneath it.
    pub fn is_within(&self, ancestor: &str, id: &str) -> bool {
        is_inclusive_descendant(&self.root, ancestor, id)
    }

    // Attributes

    pub fn attribute(&self, id: &str, name: &str) -> Option<&str> {
        self.get(id)?.get_attribute(name)
    }

    /// Returns false if the element does not exist.
    pub fn set_attribute(&mut self, id: &str, name: &str, value: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(el) => {
                el.set_attribute(name, value);
                true
            }
            None => false,
        }
    }

    pub fn remove_attribute(&mut self, id: &str, name: &str) -> bool {
        self.get_mut(id).is_some_and(|el| el.remove_attribute(name))
    }

    pub fn tabindex(&self, id: &str) -> Option<i32> {
        self.get(id)?.get_tabindex()
    }

    // Custom properties

    pub fn style_property(&self, id: &str, name: &str) -> Option<&str> {
        self.get(id)?.style_property(name)
    }

    pub fn set_style_property(&mut self, id: &str, name: &str, value: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(el) => {
                el.set_style_property(name, value);
                true
            }
            None => false,
        }
    }

    pub fn remove_style_property(&mut self, id: &str, name: &str) -> bool {
        self.get_mut(id).is_some_and(|el| el.remove_style_property(name))
    }

    // Structure

    /// Append a child to `parent`. Returns false if the parent does not exist.
    pub fn append_child(&mut self, parent: &str, child: Element) -> bool {
        match self.get_mut(parent) {
            Some(el) => {
                el.children.push(child);
                true
            }
            None => false,
        }
    }

    /// Remove an element (and its subtree). The root cannot be removed.
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        let path = path_to(&self.root, id)?;
        let parent_id = path.get(path.len().checked_sub(2)?)?;
        let parent = find_element_mut(&mut self.root, parent_id)?;
        let pos = parent.children.iter().position(|c| c.id == id)?;
        let removed = parent.children.remove(pos);
        if self
            .focused
            .as_deref()
            .is_some_and(|f| find_element(&removed, f).is_some())
        {
            self.focused = None;
        }
        Some(removed)
    }

    // Focus

    /// Currently focused element ID.
    pub fn active_element(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Move DOM focus. Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) || !self.contains(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus. Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    // Direction

    /// Direction from the nearest `dir` attribute on the element or its
    /// ancestors. Unparsable values are skipped.
    pub fn direction(&self, id: &str) -> TextDirection {
        let Some(path) = path_to(&self.root, id) else {
            return TextDirection::default();
        };
        for ancestor in path.iter().rev() {
            let Some(value) = self.attribute(ancestor, "dir") else {
                continue;
            };
            match value.parse() {
                Ok(dir) => return dir,
                Err(e) => log::warn!("[document] ignoring dir on {}: {}", ancestor, e),
            }
        }
        TextDirection::default()
    }

    // Notifications

    /// Propagation path of an element, target first.
    pub fn propagation_path(&self, id: &str) -> Vec<String> {
        let mut path = path_to(&self.root, id).unwrap_or_default();
        path.reverse();
        path
    }

    /// Dispatch a bubbling `keychange` notification at `target`. Kept until
    /// drained with [`take_events`](Self::take_events).
    pub fn dispatch(&mut self, target: &str, detail: KeyChange) {
        let path = self.propagation_path(target);
        log::trace!("[document] dispatch {} at {} path={:?}", KEY_CHANGE, target, path);
        self.dispatched.push(Dispatched {
            name: KEY_CHANGE,
            target: target.to_string(),
            path,
            detail,
        });
    }

    /// Every notification dispatched since the last `take_events`.
    pub fn events(&self) -> &[Dispatched] {
        &self.dispatched
    }

    /// Notifications that bubbled through `id`.
    pub fn events_for<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Dispatched> + 'a {
        self.dispatched.iter().filter(move |d| d.reaches(id))
    }

    pub fn take_events(&mut self) -> Vec<Dispatched> {
        std::mem::take(&mut self.dispatched)
    }
}
