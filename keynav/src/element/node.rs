use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Tags that receive keyboard focus without an explicit `tabindex`.
const NATIVELY_FOCUSABLE: &[&str] = &["button", "input", "select", "textarea"];

#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,

    // Content
    pub text: Option<String>,
    pub children: Vec<Element>,

    // Attributes (`tabindex`, `dir`, `width`, `aria-*`, ...)
    pub attributes: HashMap<String, String>,
    /// Inline custom properties (`--c1`, `--c-grid`, ...).
    pub style: HashMap<String, String>,

    // Interaction
    /// Explicitly focusable, regardless of tag.
    pub focusable: bool,
    /// Disabled elements never take focus.
    pub disabled: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: "div".to_string(),
            text: None,
            children: Vec::new(),
            attributes: HashMap::new(),
            style: HashMap::new(),
            focusable: false,
            disabled: false,
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn section() -> Self {
        Self::new("section")
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self::new("button").text(label)
    }

    /// An anchor is only natively focusable when it carries an `href`.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::new("a").text(label).attr("href", href)
    }

    pub fn input(value: impl Into<String>) -> Self {
        Self::new("input").attr("value", value)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    // Attributes
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn tabindex(self, value: i32) -> Self {
        self.attr("tabindex", value.to_string())
    }

    // Interaction
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(new_children);
        self
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Returns true if the attribute was present.
    pub fn remove_attribute(&mut self, name: &str) -> bool {
        self.attributes.remove(name).is_some()
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Parsed `tabindex` attribute, if present and numeric.
    pub fn get_tabindex(&self) -> Option<i32> {
        self.get_attribute("tabindex")?.trim().parse().ok()
    }

    pub fn style_property(&self, name: &str) -> Option<&str> {
        self.style.get(name).map(String::as_str)
    }

    pub fn set_style_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.style.insert(name.into(), value.into());
    }

    pub fn remove_style_property(&mut self, name: &str) -> bool {
        self.style.remove(name).is_some()
    }

    /// Whether this element can receive keyboard focus.
    pub fn is_focusable(&self) -> bool {
        if self.disabled || self.has_attribute("hidden") {
            return false;
        }
        if self.focusable || self.has_attribute("tabindex") {
            return true;
        }
        match self.tag.as_str() {
            "a" => self.has_attribute("href"),
            tag => NATIVELY_FOCUSABLE.contains(&tag),
        }
    }
}
