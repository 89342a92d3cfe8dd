use std::str::FromStr;

use crate::document::Document;
use crate::error::{Error, Result};
use crate::i18n::I18nProvider;

/// Axis along which an expandable region opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpandAxis {
    /// Opens sideways (e.g. a side panel).
    #[default]
    Cross,
    /// Opens downward (e.g. a tree node).
    Main,
}

impl FromStr for ExpandAxis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cross" => Ok(Self::Cross),
            "main" => Ok(Self::Main),
            _ => Err(Error::InvalidAxis(s.to_string())),
        }
    }
}

/// Attribute state for an expand/collapse action button.
#[derive(Debug, Clone)]
pub struct ExpandAction {
    id: String,
    expanded: bool,
    axis: ExpandAxis,
}

impl ExpandAction {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            expanded: false,
            axis: ExpandAxis::default(),
        }
    }

    pub fn axis(mut self, axis: ExpandAxis) -> Self {
        self.axis = axis;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    /// Direction the icon points in.
    pub fn icon_direction(&self) -> &'static str {
        match (self.axis, self.expanded) {
            (_, false) => "right",
            (ExpandAxis::Cross, true) => "left",
            (ExpandAxis::Main, true) => "down",
        }
    }

    /// Write `aria-label`, `aria-expanded` and the icon `direction` onto the
    /// element. Returns false if the element is missing.
    pub fn sync(&self, doc: &mut Document, strings: &impl I18nProvider) -> bool {
        let label = if self.expanded {
            strings.text("actions", "close")
        } else {
            strings.text("actions", "expand")
        };
        if !doc.set_attribute(&self.id, "aria-label", label) {
            return false;
        }
        doc.set_attribute(&self.id, "aria-expanded", self.expanded.to_string());
        doc.set_attribute(&self.id, "direction", self.icon_direction());
        true
    }
}
