//! Component strings and their overrides.
//!
//! Components never read a global table directly; they take an
//! [`I18nProvider`]. Applications either own an [`I18nRegistry`] or use the
//! process-wide one through [`global`], with an explicit
//! [`init`]/[`localize`]/[`reset`] lifecycle.

use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

const DEFAULT_STRINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "actions",
        &[
            ("sort", "Sort"),
            ("expand", "Expand"),
            ("close", "Close"),
            ("resize", "Resize"),
        ],
    ),
    (
        "alert",
        &[
            ("closeButtonAriaLabel", "Close"),
            ("loading", "Loading"),
            ("info", "Info"),
            ("success", "Success"),
            ("warning", "Warning"),
            ("danger", "Error"),
        ],
    ),
    ("dropdown", &[("open", "Open")]),
    (
        "file",
        &[
            ("browse", "browse"),
            ("files", "files"),
            ("removeFile", "remove file"),
        ],
    ),
    (
        "modal",
        &[
            ("closeButtonAriaLabel", "Close modal"),
            ("contentStart", "Beginning of Modal Content"),
            ("contentBox", "Scrollable Modal Body"),
            ("contentEnd", "End of Modal Content"),
        ],
    ),
    (
        "navigation",
        &[
            ("navigationElement", "navigation"),
            ("navigationLabel", "navigation menu"),
            ("navigationAbridgedText", "View abridged menu"),
            ("navigationUnabridgedText", "View unabridged menu"),
        ],
    ),
    (
        "password",
        &[
            ("showButtonAriaLabel", "Show password"),
            ("hideButtonAriaLabel", "Hide password"),
        ],
    ),
    ("treeview", &[("loading", "Loading")]),
    ("grid", &[("resizeColumn", "Resize Column")]),
];

/// Strings grouped by component section (`actions`, `alert`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct I18nStrings {
    sections: HashMap<String, HashMap<String, String>>,
}

impl I18nStrings {
    /// An empty set, the starting point for partial overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in English strings.
    pub fn defaults() -> Self {
        let mut strings = Self::new();
        for (section, entries) in DEFAULT_STRINGS {
            for (key, value) in *entries {
                strings.insert(*section, *key, *value);
            }
        }
        strings
    }

    pub fn with(
        mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.insert(section, key, value);
        self
    }

    pub fn insert(
        &mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.sections
            .entry(section.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections.get(section)?.get(key).map(String::as_str)
    }

    pub fn section(&self, section: &str) -> Option<&HashMap<String, String>> {
        self.sections.get(section)
    }

    /// Overlay `overrides` key by key; keys it does not mention are kept.
    pub fn merge(&mut self, overrides: &I18nStrings) {
        for (section, entries) in &overrides.sections {
            let target = self.sections.entry(section.clone()).or_default();
            for (key, value) in entries {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Source of localized component strings.
pub trait I18nProvider {
    fn get(&self, section: &str, key: &str) -> Option<String>;

    /// The string, or an empty string when unknown.
    fn text(&self, section: &str, key: &str) -> String {
        self.get(section, key).unwrap_or_default()
    }
}

impl I18nProvider for I18nStrings {
    fn get(&self, section: &str, key: &str) -> Option<String> {
        I18nStrings::get(self, section, key).map(str::to_string)
    }
}

/// Defaults plus accumulated overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I18nRegistry {
    strings: I18nStrings,
}

impl Default for I18nRegistry {
    fn default() -> Self {
        Self {
            strings: I18nStrings::defaults(),
        }
    }
}

impl I18nRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strings(&self) -> &I18nStrings {
        &self.strings
    }

    /// Apply partial overrides on top of what is already registered.
    pub fn localize(&mut self, overrides: &I18nStrings) {
        self.strings.merge(overrides);
    }

    /// Drop every override.
    pub fn reset(&mut self) {
        self.strings = I18nStrings::defaults();
    }
}

impl I18nProvider for I18nRegistry {
    fn get(&self, section: &str, key: &str) -> Option<String> {
        self.strings.get(section, key).map(str::to_string)
    }
}

static GLOBAL: OnceLock<RwLock<I18nRegistry>> = OnceLock::new();

fn registry() -> &'static RwLock<I18nRegistry> {
    GLOBAL.get_or_init(|| RwLock::new(I18nRegistry::default()))
}

/// Create the process-wide registry with the default strings. Idempotent.
pub fn init() {
    registry();
}

/// Apply partial overrides to the process-wide registry.
pub fn localize(overrides: &I18nStrings) {
    if let Ok(mut guard) = registry().write() {
        guard.localize(overrides);
    } else {
        log::warn!("[i18n] registry lock poisoned, overrides dropped");
    }
}

/// Restore the process-wide registry to the defaults.
pub fn reset() {
    if let Ok(mut guard) = registry().write() {
        guard.reset();
    } else {
        log::warn!("[i18n] registry lock poisoned, reset skipped");
    }
}

/// Provider backed by the process-wide registry.
pub fn global() -> GlobalI18n {
    GlobalI18n
}

/// Handle to the process-wide registry. Reads see overrides applied after
/// the handle was created.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalI18n;

impl I18nProvider for GlobalI18n {
    fn get(&self, section: &str, key: &str) -> Option<String> {
        registry().read().ok()?.get(section, key)
    }
}
