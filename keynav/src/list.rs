//! Keyboard navigation for one-dimensional collections (toolbars, tab
//! strips, menus). See <https://webaim.org/techniques/keyboard/>.

use crate::document::Document;
use crate::element::closest;
use crate::event::{Event, EventResult};
use crate::keycodes::{classify, Intent};
use crate::roving::{self, Management, Trigger};
use crate::source::ItemSource;
use crate::types::{Layout, TextDirection};

/// Items skipped by PageUp/PageDown in a list.
pub const DEFAULT_LIST_PAGE_STRIDE: usize = 4;

/// Configuration for [`KeyNavigationListController`].
///
/// Read fresh on every event, so the host may change it (e.g. the direction)
/// through [`KeyNavigationListController::config_mut`].
#[derive(Debug, Clone)]
pub struct KeyNavigationListConfig {
    /// Axis the items are laid out on.
    pub layout: Layout,
    /// Wrap from the last item to the first and back.
    pub wrap: bool,
    /// Move DOM focus into the active item.
    pub manage_focus: bool,
    /// Maintain the roving tabindex.
    pub manage_tabindex: bool,
    /// Direction override. None reads the host's `dir` attribute.
    pub dir: Option<TextDirection>,
    /// Items moved by PageUp/PageDown.
    pub page_stride: usize,
    /// Collection identifier reported in notifications.
    pub name: String,
}

impl Default for KeyNavigationListConfig {
    fn default() -> Self {
        Self {
            layout: Layout::Horizontal,
            wrap: false,
            manage_focus: true,
            manage_tabindex: true,
            dir: None,
            page_stride: DEFAULT_LIST_PAGE_STRIDE,
            name: "keyListItems".to_string(),
        }
    }
}

impl KeyNavigationListConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn manage_focus(mut self, manage: bool) -> Self {
        self.manage_focus = manage;
        self
    }

    pub fn manage_tabindex(mut self, manage: bool) -> Self {
        self.manage_tabindex = manage;
        self
    }

    pub fn dir(mut self, dir: TextDirection) -> Self {
        self.dir = Some(dir);
        self
    }

    pub fn page_stride(mut self, stride: usize) -> Self {
        self.page_stride = stride;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    fn management(&self) -> Management {
        Management {
            focus: self.manage_focus,
            tabindex: self.manage_tabindex,
        }
    }
}

/// Compute the index an intent moves to in a list of `len` items.
///
/// Returns None when the intent does not apply to the layout or the list is
/// empty. The returned index may equal `current` at a boundary.
pub fn next_list_index(
    current: usize,
    len: usize,
    intent: Intent,
    layout: Layout,
    wrap: bool,
    page_stride: usize,
) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if (intent.is_inline() && !layout.inline()) || (intent.is_block() && !layout.block()) {
        return None;
    }

    let last = len - 1;
    let current = current.min(last);
    let next = match intent {
        Intent::PrevInline | Intent::PrevBlock => {
            if wrap {
                (current + len - 1) % len
            } else {
                current.saturating_sub(1)
            }
        }
        Intent::NextInline | Intent::NextBlock => {
            if wrap {
                (current + 1) % len
            } else {
                (current + 1).min(last)
            }
        }
        Intent::RowHome | Intent::GridHome => 0,
        Intent::RowEnd | Intent::GridEnd => last,
        Intent::PageUp => current.saturating_sub(page_stride),
        Intent::PageDown => current.saturating_add(page_stride).min(last),
    };
    Some(next)
}

/// Roving-tabindex keyboard navigation over a list of items.
pub struct KeyNavigationListController<S: ItemSource> {
    host: String,
    source: S,
    config: KeyNavigationListConfig,
    active: Option<String>,
    initialized: bool,
}

impl<S: ItemSource> KeyNavigationListController<S> {
    pub fn new(host: impl Into<String>, source: S, config: KeyNavigationListConfig) -> Self {
        Self {
            host: host.into(),
            source,
            config,
            active: None,
            initialized: false,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn config(&self) -> &KeyNavigationListConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut KeyNavigationListConfig {
        &mut self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The live item collection.
    pub fn items(&self, doc: &Document) -> Vec<String> {
        self.source.items(doc)
    }

    /// Give the first item tabindex 0 and the rest -1.
    ///
    /// Idempotent: returns false and changes nothing once initialized, or
    /// while the collection is still empty.
    pub fn initialize(&mut self, doc: &mut Document) -> bool {
        if self.initialized {
            return false;
        }
        let items = self.items(doc);
        let Some(first) = items.first().cloned() else {
            log::trace!("[list] {} has no items yet", self.host);
            return false;
        };
        if self.config.manage_tabindex {
            roving::reset(doc, &items, &first);
        }
        self.active = Some(first);
        self.initialized = true;
        log::debug!("[list] {} initialized with {} items", self.host, items.len());
        true
    }

    /// Re-establish the roving tabindex after the item set changed. Keeps the
    /// active item if it survived, otherwise falls back to the first item.
    pub fn sync(&mut self, doc: &mut Document) {
        if !self.initialized {
            self.initialize(doc);
            return;
        }
        let items = self.items(doc);
        let active = self
            .active
            .clone()
            .filter(|a| items.contains(a))
            .or_else(|| items.first().cloned());
        if let Some(active) = &active {
            if self.config.manage_tabindex {
                roving::reset(doc, &items, active);
            }
        }
        self.active = active;
    }

    /// The active item: the tracked one if still present, else the item
    /// holding tabindex 0, else the first.
    pub fn active_item(&self, doc: &Document) -> Option<String> {
        let items = self.items(doc);
        self.active
            .clone()
            .filter(|a| items.contains(a))
            .or_else(|| roving::current(doc, &items))
            .or_else(|| items.first().cloned())
    }

    pub fn active_index(&self, doc: &Document) -> Option<usize> {
        let active = self.active_item(doc)?;
        self.items(doc).iter().position(|i| *i == active)
    }

    /// Make `item` active (pointer activation). Items outside the collection
    /// are ignored.
    pub fn activate(&mut self, doc: &mut Document, item: &str, trigger: Trigger) -> EventResult {
        let items = self.items(doc);
        if !items.iter().any(|i| i == item) {
            log::trace!("[list] {} ignoring activation of foreign {}", self.host, item);
            return EventResult::Ignored;
        }
        let previous = self.active_item(doc);
        self.set_active(doc, &items, item, previous.as_deref(), trigger);
        EventResult::Consumed
    }

    /// Apply a navigation intent from the item at `current`.
    pub fn navigate(
        &mut self,
        doc: &mut Document,
        intent: Intent,
        current: usize,
        trigger: Trigger,
    ) -> EventResult {
        let items = self.items(doc);
        let Some(next) = next_list_index(
            current,
            items.len(),
            intent,
            self.config.layout,
            self.config.wrap,
            self.config.page_stride,
        ) else {
            return EventResult::Ignored;
        };
        if next == current {
            return EventResult::Ignored;
        }
        let previous = items.get(current).cloned();
        let active = items[next].clone();
        self.set_active(doc, &items, &active, previous.as_deref(), trigger);
        EventResult::Consumed
    }

    /// Route a host event. Returns `Consumed` when the active item changed.
    pub fn handle_event(&mut self, doc: &mut Document, event: &Event) -> EventResult {
        if !doc.is_within(&self.host, event.target()) {
            return EventResult::Ignored;
        }
        if !self.initialized {
            self.initialize(doc);
        }

        match event {
            Event::Click { target, modifiers } => {
                let items = self.items(doc);
                let Some(item) = closest(doc.root(), target, &items).map(str::to_string) else {
                    return EventResult::Ignored;
                };
                let trigger = Trigger {
                    code: None,
                    meta_key: modifiers.command(),
                };
                self.activate(doc, &item, trigger)
            }
            Event::KeyDown {
                target,
                key,
                modifiers,
            } => {
                let dir = self.direction(doc);
                let Some(intent) = classify(*key, *modifiers, dir) else {
                    return EventResult::Ignored;
                };
                let items = self.items(doc);
                let Some(current) = closest(doc.root(), target, &items)
                    .and_then(|item| items.iter().position(|i| i == item))
                else {
                    log::trace!("[list] {} key target {} is not an item", self.host, target);
                    return EventResult::Ignored;
                };
                let trigger = Trigger {
                    code: Some(*key),
                    meta_key: modifiers.command(),
                };
                self.navigate(doc, intent, current, trigger)
            }
            Event::Mutation { .. } => {
                self.sync(doc);
                EventResult::Ignored
            }
            _ => EventResult::Ignored,
        }
    }

    fn direction(&self, doc: &Document) -> TextDirection {
        self.config.dir.unwrap_or_else(|| doc.direction(&self.host))
    }

    fn set_active(
        &mut self,
        doc: &mut Document,
        items: &[String],
        active: &str,
        previous: Option<&str>,
        trigger: Trigger,
    ) {
        roving::activate(
            doc,
            items,
            active,
            previous,
            self.config.management(),
            trigger,
            &self.config.name,
        );
        self.active = Some(active.to_string());
    }
}
