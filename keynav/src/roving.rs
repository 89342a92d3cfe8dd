//! Roving tabindex: exactly one item of a composite widget is reachable with
//! Tab (`tabindex="0"`), every sibling has `tabindex="-1"`.

use crate::document::Document;
use crate::event::{Key, KeyChange};
use crate::traversal::focus_target;

/// Which side effects a controller owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Management {
    pub focus: bool,
    pub tabindex: bool,
}

/// What caused the active item to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Trigger {
    pub code: Option<Key>,
    pub meta_key: bool,
}

/// Give `active` tabindex 0 and every other item -1.
pub fn reset(doc: &mut Document, items: &[String], active: &str) {
    for item in items {
        let value = if item == active { "0" } else { "-1" };
        doc.set_attribute(item, "tabindex", value);
    }
}

/// The item currently holding tabindex 0, if any.
pub fn current(doc: &Document, items: &[String]) -> Option<String> {
    items.iter().find(|i| doc.tabindex(i) == Some(0)).cloned()
}

/// Make `active` the active item.
///
/// Order of effects: tabindex swap, focus move, then the bubbling
/// `keychange` notification at `active`.
pub fn activate(
    doc: &mut Document,
    items: &[String],
    active: &str,
    previous: Option<&str>,
    management: Management,
    trigger: Trigger,
    collection: &str,
) {
    // Cells rendered since the last reset have no tabindex yet
    if management.tabindex {
        reset(doc, items, active);
    }

    if management.focus {
        if let Some(target) = doc.get(active).map(focus_target) {
            doc.focus(&target);
        }
    }

    log::debug!(
        "[roving] {} active={} previous={:?} code={:?}",
        collection, active, previous, trigger.code
    );

    doc.dispatch(
        active,
        KeyChange {
            active_item: active.to_string(),
            previous_item: previous.map(str::to_string),
            code: trigger.code,
            meta_key: trigger.meta_key,
            key_list_items: collection.to_string(),
        },
    );
}
