//! Key classification: raw keys to direction-independent navigation intents.
//!
//! Follows the WAI-ARIA grid keyboard model:
//! <https://www.w3.org/TR/wai-aria-practices/examples/grid/dataGrids.html#kbd_label>

use crate::event::{Key, Modifiers};
use crate::types::TextDirection;

/// Navigation command derived from a key, decoupled from key names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Towards the start of the line (left in LTR).
    PrevInline,
    /// Towards the end of the line (right in LTR).
    NextInline,
    /// Up.
    PrevBlock,
    /// Down.
    NextBlock,
    RowHome,
    RowEnd,
    GridHome,
    GridEnd,
    PageUp,
    PageDown,
}

impl Intent {
    pub fn is_inline(&self) -> bool {
        matches!(self, Self::PrevInline | Self::NextInline)
    }

    pub fn is_block(&self) -> bool {
        matches!(self, Self::PrevBlock | Self::NextBlock)
    }
}

/// Whether the key takes part in navigation at all.
pub fn is_navigation_key(key: Key) -> bool {
    matches!(
        key,
        Key::Up
            | Key::Down
            | Key::Left
            | Key::Right
            | Key::Home
            | Key::End
            | Key::PageUp
            | Key::PageDown
    )
}

/// Map a key press to a navigation intent.
///
/// Left/Right are mirrored under RTL; Up/Down are not. Ctrl or Meta
/// escalates Home/End from the row to the whole grid. Returns None for keys
/// that do not navigate.
pub fn classify(key: Key, modifiers: Modifiers, dir: TextDirection) -> Option<Intent> {
    let rtl = dir == TextDirection::Rtl;
    let intent = match key {
        Key::Left if rtl => Intent::NextInline,
        Key::Left => Intent::PrevInline,
        Key::Right if rtl => Intent::PrevInline,
        Key::Right => Intent::NextInline,
        Key::Up => Intent::PrevBlock,
        Key::Down => Intent::NextBlock,
        Key::Home if modifiers.command() => Intent::GridHome,
        Key::Home => Intent::RowHome,
        Key::End if modifiers.command() => Intent::GridEnd,
        Key::End => Intent::RowEnd,
        Key::PageUp => Intent::PageUp,
        Key::PageDown => Intent::PageDown,
        _ => return None,
    };
    Some(intent)
}
