use std::fmt;
use std::str::FromStr;

/// Input events delivered by the host, targeted at element IDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press, targeted at the element that had focus (or the container
    /// the host dispatched it on).
    KeyDown {
        target: String,
        key: Key,
        modifiers: Modifiers,
    },
    /// Pointer click (press and release on the same element).
    Click { target: String, modifiers: Modifiers },
    /// Pointer button pressed.
    MouseDown { target: String, button: MouseButton },
    /// Pointer entered an element.
    MouseOver { target: String },
    /// Scroll inside an element.
    Scroll { target: String },
    /// The host changed attributes or children somewhere under `target`.
    Mutation { target: String },
}

impl Event {
    pub fn key(target: impl Into<String>, key: Key) -> Self {
        Self::KeyDown {
            target: target.into(),
            key,
            modifiers: Modifiers::new(),
        }
    }

    pub fn key_with(target: impl Into<String>, key: Key, modifiers: Modifiers) -> Self {
        Self::KeyDown {
            target: target.into(),
            key,
            modifiers,
        }
    }

    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: target.into(),
            modifiers: Modifiers::new(),
        }
    }

    pub fn mouse_down(target: impl Into<String>) -> Self {
        Self::MouseDown {
            target: target.into(),
            button: MouseButton::Left,
        }
    }

    pub fn mouse_over(target: impl Into<String>) -> Self {
        Self::MouseOver {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &str {
        match self {
            Self::KeyDown { target, .. }
            | Self::Click { target, .. }
            | Self::MouseDown { target, .. }
            | Self::MouseOver { target }
            | Self::Scroll { target }
            | Self::Mutation { target } => target,
        }
    }
}

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The event was handled; the host should suppress its default action.
    Consumed,
    /// The event was not handled.
    Ignored,
}

impl EventResult {
    pub fn is_consumed(self) -> bool {
        self == Self::Consumed
    }
}

/// Key identifier, named after DOM `KeyboardEvent.code` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Space,
    Backspace,
    Delete,
    Tab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
    /// Anything the host could not identify.
    Unidentified,
}

impl Key {
    /// The DOM `code` string for this key.
    pub fn code(&self) -> String {
        match self {
            Self::Char(c) if c.is_ascii_digit() => format!("Digit{c}"),
            Self::Char(c) => format!("Key{}", c.to_ascii_uppercase()),
            Self::Enter => "Enter".into(),
            Self::Space => "Space".into(),
            Self::Backspace => "Backspace".into(),
            Self::Delete => "Delete".into(),
            Self::Tab => "Tab".into(),
            Self::Escape => "Escape".into(),
            Self::Up => "ArrowUp".into(),
            Self::Down => "ArrowDown".into(),
            Self::Left => "ArrowLeft".into(),
            Self::Right => "ArrowRight".into(),
            Self::Home => "Home".into(),
            Self::End => "End".into(),
            Self::PageUp => "PageUp".into(),
            Self::PageDown => "PageDown".into(),
            Self::Insert => "Insert".into(),
            Self::F(n) => format!("F{n}"),
            Self::Unidentified => "Unidentified".into(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

/// Parses DOM `code` strings. Never fails: unknown codes map to
/// [`Key::Unidentified`].
impl FromStr for Key {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s {
            "ArrowUp" => Key::Up,
            "ArrowDown" => Key::Down,
            "ArrowLeft" => Key::Left,
            "ArrowRight" => Key::Right,
            "Home" => Key::Home,
            "End" => Key::End,
            "PageUp" => Key::PageUp,
            "PageDown" => Key::PageDown,
            "Enter" | "NumpadEnter" => Key::Enter,
            "Space" => Key::Space,
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            "Tab" => Key::Tab,
            "Escape" => Key::Escape,
            "Insert" => Key::Insert,
            _ => {
                if let Some(rest) = s.strip_prefix("Key").or_else(|| s.strip_prefix("Digit")) {
                    let mut chars = rest.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => Key::Char(c.to_ascii_lowercase()),
                        _ => Key::Unidentified,
                    }
                } else if let Some(n) = s.strip_prefix('F').and_then(|n| n.parse().ok()) {
                    Key::F(n)
                } else {
                    Key::Unidentified
                }
            }
        };
        Ok(key)
    }
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn meta() -> Self {
        Self {
            meta: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt && !self.meta
    }

    /// Ctrl on Linux/Windows, Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(' ') => Key::Space,
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab | KeyCode::BackTab => Key::Tab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Unidentified,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
            meta: mods.contains(KeyModifiers::SUPER) || mods.contains(KeyModifiers::META),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}

impl Event {
    /// Convert a crossterm key press into a `KeyDown` aimed at `target`.
    /// Returns None for release/repeat events.
    pub fn from_crossterm_key(
        target: impl Into<String>,
        key_event: &crossterm::event::KeyEvent,
    ) -> Option<Self> {
        if key_event.kind != crossterm::event::KeyEventKind::Press {
            return None;
        }
        Some(Self::KeyDown {
            target: target.into(),
            key: key_event.code.into(),
            modifiers: key_event.modifiers.into(),
        })
    }
}

/// Detail of the `keychange` notification dispatched after every change of
/// the active item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChange {
    pub active_item: String,
    pub previous_item: Option<String>,
    /// Key that triggered the change; None for pointer activation.
    pub code: Option<Key>,
    /// Ctrl or Meta held during the triggering event.
    pub meta_key: bool,
    /// Identifier of the collection that changed.
    pub key_list_items: String,
}
