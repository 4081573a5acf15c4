/// High-level input events with element targeting.
///
/// The host environment turns raw pointer and keyboard input into these and
/// hands them to the component layer. `target` is the id of the element the
/// event happened on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press on the focused element
    Key {
        target: String,
        key: Key,
        modifiers: Modifiers,
    },
    /// Pointer click
    Click {
        target: String,
        button: MouseButton,
        modifiers: Modifiers,
    },
    /// Pointer entered the element
    PointerEnter { target: String },
    /// Pointer left the element
    PointerLeave { target: String },
    /// Text value of an input changed
    Input { target: String, value: String },
    /// Element gained focus
    Focus { target: String },
    /// Element lost focus
    Blur { target: String },
}

impl Event {
    /// Left click without modifiers.
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: target.into(),
            button: MouseButton::Left,
            modifiers: Modifiers::new(),
        }
    }

    /// Left click with modifiers held.
    pub fn click_with(target: impl Into<String>, modifiers: Modifiers) -> Self {
        Self::Click {
            target: target.into(),
            button: MouseButton::Left,
            modifiers,
        }
    }

    pub fn key(target: impl Into<String>, key: Key) -> Self {
        Self::Key {
            target: target.into(),
            key,
            modifiers: Modifiers::new(),
        }
    }

    pub fn input(target: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Input {
            target: target.into(),
            value: value.into(),
        }
    }

    pub fn target(&self) -> &str {
        match self {
            Self::Key { target, .. }
            | Self::Click { target, .. }
            | Self::PointerEnter { target }
            | Self::PointerLeave { target }
            | Self::Input { target, .. }
            | Self::Focus { target }
            | Self::Blur { target } => target,
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` name.
    pub fn from_dom(name: &str) -> Option<Self> {
        let key = match name {
            "Enter" => Key::Enter,
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            "Tab" => Key::Tab,
            "Escape" | "Esc" => Key::Escape,
            "ArrowUp" => Key::Up,
            "ArrowDown" => Key::Down,
            "ArrowLeft" => Key::Left,
            "ArrowRight" => Key::Right,
            "Home" => Key::Home,
            "End" => Key::End,
            "PageUp" => Key::PageUp,
            "PageDown" => Key::PageDown,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => return None,
                }
            }
        };
        Some(key)
    }
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// Command key on macOS, Windows key elsewhere.
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

    pub fn alt() -> Self {
        Self {
            alt: true,
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
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}
