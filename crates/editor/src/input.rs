// Chunk: docs/chunks/editor_shortcuts - Key and modifier types
//!
//! Keys and modifier sets used in keyboard shortcuts.
//!
//! These describe bindings independently of the platform; the shell turns
//! them into menu key equivalents.

/// Modifier keys that must be held for a shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift key
    pub shift: bool,
    /// Command key (Cmd/⌘)
    pub command: bool,
    /// Option key (Alt/⌥)
    pub option: bool,
    /// Control key (Ctrl/⌃)
    pub control: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        command: false,
        option: false,
        control: false,
    };

    pub const COMMAND: Modifiers = Modifiers {
        command: true,
        ..Modifiers::NONE
    };

    pub const COMMAND_SHIFT: Modifiers = Modifiers {
        shift: true,
        command: true,
        ..Modifiers::NONE
    };
}

/// Keys that take part in shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A character as the key produces it: letters lowercase, and shifted
    /// punctuation as its shifted glyph (`}` rather than Shift+`]`)
    Char(char),
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}
