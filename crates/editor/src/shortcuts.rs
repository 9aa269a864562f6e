// Chunk: docs/chunks/editor_shortcuts - Window commands and their key bindings
//!
//! Window commands and their keyboard shortcuts.
//!
//! [`Command`] lists every action the window shell can trigger. The shell
//! builds its menu from this table, so titles and key equivalents are
//! defined in one place and AppKit does the key matching.

use crate::input::{Key, Modifiers};

/// Actions the window shell can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Create a new empty tab (Cmd+N)
    NewTab,
    /// Open a file into a new tab (Cmd+O)
    Open,
    /// Save the active tab (Cmd+S)
    Save,
    /// Save the active tab to a new path (Cmd+Shift+S)
    SaveAs,
    /// Close the active tab (Cmd+W)
    CloseTab,
    /// Switch to the next tab (Cmd+})
    NextTab,
    /// Switch to the previous tab (Cmd+{)
    PrevTab,
    /// Move the active tab one position left (Cmd+Shift+Left)
    MoveTabLeft,
    /// Move the active tab one position right (Cmd+Shift+Right)
    MoveTabRight,
}

/// A key plus the modifiers that must be held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl Shortcut {
    const fn command(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::COMMAND,
        }
    }

    const fn command_shift(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::COMMAND_SHIFT,
        }
    }
}

impl Command {
    /// All commands, in menu order.
    pub const ALL: [Command; 9] = [
        Command::NewTab,
        Command::Open,
        Command::Save,
        Command::SaveAs,
        Command::CloseTab,
        Command::NextTab,
        Command::PrevTab,
        Command::MoveTabLeft,
        Command::MoveTabRight,
    ];

    /// The menu item title.
    pub fn menu_title(self) -> &'static str {
        match self {
            Command::NewTab => "New Tab",
            Command::Open => "Open…",
            Command::Save => "Save",
            Command::SaveAs => "Save As…",
            Command::CloseTab => "Close Tab",
            Command::NextTab => "Next Tab",
            Command::PrevTab => "Previous Tab",
            Command::MoveTabLeft => "Move Tab Left",
            Command::MoveTabRight => "Move Tab Right",
        }
    }

    /// The keyboard shortcut bound to this command.
    pub fn shortcut(self) -> Shortcut {
        match self {
            Command::NewTab => Shortcut::command(Key::Char('n')),
            Command::Open => Shortcut::command(Key::Char('o')),
            Command::Save => Shortcut::command(Key::Char('s')),
            Command::SaveAs => Shortcut::command_shift(Key::Char('s')),
            Command::CloseTab => Shortcut::command(Key::Char('w')),
            // Shift is implied by the glyph
            Command::NextTab => Shortcut::command(Key::Char('}')),
            Command::PrevTab => Shortcut::command(Key::Char('{')),
            Command::MoveTabLeft => Shortcut::command_shift(Key::Left),
            Command::MoveTabRight => Shortcut::command_shift(Key::Right),
        }
    }

    /// Whether a menu separator precedes this command.
    pub fn starts_menu_group(self) -> bool {
        matches!(self, Command::CloseTab | Command::NextTab)
    }
}
