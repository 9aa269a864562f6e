// Chunk: docs/chunks/tabbed_editor - Tabbed plain-text editor
//!
//! mesa-notepad library interface.
//!
//! Everything that decides what the editor does lives here and is free of
//! platform code: the tab workspace, document I/O, the unsaved-changes
//! confirmation flow and the command table. The AppKit shell in the binary
//! only displays this state and forwards user actions into it, so the whole
//! behaviour can be exercised from tests through
//! [`ScriptedDialogs`](dialogs::ScriptedDialogs).

pub mod config;
pub mod confirm_dialog;
pub mod dialogs;
pub mod document_io;
pub mod editor_state;
pub mod input;
pub mod shortcuts;
pub mod text_document;
pub mod workspace;
