// Chunk: docs/chunks/file_open_picker - Dialog host seam for pickers, prompts and alerts
//!
//! The modal dialogs the editor relies on.
//!
//! [`DialogHost`] is the humble object between editor logic and the platform:
//! file pickers, the unsaved-changes prompt and error alerts. Every call
//! blocks until the user answers. Cancellation is expressed as `None` from the
//! pickers and is never an error.
//!
//! [`ScriptedDialogs`] answers from queues filled in advance and records every
//! prompt and alert it was shown. It backs the headless tests and never opens
//! a window.

use std::collections::VecDeque;
use std::path::PathBuf;

use crate::confirm_dialog::{ConfirmButton, ConfirmDialog};

/// A file-type filter offered by the pickers.
///
/// Filters are cosmetic; they never restrict what can be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    /// Caption shown in the picker
    pub name: &'static str,
    /// Extensions without the dot; `"*"` matches everything
    pub extensions: &'static [&'static str],
}

/// Filters offered by both the open and save pickers.
pub const TEXT_FILE_FILTERS: &[FileFilter] = &[
    FileFilter {
        name: "Text Files (*.txt)",
        extensions: &["txt"],
    },
    FileFilter {
        name: "All Files (*.*)",
        extensions: &["*"],
    },
];

/// Blocking dialogs provided by the platform.
pub trait DialogHost {
    /// Asks for an existing file to open. `None` means the user cancelled.
    fn pick_open_path(&mut self, filters: &[FileFilter]) -> Option<PathBuf>;

    /// Asks for a destination to save to. `None` means the user cancelled.
    fn pick_save_path(&mut self, suggested_name: &str, filters: &[FileFilter]) -> Option<PathBuf>;

    /// Shows an unsaved-changes prompt and returns the button pressed.
    ///
    /// The decision about `dialog.tab` is pending for the duration of the
    /// call; the tab is already the active one when this is invoked.
    fn confirm(&mut self, dialog: &ConfirmDialog) -> ConfirmButton;

    /// Shows an error with a single acknowledgement button.
    fn notify_error(&mut self, title: &str, message: &str);
}

/// An error alert recorded by [`ScriptedDialogs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownError {
    pub title: String,
    pub message: String,
}

/// A [`DialogHost`] that replays queued answers.
///
/// Empty queues answer as if the user dismissed the dialog: pickers return
/// `None` and prompts return [`ConfirmButton::Cancel`].
#[derive(Debug, Default)]
pub struct ScriptedDialogs {
    open_paths: VecDeque<Option<PathBuf>>,
    save_paths: VecDeque<Option<PathBuf>>,
    decisions: VecDeque<ConfirmButton>,
    /// Every prompt shown, in order
    pub prompts: Vec<ConfirmDialog>,
    /// Every error alert shown, in order
    pub errors: Vec<ShownError>,
    /// Suggested names passed to the save picker, in order
    pub save_suggestions: Vec<String>,
}

impl ScriptedDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the answer for the next open picker.
    pub fn answer_open(&mut self, path: Option<PathBuf>) -> &mut Self {
        self.open_paths.push_back(path);
        self
    }

    /// Queues the answer for the next save picker.
    pub fn answer_save(&mut self, path: Option<PathBuf>) -> &mut Self {
        self.save_paths.push_back(path);
        self
    }

    /// Queues the answer for the next unsaved-changes prompt.
    pub fn answer_confirm(&mut self, button: ConfirmButton) -> &mut Self {
        self.decisions.push_back(button);
        self
    }

    /// Returns true if every queued answer was consumed.
    pub fn is_exhausted(&self) -> bool {
        self.open_paths.is_empty() && self.save_paths.is_empty() && self.decisions.is_empty()
    }
}

impl DialogHost for ScriptedDialogs {
    fn pick_open_path(&mut self, _filters: &[FileFilter]) -> Option<PathBuf> {
        self.open_paths.pop_front().flatten()
    }

    fn pick_save_path(&mut self, suggested_name: &str, _filters: &[FileFilter]) -> Option<PathBuf> {
        self.save_suggestions.push(suggested_name.to_string());
        self.save_paths.pop_front().flatten()
    }

    fn confirm(&mut self, dialog: &ConfirmDialog) -> ConfirmButton {
        self.prompts.push(dialog.clone());
        self.decisions.pop_front().unwrap_or(ConfirmButton::Cancel)
    }

    fn notify_error(&mut self, title: &str, message: &str) {
        self.errors.push(ShownError {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}
