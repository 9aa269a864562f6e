// Chunk: docs/chunks/tabbed_editor - Command handlers for the editor window
// Chunk: docs/chunks/file_save - Save / Save As with error reporting
// Chunk: docs/chunks/unsaved_close_confirm - Save/Discard/Cancel before closing
//!
//! Editor state and command handlers.
//!
//! [`EditorState`] owns the tab [`Workspace`] and implements every command the
//! window shell exposes. Handlers that need the user (file pickers, the
//! unsaved-changes prompt, error alerts) go through a [`DialogHost`], so the
//! whole flow runs headless under test.
//!
//! Every handler runs to completion before the next event is processed. File
//! I/O is synchronous.
//!
//! # Outcomes
//!
//! Handlers report what happened rather than failing:
//! - a dismissed dialog is `Cancelled`, never an error
//! - an I/O failure is shown through [`DialogHost::notify_error`] and
//!   reported as `Failed`; it never leaves a tab half-updated

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::config::EditorConfig;
use crate::confirm_dialog::{CloseVerdict, ConfirmButton, ConfirmDialog};
use crate::dialogs::{DialogHost, TEXT_FILE_FILTERS};
use crate::document_io::{self, DocumentError};
use crate::shortcuts::Command;
use crate::workspace::{Tab, TabId, Workspace};

/// Title of the alert shown when a save fails.
const SAVE_ERROR_TITLE: &str = "Save Error";

/// Title of the alert shown when an open fails.
const OPEN_ERROR_TITLE: &str = "Open Error";

/// Result of a save or save-as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The text was written to this path
    Saved(PathBuf),
    /// The user dismissed the save picker
    Cancelled,
    /// The write failed; the user was notified
    Failed,
}

/// Result of opening a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// A new tab was created for the file
    Opened(TabId),
    /// The user dismissed the open picker
    Cancelled,
    /// Reading the file failed; the user was notified
    Failed,
}

/// Result of a close-tab request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The tab was removed
    Closed,
    /// The user kept the tab (Cancel, or a save that did not complete)
    Cancelled,
    /// Nothing to do: the index is out of range or it is the only tab
    Refused,
}

/// Direction for moving a tab within the tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Left,
    Right,
}

/// The state of the editor window.
#[derive(Debug)]
pub struct EditorState {
    /// The open tabs
    pub workspace: Workspace,
    /// Settings loaded at startup
    pub config: EditorConfig,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorState {
    /// Creates the editor with a single empty "Untitled" tab.
    pub fn new(config: EditorConfig) -> Self {
        Self {
            workspace: Workspace::new(),
            config,
        }
    }

    /// Returns true if any tab has unsaved changes.
    pub fn has_unsaved_changes(&self) -> bool {
        self.workspace.has_unsaved_changes()
    }

    /// Title of the editor window.
    pub fn window_title(&self) -> &str {
        &self.config.window_title
    }

    // =========================================================================
    // Command dispatch
    // =========================================================================

    /// Runs the handler bound to `command`.
    pub fn execute(&mut self, command: Command, host: &mut dyn DialogHost) {
        match command {
            Command::NewTab => {
                self.new_tab();
            }
            Command::Open => {
                self.open_file(host);
            }
            Command::Save => {
                self.save(host);
            }
            Command::SaveAs => {
                self.save_as(host);
            }
            Command::CloseTab => {
                self.close_active_tab(host);
            }
            Command::NextTab => self.next_tab(),
            Command::PrevTab => self.prev_tab(),
            Command::MoveTabLeft => self.move_active_tab(MoveDirection::Left),
            Command::MoveTabRight => self.move_active_tab(MoveDirection::Right),
        }
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Replaces the text of tab `id` with what the editing surface holds.
    ///
    /// Marks the tab dirty if the text changed. Returns `false` if no tab has
    /// that id or nothing changed.
    pub fn set_tab_text(&mut self, id: TabId, text: &str) -> bool {
        match self.workspace.tab_by_id_mut(id) {
            Some(tab) => tab.set_text(text),
            None => false,
        }
    }

    // =========================================================================
    // Tab lifecycle
    // =========================================================================

    /// Appends an empty "Untitled" tab, activates it, and returns its id.
    pub fn new_tab(&mut self) -> TabId {
        let id = self.workspace.new_tab();
        debug!(tab = id, "new tab");
        id
    }

    /// Switches to the tab at `index`. Out-of-range indices are ignored.
    pub fn switch_tab(&mut self, index: usize) {
        self.workspace.switch_tab(index);
    }

    /// Cycles to the next tab, wrapping from the last to the first.
    pub fn next_tab(&mut self) {
        let count = self.workspace.tab_count();
        if count > 1 {
            self.workspace
                .switch_tab((self.workspace.active_index() + 1) % count);
        }
    }

    /// Cycles to the previous tab, wrapping from the first to the last.
    pub fn prev_tab(&mut self) {
        let count = self.workspace.tab_count();
        if count > 1 {
            let active = self.workspace.active_index();
            let prev = if active == 0 { count - 1 } else { active - 1 };
            self.workspace.switch_tab(prev);
        }
    }

    /// Moves the active tab one position; does nothing at either end.
    pub fn move_active_tab(&mut self, direction: MoveDirection) {
        let from = self.workspace.active_index();
        let to = match direction {
            MoveDirection::Left => match from.checked_sub(1) {
                Some(to) => to,
                None => return,
            },
            MoveDirection::Right => from + 1,
        };
        if self.workspace.move_tab(from, to) {
            debug!(from, to, "moved tab");
        }
    }

    /// Closes the tab at `index`.
    ///
    /// Refused if the index is out of range or it is the only tab. A dirty
    /// tab is activated and the unsaved-changes prompt decides whether the
    /// close goes ahead.
    pub fn close_tab(&mut self, index: usize, host: &mut dyn DialogHost) -> CloseOutcome {
        if self.workspace.tab_count() <= 1 {
            return CloseOutcome::Refused;
        }
        let Some(tab) = self.workspace.tab(index) else {
            return CloseOutcome::Refused;
        };

        if tab.dirty {
            let dialog = ConfirmDialog::for_tab_close(tab.id, index);
            let verdict = self.confirm_close(dialog, host);
            if verdict == CloseVerdict::Abort {
                return CloseOutcome::Cancelled;
            }
        }

        match self.workspace.remove_tab(index) {
            Some(tab) => {
                debug!(tab = tab.id, "closed tab");
                CloseOutcome::Closed
            }
            None => CloseOutcome::Refused,
        }
    }

    /// Closes the active tab.
    pub fn close_active_tab(&mut self, host: &mut dyn DialogHost) -> CloseOutcome {
        self.close_tab(self.workspace.active_index(), host)
    }

    /// Asks about every dirty tab, in display order, before the window closes.
    ///
    /// Returns `false` as soon as one prompt resolves to Abort; tabs already
    /// answered keep whatever that answer did (a completed save stays saved,
    /// a discarded tab stays open with its edits). Returns `true` if the
    /// window may close.
    pub fn request_window_close(&mut self, host: &mut dyn DialogHost) -> bool {
        let ids: Vec<TabId> = self.workspace.tabs().iter().map(|tab| tab.id).collect();

        for id in ids {
            let Some(index) = self.workspace.index_of(id) else {
                continue;
            };
            if !self.workspace.tabs()[index].dirty {
                continue;
            }

            let dialog = ConfirmDialog::for_window_close(id, index);
            if self.confirm_close(dialog, host) == CloseVerdict::Abort {
                info!(tab = id, "window close cancelled");
                return false;
            }
        }
        true
    }

    /// Runs the unsaved-changes prompt for the tab `dialog` names.
    ///
    /// The tab is made active first so that Save acts on it.
    fn confirm_close(&mut self, dialog: ConfirmDialog, host: &mut dyn DialogHost) -> CloseVerdict {
        let id = dialog.tab;
        self.workspace.switch_tab(dialog.position);

        let button = host.confirm(&dialog);
        debug!(tab = id, ?button, "unsaved changes decision");

        let still_dirty = button == ConfirmButton::Save && {
            self.save(host);
            self.workspace.tab_by_id(id).is_some_and(|tab| tab.dirty)
        };

        CloseVerdict::from_decision(button, still_dirty)
    }

    // =========================================================================
    // Save / Open
    // =========================================================================

    /// Saves the active tab.
    ///
    /// A tab without an associated file is handled as [`Self::save_as`].
    /// On failure an error alert is shown and the tab stays dirty.
    pub fn save(&mut self, host: &mut dyn DialogHost) -> SaveOutcome {
        let tab = self.workspace.active_tab();
        let Some(path) = tab.associated_file.clone() else {
            return self.save_as(host);
        };

        match document_io::write_text(&path, tab.text()) {
            Ok(()) => {
                let tab = self.workspace.active_tab_mut();
                tab.mark_clean();
                info!(tab = tab.id, path = %path.display(), "saved");
                SaveOutcome::Saved(path)
            }
            Err(e) => {
                report_error(host, SAVE_ERROR_TITLE, format!("Failed to save file: {e}"), &e);
                SaveOutcome::Failed
            }
        }
    }

    /// Asks for a destination, associates it with the active tab, and saves.
    ///
    /// If the picker is dismissed nothing changes. Otherwise the tab is
    /// relabeled with the destination's base name before the write, and
    /// keeps that association even if the write then fails.
    pub fn save_as(&mut self, host: &mut dyn DialogHost) -> SaveOutcome {
        let suggested = self.workspace.active_tab().label.clone();
        let Some(path) = host.pick_save_path(&suggested, TEXT_FILE_FILTERS) else {
            return SaveOutcome::Cancelled;
        };

        self.workspace.active_tab_mut().associate_file(path);
        self.save(host)
    }

    /// Asks for a file and opens it in a new, clean tab.
    ///
    /// If reading fails an error alert is shown and no tab is created.
    pub fn open_file(&mut self, host: &mut dyn DialogHost) -> OpenOutcome {
        let Some(path) = host.pick_open_path(TEXT_FILE_FILTERS) else {
            return OpenOutcome::Cancelled;
        };

        match document_io::read_text(&path) {
            Ok(text) => {
                let id = self.workspace.gen_tab_id();
                info!(tab = id, path = %path.display(), "opened");
                self.workspace.add_tab(Tab::loaded(id, path, text));
                OpenOutcome::Opened(id)
            }
            Err(e) => {
                report_error(host, OPEN_ERROR_TITLE, e.to_string(), &e);
                OpenOutcome::Failed
            }
        }
    }
}

/// Logs a document error and shows it to the user.
fn report_error(host: &mut dyn DialogHost, title: &str, message: String, error: &DocumentError) {
    warn!(path = %error.path().display(), "{error}");
    host.notify_error(title, &message);
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogs::ScriptedDialogs;
    use std::fs;
    use tempfile::TempDir;

    fn editor_with_tabs(count: usize) -> EditorState {
        let mut state = EditorState::default();
        for _ in 1..count {
            state.new_tab();
        }
        state
    }

    #[test]
    fn test_starts_with_one_clean_untitled_tab() {
        let state = EditorState::default();
        assert_eq!(state.workspace.tab_count(), 1);
        let tab = state.workspace.active_tab();
        assert_eq!(tab.label, "Untitled");
        assert!(!tab.dirty);
        assert_eq!(tab.associated_file, None);
    }

    #[test]
    fn test_execute_new_tab() {
        let mut state = EditorState::default();
        let mut host = ScriptedDialogs::new();
        state.execute(Command::NewTab, &mut host);
        assert_eq!(state.workspace.tab_count(), 2);
        assert_eq!(state.workspace.active_index(), 1);
    }

    #[test]
    fn test_close_only_tab_is_refused() {
        let mut state = EditorState::default();
        let id = state.workspace.active_tab().id;
        state.set_tab_text(id, "unsaved");
        let mut host = ScriptedDialogs::new();

        assert_eq!(state.close_tab(0, &mut host), CloseOutcome::Refused);
        assert_eq!(state.workspace.tab_count(), 1);
        assert!(host.prompts.is_empty());
    }

    #[test]
    fn test_close_out_of_range_is_refused() {
        let mut state = editor_with_tabs(2);
        let mut host = ScriptedDialogs::new();
        assert_eq!(state.close_tab(5, &mut host), CloseOutcome::Refused);
        assert_eq!(state.workspace.tab_count(), 2);
    }

    #[test]
    fn test_close_clean_tab_skips_prompt() {
        let mut state = editor_with_tabs(2);
        let mut host = ScriptedDialogs::new();
        assert_eq!(state.close_tab(1, &mut host), CloseOutcome::Closed);
        assert_eq!(state.workspace.tab_count(), 1);
        assert!(host.prompts.is_empty());
    }

    #[test]
    fn test_confirm_activates_tab_being_closed() {
        let mut state = editor_with_tabs(3);
        let target = state.workspace.tab(1).unwrap().id;
        state.set_tab_text(target, "edited");
        state.switch_tab(2);

        let mut host = ScriptedDialogs::new();
        host.answer_confirm(ConfirmButton::Cancel);
        assert_eq!(state.close_tab(1, &mut host), CloseOutcome::Cancelled);
        assert_eq!(state.workspace.active_tab().id, target);
        assert_eq!(host.prompts[0], ConfirmDialog::for_tab_close(target, 1));
    }

    #[test]
    fn test_save_with_path_writes_directly() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("note.txt");
        fs::write(&path, "old").unwrap();

        let mut state = EditorState::default();
        state.workspace.active_tab_mut().associate_file(path.clone());
        let id = state.workspace.active_tab().id;
        state.set_tab_text(id, "new");

        let mut host = ScriptedDialogs::new();
        assert_eq!(state.save(&mut host), SaveOutcome::Saved(path.clone()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert!(!state.workspace.active_tab().dirty);
        assert!(host.save_suggestions.is_empty());
    }

    #[test]
    fn test_save_as_suggests_current_label() {
        let mut state = EditorState::default();
        let mut host = ScriptedDialogs::new();
        assert_eq!(state.save_as(&mut host), SaveOutcome::Cancelled);
        assert_eq!(host.save_suggestions, ["Untitled"]);
        assert_eq!(state.workspace.active_tab().associated_file, None);
    }

    #[test]
    fn test_next_and_prev_wrap() {
        let mut state = editor_with_tabs(3);
        assert_eq!(state.workspace.active_index(), 2);
        state.next_tab();
        assert_eq!(state.workspace.active_index(), 0);
        state.prev_tab();
        assert_eq!(state.workspace.active_index(), 2);
    }

    #[test]
    fn test_move_active_tab_stops_at_ends() {
        let mut state = editor_with_tabs(2);
        let active = state.workspace.active_tab().id;

        state.move_active_tab(MoveDirection::Right);
        assert_eq!(state.workspace.index_of(active), Some(1));

        state.move_active_tab(MoveDirection::Left);
        assert_eq!(state.workspace.index_of(active), Some(0));

        state.move_active_tab(MoveDirection::Left);
        assert_eq!(state.workspace.index_of(active), Some(0));
    }

    #[test]
    fn test_set_tab_text_unknown_id() {
        let mut state = EditorState::default();
        assert!(!state.set_tab_text(999, "text"));
    }

    #[test]
    fn test_window_close_with_clean_tabs_needs_no_prompt() {
        let mut state = editor_with_tabs(3);
        let mut host = ScriptedDialogs::new();
        assert!(state.request_window_close(&mut host));
        assert!(host.prompts.is_empty());
    }
}
