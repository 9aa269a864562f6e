// Chunk: docs/chunks/file_save - Integration test for editing and saving
//!
//! Integration tests for the edit / save / save-as flow.
//!
//! Each test drives an [`EditorState`] the way the window shell does: text
//! edits arrive through `set_tab_text`, commands through `execute`, and every
//! dialog answer is scripted with [`ScriptedDialogs`].

use std::fs;
use tempfile::TempDir;

use mesa_notepad::dialogs::ScriptedDialogs;
use mesa_notepad::editor_state::{EditorState, SaveOutcome};
use mesa_notepad::shortcuts::Command;

/// Types `text` into the active tab.
fn type_into_active(state: &mut EditorState, text: &str) {
    let id = state.workspace.active_tab().id;
    assert!(state.set_tab_text(id, text));
}

#[test]
fn test_startup_state() {
    let state = EditorState::default();
    assert_eq!(state.window_title(), "Mesa's Notepad");
    assert_eq!(state.workspace.tab_count(), 1);

    let tab = state.workspace.active_tab();
    assert_eq!(tab.label, "Untitled");
    assert_eq!(tab.text(), "");
    assert!(!tab.dirty);
    assert!(tab.associated_file.is_none());
}

#[test]
fn test_first_save_asks_for_path_and_relabels() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a.txt");

    let mut state = EditorState::default();
    let mut host = ScriptedDialogs::new();
    type_into_active(&mut state, "hello");
    assert!(state.workspace.active_tab().dirty);

    host.answer_save(Some(path.clone()));
    state.execute(Command::Save, &mut host);

    assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    let tab = state.workspace.active_tab();
    assert_eq!(tab.label, "a.txt");
    assert_eq!(tab.associated_file.as_deref(), Some(path.as_path()));
    assert!(!tab.dirty);
    assert_eq!(host.save_suggestions, vec!["Untitled".to_string()]);
    assert!(host.errors.is_empty());
}

#[test]
fn test_later_saves_reuse_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");

    let mut state = EditorState::default();
    let mut host = ScriptedDialogs::new();
    type_into_active(&mut state, "one");
    host.answer_save(Some(path.clone()));
    assert_eq!(state.save(&mut host), SaveOutcome::Saved(path.clone()));

    type_into_active(&mut state, "one\ntwo");
    assert_eq!(state.save(&mut host), SaveOutcome::Saved(path.clone()));

    // Only the first save opened a picker
    assert_eq!(host.save_suggestions.len(), 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo");
    assert!(!state.workspace.active_tab().dirty);
}

#[test]
fn test_dismissed_save_picker_changes_nothing() {
    let mut state = EditorState::default();
    let mut host = ScriptedDialogs::new();
    type_into_active(&mut state, "draft");

    host.answer_save(None);
    assert_eq!(state.save(&mut host), SaveOutcome::Cancelled);

    let tab = state.workspace.active_tab();
    assert_eq!(tab.label, "Untitled");
    assert!(tab.dirty);
    assert!(tab.associated_file.is_none());
    assert!(host.errors.is_empty());
}

#[test]
fn test_save_as_moves_to_a_new_path() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");

    let mut state = EditorState::default();
    let mut host = ScriptedDialogs::new();
    type_into_active(&mut state, "text");
    host.answer_save(Some(first.clone()));
    state.execute(Command::Save, &mut host);

    host.answer_save(Some(second.clone()));
    state.execute(Command::SaveAs, &mut host);

    assert_eq!(fs::read_to_string(&second).unwrap(), "text");
    let tab = state.workspace.active_tab();
    assert_eq!(tab.label, "second.txt");
    assert_eq!(tab.associated_file.as_deref(), Some(second.as_path()));
    assert_eq!(host.save_suggestions[1], "first.txt");
}

#[test]
fn test_failed_save_reports_error_and_stays_dirty() {
    let dir = TempDir::new().unwrap();
    let unwritable = dir.path().join("missing").join("a.txt");

    let mut state = EditorState::default();
    let mut host = ScriptedDialogs::new();
    type_into_active(&mut state, "hello");

    host.answer_save(Some(unwritable.clone()));
    assert_eq!(state.save(&mut host), SaveOutcome::Failed);

    let tab = state.workspace.active_tab();
    assert!(tab.dirty);
    // The chosen destination is kept even though the write failed
    assert_eq!(tab.label, "a.txt");
    assert_eq!(tab.associated_file.as_deref(), Some(unwritable.as_path()));

    assert_eq!(host.errors.len(), 1);
    assert_eq!(host.errors[0].title, "Save Error");
    assert!(host.errors[0].message.starts_with("Failed to save file: "));
}

#[test]
fn test_saving_one_tab_leaves_others_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("b.txt");

    let mut state = EditorState::default();
    let mut host = ScriptedDialogs::new();
    type_into_active(&mut state, "first tab");
    state.execute(Command::NewTab, &mut host);
    type_into_active(&mut state, "second tab");

    host.answer_save(Some(path.clone()));
    state.execute(Command::Save, &mut host);

    assert!(state.workspace.tabs()[0].dirty);
    assert_eq!(state.workspace.tabs()[0].label, "Untitled");
    assert!(!state.workspace.tabs()[1].dirty);
    assert_eq!(state.workspace.tabs()[1].label, "b.txt");
    assert!(state.has_unsaved_changes());
}

#[test]
fn test_path_follows_tab_after_reorder() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("moved.txt");

    let mut state = EditorState::default();
    let mut host = ScriptedDialogs::new();
    state.execute(Command::NewTab, &mut host);
    type_into_active(&mut state, "v1");
    host.answer_save(Some(path.clone()));
    state.execute(Command::Save, &mut host);

    state.execute(Command::MoveTabLeft, &mut host);
    assert_eq!(state.workspace.active_index(), 0);
    type_into_active(&mut state, "v2");
    state.execute(Command::Save, &mut host);

    assert_eq!(fs::read_to_string(&path).unwrap(), "v2");
    assert_eq!(state.workspace.tabs()[1].associated_file, None);
    assert!(host.is_exhausted());
}
