// Chunk: docs/chunks/unsaved_close_confirm - Integration test for close confirmation
//!
//! Integration tests for the unsaved-changes prompt.
//!
//! Covers closing a single tab (Cmd+W) and closing the whole window, with
//! every answer the prompt offers: Save, Discard and Cancel.

use std::fs;
use tempfile::TempDir;

use mesa_notepad::confirm_dialog::{ConfirmButton, UNSAVED_CHANGES_TITLE};
use mesa_notepad::dialogs::ScriptedDialogs;
use mesa_notepad::editor_state::{CloseOutcome, EditorState};
use mesa_notepad::shortcuts::Command;

/// Two tabs; the second (active) one holds unsaved text.
fn editor_with_dirty_second_tab() -> EditorState {
    let mut state = EditorState::default();
    let id = state.new_tab();
    state.set_tab_text(id, "unsaved");
    state
}

#[test]
fn test_closing_the_sole_tab_does_nothing() {
    let mut state = EditorState::default();
    let mut host = ScriptedDialogs::new();
    let id = state.workspace.active_tab().id;
    state.set_tab_text(id, "dirty");

    state.execute(Command::CloseTab, &mut host);

    assert_eq!(state.workspace.tab_count(), 1);
    assert_eq!(state.workspace.active_tab().id, id);
    assert!(host.prompts.is_empty());
}

#[test]
fn test_closing_background_tab_keeps_active_tab() {
    let mut state = EditorState::default();
    let mut host = ScriptedDialogs::new();
    state.new_tab();
    let active = state.new_tab();

    assert_eq!(state.close_tab(0, &mut host), CloseOutcome::Closed);
    assert_eq!(state.workspace.tab_count(), 2);
    assert_eq!(state.workspace.active_tab().id, active);
}

#[test]
fn test_clean_tab_closes_without_prompt() {
    let mut state = EditorState::default();
    let mut host = ScriptedDialogs::new();
    state.new_tab();

    assert_eq!(state.close_active_tab(&mut host), CloseOutcome::Closed);
    assert_eq!(state.workspace.tab_count(), 1);
    assert!(host.prompts.is_empty());
}

#[test]
fn test_cancel_keeps_tab_open() {
    let mut state = editor_with_dirty_second_tab();
    let mut host = ScriptedDialogs::new();
    host.answer_confirm(ConfirmButton::Cancel);

    assert_eq!(state.close_active_tab(&mut host), CloseOutcome::Cancelled);

    assert_eq!(state.workspace.tab_count(), 2);
    assert_eq!(state.workspace.active_tab().text(), "unsaved");
    assert!(state.workspace.active_tab().dirty);

    let prompt = &host.prompts[0];
    assert_eq!(prompt.title, UNSAVED_CHANGES_TITLE);
    assert_eq!(prompt.prompt, "You have unsaved changes. Save before closing?");
    assert_eq!(prompt.default_button, ConfirmButton::Save);
    assert_eq!(prompt.tab, state.workspace.active_tab().id);
    assert_eq!(prompt.position, 1);
}

#[test]
fn test_prompt_names_the_background_tab_being_closed() {
    let mut state = EditorState::default();
    let first = state.workspace.active_tab().id;
    state.set_tab_text(first, "edited");
    let second = state.new_tab();
    assert_eq!(state.workspace.active_tab().id, second);

    let mut host = ScriptedDialogs::new();
    host.answer_confirm(ConfirmButton::Cancel);
    assert_eq!(state.close_tab(0, &mut host), CloseOutcome::Cancelled);

    // The decision was pending for the first tab, which was brought forward
    assert_eq!(host.prompts.len(), 1);
    assert_eq!(host.prompts[0].tab, first);
    assert_eq!(host.prompts[0].position, 0);
    assert_eq!(state.workspace.active_tab().id, first);
}

#[test]
fn test_discard_closes_without_writing() {
    let mut state = editor_with_dirty_second_tab();
    let mut host = ScriptedDialogs::new();
    host.answer_confirm(ConfirmButton::Discard);

    assert_eq!(state.close_active_tab(&mut host), CloseOutcome::Closed);
    assert_eq!(state.workspace.tab_count(), 1);
    assert!(host.save_suggestions.is_empty());
}

#[test]
fn test_save_then_close() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kept.txt");

    let mut state = editor_with_dirty_second_tab();
    let mut host = ScriptedDialogs::new();
    host.answer_confirm(ConfirmButton::Save)
        .answer_save(Some(path.clone()));

    assert_eq!(state.close_active_tab(&mut host), CloseOutcome::Closed);
    assert_eq!(state.workspace.tab_count(), 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), "unsaved");
}

#[test]
fn test_save_dismissed_during_close_keeps_tab() {
    let mut state = editor_with_dirty_second_tab();
    let mut host = ScriptedDialogs::new();
    host.answer_confirm(ConfirmButton::Save).answer_save(None);

    assert_eq!(state.close_active_tab(&mut host), CloseOutcome::Cancelled);
    assert_eq!(state.workspace.tab_count(), 2);
    assert!(state.workspace.active_tab().dirty);
}

#[test]
fn test_failed_save_during_close_keeps_tab() {
    let dir = TempDir::new().unwrap();
    let mut state = editor_with_dirty_second_tab();
    let mut host = ScriptedDialogs::new();
    host.answer_confirm(ConfirmButton::Save)
        .answer_save(Some(dir.path().join("no-such-dir").join("x.txt")));

    assert_eq!(state.close_active_tab(&mut host), CloseOutcome::Cancelled);
    assert_eq!(state.workspace.tab_count(), 2);
    assert_eq!(host.errors.len(), 1);
    assert_eq!(host.errors[0].title, "Save Error");
}

#[test]
fn test_window_close_prompts_each_dirty_tab_in_order() {
    let dir = TempDir::new().unwrap();
    let saved = dir.path().join("first.txt");

    let mut state = EditorState::default();
    let first = state.workspace.active_tab().id;
    state.set_tab_text(first, "one");
    state.new_tab();
    let third = state.new_tab();
    state.set_tab_text(third, "three");

    let mut host = ScriptedDialogs::new();
    host.answer_confirm(ConfirmButton::Save)
        .answer_save(Some(saved.clone()))
        .answer_confirm(ConfirmButton::Discard);

    assert!(state.request_window_close(&mut host));

    let pending: Vec<_> = host.prompts.iter().map(|p| (p.tab, p.position)).collect();
    assert_eq!(pending, vec![(first, 0), (third, 2)]);

    let prompts: Vec<&str> = host.prompts.iter().map(|p| p.prompt.as_str()).collect();
    assert_eq!(
        prompts,
        vec![
            "You have unsaved changes in tab 1. Save before closing?",
            "You have unsaved changes in tab 3. Save before closing?",
        ]
    );
    assert_eq!(fs::read_to_string(&saved).unwrap(), "one");
    assert!(host.is_exhausted());
}

#[test]
fn test_window_close_stops_at_first_cancel() {
    let dir = TempDir::new().unwrap();
    let saved = dir.path().join("first.txt");

    let mut state = EditorState::default();
    let first = state.workspace.active_tab().id;
    state.set_tab_text(first, "one");
    let second = state.new_tab();
    state.set_tab_text(second, "two");
    let third = state.new_tab();
    state.set_tab_text(third, "three");

    let mut host = ScriptedDialogs::new();
    host.answer_confirm(ConfirmButton::Save)
        .answer_save(Some(saved.clone()))
        .answer_confirm(ConfirmButton::Cancel);

    assert!(!state.request_window_close(&mut host));

    // The third tab was never asked about
    assert_eq!(host.prompts.len(), 2);
    // The completed save is not rolled back
    assert!(!state.workspace.tab_by_id(first).unwrap().dirty);
    assert!(saved.exists());
    assert_eq!(state.workspace.tab_count(), 3);
    assert_eq!(state.workspace.active_tab().id, second);
}

#[test]
fn test_window_close_with_everything_saved_needs_no_prompt() {
    let mut state = EditorState::default();
    state.new_tab();
    let mut host = ScriptedDialogs::new();

    assert!(state.request_window_close(&mut host));
    assert!(host.prompts.is_empty());
}
