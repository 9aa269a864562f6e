// Chunk: docs/chunks/unsaved_close_confirm - Save/Discard/Cancel prompt model
//!
//! The unsaved-changes prompt.
//!
//! [`ConfirmDialog`] is pure data: the title, prompt text, button set and
//! default button of the question asked before a modified tab is closed, plus
//! the tab the question is about. It has no platform dependencies; the dialog
//! host decides how to show it and reports back which [`ConfirmButton`] was
//! pressed.
//!
//! A decision is outstanding exactly while [`DialogHost::confirm`] is
//! running; the dialog passed to it names the pending tab. [`CloseVerdict`]
//! is what the flow concludes once the host answers.
//!
//! [`DialogHost::confirm`]: crate::dialogs::DialogHost::confirm

use crate::workspace::TabId;

/// Title shown on every unsaved-changes prompt.
pub const UNSAVED_CHANGES_TITLE: &str = "Unsaved Changes";

/// A button of the unsaved-changes prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmButton {
    /// Save the document, then continue closing
    #[default]
    Save,
    /// Close without saving
    Discard,
    /// Keep the document open
    Cancel,
}

impl ConfirmButton {
    /// All buttons, in the order they are presented.
    pub const ALL: [ConfirmButton; 3] = [
        ConfirmButton::Save,
        ConfirmButton::Discard,
        ConfirmButton::Cancel,
    ];

    /// The button caption.
    pub fn label(self) -> &'static str {
        match self {
            ConfirmButton::Save => "Save",
            ConfirmButton::Discard => "Discard",
            ConfirmButton::Cancel => "Cancel",
        }
    }
}

/// Content of an unsaved-changes prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    /// Window title of the prompt
    pub title: String,
    /// The question asked
    pub prompt: String,
    /// Button activated by Return
    pub default_button: ConfirmButton,
    /// The tab awaiting the decision
    pub tab: TabId,
    /// Display index of that tab when the prompt was raised
    pub position: usize,
}

impl ConfirmDialog {
    /// Creates a prompt about tab `tab` at `position`, defaulting to Save.
    pub fn new(tab: TabId, position: usize, prompt: impl Into<String>) -> Self {
        Self {
            title: UNSAVED_CHANGES_TITLE.to_string(),
            prompt: prompt.into(),
            default_button: ConfirmButton::Save,
            tab,
            position,
        }
    }

    /// Prompt shown before closing a single modified tab.
    pub fn for_tab_close(tab: TabId, position: usize) -> Self {
        Self::new(tab, position, "You have unsaved changes. Save before closing?")
    }

    /// Prompt shown for a modified tab while the window closes.
    ///
    /// The tab is named by its 1-based display position.
    pub fn for_window_close(tab: TabId, position: usize) -> Self {
        Self::new(
            tab,
            position,
            format!(
                "You have unsaved changes in tab {}. Save before closing?",
                position + 1
            ),
        )
    }

    /// Buttons offered, in presentation order.
    pub fn buttons(&self) -> &'static [ConfirmButton] {
        &ConfirmButton::ALL
    }
}

/// What the confirmation flow concluded about a pending close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseVerdict {
    /// Go ahead with the close
    Proceed,
    /// Leave the tab open
    Abort,
}

impl CloseVerdict {
    /// Resolves a button press.
    ///
    /// `still_dirty_after_save` is only consulted for [`ConfirmButton::Save`]:
    /// a save that failed or was itself cancelled blocks the close.
    pub fn from_decision(button: ConfirmButton, still_dirty_after_save: bool) -> Self {
        match button {
            ConfirmButton::Save if still_dirty_after_save => CloseVerdict::Abort,
            ConfirmButton::Save | ConfirmButton::Discard => CloseVerdict::Proceed,
            ConfirmButton::Cancel => CloseVerdict::Abort,
        }
    }
}
