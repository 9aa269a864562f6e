// Chunk: docs/chunks/file_open_picker - NSOpenPanel / NSSavePanel / NSAlert dialogs
//!
//! [`DialogHost`] backed by AppKit panels and alerts.
//!
//! This is a thin wrapper ("humble object"): it shows the panel, waits for
//! the modal session to end and converts the answer. All business logic stays
//! in the editor state.
//!
//! AppKit panels have no cosmetic file-type popup; every file stays
//! selectable, so the filters passed in are not applied.

use std::path::PathBuf;

use objc2::rc::Retained;
use objc2_app_kit::{
    NSAlert, NSAlertFirstButtonReturn, NSAlertStyle, NSModalResponseOK, NSOpenPanel, NSSavePanel,
    NSTabView,
};
use objc2_foundation::{ns_string, MainThreadMarker, NSString, NSURL};

use mesa_notepad::confirm_dialog::{ConfirmButton, ConfirmDialog};
use mesa_notepad::dialogs::{DialogHost, FileFilter};

/// Modal dialogs shown on the main thread.
pub struct AppKitDialogs {
    mtm: MainThreadMarker,
    /// Tab view whose tab is brought forward while a prompt is about it
    tab_view: Retained<NSTabView>,
}

impl AppKitDialogs {
    pub fn new(mtm: MainThreadMarker, tab_view: Retained<NSTabView>) -> Self {
        Self { mtm, tab_view }
    }

    /// Shows the tab at `position` behind the alert.
    fn reveal_tab(&self, position: usize) {
        let Ok(index) = isize::try_from(position) else {
            return;
        };
        if index < self.tab_view.numberOfTabViewItems() {
            self.tab_view.selectTabViewItemAtIndex(index);
        }
    }
}

/// Converts a panel URL to a filesystem path.
fn url_to_path(url: Option<Retained<NSURL>>) -> Option<PathBuf> {
    url.and_then(|url| url.path().map(|p| PathBuf::from(p.to_string())))
}

impl DialogHost for AppKitDialogs {
    fn pick_open_path(&mut self, _filters: &[FileFilter]) -> Option<PathBuf> {
        let panel = NSOpenPanel::openPanel(self.mtm);
        panel.setTitle(ns_string!("Open File"));
        panel.setCanChooseFiles(true);
        panel.setCanChooseDirectories(false);
        panel.setAllowsMultipleSelection(false);

        if panel.runModal() == NSModalResponseOK {
            url_to_path(panel.URL())
        } else {
            None
        }
    }

    fn pick_save_path(&mut self, suggested_name: &str, _filters: &[FileFilter]) -> Option<PathBuf> {
        let panel = NSSavePanel::savePanel(self.mtm);
        panel.setTitle(ns_string!("Save As"));
        panel.setNameFieldStringValue(&NSString::from_str(suggested_name));
        panel.setCanCreateDirectories(true);

        if panel.runModal() == NSModalResponseOK {
            url_to_path(panel.URL())
        } else {
            None
        }
    }

    fn confirm(&mut self, dialog: &ConfirmDialog) -> ConfirmButton {
        self.reveal_tab(dialog.position);

        let alert = NSAlert::new(self.mtm);
        alert.setAlertStyle(NSAlertStyle::Warning);
        alert.setMessageText(&NSString::from_str(&dialog.title));
        alert.setInformativeText(&NSString::from_str(&dialog.prompt));

        // The first button answers Return; a button titled "Cancel" answers Escape.
        let buttons = dialog.buttons();
        let default_first = std::iter::once(dialog.default_button)
            .chain(buttons.iter().copied().filter(|b| *b != dialog.default_button));
        let ordered: Vec<ConfirmButton> = default_first.collect();
        for button in &ordered {
            alert.addButtonWithTitle(&NSString::from_str(button.label()));
        }

        let response = alert.runModal();
        usize::try_from(response - NSAlertFirstButtonReturn)
            .ok()
            .and_then(|offset| ordered.get(offset).copied())
            .unwrap_or(ConfirmButton::Cancel)
    }

    fn notify_error(&mut self, title: &str, message: &str) {
        let alert = NSAlert::new(self.mtm);
        alert.setAlertStyle(NSAlertStyle::Warning);
        alert.setMessageText(&NSString::from_str(title));
        alert.setInformativeText(&NSString::from_str(message));
        alert.addButtonWithTitle(ns_string!("OK"));
        alert.runModal();
    }
}
