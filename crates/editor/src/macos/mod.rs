// Chunk: docs/chunks/appkit_shell - Native AppKit window shell
//!
//! AppKit window shell.
//!
//! Renders [`EditorState`](mesa_notepad::editor_state::EditorState) with
//! native widgets and routes menu commands, text edits, tab selection and
//! window-close requests back into it. All decisions are made by the editor
//! state; this layer only translates.

mod app_delegate;
mod dialogs;
mod menu;
mod tab_strip;

use std::process::ExitCode;

use objc2::runtime::ProtocolObject;
use objc2_app_kit::{NSApplication, NSApplicationActivationPolicy, NSApplicationDelegate};
use objc2_foundation::MainThreadMarker;
use tracing::error;

use mesa_notepad::config::EditorConfig;

use self::app_delegate::AppDelegate;

/// Runs the application event loop until the app terminates.
pub fn run(config: EditorConfig) -> ExitCode {
    let Some(mtm) = MainThreadMarker::new() else {
        error!("the editor must be started on the main thread");
        return ExitCode::FAILURE;
    };

    let app = NSApplication::sharedApplication(mtm);

    // Set activation policy to regular (creates Dock icon, menu bar presence)
    app.setActivationPolicy(NSApplicationActivationPolicy::Regular);

    let delegate = AppDelegate::new(mtm, config);
    let delegate_obj: &ProtocolObject<dyn NSApplicationDelegate> =
        ProtocolObject::from_ref(&*delegate);
    app.setDelegate(Some(delegate_obj));

    // Blocks until the application terminates
    app.run();
    ExitCode::SUCCESS
}
