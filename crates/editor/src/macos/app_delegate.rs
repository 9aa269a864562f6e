// Chunk: docs/chunks/appkit_shell - Application delegate and window controller
// Chunk: docs/chunks/quit_command - Cmd+Q app termination handling
//!
//! The application delegate.
//!
//! One object receives every callback AppKit sends: application lifecycle,
//! window close requests, tab selection, text edits, the tab context menu and
//! menu actions. Each
//! callback forwards into the [`EditorController`], which owns the editor
//! state and the widgets, and re-syncs the widgets afterwards.
//!
//! Modal panels and alerts spin a nested run loop, so AppKit can deliver
//! callbacks (for example tab selection while tabs are being reconciled)
//! while the controller is already borrowed. Those re-entrant callbacks are
//! dropped; the controller syncs the widgets itself once it is done.

use std::cell::RefCell;
use std::rc::Rc;

use objc2::rc::Retained;
use objc2::runtime::{AnyObject, ProtocolObject};
use objc2::{define_class, msg_send, DefinedClass, MainThreadOnly, Message};
use objc2_app_kit::{
    NSApplication, NSApplicationDelegate, NSApplicationTerminateReply, NSBackingStoreType, NSMenu,
    NSMenuDelegate, NSTabView, NSTabViewDelegate, NSTabViewItem, NSTextDelegate,
    NSTextViewDelegate, NSWindow, NSWindowDelegate, NSWindowStyleMask,
};
use objc2_foundation::{
    MainThreadMarker, NSNotification, NSObject, NSObjectProtocol, NSPoint, NSRect, NSSize,
    NSString,
};
use tracing::{debug, info};

use mesa_notepad::config::EditorConfig;
use mesa_notepad::editor_state::EditorState;
use mesa_notepad::shortcuts::Command;
use mesa_notepad::workspace::TabId;

use super::dialogs::AppKitDialogs;
use super::menu;
use super::tab_strip::TabStrip;

/// Owns the editor state and the widgets that display it.
struct EditorController {
    mtm: MainThreadMarker,
    state: EditorState,
    dialogs: AppKitDialogs,
    tabs: TabStrip,
    window: Retained<NSWindow>,
    /// Tab under the pointer when the tab context menu last opened
    context_tab: Option<TabId>,
    /// Set once the user has agreed to close the window, so quitting after
    /// the window closed does not prompt a second time.
    close_confirmed: bool,
}

impl EditorController {
    fn run_command(&mut self, command: Command, delegate: &AppDelegate) {
        debug!(?command, "menu command");
        self.state.execute(command, &mut self.dialogs);
        self.sync_view(delegate);
    }

    /// Closes the tab the context menu was opened on.
    fn close_context_tab(&mut self, delegate: &AppDelegate) {
        let Some(index) = self
            .context_tab
            .take()
            .and_then(|id| self.state.workspace.index_of(id))
        else {
            return;
        };
        let outcome = self.state.close_tab(index, &mut self.dialogs);
        debug!(index, ?outcome, "close from tab menu");
        self.sync_view(delegate);
    }

    /// Pushes the workspace into the widgets.
    fn sync_view(&mut self, delegate: &AppDelegate) {
        let text_delegate: &ProtocolObject<dyn NSTextViewDelegate> =
            ProtocolObject::from_ref(delegate);
        self.tabs
            .reconcile(self.mtm, &self.state.workspace, text_delegate);
        self.window
            .setDocumentEdited(self.state.has_unsaved_changes());
    }

    /// Runs the unsaved-changes prompts for every tab.
    fn confirm_window_close(&mut self, delegate: &AppDelegate) -> bool {
        if self.close_confirmed {
            return true;
        }
        let proceed = self.state.request_window_close(&mut self.dialogs);
        // Saves made while answering the prompts change labels and markers
        self.sync_view(delegate);
        self.close_confirmed = proceed;
        if !proceed {
            info!("window close cancelled");
        }
        proceed
    }
}

/// Instance variables of [`AppDelegate`].
pub struct AppDelegateIvars {
    /// Settings used to build the window
    config: EditorConfig,
    /// The editor controller (shared between callbacks)
    controller: RefCell<Option<Rc<RefCell<EditorController>>>>,
}

define_class!(
    // SAFETY: AppDelegate follows the correct Objective-C memory management rules
    // and is only accessed from the main thread
    #[unsafe(super = NSObject)]
    #[thread_kind = MainThreadOnly]
    #[ivars = AppDelegateIvars]
    #[name = "MesaNotepadAppDelegate"]
    pub struct AppDelegate;

    // SAFETY: NSObjectProtocol is correctly implemented - we inherit from NSObject
    unsafe impl NSObjectProtocol for AppDelegate {}

    // SAFETY: NSApplicationDelegate protocol methods are implemented correctly
    // with proper signatures matching the Objective-C protocol
    unsafe impl NSApplicationDelegate for AppDelegate {
        #[unsafe(method(applicationDidFinishLaunching:))]
        fn application_did_finish_launching(&self, _notification: &NSNotification) {
            let mtm = MainThreadMarker::from(self);
            self.setup_window(mtm);
        }

        #[unsafe(method(applicationShouldTerminateAfterLastWindowClosed:))]
        fn application_should_terminate_after_last_window_closed(
            &self,
            _sender: &NSApplication,
        ) -> bool {
            true
        }

        #[unsafe(method(applicationShouldTerminate:))]
        fn application_should_terminate(
            &self,
            _sender: &NSApplication,
        ) -> NSApplicationTerminateReply {
            let proceed = self
                .with_controller(|controller| controller.confirm_window_close(self))
                .unwrap_or(false);
            if proceed {
                NSApplicationTerminateReply::TerminateNow
            } else {
                NSApplicationTerminateReply::TerminateCancel
            }
        }
    }

    // SAFETY: NSWindowDelegate protocol methods are implemented correctly
    unsafe impl NSWindowDelegate for AppDelegate {
        #[unsafe(method(windowShouldClose:))]
        fn window_should_close(&self, _sender: &NSWindow) -> bool {
            self.with_controller(|controller| controller.confirm_window_close(self))
                .unwrap_or(false)
        }
    }

    // SAFETY: NSTabViewDelegate protocol methods are implemented correctly
    unsafe impl NSTabViewDelegate for AppDelegate {
        #[unsafe(method(tabView:didSelectTabViewItem:))]
        fn tab_view_did_select_item(&self, _tab_view: &NSTabView, item: Option<&NSTabViewItem>) {
            let Some(item) = item else { return };
            self.with_controller(|controller| {
                if let Some(index) = controller.tabs.index_of_item(item) {
                    controller.state.switch_tab(index);
                }
            });
        }
    }

    // SAFETY: NSTextDelegate protocol methods are implemented correctly
    unsafe impl NSTextDelegate for AppDelegate {
        #[unsafe(method(textDidChange:))]
        fn text_did_change(&self, notification: &NSNotification) {
            let Some(sender) = notification.object() else { return };
            self.with_controller(|controller| {
                let Some((id, text_view)) = controller.tabs.tab_for_text_view(&sender) else {
                    return;
                };
                let text = text_view.string().to_string();
                if controller.state.set_tab_text(id, &text) {
                    controller
                        .window
                        .setDocumentEdited(controller.state.has_unsaved_changes());
                }
            });
        }
    }

    // SAFETY: NSTextViewDelegate methods are all optional; none are overridden
    unsafe impl NSTextViewDelegate for AppDelegate {}

    // SAFETY: NSMenuDelegate protocol methods are implemented correctly
    unsafe impl NSMenuDelegate for AppDelegate {
        #[unsafe(method(menuNeedsUpdate:))]
        fn menu_needs_update(&self, _menu: &NSMenu) {
            let mtm = MainThreadMarker::from(self);
            let event = NSApplication::sharedApplication(mtm).currentEvent();
            self.with_controller(|controller| {
                controller.context_tab = event
                    .as_deref()
                    .and_then(|event| controller.tabs.tab_at_event(event));
            });
        }
    }

    // Menu actions. Each selector is listed in `menu::action_for`.
    impl AppDelegate {
        #[unsafe(method(newTab:))]
        fn new_tab(&self, _sender: Option<&AnyObject>) {
            self.run_command(Command::NewTab);
        }

        #[unsafe(method(openDocument:))]
        fn open_document(&self, _sender: Option<&AnyObject>) {
            self.run_command(Command::Open);
        }

        #[unsafe(method(saveDocument:))]
        fn save_document(&self, _sender: Option<&AnyObject>) {
            self.run_command(Command::Save);
        }

        #[unsafe(method(saveDocumentAs:))]
        fn save_document_as(&self, _sender: Option<&AnyObject>) {
            self.run_command(Command::SaveAs);
        }

        #[unsafe(method(closeTab:))]
        fn close_tab(&self, _sender: Option<&AnyObject>) {
            self.run_command(Command::CloseTab);
        }

        #[unsafe(method(closeClickedTab:))]
        fn close_clicked_tab(&self, _sender: Option<&AnyObject>) {
            self.with_controller(|controller| controller.close_context_tab(self));
        }

        #[unsafe(method(showNextTab:))]
        fn show_next_tab(&self, _sender: Option<&AnyObject>) {
            self.run_command(Command::NextTab);
        }

        #[unsafe(method(showPreviousTab:))]
        fn show_previous_tab(&self, _sender: Option<&AnyObject>) {
            self.run_command(Command::PrevTab);
        }

        #[unsafe(method(moveTabLeft:))]
        fn move_tab_left(&self, _sender: Option<&AnyObject>) {
            self.run_command(Command::MoveTabLeft);
        }

        #[unsafe(method(moveTabRight:))]
        fn move_tab_right(&self, _sender: Option<&AnyObject>) {
            self.run_command(Command::MoveTabRight);
        }
    }
);

impl AppDelegate {
    /// Creates a new application delegate
    pub fn new(mtm: MainThreadMarker, config: EditorConfig) -> Retained<Self> {
        let this = mtm.alloc::<Self>();
        let this = this.set_ivars(AppDelegateIvars {
            config,
            controller: RefCell::new(None),
        });
        unsafe { msg_send![super(this), init] }
    }

    /// Runs `f` on the controller unless a callback further up the stack
    /// already holds it.
    fn with_controller<R>(&self, f: impl FnOnce(&mut EditorController) -> R) -> Option<R> {
        let controller = self.ivars().controller.borrow().clone()?;
        let Ok(mut controller) = controller.try_borrow_mut() else {
            debug!("ignoring re-entrant callback");
            return None;
        };
        Some(f(&mut controller))
    }

    fn run_command(&self, command: Command) {
        self.with_controller(|controller| controller.run_command(command, self));
    }

    /// Creates the window, the tab view and the menu.
    fn setup_window(&self, mtm: MainThreadMarker) {
        let state = EditorState::new(self.ivars().config.clone());
        let config = &state.config;
        let content_rect = NSRect::new(
            NSPoint::new(0.0, 0.0),
            NSSize::new(config.window_width, config.window_height),
        );

        let style_mask = NSWindowStyleMask::Titled
            | NSWindowStyleMask::Closable
            | NSWindowStyleMask::Resizable
            | NSWindowStyleMask::Miniaturizable;

        let window = unsafe {
            NSWindow::initWithContentRect_styleMask_backing_defer(
                mtm.alloc::<NSWindow>(),
                content_rect,
                style_mask,
                NSBackingStoreType::Buffered,
                false,
            )
        };
        // The delegate keeps the window alive, not AppKit
        unsafe { window.setReleasedWhenClosed(false) };
        window.setTitle(&NSString::from_str(state.window_title()));
        window.center();

        let target: &AnyObject = self.as_ref();
        let tab_delegate: &ProtocolObject<dyn NSTabViewDelegate> = ProtocolObject::from_ref(self);
        let menu_delegate: &ProtocolObject<dyn NSMenuDelegate> = ProtocolObject::from_ref(self);
        let tabs = TabStrip::new(mtm, content_rect, config, tab_delegate, menu_delegate, target);
        window.setContentView(Some(tabs.root_view()));

        let window_delegate: &ProtocolObject<dyn NSWindowDelegate> = ProtocolObject::from_ref(self);
        window.setDelegate(Some(window_delegate));

        menu::install_main_menu(mtm, state.window_title(), target);

        let dialogs = AppKitDialogs::new(mtm, tabs.tab_view().retain());
        let controller = Rc::new(RefCell::new(EditorController {
            mtm,
            state,
            dialogs,
            tabs,
            window: window.clone(),
            context_tab: None,
            close_confirmed: false,
        }));
        *self.ivars().controller.borrow_mut() = Some(controller);

        window.makeKeyAndOrderFront(None);
        self.with_controller(|controller| controller.sync_view(self));

        // activateIgnoringOtherApps is deprecated but required when launching
        // unbundled (i.e., from cargo run / terminal without an app bundle).
        let app = NSApplication::sharedApplication(mtm);
        #[allow(deprecated)]
        app.activateIgnoringOtherApps(true);
    }
}
