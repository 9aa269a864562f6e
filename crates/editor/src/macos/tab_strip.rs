// Chunk: docs/chunks/appkit_shell - NSTabView kept in step with the workspace
//!
//! Keeps an `NSTabView` in step with the editor's [`Workspace`].
//!
//! Each tab gets one `NSTabViewItem` holding a scrollable `NSTextView`. After
//! every command the strip is reconciled against the workspace by [`TabId`]:
//! items for closed tabs are removed, new tabs get fresh items, moved tabs are
//! re-inserted at their new position, labels are refreshed and the active tab
//! is selected. Text is only pushed into a text view when its item is
//! created; afterwards the text view is the editing surface and the workspace
//! follows it.
//!
//! The strip also carries a "+" button in its top-right corner (New Tab) and
//! a context menu on the tab buttons whose "Close Tab" item closes the tab
//! that was right-clicked, not just the active one.

use objc2::rc::Retained;
use objc2::runtime::{AnyObject, ProtocolObject};
use objc2::sel;
use objc2_app_kit::{
    NSAutoresizingMaskOptions, NSButton, NSEvent, NSFont, NSMenu, NSMenuDelegate, NSMenuItem,
    NSScrollView, NSTabView, NSTabViewDelegate, NSTabViewItem, NSTextView, NSTextViewDelegate,
    NSView,
};
use objc2_foundation::{ns_string, MainThreadMarker, NSPoint, NSRect, NSSize, NSString};

use mesa_notepad::config::EditorConfig;
use mesa_notepad::workspace::{Tab, TabId, Workspace};

/// Size of the "+" button, in points.
const NEW_TAB_BUTTON_WIDTH: f64 = 24.0;
const NEW_TAB_BUTTON_HEIGHT: f64 = 22.0;

/// Gap between the "+" button and the window edges.
const NEW_TAB_BUTTON_MARGIN: f64 = 6.0;

/// Widgets shown for one tab.
struct TabEntry {
    id: TabId,
    item: Retained<NSTabViewItem>,
    text_view: Retained<NSTextView>,
}

/// The tab view and the widgets created for each tab.
pub struct TabStrip {
    /// Holds the tab view and the "+" button
    root: Retained<NSView>,
    tab_view: Retained<NSTabView>,
    entries: Vec<TabEntry>,
    font: Retained<NSFont>,
}

impl TabStrip {
    /// Creates an empty tab view filling `frame`.
    ///
    /// `target` receives `newTab:` from the "+" button and `closeClickedTab:`
    /// from the tab context menu; `menu_delegate` is told when that menu
    /// opens so it can note which tab was clicked.
    pub fn new(
        mtm: MainThreadMarker,
        frame: NSRect,
        config: &EditorConfig,
        delegate: &ProtocolObject<dyn NSTabViewDelegate>,
        menu_delegate: &ProtocolObject<dyn NSMenuDelegate>,
        target: &AnyObject,
    ) -> Self {
        let sizable =
            NSAutoresizingMaskOptions::ViewWidthSizable | NSAutoresizingMaskOptions::ViewHeightSizable;
        let bounds = NSRect::new(NSPoint::new(0.0, 0.0), frame.size);

        let root = NSView::initWithFrame(mtm.alloc::<NSView>(), bounds);
        root.setAutoresizingMask(sizable);

        let tab_view = NSTabView::initWithFrame(mtm.alloc::<NSTabView>(), bounds);
        tab_view.setAutoresizingMask(sizable);
        // SAFETY: the delegate is the app delegate, which outlives the tab view.
        unsafe { tab_view.setDelegate(Some(delegate)) };
        tab_view.setMenu(Some(&tab_context_menu(mtm, menu_delegate, target)));
        root.addSubview(&tab_view);
        root.addSubview(&new_tab_button(mtm, bounds, target));

        let font = if config.monospace {
            NSFont::userFixedPitchFontOfSize(config.font_size)
                .unwrap_or_else(|| NSFont::systemFontOfSize(config.font_size))
        } else {
            NSFont::systemFontOfSize(config.font_size)
        };

        Self {
            root,
            tab_view,
            entries: Vec::new(),
            font,
        }
    }

    /// The view to install as the window's content view.
    pub fn root_view(&self) -> &NSView {
        &self.root
    }

    pub fn tab_view(&self) -> &NSTabView {
        &self.tab_view
    }

    /// Returns the tab under the pointer of a mouse `event`.
    pub fn tab_at_event(&self, event: &NSEvent) -> Option<TabId> {
        let point = self
            .tab_view
            .convertPoint_fromView(event.locationInWindow(), None);
        let item = self.tab_view.tabViewItemAtPoint(point)?;
        let index = self.index_of_item(&item)?;
        Some(self.entries[index].id)
    }

    /// Returns the tab whose text view sent a notification.
    pub fn tab_for_text_view(&self, sender: &AnyObject) -> Option<(TabId, &NSTextView)> {
        let sender: *const AnyObject = sender;
        self.entries
            .iter()
            .find(|entry| Retained::as_ptr(&entry.text_view).cast::<AnyObject>() == sender)
            .map(|entry| (entry.id, &*entry.text_view))
    }

    /// Display index of `item`, if it belongs to this strip.
    pub fn index_of_item(&self, item: &NSTabViewItem) -> Option<usize> {
        // NSNotFound is out of range as well
        usize::try_from(self.tab_view.indexOfTabViewItem(item))
            .ok()
            .filter(|&index| index < self.entries.len())
    }

    /// Brings the tab view in line with `workspace`.
    pub fn reconcile(
        &mut self,
        mtm: MainThreadMarker,
        workspace: &Workspace,
        text_delegate: &ProtocolObject<dyn NSTextViewDelegate>,
    ) {
        let tab_view = &self.tab_view;
        self.entries.retain(|entry| {
            let keep = workspace.tab_by_id(entry.id).is_some();
            if !keep {
                tab_view.removeTabViewItem(&entry.item);
            }
            keep
        });

        for (index, tab) in workspace.tabs().iter().enumerate() {
            match self.entries.iter().position(|entry| entry.id == tab.id) {
                Some(pos) if pos == index => {}
                Some(pos) => {
                    let entry = self.entries.remove(pos);
                    self.tab_view.removeTabViewItem(&entry.item);
                    self.tab_view
                        .insertTabViewItem_atIndex(&entry.item, index as isize);
                    self.entries.insert(index, entry);
                }
                None => {
                    let entry = self.make_entry(mtm, tab, text_delegate);
                    self.tab_view
                        .insertTabViewItem_atIndex(&entry.item, index as isize);
                    self.entries.insert(index, entry);
                }
            }
            self.entries[index]
                .item
                .setLabel(&NSString::from_str(&tab.label));
        }

        let active = workspace.active_index();
        self.tab_view.selectTabViewItemAtIndex(active as isize);
        if let Some(window) = self.tab_view.window() {
            window.makeFirstResponder(Some(&self.entries[active].text_view));
        }
    }

    fn make_entry(
        &self,
        mtm: MainThreadMarker,
        tab: &Tab,
        text_delegate: &ProtocolObject<dyn NSTextViewDelegate>,
    ) -> TabEntry {
        let frame = NSRect::new(NSPoint::new(0.0, 0.0), self.tab_view.contentRect().size);
        let sizable =
            NSAutoresizingMaskOptions::ViewWidthSizable | NSAutoresizingMaskOptions::ViewHeightSizable;

        let scroll_view = NSScrollView::initWithFrame(mtm.alloc::<NSScrollView>(), frame);
        scroll_view.setHasVerticalScroller(true);
        scroll_view.setAutoresizingMask(sizable);

        let content_size = scroll_view.contentSize();
        let text_view = NSTextView::initWithFrame(
            mtm.alloc::<NSTextView>(),
            NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(content_size.width, content_size.height)),
        );
        text_view.setRichText(false);
        text_view.setAllowsUndo(true);
        text_view.setAutoresizingMask(NSAutoresizingMaskOptions::ViewWidthSizable);
        text_view.setFont(Some(&self.font));
        text_view.setString(&NSString::from_str(tab.text()));
        // SAFETY: the delegate is the app delegate, which outlives every text view.
        unsafe { text_view.setDelegate(Some(text_delegate)) };
        scroll_view.setDocumentView(Some(&text_view));

        // SAFETY: items are looked up by position, so no identifier is needed.
        let item = unsafe { NSTabViewItem::initWithIdentifier(mtm.alloc::<NSTabViewItem>(), None) };
        item.setLabel(&NSString::from_str(&tab.label));
        item.setView(Some(&scroll_view));

        TabEntry {
            id: tab.id,
            item,
            text_view,
        }
    }
}

/// Builds the "+" button pinned to the top-right corner of `bounds`.
fn new_tab_button(mtm: MainThreadMarker, bounds: NSRect, target: &AnyObject) -> Retained<NSButton> {
    // SAFETY: the target (the app delegate) implements `newTab:` and
    // outlives the button.
    let button = unsafe {
        NSButton::buttonWithTitle_target_action(ns_string!("+"), Some(target), Some(sel!(newTab:)), mtm)
    };
    let origin = NSPoint::new(
        bounds.size.width - NEW_TAB_BUTTON_WIDTH - NEW_TAB_BUTTON_MARGIN,
        bounds.size.height - NEW_TAB_BUTTON_HEIGHT - NEW_TAB_BUTTON_MARGIN,
    );
    let size = NSSize::new(NEW_TAB_BUTTON_WIDTH, NEW_TAB_BUTTON_HEIGHT);
    button.setFrame(NSRect::new(origin, size));
    // Stay in the top-right corner while the window resizes
    button.setAutoresizingMask(
        NSAutoresizingMaskOptions::ViewMinXMargin | NSAutoresizingMaskOptions::ViewMinYMargin,
    );
    button.setToolTip(Some(ns_string!("New Tab")));
    button
}

/// Builds the right-click menu of the tab buttons.
fn tab_context_menu(
    mtm: MainThreadMarker,
    delegate: &ProtocolObject<dyn NSMenuDelegate>,
    target: &AnyObject,
) -> Retained<NSMenu> {
    let menu = NSMenu::new(mtm);
    // SAFETY: the target implements `closeClickedTab:`.
    let close_item = unsafe {
        NSMenuItem::initWithTitle_action_keyEquivalent(
            mtm.alloc::<NSMenuItem>(),
            ns_string!("Close Tab"),
            Some(sel!(closeClickedTab:)),
            ns_string!(""),
        )
    };
    // SAFETY: the target (the app delegate) outlives the menu.
    unsafe { close_item.setTarget(Some(target)) };
    menu.addItem(&close_item);
    // SAFETY: the delegate is the app delegate, which outlives the menu.
    #[allow(unused_unsafe)]
    unsafe {
        menu.setDelegate(Some(delegate))
    };
    menu
}
