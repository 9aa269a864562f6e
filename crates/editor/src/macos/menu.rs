// Chunk: docs/chunks/editor_shortcuts - Main menu built from the command table
//!
//! Main menu construction.
//!
//! The File menu is generated from [`Command::ALL`]: titles and key
//! equivalents come from the command table, and AppKit matches key presses
//! against the menu.

use objc2::rc::Retained;
use objc2::runtime::{AnyObject, Sel};
use objc2::sel;
use objc2_app_kit::{NSApplication, NSEventModifierFlags, NSMenu, NSMenuItem};
use objc2_foundation::{ns_string, MainThreadMarker, NSString};

use mesa_notepad::input::{Key, Modifiers};
use mesa_notepad::shortcuts::{Command, Shortcut};

/// AppKit's private-use code points for the arrow keys.
const LEFT_ARROW_FUNCTION_KEY: char = '\u{F702}';
const RIGHT_ARROW_FUNCTION_KEY: char = '\u{F703}';

/// Selector the app delegate implements for `command`.
pub fn action_for(command: Command) -> Sel {
    match command {
        Command::NewTab => sel!(newTab:),
        Command::Open => sel!(openDocument:),
        Command::Save => sel!(saveDocument:),
        Command::SaveAs => sel!(saveDocumentAs:),
        Command::CloseTab => sel!(closeTab:),
        Command::NextTab => sel!(showNextTab:),
        Command::PrevTab => sel!(showPreviousTab:),
        Command::MoveTabLeft => sel!(moveTabLeft:),
        Command::MoveTabRight => sel!(moveTabRight:),
    }
}

fn key_equivalent(shortcut: &Shortcut) -> Retained<NSString> {
    let ch = match shortcut.key {
        Key::Char(c) => c,
        Key::Left => LEFT_ARROW_FUNCTION_KEY,
        Key::Right => RIGHT_ARROW_FUNCTION_KEY,
    };
    NSString::from_str(&ch.to_string())
}

fn modifier_mask(modifiers: Modifiers) -> NSEventModifierFlags {
    let mut mask = NSEventModifierFlags::empty();
    if modifiers.command {
        mask |= NSEventModifierFlags::Command;
    }
    if modifiers.shift {
        mask |= NSEventModifierFlags::Shift;
    }
    if modifiers.option {
        mask |= NSEventModifierFlags::Option;
    }
    if modifiers.control {
        mask |= NSEventModifierFlags::Control;
    }
    mask
}

fn command_item(mtm: MainThreadMarker, command: Command, target: &AnyObject) -> Retained<NSMenuItem> {
    let shortcut = command.shortcut();
    // SAFETY: the target implements every selector returned by `action_for`.
    let item = unsafe {
        NSMenuItem::initWithTitle_action_keyEquivalent(
            mtm.alloc::<NSMenuItem>(),
            &NSString::from_str(command.menu_title()),
            Some(action_for(command)),
            &key_equivalent(&shortcut),
        )
    };
    item.setKeyEquivalentModifierMask(modifier_mask(shortcut.modifiers));
    // SAFETY: the target (the app delegate) outlives the menu.
    unsafe { item.setTarget(Some(target)) };
    item
}

/// Builds the application and File menus and installs them.
pub fn install_main_menu(mtm: MainThreadMarker, app_name: &str, target: &AnyObject) {
    let main_menu = NSMenu::new(mtm);

    // Application menu (first item, titled by the system)
    let app_item = NSMenuItem::new(mtm);
    let app_menu = NSMenu::new(mtm);
    // SAFETY: `terminate:` is implemented by NSApplication, the default target.
    let quit_item = unsafe {
        NSMenuItem::initWithTitle_action_keyEquivalent(
            mtm.alloc::<NSMenuItem>(),
            &NSString::from_str(&format!("Quit {app_name}")),
            Some(sel!(terminate:)),
            ns_string!("q"),
        )
    };
    app_menu.addItem(&quit_item);
    app_item.setSubmenu(Some(&app_menu));
    main_menu.addItem(&app_item);

    // File menu
    let file_item = NSMenuItem::new(mtm);
    let file_menu = NSMenu::initWithTitle(mtm.alloc::<NSMenu>(), ns_string!("File"));
    for command in Command::ALL {
        if command.starts_menu_group() {
            file_menu.addItem(&NSMenuItem::separatorItem(mtm));
        }
        file_menu.addItem(&command_item(mtm, command, target));
    }
    file_item.setSubmenu(Some(&file_menu));
    main_menu.addItem(&file_item);

    NSApplication::sharedApplication(mtm).setMainMenu(Some(&main_menu));
}
