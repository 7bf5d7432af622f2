//! Status bar (menu bar) item with dropdown menu.
//!
//! Creates a clickable item in the macOS menu bar with options:
//! - Show/Hide Window
//! - Settings...
//! - Quit

use tracing::debug;

use crate::i18n::{tr, Key};
use crate::platform::macos::app::AppContext;
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring_id, sel, Sel};

/// Install the status bar item with menu.
///
/// # Safety
/// Must be called from main thread, after the app is initialized.
pub unsafe fn install_status_bar(ctx: &mut AppContext, view: id) {
    let status_bar: id = msg_send![get_class("NSStatusBar"), systemStatusBar];

    // NSVariableStatusItemLength = -1.0
    let status_item: id = msg_send![status_bar, statusItemWithLength: -1.0f64];
    let _: id = msg_send![status_item, retain];
    ctx.status_item = status_item;

    let button: id = msg_send![status_item, button];
    if button != nil {
        let _: () = msg_send![button, setTitle: nsstring_id("🕐")];
        let _: () = msg_send![button, setToolTip: nsstring_id(tr(Key::AppName, ctx.lang))];
    }

    let menu = create_status_menu(ctx, view);
    let _: () = msg_send![status_item, setMenu: menu];
}

unsafe fn add_item(menu: id, view: id, title: &str, action: Sel, key: &str) {
    let item: id = msg_send![get_class("NSMenuItem"), alloc];
    let item: id = msg_send![
        item,
        initWithTitle: nsstring_id(title),
        action: action,
        keyEquivalent: nsstring_id(key)
    ];
    let _: () = msg_send![item, setTarget: view];
    let _: () = msg_send![menu, addItem: item];
}

/// Create the dropdown menu for the status bar item.
unsafe fn create_status_menu(ctx: &AppContext, view: id) -> id {
    let lang = ctx.lang;

    let menu: id = msg_send![get_class("NSMenu"), alloc];
    let menu: id = msg_send![menu, init];

    add_item(menu, view, tr(Key::MenuShowHide, lang), sel!(toggleWindow:), "");
    add_item(menu, view, tr(Key::MenuSettings, lang), sel!(openSettings:), ",");

    let separator: id = msg_send![get_class("NSMenuItem"), separatorItem];
    let _: () = msg_send![menu, addItem: separator];

    add_item(menu, view, tr(Key::MenuQuit, lang), sel!(quitApp:), "q");

    menu
}

/// Rebuild the menu in the current display language.
///
/// # Safety
/// Main thread only.
pub unsafe fn update_status_bar_language(ctx: &AppContext, view: id) {
    if ctx.status_item == nil {
        return;
    }
    let menu = create_status_menu(ctx, view);
    let _: () = msg_send![ctx.status_item, setMenu: menu];
    debug!(lang = ?ctx.lang, "status menu rebuilt");
}
