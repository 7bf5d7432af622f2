//! TimeShiftyPanelView class for the floating panel.
//!
//! This module contains the NSView subclass that handles:
//! - Drawing the city rows
//! - Hover detection through a tracking area
//! - The clock tick and deferred event draining
//! - Status bar menu actions
//!
//! Settings window actions are registered on the same class, see
//! `ui::settings::actions`.

use std::ffi::c_void;

use chrono::Utc;
use objc2::runtime::{AnyClass, AnyObject, Bool, ClassBuilder, Sel};
use tracing::debug;

use crate::events::AppEvent;
use crate::model::constants::CLOCK_TICK_INTERVAL;
use crate::panel::panel_rows;
use crate::placement::Size;
use crate::platform::macos::app::{context, create_repeating_timer, AppContext};
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, sel, NSPoint, NSRect, NSSize, ObjectExt, NO, YES,
};
use crate::platform::macos::handlers::dispatch_events;
use crate::platform::macos::ui::panel::drawing::draw_panel;
use crate::platform::macos::ui::settings::register_settings_actions;

// NSTrackingMouseEnteredAndExited | NSTrackingActiveAlways | NSTrackingInVisibleRect
const TRACKING_OPTIONS: usize = 0x01 | 0x80 | 0x200;

// ============================================================================
// Panel window and view creation
// ============================================================================

/// Create the borderless floating panel window and its view.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn create_panel(size: Size) -> (id, id) {
    let frame = NSRect::new(
        NSPoint::new(0.0, 0.0),
        NSSize::new(size.width, size.height),
    );

    // NSWindowStyleMaskBorderless (0) | NSWindowStyleMaskFullSizeContentView (1 << 15)
    let style: u64 = 1 << 15;
    let window: id = msg_send![get_class("NSWindow"), alloc];
    let window: id = msg_send![
        window,
        initWithContentRect: frame,
        styleMask: style,
        backing: 2u64, // NSBackingStoreBuffered
        defer: NO
    ];
    let _: id = msg_send![window, retain];

    let clear: id = msg_send![get_class("NSColor"), clearColor];
    let _: () = msg_send![window, setOpaque: NO];
    let _: () = msg_send![window, setBackgroundColor: clear];
    let _: () = msg_send![window, setHasShadow: NO];
    // NSFloatingWindowLevel
    let _: () = msg_send![window, setLevel: 3isize];
    // CanJoinAllSpaces (1) + FullScreenAuxiliary (256)
    let _: () = msg_send![window, setCollectionBehavior: 257u64];
    let _: () = msg_send![window, setIgnoresMouseEvents: NO];
    let _: () = msg_send![window, setAcceptsMouseMovedEvents: YES];
    let _: () = msg_send![window, setReleasedWhenClosed: NO];

    let view = register_and_create_view(window, size);
    (window, view)
}

/// Register the panel view class and create an instance.
///
/// # Safety
/// Must be called from the main thread. The window must be a valid NSWindow.
unsafe fn register_and_create_view(window: id, size: Size) -> id {
    let class_name = c"TimeShiftyPanelView";
    let view_class = if let Some(cls) = AnyClass::get(class_name) {
        cls
    } else {
        let superclass = get_class("NSView");
        let Some(mut builder) = ClassBuilder::new(class_name, superclass) else {
            panic!("TimeShiftyPanelView could not be declared");
        };

        builder.add_ivar::<*mut c_void>(c"_ctx");
        builder.add_ivar::<id>(c"_clockTimer");

        register_methods(&mut builder);
        register_settings_actions(&mut builder);

        builder.register()
    };

    let view: id = msg_send![view_class, alloc];
    let frame = NSRect::new(
        NSPoint::new(0.0, 0.0),
        NSSize::new(size.width, size.height),
    );
    let view: id = msg_send![view, initWithFrame: frame];

    (*view).store_ivar::<*mut c_void>("_ctx", std::ptr::null_mut());
    (*view).store_ivar::<id>("_clockTimer", nil);

    // NSViewWidthSizable | NSViewHeightSizable
    let _: () = msg_send![view, setAutoresizingMask: 2u64 | 16u64];

    let area: id = msg_send![get_class("NSTrackingArea"), alloc];
    let area: id = msg_send![
        area,
        initWithRect: frame,
        options: TRACKING_OPTIONS,
        owner: view,
        userInfo: nil
    ];
    let _: () = msg_send![view, addTrackingArea: area];

    let _: () = msg_send![window, setContentView: view];
    view
}

/// Register all methods for the panel view.
///
/// # Safety
/// Must be called during class registration.
unsafe fn register_methods(builder: &mut ClassBuilder) {
    builder.add_method(
        sel!(isFlipped),
        is_flipped as unsafe extern "C-unwind" fn(_, _) -> _,
    );
    builder.add_method(
        sel!(drawRect:),
        draw_rect as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(mouseEntered:),
        mouse_entered as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(clockTick),
        clock_tick as unsafe extern "C-unwind" fn(_, _),
    );
    builder.add_method(
        sel!(drainEvents),
        drain_events as unsafe extern "C-unwind" fn(_, _),
    );

    // Status bar menu actions
    builder.add_method(
        sel!(toggleWindow:),
        toggle_window as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(openSettings:),
        open_settings as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(quitApp:),
        quit_app as unsafe extern "C-unwind" fn(_, _, _),
    );
}

/// Start the 1 s clock timer that redraws the rows.
///
/// # Safety
/// Main thread only; `view` must be a panel view.
pub unsafe fn start_clock_timer(view: id) {
    let prev: id = *(*view).load_ivar::<id>("_clockTimer");
    if prev != nil {
        let _: () = msg_send![prev, invalidate];
    }
    let timer = create_repeating_timer(view, sel!(clockTick), CLOCK_TICK_INTERVAL);
    (*view).store_ivar::<id>("_clockTimer", timer);
}

/// Recompute the rows for the current time and mark the panel dirty.
///
/// # Safety
/// Main thread only.
pub unsafe fn refresh_panel_rows(ctx: &mut AppContext) {
    ctx.rows = panel_rows(ctx.prefs.cities(), &ctx.formatter, &ctx.directory, Utc::now());
    if ctx.panel_view != nil {
        let _: () = msg_send![ctx.panel_view, setNeedsDisplay: YES];
    }
}

// ============================================================================
// View methods (extern "C-unwind" for Objective-C runtime)
// ============================================================================

unsafe extern "C-unwind" fn is_flipped(_this: &AnyObject, _cmd: Sel) -> Bool {
    YES
}

unsafe extern "C-unwind" fn draw_rect(this: &AnyObject, _cmd: Sel, _rect: NSRect) {
    let view = this as *const _ as id;
    let bounds: NSRect = msg_send![this, bounds];
    let ctx = context(view);
    draw_panel(bounds, &ctx.rows);
}

unsafe extern "C-unwind" fn mouse_entered(this: &mut AnyObject, _cmd: Sel, _event: id) {
    let view = this as *mut _ as id;
    context(view).publisher().publish(AppEvent::HoverEntered);
    dispatch_events(view);
}

unsafe extern "C-unwind" fn clock_tick(this: &mut AnyObject, _cmd: Sel) {
    let view = this as *mut _ as id;
    refresh_panel_rows(context(view));
    dispatch_events(view);
}

unsafe extern "C-unwind" fn drain_events(this: &mut AnyObject, _cmd: Sel) {
    dispatch_events(this as *mut _ as id);
}

// ===== Status bar menu actions =====

unsafe fn publish_and_dispatch(view: id, event: AppEvent) {
    debug!(?event, "menu action");
    context(view).publisher().publish(event);
    dispatch_events(view);
}

unsafe extern "C-unwind" fn toggle_window(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish_and_dispatch(this as *mut _ as id, AppEvent::ToggleWindow);
}

unsafe extern "C-unwind" fn open_settings(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish_and_dispatch(this as *mut _ as id, AppEvent::OpenSettings);
}

unsafe extern "C-unwind" fn quit_app(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish_and_dispatch(this as *mut _ as id, AppEvent::Quit);
}
