//! Screen and run-loop helpers used across modules (handlers, ui).

use tracing::debug;

use crate::placement::{choose_screen, ScreenBounds, ScreenTarget};
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, sel, NSRect, Sel, NO, YES,
};

/// Number of connected screens.
///
/// # Safety
/// Main thread only.
pub unsafe fn screen_count() -> usize {
    let screens: id = msg_send![get_class("NSScreen"), screens];
    msg_send![screens, count]
}

/// Visible frame of the preferred screen, or of the main screen when the
/// preferred one is not connected. `None` when no screen is available.
///
/// # Safety
/// Main thread only.
pub unsafe fn resolve_screen_bounds(preferred: Option<usize>) -> Option<ScreenBounds> {
    let screens: id = msg_send![get_class("NSScreen"), screens];
    let count: usize = msg_send![screens, count];

    let screen: id = match choose_screen(preferred, count) {
        ScreenTarget::Index(i) => msg_send![screens, objectAtIndex: i],
        ScreenTarget::Main => msg_send![get_class("NSScreen"), mainScreen],
    };
    if screen == nil {
        return None;
    }

    let vf: NSRect = msg_send![screen, visibleFrame];
    debug!(
        ?preferred,
        count,
        x = vf.origin.x,
        y = vf.origin.y,
        w = vf.size.width,
        h = vf.size.height,
        "resolved screen"
    );
    Some(ScreenBounds::from_origin_size(
        vf.origin.x,
        vf.origin.y,
        vf.size.width,
        vf.size.height,
    ))
}

/// Ask the host view to drain the event bus on the next run-loop pass.
///
/// # Safety
/// `view` must be a panel view.
pub unsafe fn request_drain(view: id) {
    let _: () = msg_send![
        view,
        performSelectorOnMainThread: sel!(drainEvents),
        withObject: nil,
        waitUntilDone: NO
    ];
}

/// Create a repeating AppKit timer that also fires during menu tracking.
///
/// # Safety
/// The target must be a valid NSObject that responds to the selector.
pub unsafe fn create_repeating_timer(target: id, selector: Sel, interval: f64) -> id {
    let timer: id = msg_send![
        get_class("NSTimer"),
        timerWithTimeInterval: interval,
        target: target,
        selector: selector,
        userInfo: nil,
        repeats: YES
    ];
    // Common modes keep the clock running while the status menu is open
    let run_loop: id = msg_send![get_class("NSRunLoop"), currentRunLoop];
    let _: () = msg_send![run_loop, addTimer: timer, forMode: nsstring_id("kCFRunLoopCommonModes")];
    timer
}
