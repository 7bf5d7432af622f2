//! macOS-specific entry point and application logic.
//!
//! Builds the app context, the panel window and the status item, then
//! hands control to the AppKit run loop. The panel view class lives in
//! platform/macos/ui/panel/view.rs.

use time_shifty::platform::macos::app::{attach_context, resolve_screen_bounds, AppContext};
use time_shifty::platform::macos::ffi::bridge::{
    autoreleasepool, msg_send, NSApp, NSPoint, NSRect, NSSize, YES,
};
use time_shifty::platform::macos::input::{install_screen_observer, install_termination_observer};
use time_shifty::platform::macos::ui::{
    create_panel, install_status_bar, refresh_panel_rows, start_clock_timer,
};
use tracing::{info, warn};

/// Main entry point for macOS.
pub fn run() {
    autoreleasepool(|| unsafe {
        let app = NSApp();
        // NSApplicationActivationPolicyAccessory = 1: no Dock icon
        let _: bool = msg_send![app, setActivationPolicy: 1i64];

        // The context lives for the whole process
        let ctx_ptr = Box::into_raw(Box::new(AppContext::new()));
        let ctx = &mut *ctx_ptr;

        let size = ctx.panel_size();
        let (window, view) = create_panel(size);
        attach_context(view, ctx_ptr);
        ctx.panel_window = window;
        ctx.panel_view = view;

        let screen = resolve_screen_bounds(ctx.prefs.get().preferred_screen);
        match ctx.placement.place_initial(screen, size) {
            Ok(origin) => {
                let frame = NSRect::new(
                    NSPoint::new(origin.x, origin.y),
                    NSSize::new(size.width, size.height),
                );
                let _: () = msg_send![window, setFrame: frame, display: YES];
            }
            Err(e) => warn!(error = %e, "panel shown at its default frame"),
        }

        refresh_panel_rows(ctx);
        start_clock_timer(view);

        install_status_bar(ctx, view);
        install_screen_observer(view, ctx.publisher());
        install_termination_observer(view);

        let _: () = msg_send![window, orderFrontRegardless];
        info!(cities = ctx.prefs.cities().len(), lang = ?ctx.lang, "time-shifty running");

        let _: () = msg_send![app, run];
    });
}
