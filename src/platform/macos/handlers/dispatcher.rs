//! Event dispatcher for handling application events.
//!
//! The dispatcher receives events from the event bus and executes
//! the corresponding actions. It runs on the main thread, either right
//! after a UI callback published something or from a deferred
//! `drainEvents` call, and processes all pending events in batch.
//!
//! ```text
//! EventBus::try_recv() → dispatch_events() → placement / panel / settings
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, warn};

use crate::events::{AppEvent, PreferenceChange};
use crate::model::constants::{ANIMATION_DURATION, COOLDOWN_DURATION};
use crate::placement::{CooldownTicket, PlacementMove, Size};
use crate::platform::macos::app::{context, request_drain, resolve_screen_bounds, AppContext};
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, NSApp, NSPoint, NSRect, NSSize, RcBlock, NO,
};
use crate::platform::macos::ui::{
    open_settings_window, rebuild_settings_content, refresh_panel_rows, update_status_bar_language,
};

/// Guard against a nested drain.
///
/// AppKit can call back into the view (and so into the dispatcher) while
/// an event is being handled; the nested call skips and the outer loop
/// picks up whatever was published.
static DISPATCH_GUARD: AtomicBool = AtomicBool::new(false);

/// Dispatch all pending events from the context's event bus.
///
/// # Safety
///
/// Must be called from the main thread. The view must be the panel view
/// with an attached context.
pub unsafe fn dispatch_events(view: id) {
    if DISPATCH_GUARD
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return;
    }

    let ctx = context(view);
    while let Some(event) = ctx.bus.try_recv() {
        debug!(?event, "{}", event.description());
        dispatch_single_event(ctx, view, &event);
    }

    DISPATCH_GUARD.store(false, Ordering::SeqCst);
}

/// Dispatch a single event.
///
/// # Safety
///
/// Must be called from the main thread. The view pointer must be valid.
unsafe fn dispatch_single_event(ctx: &mut AppContext, view: id, event: &AppEvent) {
    match event {
        AppEvent::HoverEntered => {
            if !ctx.panel_visible {
                return;
            }
            let screen = resolve_screen_bounds(ctx.prefs.get().preferred_screen);
            let size = ctx.panel_size();
            if let Ok(mv) = ctx.placement.on_hover_enter(screen, size) {
                animate_panel(ctx, view, mv, size);
            }
        }

        AppEvent::AnimationFinished { generation } => {
            if let Some(ticket) = ctx.placement.on_animation_complete(*generation) {
                schedule_cooldown(ctx, view, ticket);
            }
        }

        AppEvent::CooldownElapsed { generation } => {
            ctx.placement.on_cooldown_elapsed(CooldownTicket {
                generation: *generation,
            });
        }

        AppEvent::ScreenChanged => replace_panel(ctx, view),

        AppEvent::ToggleWindow => toggle_panel(ctx),

        AppEvent::OpenSettings => open_settings_window(ctx, view),

        AppEvent::SettingsClosed => {
            ctx.settings = Default::default();
            info!("settings window closed");
        }

        AppEvent::Quit => {
            info!("quit requested");
            let _: () = msg_send![NSApp(), terminate: nil];
        }

        AppEvent::PreferencesChanged(change) => apply_preference_change(ctx, view, *change),
    }
}

/// Propagate a stored preference to everything that shows it.
unsafe fn apply_preference_change(ctx: &mut AppContext, view: id, change: PreferenceChange) {
    if change.affects_format() {
        ctx.refresh_formatter();
    }
    if change.affects_language() {
        ctx.refresh_language();
        update_status_bar_language(ctx, view);
    }
    if change.affects_placement() {
        replace_panel(ctx, view);
    }
    refresh_panel_rows(ctx);
    if ctx.settings.is_open() && change.rebuilds_settings() {
        rebuild_settings_content(ctx, view);
    }
}

/// Re-place the panel at its corner on the current target screen.
unsafe fn replace_panel(ctx: &mut AppContext, view: id) {
    let screen = resolve_screen_bounds(ctx.prefs.get().preferred_screen);
    let size = ctx.panel_size();
    match ctx.placement.on_screen_changed(screen, size) {
        Ok(mv) => animate_panel(ctx, view, mv, size),
        Err(e) => warn!(error = %e, "panel not re-placed"),
    }
}

/// Animate the panel window to `mv.origin`; completion publishes
/// `AnimationFinished` with the move's generation.
unsafe fn animate_panel(ctx: &AppContext, view: id, mv: PlacementMove, size: Size) {
    let window = ctx.panel_window;
    let frame = NSRect::new(
        NSPoint::new(mv.origin.x, mv.origin.y),
        NSSize::new(size.width, size.height),
    );

    let changes = RcBlock::new(move |anim_ctx: id| unsafe {
        let _: () = msg_send![anim_ctx, setDuration: ANIMATION_DURATION];
        let timing: id = msg_send![
            get_class("CAMediaTimingFunction"),
            functionWithName: nsstring_id("easeInEaseOut")
        ];
        let _: () = msg_send![anim_ctx, setTimingFunction: timing];
        let animator: id = msg_send![window, animator];
        let _: () = msg_send![animator, setFrame: frame, display: NO];
    });

    let publisher = ctx.publisher();
    let generation = mv.generation;
    let completion = RcBlock::new(move || unsafe {
        publisher.publish(AppEvent::AnimationFinished { generation });
        request_drain(view);
    });

    let _: () = msg_send![
        get_class("NSAnimationContext"),
        runAnimationGroup: &*changes,
        completionHandler: &*completion
    ];
}

/// One-shot timer that publishes `CooldownElapsed` for `ticket`.
unsafe fn schedule_cooldown(ctx: &AppContext, view: id, ticket: CooldownTicket) {
    let publisher = ctx.publisher();
    let generation = ticket.generation;
    let block = RcBlock::new(move |_timer: id| unsafe {
        publisher.publish(AppEvent::CooldownElapsed { generation });
        request_drain(view);
    });
    let _: id = msg_send![
        get_class("NSTimer"),
        scheduledTimerWithTimeInterval: COOLDOWN_DURATION,
        repeats: NO,
        block: &*block
    ];
}

unsafe fn toggle_panel(ctx: &mut AppContext) {
    let window = ctx.panel_window;
    if ctx.panel_visible {
        let _: () = msg_send![window, orderOut: nil];
    } else {
        let _: () = msg_send![window, orderFrontRegardless];
    }
    ctx.panel_visible = !ctx.panel_visible;
    info!(visible = ctx.panel_visible, "panel toggled");
}
