//! Notification observers for screen and termination events.

use tracing::info;

use crate::events::{AppEvent, EventPublisher};
use crate::platform::macos::app::request_drain;
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, ObjectExt, RcBlock};

/// Publish `ScreenChanged` whenever displays are added, removed or
/// rearranged.
///
/// # Safety
/// - `view` must be the panel view.
/// - Must be called from main thread with valid autorelease pool.
pub unsafe fn install_screen_observer(view: id, publisher: EventPublisher) {
    let center: id = msg_send![get_class("NSNotificationCenter"), defaultCenter];

    let block = RcBlock::new(move |_note: id| unsafe {
        publisher.publish(AppEvent::ScreenChanged);
        request_drain(view);
    });

    let name: id = msg_send![
        get_class("NSString"),
        stringWithUTF8String: c"NSApplicationDidChangeScreenParametersNotification".as_ptr()
    ];
    let _: id =
        msg_send![center, addObserverForName: name, object: nil, queue: nil, usingBlock: &*block];
}

/// Stop the clock timer when the app terminates.
///
/// # Safety
/// - `view` must be the panel view.
/// - Must be called from main thread with valid autorelease pool.
pub unsafe fn install_termination_observer(view: id) {
    let center: id = msg_send![get_class("NSNotificationCenter"), defaultCenter];

    let block = RcBlock::new(move |_note: id| unsafe {
        let timer: id = *(*view).load_ivar::<id>("_clockTimer");
        if timer != nil {
            let _: () = msg_send![timer, invalidate];
            (*view).store_ivar::<id>("_clockTimer", nil);
        }
        info!("terminating");
    });

    let name: id = msg_send![
        get_class("NSString"),
        stringWithUTF8String: c"NSApplicationWillTerminateNotification".as_ptr()
    ];
    let _: id =
        msg_send![center, addObserverForName: name, object: nil, queue: nil, usingBlock: &*block];
}
