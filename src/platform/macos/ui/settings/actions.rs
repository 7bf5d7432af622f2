//! Target/action handlers for the settings window controls.
//!
//! They are methods of the panel view class. Each one writes the
//! preference and schedules a drain; the resulting `PreferencesChanged`
//! event rebuilds the window on the next run-loop pass, after the sending
//! control has finished its action.

use objc2::runtime::{AnyObject, ClassBuilder, Sel};
use tracing::{debug, warn};

use crate::clock::TimeFormat;
use crate::events::AppEvent;
use crate::i18n::Language;
use crate::platform::macos::app::{context, request_drain};
use crate::platform::macos::ffi::bridge::{id, msg_send, nil, nsstring_id, sel, string_from_ns};
use crate::platform::macos::ui::settings::window::preview_text;
use crate::settings::{picked_city, selection_for};

/// Register the settings actions on the panel view class.
///
/// # Safety
/// Must be called during class registration.
pub unsafe fn register_settings_actions(builder: &mut ClassBuilder) {
    builder.add_method(sel!(addCity:), add_city as unsafe extern "C-unwind" fn(_, _, _));
    builder.add_method(sel!(removeCity:), remove_city as unsafe extern "C-unwind" fn(_, _, _));
    builder.add_method(sel!(moveCityUp:), move_city_up as unsafe extern "C-unwind" fn(_, _, _));
    builder.add_method(
        sel!(moveCityDown:),
        move_city_down as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(sel!(resetCities:), reset_cities as unsafe extern "C-unwind" fn(_, _, _));
    builder.add_method(
        sel!(timeFormatChanged:),
        time_format_changed as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(controlTextDidChange:),
        control_text_did_change as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(screenChanged:),
        screen_changed as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(languageChanged:),
        language_changed as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(restoreDefaults:),
        restore_defaults as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(windowWillClose:),
        window_will_close as unsafe extern "C-unwind" fn(_, _, _),
    );
}

fn as_view(this: &mut AnyObject) -> id {
    this as *mut _ as id
}

unsafe fn sender_tag(sender: id) -> Option<usize> {
    let tag: isize = msg_send![sender, tag];
    usize::try_from(tag).ok()
}

unsafe fn selected_index(popup: id) -> Option<usize> {
    let index: isize = msg_send![popup, indexOfSelectedItem];
    usize::try_from(index).ok()
}

// ===== Cities tab =====

unsafe extern "C-unwind" fn add_city(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    let view = as_view(this);
    let ctx = context(view);
    let popup = ctx.settings.add_city_popup;
    if popup == nil {
        return;
    }
    let item: id = msg_send![popup, selectedItem];
    if item == nil {
        return;
    }
    let key = string_from_ns(msg_send![item, representedObject]);
    match picked_city(&ctx.directory, &key) {
        Some(city) => {
            ctx.prefs.add_city(selection_for(city, ctx.lang));
            request_drain(view);
        }
        None => warn!(key, "picked city not in directory"),
    }
}

unsafe extern "C-unwind" fn remove_city(this: &mut AnyObject, _cmd: Sel, sender: id) {
    let view = as_view(this);
    if let Some(index) = sender_tag(sender) {
        if context(view).prefs.remove_city(index).is_some() {
            request_drain(view);
        }
    }
}

unsafe extern "C-unwind" fn move_city_up(this: &mut AnyObject, _cmd: Sel, sender: id) {
    let view = as_view(this);
    if let Some(index) = sender_tag(sender).filter(|i| *i > 0) {
        if context(view).prefs.move_city(index, index - 1) {
            request_drain(view);
        }
    }
}

unsafe extern "C-unwind" fn move_city_down(this: &mut AnyObject, _cmd: Sel, sender: id) {
    let view = as_view(this);
    if let Some(index) = sender_tag(sender) {
        if context(view).prefs.move_city(index, index + 1) {
            request_drain(view);
        }
    }
}

unsafe extern "C-unwind" fn reset_cities(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    let view = as_view(this);
    context(view).prefs.reset_cities();
    request_drain(view);
}

// ===== Display tab =====

unsafe extern "C-unwind" fn time_format_changed(this: &mut AnyObject, _cmd: Sel, sender: id) {
    let view = as_view(this);
    let Some(format) = selected_index(sender).and_then(|i| TimeFormat::ALL.get(i).copied()) else {
        return;
    };
    context(view).prefs.set_time_format(format);
    request_drain(view);
}

/// Delegate callback of the custom pattern field: store and preview the
/// pattern on every keystroke.
unsafe extern "C-unwind" fn control_text_did_change(this: &mut AnyObject, _cmd: Sel, notif: id) {
    let view = as_view(this);
    let ctx = context(view);
    let field: id = msg_send![notif, object];
    if field == nil || field != ctx.settings.custom_format_field {
        return;
    }

    let pattern = string_from_ns(msg_send![field, stringValue]);
    ctx.prefs.set_custom_format(&pattern);
    if ctx.settings.preview_label != nil {
        let text = preview_text(&pattern, ctx.lang);
        let _: () = msg_send![ctx.settings.preview_label, setStringValue: nsstring_id(&text)];
    }
    request_drain(view);
}

unsafe extern "C-unwind" fn screen_changed(this: &mut AnyObject, _cmd: Sel, sender: id) {
    let view = as_view(this);
    // Entry 0 is the main screen, entry n is screen n - 1.
    let Some(index) = selected_index(sender) else {
        return;
    };
    let screen = index.checked_sub(1);
    context(view).prefs.set_preferred_screen(screen);
    request_drain(view);
}

unsafe extern "C-unwind" fn language_changed(this: &mut AnyObject, _cmd: Sel, sender: id) {
    let view = as_view(this);
    let Some(language) = selected_index(sender).and_then(|i| Language::ALL.get(i).copied()) else {
        return;
    };
    context(view).prefs.set_language(language);
    request_drain(view);
}

unsafe extern "C-unwind" fn restore_defaults(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    let view = as_view(this);
    context(view).prefs.restore_defaults();
    request_drain(view);
}

// ===== Window delegate =====

unsafe extern "C-unwind" fn window_will_close(this: &mut AnyObject, _cmd: Sel, _notif: id) {
    let view = as_view(this);
    debug!("settings window closing");
    let ctx = context(view);
    ctx.settings = Default::default();
    ctx.publisher().publish(AppEvent::SettingsClosed);
    request_drain(view);
}
