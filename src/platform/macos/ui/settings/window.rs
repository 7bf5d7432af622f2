//! Settings window management.
//!
//! The window is non-modal. Its content is rebuilt from the preferences
//! whenever they change, keeping the selected tab.

use chrono::Utc;
use tracing::{debug, info};

use crate::clock::TimeFormat;
use crate::i18n::{tr, DisplayLanguage, Key};
use crate::platform::macos::app::{screen_count, AppContext};
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, sel, NSApp, NSPoint, NSRect, NSSize, Sel, NO, YES,
};
use crate::settings::{
    add_city_candidates, city_list_entries, format_examples, format_preview, language_options,
    screen_options, time_format_options,
};

const WINDOW_WIDTH: f64 = 520.0;
const WINDOW_HEIGHT: f64 = 460.0;

/// Height of a row in the city list.
const LIST_ROW_HEIGHT: f64 = 32.0;

// ============================================================================
// Control helpers
// ============================================================================

fn rect(x: f64, y: f64, w: f64, h: f64) -> NSRect {
    NSRect::new(NSPoint::new(x, y), NSSize::new(w, h))
}

/// Static, non-editable label.
unsafe fn mk_label(frame: NSRect, text: &str) -> id {
    let lbl: id = msg_send![get_class("NSTextField"), alloc];
    let lbl: id = msg_send![lbl, initWithFrame: frame];
    let _: () = msg_send![lbl, setBezeled: NO];
    let _: () = msg_send![lbl, setDrawsBackground: NO];
    let _: () = msg_send![lbl, setEditable: NO];
    let _: () = msg_send![lbl, setSelectable: NO];
    let _: () = msg_send![lbl, setStringValue: nsstring_id(text)];
    lbl
}

/// Label in the small system font.
unsafe fn mk_small_label(frame: NSRect, text: &str) -> id {
    let lbl = mk_label(frame, text);
    let font: id = msg_send![get_class("NSFont"), systemFontOfSize: 11.0f64];
    let _: () = msg_send![lbl, setFont: font];
    let color: id = msg_send![get_class("NSColor"), secondaryLabelColor];
    let _: () = msg_send![lbl, setTextColor: color];
    lbl
}

/// Push button sending `action` to the view, with the given tag.
unsafe fn mk_button(frame: NSRect, title: &str, view: id, action: Sel, tag: isize) -> id {
    let btn: id = msg_send![get_class("NSButton"), alloc];
    let btn: id = msg_send![btn, initWithFrame: frame];
    // NSBezelStyleRounded
    let _: () = msg_send![btn, setBezelStyle: 1usize];
    let _: () = msg_send![btn, setTitle: nsstring_id(title)];
    let _: () = msg_send![btn, setTarget: view];
    let _: () = msg_send![btn, setAction: action];
    let _: () = msg_send![btn, setTag: tag];
    btn
}

/// Pop-up button filled with `titles`, `selected` pre-selected.
unsafe fn mk_popup(
    frame: NSRect,
    titles: &[&str],
    selected: usize,
    view: id,
    action: Option<Sel>,
) -> id {
    let popup: id = msg_send![get_class("NSPopUpButton"), alloc];
    let popup: id = msg_send![popup, initWithFrame: frame, pullsDown: NO];
    for title in titles {
        let _: () = msg_send![popup, addItemWithTitle: nsstring_id(title)];
    }
    let _: () = msg_send![popup, selectItemAtIndex: selected as isize];
    if let Some(action) = action {
        let _: () = msg_send![popup, setTarget: view];
        let _: () = msg_send![popup, setAction: action];
    }
    popup
}

unsafe fn add(parent: id, child: id) {
    let _: () = msg_send![parent, addSubview: child];
}

// ============================================================================
// Window lifecycle
// ============================================================================

/// Open the settings window, or bring it to the front when already open.
///
/// When the window closes, the view's `windowWillClose:` publishes
/// `AppEvent::SettingsClosed`.
///
/// # Safety
/// - `view` must be the panel view with an attached context.
/// - Must be called from main thread with valid autorelease pool.
pub unsafe fn open_settings_window(ctx: &mut AppContext, view: id) {
    let app: id = NSApp();
    let _: () = msg_send![app, activateIgnoringOtherApps: YES];

    if ctx.settings.is_open() {
        let _: () = msg_send![ctx.settings.window, makeKeyAndOrderFront: nil];
        return;
    }

    // NSTitledWindowMask (1) | NSClosableWindowMask (2) = 3
    let style: u64 = 1 | 2;
    let settings: id = msg_send![get_class("NSWindow"), alloc];
    let settings: id = msg_send![
        settings,
        initWithContentRect: rect(0.0, 0.0, WINDOW_WIDTH, WINDOW_HEIGHT),
        styleMask: style,
        backing: 2u64, // NSBackingStoreBuffered
        defer: NO
    ];
    // Same level as the panel so it is never hidden behind it.
    let _: () = msg_send![settings, setLevel: 3isize];
    let _: () = msg_send![settings, setDelegate: view];

    center_on_cursor_screen(settings);

    ctx.settings.window = settings;
    ctx.settings.selected_tab = 0;
    rebuild_settings_content(ctx, view);

    let _: () = msg_send![settings, makeKeyAndOrderFront: nil];
    info!("settings window opened");
}

/// Center on the screen where the cursor is (not just main screen).
unsafe fn center_on_cursor_screen(window: id) {
    let mouse_loc: NSPoint = msg_send![get_class("NSEvent"), mouseLocation];
    let screens: id = msg_send![get_class("NSScreen"), screens];
    let count: usize = msg_send![screens, count];
    let mut target_screen: id = msg_send![get_class("NSScreen"), mainScreen];

    for i in 0..count {
        let scr: id = msg_send![screens, objectAtIndex: i];
        let frame: NSRect = msg_send![scr, frame];
        if mouse_loc.x >= frame.origin.x
            && mouse_loc.x < frame.origin.x + frame.size.width
            && mouse_loc.y >= frame.origin.y
            && mouse_loc.y < frame.origin.y + frame.size.height
        {
            target_screen = scr;
            break;
        }
    }
    if target_screen == nil {
        let _: () = msg_send![window, center];
        return;
    }

    let screen_frame: NSRect = msg_send![target_screen, frame];
    let window_frame: NSRect = msg_send![window, frame];
    let origin = NSPoint::new(
        screen_frame.origin.x + (screen_frame.size.width - window_frame.size.width) / 2.0,
        screen_frame.origin.y + (screen_frame.size.height - window_frame.size.height) / 2.0,
    );
    let _: () = msg_send![window, setFrameOrigin: origin];
}

/// Replace the window content with controls reflecting the current
/// preferences. The selected tab survives the rebuild.
///
/// # Safety
/// Main thread only; the settings window must be open.
pub unsafe fn rebuild_settings_content(ctx: &mut AppContext, view: id) {
    let window = ctx.settings.window;
    if window == nil {
        return;
    }
    if ctx.settings.tab_view != nil {
        let item: id = msg_send![ctx.settings.tab_view, selectedTabViewItem];
        if item != nil {
            ctx.settings.selected_tab = msg_send![ctx.settings.tab_view, indexOfTabViewItem: item];
        }
    }

    let lang = ctx.lang;
    let _: () = msg_send![window, setTitle: nsstring_id(tr(Key::SettingsTitle, lang))];

    let content: id = msg_send![get_class("NSView"), alloc];
    let content: id =
        msg_send![content, initWithFrame: rect(0.0, 0.0, WINDOW_WIDTH, WINDOW_HEIGHT)];

    let tab_view: id = msg_send![get_class("NSTabView"), alloc];
    let tab_view: id = msg_send![
        tab_view,
        initWithFrame: rect(10.0, 10.0, WINDOW_WIDTH - 20.0, WINDOW_HEIGHT - 20.0)
    ];
    let area: NSRect = msg_send![tab_view, contentRect];
    let (w, h) = (area.size.width, area.size.height);

    let cities_pane = build_cities_tab(ctx, view, w, h);
    let display_pane = build_display_tab(ctx, view, w, h);

    for (label, pane) in [
        (tr(Key::TabCities, lang), cities_pane),
        (tr(Key::TabDisplay, lang), display_pane),
    ] {
        let item: id = msg_send![get_class("NSTabViewItem"), alloc];
        let item: id = msg_send![item, initWithIdentifier: nsstring_id(label)];
        let _: () = msg_send![item, setLabel: nsstring_id(label)];
        let _: () = msg_send![item, setView: pane];
        let _: () = msg_send![tab_view, addTabViewItem: item];
    }
    let _: () = msg_send![tab_view, selectTabViewItemAtIndex: ctx.settings.selected_tab];

    add(content, tab_view);
    let _: () = msg_send![window, setContentView: content];
    ctx.settings.tab_view = tab_view;
    debug!(tab = ctx.settings.selected_tab, "settings content rebuilt");
}

// ============================================================================
// Cities tab
// ============================================================================

unsafe fn build_cities_tab(ctx: &mut AppContext, view: id, w: f64, h: f64) -> id {
    let lang = ctx.lang;
    let pane: id = msg_send![get_class("NSView"), alloc];
    let pane: id = msg_send![pane, initWithFrame: rect(0.0, 0.0, w, h)];

    add(pane, mk_label(rect(16.0, h - 34.0, w - 32.0, 20.0), tr(Key::CitiesTitle, lang)));

    // Selected cities, in a scroll view
    let list_bottom = 110.0;
    let list_height = h - 44.0 - list_bottom;
    let scroll: id = msg_send![get_class("NSScrollView"), alloc];
    let scroll: id = msg_send![
        scroll,
        initWithFrame: rect(16.0, list_bottom, w - 32.0, list_height)
    ];
    let _: () = msg_send![scroll, setHasVerticalScroller: YES];
    // NSBezelBorder
    let _: () = msg_send![scroll, setBorderType: 2usize];
    let _: () = msg_send![scroll, setDrawsBackground: NO];

    let list = build_city_list(ctx, view, w - 34.0, list_height - 2.0);
    let _: () = msg_send![scroll, setDocumentView: list];
    let doc_frame: NSRect = msg_send![list, frame];
    let clip: id = msg_send![scroll, contentView];
    let _: () = msg_send![
        clip,
        scrollToPoint: NSPoint::new(0.0, (doc_frame.size.height - (list_height - 2.0)).max(0.0))
    ];
    let _: () = msg_send![scroll, reflectScrolledClipView: clip];
    add(pane, scroll);

    // Add-city picker, sorted by UTC offset
    add(pane, mk_label(rect(16.0, 76.0, 100.0, 20.0), tr(Key::CitiesSelectCity, lang)));
    let candidates = add_city_candidates(&ctx.directory, Utc::now());
    let titles: Vec<&str> = candidates.iter().map(|c| c.label.as_str()).collect();
    let popup = mk_popup(
        rect(118.0, 72.0, w - 218.0, 26.0),
        &titles,
        0,
        view,
        None,
    );
    let items: id = msg_send![popup, itemArray];
    for (index, candidate) in candidates.iter().enumerate() {
        let item: id = msg_send![items, objectAtIndex: index];
        let _: () = msg_send![item, setRepresentedObject: nsstring_id(candidate.key())];
    }
    let fixed_pitch: id = msg_send![
        get_class("NSFont"),
        monospacedSystemFontOfSize: 12.0f64,
        weight: 0.0f64
    ];
    let _: () = msg_send![popup, setFont: fixed_pitch];
    add(pane, popup);
    ctx.settings.add_city_popup = popup;

    add(
        pane,
        mk_button(rect(w - 96.0, 70.0, 80.0, 30.0), tr(Key::CitiesAdd, lang), view, sel!(addCity:), 0),
    );
    add(
        pane,
        mk_small_label(rect(16.0, 48.0, w - 32.0, 18.0), tr(Key::CitiesAddDescription, lang)),
    );

    add(
        pane,
        mk_button(
            rect(12.0, 8.0, 160.0, 30.0),
            tr(Key::CitiesResetToDefault, lang),
            view,
            sel!(resetCities:),
            0,
        ),
    );

    pane
}

/// One row per selected city: name, zone, short time and the row buttons,
/// tagged with the row index.
unsafe fn build_city_list(ctx: &AppContext, view: id, w: f64, min_height: f64) -> id {
    let lang = ctx.lang;
    let entries = city_list_entries(ctx.prefs.cities(), &ctx.directory, Utc::now());
    let count = entries.len();
    let doc_h = (count as f64 * LIST_ROW_HEIGHT).max(min_height);

    let list: id = msg_send![get_class("NSView"), alloc];
    let list: id = msg_send![list, initWithFrame: rect(0.0, 0.0, w, doc_h)];

    for (index, entry) in entries.iter().enumerate() {
        let y = doc_h - (index + 1) as f64 * LIST_ROW_HEIGHT;
        let tag = index as isize;

        add(list, mk_label(rect(8.0, y + 7.0, 120.0, 18.0), &entry.name));
        add(list, mk_small_label(rect(130.0, y + 8.0, 130.0, 16.0), &entry.time_zone));
        add(list, mk_label(rect(262.0, y + 7.0, 48.0, 18.0), &entry.time));

        let up = mk_button(
            rect(w - 186.0, y + 2.0, 56.0, 28.0),
            tr(Key::CitiesMoveUp, lang),
            view,
            sel!(moveCityUp:),
            tag,
        );
        let _: () = msg_send![up, setEnabled: index > 0];
        add(list, up);

        let down = mk_button(
            rect(w - 128.0, y + 2.0, 56.0, 28.0),
            tr(Key::CitiesMoveDown, lang),
            view,
            sel!(moveCityDown:),
            tag,
        );
        let _: () = msg_send![down, setEnabled: index + 1 < count];
        add(list, down);

        add(
            list,
            mk_button(
                rect(w - 70.0, y + 2.0, 66.0, 28.0),
                tr(Key::CitiesDelete, lang),
                view,
                sel!(removeCity:),
                tag,
            ),
        );
    }
    list
}

// ============================================================================
// Display tab
// ============================================================================

unsafe fn build_display_tab(ctx: &mut AppContext, view: id, w: f64, h: f64) -> id {
    let lang = ctx.lang;
    let prefs = ctx.prefs.get().clone();
    let pane: id = msg_send![get_class("NSView"), alloc];
    let pane: id = msg_send![pane, initWithFrame: rect(0.0, 0.0, w, h)];

    let label_x = 16.0;
    let control_x = 160.0;
    let control_w = w - control_x - 16.0;

    // Time format
    let top = h - 38.0;
    add(pane, mk_label(rect(label_x, top, 140.0, 20.0), tr(Key::DisplayTimeFormat, lang)));
    let options = time_format_options(lang);
    let titles: Vec<&str> = options.iter().map(|(_, title)| *title).collect();
    let selected = TimeFormat::ALL
        .iter()
        .position(|f| *f == prefs.time_format)
        .unwrap_or(0);
    add(
        pane,
        mk_popup(
            rect(control_x, top - 4.0, control_w, 26.0),
            &titles,
            selected,
            view,
            Some(sel!(timeFormatChanged:)),
        ),
    );

    // Custom pattern, preview and examples
    let is_custom = prefs.time_format == TimeFormat::Custom;
    let field: id = msg_send![get_class("NSTextField"), alloc];
    let field: id = msg_send![field, initWithFrame: rect(control_x, top - 38.0, control_w, 24.0)];
    let _: () = msg_send![field, setStringValue: nsstring_id(&prefs.custom_format)];
    let cell: id = msg_send![field, cell];
    let _: () = msg_send![
        cell,
        setPlaceholderString: nsstring_id(tr(Key::CustomFormatPlaceholder, lang))
    ];
    let _: () = msg_send![field, setEnabled: is_custom];
    let _: () = msg_send![field, setDelegate: view];
    add(pane, field);
    ctx.settings.custom_format_field = field;

    let preview = mk_label(
        rect(control_x, top - 64.0, control_w, 20.0),
        &preview_text(&prefs.custom_format, lang),
    );
    add(pane, preview);
    ctx.settings.preview_label = preview;

    add(
        pane,
        mk_small_label(
            rect(control_x, top - 88.0, control_w, 16.0),
            tr(Key::CustomFormatExamples, lang),
        ),
    );
    for (row, (pattern, description)) in format_examples(lang).into_iter().enumerate() {
        let y = top - 106.0 - row as f64 * 16.0;
        add(
            pane,
            mk_small_label(
                rect(control_x + 8.0, y, control_w - 8.0, 16.0),
                &format!("{pattern}  →  {description}"),
            ),
        );
    }

    // Screen
    let screen_y = top - 216.0;
    add(pane, mk_label(rect(label_x, screen_y, 140.0, 20.0), tr(Key::DisplayScreen, lang)));
    let screens = screen_options(screen_count(), lang);
    let titles: Vec<&str> = screens.iter().map(|(_, title)| title.as_str()).collect();
    let selected = screens
        .iter()
        .position(|(index, _)| *index == prefs.preferred_screen)
        .unwrap_or(0);
    add(
        pane,
        mk_popup(
            rect(control_x, screen_y - 4.0, control_w, 26.0),
            &titles,
            selected,
            view,
            Some(sel!(screenChanged:)),
        ),
    );

    // Language
    let lang_y = screen_y - 40.0;
    add(pane, mk_label(rect(label_x, lang_y, 140.0, 20.0), tr(Key::DisplayLanguage, lang)));
    let languages = language_options();
    let titles: Vec<&str> = languages.iter().map(|(_, title)| *title).collect();
    let selected = languages
        .iter()
        .position(|(l, _)| *l == prefs.language)
        .unwrap_or(0);
    add(
        pane,
        mk_popup(
            rect(control_x, lang_y - 4.0, control_w, 26.0),
            &titles,
            selected,
            view,
            Some(sel!(languageChanged:)),
        ),
    );

    add(
        pane,
        mk_button(
            rect(12.0, 8.0, 180.0, 30.0),
            tr(Key::RestoreDefaults, lang),
            view,
            sel!(restoreDefaults:),
            0,
        ),
    );

    pane
}

/// "Preview: …" line under the custom field.
pub fn preview_text(custom: &str, lang: DisplayLanguage) -> String {
    let rendered = format_preview(custom, &chrono::Local::now()).unwrap_or_default();
    format!("{} {}", tr(Key::CustomFormatPreview, lang), rendered)
}
