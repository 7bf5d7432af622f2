//! Application state shared by all AppKit callbacks.
//!
//! One [`AppContext`] is created at launch and lives until the process
//! exits. Its pointer is stored in the panel view's `_ctx` ivar; callbacks
//! reach it with [`context`].

use std::ffi::c_void;

use tracing::debug;

use crate::clock::ClockFormatter;
use crate::directory::CityDirectory;
use crate::events::{EventBus, EventPublisher};
use crate::i18n::{DisplayLanguage, Language};
use crate::panel::PanelRow;
use crate::placement::{panel_size, PlacementController, Size};
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, string_from_ns, ObjectExt};
use crate::platform::macos::storage::UserDefaultsStore;
use crate::preferences::PreferencesStore;

/// Everything the app mutates at runtime.
pub struct AppContext {
    pub bus: EventBus,
    pub prefs: PreferencesStore<UserDefaultsStore>,
    pub placement: PlacementController,
    pub directory: CityDirectory,
    pub formatter: ClockFormatter,
    pub lang: DisplayLanguage,

    /// Rows drawn by the panel view, refreshed every tick.
    pub rows: Vec<PanelRow>,
    pub panel_visible: bool,

    pub panel_window: id,
    pub panel_view: id,
    pub status_item: id,
    pub settings: SettingsRefs,
}

/// Controls of the open settings window that actions read back from.
pub struct SettingsRefs {
    pub window: id,
    pub tab_view: id,
    /// Tab shown when the content is rebuilt.
    pub selected_tab: isize,
    pub add_city_popup: id,
    pub custom_format_field: id,
    pub preview_label: id,
}

impl Default for SettingsRefs {
    fn default() -> Self {
        Self {
            window: nil,
            tab_view: nil,
            selected_tab: 0,
            add_city_popup: nil,
            custom_format_field: nil,
            preview_label: nil,
        }
    }
}

impl SettingsRefs {
    pub fn is_open(&self) -> bool {
        self.window != nil
    }
}

impl AppContext {
    /// Loads preferences and derives the display state from them.
    ///
    /// # Safety
    /// Main thread only (reads NSUserDefaults and the system locale).
    pub unsafe fn new() -> Self {
        let bus = EventBus::new();
        let prefs = PreferencesStore::load(UserDefaultsStore::new()).with_publisher(bus.publisher());
        let lang = prefs.get().language.resolve(system_language().as_deref());
        let formatter = ClockFormatter::new(prefs.effective_pattern());

        Self {
            bus,
            prefs,
            placement: PlacementController::new(),
            directory: CityDirectory::new(lang),
            formatter,
            lang,
            rows: Vec::new(),
            panel_visible: true,
            panel_window: nil,
            panel_view: nil,
            status_item: nil,
            settings: SettingsRefs::default(),
        }
    }

    pub fn publisher(&self) -> EventPublisher {
        self.bus.publisher()
    }

    /// Panel size for the current city selection.
    pub fn panel_size(&self) -> Size {
        panel_size(self.prefs.cities().len())
    }

    /// Re-resolves the display language after a language change.
    ///
    /// # Safety
    /// Main thread only.
    pub unsafe fn refresh_language(&mut self) {
        let language: Language = self.prefs.get().language;
        self.lang = language.resolve(system_language().as_deref());
        self.directory.set_language(self.lang);
        debug!(?language, display = ?self.lang, "display language resolved");
    }

    /// Rebuilds the clock formatter after a format change.
    pub fn refresh_formatter(&mut self) {
        self.formatter = ClockFormatter::new(self.prefs.effective_pattern());
    }
}

/// First entry of `NSLocale.preferredLanguages`, e.g. `zh-Hans-CN`.
///
/// # Safety
/// Must be called with an autorelease pool in place.
pub unsafe fn system_language() -> Option<String> {
    let languages: id = msg_send![get_class("NSLocale"), preferredLanguages];
    if languages == nil {
        return None;
    }
    let count: usize = msg_send![languages, count];
    if count == 0 {
        return None;
    }
    let first: id = msg_send![languages, objectAtIndex: 0usize];
    Some(string_from_ns(first))
}

/// Stores the context pointer in the host view.
///
/// # Safety
/// `view` must be a panel view; `ctx` must come from `Box::into_raw` and
/// outlive the view.
pub unsafe fn attach_context(view: id, ctx: *mut AppContext) {
    (*view).store_ivar::<*mut c_void>("_ctx", ctx as *mut c_void);
}

/// The context attached to `view`.
///
/// # Safety
/// Main thread only, and only after [`attach_context`]. Callers must not
/// hold two references at once; the dispatcher guard serializes the
/// mutating paths.
pub unsafe fn context<'a>(view: id) -> &'a mut AppContext {
    let raw = *(*view).load_ivar::<*mut c_void>("_ctx");
    &mut *(raw as *mut AppContext)
}
