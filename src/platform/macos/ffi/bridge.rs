//! Thin layer over objc2 used by every AppKit module.
//!
//! AppKit objects are handled as raw `id` pointers and driven with
//! `msg_send!`, the way the rest of the macOS code is written.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

use std::ffi::{c_char, CStr, CString};

pub use objc2::runtime::{AnyClass, AnyObject, Bool, Sel};
pub use objc2::{msg_send, sel, ClassType};

pub use block2::RcBlock;
pub use objc2::rc::Retained;
pub use objc2_app_kit::NSApplication;
pub use objc2_core_foundation::CGFloat;
pub use objc2_foundation::{NSPoint, NSRect, NSSize, NSString};

use objc2::encode::Encode;

/// Objective-C object pointer.
pub type id = *mut AnyObject;

/// Null object pointer.
pub const nil: id = std::ptr::null_mut();

/// Objective-C `YES`.
pub const YES: Bool = Bool::YES;

/// Objective-C `NO`.
pub const NO: Bool = Bool::NO;

/// The shared NSApplication instance.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> id {
    unsafe { msg_send![NSApplication::class(), sharedApplication] }
}

/// NSString as a raw, autoreleased `id`, for passing straight to `msg_send!`.
///
/// # Safety
/// Must be called with an autorelease pool in place (always true inside
/// AppKit callbacks and the main run loop).
#[inline]
pub unsafe fn nsstring_id(s: &str) -> id {
    let ns = NSString::from_str(s);
    Retained::autorelease_return(ns) as id
}

/// Copies an NSString into a Rust `String`; `nil` yields an empty string.
///
/// # Safety
/// `ns` must be nil or a valid NSString.
pub unsafe fn string_from_ns(ns: id) -> String {
    if ns == nil {
        return String::new();
    }
    let ptr: *const c_char = msg_send![ns, UTF8String];
    if ptr.is_null() {
        return String::new();
    }
    CStr::from_ptr(ptr).to_string_lossy().into_owned()
}

/// Get a class by name, panicking if the runtime does not know it.
#[inline]
pub fn get_class(name: &str) -> &'static AnyClass {
    let c_name = CString::new(name).expect("class name contains NUL");
    AnyClass::get(&c_name).unwrap_or_else(|| panic!("Class '{}' not found", name))
}

/// Typed access to instance variables of custom classes.
pub trait ObjectExt {
    /// Load a reference to an instance variable.
    ///
    /// # Safety
    /// The ivar must exist and be of type T. Main thread only for UI objects.
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T;

    /// Store a value in an instance variable.
    ///
    /// # Safety
    /// The ivar must exist and be of type T. Main thread only for UI objects.
    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T);
}

impl ObjectExt for AnyObject {
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T {
        let cls = self.class();
        let c_name = CString::new(name).expect("ivar name contains NUL");
        let ivar = cls
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        ivar.load::<T>(self)
    }

    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T) {
        let cls = self.class();
        let c_name = CString::new(name).expect("ivar name contains NUL");
        let ivar = cls
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        *ivar.load_mut::<T>(self) = value;
    }
}

/// Run a closure within an autorelease pool.
#[inline]
pub fn autoreleasepool<R, F: FnOnce() -> R>(f: F) -> R {
    unsafe {
        let pool: id = msg_send![get_class("NSAutoreleasePool"), new];
        let result = f();
        let _: () = msg_send![pool, drain];
        result
    }
}
