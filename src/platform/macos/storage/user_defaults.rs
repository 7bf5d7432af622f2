//! [`KeyValueStore`] over `NSUserDefaults.standardUserDefaults`.

use std::ffi::c_void;

use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring_id, string_from_ns};
use crate::preferences::KeyValueStore;

/// The standard user defaults database.
///
/// Must only be used from the main thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserDefaultsStore;

impl UserDefaultsStore {
    pub fn new() -> Self {
        Self
    }

    unsafe fn defaults() -> id {
        msg_send![get_class("NSUserDefaults"), standardUserDefaults]
    }

    /// The stored object for `key` when it is an instance of `class`.
    unsafe fn object_of_class(key: &str, class: &str) -> Option<id> {
        let ud = Self::defaults();
        let obj: id = msg_send![ud, objectForKey: nsstring_id(key)];
        if obj == nil {
            return None;
        }
        let matches: bool = msg_send![obj, isKindOfClass: get_class(class)];
        matches.then_some(obj)
    }
}

impl KeyValueStore for UserDefaultsStore {
    fn get_string(&self, key: &str) -> Option<String> {
        unsafe { Self::object_of_class(key, "NSString").map(|s| string_from_ns(s)) }
    }

    fn set_string(&mut self, key: &str, value: &str) {
        unsafe {
            let ud = Self::defaults();
            let _: () = msg_send![ud, setObject: nsstring_id(value), forKey: nsstring_id(key)];
        }
    }

    fn get_data(&self, key: &str) -> Option<Vec<u8>> {
        unsafe {
            let data = Self::object_of_class(key, "NSData")?;
            let len: usize = msg_send![data, length];
            if len == 0 {
                return Some(Vec::new());
            }
            let bytes: *const c_void = msg_send![data, bytes];
            Some(std::slice::from_raw_parts(bytes as *const u8, len).to_vec())
        }
    }

    fn set_data(&mut self, key: &str, value: &[u8]) {
        unsafe {
            let data: id = msg_send![
                get_class("NSData"),
                dataWithBytes: value.as_ptr() as *const c_void,
                length: value.len()
            ];
            let ud = Self::defaults();
            let _: () = msg_send![ud, setObject: data, forKey: nsstring_id(key)];
        }
    }

    fn get_int(&self, key: &str) -> Option<i64> {
        unsafe {
            Self::object_of_class(key, "NSNumber")?;
            // NSInteger is i64 on 64-bit macOS
            let value: i64 = msg_send![Self::defaults(), integerForKey: nsstring_id(key)];
            Some(value)
        }
    }

    fn set_int(&mut self, key: &str, value: i64) {
        unsafe {
            let ud = Self::defaults();
            let _: () = msg_send![ud, setInteger: value, forKey: nsstring_id(key)];
        }
    }
}
