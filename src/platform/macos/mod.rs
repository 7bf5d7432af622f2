//! macOS implementation using Cocoa/AppKit via objc2.
//!
//! - FFI helpers for the Objective-C runtime
//! - UI components (floating panel, status bar menu, settings window)
//! - Input (screen-parameter and termination observers)
//! - Storage (NSUserDefaults backend for the preferences store)
//! - The event dispatcher tying them together

pub mod app;
pub mod ffi;
pub mod handlers;
pub mod input;
pub mod storage;
pub mod ui;

pub use app::*;
pub use ffi::bridge;
pub use handlers::*;
pub use storage::*;
pub use ui::*;
