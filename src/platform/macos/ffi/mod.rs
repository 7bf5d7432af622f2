//! Objective-C runtime helpers for the AppKit layer.

pub mod bridge;
