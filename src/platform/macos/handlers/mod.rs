//! Event handlers for the macOS app.

pub mod dispatcher;

pub use dispatcher::dispatch_events;
