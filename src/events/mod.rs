//! Event system for decoupled inter-module communication.
//!
//! A simple publish/subscribe mechanism over `mpsc` channels. The panel
//! view, the status menu, animation and timer callbacks and the
//! preferences store publish; the dispatcher drains on the main thread.
//!
//! ```text
//! ┌─────────────┐  ┌─────────────┐  ┌─────────────┐  ┌─────────────┐
//! │ Panel hover │  │ Status menu │  │ Anim/timers │  │ Preferences │
//! └──────┬──────┘  └──────┬──────┘  └──────┬──────┘  └──────┬──────┘
//!        │ publish()      │                │                │
//!        ▼                ▼                ▼                ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          EventBus                               │
//! └────────────────────────────────┬────────────────────────────────┘
//!                                  │ drain()
//!                                  ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Dispatcher                              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - [`types`]: Event definitions (`AppEvent`, `PreferenceChange`)
//! - [`bus`]: `EventBus` and `EventPublisher` types

pub mod bus;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use types::{AppEvent, PreferenceChange};
