//! Queue between AppKit callbacks and the dispatcher.
//!
//! Callbacks, timer blocks and the preferences store publish through
//! [`EventPublisher`] clones; the dispatcher pulls events off the
//! [`EventBus`] held by the app context, on the main thread.

use std::sync::mpsc::{self, Receiver, Sender};

use super::types::AppEvent;

/// Receiving end of the app's event queue, plus the sender publishers
/// are cloned from.
pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// A new handle for publishing onto this bus.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Next queued event, if any. Never blocks.
    pub fn try_recv(&self) -> Option<AppEvent> {
        // The bus holds a sender itself, so the channel never disconnects.
        self.receiver.try_recv().ok()
    }

    /// Everything queued so far, oldest first.
    pub fn drain(&self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending half handed to whatever needs to raise an [`AppEvent`].
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<AppEvent>,
}

impl EventPublisher {
    /// Queue `event` for the next drain. Dropped once the bus is gone.
    pub fn publish(&self, event: AppEvent) {
        if self.sender.send(event).is_err() {
            tracing::debug!("event bus closed, dropping event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::PreferenceChange;

    #[test]
    fn test_create_bus() {
        let bus = EventBus::new();
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_publish_and_receive_in_order() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(AppEvent::HoverEntered);
        publisher.publish(AppEvent::AnimationFinished { generation: 1 });
        publisher.publish(AppEvent::CooldownElapsed { generation: 1 });

        let events = bus.drain();
        assert_eq!(
            events,
            vec![
                AppEvent::HoverEntered,
                AppEvent::AnimationFinished { generation: 1 },
                AppEvent::CooldownElapsed { generation: 1 },
            ]
        );
    }

    #[test]
    fn test_drain_empties_queue() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(AppEvent::ToggleWindow);
        publisher.publish(AppEvent::OpenSettings);

        assert_eq!(bus.drain().len(), 2);
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_multiple_publishers() {
        let bus = EventBus::new();
        let menu = bus.publisher();
        let prefs = menu.clone();

        menu.publish(AppEvent::Quit);
        prefs.publish(AppEvent::PreferencesChanged(PreferenceChange::Language));

        let events = bus.drain();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[1],
            AppEvent::PreferencesChanged(PreferenceChange::Language)
        );
    }

    #[test]
    fn test_try_recv_returns_none_when_empty() {
        let bus = EventBus::new();
        assert!(bus.try_recv().is_none());
    }

    #[test]
    fn test_publisher_from_other_thread() {
        let bus = EventBus::default();
        let publisher = bus.publisher();

        std::thread::spawn(move || publisher.publish(AppEvent::ScreenChanged))
            .join()
            .unwrap();

        assert_eq!(bus.try_recv(), Some(AppEvent::ScreenChanged));
    }
}
