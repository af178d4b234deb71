//! Event listeners.

use slotmap::{SlotMap, new_key_type};
use tracing::trace;

use super::events::{Event, EventType};
use crate::logging::targets;

new_key_type! {
    /// Identifies a registered listener.
    ///
    /// Returned by [`Dispatcher::on`] and [`Dispatcher::on_any`]; pass it to
    /// [`Dispatcher::off`] to remove the listener.
    pub struct ListenerId;
}

type Callback = Box<dyn FnMut(&Event) + Send>;

/// Internal storage for a single listener.
struct Listener {
    /// `None` listens to every event.
    filter: Option<EventType>,
    callback: Callback,
}

/// Delivers parse events to listeners in registration order.
#[derive(Default)]
pub struct Dispatcher {
    listeners: SlotMap<ListenerId, Listener>,
    /// Registration order; slot map iteration order is not stable under
    /// removal.
    order: Vec<ListenerId>,
    muted: bool,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("listeners", &self.listeners.len())
            .field("muted", &self.muted)
            .finish()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listen to events of one type.
    pub fn on<F>(&mut self, event_type: EventType, callback: F) -> ListenerId
    where
        F: FnMut(&Event) + Send + 'static,
    {
        self.insert(Some(event_type), Box::new(callback))
    }

    /// Listen to every event.
    pub fn on_any<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&Event) + Send + 'static,
    {
        self.insert(None, Box::new(callback))
    }

    fn insert(&mut self, filter: Option<EventType>, callback: Callback) -> ListenerId {
        let id = self.listeners.insert(Listener { filter, callback });
        self.order.push(id);
        id
    }

    /// Remove a listener.
    ///
    /// Returns `true` if the listener was found and removed.
    pub fn off(&mut self, id: ListenerId) -> bool {
        if self.listeners.remove(id).is_none() {
            return false;
        }
        self.order.retain(|other| *other != id);
        true
    }

    /// Remove every listener.
    pub fn clear(&mut self) {
        self.listeners.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// While muted, [`Dispatcher::dispatch`] does nothing.
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Call every listener interested in `event`.
    pub fn dispatch(&mut self, event: &Event) {
        if self.muted || self.order.is_empty() {
            return;
        }
        let event_type = event.event_type();
        trace!(target: targets::PARSER, event = event_type.name(), "dispatch");
        for id in &self.order {
            if let Some(listener) = self.listeners.get_mut(*id)
                && listener.filter.is_none_or(|filter| filter == event_type)
            {
                (listener.callback)(event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;
    use crate::parser::EventKind;
    use crate::reader::Position;

    fn event(kind: EventKind) -> Event {
        Event::new(Position::START, kind)
    }

    #[test]
    fn test_filtered_and_any() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut dispatcher = Dispatcher::new();
        let log = seen.clone();
        dispatcher.on(EventType::StartStylesheet, move |e| {
            log.lock().push(format!("typed {}", e.kind.name()));
        });
        let log = seen.clone();
        dispatcher.on_any(move |e| log.lock().push(format!("any {}", e.kind.name())));

        dispatcher.dispatch(&event(EventKind::StartStylesheet));
        dispatcher.dispatch(&event(EventKind::EndStylesheet));
        assert_eq!(
            *seen.lock(),
            [
                "typed start-stylesheet",
                "any start-stylesheet",
                "any end-stylesheet"
            ]
        );
    }

    #[test]
    fn test_off_keeps_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut dispatcher = Dispatcher::new();
        let ids: Vec<ListenerId> = (0..3)
            .map(|i| {
                let log = seen.clone();
                dispatcher.on_any(move |_| log.lock().push(i))
            })
            .collect();
        assert!(dispatcher.off(ids[0]));
        assert!(!dispatcher.off(ids[0]));
        let log = seen.clone();
        dispatcher.on_any(move |_| log.lock().push(3));

        dispatcher.dispatch(&event(EventKind::StartStylesheet));
        assert_eq!(*seen.lock(), [1, 2, 3]);
        assert_eq!(dispatcher.len(), 3);
    }

    #[test]
    fn test_muted() {
        let seen = Arc::new(Mutex::new(0));
        let mut dispatcher = Dispatcher::new();
        let count = seen.clone();
        dispatcher.on_any(move |_| *count.lock() += 1);
        dispatcher.set_muted(true);
        dispatcher.dispatch(&event(EventKind::StartStylesheet));
        assert_eq!(*seen.lock(), 0);
        dispatcher.set_muted(false);
        dispatcher.dispatch(&event(EventKind::StartStylesheet));
        assert_eq!(*seen.lock(), 1);
    }
}
