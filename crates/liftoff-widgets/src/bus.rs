//! Process-wide notification bus
//!
//! A named publish/subscribe channel shared by every widget instance and any
//! external listener. Events are fanned out: each subscriber registered for
//! an event name receives its own copy of every event published under that
//! name.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  publish("modal")  ┌───────────────────────────┐
//! │ ModalWidget  │ ─────────────────► │         EventBus          │
//! └──────────────┘                    │  name → [crossbeam tx...] │
//!        ▲                            └───────────────────────────┘
//!        │ BusSubscription                 │        │        │
//!        └─────────────────────────────────┘        ▼        ▼
//!                                            other widgets / listeners
//! ```
//!
//! The bus is a cheap cloneable handle. Subscriptions are RAII guards: the
//! listener is unregistered when its [`BusSubscription`] is dropped.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crossbeam::channel::{self, Receiver, Sender, TryRecvError};
use serde::{Deserialize, Serialize};

/// A named event carrying an arbitrary JSON payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusEvent {
    /// Event name subscribers filter on (e.g. `"modal"`)
    pub name: String,
    /// Event payload
    pub detail: serde_json::Value,
}

impl BusEvent {
    pub fn new(name: impl Into<String>, detail: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            detail,
        }
    }
}

struct Listener {
    id: u64,
    name: String,
    sender: Sender<BusEvent>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<Listener>,
}

/// Shared publish/subscribe channel keyed by event name
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Arc<Mutex<Registry>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &lock(&self.registry).listeners.len())
            .finish()
    }
}

/// Lock the registry, recovering the data if a listener panicked while holding it
fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

impl EventBus {
    /// Create an empty bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for `name`
    ///
    /// Events published after this call are queued on the returned
    /// subscription until it is dropped.
    pub fn subscribe(&self, name: impl Into<String>) -> BusSubscription {
        let name = name.into();
        let (sender, receiver) = channel::unbounded();

        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push(Listener {
            id,
            name: name.clone(),
            sender,
        });
        drop(registry);

        log::debug!("EventBus: listener {} subscribed to {:?}", id, name);

        BusSubscription {
            id,
            bus_key: Arc::as_ptr(&self.registry) as usize,
            name,
            receiver,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Deliver `event` to every listener registered under its name
    ///
    /// Returns the number of listeners that received it. Listeners whose
    /// receiving side has gone away are pruned.
    pub fn publish(&self, event: BusEvent) -> usize {
        let mut registry = lock(&self.registry);
        let mut delivered = 0;

        registry.listeners.retain(|listener| {
            if listener.name != event.name {
                return true;
            }
            match listener.sender.send(event.clone()) {
                Ok(()) => {
                    delivered += 1;
                    true
                }
                Err(_) => {
                    log::debug!("EventBus: pruning disconnected listener {}", listener.id);
                    false
                }
            }
        });

        log::trace!("EventBus: {:?} delivered to {} listener(s)", event.name, delivered);
        delivered
    }

    /// Number of listeners currently registered for `name`
    pub fn listener_count(&self, name: &str) -> usize {
        lock(&self.registry)
            .listeners
            .iter()
            .filter(|listener| listener.name == name)
            .count()
    }
}

/// Registration handle returned by [`EventBus::subscribe`]
///
/// Dropping it unregisters the listener; queued events are discarded.
pub struct BusSubscription {
    id: u64,
    bus_key: usize,
    name: String,
    receiver: Receiver<BusEvent>,
    registry: Weak<Mutex<Registry>>,
}

impl std::fmt::Debug for BusSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BusSubscription")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("pending", &self.receiver.len())
            .finish()
    }
}

impl BusSubscription {
    /// Identity that is unique across buses, used to key host subscriptions
    pub fn key(&self) -> (usize, u64) {
        (self.bus_key, self.id)
    }

    /// Take the next queued event, if any
    pub fn try_recv(&self) -> Option<BusEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Take every queued event in publish order
    pub fn drain(&self) -> Vec<BusEvent> {
        self.receiver.try_iter().collect()
    }

    /// Clone of the receiving side, for handing to the iced executor
    ///
    /// The clone disconnects once this subscription is dropped.
    pub fn receiver(&self) -> Receiver<BusEvent> {
        self.receiver.clone()
    }
}

impl Drop for BusSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry).listeners.retain(|listener| listener.id != self.id);
            log::debug!("EventBus: listener {} unsubscribed from {:?}", self.id, self.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_bus() {
        let bus = EventBus::new();
        let sub = bus.subscribe("modal");

        let delivered = bus.publish(BusEvent::new("modal", json!({ "modalStatus": true })));
        assert_eq!(delivered, 1);

        let event = sub.try_recv().expect("event should be queued");
        assert_eq!(event.name, "modal");
        assert_eq!(event.detail["modalStatus"], true);
        assert!(sub.try_recv().is_none());
    }

    #[test]
    fn test_fan_out_to_all_subscribers() {
        let bus = EventBus::new();
        let first = bus.subscribe("modal");
        let second = bus.subscribe("modal");

        assert_eq!(bus.publish(BusEvent::new("modal", json!({}))), 2);
        assert_eq!(first.drain().len(), 1);
        assert_eq!(second.drain().len(), 1);
    }

    #[test]
    fn test_name_filtering() {
        let bus = EventBus::new();
        let modal = bus.subscribe("modal");
        let other = bus.subscribe("toast");

        bus.publish(BusEvent::new("toast", json!("hello")));
        assert!(modal.try_recv().is_none());
        assert_eq!(other.drain().len(), 1);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let bus = EventBus::new();
        let sub = bus.subscribe("modal");
        let receiver = sub.receiver();
        assert_eq!(bus.listener_count("modal"), 1);

        drop(sub);
        assert_eq!(bus.listener_count("modal"), 0);
        assert_eq!(bus.publish(BusEvent::new("modal", json!({}))), 0);
        // Receiver clones observe the disconnect
        assert!(matches!(receiver.try_recv(), Err(TryRecvError::Disconnected)));
    }

    #[test]
    fn test_drain_preserves_order() {
        let bus = EventBus::new();
        let sub = bus.subscribe("modal");

        for status in [true, false, true] {
            bus.publish(BusEvent::new("modal", json!({ "modalStatus": status })));
        }

        let statuses: Vec<bool> = sub
            .drain()
            .iter()
            .map(|event| event.detail["modalStatus"] == true)
            .collect();
        assert_eq!(statuses, vec![true, false, true]);
    }

    #[test]
    fn test_isolated_buses() {
        let a = EventBus::new();
        let b = EventBus::new();
        let sub_a = a.subscribe("modal");
        let sub_b = b.subscribe("modal");

        a.publish(BusEvent::new("modal", json!({})));
        assert_eq!(sub_a.drain().len(), 1);
        assert!(sub_b.drain().is_empty());
        assert_ne!(sub_a.key(), sub_b.key());
    }
}
