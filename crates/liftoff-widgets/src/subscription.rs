//! Subscription helper bridging the event bus to iced
//!
//! Bus subscriptions are plain crossbeam receivers; iced wants a
//! `Subscription`. This module polls the receiver from the iced executor so
//! notifications show up as messages in the host's update loop.
//!
//! # Usage
//!
//! ```ignore
//! use liftoff_widgets::bus_subscription;
//!
//! fn subscription(&self) -> Subscription<Message> {
//!     Subscription::batch([
//!         self.modal.subscription().map(Message::Modal),
//!         bus_subscription(&self.status_listener).map(Message::StatusEvent),
//!     ])
//! }
//! ```

use std::any::TypeId;
use std::hash::Hash;

use crossbeam::channel::{Receiver, TryRecvError};
use iced::advanced::subscription::{self, EventStream, Hasher, Recipe};
use iced::futures::stream::BoxStream;
use iced::Subscription;

use crate::bus::{BusEvent, BusSubscription};

/// Recipe for polling a bus receiver as an iced subscription
struct BusRecipe {
    /// Identity of the bus subscription (bus address + listener id)
    key: (usize, u64),
    receiver: Receiver<BusEvent>,
}

impl Recipe for BusRecipe {
    type Output = BusEvent;

    fn hash(&self, state: &mut Hasher) {
        TypeId::of::<Self>().hash(state);
        self.key.hash(state);
    }

    fn stream(self: Box<Self>, _input: EventStream) -> BoxStream<'static, Self::Output> {
        let receiver = self.receiver;

        Box::pin(iced::futures::stream::unfold(receiver, |rx| async move {
            loop {
                match rx.try_recv() {
                    Ok(event) => return Some((event, rx)),
                    // The BusSubscription was dropped: end the stream
                    Err(TryRecvError::Disconnected) => return None,
                    Err(TryRecvError::Empty) => {}
                }

                // 1ms keeps the UI responsive without busy-spinning
                tokio::time::sleep(std::time::Duration::from_millis(1)).await;
            }
        }))
    }
}

/// Create an iced subscription yielding every event queued on `subscription`
///
/// The iced subscription ends on its own once the bus subscription is
/// dropped.
pub fn bus_subscription(subscription: &BusSubscription) -> Subscription<BusEvent> {
    subscription::from_recipe(BusRecipe {
        key: subscription.key(),
        receiver: subscription.receiver(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::EventBus;
    use iced::futures::StreamExt;

    fn collect(recipe: BusRecipe) -> Vec<BusEvent> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let input: EventStream = Box::pin(iced::futures::stream::empty());
        runtime.block_on(Box::new(recipe).stream(input).collect::<Vec<_>>())
    }

    #[test]
    fn test_stream_ends_after_unsubscribe() {
        let bus = EventBus::new();
        let sub = bus.subscribe("modal");
        let recipe = BusRecipe {
            key: sub.key(),
            receiver: sub.receiver(),
        };

        bus.publish(BusEvent::new("modal", serde_json::json!({ "modalStatus": true })));
        bus.publish(BusEvent::new("modal", serde_json::json!({ "modalStatus": false })));
        drop(sub);

        // Events queued before the drop are still delivered, then the stream ends
        let events = collect(recipe);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].detail["modalStatus"], true);
        assert_eq!(events[1].detail["modalStatus"], false);
    }
}
