//! Modal Widget
//!
//! A floating trigger button that opens an overlay dialog with embedder
//! supplied content. Every open/close is broadcast on the shared
//! [`EventBus`] as a `"modal"` notification, and an attached widget listens
//! for the same notifications (its own included) and logs them.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐  Open / Close   ┌─────────────┐  publish  ┌──────────┐
//! │ view()   │ ──────────────► │ ModalWidget │ ────────► │ EventBus │
//! └──────────┘                 │  (state)    │ ◄──────── │          │
//!      ▲                       └─────────────┘  Notified └──────────┘
//!      │  ModalLayout::compute(state)
//! ```
//!
//! # States
//!
//! `Hidden` (initial) → `open()` → `Shown` → `close()` → `Hidden`. Each
//! transition publishes exactly one notification, even when the state does
//! not actually change.

mod layout;
mod message;
mod view;

pub use layout::{DialogPlacement, ModalLayout, OverlayLayout, TriggerLayout};
pub use message::ModalMessage;
pub use view::modal_view;

use iced::{Element, Subscription};

use crate::bus::{BusEvent, BusSubscription, EventBus};
use crate::event::{ModalStatus, MODAL_EVENT};
use crate::subscription::bus_subscription;
use crate::theme::ModalMetrics;

/// Observable state of a modal instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ModalState {
    visible: bool,
    title: Option<String>,
}

impl ModalState {
    /// Title to display; empty titles count as unset
    fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }
}

/// A modal dialog instance bound to an event bus
pub struct ModalWidget {
    state: ModalState,
    metrics: ModalMetrics,
    bus: EventBus,
    subscription: Option<BusSubscription>,
}

impl std::fmt::Debug for ModalWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalWidget")
            .field("state", &self.state)
            .field("attached", &self.is_attached())
            .finish()
    }
}

impl ModalWidget {
    /// Create a hidden, untitled, detached modal publishing on `bus`
    pub fn new(bus: EventBus) -> Self {
        Self {
            state: ModalState::default(),
            metrics: ModalMetrics::default(),
            bus,
            subscription: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.state.title = Some(title.into());
        self
    }

    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    pub fn title(&self) -> Option<&str> {
        self.state.title()
    }

    /// Replace the title without touching visibility or publishing
    pub fn set_title(&mut self, title: Option<String>) {
        self.state.title = title;
    }

    /// Programmatic visibility setter; only `open()`/`close()` publish
    pub fn set_visible(&mut self, visible: bool) {
        self.state.visible = visible;
    }

    /// Show the overlay and publish `{ modalStatus: true }`
    pub fn open(&mut self) {
        self.state.visible = true;
        self.dispatch_status();
    }

    /// Hide the overlay and publish `{ modalStatus: false }`
    pub fn close(&mut self) {
        self.state.visible = false;
        self.dispatch_status();
    }

    fn dispatch_status(&self) {
        let status = ModalStatus::new(self.state.visible);
        let delivered = self.bus.publish(status.into_event());
        log::debug!(
            "ModalWidget: published modalStatus={} to {} listener(s)",
            status.modal_status,
            delivered
        );
    }

    // ─────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────

    /// Start listening for `"modal"` notifications
    ///
    /// Returns false if the widget was already attached.
    pub fn attach(&mut self) -> bool {
        if self.subscription.is_some() {
            log::debug!("ModalWidget: attach called while already attached");
            return false;
        }
        self.subscription = Some(self.bus.subscribe(MODAL_EVENT));
        true
    }

    /// Stop listening; pending notifications are discarded
    ///
    /// Returns false if the widget was not attached.
    pub fn detach(&mut self) -> bool {
        self.subscription.take().is_some()
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Log an incoming notification and return its status
    ///
    /// Invalid payloads and events arriving while detached are ignored.
    pub fn handle_notification(&self, event: &BusEvent) -> Option<ModalStatus> {
        if !self.is_attached() {
            log::debug!("ModalWidget: dropping notification received while detached");
            return None;
        }
        match ModalStatus::from_event(event) {
            Ok(status) => {
                log::info!("Modal status: {}", status.modal_status);
                Some(status)
            }
            Err(e) => {
                log::warn!("Modal status: ignoring notification ({}): {}", e, event.detail);
                None
            }
        }
    }

    /// Handle every notification queued since the last call
    pub fn drain_notifications(&self) -> Vec<ModalStatus> {
        let Some(subscription) = &self.subscription else {
            return Vec::new();
        };
        subscription
            .drain()
            .iter()
            .filter_map(|event| self.handle_notification(event))
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────
    // iced integration
    // ─────────────────────────────────────────────────────────────────────

    /// Handle a message and update state
    pub fn update(&mut self, message: ModalMessage) {
        match message {
            ModalMessage::Open => self.open(),
            ModalMessage::Close => self.close(),
            ModalMessage::SetTitle(title) => self.set_title(title),
            ModalMessage::Notified(event) => {
                self.handle_notification(&event);
            }
        }
    }

    /// Describe what the widget currently renders
    pub fn layout(&self, viewport_width: f32) -> ModalLayout {
        ModalLayout::compute(
            self.state.visible,
            self.state.title(),
            viewport_width,
            &self.metrics,
        )
    }

    /// Render the widget around the slotted `content`
    pub fn view<'a, Message>(
        &self,
        viewport_width: f32,
        content: Element<'a, Message>,
        on_message: impl Fn(ModalMessage) -> Message,
    ) -> Element<'a, Message>
    where
        Message: Clone + 'a,
    {
        modal_view(self.layout(viewport_width), &self.metrics, content, on_message)
    }

    /// Deliver bus notifications to the host loop while attached
    pub fn subscription(&self) -> Subscription<ModalMessage> {
        match &self.subscription {
            Some(subscription) => bus_subscription(subscription).map(ModalMessage::Notified),
            None => Subscription::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn statuses(sub: &BusSubscription) -> Vec<bool> {
        sub.drain()
            .iter()
            .map(|event| ModalStatus::from_event(event).unwrap().modal_status)
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let modal = ModalWidget::new(EventBus::new());
        assert!(!modal.is_visible());
        assert_eq!(modal.title(), None);
        assert!(!modal.is_attached());
        assert!(!modal.layout(1024.0).overlay.shown);
    }

    #[test]
    fn test_last_call_wins() {
        let mut modal = ModalWidget::new(EventBus::new());
        let sequences: [&[bool]; 4] = [
            &[true],
            &[true, false],
            &[false, true, true],
            &[true, true, false, false],
        ];
        for sequence in sequences {
            for &open in sequence {
                if open {
                    modal.open();
                } else {
                    modal.close();
                }
            }
            let last = *sequence.last().unwrap();
            assert_eq!(modal.is_visible(), last);
            assert_eq!(modal.layout(1024.0).overlay.shown, last);
        }
    }

    #[test]
    fn test_every_call_publishes_once() {
        let bus = EventBus::new();
        let listener = bus.subscribe(MODAL_EVENT);
        let mut modal = ModalWidget::new(bus);

        modal.open();
        modal.open();
        modal.close();
        modal.close();
        modal.open();

        assert_eq!(statuses(&listener), vec![true, true, false, false, true]);
    }

    #[test]
    fn test_set_visible_does_not_publish() {
        let bus = EventBus::new();
        let listener = bus.subscribe(MODAL_EVENT);
        let mut modal = ModalWidget::new(bus);

        modal.set_visible(true);
        assert!(modal.is_visible());
        assert!(modal.layout(1024.0).overlay.shown);

        modal.set_visible(false);
        assert!(!modal.is_visible());
        assert!(listener.drain().is_empty());
    }

    #[test]
    fn test_confirm_scenario() {
        let bus = EventBus::new();
        let listener = bus.subscribe(MODAL_EVENT);
        let mut modal = ModalWidget::new(bus).with_title("Confirm");

        modal.update(ModalMessage::Open);
        let layout = modal.layout(1024.0);
        assert!(layout.overlay.shown);
        assert_eq!(layout.overlay.heading.as_deref(), Some("Confirm"));
        assert_eq!(statuses(&listener), vec![true]);

        modal.update(ModalMessage::Close);
        assert!(!modal.layout(1024.0).overlay.shown);
        assert_eq!(statuses(&listener), vec![false]);
    }

    #[test]
    fn test_untitled_scenario() {
        let mut modal = ModalWidget::new(EventBus::new());
        modal.open();

        let layout = modal.layout(1024.0);
        assert!(layout.overlay.shown);
        assert_eq!(layout.overlay.heading, None);
    }

    #[test]
    fn test_set_title_does_not_publish() {
        let bus = EventBus::new();
        let listener = bus.subscribe(MODAL_EVENT);
        let mut modal = ModalWidget::new(bus);

        modal.update(ModalMessage::SetTitle(Some("Settings".to_string())));
        assert_eq!(modal.title(), Some("Settings"));
        assert!(!modal.is_visible());
        assert!(listener.drain().is_empty());

        modal.set_title(Some(String::new()));
        assert_eq!(modal.title(), None);
    }

    #[test]
    fn test_receives_own_notifications_while_attached() {
        let mut modal = ModalWidget::new(EventBus::new());
        assert!(modal.attach());

        modal.open();
        modal.close();

        let received: Vec<bool> = modal
            .drain_notifications()
            .iter()
            .map(|s| s.modal_status)
            .collect();
        assert_eq!(received, vec![true, false]);
    }

    #[test]
    fn test_receives_other_instances() {
        let bus = EventBus::new();
        let mut first = ModalWidget::new(bus.clone());
        let mut second = ModalWidget::new(bus);
        first.attach();
        second.attach();

        second.open();

        assert_eq!(first.drain_notifications(), vec![ModalStatus::new(true)]);
        assert_eq!(second.drain_notifications(), vec![ModalStatus::new(true)]);
    }

    #[test]
    fn test_detach_stops_delivery() {
        let bus = EventBus::new();
        let mut listener = ModalWidget::new(bus.clone());
        let mut emitter = ModalWidget::new(bus.clone());

        assert!(listener.attach());
        assert!(!listener.attach());
        assert_eq!(bus.listener_count(MODAL_EVENT), 1);

        assert!(listener.detach());
        assert!(!listener.detach());
        assert_eq!(bus.listener_count(MODAL_EVENT), 0);

        emitter.open();
        assert!(listener.drain_notifications().is_empty());
        assert_eq!(
            listener.handle_notification(&ModalStatus::new(true).into_event()),
            None
        );
    }

    #[test]
    fn test_drop_releases_subscription() {
        let bus = EventBus::new();
        {
            let mut modal = ModalWidget::new(bus.clone());
            modal.attach();
            assert_eq!(bus.listener_count(MODAL_EVENT), 1);
        }
        assert_eq!(bus.listener_count(MODAL_EVENT), 0);
    }

    #[test]
    fn test_invalid_payload_is_ignored() {
        let bus = EventBus::new();
        let mut modal = ModalWidget::new(bus.clone());
        modal.attach();

        bus.publish(BusEvent::new(MODAL_EVENT, json!({ "status": "open" })));
        bus.publish(BusEvent::new(MODAL_EVENT, json!({ "modalStatus": 1 })));
        bus.publish(ModalStatus::new(false).into_event());

        assert_eq!(modal.drain_notifications(), vec![ModalStatus::new(false)]);
        assert!(!modal.is_visible());
    }

    #[test]
    fn test_notified_message_does_not_change_state() {
        let mut modal = ModalWidget::new(EventBus::new());
        modal.attach();

        modal.update(ModalMessage::Notified(ModalStatus::new(true).into_event()));
        assert!(!modal.is_visible());
    }
}
