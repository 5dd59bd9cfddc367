//! Floating-button modal dialog widget for iced applications
//!
//! This crate provides a reusable modal: an always-visible round trigger
//! button that opens a full-window overlay hosting arbitrary content, plus a
//! process-wide notification bus that broadcasts every open/close.
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! - **State**: `ModalWidget` owns `visible` + `title` and the bus handle
//! - **View description**: `ModalLayout` is a pure function of the state
//! - **View function**: `modal_view` turns the layout into an `Element`
//! - **Bus**: `EventBus` fans named `BusEvent`s out to every subscriber;
//!   `BusSubscription` unsubscribes on drop
//!
//! ## Event contract
//!
//! Each `open()`/`close()` publishes one `"modal"` event with detail
//! `{ "modalStatus": bool }`. Attached widgets log every such event they
//! receive, including their own.

pub mod bus;
pub mod button_styles;
pub mod event;
pub mod modal;
pub mod subscription;
pub mod theme;

// Re-export commonly used items
pub use bus::{BusEvent, BusSubscription, EventBus};
pub use event::{EventError, ModalStatus, MODAL_EVENT};
pub use subscription::bus_subscription;
pub use theme::ModalMetrics;

// Modal widget
pub use modal::{
    modal_view, DialogPlacement, ModalLayout, ModalMessage, ModalWidget,
    OverlayLayout, TriggerLayout,
};
