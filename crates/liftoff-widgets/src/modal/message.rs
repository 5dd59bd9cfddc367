//! Messages for the modal widget

use crate::bus::BusEvent;

/// Messages handled by [`ModalWidget::update`](super::ModalWidget::update)
#[derive(Debug, Clone, PartialEq)]
pub enum ModalMessage {
    /// Trigger button pressed
    Open,

    /// Close glyph pressed
    Close,

    /// Replace the dialog title (None or empty hides the heading)
    SetTitle(Option<String>),

    /// A notification arrived on the bus subscription
    Notified(BusEvent),
}
