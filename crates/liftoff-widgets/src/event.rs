//! The `"modal"` notification
//!
//! Every open/close publishes a [`BusEvent`] named [`MODAL_EVENT`] whose
//! detail is `{ "modalStatus": <bool> }`. There is no sender id in the
//! payload; listeners only learn the new state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bus::BusEvent;

/// Event name used for modal state notifications
pub const MODAL_EVENT: &str = "modal";

/// Errors raised while reading an incoming notification
#[derive(Debug, Error)]
pub enum EventError {
    /// Event was published under another name
    #[error("Expected 'modal' event, got '{name}'")]
    UnexpectedEvent { name: String },

    /// Payload has no `modalStatus` field
    #[error("Payload is missing the 'modalStatus' field")]
    MissingStatus,

    /// Payload is present but not shaped like `{ "modalStatus": bool }`
    #[error("Invalid modal payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

/// Payload of a modal notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalStatus {
    /// Visibility right after the transition
    pub modal_status: bool,
}

impl ModalStatus {
    pub fn new(modal_status: bool) -> Self {
        Self { modal_status }
    }

    /// Wrap into a bus event ready to publish
    pub fn into_event(self) -> BusEvent {
        BusEvent::new(
            MODAL_EVENT,
            serde_json::json!({ "modalStatus": self.modal_status }),
        )
    }

    /// Read the status from a raw payload
    pub fn from_detail(detail: &serde_json::Value) -> Result<Self, EventError> {
        if detail.get("modalStatus").is_none() {
            return Err(EventError::MissingStatus);
        }
        Ok(serde_json::from_value(detail.clone())?)
    }

    /// Read the status from a bus event, checking its name first
    pub fn from_event(event: &BusEvent) -> Result<Self, EventError> {
        if event.name != MODAL_EVENT {
            return Err(EventError::UnexpectedEvent {
                name: event.name.clone(),
            });
        }
        Self::from_detail(&event.detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_shape() {
        let event = ModalStatus::new(true).into_event();
        assert_eq!(event.name, "modal");
        assert_eq!(event.detail, json!({ "modalStatus": true }));
    }

    #[test]
    fn test_from_event() {
        let event = BusEvent::new("modal", json!({ "modalStatus": false }));
        let status = ModalStatus::from_event(&event).unwrap();
        assert!(!status.modal_status);
    }

    #[test]
    fn test_missing_status() {
        let err = ModalStatus::from_detail(&json!({ "open": true })).unwrap_err();
        assert!(matches!(err, EventError::MissingStatus));

        let err = ModalStatus::from_detail(&json!(null)).unwrap_err();
        assert!(matches!(err, EventError::MissingStatus));
    }

    #[test]
    fn test_invalid_status_type() {
        let err = ModalStatus::from_detail(&json!({ "modalStatus": "yes" })).unwrap_err();
        assert!(matches!(err, EventError::InvalidPayload(_)));
        assert!(err.to_string().starts_with("Invalid modal payload"));
    }

    #[test]
    fn test_unexpected_event_name() {
        let event = BusEvent::new("toast", json!({ "modalStatus": true }));
        let err = ModalStatus::from_event(&event).unwrap_err();
        assert!(err.to_string().contains("toast"));
    }
}
