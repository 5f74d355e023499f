use std::str::FromStr;

use serde_json::Value;

use super::Confirmation;
use crate::api::ApiClient;
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventAction {
    Publish,
    Unpublish,
    Delete,
}

impl FromStr for EventAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "publish" => Ok(EventAction::Publish),
            "unpublish" | "draft" => Ok(EventAction::Unpublish),
            "delete" => Ok(EventAction::Delete),
            other => Err(format!("unknown event action: {other}")),
        }
    }
}

impl EventAction {
    pub fn confirmation(&self) -> Confirmation {
        let (title, message, destructive) = match self {
            EventAction::Publish => (
                "Publish Event",
                "Are you sure you want to publish this event? It will be visible to everyone.",
                false,
            ),
            EventAction::Unpublish => (
                "Unpublish Event",
                "Are you sure you want to unpublish this event? It will be hidden from the public.",
                true,
            ),
            EventAction::Delete => (
                "Delete Event",
                "Are you sure you want to delete this event? This action cannot be undone.",
                true,
            ),
        };
        Confirmation {
            title: title.to_string(),
            message: message.to_string(),
            destructive,
        }
    }

    /// Actions offered for an event in `status`.
    pub fn available_for(status: &str) -> Vec<EventAction> {
        if status == "published" {
            vec![EventAction::Unpublish, EventAction::Delete]
        } else {
            vec![EventAction::Publish, EventAction::Delete]
        }
    }

    pub async fn execute(&self, api: &ApiClient, event_id: &str) -> Result<Value, ApiError> {
        let events = api.events();
        match self {
            EventAction::Publish => events.publish(event_id).await,
            EventAction::Unpublish => events.unpublish(event_id).await,
            EventAction::Delete => events.delete(event_id).await,
        }
    }
}
