use serde_json::{json, Value};

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{EventDetail, EventSummary, Paginated};

pub const EVENTS_PER_PAGE: u32 = 10;

/// Filters for the host's own event list. `status` of `None` means "all".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventListQuery {
    pub page: u32,
    pub search: Option<String>,
    pub status: Option<String>,
}

impl EventListQuery {
    pub fn page(page: u32) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = match status.trim() {
            "" | "all" => None,
            other => Some(other.to_string()),
        };
        self
    }

    pub fn with_search(mut self, search: Option<String>) -> Self {
        self.search = search.filter(|text| !text.trim().is_empty());
        self
    }

    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.max(1).to_string()),
            ("limit", EVENTS_PER_PAGE.to_string()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        pairs
    }
}

pub struct HostApi<'a> {
    client: &'a ApiClient,
}

impl<'a> HostApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn events(&self, query: &EventListQuery) -> Result<Paginated<EventSummary>, ApiError> {
        self.client
            .get("/user/host/events", &query.to_pairs())
            .await
    }

    pub async fn event_details(&self, id: &str) -> Result<EventDetail, ApiError> {
        self.client
            .get(&format!("/user/host/events/{id}"), &[])
            .await
    }

    pub async fn stats(&self) -> Result<Value, ApiError> {
        self.client.get("/user/host/stats", &[]).await
    }

    pub async fn recent_activity(&self) -> Result<Value, ApiError> {
        self.client.get("/user/host/recent-activity", &[]).await
    }

    /// Sales series for the dashboard chart. Without a range the backend picks its default window.
    pub async fn chart(&self, range: Option<&str>) -> Result<Value, ApiError> {
        let query: Vec<(&str, String)> = range
            .map(str::trim)
            .filter(|range| !range.is_empty())
            .map(|range| vec![("range", range.to_string())])
            .unwrap_or_default();
        self.client.get("/user/host/chart", &query).await
    }

    pub async fn trust_score(&self) -> Result<Value, ApiError> {
        self.client.get("/user/host/trust-score", &[]).await
    }

    pub async fn withdrawal_limit(&self, event_id: &str) -> Result<Value, ApiError> {
        self.client
            .get(&format!("/user/host/events/{event_id}/withdrawal-limit"), &[])
            .await
    }

    pub async fn request_withdrawal(&self, event_id: &str, amount: f64) -> Result<Value, ApiError> {
        let body = json!({ "event_id": event_id, "amount": amount });
        self.client
            .post_json("/user/host/events/withdraw", Some(&body))
            .await
    }

    pub async fn refund_ticket(&self, ticket_id: &str) -> Result<Value, ApiError> {
        self.client
            .post_json::<Value, Value>(&format!("/user/host/tickets/{ticket_id}/refund"), None)
            .await
    }
}
