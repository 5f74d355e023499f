use reqwest::multipart::Form;
use serde_json::{json, Value};

use super::ApiClient;
use crate::error::ApiError;

pub struct EventsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> EventsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn publish(&self, id: &str) -> Result<Value, ApiError> {
        self.client
            .post_json::<Value, Value>(&format!("/events/{id}/publish"), None)
            .await
    }

    /// Moves a published event back to draft.
    pub async fn unpublish(&self, id: &str) -> Result<Value, ApiError> {
        self.client
            .put_json(&format!("/events/{id}"), &json!({ "status": "draft" }))
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<Value, ApiError> {
        self.client.delete(&format!("/events/{id}")).await
    }

    /// Sent as POST; the form's `_method` field makes the backend treat it as PUT.
    pub async fn update_with_form(&self, id: &str, form: Form) -> Result<Value, ApiError> {
        self.client
            .post_multipart(&format!("/events/{id}"), form)
            .await
    }
}
