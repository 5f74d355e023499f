use serde::Deserialize;
use serde_json::{json, Value};

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{
    Envelope, EventSummary, ListBody, Paginated, SupportTicket, TrustSetting, TrustTier,
};

#[derive(Debug, Deserialize)]
pub struct AdminLogin {
    pub token: String,
}

pub struct AdminApi<'a> {
    client: &'a ApiClient,
}

fn page_query(page: u32) -> Vec<(&'static str, String)> {
    vec![("page", page.max(1).to_string())]
}

impl<'a> AdminApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AdminLogin, ApiError> {
        let body = json!({ "email": email, "password": password });
        self.client.post_json("/admin/login", Some(&body)).await
    }

    pub async fn logout(&self) -> Result<Value, ApiError> {
        self.client
            .post_json::<Value, Value>("/admin/logout", None)
            .await
    }

    pub async fn events(&self, page: u32) -> Result<Paginated<EventSummary>, ApiError> {
        self.client.get("/admin/events", &page_query(page)).await
    }

    pub async fn approve_event(&self, id: &str) -> Result<Value, ApiError> {
        self.client
            .post_json::<Value, Value>(&format!("/admin/events/{id}/approve"), None)
            .await
    }

    pub async fn reject_event(&self, id: &str) -> Result<Value, ApiError> {
        self.client
            .post_json::<Value, Value>(&format!("/admin/events/{id}/reject"), None)
            .await
    }

    pub async fn delete_event(&self, id: &str) -> Result<Value, ApiError> {
        self.client.delete(&format!("/admin/events/{id}")).await
    }

    pub async fn users(&self, page: u32) -> Result<Paginated<Value>, ApiError> {
        self.client.get("/admin/users", &page_query(page)).await
    }

    pub async fn support_tickets(&self, page: u32) -> Result<Paginated<SupportTicket>, ApiError> {
        self.client.get("/admin/support", &page_query(page)).await
    }

    pub async fn support_ticket(&self, id: &str) -> Result<SupportTicket, ApiError> {
        let envelope: Envelope<SupportTicket> = self
            .client
            .get(&format!("/admin/support/{id}"), &[])
            .await?;
        envelope
            .data
            .ok_or_else(|| ApiError::Decode(format!("support ticket {id} missing data")))
    }

    pub async fn reply_support(&self, id: &str, message: &str) -> Result<Value, ApiError> {
        let body = json!({ "message": message });
        self.client
            .post_json(&format!("/admin/support/{id}/reply"), Some(&body))
            .await
    }

    pub async fn update_support_status(&self, id: &str, status: &str) -> Result<Value, ApiError> {
        self.client
            .put_json(
                &format!("/admin/support/{id}/status"),
                &json!({ "status": status }),
            )
            .await
    }

    pub async fn trust_tiers(&self) -> Result<Vec<TrustTier>, ApiError> {
        let body: ListBody<TrustTier> = self.client.get("/admin/trust-tiers", &[]).await?;
        Ok(body.into_items())
    }

    pub async fn update_trust_tiers(&self, tiers: &[TrustTier]) -> Result<Value, ApiError> {
        let body = json!({ "tiers": tiers });
        self.client
            .post_json("/admin/trust-tiers", Some(&body))
            .await
    }

    pub async fn trust_settings(&self) -> Result<Vec<TrustSetting>, ApiError> {
        let body: ListBody<TrustSetting> = self.client.get("/admin/trust-score", &[]).await?;
        Ok(body.into_items())
    }

    /// Only `key` and `value` go back to the server.
    pub async fn update_trust_settings(&self, settings: &[TrustSetting]) -> Result<Value, ApiError> {
        let payload: Vec<Value> = settings
            .iter()
            .map(|setting| json!({ "key": setting.key, "value": setting.value }))
            .collect();
        let body = json!({ "settings": payload });
        self.client
            .post_json("/admin/trust-score", Some(&body))
            .await
    }

    pub async fn finance_stats(&self) -> Result<Value, ApiError> {
        self.client.get("/admin/finance/stats", &[]).await
    }

    pub async fn payouts(&self, page: u32) -> Result<Paginated<Value>, ApiError> {
        self.client
            .get("/admin/finance/payouts", &page_query(page))
            .await
    }

    pub async fn process_payout(&self, id: &str) -> Result<Value, ApiError> {
        self.client
            .post_json::<Value, Value>(&format!("/admin/finance/payouts/{id}/process"), None)
            .await
    }

    pub async fn reject_payout(&self, id: &str) -> Result<Value, ApiError> {
        self.client
            .post_json::<Value, Value>(&format!("/admin/finance/payouts/{id}/reject"), None)
            .await
    }
}
