use serde_json::Value;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{Envelope, KycWidgetConfig, User};

pub struct KycApi<'a> {
    client: &'a ApiClient,
}

impl<'a> KycApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn widget_config(&self) -> Result<KycWidgetConfig, ApiError> {
        let envelope: Envelope<KycWidgetConfig> = self.client.get("/user/kyc/config", &[]).await?;
        envelope
            .data
            .ok_or_else(|| ApiError::Decode("kyc config missing data".to_string()))
    }

    pub async fn verification_success(&self, payload: &Value) -> Result<Envelope<User>, ApiError> {
        self.client
            .post_json("/user/kyc/success", Some(payload))
            .await
    }
}
