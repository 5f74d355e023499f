use serde_json::{json, Value};

use super::ApiClient;
use crate::error::ApiError;

pub struct UserApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UserApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn set_transaction_pin(&self, pin: &str) -> Result<Value, ApiError> {
        self.client
            .put_json("/user/profile", &json!({ "transaction_pin": pin }))
            .await
    }
}
