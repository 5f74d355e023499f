use serde_json::{Map, Value};

use super::ConsoleError;
use crate::api::ApiClient;
use crate::models::User;
use crate::session::SessionContext;

const MANUAL_REFERENCE: &str = "manual_ref";

/// Builds the payload forwarded to `/user/kyc/success` from the widget's result.
///
/// Widget fields override the defaults, except that `reference_id` always
/// holds the first non-blank of `reference_id`, `referenceId` or `manual_ref`.
pub fn verification_payload(widget_result: &Value) -> Value {
    let fields = widget_result.as_object().cloned().unwrap_or_default();
    let reference = ["reference_id", "referenceId"]
        .iter()
        .filter_map(|key| fields.get(*key))
        .find(|value| is_present(value))
        .cloned()
        .unwrap_or_else(|| Value::String(MANUAL_REFERENCE.to_string()));

    let mut payload = Map::new();
    payload.insert("status".to_string(), Value::String("success".to_string()));
    for (key, value) in fields {
        payload.insert(key, value);
    }
    // A blank widget reference must not undo the fallback.
    payload.insert("reference_id".to_string(), reference);
    Value::Object(payload)
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::String(text) => !text.trim().is_empty(),
        Value::Null | Value::Bool(false) => false,
        _ => true,
    }
}

/// Forwards a successful verification and adopts the updated user on success.
pub async fn complete(
    api: &ApiClient,
    session: &mut SessionContext,
    widget_result: &Value,
) -> Result<Option<User>, ConsoleError> {
    let payload = verification_payload(widget_result);
    let response = api
        .kyc()
        .verification_success(&payload)
        .await
        .map_err(|err| ConsoleError::from_api(err, "Error processing verification data"))?;

    if !response.is_success() {
        log::warn!(
            "verification not accepted: {}",
            response.message.as_deref().unwrap_or("no message")
        );
        return Ok(None);
    }
    match response.data {
        Some(user) => {
            session.replace_user(user.clone());
            Ok(Some(user))
        }
        None => Ok(None),
    }
}
