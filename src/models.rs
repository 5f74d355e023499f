use std::fmt;

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Server identifiers arrive as numbers or strings depending on the route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RemoteId(pub String);

impl RemoteId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RemoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RemoteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<u64> for RemoteId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for RemoteId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(serde_json::Number),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(number) => Self(number_id(&number)),
            Raw::Text(value) => Self(value),
        })
    }
}

/// Whole floats such as `12.0` are written without the fraction.
fn number_id(number: &serde_json::Number) -> String {
    if number.is_f64() {
        if let Some(value) = number.as_f64() {
            if value.fract() == 0.0 && (0.0..=u64::MAX as f64).contains(&value) {
                return (value as u64).to_string();
            }
        }
    }
    number.to_string()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(form_string).unwrap_or_default())
}

/// Renders a JSON scalar the way a form input would hold it.
pub fn form_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        other => other.to_string(),
    }
}

pub fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// `GET /user/host/events/{id}` body.
#[derive(Debug, Clone, Deserialize)]
pub struct EventDetail {
    pub event: ServerEvent,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tickets: Vec<ServerTicket>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerEvent {
    #[serde(default)]
    pub id: Option<RemoteId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default)]
    pub lat: Option<Value>,
    #[serde(default)]
    pub lng: Option<Value>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub media: Vec<ServerMedia>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerMedia {
    #[serde(default)]
    pub id: Option<RemoteId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_url: String,
    #[serde(default)]
    pub file_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerTicket {
    #[serde(default)]
    pub id: Option<RemoteId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub quantity: Option<Value>,
    #[serde(default)]
    pub available_count: Option<Value>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EventSummary {
    pub id: RemoteId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageMeta {
    pub current_page: u32,
    pub last_page: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub per_page: u32,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            current_page: 1,
            last_page: 1,
            total: 0,
            per_page: 10,
        }
    }
}

/// List endpoints: `{ data: [...], meta: {...} }`.
#[derive(Debug, Clone, Deserialize)]
pub struct Paginated<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Option<PageMeta>,
}

impl<T> Paginated<T> {
    pub fn page_meta(&self) -> PageMeta {
        self.meta.unwrap_or_default()
    }
}

/// Generic `{ status, message, data }` wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Any truthy status counts: `true`, a non-empty string or a non-zero number.
    pub fn is_success(&self) -> bool {
        match &self.status {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(text)) => !text.is_empty(),
            Some(Value::Number(number)) => number.as_f64().is_some_and(|value| value != 0.0),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
            Some(Value::Null) | None => false,
        }
    }
}

/// Some admin routes answer with a bare list, others wrap it in `data`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListBody<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

impl<T> ListBody<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListBody::Bare(items) => items,
            ListBody::Wrapped { data } => data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub id: RemoteId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub kyc_status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SupportTicket {
    pub id: RemoteId,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub messages: Vec<SupportMessage>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SupportMessage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TrustTier {
    #[serde(default)]
    pub id: Option<RemoteId>,
    pub name: String,
    pub min_score: i64,
    pub max_score: i64,
    pub withdrawal_percent: f64,
    pub days_prior: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TrustSetting {
    #[serde(default)]
    pub id: Option<RemoteId>,
    pub key: String,
    #[serde(deserialize_with = "string_or_number")]
    pub value: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KycWidgetConfig {
    #[serde(alias = "appId", alias = "app_id")]
    pub app_id: String,
    #[serde(alias = "p_key", alias = "publicKey", alias = "public_key")]
    pub public_key: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
