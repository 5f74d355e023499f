//! HTTP plumbing for the ticketing backend.
//!
//! Every endpoint answers with JSON. Failures keep the backend's `message`
//! field so callers can surface it verbatim.

pub mod admin;
pub mod events;
pub mod host;
pub mod kyc;
pub mod user;

use reqwest::{multipart::Form, Client, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::session::SessionContext;

pub use admin::AdminApi;
pub use events::EventsApi;
pub use host::HostApi;
pub use kyc::KycApi;
pub use user::UserApi;

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            token,
        }
    }

    pub fn for_session(base_url: impl Into<String>, session: &SessionContext) -> Self {
        Self::new(base_url, session.token().map(str::to_string))
    }

    pub fn host(&self) -> HostApi<'_> {
        HostApi::new(self)
    }

    pub fn events(&self) -> EventsApi<'_> {
        EventsApi::new(self)
    }

    pub fn admin(&self) -> AdminApi<'_> {
        AdminApi::new(self)
    }

    pub fn kyc(&self) -> KycApi<'_> {
        KycApi::new(self)
    }

    pub fn user(&self) -> UserApi<'_> {
        UserApi::new(self)
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        log::debug!("{method} {path}");
        let mut builder = self
            .client
            .request(method, self.url(path))
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let builder = self.request(Method::GET, path).query(query);
        send(builder).await
    }

    pub(crate) async fn post_json<T, B>(&self, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut builder = self.request(Method::POST, path);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        send(builder).await
    }

    pub(crate) async fn put_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        send(self.request(Method::PUT, path).json(body)).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        send(self.request(Method::DELETE, path)).await
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ApiError> {
        send(self.request(Method::POST, path).multipart(form)).await
    }
}

async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
    let response = builder.send().await?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|err| ApiError::Http(format!("response decode failed: {err}")))?;

    if !status.is_success() {
        log::warn!("request failed with status {status}");
        return Err(ApiError::Status {
            status: status.as_u16(),
            message: extract_message(&body),
            body,
        });
    }

    let text = if body.trim().is_empty() { "null" } else { &body };
    serde_json::from_str(text).map_err(|err| ApiError::Decode(err.to_string()))
}

/// Pulls a non-empty `message` string out of a JSON error body.
pub fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("message")
        .and_then(|message| message.as_str())
        .map(|message| message.trim().to_string())
        .filter(|message| !message.is_empty())
}
