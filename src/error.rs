use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("http error: {0}")]
    Http(String),
    #[error("api error (status {status}): {body}")]
    Status {
        status: u16,
        message: Option<String>,
        body: String,
    },
    #[error("decode error: {0}")]
    Decode(String),
    #[error("not signed in: no {0} configured")]
    MissingToken(&'static str),
}

impl ApiError {
    /// The backend's own `message`, when the failure carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.server_message().unwrap_or(fallback)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Http(err.to_string())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("no ticket tier at position {0}")]
    TierOutOfRange(usize),
    #[error("no media item at position {0}")]
    MediaOutOfRange(usize),
    #[error("unparseable timestamp: {0}")]
    Timestamp(String),
}
