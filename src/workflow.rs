use chrono_tz::Tz;
use serde_json::Value;
use thiserror::Error;

use crate::api::ApiClient;
use crate::draft::EventDraft;
use crate::error::ApiError;
use crate::submission::{self, FormField, ValidationIssue};

pub const LOAD_FAILURE: &str = "Failed to load event details.";
pub const UPDATE_FAILURE: &str = "Failed to update event. Please check all fields.";

#[derive(Debug, Clone, PartialEq)]
pub enum EditPhase {
    Loading,
    Editing,
    Submitting,
    Submitted,
    LoadFailed(String),
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("event is not open for editing")]
    NotEditable,
    #[error("a submission is already in flight")]
    InFlight,
    #[error("event is incomplete: {}", join_issues(.0))]
    Invalid(Vec<ValidationIssue>),
    #[error("could not read media file: {0}")]
    Media(#[from] std::io::Error),
    #[error("{message}")]
    Rejected {
        message: String,
        #[source]
        source: ApiError,
    },
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// One edit session for one event: load, mutate, submit.
///
/// Failed submissions keep the draft so the host can fix it and resubmit.
/// A successful submission ends the session and drops the draft.
#[derive(Debug)]
pub struct EditSession {
    event_id: String,
    phase: EditPhase,
    draft: Option<EventDraft>,
    last_error: Option<String>,
}

impl EditSession {
    pub fn new(event_id: impl Into<String>) -> Self {
        Self {
            event_id: event_id.into(),
            phase: EditPhase::Loading,
            draft: None,
            last_error: None,
        }
    }

    pub async fn load(api: &ApiClient, event_id: &str, tz: Tz) -> Self {
        let mut session = Self::new(event_id);
        let hydrated = match api.host().event_details(event_id).await {
            Ok(detail) => EventDraft::hydrate(&detail, tz).map_err(|err| err.to_string()),
            Err(err) => Err(err.to_string()),
        };
        match hydrated {
            Ok(draft) => session.start_editing(draft),
            Err(reason) => {
                log::error!("failed to load event {event_id}: {reason}");
                session.phase = EditPhase::LoadFailed(LOAD_FAILURE.to_string());
            }
        }
        session
    }

    pub fn start_editing(&mut self, draft: EventDraft) {
        self.draft = Some(draft);
        self.phase = EditPhase::Editing;
    }

    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    pub fn phase(&self) -> &EditPhase {
        &self.phase
    }

    pub fn draft(&self) -> Option<&EventDraft> {
        self.draft.as_ref()
    }

    /// Mutable access only while editing; a load failure or an in-flight submit blocks edits.
    pub fn draft_mut(&mut self) -> Option<&mut EventDraft> {
        if self.phase == EditPhase::Editing {
            self.draft.as_mut()
        } else {
            None
        }
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn can_submit(&self) -> bool {
        self.phase == EditPhase::Editing && self.draft.as_ref().is_some_and(submission::is_submittable)
    }

    /// Validates and encodes the draft, then marks the session as submitting.
    pub fn begin_submit(&mut self) -> Result<Vec<FormField>, SubmitError> {
        match self.phase {
            EditPhase::Editing => {}
            EditPhase::Submitting => return Err(SubmitError::InFlight),
            _ => return Err(SubmitError::NotEditable),
        }
        let draft = self.draft.as_ref().ok_or(SubmitError::NotEditable)?;
        submission::validate(draft).map_err(SubmitError::Invalid)?;

        self.last_error = None;
        self.phase = EditPhase::Submitting;
        Ok(submission::encode(draft))
    }

    pub fn finish_submit(&mut self, outcome: Result<Value, ApiError>) -> Result<(), SubmitError> {
        match outcome {
            Ok(_) => {
                log::info!("event {} updated", self.event_id);
                self.phase = EditPhase::Submitted;
                self.draft = None;
                Ok(())
            }
            Err(err) => {
                let message = err.message_or(UPDATE_FAILURE).to_string();
                log::warn!("update for event {} rejected: {err}", self.event_id);
                self.phase = EditPhase::Editing;
                self.last_error = Some(message.clone());
                Err(SubmitError::Rejected {
                    message,
                    source: err,
                })
            }
        }
    }

    pub async fn submit(&mut self, api: &ApiClient) -> Result<(), SubmitError> {
        let fields = self.begin_submit()?;
        let form = match submission::into_multipart(fields).await {
            Ok(form) => form,
            Err(err) => {
                self.phase = EditPhase::Editing;
                self.last_error = Some(err.to_string());
                return Err(err.into());
            }
        };
        let outcome = api.events().update_with_form(&self.event_id, form).await;
        self.finish_submit(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::LocalFile;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn detail_body() -> Value {
        json!({
            "event": {
                "id": 42,
                "title": "Afrobeat Night",
                "category": "Music",
                "description": "Live band",
                "start_date": "2025-05-01 18:30:00",
                "location": "Eko Hotel",
                "tags": ["Music"],
                "media": [ { "id": 5, "file_url": "https://cdn.test/a.jpg", "file_type": "image" } ]
            },
            "tickets": [ { "id": 3, "title": "Regular", "price": 5000, "quantity": 100 } ]
        })
    }

    async fn mount_detail(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/user/host/events/42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(detail_body()))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn load_failure_blocks_editing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/host/events/42"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let api = ApiClient::new(server.uri(), None);
        let mut session = EditSession::load(&api, "42", Tz::UTC).await;
        assert_eq!(
            session.phase(),
            &EditPhase::LoadFailed(LOAD_FAILURE.to_string())
        );
        assert!(session.draft().is_none());
        assert!(session.draft_mut().is_none());
        assert!(matches!(session.begin_submit(), Err(SubmitError::NotEditable)));
    }

    #[tokio::test]
    async fn successful_submit_ends_session() {
        let server = MockServer::start().await;
        mount_detail(&server).await;
        Mock::given(method("POST"))
            .and(path("/events/42"))
            .and(body_string_contains("name=\"_method\""))
            .and(body_string_contains("name=\"deleted_media_ids[]\""))
            .and(body_string_contains("name=\"tickets[0][id]\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": true })))
            .expect(1)
            .mount(&server)
            .await;

        let api = ApiClient::new(server.uri(), Some("user-token".to_string()));
        let mut session = EditSession::load(&api, "42", Tz::UTC).await;
        assert_eq!(session.phase(), &EditPhase::Editing);

        let draft = session.draft_mut().expect("editable");
        draft.title = "Afrobeat Night II".to_string();
        draft.media.remove(0).expect("remove cover");

        session.submit(&api).await.expect("submit");
        assert_eq!(session.phase(), &EditPhase::Submitted);
        assert!(session.draft().is_none());
    }

    #[tokio::test]
    async fn submit_uploads_new_media_files() {
        let mut image = tempfile::Builder::new()
            .suffix(".png")
            .tempfile()
            .expect("temp image");
        std::io::Write::write_all(&mut image, b"not really a png").expect("write image");
        let file_name = image
            .path()
            .file_name()
            .and_then(|name| name.to_str())
            .expect("file name")
            .to_string();

        let server = MockServer::start().await;
        mount_detail(&server).await;
        Mock::given(method("POST"))
            .and(path("/events/42"))
            .and(body_string_contains("name=\"new_media[]\""))
            .and(body_string_contains(format!("filename=\"{file_name}\"")))
            .and(body_string_contains("image/png"))
            .and(body_string_contains("not really a png"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": true })))
            .expect(1)
            .mount(&server)
            .await;

        let api = ApiClient::new(server.uri(), None);
        let mut session = EditSession::load(&api, "42", Tz::UTC).await;
        let draft = session.draft_mut().expect("editable");
        draft.media.add_files(vec![LocalFile::from_path(image.path())]);
        assert_eq!(draft.media.pending().len(), 1);

        session.submit(&api).await.expect("submit with upload");
        assert_eq!(session.phase(), &EditPhase::Submitted);
    }

    #[tokio::test]
    async fn missing_upload_file_keeps_session_editable() {
        let server = MockServer::start().await;
        mount_detail(&server).await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let api = ApiClient::new(server.uri(), None);
        let mut session = EditSession::load(&api, "42", Tz::UTC).await;
        session
            .draft_mut()
            .expect("editable")
            .media
            .add_files(vec![LocalFile::new("/definitely/not/here.png", "image/png")]);

        let err = session.submit(&api).await.expect_err("unreadable file");
        assert!(matches!(err, SubmitError::Media(_)));
        assert_eq!(session.phase(), &EditPhase::Editing);
        assert!(session.draft().is_some());
    }

    #[tokio::test]
    async fn rejected_submit_keeps_draft_and_message() {
        let server = MockServer::start().await;
        mount_detail(&server).await;
        Mock::given(method("POST"))
            .and(path("/events/42"))
            .respond_with(
                ResponseTemplate::new(422)
                    .set_body_json(json!({ "message": "The price must be a number." })),
            )
            .mount(&server)
            .await;

        let api = ApiClient::new(server.uri(), None);
        let mut session = EditSession::load(&api, "42", Tz::UTC).await;
        session.draft_mut().expect("editable").tiers[0].price = "lots".to_string();

        let err = session.submit(&api).await.expect_err("rejected");
        assert_eq!(err.to_string(), "The price must be a number.");
        assert_eq!(session.phase(), &EditPhase::Editing);
        assert_eq!(session.last_error(), Some("The price must be a number."));
        assert_eq!(session.draft().expect("draft kept").tiers[0].price, "lots");
    }

    #[test]
    fn rejection_without_message_uses_fallback() {
        let mut session = EditSession::new("42");
        session.start_editing(EventDraft::default());
        session.phase = EditPhase::Submitting;

        let err = session
            .finish_submit(Err(ApiError::Http("connection reset".to_string())))
            .expect_err("rejected");
        assert_eq!(err.to_string(), UPDATE_FAILURE);
        assert_eq!(session.phase(), &EditPhase::Editing);
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_network() {
        let server = MockServer::start().await;
        mount_detail(&server).await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let api = ApiClient::new(server.uri(), None);
        let mut session = EditSession::load(&api, "42", Tz::UTC).await;
        session.draft_mut().expect("editable").tiers.clear();
        assert!(!session.can_submit());

        let err = session.submit(&api).await.expect_err("invalid");
        assert!(matches!(err, SubmitError::Invalid(ref issues) if issues == &vec![ValidationIssue::NoTiers]));
        assert_eq!(session.phase(), &EditPhase::Editing);
    }

    #[tokio::test]
    async fn second_submit_is_refused_while_in_flight() {
        let server = MockServer::start().await;
        mount_detail(&server).await;

        let api = ApiClient::new(server.uri(), None);
        let mut session = EditSession::load(&api, "42", Tz::UTC).await;
        session.begin_submit().expect("first submit");
        assert!(session.draft_mut().is_none());
        assert!(matches!(session.begin_submit(), Err(SubmitError::InFlight)));
    }
}
