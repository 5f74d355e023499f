use std::str::FromStr;

use super::{Confirmation, ConsoleError};
use crate::api::ApiClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportTransition {
    Resolve,
    Close,
    Reopen,
}

impl FromStr for SupportTransition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "resolve" | "resolved" => Ok(SupportTransition::Resolve),
            "close" | "closed" => Ok(SupportTransition::Close),
            "reopen" | "open" => Ok(SupportTransition::Reopen),
            other => Err(format!("unknown ticket transition: {other}")),
        }
    }
}

impl SupportTransition {
    pub fn target_status(&self) -> &'static str {
        match self {
            SupportTransition::Resolve => "resolved",
            SupportTransition::Close => "closed",
            SupportTransition::Reopen => "open",
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            SupportTransition::Resolve => "resolve",
            SupportTransition::Close => "close",
            SupportTransition::Reopen => "reopen",
        }
    }

    pub fn allowed_from(&self, status: &str) -> bool {
        let settled = matches!(status, "resolved" | "closed");
        match self {
            SupportTransition::Resolve => !settled,
            SupportTransition::Close => status != "closed",
            SupportTransition::Reopen => settled,
        }
    }

    pub fn confirmation(&self) -> Confirmation {
        Confirmation {
            title: "Update Ticket Status".to_string(),
            message: format!(
                "Are you sure you want to mark this ticket as {}?",
                self.target_status().to_uppercase()
            ),
            destructive: *self == SupportTransition::Close,
        }
    }

    /// Checks the current status on the server, then applies the transition.
    pub async fn apply(&self, api: &ApiClient, ticket_id: &str) -> Result<(), ConsoleError> {
        let admin = api.admin();
        let ticket = admin
            .support_ticket(ticket_id)
            .await
            .map_err(|err| ConsoleError::from_api(err, "Failed to load ticket"))?;
        if !self.allowed_from(&ticket.status) {
            return Err(ConsoleError::Transition {
                action: self.verb(),
                status: ticket.status,
            });
        }
        admin
            .update_support_status(ticket_id, self.target_status())
            .await
            .map_err(|err| ConsoleError::from_api(err, "Failed to update status"))?;
        Ok(())
    }
}

pub async fn reply(api: &ApiClient, ticket_id: &str, message: &str) -> Result<(), ConsoleError> {
    if message.trim().is_empty() {
        return Err(ConsoleError::EmptyMessage);
    }
    api.admin()
        .reply_support(ticket_id, message)
        .await
        .map_err(|err| ConsoleError::from_api(err, "Failed to send message"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn transitions_follow_ticket_status() {
        assert!(SupportTransition::Resolve.allowed_from("open"));
        assert!(!SupportTransition::Resolve.allowed_from("resolved"));
        assert!(!SupportTransition::Resolve.allowed_from("closed"));

        assert!(SupportTransition::Close.allowed_from("resolved"));
        assert!(!SupportTransition::Close.allowed_from("closed"));

        assert!(SupportTransition::Reopen.allowed_from("closed"));
        assert!(SupportTransition::Reopen.allowed_from("resolved"));
        assert!(!SupportTransition::Reopen.allowed_from("open"));
    }

    #[test]
    fn confirmation_names_target_status() {
        assert_eq!(
            SupportTransition::Resolve.confirmation().message,
            "Are you sure you want to mark this ticket as RESOLVED?"
        );
    }

    #[tokio::test]
    async fn refuses_to_resolve_closed_ticket() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/admin/support/15"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "id": 15, "subject": "Refund", "status": "closed", "messages": [] }
            })))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let api = ApiClient::new(server.uri(), None);
        let err = SupportTransition::Resolve
            .apply(&api, "15")
            .await
            .expect_err("closed ticket");
        assert_eq!(err.to_string(), "cannot resolve a ticket that is closed");
    }

    #[tokio::test]
    async fn reopens_resolved_ticket() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/admin/support/15"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "id": 15, "status": "resolved" }
            })))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/admin/support/15/status"))
            .and(body_json(json!({ "status": "open" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": true })))
            .expect(1)
            .mount(&server)
            .await;

        let api = ApiClient::new(server.uri(), None);
        SupportTransition::Reopen
            .apply(&api, "15")
            .await
            .expect("reopen");
    }

    #[tokio::test]
    async fn blank_reply_is_not_sent() {
        let server = MockServer::start().await;
        let api = ApiClient::new(server.uri(), None);
        let err = reply(&api, "15", "   ").await.expect_err("blank");
        assert!(matches!(err, ConsoleError::EmptyMessage));
    }
}
