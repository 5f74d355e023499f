use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    User,
    Admin,
}

impl SessionKind {
    /// Admin and user tokens live under separate names and are never mixed.
    pub fn token_name(&self) -> &'static str {
        match self {
            SessionKind::User => "token",
            SessionKind::Admin => "admin_token",
        }
    }
}

/// Explicitly passed session state: who is signed in and with which token.
#[derive(Debug, Clone)]
pub struct SessionContext {
    kind: SessionKind,
    token: Option<String>,
    user: Option<User>,
}

impl SessionContext {
    pub fn new(kind: SessionKind, token: Option<String>, user: Option<User>) -> Self {
        let token = token.filter(|token| !token.trim().is_empty());
        Self { kind, token, user }
    }

    pub fn user_session(config: &AppConfig) -> Self {
        Self::new(
            SessionKind::User,
            config.user_token.clone(),
            config.user.clone(),
        )
    }

    pub fn admin_session(config: &AppConfig) -> Self {
        Self::new(SessionKind::Admin, config.admin_token.clone(), None)
    }

    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn require_token(&self) -> Result<&str, ApiError> {
        self.token()
            .ok_or(ApiError::MissingToken(self.kind.token_name()))
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn replace_user(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Hosts without a KYC status (or explicitly unverified) must verify before creating events.
    pub fn needs_verification(&self) -> bool {
        match self.user.as_ref().and_then(|user| user.kyc_status.as_deref()) {
            None => true,
            Some(status) => status.trim().is_empty() || status == "unverified",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RemoteId;

    fn user_with_status(status: Option<&str>) -> User {
        User {
            id: RemoteId::from(1u64),
            name: Some("Ada".to_string()),
            email: None,
            kyc_status: status.map(str::to_string),
            extra: Default::default(),
        }
    }

    #[test]
    fn blank_tokens_are_treated_as_signed_out() {
        let session = SessionContext::new(SessionKind::Admin, Some("  ".to_string()), None);
        let err = session.require_token().expect_err("no token");
        assert!(matches!(err, ApiError::MissingToken("admin_token")));
    }

    #[test]
    fn admin_session_ignores_user_token() {
        let config = AppConfig {
            user_token: Some("user-1".to_string()),
            ..AppConfig::default()
        };
        assert_eq!(SessionContext::admin_session(&config).token(), None);
        assert_eq!(SessionContext::user_session(&config).token(), Some("user-1"));
    }

    #[test]
    fn verification_gate_follows_kyc_status() {
        let mut session = SessionContext::new(SessionKind::User, None, None);
        assert!(session.needs_verification());

        session.replace_user(user_with_status(Some("unverified")));
        assert!(session.needs_verification());

        session.replace_user(user_with_status(Some("")));
        assert!(session.needs_verification());

        session.replace_user(user_with_status(Some("tier1")));
        assert!(!session.needs_verification());
    }
}
