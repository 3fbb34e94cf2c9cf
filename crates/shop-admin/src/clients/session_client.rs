//! # Session Client
//!
//! Login, logout and the "is there a session" check used to gate every
//! admin command.
use crate::error::SessionError;
use crate::model::Credentials;
use admin_framework::{decode_field, Gateway, GatewayError, TokenStore};
use std::sync::Arc;
use tracing::{info, instrument, warn};

const LOGIN_PATH: &str = "/user/login";

#[derive(Clone)]
pub struct SessionClient {
    gateway: Arc<dyn Gateway>,
    tokens: TokenStore,
}

impl SessionClient {
    pub fn new(gateway: Arc<dyn Gateway>, tokens: TokenStore) -> Self {
        Self { gateway, tokens }
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Exchanges credentials for a token and persists it.
    ///
    /// Empty fields are rejected locally. A refusal by the backend surfaces
    /// the backend's own message.
    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn login(&self, credentials: Credentials) -> Result<(), SessionError> {
        if credentials.email.trim().is_empty() || credentials.password.is_empty() {
            return Err(SessionError::MissingCredentials);
        }
        let body = serde_json::to_value(&credentials)
            .map_err(|e| SessionError::ApiCommunicationError(e.to_string()))?;

        let response = match self.gateway.post(LOGIN_PATH, body).await {
            Ok(response) => response,
            Err(GatewayError::Unauthorized(message))
            | Err(GatewayError::Status { message, .. }) => {
                warn!(%message, "Login refused");
                return Err(SessionError::Rejected(message));
            }
            Err(e) => return Err(SessionError::ApiCommunicationError(e.to_string())),
        };

        let token: String = decode_field(response, "token")
            .map_err(|e| SessionError::ApiCommunicationError(e.to_string()))?;
        self.tokens
            .save(&token)
            .map_err(|e| SessionError::Storage(e.to_string()))?;
        info!("Logged in");
        Ok(())
    }

    /// Drops the stored token. Logging out without a session is a no-op.
    pub fn logout(&self) -> Result<(), SessionError> {
        self.tokens
            .clear()
            .map_err(|e| SessionError::Storage(e.to_string()))?;
        info!("Logged out");
        Ok(())
    }

    /// Fails with [`SessionError::MissingToken`] when nobody is logged in.
    pub fn require_session(&self) -> Result<(), SessionError> {
        match self.tokens.load() {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(SessionError::MissingToken),
            Err(e) => Err(SessionError::Storage(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admin_framework::mock::MockGateway;
    use serde_json::json;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_store(name: &str) -> TokenStore {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let path: PathBuf = std::env::temp_dir()
            .join(format!("shop-admin-session-{name}-{nanos}"))
            .join("token");
        TokenStore::new(path)
    }

    #[tokio::test]
    async fn test_login_stores_token() {
        let mut mock = MockGateway::new();
        mock.expect_post("/user/login")
            .return_ok(json!({ "token": "abc.def" }));
        let tokens = scratch_store("login");
        let session = SessionClient::new(mock.gateway(), tokens.clone());

        session
            .login(Credentials::new("admin@shop.test", "secret"))
            .await
            .unwrap();

        assert_eq!(tokens.load().unwrap(), Some("abc.def".to_string()));
        assert_eq!(
            mock.requests()[0].body,
            Some(json!({ "email": "admin@shop.test", "password": "secret" }))
        );
        assert!(session.require_session().is_ok());
        session.logout().unwrap();
        assert_eq!(session.require_session(), Err(SessionError::MissingToken));
    }

    #[tokio::test]
    async fn test_empty_credentials_are_rejected_locally() {
        let mock = MockGateway::new();
        let session = SessionClient::new(mock.gateway(), scratch_store("empty"));

        let result = session.login(Credentials::new("", "secret")).await;

        assert_eq!(result, Err(SessionError::MissingCredentials));
        assert_eq!(
            SessionError::MissingCredentials.to_string(),
            "Please enter email and password"
        );
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_refused_login_surfaces_backend_message() {
        let mut mock = MockGateway::new();
        mock.expect_post("/user/login")
            .return_err(GatewayError::Unauthorized("Wrong password".to_string()));
        let tokens = scratch_store("refused");
        let session = SessionClient::new(mock.gateway(), tokens.clone());

        let result = session
            .login(Credentials::new("admin@shop.test", "nope"))
            .await;

        assert_eq!(result, Err(SessionError::Rejected("Wrong password".to_string())));
        assert!(!tokens.has_token());
    }
}
