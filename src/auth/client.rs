//! Client for the backend's password auth endpoints

use chrono::{DateTime, Duration, TimeZone, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::secret::SecretString;
use super::session::{token_expiry, Session};
use crate::backend::BackendClient;
use crate::config::BackendSettings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::UserId;

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: SecretString,
    #[serde(default)]
    expires_in: Option<i64>,
    /// Unix seconds
    #[serde(default)]
    expires_at: Option<i64>,
    user: AuthUser,
}

#[derive(Debug, Deserialize)]
struct AuthUser {
    id: UserId,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: UserMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct UserMetadata {
    #[serde(default)]
    username: Option<String>,
}

impl TokenResponse {
    fn into_session(self, fallback_email: &str, now: DateTime<Utc>) -> Session {
        let expires_at = self
            .expires_at
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
            .or_else(|| token_expiry(&self.access_token))
            .or_else(|| self.expires_in.map(|secs| now + Duration::seconds(secs)));

        Session {
            user_id: self.user.id,
            email: self
                .user
                .email
                .unwrap_or_else(|| fallback_email.to_string()),
            username: self.user.user_metadata.username,
            access_token: self.access_token,
            expires_at,
        }
    }
}

pub struct AuthClient {
    backend: BackendClient,
}

impl AuthClient {
    pub fn new(settings: &BackendSettings) -> ExpenseResult<Self> {
        Ok(Self {
            backend: BackendClient::new(settings)?,
        })
    }

    /// Exchange an email and password for a session
    ///
    /// Rejected credentials surface as an authentication error.
    pub fn sign_in(&self, email: &str, password: &SecretString) -> ExpenseResult<Session> {
        let endpoint = self.backend.endpoint("auth/v1/token?grant_type=password")?;
        let body = PasswordGrant {
            email,
            password: password.expose(),
        };

        let res = self
            .backend
            .send(self.backend.request(Method::POST, endpoint).json(&body))
            .map_err(credentials_rejected)?;

        let token: TokenResponse = res
            .json()
            .map_err(|err| ExpenseError::store(format!("unexpected auth response: {err}")))?;

        tracing::info!("signed in");
        Ok(token.into_session(email, Utc::now()))
    }

    /// Revoke the session's token on the backend
    pub fn sign_out(&self, access_token: &SecretString) -> ExpenseResult<()> {
        let endpoint = self.backend.endpoint("auth/v1/logout")?;
        self.backend
            .send(self.backend.authed(Method::POST, endpoint, access_token.expose()))?;
        Ok(())
    }
}

/// The token endpoint answers bad credentials with 400
fn credentials_rejected(err: ExpenseError) -> ExpenseError {
    match err {
        ExpenseError::Store {
            status: Some(400 | 422),
            message,
        } => ExpenseError::Auth(message),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"{
        "access_token": "aaa.bbb.ccc",
        "token_type": "bearer",
        "expires_in": 3600,
        "expires_at": 1700003600,
        "refresh_token": "r",
        "user": {
            "id": "0b7e8f1a-2c3d-4e5f-8a9b-1c2d3e4f5a6b",
            "email": "priya@example.com",
            "user_metadata": {"username": "priya"}
        }
    }"#;

    #[test]
    fn test_token_response_to_session() {
        let token: TokenResponse = serde_json::from_str(RESPONSE).unwrap();
        let session = token.into_session("ignored@example.com", Utc::now());

        assert_eq!(session.email, "priya@example.com");
        assert_eq!(session.username.as_deref(), Some("priya"));
        assert_eq!(session.access_token.expose(), "aaa.bbb.ccc");
        assert_eq!(session.expires_at.unwrap().timestamp(), 1_700_003_600);
    }

    #[test]
    fn test_expiry_from_expires_in() {
        let json = RESPONSE.replace("\"expires_at\": 1700003600,", "");
        let token: TokenResponse = serde_json::from_str(&json).unwrap();
        let now = Utc.timestamp_opt(1_700_000_000, 0).single().unwrap();
        let session = token.into_session("x@example.com", now);

        assert_eq!(session.expires_at.unwrap().timestamp(), 1_700_003_600);
    }

    #[test]
    fn test_missing_metadata() {
        let json = r#"{
            "access_token": "t",
            "user": {"id": "0b7e8f1a-2c3d-4e5f-8a9b-1c2d3e4f5a6b"}
        }"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();
        let session = token.into_session("typed@example.com", Utc::now());

        assert_eq!(session.email, "typed@example.com");
        assert!(session.username.is_none());
        assert!(session.expires_at.is_none());
    }

    #[test]
    fn test_credentials_rejected() {
        let err = credentials_rejected(ExpenseError::store_status(400, "Invalid login credentials"));
        assert!(err.is_auth());

        let err = credentials_rejected(ExpenseError::store_status(503, "down"));
        assert!(err.is_store());
    }
}
