//! Persisted session lifecycle

use std::path::PathBuf;

use chrono::Utc;

use super::client::AuthClient;
use super::secret::SecretString;
use super::session::Session;
use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{AppPaths, BackendSettings};
use crate::error::{ExpenseError, ExpenseResult};
use crate::storage::file_io::{read_json_lenient, remove_if_exists, write_json_atomic};

/// Loads, creates and removes the session stored in `session.json`
pub struct SessionManager {
    session_file: PathBuf,
    backend: Option<BackendSettings>,
    audit: AuditLogger,
}

impl SessionManager {
    pub fn new(paths: &AppPaths, backend: Option<BackendSettings>) -> Self {
        Self {
            session_file: paths.session_file(),
            backend,
            audit: AuditLogger::new(paths.audit_log()),
        }
    }

    /// The stored session, expired or not
    fn stored(&self) -> Option<Session> {
        read_json_lenient::<Option<Session>, _>(&self.session_file)
    }

    /// The signed-in user, if any
    ///
    /// An expired session is treated as absent.
    pub fn current(&self) -> Option<Session> {
        let session = self.stored()?;
        if session.is_expired(Utc::now()) {
            tracing::info!("stored session has expired");
            return None;
        }
        Some(session)
    }

    /// Sign in with email and password and persist the session
    pub fn sign_in(&self, email: &str, password: &SecretString) -> ExpenseResult<Session> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ExpenseError::Validation(
                "Email and password are required".into(),
            ));
        }

        let client = AuthClient::new(self.require_backend()?)?;
        let session = client.sign_in(email, password)?;
        write_json_atomic(&self.session_file, &session)?;

        self.audit
            .record(&AuditEntry::sign_in(session.user_id.to_string(), &session.email));
        Ok(session)
    }

    /// Sign out, returning the session that was removed
    ///
    /// Revoking the token on the backend is best-effort; the local session
    /// is removed even when that call fails.
    pub fn sign_out(&self) -> ExpenseResult<Option<Session>> {
        let Some(session) = self.stored() else {
            remove_if_exists(&self.session_file)?;
            return Ok(None);
        };

        match &self.backend {
            Some(backend) => {
                let revoked = AuthClient::new(backend)
                    .and_then(|client| client.sign_out(&session.access_token));
                if let Err(err) = revoked {
                    tracing::warn!("backend sign-out failed: {}", err);
                }
            }
            None => tracing::debug!("no backend configured; clearing local session only"),
        }

        remove_if_exists(&self.session_file)?;
        self.audit
            .record(&AuditEntry::sign_out(session.user_id.to_string(), &session.email));
        Ok(Some(session))
    }

    fn require_backend(&self) -> ExpenseResult<&BackendSettings> {
        self.backend.as_ref().ok_or_else(|| {
            ExpenseError::Config(
                "No backend configured. Set EXPENSE_TRACKER_API_URL and EXPENSE_TRACKER_API_KEY"
                    .into(),
            )
        })
    }
}
