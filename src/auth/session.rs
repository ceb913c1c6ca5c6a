//! The signed-in identity
//!
//! A session is what the backend hands back on a successful password
//! sign-in. It is persisted between invocations so that commands can act
//! on behalf of the user without prompting again.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::secret::SecretString;
use crate::models::UserId;

/// An authenticated user and the token that proves it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,

    pub email: String,

    /// Username chosen at sign-up, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    pub access_token: SecretString,

    /// When the access token stops being accepted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// A session whose token has passed its expiry counts as signed out;
    /// one with no known expiry never expires locally
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }

    /// Username, else the local part of the email, else "User"
    pub fn display_name(&self) -> String {
        self.username
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .or_else(|| Some(email_local_part(&self.email)).filter(|local| !local.is_empty()))
            .unwrap_or("User")
            .to_string()
    }

    /// Up to two leading characters of the email's local part, uppercased
    pub fn initials(&self) -> String {
        let local = email_local_part(&self.email);
        let source = if local.is_empty() { "U" } else { local };
        source.chars().take(2).flat_map(char::to_uppercase).collect()
    }
}

fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or_default().trim()
}

/// Read the `exp` claim from a JWT without verifying it
///
/// Only used to learn when a token the backend issued will lapse.
pub fn token_expiry(token: &str) -> Option<DateTime<Utc>> {
    #[derive(Deserialize)]
    struct Claims {
        exp: i64,
    }

    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;
    Utc.timestamp_opt(claims.exp, 0).single()
}
