//! HTTP plumbing shared by the remote store and the auth client
//!
//! The hosted backend speaks plain JSON over HTTPS. Every request carries
//! the project `apikey` header; authenticated requests add a bearer token.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::{Method, StatusCode, Url};
use serde::Deserialize;

use crate::config::BackendSettings;
use crate::error::{ExpenseError, ExpenseResult};

/// Error body shapes returned by the REST and auth endpoints
#[derive(Debug, Default, Deserialize)]
struct ErrorResponse {
    message: Option<String>,
    msg: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl ErrorResponse {
    fn into_message(self) -> Option<String> {
        self.message
            .or(self.msg)
            .or(self.error_description)
            .or(self.error)
    }
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: Url,
    api_key: String,
    http: Client,
}

impl BackendClient {
    pub fn new(settings: &BackendSettings) -> ExpenseResult<Self> {
        settings.validate()?;
        let base_url = Url::parse(&settings.api_url)
            .map_err(|err| ExpenseError::Config(format!("invalid backend URL: {err}")))?;
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|err| ExpenseError::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            base_url,
            api_key: settings.api_key.clone(),
            http,
        })
    }

    /// Resolve a path such as `rest/v1/expenses` against the project URL
    pub fn endpoint(&self, path: &str) -> ExpenseResult<Url> {
        self.base_url
            .join(path)
            .map_err(|err| ExpenseError::Config(format!("invalid endpoint {path}: {err}")))
    }

    /// Start a request with the project key attached
    pub fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", &self.api_key)
    }

    /// Start a request authenticated as the signed-in user
    pub fn authed(&self, method: Method, url: Url, access_token: &str) -> RequestBuilder {
        self.request(method, url).bearer_auth(access_token)
    }

    /// Send a request, turning non-success statuses into errors
    pub fn send(&self, request: RequestBuilder) -> ExpenseResult<Response> {
        let res = request.send().map_err(|err| {
            tracing::warn!("backend request failed: {err}");
            ExpenseError::store(err.to_string())
        })?;

        if res.status().is_success() {
            return Ok(res);
        }

        let status = res.status();
        let body = res.text().unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "backend returned an error");
        Err(map_status(status, &body))
    }
}

/// Map a failed response to the error taxonomy
pub fn map_status(status: StatusCode, body: &str) -> ExpenseError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(ErrorResponse::into_message)
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });

    match status.as_u16() {
        401 | 403 => ExpenseError::Auth(message),
        code => ExpenseError::store_status(code, message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_status_auth() {
        let err = map_status(StatusCode::UNAUTHORIZED, r#"{"message":"JWT expired"}"#);
        assert!(err.is_auth());
        assert!(err.to_string().contains("JWT expired"));
    }

    #[test]
    fn test_map_status_store() {
        let err = map_status(
            StatusCode::BAD_REQUEST,
            r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
        );
        assert_eq!(
            err.to_string(),
            "Store error (HTTP 400): Invalid login credentials"
        );
    }

    #[test]
    fn test_map_status_plain_body() {
        let err = map_status(StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(err.to_string(), "Store error (HTTP 502): upstream down");

        let err = map_status(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(
            err.to_string(),
            "Store error (HTTP 500): Internal Server Error"
        );
    }

    #[test]
    fn test_endpoint_join() {
        let client =
            BackendClient::new(&BackendSettings::new("https://demo.supabase.co", "anon")).unwrap();
        let url = client.endpoint("rest/v1/expenses").unwrap();
        assert_eq!(url.as_str(), "https://demo.supabase.co/rest/v1/expenses");
    }

    #[test]
    fn test_rejects_bad_settings() {
        assert!(BackendClient::new(&BackendSettings::new("https://demo.supabase.co", "")).is_err());
    }
}
