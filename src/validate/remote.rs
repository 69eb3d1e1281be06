//! validate::remote
//!
//! HTTP client for the snap-in manifest validation service.
//!
//! # Protocol
//!
//! `POST <endpoint>` with JSON body `{"manifest": <raw file content>}` and
//! the auth token forwarded verbatim as the `Authorization` header value.
//! The service answers 200 with `{"validation_errors": [...]}`; any other
//! status carries a plain error body.
//!
//! # Error Mapping
//!
//! - non-200 status: `Verdict::Rejected` with the body text as the single
//!   entry (the service explains itself in the body)
//! - 200, empty `validation_errors`: `Verdict::Accepted`
//! - 200, non-empty `validation_errors`: `Verdict::Rejected` with the
//!   rendered entries
//! - connection/timeout failure: `ValidationError::Network`, which aborts
//!   the run rather than masquerading as a rejected manifest

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use super::{ManifestValidator, ValidationError, Verdict};

/// HTTP implementation of [`ManifestValidator`].
pub struct RemoteValidator {
    /// HTTP client for making requests
    client: Client,
    /// Validation endpoint URL
    endpoint: String,
    /// Auth token, forwarded verbatim
    token: String,
}

// Custom Debug to avoid exposing the token
impl std::fmt::Debug for RemoteValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteValidator")
            .field("endpoint", &self.endpoint)
            .field("has_token", &!self.token.is_empty())
            .finish()
    }
}

impl RemoteValidator {
    /// Create a validator for an endpoint with a static token.
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }
}

/// Request body for the validation endpoint.
#[derive(Serialize)]
struct ValidateRequest<'a> {
    manifest: &'a str,
}

/// Response body from the validation endpoint.
///
/// Entries in `validation_errors` are free-form JSON; the service emits
/// strings today but objects have been observed in other internal APIs, so
/// both render cleanly.
#[derive(Deserialize)]
struct ValidateResponse {
    #[serde(default)]
    validation_errors: Vec<serde_json::Value>,
}

fn render_entry(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
impl ManifestValidator for RemoteValidator {
    async fn validate(&self, manifest: &str) -> Result<Verdict, ValidationError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, self.token.as_str())
            .json(&ValidateRequest { manifest })
            .send()
            .await
            .map_err(|e| ValidationError::Network(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .map_err(|e| ValidationError::Network(e.to_string()))?;
            return Ok(Verdict::Rejected(vec![body]));
        }

        let parsed: ValidateResponse = response
            .json()
            .await
            .map_err(|e| ValidationError::InvalidResponse(e.to_string()))?;

        if parsed.validation_errors.is_empty() {
            Ok(Verdict::Accepted)
        } else {
            Ok(Verdict::Rejected(
                parsed.validation_errors.iter().map(render_entry).collect(),
            ))
        }
    }
}
