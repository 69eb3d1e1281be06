//! validate
//!
//! Manifest validation seam for the remote validation service.
//!
//! # Design
//!
//! The `ManifestValidator` trait is async because validation involves
//! network I/O. Implementations:
//!
//! - [`RemoteValidator`] - the production HTTP client
//! - [`MockValidator`] - deterministic in-memory implementation for tests
//!
//! A validator answers with a [`Verdict`]: the service's judgement of the
//! manifest. Transport problems are not verdicts; they surface as
//! [`ValidationError`] and abort the run, since a check that cannot reach
//! its backing service has not validated anything.

pub mod mock;
pub mod remote;

pub use mock::MockValidator;
pub use remote::RemoteValidator;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from validation transport.
///
/// These are infrastructure failures, kept distinct from a rejected
/// manifest. There is no retry logic at this layer.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    /// Network or connection error (unreachable host, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The service answered 200 but the body was not interpretable.
    #[error("invalid response from validation service: {0}")]
    InvalidResponse(String),
}

/// The validation service's judgement of one manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// HTTP success with an empty `validation_errors` array.
    Accepted,
    /// Validation errors, or the raw body of a non-success response.
    Rejected(Vec<String>),
}

impl Verdict {
    /// Whether the manifest was accepted.
    pub fn accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// Validates raw manifest content against the snap-in validation service.
#[async_trait]
pub trait ManifestValidator: Send + Sync {
    /// Submit manifest content and return the service's verdict.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the service cannot be reached or its
    /// response cannot be interpreted. A rejected manifest is a `Verdict`,
    /// not an error.
    async fn validate(&self, manifest: &str) -> Result<Verdict, ValidationError>;
}
