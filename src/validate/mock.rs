//! validate::mock
//!
//! Mock validator implementation for deterministic testing.
//!
//! # Design
//!
//! The mock validator queues verdicts in memory and records every manifest
//! it is asked to validate. An empty queue answers `Accepted`, so the happy
//! path needs no setup. A programmed error makes every call fail, for
//! exercising the infrastructure-error tier.
//!
//! # Example
//!
//! ```
//! use snapcheck::validate::{ManifestValidator, MockValidator, Verdict};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let validator = MockValidator::new();
//! validator.push_verdict(Verdict::Rejected(vec!["field X required".into()]));
//!
//! let first = validator.validate("name: pkg").await.unwrap();
//! assert_eq!(first, Verdict::Rejected(vec!["field X required".into()]));
//!
//! // Queue drained: subsequent calls accept
//! let second = validator.validate("name: other").await.unwrap();
//! assert!(second.accepted());
//!
//! assert_eq!(validator.calls().len(), 2);
//! # });
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{ManifestValidator, ValidationError, Verdict};

/// Mock validator for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone, Default)]
pub struct MockValidator {
    /// Internal state shared across clones.
    inner: Arc<Mutex<MockValidatorInner>>,
}

/// Internal mutable state.
#[derive(Debug, Default)]
struct MockValidatorInner {
    /// Queued verdicts, consumed front-first.
    verdicts: VecDeque<Verdict>,
    /// Error to fail every call with (for testing error paths).
    fail_with: Option<ValidationError>,
    /// Manifest contents received, for verification.
    calls: Vec<String>,
}

impl MockValidator {
    /// Create a new mock validator that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a verdict for a future call.
    pub fn push_verdict(&self, verdict: Verdict) {
        self.inner.lock().unwrap().verdicts.push_back(verdict);
    }

    /// Make every subsequent call fail with the given error.
    pub fn fail_with(&self, error: ValidationError) {
        self.inner.lock().unwrap().fail_with = Some(error);
    }

    /// The manifest contents received so far.
    pub fn calls(&self) -> Vec<String> {
        self.inner.lock().unwrap().calls.clone()
    }
}

#[async_trait]
impl ManifestValidator for MockValidator {
    async fn validate(&self, manifest: &str) -> Result<Verdict, ValidationError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(manifest.to_string());

        if let Some(error) = &inner.fail_with {
            return Err(error.clone());
        }

        Ok(inner.verdicts.pop_front().unwrap_or(Verdict::Accepted))
    }
}
