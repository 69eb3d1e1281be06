//! checks::manifest
//!
//! Manifest schema validation against the remote service.
//!
//! Reads a manifest descriptor and submits its raw content through the
//! [`ManifestValidator`] seam. The verdict maps directly onto the check
//! result; transport failures propagate as errors and abort the run.

use std::fs;
use std::path::Path;

use super::CheckError;
use crate::core::types::CheckResult;
use crate::validate::{ManifestValidator, Verdict};

/// Validate one manifest descriptor file.
///
/// # Errors
///
/// Returns `CheckError::Io` when the manifest cannot be read and
/// `CheckError::Validation` when the service cannot be reached. A manifest
/// the service rejects is a `CheckResult::Fail`, not an error.
pub async fn run(
    validator: &dyn ManifestValidator,
    manifest_path: &Path,
) -> Result<CheckResult, CheckError> {
    let content = fs::read_to_string(manifest_path).map_err(|source| CheckError::Io {
        path: manifest_path.to_path_buf(),
        source,
    })?;

    match validator.validate(&content).await? {
        Verdict::Accepted => Ok(CheckResult::Pass),
        Verdict::Rejected(errors) => Ok(CheckResult::Fail(errors)),
    }
}
