//! checks::deps
//!
//! Dependency hygiene check backed by an external depcheck-style analyzer.
//!
//! # Contract
//!
//! The analyzer is invoked as `<program> <code_dir> --json` and prints a
//! JSON object on stdout:
//!
//! ```json
//! { "dependencies": ["lodash"], "missing": { "axios": ["src/client.ts"] } }
//! ```
//!
//! `dependencies` lists declared-but-unused package names; `missing` maps
//! undeclared names to the files referencing them.
//!
//! # Precedence
//!
//! Unused dependencies take precedence: when both arrays are populated,
//! only the unused names are reported. A package fixes those first and the
//! next run surfaces whatever remains.

use std::collections::BTreeMap;
use std::path::Path;
use std::process::Command;

use serde::Deserialize;

use super::CheckError;
use crate::core::types::CheckResult;

/// Parsed output of the dependency analyzer.
///
/// `missing` is a `BTreeMap` so diagnostics come out in sorted name order
/// regardless of the analyzer's JSON ordering.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DepcheckReport {
    /// Declared but unused dependency names.
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Undeclared dependency names mapped to the files referencing them.
    #[serde(default)]
    pub missing: BTreeMap<String, Vec<String>>,
}

/// Handle on the external dependency analyzer.
#[derive(Debug, Clone)]
pub struct Depcheck {
    /// Program to invoke.
    program: String,
}

impl Default for Depcheck {
    fn default() -> Self {
        Self::new("depcheck")
    }
}

impl Depcheck {
    /// Create a handle invoking the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run the full check against a code directory.
    ///
    /// The caller guarantees `code_dir` exists and holds a package
    /// definition; packages that don't are skipped before this point.
    ///
    /// # Errors
    ///
    /// Returns `CheckError` when the analyzer cannot be started or its
    /// output cannot be parsed.
    pub fn run(&self, code_dir: &Path) -> Result<CheckResult, CheckError> {
        let report = self.scan(code_dir)?;
        Ok(evaluate(&report))
    }

    /// Invoke the analyzer and parse its JSON output.
    pub fn scan(&self, code_dir: &Path) -> Result<DepcheckReport, CheckError> {
        let output = Command::new(&self.program)
            .arg(code_dir)
            .arg("--json")
            .output()
            .map_err(|source| CheckError::ToolInvocation {
                tool: self.program.clone(),
                source,
            })?;

        // The analyzer exits nonzero when it finds violations; stdout is
        // the contract, the exit status carries no extra information.
        serde_json::from_slice(&output.stdout).map_err(|e| CheckError::ToolOutput {
            tool: self.program.clone(),
            message: e.to_string(),
        })
    }
}

/// Reduce an analyzer report to a check result.
pub fn evaluate(report: &DepcheckReport) -> CheckResult {
    if !report.dependencies.is_empty() {
        return CheckResult::Fail(report.dependencies.clone());
    }

    if !report.missing.is_empty() {
        let diagnostics = report
            .missing
            .iter()
            .map(|(name, files)| format!("{} (referenced by {})", name, files.join(", ")))
            .collect();
        return CheckResult::Fail(diagnostics);
    }

    CheckResult::Pass
}
