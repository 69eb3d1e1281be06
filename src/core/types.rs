//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`ChangeSet`] - Ordered list of changed file paths from a diff
//! - [`PackageRoot`] - Validated top-level package directory name
//! - [`CheckKind`] - Which check produced a result
//! - [`CheckResult`] - Pass/fail outcome for one (target, check) pair
//! - [`CheckReport`] - A `CheckResult` tagged with its kind and target
//! - [`PipelineOutcome`] - Aggregate over all reports in a run
//!
//! # Validation
//!
//! `PackageRoot` enforces validity at construction time: a root is always a
//! single non-hidden path segment. Invalid values cannot be represented.
//!
//! # Examples
//!
//! ```
//! use snapcheck::core::types::{ChangeSet, PackageRoot};
//!
//! let changes = ChangeSet::parse("pkg/code/index.ts\npkg/manifest.yaml\n");
//! assert_eq!(changes.len(), 2);
//!
//! let root = PackageRoot::new("pkg").unwrap();
//! assert_eq!(root.as_str(), "pkg");
//!
//! // Invalid constructions fail at creation time
//! assert!(PackageRoot::new("").is_err());
//! assert!(PackageRoot::new(".github").is_err());
//! assert!(PackageRoot::new("a/b").is_err());
//! ```

use std::fmt;

use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid package root: {0}")]
    InvalidPackageRoot(String),
}

/// An ordered list of changed file paths, as produced by a diff tool.
///
/// Parsed from a single newline-separated string. Input order is preserved,
/// duplicates are kept, and blank lines are dropped. Paths may name files
/// that no longer exist (deletions); consumers must tolerate that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    paths: Vec<String>,
}

impl ChangeSet {
    /// Parse a newline-separated list of paths.
    pub fn parse(input: &str) -> Self {
        let paths = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        Self { paths }
    }

    /// Iterate over the paths in input order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// Number of entries (including duplicates).
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the change set has no entries.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// A validated top-level package directory name within the monorepo.
///
/// Package roots are the first path segment of a changed file. They must be:
/// - non-empty
/// - a single segment (no path separators)
/// - not hidden (no leading `.`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageRoot(String);

impl PackageRoot {
    /// Create a new validated package root.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidPackageRoot` if the name is empty, hidden,
    /// or contains a path separator.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        if name.is_empty() {
            return Err(TypeError::InvalidPackageRoot(
                "package root cannot be empty".into(),
            ));
        }
        if name.starts_with('.') {
            return Err(TypeError::InvalidPackageRoot(format!(
                "package root cannot be hidden: {name}"
            )));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(TypeError::InvalidPackageRoot(format!(
                "package root must be a single path segment: {name}"
            )));
        }
        Ok(Self(name))
    }

    /// The root as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PackageRoot> for String {
    fn from(root: PackageRoot) -> Self {
        root.0
    }
}

/// Which check produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    /// Unused/missing dependency analysis of a code directory.
    Dependencies,
    /// Remote schema validation of a manifest descriptor.
    Manifest,
    /// Package test execution.
    Tests,
    /// Internal-endpoint and credential scan of changed sources.
    Scan,
}

impl CheckKind {
    /// Human-readable check name, used in report banners.
    pub fn name(&self) -> &'static str {
        match self {
            CheckKind::Dependencies => "dependency check",
            CheckKind::Manifest => "manifest validation",
            CheckKind::Tests => "test run",
            CheckKind::Scan => "source scan",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a single check against a single target.
///
/// A `Fail` carries ordered, human-readable diagnostics (unused dependency
/// names, validation errors, scan findings). Infrastructure problems are
/// never represented here; those propagate as errors instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    /// The target satisfied the check.
    Pass,
    /// The target violated the check; diagnostics explain how.
    Fail(Vec<String>),
}

impl CheckResult {
    /// Whether this result is a pass.
    pub fn passed(&self) -> bool {
        matches!(self, CheckResult::Pass)
    }

    /// The diagnostics, empty for a pass.
    pub fn diagnostics(&self) -> &[String] {
        match self {
            CheckResult::Pass => &[],
            CheckResult::Fail(diags) => diags,
        }
    }
}

/// A `CheckResult` tagged with the check that produced it and its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Which check ran.
    pub kind: CheckKind,
    /// What it ran against (a code directory, manifest path, or file set).
    pub target: String,
    /// The outcome.
    pub result: CheckResult,
}

impl CheckReport {
    /// Whether this report is a pass.
    pub fn passed(&self) -> bool {
        self.result.passed()
    }
}

/// Aggregate outcome over all reports in a run.
///
/// Pure reduction: the run passes iff every report passes. An empty run
/// passes trivially (zero eligible packages is a policy success, not an
/// error).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineOutcome {
    reports: Vec<CheckReport>,
}

impl PipelineOutcome {
    /// Create an empty outcome.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reduce a collection of reports into an outcome.
    pub fn aggregate(reports: Vec<CheckReport>) -> Self {
        Self { reports }
    }

    /// Append a report.
    pub fn push(&mut self, report: CheckReport) {
        self.reports.push(report);
    }

    /// Absorb all reports from another outcome, preserving order.
    pub fn extend(&mut self, other: PipelineOutcome) {
        self.reports.extend(other.reports);
    }

    /// All reports in run order.
    pub fn reports(&self) -> &[CheckReport] {
        &self.reports
    }

    /// Reports that failed, in run order.
    pub fn failures(&self) -> impl Iterator<Item = &CheckReport> {
        self.reports.iter().filter(|r| !r.passed())
    }

    /// Whether every report passed.
    pub fn passed(&self) -> bool {
        self.reports.iter().all(CheckReport::passed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_set_drops_blank_lines() {
        let changes = ChangeSet::parse("a/code/x.ts\n\n  \nb/manifest.yaml\n");
        let paths: Vec<_> = changes.iter().collect();
        assert_eq!(paths, vec!["a/code/x.ts", "b/manifest.yaml"]);
    }

    #[test]
    fn change_set_keeps_duplicates_and_order() {
        let changes = ChangeSet::parse("b/f\na/f\nb/f");
        let paths: Vec<_> = changes.iter().collect();
        assert_eq!(paths, vec!["b/f", "a/f", "b/f"]);
    }

    #[test]
    fn empty_change_set() {
        assert!(ChangeSet::parse("").is_empty());
        assert!(ChangeSet::parse("\n\n").is_empty());
    }

    #[test]
    fn package_root_rejects_invalid() {
        assert!(PackageRoot::new("").is_err());
        assert!(PackageRoot::new(".hidden").is_err());
        assert!(PackageRoot::new("a/b").is_err());
        assert!(PackageRoot::new("a\\b").is_err());
    }

    #[test]
    fn package_root_accepts_plain_segment() {
        let root = PackageRoot::new("bulk-delete").unwrap();
        assert_eq!(root.as_str(), "bulk-delete");
        assert_eq!(root.to_string(), "bulk-delete");
    }

    #[test]
    fn check_result_diagnostics() {
        assert!(CheckResult::Pass.passed());
        assert!(CheckResult::Pass.diagnostics().is_empty());

        let fail = CheckResult::Fail(vec!["lodash".into()]);
        assert!(!fail.passed());
        assert_eq!(fail.diagnostics(), ["lodash".to_string()]);
    }

    #[test]
    fn empty_outcome_passes() {
        assert!(PipelineOutcome::aggregate(Vec::new()).passed());
    }

    #[test]
    fn outcome_fails_if_any_report_fails() {
        let mut outcome = PipelineOutcome::new();
        outcome.push(CheckReport {
            kind: CheckKind::Dependencies,
            target: "pkgA/code".into(),
            result: CheckResult::Pass,
        });
        assert!(outcome.passed());

        outcome.push(CheckReport {
            kind: CheckKind::Tests,
            target: "pkgB/code".into(),
            result: CheckResult::Fail(vec!["tests failed in pkgB/code".into()]),
        });
        assert!(!outcome.passed());
        assert_eq!(outcome.failures().count(), 1);
    }
}
