//! pipeline
//!
//! Runs the applicable checks over the located packages and aggregates
//! their reports into a single outcome.
//!
//! # Execution Model
//!
//! Strictly sequential: packages and checks run one at a time in discovery
//! order, and no check short-circuits the run. Every applicable check for
//! every applicable package executes even after an early failure, so one
//! invocation reports every problem.
//!
//! Reports are printed as they are produced, mirroring how the checks
//! stream in a CI log; the caller prints the aggregate summary.
//!
//! # Skips
//!
//! A package with no code directory, no package definition, or no manifest
//! is excluded from the relevant check with a debug note. Skips are neither
//! failures nor errors; a run with zero eligible packages passes.

use std::path::Path;

use crate::checks::tests::{eligible_roots, TestRunner};
use crate::checks::{deps::Depcheck, manifest, scan, CheckError};
use crate::core::config::Config;
use crate::core::types::{ChangeSet, CheckKind, CheckReport, PipelineOutcome};
use crate::repo::{self, discover, locate};
use crate::ui::output::{self, Verbosity};
use crate::validate::ManifestValidator;

/// Run the dependency check over every affected package.
///
/// # Errors
///
/// Returns `CheckError` when the analyzer is broken; a package with
/// dependency violations is a failing report, not an error.
pub fn run_dependency_checks(
    root: &Path,
    config: &Config,
    changes: &ChangeSet,
    verbosity: Verbosity,
) -> Result<PipelineOutcome, CheckError> {
    let depcheck = Depcheck::new(config.tools.depcheck.as_str());
    let mut outcome = PipelineOutcome::new();

    for package in locate::affected_roots(changes, &config.skip) {
        let package_dir = root.join(package.as_str());
        // A root deleted by the change under test is a skip, not an error.
        if !package_dir.exists() {
            output::debug(format!("skipping {package}: root does not exist"), verbosity);
            continue;
        }

        let code = package_dir.join(repo::CODE_DIR);
        if !code.is_dir() {
            output::debug(format!("skipping {package}: no code directory"), verbosity);
            continue;
        }
        if !code.join(repo::PACKAGE_DEFINITION).is_file() {
            output::debug(
                format!("skipping {package}: no {}", repo::PACKAGE_DEFINITION),
                verbosity,
            );
            continue;
        }

        let report = CheckReport {
            kind: CheckKind::Dependencies,
            target: format!("{}/{}", package, repo::CODE_DIR),
            result: depcheck.run(&code)?,
        };
        output::report(&report, verbosity);
        outcome.push(report);
    }

    Ok(outcome)
}

/// Validate every manifest descriptor found under the root.
///
/// Manifest validation is repo-wide by design: a schema change on the
/// service side can invalidate manifests the current diff never touched.
pub async fn run_manifest_checks(
    root: &Path,
    config: &Config,
    validator: &dyn ManifestValidator,
    verbosity: Verbosity,
) -> Result<PipelineOutcome, CheckError> {
    let manifests =
        discover::find_manifests(root, config.max_depth).map_err(|source| CheckError::Io {
            path: root.to_path_buf(),
            source,
        })?;

    let mut outcome = PipelineOutcome::new();
    for path in manifests {
        let shown = path.strip_prefix(root).unwrap_or(&path);
        let report = CheckReport {
            kind: CheckKind::Manifest,
            target: shown.display().to_string(),
            result: manifest::run(validator, &path).await?,
        };
        output::report(&report, verbosity);
        outcome.push(report);
    }

    Ok(outcome)
}

/// Install dependencies and run the test suite for every eligible package.
pub fn run_test_checks(
    root: &Path,
    config: &Config,
    changes: &ChangeSet,
    verbosity: Verbosity,
) -> Result<PipelineOutcome, CheckError> {
    let runner = TestRunner::new(config.tools.npm.as_str(), config.tools.npx.as_str());
    let mut outcome = PipelineOutcome::new();

    for package in eligible_roots(changes, root) {
        let Some(code) = discover::code_dir(&root.join(package.as_str())) else {
            output::debug(
                format!("skipping {package}: no resolvable code directory"),
                verbosity,
            );
            continue;
        };

        let shown = code.strip_prefix(root).unwrap_or(&code).display().to_string();
        output::print(format!("running tests in {shown}"), verbosity);

        let report = CheckReport {
            kind: CheckKind::Tests,
            target: shown,
            result: runner.run(&code)?,
        };
        output::report(&report, verbosity);
        outcome.push(report);
    }

    Ok(outcome)
}

/// Scan the changed files for internal endpoints and credentials.
pub fn run_scan(root: &Path, changes: &ChangeSet, verbosity: Verbosity) -> PipelineOutcome {
    let report = CheckReport {
        kind: CheckKind::Scan,
        target: "changed files".to_string(),
        result: scan::run(changes, root),
    };
    output::report(&report, verbosity);

    let mut outcome = PipelineOutcome::new();
    outcome.push(report);
    outcome
}

/// Run every check in order and aggregate the reports.
///
/// Order matches the CI pipeline stages: dependencies, manifests, tests,
/// then the source scan.
pub async fn run_all(
    root: &Path,
    config: &Config,
    changes: &ChangeSet,
    validator: &dyn ManifestValidator,
    verbosity: Verbosity,
) -> Result<PipelineOutcome, CheckError> {
    let mut outcome = PipelineOutcome::new();
    outcome.extend(run_dependency_checks(root, config, changes, verbosity)?);
    outcome.extend(run_manifest_checks(root, config, validator, verbosity).await?);
    outcome.extend(run_test_checks(root, config, changes, verbosity)?);
    outcome.extend(run_scan(root, changes, verbosity));
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{MockValidator, Verdict};
    use std::fs;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn dependency_checks_skip_packages_without_code() {
        let repo = TempDir::new().unwrap();
        write(&repo.path().join("pkgA/manifest.yaml"), "name: a\n");

        let changes = ChangeSet::parse("pkgA/manifest.yaml");
        let outcome = run_dependency_checks(
            repo.path(),
            &Config::default(),
            &changes,
            Verbosity::Quiet,
        )
        .unwrap();

        assert!(outcome.reports().is_empty());
        assert!(outcome.passed());
    }

    #[test]
    fn dependency_checks_skip_deleted_roots() {
        let repo = TempDir::new().unwrap();
        let changes = ChangeSet::parse("gone/code/index.ts");
        let outcome = run_dependency_checks(
            repo.path(),
            &Config::default(),
            &changes,
            Verbosity::Quiet,
        )
        .unwrap();
        assert!(outcome.reports().is_empty());
    }

    #[tokio::test]
    async fn manifest_checks_cover_every_discovered_manifest() {
        let repo = TempDir::new().unwrap();
        write(&repo.path().join("pkgA/manifest.yaml"), "name: a\n");
        write(&repo.path().join("pkgB/manifest.yaml"), "name: b\n");

        let validator = MockValidator::new();
        let outcome = run_manifest_checks(
            repo.path(),
            &Config::default(),
            &validator,
            Verbosity::Quiet,
        )
        .await
        .unwrap();

        assert_eq!(outcome.reports().len(), 2);
        assert!(outcome.passed());
        assert_eq!(validator.calls().len(), 2);
    }

    #[tokio::test]
    async fn rejected_manifest_fails_the_outcome() {
        let repo = TempDir::new().unwrap();
        write(&repo.path().join("pkgA/manifest.yaml"), "name: a\n");

        let validator = MockValidator::new();
        validator.push_verdict(Verdict::Rejected(vec!["field X required".into()]));

        let outcome = run_manifest_checks(
            repo.path(),
            &Config::default(),
            &validator,
            Verbosity::Quiet,
        )
        .await
        .unwrap();

        assert!(!outcome.passed());
        assert_eq!(outcome.failures().count(), 1);
    }

    #[test]
    fn test_checks_skip_roots_without_code_dir() {
        let repo = TempDir::new().unwrap();
        write(&repo.path().join("pkgA/manifest.yaml"), "name: a\n");

        let changes = ChangeSet::parse("pkgA/manifest.yaml");
        let outcome =
            run_test_checks(repo.path(), &Config::default(), &changes, Verbosity::Quiet).unwrap();
        assert!(outcome.reports().is_empty());
    }

    #[test]
    fn test_checks_run_in_the_resolved_code_dir() {
        let repo = TempDir::new().unwrap();
        write(&repo.path().join("pkgA/manifest.yaml"), "name: a\n");
        fs::create_dir_all(repo.path().join("pkgA/code")).unwrap();

        // Stub both tools with `true` so the suite passes.
        let mut config = Config::default();
        config.tools.npm = "true".into();
        config.tools.npx = "true".into();

        let changes = ChangeSet::parse("pkgA/code/index.ts");
        let outcome = run_test_checks(repo.path(), &config, &changes, Verbosity::Quiet).unwrap();

        assert_eq!(outcome.reports().len(), 1);
        assert!(outcome.passed());
        assert_eq!(outcome.reports()[0].target, "pkgA/code");
    }

    #[test]
    fn scan_produces_a_single_report() {
        let repo = TempDir::new().unwrap();
        let outcome = run_scan(repo.path(), &ChangeSet::parse(""), Verbosity::Quiet);
        assert_eq!(outcome.reports().len(), 1);
        assert!(outcome.passed());
    }
}
