//! End-to-end tests for the `snapci` binary.
//!
//! These tests drive the compiled binary with assert_cmd against temp
//! monorepos, pinning the exit-code contract: 0 for pass, 1 for check
//! failures, 2 for infrastructure errors.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// Test Fixtures
// =============================================================================

struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        fs::create_dir_all(dir.path().join("bin")).unwrap();
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn add_package(&self, root: &str) {
        let code = self.path().join(root).join("code");
        fs::create_dir_all(&code).unwrap();
        fs::write(
            self.path().join(root).join("manifest.yaml"),
            format!("name: {root}\n"),
        )
        .unwrap();
        fs::write(code.join("package.json"), "{\"name\": \"code\"}\n").unwrap();
    }

    fn stub(&self, name: &str, body: &str) -> PathBuf {
        let path = self.path().join("bin").join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path
    }

    /// Write `.snapci.toml` pointing the tools at stubs.
    fn write_config(&self, depcheck_json: &str) {
        let depcheck = self.stub("depcheck", &format!("echo '{depcheck_json}'"));
        let npm = self.stub("npm", "exit 0");
        let npx = self.stub("npx", "exit 0");
        fs::write(
            self.path().join(".snapci.toml"),
            format!(
                "[tools]\ndepcheck = \"{}\"\nnpm = \"{}\"\nnpx = \"{}\"\n",
                depcheck.display(),
                npm.display(),
                npx.display()
            ),
        )
        .unwrap();
    }

    fn snapci(&self) -> Command {
        let mut cmd = Command::cargo_bin("snapci").expect("binary builds");
        cmd.arg("--root").arg(self.path());
        cmd.env_remove("SNAPCI_CONFIG");
        cmd
    }
}

// =============================================================================
// deps
// =============================================================================

#[test]
fn deps_passes_a_clean_package() {
    let repo = TestRepo::new();
    repo.add_package("pkgA");
    repo.write_config(r#"{"dependencies": [], "missing": {}}"#);

    repo.snapci()
        .args(["deps", "--files", "pkgA/code/manifest.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "dependency check successful for pkgA/code",
        ));
}

#[test]
fn deps_fails_on_unused_dependencies() {
    let repo = TestRepo::new();
    repo.add_package("pkgB");
    repo.write_config(r#"{"dependencies": ["lodash"], "missing": {}}"#);

    repo.snapci()
        .args(["deps", "--files", "pkgB/code/manifest.yaml"])
        .assert()
        .code(1)
        .stdout(
            predicate::str::contains("dependency check failed for pkgB/code")
                .and(predicate::str::contains("lodash")),
        );
}

#[test]
fn deps_succeeds_when_the_only_root_is_skip_listed() {
    let repo = TestRepo::new();
    repo.add_package("e2e");
    repo.write_config(r#"{"dependencies": ["lodash"], "missing": {}}"#);

    repo.snapci()
        .args(["deps", "--files", "e2e/code/index.ts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("e2e").not());
}

#[test]
fn deps_reads_the_change_list_from_stdin() {
    let repo = TestRepo::new();
    repo.add_package("pkgA");
    repo.write_config(r#"{"dependencies": [], "missing": {}}"#);

    repo.snapci()
        .args(["deps", "--files", "-"])
        .write_stdin("pkgA/code/index.ts\n")
        .assert()
        .success();
}

#[test]
fn broken_depcheck_output_exits_2() {
    let repo = TestRepo::new();
    repo.add_package("pkgA");
    repo.write_config("not json at all");

    repo.snapci()
        .args(["deps", "--files", "pkgA/code/index.ts"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unparseable output"));
}

// =============================================================================
// test
// =============================================================================

#[test]
fn test_command_runs_the_suite_for_affected_packages() {
    let repo = TestRepo::new();
    repo.add_package("pkgA");
    repo.write_config(r#"{"dependencies": [], "missing": {}}"#);

    repo.snapci()
        .args(["test", "--files", "pkgA/code/index.ts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("test run successful for pkgA/code"));
}

#[test]
fn test_command_fails_when_the_suite_fails() {
    let repo = TestRepo::new();
    repo.add_package("pkgA");
    repo.write_config(r#"{"dependencies": [], "missing": {}}"#);
    // Replace the runner stub with a failing one.
    repo.stub("npx", "exit 1");

    repo.snapci()
        .args(["test", "--files", "pkgA/code/index.ts"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("tests failed in"));
}

// =============================================================================
// scan
// =============================================================================

#[test]
fn scan_flags_internal_endpoints_in_changed_sources() {
    let repo = TestRepo::new();
    repo.add_package("pkgA");
    fs::write(
        repo.path().join("pkgA/code/client.ts"),
        "post('internal/works.delete', body)\n",
    )
    .unwrap();

    repo.snapci()
        .args(["scan", "--files", "pkgA/code/client.ts"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("internal endpoint"));
}

#[test]
fn scan_passes_clean_changes() {
    let repo = TestRepo::new();
    repo.add_package("pkgA");
    fs::write(
        repo.path().join("pkgA/code/index.ts"),
        "export const n = 1;\n",
    )
    .unwrap();

    repo.snapci()
        .args(["scan", "--files", "pkgA/code/index.ts"])
        .assert()
        .success();
}

// =============================================================================
// manifests
// =============================================================================

#[test]
fn manifests_without_a_token_exits_2() {
    let repo = TestRepo::new();
    repo.add_package("pkgA");

    repo.snapci()
        .arg("manifests")
        .env_remove("ACTOR_JWT")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("ACTOR_JWT"));
}

#[tokio::test(flavor = "multi_thread")]
async fn manifests_validates_each_discovered_manifest() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/internal/snap-in-versions.validate-manifest"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"validation_errors": []})),
        )
        .expect(2)
        .mount(&server)
        .await;

    let repo = TestRepo::new();
    repo.add_package("pkgA");
    repo.add_package("pkgB");

    let endpoint = format!("{}/internal/snap-in-versions.validate-manifest", server.uri());
    repo.snapci()
        .args(["manifests", "--endpoint", &endpoint])
        .env("ACTOR_JWT", "test-token")
        .assert()
        .success()
        .stdout(predicate::str::contains("manifest validation successful").count(2));
}

#[tokio::test(flavor = "multi_thread")]
async fn manifests_fails_on_validation_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/internal/snap-in-versions.validate-manifest"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"validation_errors": ["field X required"]})),
        )
        .mount(&server)
        .await;

    let repo = TestRepo::new();
    repo.add_package("pkgA");

    let endpoint = format!("{}/internal/snap-in-versions.validate-manifest", server.uri());
    repo.snapci()
        .args(["manifests", "--endpoint", &endpoint])
        .env("ACTOR_JWT", "test-token")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("field X required"));
}

// =============================================================================
// all
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn all_aggregates_every_check() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/internal/snap-in-versions.validate-manifest"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"validation_errors": []})),
        )
        .mount(&server)
        .await;

    let repo = TestRepo::new();
    repo.add_package("pkgA");
    repo.write_config(r#"{"dependencies": [], "missing": {}}"#);
    fs::write(
        repo.path().join("pkgA/code/index.ts"),
        "export const n = 1;\n",
    )
    .unwrap();

    let endpoint = format!("{}/internal/snap-in-versions.validate-manifest", server.uri());
    repo.snapci()
        .args([
            "all",
            "--files",
            "pkgA/code/index.ts",
            "--endpoint",
            &endpoint,
        ])
        .env("ACTOR_JWT", "test-token")
        .assert()
        .success()
        .stdout(predicate::str::contains("all checks passed"));
}

// =============================================================================
// completion
// =============================================================================

#[test]
fn completion_writes_a_script() {
    Command::cargo_bin("snapci")
        .unwrap()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}
