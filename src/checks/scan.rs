//! checks::scan
//!
//! Source scan of changed files for internal-endpoint references and
//! hardcoded credentials.
//!
//! # Behavior
//!
//! Two sweeps over the change list:
//!
//! - **Endpoints**: `.js`/`.ts` files are searched for `internal/...`
//!   references. Snap-ins must stay on public APIs; the one test-only
//!   endpoint is exempt.
//! - **Credentials**: every changed file is searched for JWT-shaped
//!   secrets, in raw and base64-wrapped form. The token patterns follow
//!   the gitleaks rule set.
//!
//! Generated SDK files (`private-internal-sdk.ts`) legitimately name
//! internal endpoints and are excluded from both sweeps. Files that cannot
//! be read (deleted in the diff, or binary) are skipped.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::core::types::{ChangeSet, CheckResult};

/// Generated SDK files are allowed to reference internal endpoints.
const SDK_EXEMPT_SUFFIX: &str = "private-internal-sdk.ts";

/// Endpoint used only by the test harness; not a violation on its own.
const EXEMPT_ENDPOINT: &str = "internal/snap-ins.system-update'";

/// Internal endpoint reference, including the delimiter that closes it.
const ENDPOINT_PATTERN: &str = r#"internal/[^?'`"]*[?'`"\s\n]"#;

/// JWT-shaped token.
const JWT_PATTERN: &str = r#"\b(ey[a-zA-Z0-9]{17,}\.ey[a-zA-Z0-9/\\_-]{17,}\.(?:[a-zA-Z0-9/\\_-]{10,}={0,2})?)(?:['|"|\n|\r|\s|`|;]|$)"#;

/// Base64-wrapped JWT (`ZXlK` is `eyJ` encoded).
const JWT_BASE64_PATTERN: &str = r"\bZXlK(?:(aGJHY2lPaU)|(aGNIVWlPaU)|(aGNIWWlPaU)|(aGRXUWlPaU)|(aU5qUWlP)|(amNtbDBJanBi)|(amRIa2lPaU)|(bGNHc2lPbn)|(bGJtTWlPaU)|(cWEzVWlPaU)|(cWQyc2lPb)|(cGMzTWlPaU)|(cGRpSTZJ)|(cmFXUWlP)|(clpYbGZiM0J6SWpwY)|(cmRIa2lPaUp)|(dWIyNWpaU0k2)|(d01tTWlP)|(d01uTWlPaU)|(d2NIUWlPaU)|(emRXSWlPaU)|(emRuUWlP)|(MFlXY2lPaU)|(MGVYQWlPaUp)|(MWNtd2l)|(MWMyVWlPaUp)|(MlpYSWlPaU)|(MlpYSnphVzl1SWpv)|(NElqb2)|(NE5XTWlP)|(NE5YUWlPaU)|(NE5YUWpVekkxTmlJNkl)|(NE5YVWlPaU)|(NmFYQWlPaU))[a-zA-Z0-9/\\_+\-\r\n]{40,}={0,2}";

fn endpoint_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ENDPOINT_PATTERN).expect("static pattern compiles"))
}

fn token_res() -> &'static [Regex; 2] {
    static RES: OnceLock<[Regex; 2]> = OnceLock::new();
    RES.get_or_init(|| {
        [
            Regex::new(JWT_PATTERN).expect("static pattern compiles"),
            Regex::new(JWT_BASE64_PATTERN).expect("static pattern compiles"),
        ]
    })
}

/// Scan the changed files under `repo_root`.
///
/// Findings of either kind fail the check, one diagnostic per finding.
pub fn run(changes: &ChangeSet, repo_root: &Path) -> CheckResult {
    let mut diagnostics = Vec::new();

    for path in changes.iter() {
        if path.ends_with(SDK_EXEMPT_SUFFIX) {
            continue;
        }

        let Ok(content) = fs::read_to_string(repo_root.join(path)) else {
            continue;
        };

        if is_scannable_source(path) {
            for endpoint in endpoint_findings(&content) {
                diagnostics.push(format!(
                    "{}: internal endpoint {}",
                    path,
                    endpoint.trim_end()
                ));
            }
        }

        if has_token(&content) {
            diagnostics.push(format!("{}: possible hardcoded token", path));
        }
    }

    if diagnostics.is_empty() {
        CheckResult::Pass
    } else {
        CheckResult::Fail(diagnostics)
    }
}

/// Whether the endpoint sweep applies to this path.
fn is_scannable_source(path: &str) -> bool {
    path.ends_with(".ts") || path.ends_with(".js")
}

/// Unique internal-endpoint references in file content, in match order.
///
/// A file whose only reference is the exempt test endpoint yields nothing;
/// once any other reference is present, everything is reported.
pub fn endpoint_findings(content: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for m in endpoint_re().find_iter(content) {
        let text = m.as_str().to_string();
        if !found.contains(&text) {
            found.push(text);
        }
    }

    if found.len() == 1 && found[0] == EXEMPT_ENDPOINT {
        return Vec::new();
    }
    found
}

/// Whether file content matches any credential pattern.
pub fn has_token(content: &str) -> bool {
    token_res().iter().any(|re| re.is_match(content))
}
