//! repo::locate
//!
//! Maps a raw change list to the set of affected package roots.
//!
//! # Algorithm
//!
//! For each changed path, in input order:
//!
//! 1. Skip hidden entries (leading `.`), e.g. workflow files under `.github/`.
//! 2. Skip entries that signal no package relevance: a path is relevant only
//!    if it names a manifest descriptor or touches a `code/` directory.
//! 3. Take the first path segment as the candidate root; collapse duplicates
//!    and drop roots named in the skip-list.
//!
//! The result preserves first-occurrence order, which downstream checks rely
//! on for deterministic reporting. An empty change list yields an empty set;
//! the pipeline then passes trivially.

use crate::core::types::{ChangeSet, PackageRoot};
use crate::repo::{CODE_SEGMENT, MANIFEST_FILE};

/// Locate the package roots affected by a change list.
///
/// # Example
///
/// ```
/// use snapcheck::core::types::ChangeSet;
/// use snapcheck::repo::locate::affected_roots;
///
/// let changes = ChangeSet::parse(
///     "pkgA/code/index.ts\n.github/workflows/ci.yaml\npkgB/manifest.yaml\npkgA/code/util.ts",
/// );
/// let roots = affected_roots(&changes, &[]);
/// let names: Vec<_> = roots.iter().map(|r| r.as_str()).collect();
/// assert_eq!(names, vec!["pkgA", "pkgB"]);
/// ```
pub fn affected_roots(changes: &ChangeSet, skip: &[String]) -> Vec<PackageRoot> {
    let mut roots: Vec<PackageRoot> = Vec::new();

    for path in changes.iter() {
        if path.starts_with('.') {
            continue;
        }
        if !path.contains(MANIFEST_FILE) && !path.contains(CODE_SEGMENT) {
            continue;
        }

        let Some(first) = path.split('/').next() else {
            continue;
        };
        // Segments that cannot form a valid root (e.g. a bare file name with
        // a hidden prefix) are treated as irrelevant, not as errors.
        let Ok(root) = PackageRoot::new(first) else {
            continue;
        };

        if skip.iter().any(|s| s == root.as_str()) {
            continue;
        }
        if roots.contains(&root) {
            continue;
        }
        roots.push(root);
    }

    roots
}
