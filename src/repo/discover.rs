//! repo::discover
//!
//! Manifest discovery and code-directory resolution.
//!
//! # Operations
//!
//! - [`find_manifests`] - depth-bounded walk for manifest descriptors
//! - [`code_dir`] - resolve the code directory for a package root
//! - [`contains_manifest`] - whether a subtree holds a manifest at all
//!
//! # Depth Bound
//!
//! `find_manifests` measures depth in directories below the walk root: a
//! file qualifies when its parent directory lies at depth <= `max_depth`.
//! The bound keeps a whole-repo walk cheap even in large monorepos.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::repo::{CODE_DIR, MANIFEST_EXT, MANIFEST_FILE, MANIFEST_PREFIX};

/// Find all manifest descriptor files under `root`, depth-bounded.
///
/// A file qualifies if its name starts with `manifest` and ends with
/// `.yaml`. Files are reported in directory-listing order per directory;
/// ordering across directories follows the walk.
///
/// # Errors
///
/// Propagates filesystem errors from the walk (an unreadable repo is a
/// broken run, not a validation failure).
pub fn find_manifests(root: &Path, max_depth: usize) -> io::Result<Vec<PathBuf>> {
    let mut manifests = Vec::new();

    // Files sit one level below their directory, hence the +1.
    for entry in WalkDir::new(root).max_depth(max_depth + 1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if name.starts_with(MANIFEST_PREFIX) && name.ends_with(MANIFEST_EXT) {
            manifests.push(entry.into_path());
        }
    }

    Ok(manifests)
}

/// Resolve the code directory for a package root.
///
/// `<root>/code` wins when present. Otherwise the subtree is walked for the
/// first directory containing a canonical manifest, and that directory's
/// `code/` sibling is the candidate. `None` means the package has no
/// resolvable code directory and must be skipped.
pub fn code_dir(package_root: &Path) -> Option<PathBuf> {
    let conventional = package_root.join(CODE_DIR);
    if conventional.is_dir() {
        return Some(conventional);
    }

    for entry in WalkDir::new(package_root).into_iter().filter_map(Result::ok) {
        if entry.file_type().is_file() && entry.file_name() == MANIFEST_FILE {
            let candidate = entry.path().parent()?.join(CODE_DIR);
            if candidate.is_dir() {
                return Some(candidate);
            }
            // The first manifest decides; a missing sibling is a skip.
            return None;
        }
    }

    None
}

/// Whether any canonical manifest file exists in the subtree of `dir`.
///
/// Used to decide test-check eligibility for a candidate root. Unreadable
/// entries are treated as absent.
pub fn contains_manifest(dir: &Path) -> bool {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .any(|entry| entry.file_type().is_file() && entry.file_name() == MANIFEST_FILE)
}
