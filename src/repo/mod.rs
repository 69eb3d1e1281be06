//! repo
//!
//! Monorepo scanning: package location and manifest discovery.
//!
//! # Layout Conventions
//!
//! A snap-in package lives in a top-level directory of the monorepo and is
//! identified by two things:
//!
//! - a manifest descriptor (`manifest*.yaml`), conventionally at the package
//!   root but allowed anywhere in the subtree
//! - a `code/` directory holding the npm package (`package.json`)
//!
//! Everything in this module is read-only filesystem inspection; no state is
//! mutated.

pub mod discover;
pub mod locate;

pub use discover::{code_dir, contains_manifest, find_manifests};
pub use locate::affected_roots;

/// Canonical manifest descriptor file name.
pub const MANIFEST_FILE: &str = "manifest.yaml";

/// Prefix shared by all manifest descriptor variants (`manifest_v2.yaml`, ...).
pub const MANIFEST_PREFIX: &str = "manifest";

/// Extension shared by all manifest descriptor variants.
pub const MANIFEST_EXT: &str = ".yaml";

/// Name of the package code directory.
pub const CODE_DIR: &str = "code";

/// Path segment marking a change inside a package's code directory.
pub const CODE_SEGMENT: &str = "/code/";

/// Package-definition file expected inside a code directory.
pub const PACKAGE_DEFINITION: &str = "package.json";
