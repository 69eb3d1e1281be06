//! snapcheck - CI checks for snap-in monorepos
//!
//! snapcheck is a single-binary tool (`snapci`) that maps a source-control
//! change list to the affected snap-in packages and runs a sequence of
//! independent checks against each: dependency hygiene, manifest schema
//! validation, test execution, and a source scan for internal endpoints
//! and hardcoded credentials.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to the pipeline)
//! - [`pipeline`] - Orchestrates check execution and aggregation
//! - [`core`] - Domain types and configuration
//! - [`repo`] - Monorepo scanning: package location and manifest discovery
//! - [`checks`] - The individual check runners
//! - [`validate`] - Manifest validation seam for the remote service
//! - [`ui`] - Output utilities
//!
//! # Correctness Invariants
//!
//! snapcheck maintains the following invariants:
//!
//! 1. Check failures are data: they are reported and aggregated, never
//!    thrown, and every applicable check runs to completion
//! 2. Broken checks are errors: they abort the run instead of masquerading
//!    as a package failure or a pass
//! 3. Package selection is deterministic and skip-safe: a package the
//!    checks cannot apply to is excluded, not failed

pub mod checks;
pub mod cli;
pub mod core;
pub mod pipeline;
pub mod repo;
pub mod ui;
pub mod validate;
