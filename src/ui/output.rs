//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag. Check
//! failures are always shown, even in quiet mode: a CI log with a nonzero
//! exit and no explanation is worse than a noisy one.

use std::fmt::Display;

use crate::core::types::{CheckReport, PipelineOutcome};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Print a single check report with its banner.
///
/// Passes respect quiet mode; failures are always printed together with
/// their diagnostics, indented under the banner.
pub fn report(report: &CheckReport, verbosity: Verbosity) {
    if report.passed() {
        print(
            format!("{} successful for {}", report.kind, report.target),
            verbosity,
        );
    } else {
        println!("{} failed for {}", report.kind, report.target);
        println!("{}", format_list(report.result.diagnostics(), "  "));
    }
}

/// Print the aggregate summary line for a run.
pub fn summary(outcome: &PipelineOutcome, verbosity: Verbosity) {
    if outcome.passed() {
        print(
            format!("all checks passed ({} run)", outcome.reports().len()),
            verbosity,
        );
    } else {
        println!(
            "{} of {} checks failed",
            outcome.failures().count(),
            outcome.reports().len()
        );
    }
}

/// Format a list of items, one per line with a prefix.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}
