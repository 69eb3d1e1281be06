//! snapci binary entry point.
//!
//! Exit codes:
//! - 0: every check passed (or nothing was applicable)
//! - 1: at least one check failed
//! - 2: infrastructure error (broken tool, unreachable service, bad config)

use std::process::ExitCode;

fn main() -> ExitCode {
    match snapcheck::cli::run() {
        Ok(outcome) if outcome.passed() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(err) => {
            snapcheck::ui::output::error(format!("{err:#}"));
            ExitCode::from(2)
        }
    }
}
