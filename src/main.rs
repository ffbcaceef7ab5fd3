//! trigger-workflow: dispatch a GitHub Actions workflow run.
//!
//! This is the main entry point for the CLI. It parses arguments, runs the
//! trigger, and turns the outcome into an exit code.

mod cli;
mod commands;
pub mod config;
pub mod credentials;
pub mod dispatch;
pub mod error;
pub mod exit_codes;

use cli::Cli;
use error::DispatchError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            report(&err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Print a failure. Transport faults go to stderr, reported outcomes to stdout.
fn report(err: &DispatchError) {
    if err.is_transport() {
        eprintln!("Error: {}", err);
        return;
    }

    println!("❌ {}", err);
    if let Some(help) = err.help() {
        println!("{}", help);
    }
}
