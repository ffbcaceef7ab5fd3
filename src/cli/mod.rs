//! CLI argument parsing for trigger-workflow.
//!
//! Uses clap derive macros. The program takes no arguments of its own; clap
//! provides `--help` and `--version` and rejects anything else.

use crate::exit_codes;
use clap::Parser;

/// Dispatch the build-release GitHub Actions workflow.
///
/// Reads a personal access token from GITHUB_TOKEN and triggers
/// build-release.yml on the main branch of cedyson8-creator/traffic-booster-app
/// with version input 1.0.0.
#[derive(Parser, Debug)]
#[command(name = "trigger-workflow")]
#[command(author, version, about, long_about = None)]
pub struct Cli {}

impl Cli {
    /// Parse process arguments.
    ///
    /// `--help` and `--version` exit 0; any other argument is a usage error
    /// and exits with `FAILURE` rather than clap's default of 2.
    pub fn parse_args() -> Self {
        Cli::try_parse().unwrap_or_else(|err| {
            let code = if err.use_stderr() {
                exit_codes::FAILURE
            } else {
                exit_codes::SUCCESS
            };
            let _ = err.print();
            std::process::exit(code);
        })
    }
}
