//! envgate - environment-file gate in front of a web application launcher.
//!
//! Responsibilities:
//! - Parse command-line arguments and `ENVGATE_*` environment variables.
//! - Load and validate the `.env` file for the selected launch mode.
//! - Start the downstream application with the loaded environment and
//!   forward its exit status.
//!
//! Does NOT handle:
//! - The behavior of the launched application.
//! - Parsing rules of the environment file (see `crates/config`).
//!
//! Invariants:
//! - `main` is synchronous: the environment file is applied to the process
//!   before any runtime thread exists. The launch command builds its own
//!   current-thread runtime afterwards.
//! - Every failure prints a `❌` message and exits non-zero without launching.

mod args;
mod cancellation;
mod commands;
mod dispatch;
mod error;
mod interactive;
mod launcher;

use args::Cli;
use cancellation::{is_cancelled_error, print_cancelled_message};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(&cli) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted.as_i32()
        }
        Err(e) => {
            eprintln!("❌ {:#}", e);

            if cli.pause {
                if let Err(pause_err) = interactive::pause_for_acknowledgement() {
                    tracing::debug!("pause prompt failed: {}", pause_err);
                }
            }

            e.exit_code().as_i32()
        }
    };

    std::process::exit(exit_code);
}
