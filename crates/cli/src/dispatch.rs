//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Report how the command finished so `main` can pick the exit code.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Logging setup or error printing (see `main()`).

use anyhow::Result;
use envgate_config::LaunchMode;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::error::ExitCode;

/// How a successful command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// The command completed on its own.
    Success,
    /// The downstream application ran and exited with this code.
    Exited(i32),
}

impl Outcome {
    pub(crate) fn exit_code(self) -> i32 {
        match self {
            Outcome::Success => ExitCode::Success.as_i32(),
            Outcome::Exited(code) => code,
        }
    }
}

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: &Cli) -> Result<Outcome> {
    let env_file = &cli.env_file;
    match &cli.command {
        Commands::Admin(args) => commands::launch::run(LaunchMode::Admin, args, env_file),
        Commands::Viewer(args) => commands::launch::run(LaunchMode::Viewer, args, env_file),
        Commands::Chat(args) => commands::launch::run(LaunchMode::Chat, args, env_file),
        Commands::Check { mode } => commands::check::run(*mode, env_file),
        Commands::Modes => commands::modes::run(),
    }
}
