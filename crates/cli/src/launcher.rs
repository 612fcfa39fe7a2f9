//! Downstream application launcher.
//!
//! Responsibilities:
//! - Describe the child command for a launch mode (`LaunchPlan`).
//! - Spawn the child with the loaded environment passed explicitly.
//! - Wait for the child and report its exit status; on Ctrl+C give it a
//!   grace period to shut down before killing it.
//!
//! Does NOT handle:
//! - Restarting, health checks, or port probing.
//! - Loading the environment file (see `envgate_config`).
//!
//! Invariants:
//! - The child inherits the process environment and additionally receives
//!   every entry of the loaded map via `Command::envs`.
//! - Secret values are never logged; only the command line and key count are.

use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::time::Duration;

use envgate_config::{EnvironmentMap, LaunchMode};
use thiserror::Error;
use tokio::process::Command;
use tracing::{info, warn};

use crate::cancellation::{Cancelled, CancellationToken};

/// How long a child gets to exit on its own after Ctrl+C.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// Errors starting the downstream application.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Launcher '{program}' was not found on PATH. Install it or pass --launcher.")]
    LauncherNotFound { program: String },

    #[error("Application script not found: {}", .path.display())]
    ScriptNotFound { path: PathBuf },

    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to wait for '{program}': {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Fully resolved child command.
#[derive(Debug, Clone)]
pub struct LaunchPlan {
    pub mode: LaunchMode,
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
    env: EnvironmentMap,
}

impl LaunchPlan {
    /// Build `<program> run <script> --server.port <port> [extra...]`.
    pub fn new(
        mode: LaunchMode,
        program: impl Into<String>,
        port: u16,
        working_dir: Option<PathBuf>,
        extra: &[String],
        env: EnvironmentMap,
    ) -> Self {
        let mut args = vec![
            "run".to_string(),
            mode.script().to_string(),
            "--server.port".to_string(),
            port.to_string(),
        ];
        args.extend(extra.iter().cloned());

        Self {
            mode,
            program: program.into(),
            args,
            working_dir,
            env,
        }
    }

    /// Path of the application script as the child will resolve it.
    pub fn script_path(&self) -> PathBuf {
        let script = Path::new(self.mode.script());
        match &self.working_dir {
            Some(dir) => dir.join(script),
            None => script.to_path_buf(),
        }
    }

    /// Shell-like rendering of the command for `--dry-run` output.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(quote_arg)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn env(&self) -> &EnvironmentMap {
        &self.env
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args).envs(self.env.iter_exposed());
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }
        command
    }

    /// Fail early if the script is missing, instead of letting the launcher
    /// report it in its own words.
    pub fn check_script(&self) -> Result<(), LaunchError> {
        let path = self.script_path();
        if path.is_file() {
            Ok(())
        } else {
            Err(LaunchError::ScriptNotFound { path })
        }
    }

    /// Spawn the child and wait for it.
    ///
    /// On cancellation the child (which shares the terminal's process group
    /// and normally receives the same SIGINT) gets `SHUTDOWN_GRACE` to exit
    /// before it is killed; the result is then `Err(Cancelled)`.
    pub async fn run(&self, cancel: &CancellationToken) -> anyhow::Result<ExitStatus> {
        let mut child = self.command().spawn().map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                LaunchError::LauncherNotFound {
                    program: self.program.clone(),
                }
            } else {
                LaunchError::Spawn {
                    program: self.program.clone(),
                    source,
                }
            }
        })?;

        info!(
            mode = %self.mode,
            pid = child.id(),
            entries = self.env.len(),
            "application started"
        );

        let wait_error = |source: std::io::Error| LaunchError::Wait {
            program: self.program.clone(),
            source,
        };

        tokio::select! {
            status = child.wait() => return Ok(status.map_err(wait_error)?),
            _ = cancel.cancelled() => {}
        }

        info!("interrupt received, waiting for application to exit");
        match tokio::time::timeout(SHUTDOWN_GRACE, child.wait()).await {
            Ok(status) => {
                status.map_err(wait_error)?;
            }
            Err(_) => {
                warn!(
                    grace_secs = SHUTDOWN_GRACE.as_secs(),
                    "application did not exit in time, killing it"
                );
                child.kill().await.map_err(wait_error)?;
            }
        }
        Err(Cancelled.into())
    }
}

fn quote_arg(arg: &str) -> String {
    let needs_quotes =
        arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '"' || c == '\'');
    if needs_quotes {
        format!("\"{}\"", arg.replace('"', "\\\""))
    } else {
        arg.to_string()
    }
}
