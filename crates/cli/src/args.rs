//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and `ENVGATE_*` environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not read the environment file (see `envgate_config::ConfigLoader`).

use clap::{Args, Parser, Subcommand};
use envgate_config::LaunchMode;
use envgate_config::constants::{DEFAULT_ENV_FILE, DEFAULT_LAUNCHER};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "envgate")]
#[command(
    about = "Load a .env file, check the required keys, and start a web application",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envgate admin\n  envgate viewer --env-file config/.env\n  envgate check admin\n  envgate admin --dry-run\n  envgate chat --port 9000 -- --server.headless true\n"
)]
pub struct Cli {
    /// Path to the environment file
    #[arg(
        long,
        global = true,
        env = "ENVGATE_ENV_FILE",
        default_value = DEFAULT_ENV_FILE,
        value_name = "FILE"
    )]
    pub env_file: PathBuf,

    /// Wait for Enter before exiting when loading or launching fails
    #[arg(long, global = true)]
    pub pause: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the admin console (requires GEMINI_API_KEY, port 8501)
    Admin(LaunchArgs),

    /// Start the data viewer (requires DB_PASSWORD, port 8503)
    #[command(visible_alias = "db-viewer")]
    Viewer(LaunchArgs),

    /// Start the chat front end (requires GEMINI_API_KEY, port 8502)
    Chat(LaunchArgs),

    /// Validate the environment file for a mode without launching anything
    Check {
        /// Launch mode to validate against (admin, viewer, chat)
        mode: LaunchMode,
    },

    /// List launch modes with their script, port, and required keys
    Modes,
}

#[derive(Args, Debug, Clone)]
pub struct LaunchArgs {
    /// Program used to start the application script
    #[arg(long, env = "ENVGATE_LAUNCHER", default_value = DEFAULT_LAUNCHER, value_name = "PROGRAM")]
    pub launcher: String,

    /// Override the mode's listen port
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: Option<u16>,

    /// Directory containing the application scripts (child working directory)
    #[arg(long, env = "ENVGATE_APP_DIR", value_name = "DIR")]
    pub app_dir: Option<PathBuf>,

    /// Load and validate, then print the launch command instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Extra arguments passed to the launcher after the port flag
    #[arg(last = true, value_name = "ARGS")]
    pub extra: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_admin_defaults() {
        let cli = Cli::try_parse_from(["envgate", "admin"]).unwrap();
        let Commands::Admin(args) = cli.command else {
            panic!("expected admin subcommand");
        };
        assert_eq!(args.launcher, "streamlit");
        assert_eq!(args.port, None);
        assert!(!args.dry_run);
        assert!(args.extra.is_empty());
    }

    #[test]
    fn test_viewer_alias_and_passthrough_args() {
        let cli = Cli::try_parse_from([
            "envgate",
            "db-viewer",
            "--port",
            "9000",
            "--",
            "--server.headless",
            "true",
        ])
        .unwrap();
        let Commands::Viewer(args) = cli.command else {
            panic!("expected viewer subcommand");
        };
        assert_eq!(args.port, Some(9000));
        assert_eq!(args.extra, vec!["--server.headless", "true"]);
    }

    #[test]
    fn test_check_parses_mode() {
        let cli = Cli::try_parse_from(["envgate", "check", "viewer"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Check {
                mode: LaunchMode::Viewer
            }
        ));
    }

    #[test]
    fn test_check_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["envgate", "check", "dashboard"]).is_err());
    }

    #[test]
    fn test_port_zero_rejected() {
        assert!(Cli::try_parse_from(["envgate", "admin", "--port", "0"]).is_err());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli =
            Cli::try_parse_from(["envgate", "admin", "--env-file", "custom.env", "--pause"])
                .unwrap();
        assert_eq!(cli.env_file, PathBuf::from("custom.env"));
        assert!(cli.pause);
    }
}
