//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ConfigError` / `LaunchError` to exit codes.
//! - Translate a child's `ExitStatus` into the code envgate exits with.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see cancellation.rs for SIGINT handling).
//!
//! Invariants:
//! - Configuration failures (missing file, missing or empty key) exit with 1.
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use std::process::ExitStatus;

use envgate_config::ConfigError;

use crate::cancellation::SIGINT_EXIT_CODE;
use crate::launcher::LaunchError;

/// Structured exit codes for envgate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - includes every environment-file failure.
    ///
    /// Scripts should fix the environment file; retrying cannot succeed.
    GeneralError = 1,

    /// The launcher program could not be started or the script is missing.
    LaunchFailed = 2,

    /// Interrupted - SIGINT/Ctrl+C (Unix standard: 128 + 2).
    Interrupted = SIGINT_EXIT_CODE,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&LaunchError> for ExitCode {
    fn from(_: &LaunchError) -> Self {
        ExitCode::LaunchFailed
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(_: &ConfigError) -> Self {
        ExitCode::GeneralError
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<LaunchError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(err);
            }
        }

        ExitCode::GeneralError
    }
}

/// Exit code to forward for a finished child process.
///
/// A child killed by a signal maps to `128 + signal` on Unix.
pub fn exit_status_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    ExitCode::GeneralError.as_i32()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::LaunchFailed.as_i32(), 2);
        assert_eq!(ExitCode::Interrupted.as_i32(), 130);
    }

    #[test]
    fn test_config_errors_exit_with_one() {
        let errors = [
            ConfigError::FileNotFound {
                path: PathBuf::from(".env"),
                required: vec!["GEMINI_API_KEY".to_string()],
            },
            ConfigError::MissingRequiredKey("DB_PASSWORD".to_string()),
        ];
        for err in errors {
            let err = anyhow::Error::new(err);
            assert_eq!(err.exit_code(), ExitCode::GeneralError);
        }
    }

    #[test]
    fn test_launch_error_found_through_context() {
        let result: Result<(), LaunchError> = Err(LaunchError::LauncherNotFound {
            program: "streamlit".to_string(),
        });
        let err = result.context("starting admin console").unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::LaunchFailed);
    }

    #[test]
    fn test_unknown_error_is_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_status_code_forwards_child_code() {
        use std::os::unix::process::ExitStatusExt;

        assert_eq!(exit_status_code(ExitStatus::from_raw(0)), 0);
        assert_eq!(exit_status_code(ExitStatus::from_raw(3 << 8)), 3);
        // Terminated by SIGTERM (15)
        assert_eq!(exit_status_code(ExitStatus::from_raw(15)), 143);
    }
}
