//! Error types for environment-file loading.
//!
//! Responsibilities:
//! - Define error variants for every loading failure.
//! - Render actionable, human-readable messages for the CLI to print.
//!
//! Invariants:
//! - All variants carry context (path, key name) for the user.
//! - Errors NEVER include values or raw lines from the environment file.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an environment file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The environment file does not exist. Nothing was read.
    #[error(
        "Environment file not found: {}. Create it with the following entries: {}",
        .path.display(),
        format_required(.required)
    )]
    FileNotFound {
        path: PathBuf,
        required: Vec<String>,
    },

    /// A required key is absent, empty, or whitespace-only.
    #[error("Required variable {0} is missing or empty. Set {0}=<value> in the environment file.")]
    MissingRequiredKey(String),

    /// The file exists but could not be read (permissions, directory, invalid UTF-8).
    ///
    /// SAFETY: only the error kind is recorded, never the offending bytes.
    #[error("Failed to read environment file {}: {kind}", .path.display())]
    Read { path: PathBuf, kind: ErrorKind },

    /// A value is present but malformed.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl ConfigError {
    /// Name of the required key that failed validation, if any.
    pub fn missing_key(&self) -> Option<&str> {
        match self {
            Self::MissingRequiredKey(key) => Some(key),
            _ => None,
        }
    }
}

fn format_required(required: &[String]) -> String {
    if required.is_empty() {
        return "KEY=VALUE lines".to_string();
    }
    required
        .iter()
        .map(|key| format!("{key}=<value>"))
        .collect::<Vec<_>>()
        .join(", ")
}
