//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` describing where to read from
//!   and which keys to require.
//! - Run the load pipeline: read, parse, fill defaults, check port values,
//!   apply to the process environment, validate required keys.
//!
//! Does NOT handle:
//! - Line-level parsing (delegated to parser.rs).
//! - Launching anything.
//!
//! Invariants / Assumptions:
//! - Existence is checked before the file is opened; a missing file reads nothing.
//! - The file handle is dropped before the map is applied or validated.
//! - Required keys are checked in the order given; the first failure is reported.
//! - `DOTENV_DISABLED` is only honored when the caller opts in with
//!   `with_process_env_fallback`; the free `load` always reads `path`.
//! - Keys and values containing NUL are rejected before anything is applied.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::env::dotenv_disabled;
use super::error::ConfigError;
use super::parser::parse_reader;
use crate::constants::DEFAULT_ENV_FILE;
use crate::mode::LaunchMode;
use crate::types::EnvironmentMap;

/// Load `path` and require every key in `required_keys` to be non-empty.
///
/// The resulting entries are also written into the process environment.
pub fn load(
    path: impl AsRef<Path>,
    required_keys: &[&str],
) -> Result<EnvironmentMap, ConfigError> {
    ConfigLoader::new()
        .with_path(path.as_ref().to_path_buf())
        .with_required_keys(required_keys.iter().copied())
        .load()
}

/// Builder for a single environment-file load.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
    required_keys: Vec<String>,
    defaults: Vec<(String, String)>,
    port_keys: Vec<String>,
    apply_to_process: bool,
    process_env_fallback: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a loader for `.env` in the working directory with no requirements.
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_ENV_FILE),
            required_keys: Vec::new(),
            defaults: Vec::new(),
            port_keys: Vec::new(),
            apply_to_process: true,
            process_env_fallback: false,
        }
    }

    /// Create a loader preconfigured for a launch mode.
    pub fn for_mode(mode: LaunchMode) -> Self {
        Self::new().with_mode(mode)
    }

    /// Add a launch mode's required keys, optional defaults, and port-valued keys.
    pub fn with_mode(mut self, mode: LaunchMode) -> Self {
        self = self.with_required_keys(mode.required_keys().iter().copied());
        for (key, value) in mode.optional_defaults() {
            self = self.with_default(*key, *value);
        }
        for key in mode.port_keys() {
            self = self.with_port_key(*key);
        }
        self
    }

    /// Override the environment file path.
    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = path;
        self
    }

    /// Append keys that must be present and non-empty.
    pub fn with_required_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Register a fallback value used when `key` is missing or blank.
    pub fn with_default(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults.push((key.into(), value.into()));
        self
    }

    /// Require that `key`, when present, holds a TCP port number.
    pub fn with_port_key(mut self, key: impl Into<String>) -> Self {
        self.port_keys.push(key.into());
        self
    }

    /// Skip writing the loaded entries into the process environment.
    ///
    /// Callers that only inspect the file (or hand the map to a child process
    /// explicitly) use this to avoid touching process-global state.
    pub fn without_process_env(mut self) -> Self {
        self.apply_to_process = false;
        self
    }

    /// Read known keys from the process environment instead of the file
    /// when `DOTENV_DISABLED` is `1` or `true`.
    pub fn with_process_env_fallback(mut self) -> Self {
        self.process_env_fallback = true;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn required_keys(&self) -> &[String] {
        &self.required_keys
    }

    /// Run the load pipeline.
    ///
    /// Port keys are checked before the map is applied, so an invalid port
    /// leaves the process environment untouched.
    ///
    /// # Errors
    ///
    /// - `ConfigError::FileNotFound` if the file does not exist.
    /// - `ConfigError::Read` if it exists but cannot be read as UTF-8 text.
    /// - `ConfigError::InvalidValue` if a key or value contains a NUL byte, or
    ///   a port-valued key does not parse.
    /// - `ConfigError::MissingRequiredKey` for the first required key that is
    ///   missing, empty, or whitespace-only.
    pub fn load(self) -> Result<EnvironmentMap, ConfigError> {
        let mut map = if self.process_env_fallback && dotenv_disabled() {
            debug!("DOTENV_DISABLED is set, reading keys from the process environment");
            EnvironmentMap::from_process_env(self.known_keys())
        } else {
            self.read_file()?
        };

        for (key, value) in &self.defaults {
            if map.insert_default(key, value) {
                debug!(key = %key, "using default value");
            }
        }

        validate_no_nul(&map)?;
        self.validate_ports(&map)?;

        if self.apply_to_process {
            map.apply_to_process();
        }

        self.validate_required(&map)?;

        info!(
            path = %self.path.display(),
            entries = map.len(),
            "environment file loaded"
        );
        Ok(map)
    }

    fn known_keys(&self) -> impl Iterator<Item = &str> {
        self.required_keys
            .iter()
            .chain(self.defaults.iter().map(|(key, _)| key))
            .map(String::as_str)
    }

    fn read_file(&self) -> Result<EnvironmentMap, ConfigError> {
        let exists = self.path.try_exists().map_err(|e| ConfigError::Read {
            path: self.path.clone(),
            kind: e.kind(),
        })?;
        if !exists {
            return Err(ConfigError::FileNotFound {
                path: self.path.clone(),
                required: self.required_keys.clone(),
            });
        }

        let read_error = |e: std::io::Error| ConfigError::Read {
            path: self.path.clone(),
            kind: e.kind(),
        };
        let file = File::open(&self.path).map_err(read_error)?;
        parse_reader(BufReader::new(file)).map_err(read_error)
    }

    fn validate_ports(&self, map: &EnvironmentMap) -> Result<(), ConfigError> {
        for key in &self.port_keys {
            let Some(value) = map.non_blank(key) else {
                continue;
            };
            match value.trim().parse::<u16>() {
                Ok(port) if port > 0 => {}
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: key.clone(),
                        message: "must be a port number between 1 and 65535".to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn validate_required(&self, map: &EnvironmentMap) -> Result<(), ConfigError> {
        match self
            .required_keys
            .iter()
            .find(|key| map.non_blank(key).is_none())
        {
            Some(key) => Err(ConfigError::MissingRequiredKey(key.clone())),
            None => Ok(()),
        }
    }
}

/// Reject entries the process environment cannot hold.
fn validate_no_nul(map: &EnvironmentMap) -> Result<(), ConfigError> {
    match map
        .iter_exposed()
        .find(|(key, value)| key.contains('\0') || value.contains('\0'))
    {
        Some((key, _)) => Err(ConfigError::InvalidValue {
            key: key.escape_default().to_string(),
            message: "contains a NUL byte".to_string(),
        }),
        None => Ok(()),
    }
}
