//! Environment map produced by the loader.
//!
//! Responsibilities:
//! - Hold parsed `KEY=VALUE` entries with last-write-wins semantics.
//! - Keep values behind `secrecy::SecretString` so `Debug` output never shows them.
//! - Materialize the entries into the process environment from one call site.
//!
//! Invariants:
//! - Keys are non-empty, trimmed, and never start with `#`.
//! - Values are stored verbatim (may be empty, may contain `=`).

use secrecy::{ExposeSecret, SecretString};
use std::collections::BTreeMap;

/// Mapping from environment key to value.
///
/// `Debug` is derived: `SecretString` prints as `[REDACTED]`, so formatting
/// the map only reveals key names.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentMap {
    entries: BTreeMap<String, SecretString>,
}

impl EnvironmentMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert an entry. Returns `true` if an earlier value was replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let value: String = value.into();
        self.entries
            .insert(key.into(), SecretString::new(value.into()))
            .is_some()
    }

    /// Insert `value` only when `key` is absent or blank.
    ///
    /// Returns `true` if the default was used.
    pub fn insert_default(&mut self, key: &str, value: &str) -> bool {
        if self.non_blank(key).is_some() {
            return false;
        }
        self.insert(key, value);
        true
    }

    /// Get the raw value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|v| v.expose_secret())
    }

    /// Get the value for `key` unless it is empty or whitespace-only.
    pub fn non_blank(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.trim().is_empty())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over key names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over entries with values exposed.
    ///
    /// Intended for handing the map to a child process; do not log the output.
    pub fn iter_exposed(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.expose_secret()))
    }

    /// Build a map from the current process environment, restricted to `keys`.
    ///
    /// Keys that are unset or not valid Unicode are skipped.
    pub fn from_process_env<'a, I>(keys: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut map = Self::new();
        for key in keys {
            if let Ok(value) = std::env::var(key) {
                map.insert(key, value);
            }
        }
        map
    }

    /// Write every entry into the current process environment.
    ///
    /// This is the only place the crate mutates process-global state.
    pub fn apply_to_process(&self) {
        for (key, value) in self.iter_exposed() {
            // SAFETY: called once from the single-threaded startup path, before
            // any other thread could read the environment concurrently.
            unsafe {
                std::env::set_var(key, value);
            }
        }
        tracing::debug!(count = self.len(), "applied entries to process environment");
    }
}

impl<K, V> FromIterator<(K, V)> for EnvironmentMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}
