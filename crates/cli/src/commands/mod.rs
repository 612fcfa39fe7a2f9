//! CLI command implementations.

pub mod check;
pub mod launch;
pub mod modes;

use std::path::Path;

use anyhow::{Context, Result};
use envgate_config::{ConfigLoader, EnvironmentMap, LaunchMode};

/// Load the environment file for `mode`.
///
/// With `apply` set, entries are also written into this process's
/// environment; the caller must still be single-threaded.
pub(crate) fn load_mode_env(
    mode: LaunchMode,
    env_file: &Path,
    apply: bool,
) -> Result<EnvironmentMap> {
    let mut loader = ConfigLoader::for_mode(mode)
        .with_path(env_file.to_path_buf())
        .with_process_env_fallback();
    if !apply {
        loader = loader.without_process_env();
    }
    loader
        .load()
        .with_context(|| format!("Environment check failed for {}", mode.display_name()))
}
