//! Check command implementation.
//!
//! Validates the environment file for a mode and prints which keys it
//! defines. Values are never printed.

use std::path::Path;

use anyhow::Result;
use envgate_config::{EnvironmentMap, LaunchMode};

use crate::commands::load_mode_env;
use crate::dispatch::Outcome;

pub fn run(mode: LaunchMode, env_file: &Path) -> Result<Outcome> {
    let env = load_mode_env(mode, env_file, false)?;

    println!(
        "✓ {} is valid for {} ({})",
        env_file.display(),
        mode,
        mode.display_name()
    );
    print!("{}", format_summary(mode, &env));

    Ok(Outcome::Success)
}

fn format_summary(mode: LaunchMode, env: &EnvironmentMap) -> String {
    let width = env.keys().map(str::len).max().unwrap_or(0);
    let mut out = String::new();
    for key in env.keys() {
        let role = if mode.required_keys().iter().any(|k| *k == key) {
            "required"
        } else if mode.optional_defaults().iter().any(|(k, _)| *k == key) {
            "optional"
        } else {
            ""
        };
        let state = if env.non_blank(key).is_some() {
            "set"
        } else {
            "empty"
        };
        out.push_str(&format!("  {key:<width$}  {role:<8}  {state}\n"));
    }
    out
}
