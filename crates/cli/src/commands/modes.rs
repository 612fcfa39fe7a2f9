//! Modes command implementation.

use anyhow::Result;
use envgate_config::LaunchMode;

use crate::dispatch::Outcome;

pub fn run() -> Result<Outcome> {
    print!("{}", format_modes());
    Ok(Outcome::Success)
}

fn format_modes() -> String {
    let mut out = format!(
        "{:<8}  {:<14}  {:<5}  {}\n",
        "MODE", "SCRIPT", "PORT", "REQUIRED"
    );
    for mode in LaunchMode::ALL {
        out.push_str(&format!(
            "{:<8}  {:<14}  {:<5}  {}\n",
            mode.as_str(),
            mode.script(),
            mode.port(),
            mode.required_keys().join(", ")
        ));
    }
    out
}
