//! Launch command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use envgate_config::LaunchMode;
use tracing::warn;

use crate::args::LaunchArgs;
use crate::cancellation::CancellationToken;
use crate::commands::load_mode_env;
use crate::dispatch::Outcome;
use crate::error::exit_status_code;
use crate::launcher::LaunchPlan;

pub fn run(mode: LaunchMode, args: &LaunchArgs, env_file: &Path) -> Result<Outcome> {
    // No runtime exists yet, so this is the only thread touching the environment.
    let env = load_mode_env(mode, env_file, true)?;

    let port = args.port.unwrap_or(mode.port());
    let plan = LaunchPlan::new(
        mode,
        args.launcher.clone(),
        port,
        args.app_dir.clone(),
        &args.extra,
        env,
    );

    if args.dry_run {
        if let Err(e) = plan.check_script() {
            warn!("{}", e);
        }
        println!("{}", plan.command_line());
        return Ok(Outcome::Success);
    }

    plan.check_script()?;

    println!(
        "✓ Loaded {} ({} entries)",
        env_file.display(),
        plan.env().len()
    );
    println!(
        "Starting {} on http://localhost:{} ...",
        mode.display_name(),
        port
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let status = runtime.block_on(async {
        let cancel = CancellationToken::new();
        cancel.cancel_on_ctrl_c();
        plan.run(&cancel).await
    })?;

    Ok(Outcome::Exited(exit_status_code(status)))
}
