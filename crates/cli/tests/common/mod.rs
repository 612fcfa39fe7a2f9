//! Shared test utilities for envgate integration tests.
//!
//! Invariants / Assumptions:
//! - Every command runs in its own temp directory, so the developer's `.env`
//!   is never read.
//! - Variables the launchers read are cleared so host values cannot leak in.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables cleared from every test command.
const HOST_VARS: &[&str] = &[
    "DOTENV_DISABLED",
    "GEMINI_API_KEY",
    "DB_PASSWORD",
    "DB_HOST",
    "DB_PORT",
    "DB_NAME",
    "DB_USER",
    "ENVGATE_ENV_FILE",
    "ENVGATE_LAUNCHER",
    "ENVGATE_APP_DIR",
    "RUST_LOG",
];

/// Returns a hermetic `envgate` command whose working directory is `dir`.
pub fn envgate_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envgate");
    cmd.current_dir(dir);
    for var in HOST_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// Temp directory holding a `.env` with the given contents.
pub fn workspace_with_env(contents: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".env"), contents).unwrap();
    dir
}

/// Create empty application scripts for every launch mode.
pub fn write_app_scripts(dir: &Path) {
    for script in ["admin.py", "db_viewer.py", "app.py"] {
        fs::write(dir.join(script), "").unwrap();
    }
}

/// Write an executable launcher script that records its arguments and the
/// variables it was given, then exits with `exit_code`.
#[cfg(unix)]
pub fn write_fake_launcher(dir: &Path, exit_code: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-launcher.sh");
    let script = format!(
        "#!/bin/sh\n\
         echo \"ARGS=$*\" > launcher-output.txt\n\
         echo \"GEMINI_API_KEY=$GEMINI_API_KEY\" >> launcher-output.txt\n\
         echo \"DB_PASSWORD=$DB_PASSWORD\" >> launcher-output.txt\n\
         echo \"DB_HOST=$DB_HOST\" >> launcher-output.txt\n\
         echo \"UNUSED=${{UNUSED-unset}}\" >> launcher-output.txt\n\
         exit {}\n",
        exit_code
    );
    fs::write(&path, script).unwrap();
    let mut permissions = fs::metadata(&path).unwrap().permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(&path, permissions).unwrap();
    path
}

/// Contents written by the fake launcher, if it ran.
pub fn launcher_output(dir: &Path) -> Option<String> {
    fs::read_to_string(dir.join("launcher-output.txt")).ok()
}
