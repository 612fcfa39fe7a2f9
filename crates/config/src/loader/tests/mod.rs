//! Tests for the environment-file loader.
//!
//! Invariants:
//! - Tests that touch process-global state (cwd, env vars) hold `env_lock()`
//!   and are marked `#[serial]`.
//! - Keys applied to the process environment use a `_ENVGATE_TEST_` prefix
//!   and are restored through `temp_env`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
