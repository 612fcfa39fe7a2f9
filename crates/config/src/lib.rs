//! Environment-file loading for the envgate launchers.
//!
//! This crate parses `.env` style `KEY=VALUE` files, validates the keys a
//! launch mode requires, and exposes the launch-mode catalogue shared by the
//! CLI.

pub mod constants;
mod loader;
pub mod mode;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, load, parse_line, parse_str};
pub use mode::{LaunchMode, ParseModeError};
pub use types::EnvironmentMap;
