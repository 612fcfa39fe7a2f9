//! Environment-file loader.
//!
//! Responsibilities:
//! - Locate the environment file and read it line by line.
//! - Parse `KEY=VALUE` lines into an `EnvironmentMap`.
//! - Fill optional defaults, apply the map to the process environment, and
//!   validate required keys.
//! - Optionally honor the `DOTENV_DISABLED` gate so tests and CI can supply keys
//!   through the real environment instead of a file.
//!
//! Does NOT handle:
//! - Starting the downstream application (see the CLI crate).
//! - Quoting, escaping, or variable interpolation. There are none.
//!
//! Invariants / Assumptions:
//! - The first `=` on a line is the delimiter; later ones belong to the value.
//! - A missing file is an error, never silently ignored.
//! - Errors never include values read from the file.

mod builder;
mod env;
mod error;
mod parser;

#[cfg(test)]
mod tests;

pub use builder::{ConfigLoader, load};
pub use error::ConfigError;
pub use parser::{parse_line, parse_str};
