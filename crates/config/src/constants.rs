//! Centralized constants for the envgate workspace.
//!
//! This module contains default values used across crates to avoid
//! magic string and port duplication.

// =============================================================================
// Environment File
// =============================================================================

/// Default name of the environment file, resolved against the working directory.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Setting this variable to `1` or `true` skips reading the environment file.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

/// Prefix that marks a comment line.
pub const COMMENT_PREFIX: char = '#';

/// Delimiter between key and value. Only the first occurrence on a line counts.
pub const KEY_VALUE_DELIMITER: char = '=';

// =============================================================================
// Well-known Keys
// =============================================================================

/// API key consumed by the admin console and the chat front end.
pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";

/// Database password consumed by the data viewer.
pub const DB_PASSWORD: &str = "DB_PASSWORD";

pub const DB_HOST: &str = "DB_HOST";
pub const DB_PORT: &str = "DB_PORT";
pub const DB_NAME: &str = "DB_NAME";
pub const DB_USER: &str = "DB_USER";

// =============================================================================
// Data Viewer Defaults
// =============================================================================

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: &str = "5432";
pub const DEFAULT_DB_NAME: &str = "legal_query_system";
pub const DEFAULT_DB_USER: &str = "postgres";

// =============================================================================
// Launch Defaults
// =============================================================================

/// Default program used to start the downstream application.
pub const DEFAULT_LAUNCHER: &str = "streamlit";

/// Listen port of the admin console.
pub const ADMIN_PORT: u16 = 8501;

/// Listen port of the chat front end.
pub const CHAT_PORT: u16 = 8502;

/// Listen port of the data viewer.
pub const VIEWER_PORT: u16 = 8503;
