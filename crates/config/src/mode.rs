//! Launch-mode catalogue.
//!
//! Each mode names the downstream application script, its fixed listen port,
//! the keys that must be non-empty before launch, and optional keys that fall
//! back to defaults when the environment file leaves them out.

use std::fmt;
use std::str::FromStr;

use crate::constants::{
    ADMIN_PORT, CHAT_PORT, DB_HOST, DB_NAME, DB_PASSWORD, DB_PORT, DB_USER, DEFAULT_DB_HOST,
    DEFAULT_DB_NAME, DEFAULT_DB_PORT, DEFAULT_DB_USER, GEMINI_API_KEY, VIEWER_PORT,
};

/// A launcher invocation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaunchMode {
    /// File-search store admin console.
    Admin,
    /// Database viewer.
    Viewer,
    /// End-user chat front end.
    Chat,
}

impl LaunchMode {
    pub const ALL: [LaunchMode; 3] = [LaunchMode::Admin, LaunchMode::Viewer, LaunchMode::Chat];

    /// Stable identifier used on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Viewer => "viewer",
            Self::Chat => "chat",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Admin => "Admin console",
            Self::Viewer => "Data viewer",
            Self::Chat => "Chat front end",
        }
    }

    /// Application script handed to the launcher.
    pub const fn script(self) -> &'static str {
        match self {
            Self::Admin => "admin.py",
            Self::Viewer => "db_viewer.py",
            Self::Chat => "app.py",
        }
    }

    /// Fixed listen port.
    pub const fn port(self) -> u16 {
        match self {
            Self::Admin => ADMIN_PORT,
            Self::Viewer => VIEWER_PORT,
            Self::Chat => CHAT_PORT,
        }
    }

    pub const fn required_keys(self) -> &'static [&'static str] {
        match self {
            Self::Admin | Self::Chat => &[GEMINI_API_KEY],
            Self::Viewer => &[DB_PASSWORD],
        }
    }

    /// Optional keys and the value used when they are missing or blank.
    pub const fn optional_defaults(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Admin | Self::Chat => &[],
            Self::Viewer => &[
                (DB_HOST, DEFAULT_DB_HOST),
                (DB_PORT, DEFAULT_DB_PORT),
                (DB_NAME, DEFAULT_DB_NAME),
                (DB_USER, DEFAULT_DB_USER),
            ],
        }
    }

    /// Keys whose values must parse as a TCP port number.
    pub const fn port_keys(self) -> &'static [&'static str] {
        match self {
            Self::Admin | Self::Chat => &[],
            Self::Viewer => &[DB_PORT],
        }
    }

    /// Every key this mode reads: required keys first, then optional ones.
    pub fn known_keys(self) -> impl Iterator<Item = &'static str> {
        self.required_keys()
            .iter()
            .copied()
            .chain(self.optional_defaults().iter().map(|(key, _)| *key))
    }
}

impl fmt::Display for LaunchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a launch mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown launch mode '{0}' (expected one of: admin, viewer, chat)")]
pub struct ParseModeError(pub String);

impl FromStr for LaunchMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "viewer" | "db-viewer" | "data-viewer" => Ok(Self::Viewer),
            "chat" | "app" => Ok(Self::Chat),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}
