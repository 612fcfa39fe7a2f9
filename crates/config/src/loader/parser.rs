//! Line parser for `KEY=VALUE` environment files.
//!
//! Invariants:
//! - Lines without `=` are skipped, never fatal.
//! - Keys are trimmed; a key that is empty or starts with `#` is skipped.
//! - Values are kept verbatim apart from the line ending.

use std::io::{self, BufRead};

use tracing::debug;

use crate::constants::{COMMENT_PREFIX, KEY_VALUE_DELIMITER};
use crate::types::EnvironmentMap;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Classification of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    Entry { key: &'a str, value: &'a str },
    Comment,
    Blank,
    Malformed,
}

pub(crate) fn classify(line: &str) -> Line<'_> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let Some((raw_key, value)) = line.split_once(KEY_VALUE_DELIMITER) else {
        return if line.trim().is_empty() {
            Line::Blank
        } else if line.trim_start().starts_with(COMMENT_PREFIX) {
            Line::Comment
        } else {
            Line::Malformed
        };
    };

    let key = raw_key.trim();
    if key.is_empty() {
        Line::Malformed
    } else if key.starts_with(COMMENT_PREFIX) {
        Line::Comment
    } else {
        Line::Entry { key, value }
    }
}

/// Parse one line into `(key, value)`, or `None` if the line contributes no entry.
///
/// ```
/// use envgate_config::parse_line;
///
/// assert_eq!(parse_line("URL=postgres://h/db?a=b"), Some(("URL", "postgres://h/db?a=b")));
/// assert_eq!(parse_line("# KEY=value"), None);
/// assert_eq!(parse_line("no delimiter"), None);
/// ```
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    match classify(line) {
        Line::Entry { key, value } => Some((key, value)),
        _ => None,
    }
}

/// Parse an in-memory environment file.
pub fn parse_str(contents: &str) -> EnvironmentMap {
    let mut map = EnvironmentMap::new();
    for (index, line) in contents.lines().enumerate() {
        let line = if index == 0 {
            line.trim_start_matches(BYTE_ORDER_MARK)
        } else {
            line
        };
        apply_line(&mut map, index + 1, line);
    }
    map
}

/// Parse lines from a reader, stopping at the first I/O or UTF-8 error.
pub(crate) fn parse_reader<R: BufRead>(reader: R) -> io::Result<EnvironmentMap> {
    let mut map = EnvironmentMap::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = if index == 0 {
            line.trim_start_matches(BYTE_ORDER_MARK)
        } else {
            line.as_str()
        };
        apply_line(&mut map, index + 1, line);
    }
    Ok(map)
}

fn apply_line(map: &mut EnvironmentMap, line_number: usize, line: &str) {
    match classify(line) {
        Line::Entry { key, value } => {
            if map.insert(key, value) {
                debug!(line = line_number, key, "duplicate key, later value wins");
            }
        }
        Line::Malformed => debug!(line = line_number, "skipping line without a key"),
        Line::Comment | Line::Blank => {}
    }
}
