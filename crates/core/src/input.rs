//! Line-oriented input parsing
//!
//! Every input line maps to exactly one entry. Lines that fail to parse are
//! kept as `None` placeholders so downstream output stays aligned with the
//! input file, and each rejection is recorded as a [`Diagnostic`].

use serde::Serialize;
use std::fmt;

/// Reason a line or token was rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineError {
    #[error("empty line -> treated as nan")]
    Empty,

    #[error("invalid float '{raw}' -> treated as nan")]
    InvalidFloat { raw: String },

    #[error("invalid float '{raw}' -> treated as nan")]
    NonFinite { raw: String },

    #[error("invalid integer '{raw}' -> treated as nan")]
    InvalidInteger { raw: String },

    #[error("invalid token '{token}' -> ignored")]
    InvalidToken { token: String },
}

/// A rejected line, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub line: usize,
    pub error: LineError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ERROR] Line {}: {}", self.line, self.error)
    }
}

/// Result of parsing a file line by line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLines<T> {
    /// One entry per input line; `None` marks a rejected line.
    pub entries: Vec<Option<T>>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> ParsedLines<T> {
    /// Number of rejected lines.
    pub fn invalid_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_none()).count()
    }

    /// Iterate over the successfully parsed values, in input order.
    pub fn valid(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().flatten()
    }
}

/// Split `text` on `\n`, `\r\n` or a lone `\r`.
///
/// A terminator at the very end does not start an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.find(|c: char| c == '\n' || c == '\r') {
            Some(pos) => {
                lines.push(&rest[..pos]);
                let terminator = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + terminator..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }

    lines
}

/// Remove `_` digit separators.
///
/// Every underscore must sit between two ASCII digits (`1_000`); any other
/// placement makes the number invalid and yields `None`.
fn strip_digit_separators(s: &str) -> Option<String> {
    if !s.contains('_') {
        return Some(s.to_string());
    }

    let bytes = s.as_bytes();
    for (idx, byte) in bytes.iter().enumerate() {
        if *byte != b'_' {
            continue;
        }
        let before = idx.checked_sub(1).map(|i| bytes[i]);
        let after = bytes.get(idx + 1).copied();
        let between_digits = before.is_some_and(|b| b.is_ascii_digit())
            && after.is_some_and(|b| b.is_ascii_digit());
        if !between_digits {
            return None;
        }
    }

    Some(s.replace('_', ""))
}

/// Parse `text` line by line.
///
/// Each line is trimmed before it reaches `parse`. Blank lines are rejected
/// with [`LineError::Empty`] without calling `parse`. The second argument
/// handed to `parse` is the line as it appeared in the file (minus the line
/// terminator), for use in error messages.
pub fn parse_lines<T, F>(text: &str, parse: F) -> ParsedLines<T>
where
    F: Fn(&str, &str) -> Result<T, LineError>,
{
    let mut entries = Vec::new();
    let mut diagnostics = Vec::new();

    for (idx, raw) in split_lines(text).into_iter().enumerate() {
        let trimmed = raw.trim();

        let result = if trimmed.is_empty() {
            Err(LineError::Empty)
        } else {
            parse(trimmed, raw)
        };

        match result {
            Ok(value) => entries.push(Some(value)),
            Err(error) => {
                entries.push(None);
                diagnostics.push(Diagnostic {
                    line: idx + 1,
                    error,
                });
            }
        }
    }

    ParsedLines {
        entries,
        diagnostics,
    }
}

/// Parse a finite floating point number.
///
/// `inf`, `infinity` and `nan` spellings are valid float syntax but are
/// rejected, since they would poison every statistic.
pub fn parse_float(s: &str, raw: &str) -> Result<f64, LineError> {
    let invalid = || LineError::InvalidFloat {
        raw: raw.to_string(),
    };

    let value: f64 = strip_digit_separators(s)
        .ok_or_else(|| invalid())?
        .parse()
        .map_err(|_| invalid())?;

    if !value.is_finite() {
        return Err(LineError::NonFinite {
            raw: raw.to_string(),
        });
    }

    Ok(value)
}

/// Parse a signed decimal integer that fits in an `i64`.
pub fn parse_integer(s: &str, raw: &str) -> Result<i64, LineError> {
    let invalid = || LineError::InvalidInteger {
        raw: raw.to_string(),
    };

    strip_digit_separators(s)
        .ok_or_else(|| invalid())?
        .parse::<i64>()
        .map_err(|_| invalid())
}
