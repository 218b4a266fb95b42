//! Record tokens of the form `<PREFIX>-<NUMBER>` (e.g. `ADR-0007`).
//!
//! Tokens render with the number zero-padded to four digits. Parsing accepts
//! any digit count so `ADR-7` and `ADR-0007` name the same record.

use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Zero-padding width used when rendering record numbers.
pub const NUMBER_WIDTH: usize = 4;

/// A parsed `<PREFIX>-<NUMBER>` reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordToken {
    pub prefix: String,
    pub number: u32,
}

impl RecordToken {
    #[must_use]
    pub fn new(prefix: impl Into<String>, number: u32) -> Self {
        Self {
            prefix: prefix.into(),
            number,
        }
    }
}

impl fmt::Display for RecordToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:0width$}", self.prefix, self.number, width = NUMBER_WIDTH)
    }
}

impl FromStr for RecordToken {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = |reason: &str| CoreError::InvalidToken {
            value: trimmed.to_string(),
            reason: reason.to_string(),
        };

        let (prefix, digits) = trimmed
            .split_once('-')
            .ok_or_else(|| invalid("expected '<PREFIX>-<NUMBER>'"))?;
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid("prefix must be alphabetic"));
        }
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("number must be decimal digits"));
        }
        let number = digits
            .parse::<u32>()
            .map_err(|_| invalid("number out of range"))?;
        if number == 0 {
            return Err(invalid("number must be positive"));
        }

        Ok(Self::new(prefix, number))
    }
}

/// Format a record number as a token with the given prefix.
#[must_use]
pub fn format_token(prefix: &str, number: u32) -> String {
    RecordToken::new(prefix, number).to_string()
}

/// Read a record number from a header value.
///
/// Integers are taken as-is; strings must be a token whose prefix matches
/// `prefix` (case-insensitive) or a bare positive number.
#[must_use]
pub fn number_from_value(value: &Value, prefix: &str) -> Option<u32> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .filter(|n| *n > 0),
        Value::String(s) => number_from_str(s, prefix),
        _ => None,
    }
}

/// Read a record number from a token or bare number string.
#[must_use]
pub fn number_from_str(s: &str, prefix: &str) -> Option<u32> {
    let trimmed = s.trim();
    if let Ok(n) = trimmed.parse::<u32>() {
        return (n > 0).then_some(n);
    }
    trimmed
        .parse::<RecordToken>()
        .ok()
        .filter(|token| token.prefix.eq_ignore_ascii_case(prefix))
        .map(|token| token.number)
}

/// Leading record number of a file name such as `ADR-0007-use-postgres.md`.
#[must_use]
pub fn number_from_file_name(file_name: &str, prefix: &str) -> Option<u32> {
    let head = file_name.get(..prefix.len())?;
    if !head.eq_ignore_ascii_case(prefix) {
        return None;
    }
    let rest = file_name[prefix.len()..].strip_prefix('-')?;
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    digits.parse::<u32>().ok().filter(|n| *n > 0)
}
