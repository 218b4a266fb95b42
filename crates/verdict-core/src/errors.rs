//! Cross-cutting error types for verdict.
//!
//! Domain-specific errors (`ParseError`, `ConfigError`, `EngineError`) live in
//! their respective crates; `verdict-cli` converges them with `anyhow`.

use thiserror::Error;

/// Errors that can be raised by core type conversions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A string could not be read as a `<PREFIX>-<NUMBER>` token.
    #[error("Invalid record token '{value}': {reason}")]
    InvalidToken { value: String, reason: String },
}
