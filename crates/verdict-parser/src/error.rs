//! Parser error types for verdict-parser.

/// Errors that make a single record unusable.
///
/// These are fatal for one record only; the driver turns them into
/// `malformed_header` validation errors and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("missing header: file does not start with a '---' line")]
    MissingHeader,

    #[error("malformed header: {0}")]
    MalformedHeader(String),

    #[error("file is not valid UTF-8")]
    NotUtf8,
}
