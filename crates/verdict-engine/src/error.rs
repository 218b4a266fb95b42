use std::path::PathBuf;

use thiserror::Error;
use verdict_parser::ParseError;

/// Infrastructure failures that abort a run.
///
/// Per-record problems never surface here; they become `ValidationError`s.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("records directory not found: {}", .0.display())]
    RecordsDirMissing(PathBuf),
    #[error("failed to walk '{}': {reason}", path.display())]
    Walk { path: PathBuf, reason: String },
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a fixer declined to rewrite a file.
///
/// The file is left untouched and the failure is listed in the fix summary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("ambiguous: {0}")]
    Ambiguous(String),
    #[error("cannot render header value: {0}")]
    Render(String),
}
