//! Collected validation results.

use serde::Serialize;
use std::fmt;

use crate::enums::{ErrorKind, Severity};

/// One violation. Immutable once built; a record may have many.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub record: Option<u32>,
    pub kind: ErrorKind,
    pub severity: Severity,
    pub message: String,
    /// Project-relative file the violation was found in.
    pub file: Option<String>,
}

impl ValidationError {
    #[must_use]
    pub fn error(kind: ErrorKind, record: Option<u32>, message: impl Into<String>) -> Self {
        Self {
            record,
            kind,
            severity: Severity::Error,
            message: message.into(),
            file: None,
        }
    }

    #[must_use]
    pub fn warning(kind: ErrorKind, record: Option<u32>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(kind, record, message)
        }
    }

    #[must_use]
    pub fn in_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.file, self.record) {
            (Some(file), _) => write!(f, "{file}: ")?,
            (None, Some(number)) => write!(f, "#{number}: ")?,
            (None, None) => {}
        }
        write!(f, "{} [{}] {}", self.severity, self.kind, self.message)
    }
}

/// Result of one pass of the validator pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub records_checked: usize,
    pub index_entries_checked: usize,
}

impl ValidationReport {
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.iter().filter(|e| e.is_error()).count()
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.errors.len() - self.error_count()
    }

    /// Clean means no error-severity entries; warnings are allowed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.error_count() == 0
    }

    #[must_use]
    pub fn has_kind(&self, kind: ErrorKind) -> bool {
        self.errors.iter().any(|e| e.kind == kind)
    }

    pub fn of_kind(&self, kind: ErrorKind) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(move |e| e.kind == kind)
    }
}
