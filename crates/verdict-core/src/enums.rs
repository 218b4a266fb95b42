//! Error kinds and severities for collected validation results.
//!
//! All enums use `snake_case` serialization so JSON output matches the
//! taxonomy names used in messages and docs.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Whether a violation fails the run or is only reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ErrorKind
// ---------------------------------------------------------------------------

/// Classification of a single violation.
///
/// Declaration order is the order validators run in; reports sort by it
/// after the record number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MalformedHeader,
    DuplicateRecordNumber,
    InvalidStatus,
    MissingRequiredSection,
    UnexpectedSection,
    ConditionalSectionViolation,
    DuplicateSection,
    PromotionGateViolation,
    SupersessionViolation,
    BrokenCrossReference,
    MalformedCrossReferenceSyntax,
    IndexMissingEntry,
    IndexStaleEntry,
    IndexTitleMismatch,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MalformedHeader => "malformed_header",
            Self::DuplicateRecordNumber => "duplicate_record_number",
            Self::InvalidStatus => "invalid_status",
            Self::MissingRequiredSection => "missing_required_section",
            Self::UnexpectedSection => "unexpected_section",
            Self::ConditionalSectionViolation => "conditional_section_violation",
            Self::DuplicateSection => "duplicate_section",
            Self::PromotionGateViolation => "promotion_gate_violation",
            Self::SupersessionViolation => "supersession_violation",
            Self::BrokenCrossReference => "broken_cross_reference",
            Self::MalformedCrossReferenceSyntax => "malformed_cross_reference_syntax",
            Self::IndexMissingEntry => "index_missing_entry",
            Self::IndexStaleEntry => "index_stale_entry",
            Self::IndexTitleMismatch => "index_title_mismatch",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
