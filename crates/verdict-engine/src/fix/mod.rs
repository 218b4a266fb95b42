//! Auto-fixers.
//!
//! Each fixer is a pure transform from old file content to new content plus
//! a description of what changed. `Ok(None)` means the file is already in
//! the fixed form; running a fixer on its own output always yields `None`.
//! Only [`write_atomic`] touches the filesystem.

mod header;
mod index;
mod merge;
mod terms;
mod write;

pub use header::correct_header;
pub use index::{regenerate_index, relative_link};
pub use merge::merge_duplicate_sections;
pub use terms::{fix_document_separators, fix_record_separators};
pub use write::write_atomic;

use serde::Serialize;
use verdict_config::GovernanceConfig;

use crate::error::FixError;

/// New content and a line per change made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixOutcome {
    pub content: String,
    pub changes: Vec<String>,
}

pub type RecordFix = fn(&str, &GovernanceConfig) -> Result<Option<FixOutcome>, FixError>;

/// Fixers applied to each record file, in order.
#[must_use]
pub fn record_fixers(fix_terms: bool) -> Vec<(&'static str, RecordFix)> {
    let mut fixers: Vec<(&'static str, RecordFix)> = vec![
        ("header", correct_header),
        ("duplicate-sections", merge_duplicate_sections),
    ];
    if fix_terms {
        fixers.push(("reference-separators", fix_record_separators));
    }
    fixers
}

/// Run `fixers` in order over one file's content.
///
/// Stops at the first failure so a half-fixed file is never produced.
pub fn apply_fixers(
    content: &str,
    config: &GovernanceConfig,
    fixers: &[(&'static str, RecordFix)],
) -> Result<Option<FixOutcome>, FixError> {
    let mut current = content.to_string();
    let mut changes = Vec::new();

    for (name, fixer) in fixers {
        if let Some(outcome) = fixer(&current, config)? {
            tracing::debug!(fixer = name, changes = outcome.changes.len(), "fixer changed content");
            current = outcome.content;
            changes.extend(outcome.changes);
        }
    }

    Ok((current != content).then_some(FixOutcome {
        content: current,
        changes,
    }))
}
