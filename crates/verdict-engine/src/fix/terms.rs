//! Cross-reference separator fixer (`--fix-terms`).

use verdict_config::GovernanceConfig;
use verdict_parser::{ReferenceScanner, locate_header, normalize_separators};

use super::FixOutcome;
use crate::error::FixError;

fn normalize_from(content: &str, from: usize, config: &GovernanceConfig) -> Option<FixOutcome> {
    let prefix = config.record_prefix.as_str();
    let scanner = ReferenceScanner::new(prefix);
    let (fixed, changed) = normalize_separators(&scanner, content, from, prefix);
    if changed.is_empty() {
        return None;
    }
    let changes = changed
        .iter()
        .map(|token| {
            let digits = token[prefix.len()..].trim_start_matches(['-', '_', ' ']);
            format!("reference '{token}' -> {prefix}-{digits}")
        })
        .collect();
    Some(FixOutcome {
        content: fixed,
        changes,
    })
}

/// Rewrite malformed reference separators in a record body.
pub fn fix_record_separators(
    content: &str,
    config: &GovernanceConfig,
) -> Result<Option<FixOutcome>, FixError> {
    let region = locate_header(content)?;
    Ok(normalize_from(content, region.body_start, config))
}

/// Rewrite malformed reference separators anywhere in a document.
#[must_use]
pub fn fix_document_separators(content: &str, config: &GovernanceConfig) -> Option<FixOutcome> {
    normalize_from(content, 0, config)
}
