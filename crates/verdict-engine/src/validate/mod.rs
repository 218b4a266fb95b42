//! The validator pipeline.
//!
//! Every validator is a pure function from a [`ValidationContext`] to a list
//! of violations. `check`, `fix`, and `check-staged` all run [`run_pipeline`];
//! there is no mode-specific validation path.

mod gate;
mod headers;
mod index_sync;
mod sections;
mod xref;

pub use gate::{alternatives, gate_failures};

use std::collections::BTreeSet;

use verdict_config::GovernanceConfig;
use verdict_core::{Record, ValidationError, ValidationReport};
use verdict_parser::ReferenceScanner;

use crate::workspace::{Document, IndexFile, UnparsedRecord, Workspace};

/// Read-only view of one snapshot plus the lookups validators share.
pub struct ValidationContext<'a> {
    pub config: &'a GovernanceConfig,
    pub records: &'a [Record],
    pub unparsed: &'a [UnparsedRecord],
    pub index: Option<&'a IndexFile>,
    pub index_rel_path: &'a str,
    pub documents: &'a [Document],
    /// Numbers that resolve: every record file on disk, parsed or not.
    pub known: BTreeSet<u32>,
    pub scanner: ReferenceScanner,
}

impl<'a> ValidationContext<'a> {
    #[must_use]
    pub fn new(workspace: &'a Workspace, config: &'a GovernanceConfig) -> Self {
        Self {
            config,
            records: &workspace.records,
            unparsed: &workspace.unparsed,
            index: workspace.index.as_ref(),
            index_rel_path: &workspace.index_rel_path,
            documents: &workspace.documents,
            known: workspace.known_numbers(),
            scanner: ReferenceScanner::new(&config.record_prefix),
        }
    }

    pub(crate) fn token(&self, number: u32) -> String {
        verdict_core::ids::format_token(&self.config.record_prefix, number)
    }
}

type Validator = fn(&ValidationContext<'_>) -> Vec<ValidationError>;

/// Validators in execution order.
const PIPELINE: &[(&str, Validator)] = &[
    ("headers", headers::check_malformed_headers),
    ("record-integrity", headers::check_record_numbers),
    ("status", headers::check_status),
    ("required-sections", sections::check_required),
    ("whitelist", sections::check_whitelist),
    ("conditional-sections", sections::check_conditional),
    ("duplicate-sections", sections::check_duplicates),
    ("promotion-gate", gate::check_promotion_gate),
    ("supersession", gate::check_supersession),
    ("cross-reference", xref::check_cross_references),
    ("index-sync", index_sync::check_index_sync),
];

/// Run every validator over the snapshot.
///
/// Errors are ordered by record number (unnumbered last), then by pipeline
/// stage, so output is stable across runs.
#[must_use]
pub fn run_pipeline(workspace: &Workspace, config: &GovernanceConfig) -> ValidationReport {
    let context = ValidationContext::new(workspace, config);
    let mut errors = Vec::new();

    for (name, validator) in PIPELINE {
        let found = validator(&context);
        tracing::debug!(validator = name, found = found.len(), "validator finished");
        errors.extend(found);
    }

    errors.sort_by_key(|error| error.record.unwrap_or(u32::MAX));

    ValidationReport {
        errors,
        records_checked: workspace.record_file_count(),
        index_entries_checked: workspace.index_entries().len(),
    }
}
