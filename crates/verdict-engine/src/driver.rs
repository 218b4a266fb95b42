//! Run driver: `check`, `fix`, and `check-staged`.
//!
//! Every mode loads a full snapshot and runs the same pipeline. `fix` writes
//! its repairs, then reloads everything from disk and runs the pipeline
//! again; only that second report decides the outcome.

use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use verdict_config::GovernanceConfig;
use verdict_core::ValidationReport;

use crate::discover::relative_path;
use crate::error::EngineError;
use crate::fix::{
    apply_fixers, fix_document_separators, record_fixers, regenerate_index, write_atomic,
};
use crate::validate::run_pipeline;
use crate::workspace::Workspace;

/// Which errors a check reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Scope {
    #[default]
    All,
    /// Only errors in, or about, these files. Paths are relative to the
    /// project root or absolute.
    Staged(Vec<PathBuf>),
}

#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Also scan the configured glossary files for references.
    pub check_terms: bool,
    pub scope: Scope,
}

#[derive(Debug, Clone, Default)]
pub struct FixOptions {
    pub check_terms: bool,
    /// Rewrite malformed reference separators in records and glossaries.
    pub fix_terms: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepairedFile {
    pub file: String,
    pub changes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixFailure {
    pub file: String,
    pub reason: String,
}

/// Everything a fix run did, plus the report that decides its exit status.
#[derive(Debug, Clone, Serialize)]
pub struct FixRun {
    pub initial: ValidationReport,
    pub repaired: Vec<RepairedFile>,
    pub failures: Vec<FixFailure>,
    /// Result of re-validating the tree after all writes.
    pub report: ValidationReport,
}

impl FixRun {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.report.is_clean()
    }
}

/// Validate the tree without writing anything.
pub fn run_check(
    project_root: &Path,
    config: &GovernanceConfig,
    options: &CheckOptions,
) -> Result<ValidationReport, EngineError> {
    let workspace = Workspace::load(project_root, config, options.check_terms)?;
    let report = run_pipeline(&workspace, config);

    let report = match &options.scope {
        Scope::All => report,
        Scope::Staged(files) => restrict_to_staged(report, &workspace, files),
    };

    tracing::info!(
        records = report.records_checked,
        errors = report.error_count(),
        warnings = report.warning_count(),
        "check finished"
    );
    Ok(report)
}

/// Keep only errors located in a staged file or about a staged record.
///
/// The full tree stays the resolution context, so a staged record that
/// references an unstaged one still resolves.
#[must_use]
pub fn restrict_to_staged(
    report: ValidationReport,
    workspace: &Workspace,
    staged: &[PathBuf],
) -> ValidationReport {
    let files: BTreeSet<String> = staged
        .iter()
        .map(|path| {
            if path.is_absolute() {
                relative_path(&workspace.root, path)
            } else {
                relative_path(Path::new(""), path)
            }
        })
        .collect();

    let numbers: BTreeSet<u32> = workspace
        .records
        .iter()
        .filter(|record| files.contains(&record.rel_path))
        .map(|record| record.number)
        .chain(
            workspace
                .unparsed
                .iter()
                .filter(|record| files.contains(&record.rel_path))
                .filter_map(|record| record.number),
        )
        .collect();

    let errors = report
        .errors
        .into_iter()
        .filter(|error| {
            error.file.as_ref().is_some_and(|file| files.contains(file))
                || error.record.is_some_and(|number| numbers.contains(&number))
        })
        .collect();

    ValidationReport { errors, ..report }
}

/// Repair what can be repaired, then re-validate from disk.
pub fn run_fix(
    project_root: &Path,
    config: &GovernanceConfig,
    options: &FixOptions,
) -> Result<FixRun, EngineError> {
    let include_documents = options.check_terms || options.fix_terms;
    let workspace = Workspace::load(project_root, config, include_documents)?;
    let initial = run_pipeline(&workspace, config);

    let fixers = record_fixers(options.fix_terms);
    let mut repaired = Vec::new();
    let mut failures = Vec::new();

    for record in &workspace.records {
        match apply_fixers(&record.content, config, &fixers) {
            Ok(Some(outcome)) => {
                write_atomic(&record.path, &outcome.content)?;
                tracing::info!(
                    file = %record.rel_path,
                    changes = outcome.changes.len(),
                    "repaired record"
                );
                repaired.push(RepairedFile {
                    file: record.rel_path.clone(),
                    changes: outcome.changes,
                });
            }
            Ok(None) => {}
            Err(error) => {
                tracing::warn!(file = %record.rel_path, %error, "left record untouched");
                failures.push(FixFailure {
                    file: record.rel_path.clone(),
                    reason: error.to_string(),
                });
            }
        }
    }

    if options.fix_terms {
        for document in &workspace.documents {
            if let Some(outcome) = fix_document_separators(&document.content, config) {
                write_atomic(&document.path, &outcome.content)?;
                repaired.push(RepairedFile {
                    file: document.rel_path.clone(),
                    changes: outcome.changes,
                });
            }
        }
    }

    let refreshed = Workspace::load(project_root, config, include_documents)?;
    let index_dir = refreshed
        .index_path
        .parent()
        .map_or_else(|| project_root.to_path_buf(), Path::to_path_buf);
    let index = regenerate_index(&refreshed.records, config, &index_dir);
    let current = refreshed.index.as_ref().map(|index| index.content.as_str());
    if current != Some(index.as_str()) {
        write_atomic(&refreshed.index_path, &index)?;
        tracing::info!(file = %refreshed.index_rel_path, "regenerated index");
        repaired.push(RepairedFile {
            file: refreshed.index_rel_path.clone(),
            changes: vec!["regenerated index".to_string()],
        });
    }

    let final_workspace = Workspace::load(project_root, config, options.check_terms)?;
    let report = run_pipeline(&final_workspace, config);

    tracing::info!(
        repaired = repaired.len(),
        failed = failures.len(),
        remaining = report.error_count(),
        "fix finished"
    );

    Ok(FixRun {
        initial,
        repaired,
        failures,
        report,
    })
}

/// The index `fix` would write, without writing it.
pub fn render_index(project_root: &Path, config: &GovernanceConfig) -> Result<String, EngineError> {
    let workspace = Workspace::load(project_root, config, false)?;
    let index_dir = workspace
        .index_path
        .parent()
        .map_or_else(|| project_root.to_path_buf(), Path::to_path_buf);
    Ok(regenerate_index(&workspace.records, config, &index_dir))
}
