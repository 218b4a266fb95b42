//! Responses for `check`, `fix`, and `index`.

use serde::Serialize;
use serde_json::Value;

use verdict_core::{ValidationError, ValidationReport};
use verdict_engine::{FixFailure, FixRun, RepairedFile};

use super::Rendered;

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

fn error_lines(errors: &[ValidationError]) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}

fn error_rows(errors: &[ValidationError]) -> Vec<Value> {
    errors
        .iter()
        .filter_map(|error| serde_json::to_value(error).ok())
        .collect()
}

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub valid: bool,
    pub records_checked: usize,
    pub index_entries_checked: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub errors: Vec<ValidationError>,
}

impl From<ValidationReport> for CheckResponse {
    fn from(report: ValidationReport) -> Self {
        Self {
            valid: report.is_clean(),
            records_checked: report.records_checked,
            index_entries_checked: report.index_entries_checked,
            error_count: report.error_count(),
            warning_count: report.warning_count(),
            errors: report.errors,
        }
    }
}

impl Rendered for CheckResponse {
    fn text(&self, quiet: bool) -> String {
        let mut lines = error_lines(&self.errors);
        if !quiet {
            lines.push(format!(
                "checked {} and {}: {}, {}",
                plural(self.records_checked, "record"),
                plural(self.index_entries_checked, "index entry"),
                plural(self.error_count, "error"),
                plural(self.warning_count, "warning"),
            ));
        }
        lines.join("\n")
    }

    fn table_rows(&self) -> Vec<Value> {
        error_rows(&self.errors)
    }
}

#[derive(Debug, Serialize)]
pub struct FixResponse {
    pub valid: bool,
    pub repaired: Vec<RepairedFile>,
    pub failures: Vec<FixFailure>,
    /// Errors found before any repair.
    pub initial_error_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
    /// What remains after repairing and re-validating.
    pub errors: Vec<ValidationError>,
}

impl From<FixRun> for FixResponse {
    fn from(run: FixRun) -> Self {
        Self {
            valid: run.is_clean(),
            initial_error_count: run.initial.error_count(),
            error_count: run.report.error_count(),
            warning_count: run.report.warning_count(),
            repaired: run.repaired,
            failures: run.failures,
            errors: run.report.errors,
        }
    }
}

impl Rendered for FixResponse {
    fn text(&self, quiet: bool) -> String {
        let mut lines = Vec::new();
        if !quiet {
            for file in &self.repaired {
                for change in &file.changes {
                    lines.push(format!("{}: fixed: {change}", file.file));
                }
            }
        }
        for failure in &self.failures {
            lines.push(format!("{}: not fixed: {}", failure.file, failure.reason));
        }
        lines.extend(error_lines(&self.errors));
        if !quiet {
            lines.push(format!(
                "repaired {}, {} remain",
                plural(self.repaired.len(), "file"),
                plural(self.error_count, "error"),
            ));
        }
        lines.join("\n")
    }

    fn table_rows(&self) -> Vec<Value> {
        error_rows(&self.errors)
    }
}

#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub file: String,
    pub content: String,
}

impl Rendered for IndexResponse {
    fn text(&self, _quiet: bool) -> String {
        self.content.clone()
    }

    fn table_rows(&self) -> Vec<Value> {
        self.content
            .lines()
            .map(|line| serde_json::json!({ "line": line }))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use verdict_core::{ErrorKind, ValidationReport};

    use super::*;

    fn report() -> ValidationReport {
        ValidationReport {
            errors: vec![
                ValidationError::error(ErrorKind::InvalidStatus, Some(3), "status 'x' is not valid")
                    .in_file("docs/decisions/ADR-0003.md"),
                ValidationError::warning(
                    ErrorKind::PromotionGateViolation,
                    Some(4),
                    "no alternatives",
                ),
            ],
            records_checked: 4,
            index_entries_checked: 1,
        }
    }

    #[test]
    fn check_text_lists_errors_then_summary() {
        let response = CheckResponse::from(report());
        assert_eq!(
            response.text(false),
            "docs/decisions/ADR-0003.md: error [invalid_status] status 'x' is not valid\n\
             #4: warning [promotion_gate_violation] no alternatives\n\
             checked 4 records and 1 index entry: 1 error, 1 warning"
        );
        assert!(!response.text(true).contains("checked"));
        assert!(!response.valid);
    }

    #[test]
    fn fix_text_reports_repairs_and_residue() {
        let run = FixRun {
            initial: report(),
            repaired: vec![RepairedFile {
                file: "docs/decisions/README.md".to_string(),
                changes: vec!["regenerated index".to_string()],
            }],
            failures: vec![FixFailure {
                file: "docs/decisions/ADR-0005.md".to_string(),
                reason: "ambiguous: 2 differing `# ` title headings".to_string(),
            }],
            report: report(),
        };
        let text = FixResponse::from(run).text(false);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "docs/decisions/README.md: fixed: regenerated index");
        assert!(lines[1].contains("not fixed: ambiguous"));
        assert_eq!(lines.last().copied(), Some("repaired 1 file, 1 error remain"));
    }

    #[test]
    fn table_rows_are_error_objects() {
        let rows = CheckResponse::from(report()).table_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["kind"], "invalid_status");
        assert_eq!(rows[1]["severity"], "warning");
        assert_eq!(rows[1]["file"], Value::Null);
    }
}
