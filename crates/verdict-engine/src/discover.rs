//! Record file discovery.
//!
//! Walks the records directory one level deep, gitignore-aware, and keeps
//! files named `<PREFIX>-<digits>*.md`. The index file is never a record even
//! when it lives in the same directory.

use ignore::WalkBuilder;
use std::path::{Component, Path, PathBuf};

use verdict_config::GovernanceConfig;
use verdict_core::ids::number_from_file_name;

use crate::error::EngineError;

/// Per-project ignore file honoured alongside `.gitignore`.
pub const IGNORE_FILE: &str = ".verdictignore";

/// Whether a file name looks like a record of the configured type.
#[must_use]
pub fn is_record_file_name(file_name: &str, prefix: &str) -> bool {
    let has_md_extension = Path::new(file_name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"));
    has_md_extension && number_from_file_name(file_name, prefix).is_some()
}

/// Find every record file, sorted by path.
pub fn discover_records(
    project_root: &Path,
    config: &GovernanceConfig,
) -> Result<Vec<PathBuf>, EngineError> {
    let records_dir = config.records_path(project_root);
    if !records_dir.is_dir() {
        return Err(EngineError::RecordsDirMissing(records_dir));
    }
    let index_path = config.index_path(project_root);

    let mut builder = WalkBuilder::new(&records_dir);
    builder
        .max_depth(Some(1))
        .hidden(false)
        .add_custom_ignore_filename(IGNORE_FILE);

    let mut found = Vec::new();
    for entry in builder.build() {
        let entry = entry.map_err(|error| EngineError::Walk {
            path: records_dir.clone(),
            reason: error.to_string(),
        })?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = entry.into_path();
        if path == index_path {
            continue;
        }
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        if is_record_file_name(&file_name, &config.record_prefix) {
            found.push(path);
        } else {
            tracing::debug!(path = %path.display(), "skipping non-record file");
        }
    }

    found.sort();
    Ok(found)
}

/// `path` relative to `root`, `/`-separated. Falls back to the full path.
#[must_use]
pub fn relative_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "x").unwrap();
    }

    #[test]
    fn record_file_names_need_prefix_number_and_extension() {
        assert!(is_record_file_name("ADR-0001-use-postgres.md", "ADR"));
        assert!(is_record_file_name("ADR-12.md", "ADR"));
        assert!(!is_record_file_name("ADR-0001.txt", "ADR"));
        assert!(!is_record_file_name("README.md", "ADR"));
        assert!(!is_record_file_name("RFC-0001.md", "ADR"));
    }

    #[test]
    fn discovers_records_and_skips_index_and_subdirs() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("docs/decisions");
        fs::create_dir_all(dir.join("drafts")).unwrap();
        touch(&dir, "ADR-0002-b.md");
        touch(&dir, "ADR-0001-a.md");
        touch(&dir, "README.md");
        touch(&dir, "notes.md");
        touch(&dir.join("drafts"), "ADR-0003-c.md");

        let config = GovernanceConfig::default();
        let found = discover_records(tmp.path(), &config).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| relative_path(tmp.path(), p))
            .collect();
        assert_eq!(
            names,
            vec![
                "docs/decisions/ADR-0001-a.md".to_string(),
                "docs/decisions/ADR-0002-b.md".to_string(),
            ]
        );
    }

    #[test]
    fn index_named_like_a_record_is_excluded() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("adr");
        fs::create_dir_all(&dir).unwrap();
        touch(&dir, "ADR-0099-index.md");
        touch(&dir, "ADR-0001-a.md");

        let config = GovernanceConfig {
            records_dir: "adr".to_string(),
            index_file: "adr/ADR-0099-index.md".to_string(),
            ..GovernanceConfig::default()
        };
        let found = discover_records(tmp.path(), &config).unwrap();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn ignore_file_hides_records() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("docs/decisions");
        fs::create_dir_all(&dir).unwrap();
        touch(&dir, "ADR-0001-a.md");
        touch(&dir, "ADR-0002-draft.md");
        fs::write(dir.join(IGNORE_FILE), "ADR-0002-draft.md\n").unwrap();

        let found = discover_records(tmp.path(), &GovernanceConfig::default()).unwrap();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn missing_records_dir_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let err = discover_records(tmp.path(), &GovernanceConfig::default()).unwrap_err();
        assert!(matches!(err, EngineError::RecordsDirMissing(_)));
    }
}
