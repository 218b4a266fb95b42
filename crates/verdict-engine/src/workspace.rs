//! Snapshot of everything a run looks at.
//!
//! All record files, the index, and optional glossary documents are read
//! before any validator runs. Validators and fixers only ever see this
//! snapshot, never the live filesystem.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use verdict_config::GovernanceConfig;
use verdict_core::ids::number_from_file_name;
use verdict_core::{IndexEntry, Record};
use verdict_parser::{ParseError, build_record, parse_index};

use crate::discover::{discover_records, relative_path};
use crate::error::EngineError;

/// A record file whose header could not be parsed.
#[derive(Debug, Clone)]
pub struct UnparsedRecord {
    pub path: PathBuf,
    pub rel_path: String,
    /// Number from the file name, when it has one.
    pub number: Option<u32>,
    pub error: ParseError,
}

/// The index file as read at load time.
#[derive(Debug, Clone)]
pub struct IndexFile {
    pub content: String,
    pub entries: Vec<IndexEntry>,
}

/// A non-record document scanned for cross-references.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub rel_path: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
    pub records: Vec<Record>,
    pub unparsed: Vec<UnparsedRecord>,
    pub index_path: PathBuf,
    pub index_rel_path: String,
    /// `None` when the index file does not exist yet.
    pub index: Option<IndexFile>,
    pub documents: Vec<Document>,
}

pub(crate) fn read_text(path: &Path) -> Result<String, EngineError> {
    fs::read_to_string(path).map_err(|source| EngineError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a record file. Undecodable bytes make that one record unusable;
/// only an IO failure is fatal.
fn read_record(path: &Path) -> Result<Result<String, ParseError>, EngineError> {
    let bytes = fs::read(path).map_err(|source| EngineError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8(bytes).map_err(|_| ParseError::NotUtf8))
}

impl Workspace {
    /// Read the record set, the index, and (when asked) the glossary files.
    pub fn load(
        project_root: &Path,
        config: &GovernanceConfig,
        include_documents: bool,
    ) -> Result<Self, EngineError> {
        let mut records = Vec::new();
        let mut unparsed = Vec::new();

        for path in discover_records(project_root, config)? {
            let rel_path = relative_path(project_root, &path);
            let built = read_record(&path)?
                .and_then(|content| build_record(&path, &rel_path, content, config));
            match built {
                Ok(record) => records.push(record),
                Err(error) => {
                    tracing::debug!(path = %rel_path, %error, "record header unusable");
                    let number = path.file_name().and_then(|name| {
                        number_from_file_name(&name.to_string_lossy(), &config.record_prefix)
                    });
                    unparsed.push(UnparsedRecord {
                        path,
                        rel_path,
                        number,
                        error,
                    });
                }
            }
        }

        let index_path = config.index_path(project_root);
        let index_rel_path = relative_path(project_root, &index_path);
        let index = if index_path.is_file() {
            let content = read_text(&index_path)?;
            let entries = parse_index(&content, &config.record_prefix);
            Some(IndexFile { content, entries })
        } else {
            tracing::debug!(path = %index_rel_path, "index file does not exist");
            None
        };

        let mut documents = Vec::new();
        if include_documents {
            for path in config.glossary_paths(project_root) {
                let content = read_text(&path)?;
                documents.push(Document {
                    rel_path: relative_path(project_root, &path),
                    path,
                    content,
                });
            }
        }

        tracing::debug!(
            records = records.len(),
            unparsed = unparsed.len(),
            documents = documents.len(),
            "loaded workspace"
        );

        Ok(Self {
            root: project_root.to_path_buf(),
            records,
            unparsed,
            index_path,
            index_rel_path,
            index,
            documents,
        })
    }

    /// Every record number present on disk, parsed or not.
    #[must_use]
    pub fn known_numbers(&self) -> BTreeSet<u32> {
        self.records
            .iter()
            .map(|record| record.number)
            .chain(self.unparsed.iter().filter_map(|record| record.number))
            .collect()
    }

    #[must_use]
    pub fn index_entries(&self) -> &[IndexEntry] {
        self.index
            .as_ref()
            .map(|index| index.entries.as_slice())
            .unwrap_or_default()
    }

    /// Number of files the snapshot holds as records.
    #[must_use]
    pub fn record_file_count(&self) -> usize {
        self.records.len() + self.unparsed.len()
    }
}
