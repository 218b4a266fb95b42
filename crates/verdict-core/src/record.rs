//! In-memory model of one decision record.
//!
//! A `Record` is built fresh from disk on every run and never persisted as an
//! object. Fixers rewrite files, not records.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Key/value metadata from the top of a record file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Header {
    fields: Map<String, Value>,
}

impl Header {
    #[must_use]
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// A string field, trimmed. Numbers are rendered so `id: 7` reads as `"7"`.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            Value::String(s) => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// The `title` field on one line: runs of whitespace, line breaks
    /// included, become a single space.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        self.text("title")
            .map(|t| t.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|t| !t.is_empty())
    }

    #[must_use]
    pub fn status(&self) -> Option<String> {
        self.text("status").filter(|s| !s.is_empty())
    }

    /// Raw `superseded_by` value, `None` when absent, null, or blank.
    #[must_use]
    pub fn superseded_by(&self) -> Option<String> {
        ["superseded_by", "superseded-by"]
            .iter()
            .find_map(|key| self.text(key))
            .filter(|s| !s.is_empty() && s != "null" && s != "~")
    }
}

/// A named `## <Name>` region of a record body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub name: String,
    /// Original text between this marker line and the next marker.
    pub body: String,
    /// Byte offset of the marker line within the whole file.
    pub offset: usize,
    /// 1-based line of the marker.
    pub line: usize,
}

impl Section {
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.body.trim().is_empty()
    }
}

/// One parsed decision record.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    pub number: u32,
    pub title: String,
    #[serde(skip)]
    pub path: PathBuf,
    /// Path relative to the project root, `/`-separated.
    pub rel_path: String,
    #[serde(skip)]
    pub content: String,
    /// Byte offset where the body starts, just past the header region.
    #[serde(skip)]
    pub body_offset: usize,
    pub header: Header,
    /// First `# ` heading outside fenced blocks, without a leading token.
    pub visible_title: Option<String>,
    pub sections: Vec<Section>,
}

impl Record {
    #[must_use]
    pub fn status(&self) -> Option<String> {
        self.header.status()
    }

    /// First section with the given name.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn sections_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Section> + 'a {
        self.sections.iter().filter(move |s| s.name == name)
    }

    #[must_use]
    pub fn has_section(&self, name: &str) -> bool {
        self.section(name).is_some()
    }

    /// Occurrence count per section name.
    #[must_use]
    pub fn section_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for section in &self.sections {
            *counts.entry(section.name.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Record text after the header region.
    #[must_use]
    pub fn body(&self) -> &str {
        self.content.get(self.body_offset..).unwrap_or_default()
    }

    /// File name component of the record path.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}
