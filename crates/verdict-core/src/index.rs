//! Entries of the separate index file.

use serde::{Deserialize, Serialize};

/// One two-line entry of the index file.
///
/// `annotation` is whatever trails the `[title](link)` group on the
/// definition line (e.g. `— superseded by ADR-0009`). It is carried verbatim
/// and never interpreted by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub number: u32,
    pub title: String,
    pub link: String,
    pub annotation: Option<String>,
    /// 1-based line of the number line.
    pub line: usize,
}
