//! Record model builder: header + sections + path → `Record`.

use std::path::Path;

use verdict_config::GovernanceConfig;
use verdict_core::Record;
use verdict_core::ids::{number_from_file_name, number_from_value};

use crate::error::ParseError;
use crate::header::parse_header;
use crate::sections::{scan_sections, visible_title};

/// Build one record from its file content.
///
/// The record number comes from the header `id`, falling back to the
/// leading number of the file name. A present but unreadable `id` is an
/// error rather than a silent fallback.
pub fn build_record(
    path: &Path,
    rel_path: &str,
    content: String,
    config: &GovernanceConfig,
) -> Result<Record, ParseError> {
    let parsed = parse_header(&content)?;
    let prefix = config.record_prefix.as_str();
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();

    let number = match parsed.header.get("id") {
        Some(value) if !value.is_null() => number_from_value(value, prefix).ok_or_else(|| {
            ParseError::MalformedHeader(format!(
                "`id` must be a positive number or a {prefix}-<NUMBER> token"
            ))
        })?,
        _ => number_from_file_name(&file_name, prefix).ok_or_else(|| {
            ParseError::MalformedHeader(format!(
                "no record number in `id` or in file name '{file_name}'"
            ))
        })?,
    };

    let body_start = parsed.region.body_start;
    let sections = scan_sections(&content, body_start);
    let visible = visible_title(&content, body_start, prefix);
    let title = parsed
        .header
        .title()
        .or_else(|| visible.clone())
        .unwrap_or_default();

    tracing::debug!(
        number,
        path = rel_path,
        sections = sections.len(),
        "parsed record"
    );

    Ok(Record {
        number,
        title,
        path: path.to_path_buf(),
        rel_path: rel_path.to_string(),
        content,
        body_offset: body_start,
        header: parsed.header,
        visible_title: visible,
        sections,
    })
}
