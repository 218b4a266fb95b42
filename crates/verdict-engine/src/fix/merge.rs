//! Duplicate-section merger.

use std::collections::BTreeMap;

use verdict_config::GovernanceConfig;
use verdict_core::Section;
use verdict_parser::{locate_header, scan_sections};

use super::FixOutcome;
use crate::error::FixError;

/// Drop leading blank lines and all trailing whitespace.
fn trim_blank_lines(body: &str) -> &str {
    let mut start = 0;
    for line in body.split_inclusive('\n') {
        if !line.trim().is_empty() {
            break;
        }
        start += line.len();
    }
    body[start..].trim_end()
}

fn section_end(content: &str, sections: &[Section], index: usize) -> usize {
    sections
        .get(index + 1)
        .map_or(content.len(), |next| next.offset)
}

/// Merge every repeated section into its first occurrence.
///
/// Non-empty bodies are joined in document order with one blank line between
/// them; later occurrences are removed.
pub fn merge_duplicate_sections(
    content: &str,
    _config: &GovernanceConfig,
) -> Result<Option<FixOutcome>, FixError> {
    let region = locate_header(content)?;
    let sections = scan_sections(content, region.body_start);

    let mut first_at: BTreeMap<&str, usize> = BTreeMap::new();
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for (index, section) in sections.iter().enumerate() {
        first_at.entry(section.name.as_str()).or_insert(index);
        *counts.entry(section.name.as_str()).or_insert(0) += 1;
    }
    if counts.values().all(|count| *count == 1) {
        return Ok(None);
    }

    let emitted = |index: usize| first_at[sections[index].name.as_str()] == index;
    let mut out = String::with_capacity(content.len());
    out.push_str(&content[..sections[0].offset]);
    let mut changes = Vec::new();

    for (index, section) in sections.iter().enumerate() {
        if !emitted(index) {
            continue;
        }
        let name = section.name.as_str();
        let end = section_end(content, &sections, index);
        if counts[name] == 1 {
            out.push_str(&content[section.offset..end]);
            continue;
        }

        let marker = &content[section.offset..end - section.body.len()];
        out.push_str(marker);
        if !marker.ends_with('\n') {
            out.push('\n');
        }

        let merged = sections
            .iter()
            .filter(|other| other.name == name)
            .map(|other| trim_blank_lines(&other.body))
            .filter(|body| !body.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n");
        if !merged.is_empty() {
            out.push('\n');
            out.push_str(&merged);
            out.push('\n');
        }
        if (index + 1..sections.len()).any(emitted) {
            out.push('\n');
        }
        changes.push(format!("merged {} '{name}' sections", counts[name]));
    }

    let kept = out.trim_end().len();
    out.truncate(kept);
    out.push('\n');

    Ok(Some(FixOutcome {
        content: out,
        changes,
    }))
}
