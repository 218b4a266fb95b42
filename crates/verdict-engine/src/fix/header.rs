//! Header and title corrector.
//!
//! Normalizes status spellings and reconciles the header `title` with the
//! record's `# ` heading. Which side wins is `title_policy.source`. Header
//! edits replace whole `key:` lines so the rest of the header keeps its
//! formatting.

use std::collections::BTreeSet;
use std::ops::Range;

use verdict_config::{GovernanceConfig, TitleSource};
use verdict_parser::{
    HeaderRegion, find_field_line, fold_title, lines::lines, parse_header, split_title_token,
    title_headings,
};

use super::FixOutcome;
use crate::error::FixError;

type Edit = (Range<usize>, String);

/// Extend a `key:` line over its indented continuation lines.
fn field_block(content: &str, region: &HeaderRegion, key: &str) -> Option<Range<usize>> {
    let line = find_field_line(content, region, key)?;
    let mut end = line.end;
    let rest = &content[line.end..region.yaml.end];
    for next in lines(rest).skip(1) {
        if !next.text.starts_with([' ', '\t']) {
            break;
        }
        end = line.end + next.start + next.text.len();
    }
    Some(line.start..end)
}

fn yaml_scalar(value: &str) -> Result<String, FixError> {
    serde_yaml::to_string(value)
        .map(|rendered| rendered.trim_end().to_string())
        .map_err(|error| FixError::Render(error.to_string()))
}

fn status_edit(
    content: &str,
    region: &HeaderRegion,
    raw: &str,
    config: &GovernanceConfig,
) -> Option<(Edit, String)> {
    if config.is_valid_status(raw) {
        return None;
    }
    let canonical = config.normalize_status(raw)?;
    let line = field_block(content, region, "status")?;
    Some((
        (line, format!("status: {canonical}")),
        format!("status '{raw}' -> '{canonical}'"),
    ))
}

fn title_edit(
    content: &str,
    region: &HeaderRegion,
    header_title: Option<&str>,
    config: &GovernanceConfig,
) -> Result<Option<(Edit, String)>, FixError> {
    let prefix = config.record_prefix.as_str();
    let headings = title_headings(content, region.body_start);
    let Some(first) = headings.first() else {
        return Ok(None);
    };
    let (token, visible) = split_title_token(&first.text, prefix);
    let visible = fold_title(visible);
    if header_title == Some(visible.as_str()) {
        return Ok(None);
    }

    let distinct: BTreeSet<String> = headings
        .iter()
        .map(|heading| fold_title(split_title_token(&heading.text, prefix).1))
        .collect();
    if distinct.len() > 1 {
        return Err(FixError::Ambiguous(format!(
            "{} differing `# ` title headings",
            distinct.len()
        )));
    }

    match config.title_policy.source {
        TitleSource::Header => {
            let Some(title) = header_title else {
                return Ok(None);
            };
            let line = match token {
                Some(token) => format!("# {token}: {title}"),
                None => format!("# {title}"),
            };
            Ok(Some((
                (first.start..first.end, line),
                format!("title heading -> '{title}'"),
            )))
        }
        TitleSource::Heading => {
            let value = yaml_scalar(&visible)?;
            let edit = match field_block(content, region, "title") {
                Some(line) => (line, format!("title: {value}")),
                None => (
                    region.yaml.start..region.yaml.start,
                    format!("title: {value}\n"),
                ),
            };
            Ok(Some((edit, format!("header title -> '{visible}'"))))
        }
    }
}

/// Normalize the status spelling and reconcile header and heading titles.
pub fn correct_header(
    content: &str,
    config: &GovernanceConfig,
) -> Result<Option<FixOutcome>, FixError> {
    let parsed = parse_header(content)?;
    let region = &parsed.region;
    let mut edits = Vec::new();
    let mut changes = Vec::new();

    if let Some(raw) = parsed.header.status() {
        if let Some((edit, change)) = status_edit(content, region, &raw, config) {
            edits.push(edit);
            changes.push(change);
        }
    }

    let header_title = parsed.header.title();
    if let Some((edit, change)) = title_edit(content, region, header_title.as_deref(), config)? {
        edits.push(edit);
        changes.push(change);
    }

    if edits.is_empty() {
        return Ok(None);
    }

    edits.sort_by_key(|(range, _)| std::cmp::Reverse(range.start));
    let mut fixed = content.to_string();
    for (range, replacement) in edits {
        fixed.replace_range(range, &replacement);
    }

    parse_header(&fixed)
        .map_err(|error| FixError::Render(format!("rewritten header does not parse: {error}")))?;

    Ok(Some(FixOutcome {
        content: fixed,
        changes,
    }))
}
