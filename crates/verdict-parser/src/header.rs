//! Structured-header (YAML front matter) parsing.
//!
//! The header is the region between a first line `---` and the next line that
//! is exactly `---` or `...`. Everything after the closing delimiter is body.

use serde_json::Value;
use std::ops::Range;

use verdict_core::Header;

use crate::error::ParseError;
use crate::lines::lines;

const DELIMITER: &str = "---";
const ALT_CLOSE: &str = "...";
const BOM: char = '\u{feff}';

/// Byte layout of a header region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRegion {
    /// The YAML text between the delimiters.
    pub yaml: Range<usize>,
    /// Byte offset just past the closing delimiter line.
    pub body_start: usize,
}

/// A successfully parsed header and where it sits in the file.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedHeader {
    pub header: Header,
    pub region: HeaderRegion,
}

/// Locate the header region without parsing it.
pub fn locate_header(content: &str) -> Result<HeaderRegion, ParseError> {
    let skip = if content.starts_with(BOM) {
        BOM.len_utf8()
    } else {
        0
    };
    let text = &content[skip..];

    let mut iter = lines(text);
    let first = iter.next().ok_or(ParseError::MissingHeader)?;
    if first.text.trim_end() != DELIMITER {
        return Err(ParseError::MissingHeader);
    }

    for line in iter {
        let trimmed = line.text.trim_end();
        if trimmed == DELIMITER || trimmed == ALT_CLOSE {
            return Ok(HeaderRegion {
                yaml: skip + first.end..skip + line.start,
                body_start: skip + line.end,
            });
        }
    }

    Err(ParseError::MalformedHeader(
        "header is not terminated by a closing '---' line".to_string(),
    ))
}

/// Parse the header of a record file.
pub fn parse_header(content: &str) -> Result<ParsedHeader, ParseError> {
    let region = locate_header(content)?;
    let yaml = &content[region.yaml.clone()];
    if yaml.trim().is_empty() {
        return Err(ParseError::MalformedHeader("header is empty".to_string()));
    }

    let value: Value = serde_yaml::from_str(yaml)
        .map_err(|error| ParseError::MalformedHeader(error.to_string()))?;

    match value {
        Value::Object(fields) => Ok(ParsedHeader {
            header: Header::new(fields),
            region,
        }),
        Value::Null => Err(ParseError::MalformedHeader("header is empty".to_string())),
        _ => Err(ParseError::MalformedHeader(
            "header is not a key/value mapping".to_string(),
        )),
    }
}

/// Find the top-level line for `key` inside the YAML region.
///
/// Returns the byte range of the whole line (without terminator). Only
/// unindented `key:` lines count, so nested keys never match.
#[must_use]
pub fn find_field_line(content: &str, region: &HeaderRegion, key: &str) -> Option<Range<usize>> {
    let yaml = &content[region.yaml.clone()];
    lines(yaml).find_map(|line| {
        let rest = line.text.strip_prefix(key)?;
        rest.starts_with(':').then(|| {
            let start = region.yaml.start + line.start;
            start..start + line.text.len()
        })
    })
}
