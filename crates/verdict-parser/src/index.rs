//! Index file parsing.
//!
//! Entries are two lines: a number line `<PREFIX>-<NUMBER>` and a definition
//! line `: [<title>](<link>)<annotation>`. The bracket groups capture only
//! title and link, so trailing annotations never break re-parsing. A link
//! holding whitespace or parentheses is written as `(<link>)`.

use regex::Regex;
use std::sync::LazyLock;

use verdict_core::IndexEntry;

use crate::lines::lines;
use crate::sections::fold_title;

static DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^:\s*\[(?P<title>(?:[^\]\\]|\\.)*)\]\((?:<(?P<angled>(?:[^<>\\]|\\.)*)>|(?P<link>[^()\s<]*))\)(?P<annotation>.*)$",
    )
        .expect("definition pattern is valid")
});

/// Escape a title for use inside `[...]`.
#[must_use]
pub fn escape_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for c in title.chars() {
        if matches!(c, '\\' | '[' | ']') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Link destination as written inside `(...)`.
///
/// Plain when it has no whitespace, parentheses, or angle brackets;
/// otherwise angle-bracketed with `\`, `<`, `>` escaped.
#[must_use]
pub fn link_destination(link: &str) -> String {
    let plain = !link.is_empty()
        && !link
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '(' | ')' | '<' | '>' | '\\'));
    if plain {
        return link.to_string();
    }
    let mut out = String::with_capacity(link.len() + 2);
    out.push('<');
    for c in link.chars() {
        if matches!(c, '\\' | '<' | '>') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('>');
    out
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// Record number named by an index number line.
#[must_use]
pub fn number_line(line: &str, prefix: &str) -> Option<u32> {
    let rest = line.trim().strip_prefix(prefix)?.strip_prefix('-')?;
    if rest.is_empty() || !rest.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    rest.parse::<u32>().ok().filter(|n| *n > 0)
}

/// Parse every well-formed entry of an index file, in file order.
///
/// Number lines without a definition line directly below them are skipped.
#[must_use]
pub fn parse_index(content: &str, prefix: &str) -> Vec<IndexEntry> {
    let all: Vec<_> = lines(content).collect();
    let mut entries = Vec::new();

    for (position, line) in all.iter().enumerate() {
        let Some(number) = number_line(line.text, prefix) else {
            continue;
        };
        let Some(definition) = all.get(position + 1) else {
            tracing::debug!(line = line.number, "index number line at end of file");
            continue;
        };
        let Some(captures) = DEFINITION.captures(definition.text.trim_end()) else {
            tracing::debug!(line = line.number, "index number line without definition");
            continue;
        };

        let annotation = captures["annotation"].trim();
        entries.push(IndexEntry {
            number,
            title: fold_title(&unescape(&captures["title"])),
            link: captures
                .name("angled")
                .map_or_else(|| captures["link"].to_string(), |m| unescape(m.as_str())),
            annotation: (!annotation.is_empty()).then(|| annotation.to_string()),
            line: line.number,
        });
    }

    entries
}
