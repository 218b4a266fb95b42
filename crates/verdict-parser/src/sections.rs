//! Section scanning over masked text.
//!
//! Markers are found on the masked copy; bodies are sliced from the original
//! so a real section keeps any fenced examples it contains.

use verdict_core::Section;

use crate::lines::{Line, lines};
use crate::mask::mask_literal_blocks;

/// A `# ` title heading found outside fenced blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleHeading {
    /// Byte range of the heading line, without terminator.
    pub start: usize,
    pub end: usize,
    /// Heading text as written, e.g. `ADR-0007: Use Postgres`.
    pub text: String,
}

fn heading_text(line: &str, level: usize) -> Option<&str> {
    let stripped = line.trim_start_matches(' ');
    if line.len() - stripped.len() > 3 {
        return None;
    }
    let hashes = stripped.chars().take_while(|c| *c == '#').count();
    if hashes != level {
        return None;
    }
    let rest = &stripped[hashes..];
    if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
        return None;
    }
    let text = rest.trim().trim_end_matches('#').trim_end();
    (!text.is_empty()).then_some(text)
}

/// Name declared by a `## <Name>` marker line, if it is one.
#[must_use]
pub fn section_marker(line: &str) -> Option<&str> {
    heading_text(line, 2)
}

fn body_lines<'a>(masked: &'a str, body_start: usize) -> impl Iterator<Item = Line<'a>> {
    lines(masked).filter(move |line| line.start >= body_start)
}

/// Scan the named sections of a record.
///
/// `body_start` is the byte offset just past the header; markers before it
/// are ignored. Offsets in the result are relative to `content`.
#[must_use]
pub fn scan_sections(content: &str, body_start: usize) -> Vec<Section> {
    let masked = mask_literal_blocks(content);
    let markers: Vec<(Line<'_>, &str)> = body_lines(&masked, body_start)
        .filter_map(|line| section_marker(line.text).map(|name| (line, name)))
        .collect();

    markers
        .iter()
        .enumerate()
        .map(|(index, (line, name))| {
            let body_end = markers
                .get(index + 1)
                .map_or(content.len(), |(next, _)| next.start);
            Section {
                name: (*name).to_string(),
                body: content[line.end..body_end].to_string(),
                offset: line.start,
                line: line.number,
            }
        })
        .collect()
}

/// All `# ` headings in the body, in document order.
#[must_use]
pub fn title_headings(content: &str, body_start: usize) -> Vec<TitleHeading> {
    let masked = mask_literal_blocks(content);
    body_lines(&masked, body_start)
        .filter(|line| heading_text(line.text, 1).is_some())
        .filter_map(|line| {
            let original = &content[line.start..line.start + line.text.len()];
            heading_text(original, 1).map(|text| TitleHeading {
                start: line.start,
                end: line.start + line.text.len(),
                text: text.to_string(),
            })
        })
        .collect()
}

/// Split a leading `<PREFIX>-<NUMBER>` token off a heading.
///
/// `ADR-0007: Use Postgres` → (`Some("ADR-0007")`, `Use Postgres`).
#[must_use]
pub fn split_title_token<'a>(text: &'a str, prefix: &str) -> (Option<&'a str>, &'a str) {
    let Some(head) = text.get(..prefix.len()) else {
        return (None, text);
    };
    if !head.eq_ignore_ascii_case(prefix) {
        return (None, text);
    }
    let Some(rest) = text[prefix.len()..].strip_prefix('-') else {
        return (None, text);
    };
    let digits = rest.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return (None, text);
    }
    let token_end = prefix.len() + 1 + digits;
    let remainder = text[token_end..]
        .trim_start()
        .trim_start_matches([':', '-', '—', '–'])
        .trim_start();
    if remainder.is_empty() {
        return (None, text);
    }
    (Some(&text[..token_end]), remainder)
}

/// A title on one line, with runs of whitespace folded to one space.
#[must_use]
pub fn fold_title(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The visible title: first `# ` heading outside fences, token stripped.
#[must_use]
pub fn visible_title(content: &str, body_start: usize, prefix: &str) -> Option<String> {
    title_headings(content, body_start)
        .first()
        .map(|heading| fold_title(split_title_token(&heading.text, prefix).1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scans_names_bodies_and_offsets() {
        let content = "# T\n\n## Context\nWhy.\n\n## Decision\nWhat.\n";
        let sections = scan_sections(content, 0);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].name, "Context");
        assert_eq!(sections[0].body, "Why.\n\n");
        assert_eq!(sections[0].line, 3);
        assert_eq!(&content[sections[1].offset..], "## Decision\nWhat.\n");
        assert_eq!(sections[1].body, "What.\n");
    }

    #[test]
    fn fenced_example_sections_are_not_real() {
        let content = "## Notes\nExample:\n```markdown\n## Participants\nAlice\n```\n";
        let sections = scan_sections(content, 0);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name, "Notes");
        assert!(sections[0].body.contains("## Participants"));
    }

    #[test]
    fn deeper_headings_stay_in_the_body() {
        let content = "## Decision\n### Detail\ntext\n#### More\n";
        let sections = scan_sections(content, 0);
        assert_eq!(sections.len(), 1);
        assert!(sections[0].body.contains("### Detail"));
    }

    #[test]
    fn markers_need_a_space_and_a_name() {
        assert_eq!(section_marker("## Context"), Some("Context"));
        assert_eq!(section_marker("##  Spaced  ##"), Some("Spaced"));
        assert_eq!(section_marker("##NoSpace"), None);
        assert_eq!(section_marker("## "), None);
        assert_eq!(section_marker("### Deep"), None);
        assert_eq!(section_marker("    ## Indented"), None);
    }

    #[test]
    fn markers_before_body_start_are_ignored() {
        let content = "## Fake\n## Real\nx\n";
        let sections = scan_sections(content, "## Fake\n".len());
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name, "Real");
    }

    #[test]
    fn title_token_is_split() {
        assert_eq!(
            split_title_token("ADR-0007: Use Postgres", "ADR"),
            (Some("ADR-0007"), "Use Postgres")
        );
        assert_eq!(
            split_title_token("ADR-12 — Pick a queue", "ADR"),
            (Some("ADR-12"), "Pick a queue")
        );
        assert_eq!(split_title_token("Use Postgres", "ADR"), (None, "Use Postgres"));
        assert_eq!(split_title_token("ADR-0007", "ADR"), (None, "ADR-0007"));
    }

    #[test]
    fn visible_title_skips_fenced_headings() {
        let content = "```\n# Not this\n```\n# ADR-0001: This one\n# Later\n";
        assert_eq!(visible_title(content, 0, "ADR").as_deref(), Some("This one"));
        assert_eq!(title_headings(content, 0).len(), 2);
        assert_eq!(
            visible_title("# Use   the\tqueue\n", 0, "ADR").as_deref(),
            Some("Use the queue")
        );
    }
}
