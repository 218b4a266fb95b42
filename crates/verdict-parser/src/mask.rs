//! Literal-block masking.
//!
//! Structural scanning must never see text inside fenced blocks: a record
//! that shows `## Participants` as sample syntax does not declare that
//! section. Masking replaces every byte of a fenced line with a space and
//! keeps line terminators, so the masked text has the same length and line
//! numbers as the original and offsets found in it index the original.

use crate::lines::lines;

/// A fence opener: marker character and run length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fence {
    marker: char,
    len: usize,
}

fn fence_of(line: &str) -> Option<(Fence, &str)> {
    let stripped = line.trim_start_matches(' ');
    if line.len() - stripped.len() > 3 {
        return None;
    }
    let marker = stripped.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = stripped.chars().take_while(|c| *c == marker).count();
    (len >= 3).then(|| (Fence { marker, len }, &stripped[len..]))
}

fn closes(open: Fence, line: &str) -> bool {
    fence_of(line).is_some_and(|(fence, rest)| {
        fence.marker == open.marker && fence.len >= open.len && rest.trim().is_empty()
    })
}

fn blank_out(out: &mut String, text: &str) {
    out.extend(text.chars().map(|c| match c {
        '\n' | '\r' => c.to_string(),
        other => " ".repeat(other.len_utf8()),
    }));
}

/// Mask every line of every fenced block, including the fence lines.
///
/// An unclosed fence masks to the end of the text. Idempotent.
#[must_use]
pub fn mask_literal_blocks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut open: Option<Fence> = None;

    for line in lines(text) {
        let raw = &text[line.start..line.end];
        match open {
            Some(fence) => {
                if closes(fence, line.text) {
                    open = None;
                }
                blank_out(&mut out, raw);
            }
            None => {
                if let Some((fence, info)) = fence_of(line.text) {
                    // Backtick fences may not carry backticks in the info string.
                    if fence.marker == '~' || !info.contains('`') {
                        open = Some(fence);
                        blank_out(&mut out, raw);
                        continue;
                    }
                }
                out.push_str(raw);
            }
        }
    }

    out
}

/// Mask inline code spans (`` `like this` ``) on each line.
///
/// A backtick run only closes on a run of the same length on the same line;
/// unmatched runs are left as-is.
#[must_use]
pub fn mask_inline_code(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in lines(text) {
        let raw = &text[line.start..line.end];
        out.push_str(&mask_inline_line(raw));
    }
    out
}

fn mask_inline_line(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut masked = raw.to_string();
    let mut i = 0usize;

    while i < bytes.len() {
        if bytes[i] != b'`' {
            i += 1;
            continue;
        }
        let run = bytes[i..].iter().take_while(|b| **b == b'`').count();
        let search_from = i + run;
        let close = find_run(bytes, search_from, run);
        match close {
            Some(close_start) => {
                let end = close_start + run;
                let span = &raw[i..end];
                let mut blank = String::with_capacity(span.len());
                blank_out(&mut blank, span);
                masked.replace_range(i..end, &blank);
                i = end;
            }
            None => i = search_from,
        }
    }

    masked
}

fn find_run(bytes: &[u8], from: usize, run: usize) -> Option<usize> {
    let mut j = from;
    while j < bytes.len() {
        if bytes[j] == b'`' {
            let len = bytes[j..].iter().take_while(|b| **b == b'`').count();
            if len == run {
                return Some(j);
            }
            j += len;
        } else {
            j += 1;
        }
    }
    None
}

/// Mask both fenced blocks and inline code.
#[must_use]
pub fn mask_for_references(text: &str) -> String {
    mask_inline_code(&mask_literal_blocks(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fenced_lines_become_spaces_with_same_length() {
        let text = "before\n```md\n## Participants\n```\nafter\n";
        let masked = mask_literal_blocks(text);
        assert_eq!(masked.len(), text.len());
        assert_eq!(masked.lines().count(), text.lines().count());
        assert!(!masked.contains("Participants"));
        assert!(masked.starts_with("before\n"));
        assert!(masked.ends_with("after\n"));
    }

    #[test]
    fn multibyte_text_keeps_byte_length() {
        let text = "~~~\nnaïve — ünïcode\n~~~\n";
        let masked = mask_literal_blocks(text);
        assert_eq!(masked.len(), text.len());
        assert!(masked.trim().is_empty());
    }

    #[test]
    fn fence_closes_only_on_same_marker_and_length() {
        let text = "````\n```\n## Inside\n````\n## Outside\n";
        let masked = mask_literal_blocks(text);
        assert!(!masked.contains("Inside"));
        assert!(masked.contains("## Outside"));

        let text = "~~~\n```\n## Inside\n~~~\n";
        assert!(!mask_literal_blocks(text).contains("Inside"));
    }

    #[test]
    fn unclosed_fence_masks_to_end() {
        let masked = mask_literal_blocks("ok\n```\n## Lost\nstill lost");
        assert!(masked.starts_with("ok\n"));
        assert!(!masked.contains("Lost"));
    }

    #[test]
    fn deeply_indented_fence_is_not_a_fence() {
        let text = "    ```\n## Real\n";
        assert_eq!(mask_literal_blocks(text), text);
    }

    #[test]
    fn masking_is_idempotent() {
        let text = "a\n```\nb\n```\nc\n~~~~\nd\n";
        let once = mask_literal_blocks(text);
        assert_eq!(mask_literal_blocks(&once), once);
    }

    #[test]
    fn inline_code_is_masked() {
        let text = "see `ADR 12` and ``x ` y`` but ADR 3\n";
        let masked = mask_inline_code(text);
        assert_eq!(masked.len(), text.len());
        assert!(!masked.contains("ADR 12"));
        assert!(!masked.contains("x ` y"));
        assert!(masked.contains("ADR 3"));
    }

    #[test]
    fn unmatched_backtick_is_left_alone() {
        let text = "a ` b\n";
        assert_eq!(mask_inline_code(text), text);
    }
}
