//! Cross-reference tokens embedded in prose.
//!
//! `ADR-0007` is a well-formed reference. `ADR 0007`, `ADR_0007`, and
//! `ADR0007` name a record too but with the wrong separator; they are
//! reported separately so a fixer can rewrite them.

use regex::Regex;

use crate::lines::lines;
use crate::mask::mask_for_references;

/// One reference token found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossReference {
    pub number: u32,
    /// Token as written.
    pub text: String,
    /// Byte range of the token in the scanned text.
    pub start: usize,
    pub end: usize,
    /// 1-based line of the token.
    pub line: usize,
    pub well_formed: bool,
}

/// Compiled token pattern for one record prefix.
#[derive(Debug, Clone)]
pub struct ReferenceScanner {
    pattern: Regex,
}

impl ReferenceScanner {
    #[must_use]
    pub fn new(prefix: &str) -> Self {
        let pattern = Regex::new(&format!(
            r"\b{}(?P<sep>[-_ ]?)(?P<num>\d{{1,6}})\b",
            regex::escape(prefix)
        ))
        .expect("escaped prefix always forms a valid pattern");
        Self { pattern }
    }

    /// Scan `text` from `from` onward, ignoring fenced blocks and inline code.
    #[must_use]
    pub fn scan(&self, text: &str, from: usize) -> Vec<CrossReference> {
        let masked = mask_for_references(text);
        let mut found = Vec::new();

        for line in lines(&masked).filter(|line| line.end > from) {
            for captures in self.pattern.captures_iter(line.text) {
                let Some(whole) = captures.get(0) else {
                    continue;
                };
                let start = line.start + whole.start();
                if start < from {
                    continue;
                }
                let Ok(number) = captures["num"].parse::<u32>() else {
                    continue;
                };
                found.push(CrossReference {
                    number,
                    text: whole.as_str().to_string(),
                    start,
                    end: line.start + whole.end(),
                    line: line.number,
                    well_formed: &captures["sep"] == "-",
                });
            }
        }

        found
    }
}

/// Rewrite every malformed separator in `text` (from `from` onward) to `-`.
///
/// Returns the rewritten text and the tokens that were changed.
#[must_use]
pub fn normalize_separators(
    scanner: &ReferenceScanner,
    text: &str,
    from: usize,
    prefix: &str,
) -> (String, Vec<String>) {
    let malformed: Vec<_> = scanner
        .scan(text, from)
        .into_iter()
        .filter(|reference| !reference.well_formed)
        .collect();

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0usize;
    let mut changed = Vec::with_capacity(malformed.len());
    for reference in &malformed {
        out.push_str(&text[cursor..reference.start]);
        let digits = reference.text[prefix.len()..].trim_start_matches(['-', '_', ' ']);
        out.push_str(prefix);
        out.push('-');
        out.push_str(digits);
        changed.push(reference.text.clone());
        cursor = reference.end;
    }
    out.push_str(&text[cursor..]);

    (out, changed)
}
