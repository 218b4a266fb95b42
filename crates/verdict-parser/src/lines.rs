//! Line iteration with byte offsets.

/// A line of text with its position in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset just past the line terminator (or end of text).
    pub end: usize,
    /// 1-based line number.
    pub number: usize,
    /// Line content without `\n` or `\r\n`.
    pub text: &'a str,
}

/// Iterate the lines of `text`, keeping exact byte offsets.
pub fn lines(text: &str) -> impl Iterator<Item = Line<'_>> {
    let mut start = 0usize;
    text.split_inclusive('\n')
        .enumerate()
        .map(move |(index, raw)| {
            let line = Line {
                start,
                end: start + raw.len(),
                number: index + 1,
                text: raw
                    .strip_suffix('\n')
                    .map_or(raw, |s| s.strip_suffix('\r').unwrap_or(s)),
            };
            start += raw.len();
            line
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_cover_the_whole_text() {
        let text = "a\r\nbb\n\nccc";
        let collected: Vec<_> = lines(text).collect();
        assert_eq!(collected.len(), 4);
        assert_eq!(collected[0].text, "a");
        assert_eq!(collected[1].start, 3);
        assert_eq!(collected[1].text, "bb");
        assert_eq!(collected[2].text, "");
        assert_eq!(collected[3].number, 4);
        assert_eq!(collected[3].end, text.len());
    }
}
