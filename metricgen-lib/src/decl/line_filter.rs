//! Reduces raw input to the lines that can hold a statement.

const COMMENT_MARKER: char = '#';

/// A non-blank input line with comments and trailing whitespace removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based physical line number.
    pub number: usize,
    pub text: &'a str,
}

/// Yield the statement-bearing lines of `input`.
///
/// Line numbers count every physical line, including the ones that are dropped.
pub fn filter_lines(input: &str) -> impl Iterator<Item = SourceLine<'_>> {
    input.lines().enumerate().filter_map(|(index, raw)| {
        let uncommented = raw.split_once(COMMENT_MARKER).map_or(raw, |(before, _)| before);
        let text = uncommented.trim_end();

        if text.is_empty() {
            None
        } else {
            Some(SourceLine { number: index + 1, text })
        }
    })
}
