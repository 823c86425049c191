//! Line classification and tokenization

use super::types::Directive;

/// Marks a comment line when it is the first non-whitespace character
pub const COMMENT_MARKER: char = '"';

/// Classification of a single raw line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Comment,
    Directive(Directive<'a>),
}

/// Classify one raw line
///
/// Leading and trailing whitespace is trimmed first. Tokens are separated by
/// runs of whitespace; the first token is the keyword.
pub fn parse_line(raw: &str) -> Line<'_> {
    let line = raw.trim();

    if line.is_empty() {
        return Line::Blank;
    }
    if line.starts_with(COMMENT_MARKER) {
        return Line::Comment;
    }

    let mut tokens = line.split_whitespace();
    // Non-empty after trim, so there is at least one token
    let keyword = tokens.next().unwrap_or_default();

    Line::Directive(Directive {
        keyword,
        operands: tokens.collect(),
    })
}
