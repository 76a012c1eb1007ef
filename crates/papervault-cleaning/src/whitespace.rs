//! Hyphen-wrap repair and whitespace collapsing.

use once_cell::sync::Lazy;
use regex::Regex;

/// Hyphen at a line break, plus any indentation on the continuation
/// line. Justified PDF text wraps words this way constantly.
static HYPHEN_BREAK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-\n\s*").unwrap());

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapse the text to single-spaced continuous prose.
///
/// Hyphen-wrap repair runs first ("communi-\ncation" → "communication"),
/// then every whitespace run (newlines included) collapses to one space,
/// then the ends are trimmed. Paragraph boundaries do not survive this;
/// the downstream index works on page-granular text and does not need
/// them.
pub fn normalize_whitespace(text: &str) -> String {
    let text = HYPHEN_BREAK_RE.replace_all(text, "");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphen_wrap_repair() {
        assert_eq!(normalize_whitespace("communi-\ncation"), "communication");
        assert_eq!(normalize_whitespace("communi-\n   cation"), "communication");
    }

    #[test]
    fn test_hyphen_without_break_is_kept() {
        assert_eq!(normalize_whitespace("state-of-the-art"), "state-of-the-art");
    }

    #[test]
    fn test_collapses_runs_and_newlines() {
        assert_eq!(normalize_whitespace("a  b\t\tc\nd\n\ne"), "a b c d e");
    }

    #[test]
    fn test_trims_ends() {
        assert_eq!(normalize_whitespace("  padded  "), "padded");
    }

    #[test]
    fn test_whitespace_only_collapses_to_empty() {
        assert_eq!(normalize_whitespace(" \n\t "), "");
    }
}
