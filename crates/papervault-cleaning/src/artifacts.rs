//! Line-level artifact removal: page numbers, running footers, blanks.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::CleaningConfig;

/// A line that is nothing but digits is almost always a standalone page
/// number injected by the layout.
static PAGE_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

/// "Page 3 of 12"-style running footers.
static PAGE_OF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^Page \d+ of \d+$").unwrap());

/// Drop artifact lines from raw page text.
///
/// Operates on lines, so it must run while the original line breaks are
/// still intact. Surviving lines keep their order and internal content
/// (no trimming yet) and are rejoined with `\n`.
pub fn remove_artifacts(text: &str) -> String {
    remove_artifacts_with_config(text, &CleaningConfig::default())
}

/// Config-aware version of [`remove_artifacts`].
pub(crate) fn remove_artifacts_with_config(text: &str, config: &CleaningConfig) -> String {
    text.split('\n')
        .filter(|line| !is_artifact_line(line, config))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn is_artifact_line(line: &str, config: &CleaningConfig) -> bool {
    let stripped = line.trim();
    if stripped.is_empty() {
        return true;
    }
    if PAGE_NUMBER_RE.is_match(stripped) || PAGE_OF_RE.is_match(stripped) {
        return true;
    }
    config
        .extra_artifact_patterns
        .iter()
        .any(|re| re.is_match(stripped))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_standalone_page_numbers() {
        assert_eq!(remove_artifacts("Intro\n5\nBody"), "Intro\nBody");
    }

    #[test]
    fn test_drops_page_x_of_y_case_insensitively() {
        assert_eq!(remove_artifacts("Intro\nPage 2 of 10\nBody"), "Intro\nBody");
        assert_eq!(remove_artifacts("Intro\nPAGE 2 OF 10\nBody"), "Intro\nBody");
    }

    #[test]
    fn test_drops_blank_and_whitespace_only_lines() {
        assert_eq!(remove_artifacts("a\n\n   \nb"), "a\nb");
    }

    #[test]
    fn test_keeps_lines_with_digits_among_words() {
        // "Section 5" is content, "5" is not.
        assert_eq!(remove_artifacts("Section 5\n5"), "Section 5");
    }

    #[test]
    fn test_keeps_internal_whitespace_of_survivors() {
        // Trimming is the whitespace pass's job, not ours.
        assert_eq!(remove_artifacts("  indented  \n7"), "  indented  ");
    }

    #[test]
    fn test_page_footer_with_surrounding_padding_still_drops() {
        assert_eq!(remove_artifacts("body\n   Page 1 of 2   \nmore"), "body\nmore");
    }
}
