pub mod artifacts;
pub mod config;
pub mod ligatures;
pub mod whitespace;

pub use config::{CleaningConfig, CleaningConfigBuilder};

/// Normalizes raw PDF-extracted page text.
///
/// Pipeline, in fixed order:
/// 1. Expand broken ligature glyphs to their ASCII letter sequences
/// 2. Drop artifact lines (blank lines, standalone page numbers,
///    "Page X of Y" footers)
/// 3. Repair hyphen-wrapped words and collapse whitespace
/// 4. Drop the result if the collapsed text is itself an artifact line
///    (a footer that was wrapped across physical lines)
///
/// Artifact removal is line-oriented, so it must run before whitespace
/// normalization destroys the line boundaries it keys on. Step 4 makes
/// cleaning a fixed point: cleaning already-cleaned text changes
/// nothing.
#[derive(Debug, Clone, Default)]
pub struct TextCleaner {
    config: CleaningConfig,
}

impl TextCleaner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CleaningConfig) -> Self {
        Self { config }
    }

    /// Clean one page's raw text. Empty input yields empty output; this
    /// never fails, whatever the input looks like.
    pub fn clean(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let text = ligatures::expand_ligatures(text);
        let text = artifacts::remove_artifacts_with_config(&text, &self.config);
        let text = whitespace::normalize_whitespace(&text);

        // Collapsing can fuse a line-wrapped footer ("Page 2\nof 10")
        // into exactly the kind of line the artifact filter drops.
        // Re-check the collapsed result so cleaning reaches a fixed
        // point in a single pass.
        if artifacts::is_artifact_line(&text, &self.config) {
            return String::new();
        }
        text
    }
}
