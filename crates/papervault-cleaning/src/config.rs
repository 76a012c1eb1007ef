use regex::Regex;

/// Tuning knobs for [`TextCleaner`](crate::TextCleaner).
///
/// The defaults reproduce the built-in behavior exactly; the only knob
/// today is a list of extra artifact-line patterns, for stripping
/// venue-specific running headers the built-in heuristics cannot know
/// about.
#[derive(Debug, Clone, Default)]
pub struct CleaningConfig {
    /// Additional line patterns to drop during artifact removal.
    /// Matched against the whitespace-trimmed line; anchor them
    /// (`^...$`) to avoid eating lines on a substring hit.
    pub extra_artifact_patterns: Vec<Regex>,
}

/// Builder for [`CleaningConfig`].
#[derive(Debug, Clone, Default)]
pub struct CleaningConfigBuilder {
    patterns: Vec<String>,
}

impl CleaningConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an artifact-line pattern. Invalid regexes surface at
    /// [`build`](Self::build).
    pub fn add_artifact_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    pub fn build(self) -> Result<CleaningConfig, regex::Error> {
        let extra_artifact_patterns = self
            .patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CleaningConfig {
            extra_artifact_patterns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_extra_patterns() {
        assert!(CleaningConfig::default().extra_artifact_patterns.is_empty());
    }

    #[test]
    fn builder_compiles_patterns() {
        let config = CleaningConfigBuilder::new()
            .add_artifact_pattern(r"^draft$")
            .add_artifact_pattern(r"(?i)^confidential$")
            .build()
            .unwrap();
        assert_eq!(config.extra_artifact_patterns.len(), 2);
    }

    #[test]
    fn builder_rejects_invalid_regex() {
        let result = CleaningConfigBuilder::new()
            .add_artifact_pattern(r"([unclosed")
            .build();
        assert!(result.is_err());
    }
}
