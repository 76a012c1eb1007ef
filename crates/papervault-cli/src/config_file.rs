use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub ingest: Option<IngestConfig>,
    pub cleaning: Option<CleaningSection>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Directory scanned for PDFs when none is given on the command line.
    pub data_dir: Option<String>,
    /// Default JSONL output path.
    pub output: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleaningSection {
    /// Extra artifact-line regexes, anchored per line.
    pub artifact_patterns: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub no_color: Option<bool>,
}

/// Platform config directory path: `<config_dir>/papervault/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("papervault").join("config.toml"))
}

/// Load config by cascading CWD `.papervault.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(&PathBuf::from(".papervault.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &PathBuf) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        ingest: Some(IngestConfig {
            data_dir: overlay
                .ingest
                .as_ref()
                .and_then(|i| i.data_dir.clone())
                .or_else(|| base.ingest.as_ref().and_then(|i| i.data_dir.clone())),
            output: overlay
                .ingest
                .as_ref()
                .and_then(|i| i.output.clone())
                .or_else(|| base.ingest.as_ref().and_then(|i| i.output.clone())),
        }),
        cleaning: Some(CleaningSection {
            artifact_patterns: overlay
                .cleaning
                .as_ref()
                .and_then(|c| c.artifact_patterns.clone())
                .or_else(|| base.cleaning.as_ref().and_then(|c| c.artifact_patterns.clone())),
        }),
        display: Some(DisplayConfig {
            no_color: overlay
                .display
                .as_ref()
                .and_then(|d| d.no_color)
                .or_else(|| base.display.as_ref().and_then(|d| d.no_color)),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_config() {
        let config: ConfigFile = toml::from_str(
            r#"
            [ingest]
            data_dir = "papers"
            "#,
        )
        .unwrap();
        assert_eq!(config.ingest.unwrap().data_dir.as_deref(), Some("papers"));
        assert!(config.display.is_none());
    }

    #[test]
    fn overlay_wins_on_merge() {
        let base: ConfigFile = toml::from_str(
            r#"
            [ingest]
            data_dir = "platform"
            output = "platform.jsonl"
            [display]
            no_color = false
            "#,
        )
        .unwrap();
        let overlay: ConfigFile = toml::from_str(
            r#"
            [ingest]
            data_dir = "cwd"
            "#,
        )
        .unwrap();

        let merged = merge(base, overlay);
        let ingest = merged.ingest.unwrap();
        assert_eq!(ingest.data_dir.as_deref(), Some("cwd"));
        // Fields missing from the overlay fall back to the base.
        assert_eq!(ingest.output.as_deref(), Some("platform.jsonl"));
        assert_eq!(merged.display.unwrap().no_color, Some(false));
    }

    #[test]
    fn missing_file_loads_as_none() {
        assert!(load_from_path(&PathBuf::from("/no/such/config.toml")).is_none());
    }
}
