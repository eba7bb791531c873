// Harness configuration for the example runner
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config/harness.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Run cases that carry a skip directive
    pub include_ignored: bool,
    /// Substring a case name must contain to be selected
    pub filter: Option<String>,
    pub parallel: bool,
    pub format: ReportFormat,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            include_ignored: false,
            filter: None,
            parallel: true,
            format: ReportFormat::Text,
        }
    }
}

impl HarnessConfig {
    /// Load harness configuration from a JSON file
    pub fn load(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            bail!("Harness config file not found: {}", config_path.display());
        }

        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    /// Load from `path`, or from config/harness.json.
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let config_path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load(config_path)
    }

    /// Merge command-line flags over file values.
    /// Flags only turn options on or replace the filter; an unset flag
    /// leaves the file value alone.
    pub fn apply_overrides(
        &mut self,
        include_ignored: bool,
        filter: Option<String>,
        sequential: bool,
        json: bool,
    ) {
        self.include_ignored |= include_ignored;
        if filter.is_some() {
            self.filter = filter;
        }
        if sequential {
            self.parallel = false;
        }
        if json {
            self.format = ReportFormat::Json;
        }
    }

    pub fn selects(&self, name: &str) -> bool {
        self.filter
            .as_deref()
            .map_or(true, |pattern| name.contains(pattern))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes()).expect("Failed to write config");
        file
    }

    #[test]
    fn test_defaults() {
        let config = HarnessConfig::default();
        assert!(!config.include_ignored);
        assert!(config.parallel);
        assert_eq!(config.filter, None);
        assert_eq!(config.format, ReportFormat::Text);
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"{"include_ignored": true, "filter": "pass", "parallel": false, "format": "json"}"#,
        );
        let config = HarnessConfig::load(file.path()).unwrap();
        assert!(config.include_ignored);
        assert_eq!(config.filter.as_deref(), Some("pass"));
        assert!(!config.parallel);
        assert_eq!(config.format, ReportFormat::Json);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let file = write_config(r#"{"include_ignored": true}"#);
        let config = HarnessConfig::load(file.path()).unwrap();
        assert!(config.include_ignored);
        assert!(config.parallel);
        assert_eq!(config.format, ReportFormat::Text);
    }

    #[test]
    fn test_load_malformed_config() {
        let file = write_config("{ not json");
        let err = HarnessConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse"));
        assert!(HarnessConfig::load_or_default(Some(file.path())).is_err());
    }

    #[test]
    fn test_missing_file() {
        let path = Path::new("does/not/exist/harness.json");
        assert!(HarnessConfig::load(path).is_err());
        assert_eq!(
            HarnessConfig::load_or_default(Some(path)).unwrap(),
            HarnessConfig::default()
        );
    }

    #[test]
    fn test_selects() {
        let mut config = HarnessConfig::default();
        assert!(config.selects("anything"));

        config.filter = Some("standard".to_string());
        assert!(config.selects("using_standard_library"));
        assert!(!config.selects("passing"));
    }

    #[test]
    fn test_no_flags_keep_file_values() {
        let file = write_config(
            r#"{"include_ignored": true, "filter": "pass", "parallel": false, "format": "json"}"#,
        );
        let loaded = HarnessConfig::load(file.path()).unwrap();

        let mut config = loaded.clone();
        config.apply_overrides(false, None, false, false);

        assert_eq!(config, loaded);
    }

    #[test]
    fn test_include_ignored_flag() {
        let mut config = HarnessConfig::default();
        config.apply_overrides(true, None, false, false);
        assert!(config.include_ignored);
    }

    #[test]
    fn test_filter_flag_replaces_file_filter() {
        let file = write_config(r#"{"filter": "pass"}"#);
        let mut config = HarnessConfig::load(file.path()).unwrap();

        config.apply_overrides(false, Some("standard".to_string()), false, false);

        assert_eq!(config.filter.as_deref(), Some("standard"));
        assert!(config.selects("using_standard_library"));
        assert!(!config.selects("passing"));
    }

    #[test]
    fn test_sequential_flag() {
        let mut config = HarnessConfig::default();
        assert!(config.parallel);
        config.apply_overrides(false, None, true, false);
        assert!(!config.parallel);
    }

    #[test]
    fn test_json_flag() {
        let mut config = HarnessConfig::default();
        config.apply_overrides(false, None, false, true);
        assert_eq!(config.format, ReportFormat::Json);
    }

    #[test]
    fn test_unset_flags_never_turn_off_file_options() {
        let file = write_config(r#"{"include_ignored": true, "parallel": false, "format": "json"}"#);
        let mut config = HarnessConfig::load(file.path()).unwrap();

        config.apply_overrides(false, None, false, false);

        assert!(config.include_ignored);
        assert!(!config.parallel);
        assert_eq!(config.format, ReportFormat::Json);
        assert_eq!(config.filter, None);
    }
}
