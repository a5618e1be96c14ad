//! Configuration module
//!
//! Reads `config.toml` from the platform config directory
//! (`~/.config/desk-pager/config.toml` on Linux) unless a path is given
//! explicitly or through `DESK_PAGER_CONFIG`. Every section is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::feature::Feature;
use crate::domain::pagination::PaginationConfig;
use crate::shared::ConfigError;

/// Environment variable that overrides the config location
pub const CONFIG_ENV_VAR: &str = "DESK_PAGER_CONFIG";

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    #[validate(nested)]
    pub pagination: PaginationSettings,
    pub features: FeatureSettings,
    #[validate(nested)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }
}

/// List view defaults
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PaginationSettings {
    /// Rows per page when a list first renders
    #[validate(range(min = 1, max = 500))]
    pub default_page_size: u32,
    /// Choices offered by the page-size selector
    #[validate(length(min = 1), custom(function = "validate_page_size_options"))]
    pub page_size_options: Vec<u32>,
    /// Page buttons shown either side of the current page
    #[validate(range(max = 5))]
    pub sibling_count: u32,
}

impl PaginationSettings {
    pub fn paginator_config(&self) -> PaginationConfig {
        PaginationConfig::new(i64::from(self.default_page_size))
    }
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            page_size_options: vec![5, 10, 20, 50],
            sibling_count: 1,
        }
    }
}

fn validate_page_size_options(options: &[u32]) -> Result<(), ValidationError> {
    if options.contains(&0) {
        return Err(ValidationError::new("page_size_zero"));
    }
    if options.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(ValidationError::new("page_size_options_unsorted"));
    }
    Ok(())
}

/// Initial feature toggles
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureSettings {
    pub chatbot: bool,
    pub live_chat: bool,
    pub knowledge_base: bool,
    pub orders: bool,
    pub analytics: bool,
}

impl FeatureSettings {
    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::Chatbot => self.chatbot,
            Feature::LiveChat => self.live_chat,
            Feature::KnowledgeBase => self.knowledge_base,
            Feature::Orders => self.orders,
            Feature::Analytics => self.analytics,
        }
    }

    pub fn enabled(&self) -> Vec<Feature> {
        Feature::ALL
            .into_iter()
            .filter(|f| self.is_enabled(*f))
            .collect()
    }
}

impl Default for FeatureSettings {
    fn default() -> Self {
        Self {
            chatbot: Feature::Chatbot.enabled_by_default(),
            live_chat: Feature::LiveChat.enabled_by_default(),
            knowledge_base: Feature::KnowledgeBase.enabled_by_default(),
            orders: Feature::Orders.enabled_by_default(),
            analytics: Feature::Analytics.enabled_by_default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `desk_pager=debug`
    #[validate(length(min = 1))]
    pub level: String,
    /// `pretty` or `json`
    #[validate(custom(function = "validate_log_format"))]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

fn validate_log_format(format: &str) -> Result<(), ValidationError> {
    match format.to_lowercase().as_str() {
        "pretty" | "json" => Ok(()),
        _ => Err(ValidationError::new("unknown_log_format")),
    }
}

/// Default config location inside the platform config directory.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("desk-pager")
        .join("config.toml")
}

/// Explicit path, then `DESK_PAGER_CONFIG`, then [`default_config_path`].
pub fn resolve_config_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
        .unwrap_or_else(default_config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.pagination.default_page_size, 10);
        assert_eq!(config.pagination.page_size_options, vec![5, 10, 20, 50]);
        assert_eq!(config.logging.format, "pretty");
        assert!(!config.features.analytics);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [pagination]
            default_page_size = 25

            [features]
            analytics = true
            chatbot = false
            "#,
        )
        .unwrap();
        assert_eq!(config.pagination.default_page_size, 25);
        assert_eq!(config.pagination.sibling_count, 1);
        assert_eq!(
            config.features.enabled(),
            vec![Feature::LiveChat, Feature::KnowledgeBase, Feature::Orders, Feature::Analytics]
        );
    }

    #[test]
    fn rejects_zero_page_size() {
        let err = AppConfig::from_toml("[pagination]\ndefault_page_size = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_unsorted_options() {
        let err = AppConfig::from_toml("[pagination]\npage_size_options = [20, 10]").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let err = AppConfig::from_toml("[logging]\nformat = \"xml\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = AppConfig::from_toml("[pagination").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"\nformat = \"json\"").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn explicit_path_wins() {
        let path = PathBuf::from("/tmp/custom.toml");
        assert_eq!(resolve_config_path(Some(path.clone())), path);
        assert!(default_config_path().ends_with("desk-pager/config.toml"));
    }
}
