use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use webservices_global::PaginationConfig;

/// Application configuration: logging sections plus the pagination limits
/// handed to query executors.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Base directory for relative log file paths. Empty means the working directory.
    #[serde(default)]
    pub home_dir: String,
    /// Logging configuration (optional, uses defaults if None).
    pub logging: Option<LoggingConfig>,
    #[serde(default)]
    pub pagination: PaginationConfig,
}

/// Logging configuration - maps subsystem names to their logging settings.
/// Key "default" is the catch-all for logs that don't match explicit subsystems.
pub type LoggingConfig = HashMap<String, Section>;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Section {
    pub console_level: String, // "info", "debug", "error", "off"
    pub file: String,          // "logs/api.log"
    #[serde(default)]
    pub file_level: String,
    #[serde(default)]
    pub max_size_mb: Option<u64>, // Max size of the file in MB
    #[serde(default)]
    pub max_backups: Option<usize>, // How many rotated files to keep
}

/// Create a default logging configuration.
pub fn default_logging_config() -> LoggingConfig {
    let mut logging = HashMap::new();
    logging.insert(
        "default".to_string(),
        Section {
            console_level: "info".to_string(),
            file: "logs/webservices.log".to_string(),
            file_level: "debug".to_string(),
            max_size_mb: Some(100),
            max_backups: Some(3),
        },
    );
    logging
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            home_dir: String::new(),
            logging: Some(default_logging_config()),
            pagination: PaginationConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration with layered loading: defaults → YAML file → environment variables.
    pub fn load_layered<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        use figment::{
            providers::{Env, Format, Serialized, Yaml},
            Figment,
        };

        // Optional sections stay None unless YAML/ENV provide them.
        let base = AppConfig {
            logging: None,
            ..AppConfig::default()
        };

        let figment = Figment::new()
            .merge(Serialized::defaults(base))
            .merge(Yaml::file(config_path.as_ref()))
            // Example: APP__PAGINATION__MAX_LIMIT=200 maps to pagination.max_limit
            .merge(Env::prefixed("APP__").split("__"));

        let config: AppConfig = figment
            .extract()
            .with_context(|| "Failed to extract config from figment".to_string())?;

        config
            .pagination
            .validate()
            .context("Invalid pagination section")?;

        Ok(config)
    }

    /// Load configuration from file or fall back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_layered(path),
            None => Ok(Self::default()),
        }
    }

    /// Serialize configuration to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize config to YAML")
    }

    /// Directory relative log paths are resolved against.
    pub fn base_dir(&self) -> PathBuf {
        if self.home_dir.trim().is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(&self.home_dir)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_structure() {
        let config = AppConfig::default();

        assert_eq!(config.home_dir, "");
        assert_eq!(config.base_dir(), PathBuf::from("."));

        let logging = config.logging.as_ref().unwrap();
        let default_section = &logging["default"];
        assert_eq!(default_section.console_level, "info");
        assert_eq!(default_section.file, "logs/webservices.log");

        assert_eq!(config.pagination, PaginationConfig::default());
    }

    #[test]
    fn test_load_layered_reads_all_sections() {
        let tmp = tempdir().unwrap();
        let cfg_path = tmp.path().join("cfg.yaml");

        let yaml = r#"
home_dir: "/srv/webservices"

logging:
  default:
    console_level: debug
    file: "logs/default.log"
  webservices_global:
    console_level: trace
    file: ""

pagination:
  default_limit: 20
  max_limit: 200
  default_sort_field: createdAt
"#;
        fs::write(&cfg_path, yaml).unwrap();

        let config = AppConfig::load_layered(&cfg_path).unwrap();

        assert_eq!(config.base_dir(), PathBuf::from("/srv/webservices"));
        let logging = config.logging.as_ref().unwrap();
        assert_eq!(logging["default"].console_level, "debug");
        assert_eq!(logging["webservices_global"].console_level, "trace");
        assert_eq!(config.pagination.default_limit, 20);
        assert_eq!(config.pagination.max_limit, 200);
        assert_eq!(config.pagination.default_sort_field, "createdAt");
    }

    #[test]
    fn test_minimal_yaml_config() {
        let tmp = tempdir().unwrap();
        let cfg_path = tmp.path().join("cfg.yaml");
        fs::write(&cfg_path, "pagination:\n  max_limit: 50\n").unwrap();

        let config = AppConfig::load_layered(&cfg_path).unwrap();

        // Optional sections default to None, partial sections keep their defaults
        assert!(config.logging.is_none());
        assert_eq!(config.pagination.max_limit, 50);
        assert_eq!(config.pagination.default_limit, 25);
    }

    #[test]
    fn test_invalid_pagination_section_is_rejected() {
        let tmp = tempdir().unwrap();
        let cfg_path = tmp.path().join("cfg.yaml");
        fs::write(
            &cfg_path,
            "pagination:\n  default_limit: 500\n  max_limit: 100\n",
        )
        .unwrap();

        let err = AppConfig::load_layered(&cfg_path).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid pagination section"));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let tmp = tempdir().unwrap();
        let cfg_path = tmp.path().join("cfg.yaml");
        fs::write(&cfg_path, "pagination:\n  page_size: 5\n").unwrap();

        assert!(AppConfig::load_layered(&cfg_path).is_err());
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = AppConfig::load_or_default(None::<&str>).unwrap();
        assert!(config.logging.is_some());
        assert_eq!(config.pagination.default_limit, 25);
    }

    #[test]
    fn test_to_yaml_roundtrip_basic() {
        let config = AppConfig::default();
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("logging:"));
        assert!(yaml.contains("pagination:"));

        let roundtrip: AppConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(roundtrip.pagination, config.pagination);
    }
}
