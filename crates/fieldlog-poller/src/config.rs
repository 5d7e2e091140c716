//! Poller configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Poller configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote feed source settings.
    pub source: SourceConfig,
    /// Storage settings.
    pub storage: StorageConfig,
    /// Polling cadence settings.
    pub poll: PollConfig,
}

impl Config {
    /// Load configuration from the default path.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = default_config_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Read {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.as_ref().to_path_buf(),
            source: e,
        })
    }

    /// Save configuration to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        std::fs::write(path.as_ref(), content).map_err(|e| ConfigError::Write {
            path: path.as_ref().to_path_buf(),
            source: e,
        })
    }

    /// Validate the configuration and return any errors.
    ///
    /// This checks:
    /// - Endpoint URL is present and uses http or https
    /// - Result window size is at least 1
    /// - Data directory is not empty
    /// - Poll interval is within reasonable bounds (1s - 1 hour)
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        errors.extend(self.source.validate());
        errors.extend(self.storage.validate());
        errors.extend(self.poll.validate());

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Remote feed source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Channel feed endpoint URL.
    pub endpoint: String,
    /// How many recent records to request per fetch.
    pub results: u32,
}

/// Default channel feed endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.thingspeak.com/channels/1598577/fields/1.json";

/// Default result window size.
pub const DEFAULT_RESULTS: u32 = 2;

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            results: DEFAULT_RESULTS,
        }
    }
}

impl SourceConfig {
    /// Validate source configuration.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.endpoint.is_empty() {
            errors.push(ValidationError {
                field: "source.endpoint".to_string(),
                message: "endpoint URL cannot be empty".to_string(),
            });
        } else if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            errors.push(ValidationError {
                field: "source.endpoint".to_string(),
                message: format!(
                    "invalid endpoint '{}': must start with http:// or https://",
                    self.endpoint
                ),
            });
        }

        if self.results == 0 {
            errors.push(ValidationError {
                field: "source.results".to_string(),
                message: "result window size must be at least 1".to_string(),
            });
        }

        errors
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the per-device log files.
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
        }
    }
}

impl StorageConfig {
    /// Validate storage configuration.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.data_dir.as_os_str().is_empty() {
            errors.push(ValidationError {
                field: "storage.data_dir".to_string(),
                message: "data directory cannot be empty".to_string(),
            });
        }

        errors
    }
}

/// Polling cadence configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Seconds to sleep between poll cycles.
    pub interval_secs: u64,
}

/// Default poll interval in seconds.
pub const DEFAULT_POLL_INTERVAL: u64 = 13;

/// Minimum poll interval in seconds.
pub const MIN_POLL_INTERVAL: u64 = 1;
/// Maximum poll interval in seconds (1 hour).
pub const MAX_POLL_INTERVAL: u64 = 3600;

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl PollConfig {
    /// Validate polling configuration.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.interval_secs < MIN_POLL_INTERVAL {
            errors.push(ValidationError {
                field: "poll.interval_secs".to_string(),
                message: format!(
                    "poll interval {} is too short (minimum {} second)",
                    self.interval_secs, MIN_POLL_INTERVAL
                ),
            });
        } else if self.interval_secs > MAX_POLL_INTERVAL {
            errors.push(ValidationError {
                field: "poll.interval_secs".to_string(),
                message: format!(
                    "poll interval {} is too long (maximum {} seconds / 1 hour)",
                    self.interval_secs, MAX_POLL_INTERVAL
                ),
            });
        }

        errors
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),
    #[error("Failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    Validation(Vec<ValidationError>),
}

/// A single validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The field path (e.g. `source.endpoint`).
    pub field: String,
    /// Description of the validation failure.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {}", e))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Default configuration file path.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fieldlog")
        .join("poller.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.source.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.source.results, 2);
        assert_eq!(config.storage.data_dir, PathBuf::from("."));
        assert_eq!(config.poll.interval_secs, 13);
    }

    #[test]
    fn test_default_config_validates() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_full_toml() {
        let toml = r#"
            [source]
            endpoint = "https://example.com/channels/42/fields/1.json"
            results = 5

            [storage]
            data_dir = "/var/lib/fieldlog"

            [poll]
            interval_secs = 30
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.source.endpoint,
            "https://example.com/channels/42/fields/1.json"
        );
        assert_eq!(config.source.results, 5);
        assert_eq!(config.storage.data_dir, PathBuf::from("/var/lib/fieldlog"));
        assert_eq!(config.poll.interval_secs, 30);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml = r#"
            [poll]
            interval_secs = 60
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.source.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.poll.interval_secs, 60);
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("poller.toml");

        let config = Config {
            source: SourceConfig {
                endpoint: "https://example.com/feed.json".to_string(),
                results: 3,
            },
            storage: StorageConfig {
                data_dir: PathBuf::from("/tmp/fieldlog"),
            },
            poll: PollConfig { interval_secs: 21 },
        };

        config.save(&config_path).unwrap();
        let loaded = Config::load(&config_path).unwrap();

        assert_eq!(loaded.source.endpoint, "https://example.com/feed.json");
        assert_eq!(loaded.source.results, 3);
        assert_eq!(loaded.storage.data_dir, PathBuf::from("/tmp/fieldlog"));
        assert_eq!(loaded.poll.interval_secs, 21);
    }

    #[test]
    fn test_config_load_nonexistent() {
        let result = Config::load("/nonexistent/path/poller.toml");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_config_load_invalid_toml() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("invalid.toml");
        std::fs::write(&config_path, "this is not valid { toml").unwrap();

        let result = Config::load(&config_path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_endpoint_validation() {
        let mut config = Config::default();

        config.source.endpoint = String::new();
        let errors = config.source.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("cannot be empty"));

        config.source.endpoint = "ftp://example.com/feed".to_string();
        let errors = config.source.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("http://"));
    }

    #[test]
    fn test_results_validation() {
        let source = SourceConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            results: 0,
        };
        let errors = source.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("at least 1"));
    }

    #[test]
    fn test_interval_validation() {
        let too_short = PollConfig { interval_secs: 0 };
        let errors = too_short.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("too short"));

        let too_long = PollConfig {
            interval_secs: 7200,
        };
        let errors = too_long.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("too long"));
    }

    #[test]
    fn test_validation_error_display() {
        let error = ValidationError {
            field: "source.endpoint".to_string(),
            message: "cannot be empty".to_string(),
        };
        assert_eq!(format!("{}", error), "source.endpoint: cannot be empty");
    }

    #[test]
    fn test_validation_errors_are_collected() {
        let config = Config {
            source: SourceConfig {
                endpoint: String::new(),
                results: 0,
            },
            storage: StorageConfig {
                data_dir: PathBuf::new(),
            },
            poll: PollConfig { interval_secs: 0 },
        };

        let result = config.validate();
        let Err(ConfigError::Validation(errors)) = result else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_default_config_path() {
        let path = default_config_path();
        assert!(path.ends_with("fieldlog/poller.toml"));
    }
}
