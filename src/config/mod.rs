//! Configuration module for imgseek
//!
//! Manages the search service credentials and client settings.
//! Configuration is stored in the user's config directory as TOML, with
//! environment variables layered on top:
//!
//! - `IMGSEEK_ACCESS_KEY` sets `api.access_key`
//! - `IMGSEEK_API__<FIELD>` sets any other `[api]` field
//! - `IMGSEEK_QUIET` sets `quiet`

mod setup;

pub use setup::first_time_setup;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default search service endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.unsplash.com";

/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment variable holding the access key
pub const ACCESS_KEY_ENV: &str = "IMGSEEK_ACCESS_KEY";

/// Keys accepted by `get_value` / `set_value`
pub const KEYS: &[&str] = &["api.access_key", "api.base_url", "api.timeout_secs", "quiet"];

/// Search service settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Client access key for the search service
    #[serde(default)]
    pub access_key: Option<String>,

    /// Service root, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout; 0 disables it
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            access_key: None,
            base_url: default_base_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ImgseekConfig {
    /// Search service settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl ImgseekConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("imgseek").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::default().save()?;
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from `path` with environment overrides applied
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let access_key = std::env::var(ACCESS_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .add_source(
                Environment::with_prefix("IMGSEEK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("api.access_key", access_key)?
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from `path` ignoring the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn read_file(path: &Path) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Load configuration, running first-time setup if config doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            first_time_setup()?;
            Self::load_from(&config_path)
        }
    }

    /// Whether an access key is available
    #[must_use]
    pub fn has_access_key(&self) -> bool {
        self.api
            .access_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    /// Read a setting by dotted key
    ///
    /// The access key is masked. Returns `None` for unknown keys.
    #[must_use]
    pub fn get_value(&self, key: &str) -> Option<String> {
        match key {
            "api.access_key" => Some(match &self.api.access_key {
                Some(k) if !k.is_empty() => mask_key(k),
                _ => "(not set)".to_string(),
            }),
            "api.base_url" => Some(self.api.base_url.clone()),
            "api.timeout_secs" => Some(self.api.timeout_secs.to_string()),
            "quiet" => Some(self.quiet.to_string()),
            _ => None,
        }
    }

    /// Change a setting by dotted key (does not save)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the key is unknown or the value does not
    /// parse for that key.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key {
            "api.access_key" => {
                self.api.access_key = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            "api.base_url" => {
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    return Err(ConfigError::Message(format!(
                        "Invalid value for api.base_url: '{value}'. Must start with http:// or https://"
                    )));
                }
                self.api.base_url = value.trim_end_matches('/').to_string();
            }
            "api.timeout_secs" => {
                self.api.timeout_secs = value.parse().map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid value for api.timeout_secs: '{value}'. Use a whole number of seconds"
                    ))
                })?;
            }
            "quiet" => {
                self.quiet = value.parse().map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid value for quiet: '{value}'. Use 'true' or 'false'"
                    ))
                })?;
            }
            _ => {
                return Err(ConfigError::Message(format!(
                    "Unknown configuration key: '{key}'. Available keys: {}",
                    KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }
}

/// Show only the last four characters of a secret
fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ImgseekConfig::default();
        assert!(config.api.access_key.is_none());
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout_secs, 10);
        assert!(!config.quiet);
        assert!(!config.has_access_key());
    }

    #[test]
    fn test_save_and_read_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = ImgseekConfig::default();
        config.api.access_key = Some("abc123".to_string());
        config.api.timeout_secs = 3;
        config.quiet = true;
        config.save_to(&path).unwrap();

        let loaded = ImgseekConfig::read_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[api]\naccess_key = \"k\"\n").unwrap();

        let loaded = ImgseekConfig::read_file(&path).unwrap();
        assert_eq!(loaded.api.access_key.as_deref(), Some("k"));
        assert_eq!(loaded.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(loaded.api.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(!loaded.quiet);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[api\nnot toml").unwrap();

        assert!(ImgseekConfig::read_file(&path).is_err());
    }

    #[test]
    fn test_set_and_get_values() {
        let mut config = ImgseekConfig::default();

        config.set_value("api.base_url", "http://localhost:8080/").unwrap();
        assert_eq!(config.get_value("api.base_url").as_deref(), Some("http://localhost:8080"));

        config.set_value("api.timeout_secs", "30").unwrap();
        assert_eq!(config.get_value("api.timeout_secs").as_deref(), Some("30"));

        config.set_value("quiet", "true").unwrap();
        assert!(config.quiet);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = ImgseekConfig::default();
        assert!(config.set_value("quiet", "maybe").is_err());
        assert!(config.set_value("api.timeout_secs", "-1").is_err());
        assert!(config.set_value("api.base_url", "ftp://example.com").is_err());
        assert!(config.set_value("nonsense", "1").is_err());
        assert_eq!(config, ImgseekConfig::default());
    }

    #[test]
    fn test_access_key_is_masked() {
        let mut config = ImgseekConfig::default();
        assert_eq!(config.get_value("api.access_key").as_deref(), Some("(not set)"));

        config.set_value("api.access_key", "supersecret").unwrap();
        assert_eq!(config.get_value("api.access_key").as_deref(), Some("****cret"));
        assert!(config.has_access_key());

        config.set_value("api.access_key", "").unwrap();
        assert!(config.api.access_key.is_none());
    }

    #[test]
    fn test_unknown_key() {
        let config = ImgseekConfig::default();
        assert!(config.get_value("database").is_none());
    }

    #[test]
    fn test_mask_short_key() {
        assert_eq!(mask_key("abc"), "****");
        assert_eq!(mask_key("abcdef"), "****cdef");
    }
}
