//! Configuration file handling.
//!
//! An optional JSON file supplies a default key for the shell and the
//! one-shot commands, and the HTTP timeouts used for URL sources.
//!
//! ```json
//! {
//!   "rails": 3,
//!   "start": 1,
//!   "http_connect_timeout_secs": 15,
//!   "http_timeout_secs": 30
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::fence::FenceKey;
use crate::source::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, SourceLoader};

fn default_connect_timeout() -> u64 {
    DEFAULT_CONNECT_TIMEOUT.as_secs()
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT.as_secs()
}

/// Settings that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FenceConfig {
    /// Default rail count
    #[serde(default)]
    pub rails: Option<usize>,

    /// Default start position, 1-based like the menu
    #[serde(default)]
    pub start: Option<usize>,

    #[serde(default = "default_connect_timeout")]
    pub http_connect_timeout_secs: u64,

    #[serde(default = "default_request_timeout")]
    pub http_timeout_secs: u64,
}

impl Default for FenceConfig {
    fn default() -> Self {
        Self {
            rails: None,
            start: None,
            http_connect_timeout_secs: default_connect_timeout(),
            http_timeout_secs: default_request_timeout(),
        }
    }
}

impl FenceConfig {
    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.start.is_some() && self.rails.is_none() {
            anyhow::bail!("A start position needs a rail count");
        }
        self.fence_key()?;

        if self.http_connect_timeout_secs == 0 {
            anyhow::bail!("http_connect_timeout_secs must be greater than zero");
        }
        if self.http_timeout_secs == 0 {
            anyhow::bail!("http_timeout_secs must be greater than zero");
        }
        Ok(())
    }

    /// Default key, if a rail count is configured.
    ///
    /// A missing start position means the top rail.
    pub fn fence_key(&self) -> Result<Option<FenceKey>> {
        let Some(rails) = self.rails else {
            return Ok(None);
        };
        let key = FenceKey::from_one_based(rails, self.start.unwrap_or(1))
            .context("Invalid key in configuration")?;
        Ok(Some(key))
    }

    /// Source loader using the configured timeouts
    pub fn source_loader(&self) -> SourceLoader {
        SourceLoader::new(
            Duration::from_secs(self.http_connect_timeout_secs),
            Duration::from_secs(self.http_timeout_secs),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_is_valid() {
        let config = FenceConfig::default();
        config.validate().unwrap();
        assert_eq!(config.fence_key().unwrap(), None);
        assert_eq!(config.http_timeout_secs, 30);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("railfence.json");

        let config = FenceConfig {
            rails: Some(4),
            start: Some(3),
            ..FenceConfig::default()
        };
        config.save_to_file(&path).unwrap();

        let loaded = FenceConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.fence_key().unwrap(),
            Some(FenceKey::new(4, 2).unwrap())
        );
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: FenceConfig = serde_json::from_str(r#"{ "rails": 5 }"#).unwrap();
        config.validate().unwrap();
        assert_eq!(config.http_connect_timeout_secs, 15);
        assert_eq!(
            config.fence_key().unwrap(),
            Some(FenceKey::new(5, 0).unwrap())
        );
    }

    #[test]
    fn test_validation_failures() {
        let start_only = FenceConfig {
            start: Some(2),
            ..FenceConfig::default()
        };
        assert!(start_only.validate().is_err());

        let bad_rails = FenceConfig {
            rails: Some(11),
            ..FenceConfig::default()
        };
        assert!(bad_rails.validate().is_err());

        let bad_start = FenceConfig {
            rails: Some(3),
            start: Some(4),
            ..FenceConfig::default()
        };
        assert!(bad_start.validate().is_err());

        let zero_timeout = FenceConfig {
            http_timeout_secs: 0,
            ..FenceConfig::default()
        };
        assert!(zero_timeout.validate().is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let parsed: std::result::Result<FenceConfig, _> = serde_json::from_str(r#"{ "rail": 3 }"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = FenceConfig::load_from_file(dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read configuration"));
    }
}
