//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Bucket the avatar is uploaded to when none is configured
const DEFAULT_BUCKET: &str = "forms-react";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Storage service address
    pub storage_address: Option<String>,
    /// Bucket the avatar is uploaded to
    pub bucket: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signup", "signup-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Upload bucket, falling back to the default
    pub fn bucket_or_default(&self) -> &str {
        self.bucket.as_deref().unwrap_or(DEFAULT_BUCKET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.storage_address.is_none());
        assert!(config.bucket.is_none());
        assert_eq!(config.bucket_or_default(), "forms-react");
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            storage_address: Some("http://localhost:50051".to_string()),
            bucket: Some("avatars".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.storage_address,
            Some("http://localhost:50051".to_string())
        );
        assert_eq!(parsed.bucket, Some("avatars".to_string()));
        assert_eq!(parsed.bucket_or_default(), "avatars");
    }

    #[test]
    fn test_partial_serialization() {
        let config = TuiConfig {
            bucket: Some("avatars".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.bucket, Some("avatars".to_string()));
        assert!(parsed.storage_address.is_none());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let json = "{}";
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.bucket.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"bucket": "avatars", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.bucket, Some("avatars".to_string()));
    }

    #[test]
    fn test_load_returns_default_when_no_file() {
        let result = TuiConfig::load();
        assert!(result.is_ok());
    }
}
