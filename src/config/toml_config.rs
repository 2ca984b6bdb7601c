use crate::config::{DEFAULT_DEMO_EMAIL, DEFAULT_MAX_SLOTS};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{AdminError, Result};
use crate::utils::validation::{
    validate_email, validate_non_empty_string, validate_path, validate_range, validate_url,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based configuration for hosted deployments, mirroring the CLI flags:
///
/// ```toml
/// [auth]
/// url = "https://auth.example.com"
/// api_key = "anon-key"
///
/// [deployment]
/// production = true
/// data_path = "/var/lib/resto-admin"
///
/// [featured]
/// max_slots = 4
/// demo_email = "demo@resto.local"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub auth: AuthSection,
    #[serde(default)]
    pub deployment: DeploymentSection,
    #[serde(default)]
    pub featured: FeaturedSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthSection {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub api_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentSection {
    #[serde(default)]
    pub production: bool,
    #[serde(default = "default_data_path")]
    pub data_path: String,
}

impl Default for DeploymentSection {
    fn default() -> Self {
        Self {
            production: false,
            data_path: default_data_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturedSection {
    #[serde(default = "default_max_slots")]
    pub max_slots: usize,
    #[serde(default = "default_demo_email")]
    pub demo_email: String,
}

impl Default for FeaturedSection {
    fn default() -> Self {
        Self {
            max_slots: default_max_slots(),
            demo_email: default_demo_email(),
        }
    }
}

fn default_data_path() -> String {
    "./data".to_string()
}

fn default_max_slots() -> usize {
    DEFAULT_MAX_SLOTS
}

fn default_demo_email() -> String {
    DEFAULT_DEMO_EMAIL.to_string()
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| AdminError::ConfigError {
            message: format!("failed to parse TOML config: {}", e),
        })
    }
}

impl ConfigProvider for TomlConfig {
    fn auth_url(&self) -> &str {
        &self.auth.url
    }

    fn auth_api_key(&self) -> &str {
        &self.auth.api_key
    }

    fn auth_configured(&self) -> bool {
        !self.auth.url.is_empty() && !self.auth.api_key.is_empty()
    }

    fn production(&self) -> bool {
        self.deployment.production
    }

    fn max_slots(&self) -> usize {
        self.featured.max_slots
    }

    fn demo_email(&self) -> &str {
        &self.featured.demo_email
    }

    fn data_path(&self) -> &str {
        &self.deployment.data_path
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if !self.auth.url.is_empty() {
            validate_url("auth.url", &self.auth.url)?;
            // A provider URL without a key is a half-configured deployment,
            // not demo mode.
            validate_non_empty_string("auth.api_key", &self.auth.api_key)?;
        }
        validate_email("featured.demo_email", &self.featured.demo_email)?;
        validate_range("featured.max_slots", self.featured.max_slots, 1, 12)?;
        validate_path("deployment.data_path", &self.deployment.data_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parses() {
        let config = TomlConfig::from_toml_str(
            r#"
            [auth]
            url = "https://auth.example.com"
            api_key = "anon-key"

            [deployment]
            production = true
            data_path = "/var/lib/resto-admin"

            [featured]
            max_slots = 3
            demo_email = "demo@resto.local"
            "#,
        )
        .unwrap();

        assert!(config.auth_configured());
        assert!(config.production());
        assert_eq!(config.max_slots(), 3);
        assert_eq!(config.data_path(), "/var/lib/resto-admin");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_falls_back_to_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert!(!config.auth_configured());
        assert!(!config.production());
        assert_eq!(config.max_slots(), DEFAULT_MAX_SLOTS);
        assert_eq!(config.demo_email(), DEFAULT_DEMO_EMAIL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_toml_is_a_config_error() {
        let err = TomlConfig::from_toml_str("[auth\nurl=").unwrap_err();
        assert!(matches!(err, AdminError::ConfigError { .. }));
    }

    #[test]
    fn test_validate_rejects_auth_url_without_api_key() {
        let config = TomlConfig::from_toml_str(
            r#"
            [auth]
            url = "https://auth.example.com"
            "#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str(
            r#"
            [auth]
            url = "https://auth.example.com"
            api_key = "   "
            "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_catches_bad_slot_count() {
        let config = TomlConfig::from_toml_str(
            r#"
            [featured]
            max_slots = 0
            "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }
}
