pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_email, validate_non_empty_string, validate_path, validate_range, validate_url,
    Validate,
};
#[cfg(feature = "cli")]
use clap::Args;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_SLOTS: usize = 4;
pub const DEFAULT_DEMO_EMAIL: &str = "demo@resto.local";

/// Deployment configuration from flags/environment. The auth provider
/// counts as configured only when both its URL and API key are present.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Args)]
pub struct CliConfig {
    #[arg(long, env = "RESTO_AUTH_URL", default_value = "")]
    pub auth_url: String,

    #[arg(long, env = "RESTO_AUTH_API_KEY", default_value = "", hide_env_values = true)]
    pub auth_api_key: String,

    #[arg(long, env = "RESTO_PRODUCTION", default_value_t = false)]
    pub production: bool,

    #[arg(long, default_value_t = DEFAULT_MAX_SLOTS)]
    pub max_slots: usize,

    #[arg(long, default_value = DEFAULT_DEMO_EMAIL)]
    pub demo_email: String,

    #[arg(long, env = "RESTO_DATA_PATH", default_value = "./data")]
    pub data_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit JSON logs for log scrapers instead of compact output")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn auth_url(&self) -> &str {
        &self.auth_url
    }

    fn auth_api_key(&self) -> &str {
        &self.auth_api_key
    }

    fn auth_configured(&self) -> bool {
        !self.auth_url.is_empty() && !self.auth_api_key.is_empty()
    }

    fn production(&self) -> bool {
        self.production
    }

    fn max_slots(&self) -> usize {
        self.max_slots
    }

    fn demo_email(&self) -> &str {
        &self.demo_email
    }

    fn data_path(&self) -> &str {
        &self.data_path
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if !self.auth_url.is_empty() {
            validate_url("auth_url", &self.auth_url)?;
            // A provider URL without a key is a half-configured deployment,
            // not demo mode.
            validate_non_empty_string("auth_api_key", &self.auth_api_key)?;
        }
        validate_email("demo_email", &self.demo_email)?;
        validate_range("max_slots", self.max_slots, 1, 12)?;
        validate_path("data_path", &self.data_path)?;
        Ok(())
    }
}
