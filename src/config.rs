use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::client::DEFAULT_BASE_URL;

/// Browser configuration
#[derive(Debug, Deserialize, Clone)]
pub struct BrowserConfig {
    /// API root for TheMealDB
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Category listed when none is given on the command line
    #[serde(default = "default_category")]
    pub category: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            category: default_category(),
            timeout: default_timeout(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_category() -> String {
    "Dessert".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl BrowserConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MEALDB__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MEALDB__BASE_URL, MEALDB__CATEGORY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Environment variables with MEALDB prefix
            .add_source(
                Environment::with_prefix("MEALDB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
