use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Main search configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Base URL of the TheMealDB JSON API (without trailing slash)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Maximum entries per suggestion bucket
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
    /// Flag image width in pixels
    #[serde(default = "default_flag_width")]
    pub flag_width: u32,
    /// Live search (search-as-you-type) settings
    #[serde(default)]
    pub live: LiveSearchConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            suggestion_limit: default_suggestion_limit(),
            flag_width: default_flag_width(),
            live: LiveSearchConfig::default(),
        }
    }
}

/// Configuration for keystroke-driven suggestion fetching
#[derive(Debug, Deserialize, Clone)]
pub struct LiveSearchConfig {
    /// Quiet period after the last keystroke before a fetch is started
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Inputs shorter than this (in chars) never reach the provider
    #[serde(default = "default_min_query_length")]
    pub min_query_length: usize,
    /// Maximum entries per suggestion bucket
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
}

impl Default for LiveSearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            min_query_length: default_min_query_length(),
            suggestion_limit: default_suggestion_limit(),
        }
    }
}

impl LiveSearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_suggestion_limit() -> usize {
    crate::suggestions::SUGGESTION_LIMIT
}

fn default_flag_width() -> u32 {
    crate::flags::DEFAULT_FLAG_WIDTH
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_min_query_length() -> usize {
    3
}

impl SearchConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MEALDB__ prefix
    /// 2. mealdb.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MEALDB__LIVE__DEBOUNCE_MS
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Load configuration from file and environment variables
///
/// See [`SearchConfig::load`] for the precedence rules.
pub fn load_config() -> Result<SearchConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("mealdb").required(false))
        // Use double underscore for nested: MEALDB__LIVE__DEBOUNCE_MS
        .add_source(
            Environment::with_prefix("MEALDB")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
