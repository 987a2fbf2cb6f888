//! Client configuration.
//!
//! A `Config` holds the API key and base URL. It is resolved once, either
//! explicitly or from the `EXO_KEY` / `EXO_BASE_URL` environment variables,
//! and passed to `ExOnlineClient::new`.

use std::fmt;

use crate::api::ApiError;

/// Default Ex-Online API root
pub const DEFAULT_BASE_URL: &str = "https://cloud.ex-online.com/TagBrowser/api/v2/Puppy";

/// Environment variable holding the API key (required)
pub const KEY_ENV: &str = "EXO_KEY";

/// Environment variable overriding the base URL (optional)
pub const BASE_URL_ENV: &str = "EXO_BASE_URL";

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from any variable source. `from_env` uses the process
    /// environment; tests pass a closure over a fixed map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(KEY_ENV)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ApiError::Config(format!("{KEY_ENV} environment variable is not set")))?;

        let config = Self::new(api_key);
        Ok(match lookup(BASE_URL_ENV).filter(|url| !url.is_empty()) {
            Some(url) => config.with_base_url(url),
            None => config,
        })
    }
}

// The key never appears in logs or panic messages.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
