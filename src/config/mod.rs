//! Configuration for the WordEmbeddings client.
//!
//! Holds the customer credentials, the service base URL and the few
//! transport knobs the client exposes.

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

use crate::errors::{EmbeddingsError, EmbeddingsResult};

/// Default base URL for the WordEmbeddings API.
pub const DEFAULT_BASE_URL: &str = "https://api.example.com";

/// Environment variable holding the customer identifier.
pub const ENV_CUSTOMER_ID: &str = "WORD_EMBEDDINGS_CUSTOMER_ID";

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "WORD_EMBEDDINGS_API_KEY";

/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "WORD_EMBEDDINGS_BASE_URL";

/// Environment variable holding a request timeout in seconds.
pub const ENV_TIMEOUT: &str = "WORD_EMBEDDINGS_TIMEOUT";

/// Configuration for the WordEmbeddings client.
#[derive(Clone)]
pub struct EmbeddingsConfig {
    /// Customer identifier issued at onboarding.
    pub customer_id: String,
    /// API key for authentication (stored securely).
    pub(crate) api_key: SecretString,
    /// Base URL for API requests, without a trailing slash.
    pub base_url: String,
    /// Request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
    /// Extra text appended to the User-Agent header.
    pub user_agent_suffix: Option<String>,
}

impl EmbeddingsConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> EmbeddingsConfigBuilder {
        EmbeddingsConfigBuilder::new()
    }

    /// Creates a configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `WORD_EMBEDDINGS_CUSTOMER_ID` (required): customer identifier
    /// - `WORD_EMBEDDINGS_API_KEY` (required): API key
    /// - `WORD_EMBEDDINGS_BASE_URL` (optional): custom base URL
    /// - `WORD_EMBEDDINGS_TIMEOUT` (optional): request timeout in seconds
    pub fn from_env() -> EmbeddingsResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    pub(crate) fn from_lookup<F>(lookup: F) -> EmbeddingsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let customer_id = lookup(ENV_CUSTOMER_ID).ok_or_else(|| EmbeddingsError::Configuration {
            message: format!("{} environment variable not set", ENV_CUSTOMER_ID),
        })?;
        let api_key = lookup(ENV_API_KEY).ok_or_else(|| EmbeddingsError::Configuration {
            message: format!("{} environment variable not set", ENV_API_KEY),
        })?;

        let mut builder = EmbeddingsConfigBuilder::new()
            .customer_id(customer_id)
            .api_key(api_key);

        if let Some(base_url) = lookup(ENV_BASE_URL) {
            builder = builder.base_url(base_url);
        }

        if let Some(timeout_str) = lookup(ENV_TIMEOUT) {
            let secs = timeout_str
                .trim()
                .parse::<u64>()
                .map_err(|_| EmbeddingsError::Configuration {
                    message: format!("{} must be a whole number of seconds", ENV_TIMEOUT),
                })?;
            builder = builder.timeout_secs(secs);
        }

        builder.build()
    }

    /// Returns the API key hint (last 4 characters) for debugging.
    pub fn api_key_hint(&self) -> String {
        let key = self.api_key.expose_secret();
        let count = key.chars().count();
        if count > 4 {
            format!("...{}", key.chars().skip(count - 4).collect::<String>())
        } else {
            "****".to_string()
        }
    }
}

impl std::fmt::Debug for EmbeddingsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingsConfig")
            .field("customer_id", &self.customer_id)
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent_suffix", &self.user_agent_suffix)
            .finish()
    }
}

/// Builder for `EmbeddingsConfig`.
#[derive(Default)]
pub struct EmbeddingsConfigBuilder {
    customer_id: Option<String>,
    api_key: Option<SecretString>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent_suffix: Option<String>,
}

impl EmbeddingsConfigBuilder {
    /// Creates a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the customer identifier.
    pub fn customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    /// Sets the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::new(api_key.into()));
        self
    }

    /// Sets the API key from an already wrapped secret.
    pub fn api_key_secret(mut self, api_key: SecretString) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Sets the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Some(Duration::from_secs(secs));
        self
    }

    /// Sets a suffix for the User-Agent header.
    pub fn user_agent_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.user_agent_suffix = Some(suffix.into());
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> EmbeddingsResult<EmbeddingsConfig> {
        let customer_id = self
            .customer_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| EmbeddingsError::Configuration {
                message: "Customer id is required".to_string(),
            })?;

        let api_key = self
            .api_key
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or_else(|| EmbeddingsError::Configuration {
                message: "API key is required".to_string(),
            })?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let parsed = Url::parse(&base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(EmbeddingsError::Configuration {
                message: format!("Unsupported base URL scheme: {}", parsed.scheme()),
            });
        }
        if parsed.cannot_be_a_base() {
            return Err(EmbeddingsError::Configuration {
                message: format!("Base URL cannot carry endpoint paths: {}", base_url),
            });
        }

        if parsed.scheme() == "http" {
            tracing::debug!(base_url = %base_url, "Using plain HTTP base URL");
        }

        Ok(EmbeddingsConfig {
            customer_id,
            api_key,
            base_url,
            timeout: self.timeout,
            user_agent_suffix: self.user_agent_suffix,
        })
    }
}
