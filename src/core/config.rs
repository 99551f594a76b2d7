//! Environment-driven client configuration

use anyhow::Context;
use std::time::Duration;
use tracing::info;

use crate::core::client::{DeeplClient, V2, V2_FREE};
use crate::core::options::ClientOption;

/// Settings for building a [`DeeplClient`] outside of code
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// DeepL authentication key; keys ending in `:fx` are free-tier keys
    pub auth_key: String,
    /// Explicit base URL; see [`ClientConfig::resolved_base_url`]
    pub base_url: Option<String>,
    /// Timeout applied to the default transport
    pub timeout_ms: Option<u64>,
}

impl ClientConfig {
    /// Create a configuration for `auth_key` with everything else defaulted
    pub fn new(auth_key: impl Into<String>) -> Self {
        Self {
            auth_key: auth_key.into(),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_env_with_key(None)
    }

    /// Like [`ClientConfig::from_env`], but `auth_key` takes precedence over
    /// `DEEPL_AUTH_KEY`
    pub fn from_env_with_key(auth_key: Option<String>) -> anyhow::Result<Self> {
        let auth_key = match auth_key {
            Some(key) => key,
            None => std::env::var("DEEPL_AUTH_KEY")
                .context("DEEPL_AUTH_KEY environment variable is required")?,
        };

        let base_url = std::env::var("DEEPL_API_ENDPOINT")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let timeout_ms = match std::env::var("DEEPL_TIMEOUT_MS") {
            Ok(value) => Some(
                value
                    .parse::<u64>()
                    .with_context(|| format!("DEEPL_TIMEOUT_MS is not a number: {:?}", value))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            auth_key,
            base_url,
            timeout_ms,
        })
    }

    /// Whether the key belongs to a free-tier account
    pub fn is_free_key(&self) -> bool {
        self.auth_key.ends_with(":fx")
    }

    /// Explicit base URL, else the free endpoint for `:fx` keys, else [`V2`]
    pub fn resolved_base_url(&self) -> &str {
        match &self.base_url {
            Some(url) => url.as_str(),
            None if self.is_free_key() => V2_FREE,
            None => V2,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.auth_key.trim().is_empty() {
            anyhow::bail!("DeepL auth key is required");
        }

        if self.timeout_ms == Some(0) {
            anyhow::bail!("timeout_ms must be greater than 0");
        }

        Ok(())
    }

    /// Build the transport and the client
    pub fn build_client(&self) -> anyhow::Result<DeeplClient> {
        self.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout_ms) = self.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let transport = builder.build().context("Failed to build HTTP client")?;

        let base_url = self.resolved_base_url();
        info!("Using DeepL endpoint {}", base_url);

        Ok(DeeplClient::new(
            self.auth_key.clone(),
            [
                ClientOption::base_url(base_url),
                ClientOption::transport(transport),
            ],
        ))
    }
}
