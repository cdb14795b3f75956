use std::env;
use std::time::Duration;

use tracing::{info, warn};

use crate::core::StorefrontError;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the storefront backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without trailing slash, e.g. `https://api.example.in/v1`.
    pub base_url: String,
    pub timeout: Duration,
    /// Bearer token of the logged-in customer.
    pub auth_token: Option<String>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, StorefrontError> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(StorefrontError::Config(format!(
                "base URL must start with http:// or https://, got '{base_url}'"
            )));
        }
        Ok(Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            auth_token: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Read `STOREFRONT_API_URL` (required), `STOREFRONT_API_TIMEOUT_SECS`
    /// and `STOREFRONT_API_TOKEN` from the environment.
    pub fn from_env() -> Result<Self, StorefrontError> {
        let base_url = env::var("STOREFRONT_API_URL")
            .map_err(|_| StorefrontError::Config("STOREFRONT_API_URL is not set".into()))?;
        let mut config = Self::new(base_url)?;

        match env::var("STOREFRONT_API_TIMEOUT_SECS") {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!(
                    value = %raw,
                    "invalid STOREFRONT_API_TIMEOUT_SECS, using default {DEFAULT_TIMEOUT_SECS}s"
                ),
            },
            Err(_) => info!("STOREFRONT_API_TIMEOUT_SECS not set, using default {DEFAULT_TIMEOUT_SECS}s"),
        }

        match env::var("STOREFRONT_API_TOKEN") {
            Ok(token) if !token.trim().is_empty() => config.auth_token = Some(token.trim().into()),
            _ => info!("STOREFRONT_API_TOKEN not set, requests are unauthenticated"),
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_trimmed() {
        let c = ApiConfig::new("https://api.example.in/v1/").unwrap();
        assert_eq!(c.base_url, "https://api.example.in/v1");
    }

    #[test]
    fn scheme_required() {
        let err = ApiConfig::new("api.example.in").unwrap_err();
        assert!(matches!(err, StorefrontError::Config(_)));
    }

    #[test]
    fn builder_options() {
        let c = ApiConfig::new("http://localhost:8080")
            .unwrap()
            .with_timeout(Duration::from_secs(5))
            .with_auth_token("t0k3n");
        assert_eq!(c.timeout, Duration::from_secs(5));
        assert_eq!(c.auth_token.as_deref(), Some("t0k3n"));
    }
}
