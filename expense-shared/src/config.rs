//! Client configuration module
//!
//! Holds the origin of the expense service and builds endpoint URLs from it.

use url::Url;

use crate::errors::{ApiError, ApiResult};

/// Default `User-Agent` sent by native builds; browsers set their own.
pub const DEFAULT_USER_AGENT: &str = "expense-tracker-client";

/// Configuration for the API client adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
    user_agent: String,
}

impl ApiConfig {
    /// Parse and normalize the service origin.
    ///
    /// The URL must be absolute; a trailing path is kept so the client can
    /// sit behind a prefix such as `https://host/tracker/`.
    ///
    /// # Errors
    /// Returns [`ApiError::Config`] when `base_url` is not an absolute
    /// `http`/`https` URL.
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let trimmed = base_url.trim();
        let normalized = if trimmed.ends_with('/') {
            trimmed.to_string()
        } else {
            format!("{trimmed}/")
        };
        let base_url = Url::parse(&normalized)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ApiError::config(format!(
                "unsupported scheme `{}`",
                base_url.scheme()
            )));
        }
        Ok(Self {
            base_url,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    /// Override the `User-Agent` used by native builds.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// The normalized origin, always ending in `/`.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Resolve an API path such as `/api/expenses/` against the origin.
    ///
    /// # Errors
    /// Returns [`ApiError::Config`] if the joined URL is invalid.
    pub fn endpoint(&self, path: &str) -> ApiResult<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let with = ApiConfig::new("http://localhost:8000/").unwrap();
        let without = ApiConfig::new("http://localhost:8000").unwrap();
        assert_eq!(with, without);
        assert_eq!(with.base_url().as_str(), "http://localhost:8000/");
    }

    #[test]
    fn endpoint_keeps_path_prefix() {
        let config = ApiConfig::new("https://example.com/tracker").unwrap();
        let url = config.endpoint("/api/expenses/").unwrap();
        assert_eq!(url.as_str(), "https://example.com/tracker/api/expenses/");
    }

    #[test]
    fn relative_or_foreign_urls_are_rejected() {
        assert!(matches!(
            ApiConfig::new("/api"),
            Err(ApiError::Config { .. })
        ));
        assert!(matches!(
            ApiConfig::new("ftp://example.com"),
            Err(ApiError::Config { .. })
        ));
    }

    #[test]
    fn user_agent_can_be_overridden() {
        let config = ApiConfig::new("http://localhost").unwrap();
        assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
        let config = config.with_user_agent("tests");
        assert_eq!(config.user_agent(), "tests");
    }
}
