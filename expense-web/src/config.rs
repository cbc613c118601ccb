//! Frontend configuration module
//!
//! Values are baked in at compile time; anything unset falls back to the page
//! the app was served from.

use shared::toast::DEFAULT_TOAST_DURATION_MS;
use shared::{ApiConfig, ApiResult};

const FALLBACK_ORIGIN: &str = "http://localhost:8000";

/// Frontend configuration for the API origin and notification timing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Origin of the expense service
    pub api_base_url: String,
    /// How long a toast stays visible
    pub toast_duration_ms: u32,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("EXPENSE_API_BASE_URL")
                .map_or_else(page_origin, str::to_string),
            toast_duration_ms: Self::toast_duration_ms(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Toast duration without resolving the API origin.
    pub fn toast_duration_ms() -> u32 {
        parse_duration(option_env!("EXPENSE_TOAST_DURATION_MS"))
    }

    /// Validated client configuration for the API origin.
    pub fn api_config(&self) -> ApiResult<ApiConfig> {
        ApiConfig::new(&self.api_base_url)
    }
}

fn parse_duration(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_TOAST_DURATION_MS)
}

fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .filter(|origin| origin.starts_with("http"))
        .unwrap_or_else(|| FALLBACK_ORIGIN.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_falls_back_to_default() {
        assert_eq!(parse_duration(None), DEFAULT_TOAST_DURATION_MS);
        assert_eq!(parse_duration(Some("soon")), DEFAULT_TOAST_DURATION_MS);
        assert_eq!(parse_duration(Some("0")), DEFAULT_TOAST_DURATION_MS);
    }

    #[test]
    fn duration_is_parsed() {
        assert_eq!(parse_duration(Some(" 4500 ")), 4500);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn default_config_resolves_an_http_origin() {
        let config = FrontendConfig::new();
        assert!(config.api_base_url.starts_with("http"));
        assert!(config.api_config().is_ok());
    }
}
