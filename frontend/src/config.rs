use crate::env_variable_utils::get_env_var;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5003/api";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 15_000;
pub const DEFAULT_APP_NAME: &str = "YouTube Channel Analyzer";

/// Settings read once at startup and handed down to everything that needs them.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub request_timeout_ms: u32,
    pub app_name: String,
    pub debug: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            app_name: DEFAULT_APP_NAME.to_string(),
            debug: false,
        }
    }
}

impl DashboardConfig {
    pub fn from_window() -> Self {
        Self::from_lookup(get_env_var)
    }

    /// Builds the config from an arbitrary key lookup. Missing or unparsable
    /// values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = lookup("API_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_base_url);

        let request_timeout_ms = lookup("REQUEST_TIMEOUT_MS")
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|ms| ms.is_finite() && *ms >= 1.0)
            .map(|ms| ms.min(u32::MAX as f64) as u32)
            .unwrap_or(defaults.request_timeout_ms);

        let app_name = lookup("APP_NAME")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(defaults.app_name);

        let debug = lookup("DEBUG_MODE")
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(defaults.debug);

        Self {
            api_base_url,
            request_timeout_ms,
            app_name,
            debug,
        }
    }
}
