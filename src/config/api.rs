use std::env;
use std::time::Duration;

use super::refresh::{DEFAULT_AUTO_REFRESH, DEFAULT_REFRESH_SECS, MAX_REFRESH_SECS, MIN_REFRESH_SECS};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Dashboard configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Backend base URL, e.g. `http://localhost:8080/api`
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub auto_refresh: bool,
    pub refresh_interval_secs: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            auto_refresh: DEFAULT_AUTO_REFRESH,
            refresh_interval_secs: DEFAULT_REFRESH_SECS,
        }
    }
}

fn lookup_str(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: &str) -> String {
    lookup(name)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn lookup_u64(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: u64) -> u64 {
    lookup(name)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

fn lookup_bool(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: bool) -> bool {
    lookup(name)
        .map(|s| matches!(s.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "y" | "on"))
        .unwrap_or(default)
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let timeout_secs = lookup_u64(&lookup, "BASIS_MONITOR_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS).max(1);

        Self {
            api_base_url: lookup_str(&lookup, "BASIS_MONITOR_API_URL", DEFAULT_API_BASE_URL),
            request_timeout: Duration::from_secs(timeout_secs),
            auto_refresh: lookup_bool(&lookup, "BASIS_MONITOR_AUTO_REFRESH", DEFAULT_AUTO_REFRESH),
            refresh_interval_secs: lookup_u64(&lookup, "BASIS_MONITOR_REFRESH_SECS", DEFAULT_REFRESH_SECS)
                .clamp(MIN_REFRESH_SECS, MAX_REFRESH_SECS),
        }
    }
}
