//! API endpoint configuration from environment variables.

use std::env;
use std::time::Duration;

use thiserror::Error;

/// Default TheMealDB base URL (free tier key `1`).
pub const DEFAULT_MEALDB_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Default wger REST API base URL.
pub const DEFAULT_WGER_BASE_URL: &str = "https://wger.de/api/v2";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_USER_AGENT: &str = concat!("mealboard/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: String, value: String },
}

/// Endpoint and transport settings shared by the API clients.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub mealdb_base_url: String,
    pub wger_base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            mealdb_base_url: DEFAULT_MEALDB_BASE_URL.to_string(),
            wger_base_url: DEFAULT_WGER_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// All optional:
    /// - `MEALBOARD_MEALDB_BASE_URL`: TheMealDB base (default: free tier v1)
    /// - `MEALBOARD_WGER_BASE_URL`: wger base (default: "https://wger.de/api/v2")
    /// - `MEALBOARD_HTTP_TIMEOUT_SECS`: request timeout (default: 30)
    /// - `MEALBOARD_USER_AGENT`: User-Agent header
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var: &str| env::var(var).ok())
    }

    /// Build from an arbitrary variable source. Unset variables keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let mealdb_base_url = lookup("MEALBOARD_MEALDB_BASE_URL")
            .map(|v| trim_base(&v))
            .unwrap_or(defaults.mealdb_base_url);

        let wger_base_url = lookup("MEALBOARD_WGER_BASE_URL")
            .map(|v| trim_base(&v))
            .unwrap_or(defaults.wger_base_url);

        let timeout = match lookup("MEALBOARD_HTTP_TIMEOUT_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: "MEALBOARD_HTTP_TIMEOUT_SECS".to_string(),
                        value,
                    })
                }
            },
            None => defaults.timeout,
        };

        let user_agent = lookup("MEALBOARD_USER_AGENT").unwrap_or(defaults.user_agent);

        Ok(Self {
            mealdb_base_url,
            wger_base_url,
            timeout,
            user_agent,
        })
    }
}

fn trim_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ApiConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.mealdb_base_url, DEFAULT_MEALDB_BASE_URL);
        assert_eq!(config.wger_base_url, DEFAULT_WGER_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("MEALBOARD_MEALDB_BASE_URL", "http://localhost:8080/api/"),
            ("MEALBOARD_HTTP_TIMEOUT_SECS", "5"),
            ("MEALBOARD_USER_AGENT", "test-agent"),
        ]))
        .unwrap();
        assert_eq!(config.mealdb_base_url, "http://localhost:8080/api");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "test-agent");
    }

    #[test]
    fn test_invalid_timeout() {
        for bad in ["soon", "0", "-1"] {
            let err =
                ApiConfig::from_lookup(lookup_from(&[("MEALBOARD_HTTP_TIMEOUT_SECS", bad)]))
                    .unwrap_err();
            assert!(err.to_string().contains("MEALBOARD_HTTP_TIMEOUT_SECS"));
        }
    }
}
