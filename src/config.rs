//! Client configuration.
//!
//! The server side reads `[package.metadata.leptos]` through
//! `leptos::get_configuration`; the browser bundle has no such file, so the
//! few values it needs are baked in at compile time from the environment.
use leptos::logging::warn;
use leptos::*;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_NOTIFY_MS: u32 = 4000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the marketplace REST backend, without a trailing slash.
    pub api_base_url: String,
    /// How long a notification stays visible before clearing itself.
    pub notify_ms: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("CARMARKET_API_URL"),
            option_env!("CARMARKET_NOTIFY_MS"),
        )
    }

    pub fn from_values(api_base_url: Option<&str>, notify_ms: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let notify_ms = match notify_ms.map(str::trim) {
            None | Some("") => DEFAULT_NOTIFY_MS,
            Some(raw) => match raw.parse::<u32>() {
                Ok(ms) if ms > 0 => ms,
                _ => {
                    warn!("[CONFIG] Ignoring invalid CARMARKET_NOTIFY_MS value: {}", raw);
                    DEFAULT_NOTIFY_MS
                }
            },
        };

        Self {
            api_base_url,
            notify_ms,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

/// Reads the config provided by `App`, falling back to the compiled-in values
/// for components mounted on their own (tests).
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(AppConfig::from_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.notify_ms, DEFAULT_NOTIFY_MS);
    }

    #[test]
    fn trailing_slashes_are_stripped() {
        let config = AppConfig::from_values(Some("https://api.example.com//"), None);
        assert_eq!(config.api_base_url, "https://api.example.com");
    }

    #[test]
    fn bad_duration_falls_back() {
        assert_eq!(AppConfig::from_values(None, Some("soon")).notify_ms, DEFAULT_NOTIFY_MS);
        assert_eq!(AppConfig::from_values(None, Some("0")).notify_ms, DEFAULT_NOTIFY_MS);
        assert_eq!(AppConfig::from_values(None, Some(" 2500 ")).notify_ms, 2500);
    }
}
