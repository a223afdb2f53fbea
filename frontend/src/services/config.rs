use gloo::storage::{LocalStorage, Storage};
use log::LevelFilter;

/// Backend used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:5678";

const API_URL_KEY: &str = "billed_api_url";
const LOG_LEVEL_KEY: &str = "billed_log_level";

/// Runtime settings of the page, overridable from local storage
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Read overrides from local storage
    pub fn load() -> Self {
        Self::from_values(read_raw(API_URL_KEY), read_raw(LOG_LEVEL_KEY))
    }

    pub fn from_values(api_url: Option<String>, log_level: Option<String>) -> Self {
        let defaults = Self::default();

        let api_base_url = api_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_base_url);

        let log_level = log_level
            .and_then(|level| level.trim().parse::<LevelFilter>().ok())
            .unwrap_or(defaults.log_level);

        Self {
            api_base_url,
            log_level,
        }
    }
}

fn read_raw(key: &str) -> Option<String> {
    LocalStorage::raw().get_item(key).ok().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:5678");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(
            Some(" https://api.billed.test/ ".to_string()),
            Some("debug".to_string()),
        );
        assert_eq!(config.api_base_url, "https://api.billed.test");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_values(Some("  ".to_string()), Some("loud".to_string()));
        assert_eq!(config, AppConfig::default());
    }
}
