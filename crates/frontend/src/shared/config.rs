//! Runtime configuration of the console
//!
//! The console is normally served by the API server itself, so requests go
//! to the page origin. A different server can be chosen by setting
//! `localStorage["api-base-url"]`.

use contracts::shared::query::LIST_LIMIT;
use web_sys::window;

const API_BASE_STORAGE_KEY: &str = "api-base-url";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL without trailing slash, e.g. `http://127.0.0.1:8000`
    pub api_base: String,
    pub list_limit: u32,
}

impl AppConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: normalize_base(&api_base.into()),
            list_limit: LIST_LIMIT,
        }
    }

    /// Load configuration from localStorage, falling back to the page origin
    pub fn load() -> Self {
        let base = load_base_from_storage().unwrap_or_else(page_origin);
        log::info!("API base: '{}'", base);
        Self::new(base)
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

fn load_base_from_storage() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_STORAGE_KEY).ok().flatten())
        .filter(|s| !s.trim().is_empty())
}

fn page_origin() -> String {
    window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strips_trailing_slash() {
        let config = AppConfig::new(" http://localhost:8000/ ");
        assert_eq!(config.api_base, "http://localhost:8000");
        assert_eq!(config.list_limit, 1000);
    }

    #[test]
    fn test_empty_base_means_relative_urls() {
        assert_eq!(AppConfig::new("").api_base, "");
    }
}
