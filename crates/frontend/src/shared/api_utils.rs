//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use contracts::domain::common::EntityKind;
use contracts::shared::query::{HierarchyQuery, ListQuery};

use crate::shared::config::AppConfig;

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url(&config, &EntityKind::Factories.item_path(1));
/// ```
pub fn api_url(config: &AppConfig, path: &str) -> String {
    format!("{}{}", config.api_base, path)
}

/// `GET /{entity}/?limit=..&include_inactive=..`
pub fn list_url(config: &AppConfig, kind: EntityKind, include_inactive: bool) -> String {
    let query = ListQuery {
        limit: config.list_limit,
        include_inactive,
    };
    let qs = serde_qs::to_string(&query).unwrap_or_default();
    format!("{}?{}", api_url(config, &kind.collection_path()), qs)
}

/// `GET /hierarchy/?entity_type=..&entity_id=..`
pub fn hierarchy_url(config: &AppConfig, entity_type: &str, entity_id: i64) -> String {
    let query = HierarchyQuery {
        entity_type: entity_type.to_string(),
        entity_id,
    };
    let qs = serde_qs::to_string(&query).unwrap_or_default();
    format!("{}?{}", api_url(config, "/hierarchy/"), qs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_url() {
        let config = AppConfig::new("http://localhost:8000");
        assert_eq!(
            list_url(&config, EntityKind::Sections, true),
            "http://localhost:8000/sections/?limit=1000&include_inactive=true"
        );
        assert_eq!(
            list_url(&config, EntityKind::Factories, false),
            "http://localhost:8000/factories/?limit=1000&include_inactive=false"
        );
    }

    #[test]
    fn test_hierarchy_url_relative() {
        let config = AppConfig::new("");
        assert_eq!(
            hierarchy_url(&config, "equipment", 5),
            "/hierarchy/?entity_type=equipment&entity_id=5"
        );
    }
}
