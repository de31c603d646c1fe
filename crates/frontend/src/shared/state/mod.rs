pub mod entity_cache;
pub mod panel_registry;

use leptos::prelude::*;

use crate::shared::api_utils::api_url;
use crate::shared::config::AppConfig;
use entity_cache::EntityCache;
use panel_registry::PanelRegistry;

/// Shared state of the admin console, provided once at the app root
#[derive(Clone, Copy)]
pub struct AdminContext {
    pub config: StoredValue<AppConfig>,
    pub cache: EntityCache,
    pub panels: PanelRegistry,
}

impl AdminContext {
    pub fn new(config: AppConfig, panels: PanelRegistry) -> Self {
        Self {
            config: StoredValue::new(config),
            cache: EntityCache::new(),
            panels,
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn url(&self, path: &str) -> String {
        self.config.with_value(|c| api_url(c, path))
    }
}

pub fn use_admin_context() -> AdminContext {
    use_context::<AdminContext>().expect("AdminContext not found in context")
}
