use contracts::domain::common::{EntityKind, EntityRecord};
use leptos::prelude::*;

use crate::shared::components::entity_panel::EntityPanel;
use crate::shared::state::entity_cache::EntityCacheStore;

/// Фабрики: кроме id и наименования в строке ничего не выводится
pub fn factory_details(_record: &EntityRecord, _store: &EntityCacheStore) -> Vec<String> {
    Vec::new()
}

#[component]
pub fn FactoryPanel() -> impl IntoView {
    view! {
        <EntityPanel kind=EntityKind::Factories details=factory_details icon_name="factory" />
    }
}
