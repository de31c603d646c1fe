use contracts::domain::a002_section::aggregate::Section;
use contracts::domain::common::relation_ref::relation_names;
use contracts::domain::common::{EntityKind, EntityRecord};
use leptos::prelude::*;

use crate::shared::components::entity_panel::EntityPanel;
use crate::shared::state::entity_cache::EntityCacheStore;

/// Фабрика участка: наименование берётся из кэша фабрик, если он загружен
fn factory_line(section: &Section, store: &EntityCacheStore) -> String {
    match store.find(EntityKind::Factories, section.factory_id) {
        Some(factory) => format!("Фабрика: {} (ID {})", factory.name(), section.factory_id),
        None => format!("Фабрика: ID {}", section.factory_id),
    }
}

fn equipment_line(section: &Section) -> String {
    if section.equipment.is_empty() {
        "Оборудование: нет".to_string()
    } else {
        format!("Оборудование: {}", relation_names(&section.equipment))
    }
}

pub fn section_details(record: &EntityRecord, store: &EntityCacheStore) -> Vec<String> {
    let EntityRecord::Section(section) = record else {
        return Vec::new();
    };
    vec![factory_line(section, store), equipment_line(section)]
}

#[component]
pub fn SectionPanel() -> impl IntoView {
    view! {
        <EntityPanel kind=EntityKind::Sections details=section_details icon_name="section" />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_factory::aggregate::Factory;
    use contracts::domain::common::RelationRef;

    fn section(equipment: Vec<RelationRef>) -> EntityRecord {
        EntityRecord::Section(Section {
            id: 2,
            name: "S".into(),
            is_active: true,
            factory_id: 1,
            equipment,
        })
    }

    #[test]
    fn test_factory_name_from_cache() {
        let mut store = EntityCacheStore::default();
        let t = store.issue_ticket();
        store.store(
            EntityKind::Factories,
            t,
            vec![EntityRecord::Factory(Factory {
                id: 1,
                name: "Северная".into(),
                is_active: true,
            })],
            false,
        );

        let lines = section_details(&section(vec![]), &store);
        assert_eq!(lines, vec!["Фабрика: Северная (ID 1)", "Оборудование: нет"]);
    }

    #[test]
    fn test_factory_id_without_cache() {
        let store = EntityCacheStore::default();
        let refs = vec![
            RelationRef { id: Some(5), name: "Пресс".into() },
            RelationRef { id: Some(6), name: "Станок".into() },
        ];
        let lines = section_details(&section(refs), &store);
        assert_eq!(lines, vec!["Фабрика: ID 1", "Оборудование: Пресс, Станок"]);
    }

    #[test]
    fn test_inactive_factory_name_from_full_list() {
        let mut store = EntityCacheStore::default();
        let listed = store.issue_ticket();
        store.store(
            EntityKind::Factories,
            listed,
            vec![EntityRecord::Factory(Factory {
                id: 1,
                name: "Закрытая".into(),
                is_active: false,
            })],
            true,
        );

        // a factory select fetching active records later leaves the names intact
        let select = store.issue_ticket();
        store.store(EntityKind::Factories, select, vec![], false);

        let lines = section_details(&section(vec![]), &store);
        assert_eq!(lines[0], "Фабрика: Закрытая (ID 1)");
    }
}
