use contracts::domain::a003_equipment::aggregate::Equipment;
use contracts::domain::common::relation_ref::relation_names;
use contracts::domain::common::{EntityKind, EntityRecord};
use leptos::prelude::*;

use crate::shared::components::entity_panel::EntityPanel;
use crate::shared::state::entity_cache::EntityCacheStore;

fn description_line(equipment: &Equipment) -> String {
    match equipment.description.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => format!("Описание: {}", text),
        _ => "Описание: —".to_string(),
    }
}

fn sections_line(equipment: &Equipment) -> String {
    if equipment.sections.is_empty() {
        "Участки: нет".to_string()
    } else {
        format!("Участки: {}", relation_names(&equipment.sections))
    }
}

pub fn equipment_details(record: &EntityRecord, _store: &EntityCacheStore) -> Vec<String> {
    let EntityRecord::Equipment(equipment) = record else {
        return Vec::new();
    };
    vec![description_line(equipment), sections_line(equipment)]
}

#[component]
pub fn EquipmentPanel() -> impl IntoView {
    view! {
        <EntityPanel kind=EntityKind::Equipment details=equipment_details icon_name="equipment" />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::RelationRef;

    #[test]
    fn test_equipment_details() {
        let store = EntityCacheStore::default();
        let record = EntityRecord::Equipment(Equipment {
            id: 3,
            name: "Станок".into(),
            is_active: false,
            description: None,
            sections: vec![RelationRef { id: Some(2), name: "Сборка".into() }],
        });
        assert_eq!(
            equipment_details(&record, &store),
            vec!["Описание: —", "Участки: Сборка"]
        );
    }

    #[test]
    fn test_blank_description_shown_as_dash() {
        let store = EntityCacheStore::default();
        let record = EntityRecord::Equipment(Equipment {
            id: 3,
            name: "Станок".into(),
            is_active: true,
            description: Some("  ".into()),
            sections: vec![],
        });
        assert_eq!(
            equipment_details(&record, &store),
            vec!["Описание: —", "Участки: нет"]
        );
    }
}
