use serde::Serialize;
use serde_json::Value;

use super::entity_kind::EntityKind;
use crate::domain::a001_factory::aggregate::Factory;
use crate::domain::a002_section::aggregate::Section;
use crate::domain::a003_equipment::aggregate::Equipment;

/// Запись любого справочника, как её вернул сервер
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EntityRecord {
    Factory(Factory),
    Section(Section),
    Equipment(Equipment),
}

impl EntityRecord {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRecord::Factory(_) => EntityKind::Factories,
            EntityRecord::Section(_) => EntityKind::Sections,
            EntityRecord::Equipment(_) => EntityKind::Equipment,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            EntityRecord::Factory(f) => f.id,
            EntityRecord::Section(s) => s.id,
            EntityRecord::Equipment(e) => e.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            EntityRecord::Factory(f) => &f.name,
            EntityRecord::Section(s) => &s.name,
            EntityRecord::Equipment(e) => &e.name,
        }
    }

    pub fn is_active(&self) -> bool {
        match self {
            EntityRecord::Factory(f) => f.is_active,
            EntityRecord::Section(s) => s.is_active,
            EntityRecord::Equipment(e) => e.is_active,
        }
    }

    /// Разобрать ответ `GET /{kind}/` в записи нужного типа
    pub fn parse_list(kind: EntityKind, value: Value) -> Result<Vec<EntityRecord>, serde_json::Error> {
        let records = match kind {
            EntityKind::Factories => serde_json::from_value::<Vec<Factory>>(value)?
                .into_iter()
                .map(EntityRecord::Factory)
                .collect(),
            EntityKind::Sections => serde_json::from_value::<Vec<Section>>(value)?
                .into_iter()
                .map(EntityRecord::Section)
                .collect(),
            EntityKind::Equipment => serde_json::from_value::<Vec<Equipment>>(value)?
                .into_iter()
                .map(EntityRecord::Equipment)
                .collect(),
        };
        Ok(records)
    }
}

pub(crate) fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_sections_with_relations() {
        let value = json!([
            {
                "id": 2,
                "name": "Цех 1",
                "is_active": true,
                "factory_id": 1,
                "equipment": [{"id": 5, "name": "Пресс"}, {"name": "Без id"}]
            }
        ]);
        let records = EntityRecord::parse_list(EntityKind::Sections, value).unwrap();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.kind(), EntityKind::Sections);
        assert_eq!(record.id(), 2);
        assert_eq!(record.name(), "Цех 1");
        match record {
            EntityRecord::Section(s) => {
                assert_eq!(s.factory_id, 1);
                assert_eq!(s.equipment.len(), 2);
                assert_eq!(s.equipment[1].id, None);
            }
            other => panic!("unexpected record: {other:?}"),
        }
    }

    #[test]
    fn test_parse_ignores_unknown_keys_and_defaults_active() {
        let value = json!([{"id": 1, "name": "F1", "sections": [{"name": "S"}]}]);
        let records = EntityRecord::parse_list(EntityKind::Factories, value).unwrap();
        assert!(records[0].is_active());
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let value = json!({"detail": "oops"});
        assert!(EntityRecord::parse_list(EntityKind::Equipment, value).is_err());
    }
}
