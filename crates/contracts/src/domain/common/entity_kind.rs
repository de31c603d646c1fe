use serde::{Deserialize, Serialize};

use crate::domain::{a001_factory, a002_section, a003_equipment};
use crate::shared::metadata::FieldMetadata;

/// Тип сущности справочника
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Factories,
    Sections,
    Equipment,
}

/// Идентификаторы DOM-элементов, закреплённые за типом сущности
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDomIds {
    pub list: String,
    pub response: String,
    pub include_inactive: String,
    pub create_form: String,
    pub update_container: String,
    pub update_form: String,
}

impl EntityDomIds {
    /// Все идентификаторы в порядке объявления
    pub fn all(&self) -> [&str; 6] {
        [
            &self.list,
            &self.response,
            &self.include_inactive,
            &self.create_form,
            &self.update_container,
            &self.update_form,
        ]
    }
}

impl EntityKind {
    pub fn all() -> [EntityKind; 3] {
        [EntityKind::Factories, EntityKind::Sections, EntityKind::Equipment]
    }

    /// Сегмент пути REST API
    pub fn collection(&self) -> &'static str {
        match self {
            EntityKind::Factories => "factories",
            EntityKind::Sections => "sections",
            EntityKind::Equipment => "equipment",
        }
    }

    /// Суффикс для идентификаторов DOM (`include_inactiveFactories` и т.п.)
    pub fn pascal(&self) -> &'static str {
        match self {
            EntityKind::Factories => "Factories",
            EntityKind::Sections => "Sections",
            EntityKind::Equipment => "Equipment",
        }
    }

    /// Значение `entity_type` для запроса иерархии
    pub fn hierarchy_type(&self) -> &'static str {
        match self {
            EntityKind::Factories => "factory",
            EntityKind::Sections => "section",
            EntityKind::Equipment => "equipment",
        }
    }

    pub fn element_name(&self) -> &'static str {
        match self {
            EntityKind::Factories => "Фабрика",
            EntityKind::Sections => "Участок",
            EntityKind::Equipment => "Оборудование",
        }
    }

    pub fn list_name(&self) -> &'static str {
        match self {
            EntityKind::Factories => "Фабрики",
            EntityKind::Sections => "Участки",
            EntityKind::Equipment => "Оборудование",
        }
    }

    pub fn from_hierarchy_type(value: &str) -> Option<Self> {
        Self::all().into_iter().find(|k| k.hierarchy_type() == value)
    }

    pub fn dom_ids(&self) -> EntityDomIds {
        let c = self.collection();
        let p = self.pascal();
        EntityDomIds {
            list: format!("{c}List"),
            response: format!("{c}Response"),
            include_inactive: format!("include_inactive{p}"),
            create_form: format!("create{p}Form"),
            update_container: format!("update{p}FormContainer"),
            update_form: format!("update{p}Form"),
        }
    }

    /// Поля формы создания/обновления
    pub fn fields(&self) -> &'static [FieldMetadata] {
        match self {
            EntityKind::Factories => a001_factory::aggregate::FIELDS,
            EntityKind::Sections => a002_section::aggregate::FIELDS,
            EntityKind::Equipment => a003_equipment::aggregate::FIELDS,
        }
    }

    /// Типы сущностей, чьи списки выбора присутствуют в формах этого типа
    pub fn dependent_selects(&self) -> Vec<EntityKind> {
        let mut kinds: Vec<EntityKind> = self
            .fields()
            .iter()
            .filter_map(|f| f.ref_entity)
            .collect();
        kinds.dedup();
        kinds
    }

    /// Типы сущностей, в формах которых есть список выбора этого типа
    pub fn referenced_by(&self) -> Vec<EntityKind> {
        Self::all()
            .into_iter()
            .filter(|other| other.dependent_selects().contains(self))
            .collect()
    }

    pub fn collection_path(&self) -> String {
        format!("/{}/", self.collection())
    }

    pub fn item_path(&self, id: i64) -> String {
        format!("/{}/{}", self.collection(), id)
    }

    pub fn activate_path(&self, id: i64) -> String {
        format!("/{}/{}/activate", self.collection(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_ids_follow_naming_convention() {
        let ids = EntityKind::Sections.dom_ids();
        assert_eq!(ids.list, "sectionsList");
        assert_eq!(ids.response, "sectionsResponse");
        assert_eq!(ids.include_inactive, "include_inactiveSections");
        assert_eq!(ids.update_container, "updateSectionsFormContainer");
        assert_eq!(ids.update_form, "updateSectionsForm");
    }

    #[test]
    fn test_dom_ids_are_unique_across_kinds() {
        let mut all: Vec<String> = EntityKind::all()
            .iter()
            .flat_map(|k| k.dom_ids().all().map(str::to_string))
            .collect();
        let total = all.len();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), total);
    }

    #[test]
    fn test_paths() {
        assert_eq!(EntityKind::Factories.collection_path(), "/factories/");
        assert_eq!(EntityKind::Equipment.item_path(7), "/equipment/7");
        assert_eq!(EntityKind::Sections.activate_path(3), "/sections/3/activate");
    }

    #[test]
    fn test_dependent_selects() {
        assert!(EntityKind::Factories.dependent_selects().is_empty());
        assert_eq!(
            EntityKind::Sections.dependent_selects(),
            vec![EntityKind::Factories, EntityKind::Equipment]
        );
        assert_eq!(EntityKind::Equipment.dependent_selects(), vec![EntityKind::Sections]);
    }

    #[test]
    fn test_referenced_by() {
        assert_eq!(EntityKind::Factories.referenced_by(), vec![EntityKind::Sections]);
        assert_eq!(EntityKind::Sections.referenced_by(), vec![EntityKind::Equipment]);
        assert_eq!(EntityKind::Equipment.referenced_by(), vec![EntityKind::Sections]);
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(EntityKind::from_hierarchy_type("factory"), Some(EntityKind::Factories));
        assert_eq!(EntityKind::from_hierarchy_type("factories"), None);
    }
}
