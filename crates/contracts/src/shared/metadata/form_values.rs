use std::collections::BTreeMap;

use crate::domain::common::relation_ref::relation_ids;
use crate::domain::common::EntityRecord;

/// Сырое значение поля формы
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Text(String),
    Many(Vec<String>),
}

/// Значения полей формы до приведения типов
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: BTreeMap<String, FieldInput>,
}

impl FormValues {
    pub fn set_text(&mut self, name: &str, value: impl Into<String>) {
        self.values
            .insert(name.to_string(), FieldInput::Text(value.into()));
    }

    pub fn set_many(&mut self, name: &str, values: Vec<String>) {
        self.values.insert(name.to_string(), FieldInput::Many(values));
    }

    pub fn get(&self, name: &str) -> Option<&FieldInput> {
        self.values.get(name)
    }

    /// Текстовое значение поля; пустая строка, если поле не заполнено
    pub fn text(&self, name: &str) -> &str {
        match self.values.get(name) {
            Some(FieldInput::Text(s)) => s,
            _ => "",
        }
    }

    /// Выбранные значения списка (одиночного или множественного)
    pub fn selected(&self, name: &str) -> Vec<String> {
        match self.values.get(name) {
            Some(FieldInput::Many(v)) => v.clone(),
            Some(FieldInput::Text(s)) if !s.is_empty() => vec![s.clone()],
            _ => Vec::new(),
        }
    }

    pub fn is_selected(&self, name: &str, value: &str) -> bool {
        match self.values.get(name) {
            Some(FieldInput::Many(v)) => v.iter().any(|x| x == value),
            Some(FieldInput::Text(s)) => s == value,
            None => false,
        }
    }

    /// Оставить выбранными только значения, присутствующие в `available`
    pub fn retain_selected(&mut self, name: &str, available: &[String]) {
        match self.values.get_mut(name) {
            Some(FieldInput::Many(v)) => v.retain(|x| available.contains(x)),
            Some(FieldInput::Text(s)) => {
                if !s.is_empty() && !available.contains(s) {
                    s.clear();
                }
            }
            None => {}
        }
    }

    /// Значения формы обновления для записи из кэша
    pub fn from_record(record: &EntityRecord) -> Self {
        let mut values = FormValues::default();
        values.set_text("name", record.name());
        match record {
            EntityRecord::Factory(_) => {}
            EntityRecord::Section(s) => {
                values.set_text("factory_id", s.factory_id.to_string());
                values.set_many("equipment_ids", ids_to_strings(&relation_ids(&s.equipment)));
            }
            EntityRecord::Equipment(e) => {
                values.set_text("description", e.description.clone().unwrap_or_default());
                values.set_many("section_ids", ids_to_strings(&relation_ids(&e.sections)));
            }
        }
        values
    }
}

fn ids_to_strings(ids: &[i64]) -> Vec<String> {
    ids.iter().map(i64::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_section::aggregate::Section;
    use crate::domain::a003_equipment::aggregate::Equipment;
    use crate::domain::common::RelationRef;

    fn rel(id: Option<i64>, name: &str) -> RelationRef {
        RelationRef {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_from_section_preselects_exact_relation_ids() {
        let record = EntityRecord::Section(Section {
            id: 4,
            name: "Участок".into(),
            is_active: true,
            factory_id: 2,
            equipment: vec![rel(Some(7), "A"), rel(None, "B"), rel(Some(9), "C")],
        });
        let values = FormValues::from_record(&record);
        assert_eq!(values.text("name"), "Участок");
        assert_eq!(values.text("factory_id"), "2");
        assert_eq!(values.selected("equipment_ids"), vec!["7", "9"]);
        assert!(!values.is_selected("equipment_ids", "8"));
    }

    #[test]
    fn test_from_equipment_without_description() {
        let record = EntityRecord::Equipment(Equipment {
            id: 1,
            name: "Станок".into(),
            is_active: false,
            description: None,
            sections: vec![],
        });
        let values = FormValues::from_record(&record);
        assert_eq!(values.text("description"), "");
        assert!(values.selected("section_ids").is_empty());
        assert_eq!(values.get("section_ids"), Some(&FieldInput::Many(vec![])));
    }

    #[test]
    fn test_retain_selected_drops_missing_values() {
        let mut values = FormValues::default();
        values.set_many("section_ids", vec!["1".into(), "2".into(), "3".into()]);
        values.set_text("factory_id", "5");
        let available = vec!["1".to_string(), "3".to_string()];
        values.retain_selected("section_ids", &available);
        values.retain_selected("factory_id", &available);
        assert_eq!(values.selected("section_ids"), vec!["1", "3"]);
        assert_eq!(values.text("factory_id"), "");
    }
}
