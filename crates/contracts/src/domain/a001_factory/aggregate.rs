use serde::{Deserialize, Serialize};

use crate::domain::common::entity_record::default_true;
use crate::shared::metadata::{FieldMetadata, FieldType, FieldUiMetadata, ValidationRules};

/// Фабрика
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factory {
    pub id: i64,
    pub name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Поля формы фабрики
pub const FIELDS: &[FieldMetadata] = &[FieldMetadata {
    name: "name",
    field_type: FieldType::Text,
    ui: FieldUiMetadata {
        label: "Наименование фабрики",
        placeholder: Some("Введите наименование"),
        widget: None,
    },
    validation: ValidationRules::required(),
    ref_entity: None,
}];
