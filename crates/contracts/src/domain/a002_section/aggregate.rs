use serde::{Deserialize, Serialize};

use crate::domain::common::entity_record::default_true;
use crate::domain::common::{EntityKind, RelationRef};
use crate::shared::metadata::{FieldMetadata, FieldType, FieldUiMetadata, ValidationRules};

/// Участок фабрики
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: i64,
    pub name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub factory_id: i64,

    /// Оборудование, привязанное к участку
    #[serde(default)]
    pub equipment: Vec<RelationRef>,
}

/// Поля формы участка
pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata {
        name: "name",
        field_type: FieldType::Text,
        ui: FieldUiMetadata {
            label: "Наименование участка",
            placeholder: Some("Введите наименование"),
            widget: None,
        },
        validation: ValidationRules::required(),
        ref_entity: None,
    },
    FieldMetadata {
        name: "factory_id",
        field_type: FieldType::AggregateRef,
        ui: FieldUiMetadata {
            label: "Фабрика",
            placeholder: Some("-- Выберите фабрику --"),
            widget: None,
        },
        validation: ValidationRules::required(),
        ref_entity: Some(EntityKind::Factories),
    },
    FieldMetadata {
        name: "equipment_ids",
        field_type: FieldType::AggregateRefList,
        ui: FieldUiMetadata {
            label: "Оборудование",
            placeholder: None,
            widget: None,
        },
        validation: ValidationRules::none(),
        ref_entity: Some(EntityKind::Equipment),
    },
];
