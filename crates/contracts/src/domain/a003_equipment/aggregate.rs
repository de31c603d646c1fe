use serde::{Deserialize, Serialize};

use crate::domain::common::entity_record::default_true;
use crate::domain::common::{EntityKind, RelationRef};
use crate::shared::metadata::{FieldMetadata, FieldType, FieldUiMetadata, ValidationRules};

/// Единица оборудования
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: i64,
    pub name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub description: Option<String>,

    /// Участки, на которых находится оборудование
    #[serde(default)]
    pub sections: Vec<RelationRef>,
}

/// Поля формы оборудования
pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata {
        name: "name",
        field_type: FieldType::Text,
        ui: FieldUiMetadata {
            label: "Наименование оборудования",
            placeholder: Some("Введите наименование"),
            widget: None,
        },
        validation: ValidationRules::required(),
        ref_entity: None,
    },
    FieldMetadata {
        name: "description",
        field_type: FieldType::Text,
        ui: FieldUiMetadata {
            label: "Описание",
            placeholder: Some("Необязательно"),
            widget: Some("textarea"),
        },
        validation: ValidationRules::nullable(),
        ref_entity: None,
    },
    FieldMetadata {
        name: "section_ids",
        field_type: FieldType::AggregateRefList,
        ui: FieldUiMetadata {
            label: "Участки",
            placeholder: None,
            widget: None,
        },
        validation: ValidationRules::none(),
        ref_entity: Some(EntityKind::Sections),
    },
];
