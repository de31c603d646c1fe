use serde_json::{Map, Number, Value};

use super::field_type::FieldType;
use super::form_values::{FieldInput, FormValues};
use super::types::FieldMetadata;

/// Ключ идентификатора записи; передаётся в URL, а не в теле запроса
pub const IDENTITY_FIELD: &str = "id";

/// Режим формы: создание или обновление
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update,
}

impl FormMode {
    pub fn method(&self) -> &'static str {
        match self {
            FormMode::Create => "POST",
            FormMode::Update => "PUT",
        }
    }
}

/// Собрать JSON-тело запроса из значений формы
///
/// Ключи, отсутствующие в результате, сервер при обновлении сохраняет
/// без изменений, поэтому «пропустить» и «отправить null» различаются.
pub fn build_payload(
    fields: &[FieldMetadata],
    values: &FormValues,
    mode: FormMode,
) -> Map<String, Value> {
    let mut payload = Map::new();

    for field in fields.iter().filter(|f| f.name != IDENTITY_FIELD) {
        if let Some(value) = coerce_field(field, values, mode) {
            payload.insert(field.name.to_string(), value);
        }
    }

    payload
}

fn coerce_field(field: &FieldMetadata, values: &FormValues, mode: FormMode) -> Option<Value> {
    match field.field_type {
        FieldType::AggregateRefList => {
            let ids: Vec<Value> = values
                .selected(field.name)
                .iter()
                .filter_map(|v| v.trim().parse::<i64>().ok())
                .map(Value::from)
                .collect();
            Some(Value::Array(ids))
        }
        FieldType::AggregateRef => {
            let raw = single_value(values, field.name);
            let raw = raw.trim();
            if raw.is_empty() {
                if field.validation.required && mode == FormMode::Create {
                    Some(Value::Null)
                } else {
                    None
                }
            } else {
                Some(
                    raw.parse::<i64>()
                        .map(Value::from)
                        .unwrap_or_else(|_| Value::String(raw.to_string())),
                )
            }
        }
        FieldType::Number => {
            let raw = single_value(values, field.name);
            raw.trim()
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
        }
        FieldType::Text => {
            let raw = single_value(values, field.name);
            if !raw.trim().is_empty() {
                Some(Value::String(raw))
            } else if field.validation.nullable {
                Some(Value::Null)
            } else if mode == FormMode::Update {
                None
            } else {
                Some(Value::String(raw))
            }
        }
    }
}

fn single_value(values: &FormValues, name: &str) -> String {
    match values.get(name) {
        Some(FieldInput::Text(s)) => s.clone(),
        Some(FieldInput::Many(v)) => v.first().cloned().unwrap_or_default(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::EntityKind;
    use crate::shared::metadata::{FieldUiMetadata, ValidationRules};
    use serde_json::json;

    fn payload(kind: EntityKind, values: &FormValues, mode: FormMode) -> Value {
        Value::Object(build_payload(kind.fields(), values, mode))
    }

    #[test]
    fn test_create_factory() {
        let mut values = FormValues::default();
        values.set_text("name", "F1");
        assert_eq!(
            payload(EntityKind::Factories, &values, FormMode::Create),
            json!({"name": "F1"})
        );
    }

    #[test]
    fn test_create_section_with_blank_required_factory_sends_null() {
        let mut values = FormValues::default();
        values.set_text("name", "S1");
        values.set_text("factory_id", "");
        values.set_many("equipment_ids", vec![]);
        assert_eq!(
            payload(EntityKind::Sections, &values, FormMode::Create),
            json!({"name": "S1", "factory_id": null, "equipment_ids": []})
        );
    }

    #[test]
    fn test_update_section_omits_blank_factory_and_name() {
        let mut values = FormValues::default();
        values.set_text("name", "  ");
        values.set_text("factory_id", "");
        values.set_many("equipment_ids", vec!["3".into(), "x".into(), "4".into()]);
        assert_eq!(
            payload(EntityKind::Sections, &values, FormMode::Update),
            json!({"equipment_ids": [3, 4]})
        );
    }

    #[test]
    fn test_multi_select_without_selection_is_empty_array() {
        let values = FormValues::default();
        let body = payload(EntityKind::Equipment, &values, FormMode::Update);
        assert_eq!(body["section_ids"], json!([]));
    }

    #[test]
    fn test_update_equipment_always_sends_description() {
        let mut values = FormValues::default();
        values.set_text("name", "");
        values.set_text("description", "");
        assert_eq!(
            payload(EntityKind::Equipment, &values, FormMode::Update),
            json!({"description": null, "section_ids": []})
        );

        values.set_text("description", "Новое описание");
        values.set_text("name", "Станок");
        assert_eq!(
            payload(EntityKind::Equipment, &values, FormMode::Update),
            json!({"name": "Станок", "description": "Новое описание", "section_ids": []})
        );
    }

    #[test]
    fn test_foreign_key_is_sent_as_integer() {
        let mut values = FormValues::default();
        values.set_text("name", "S");
        values.set_text("factory_id", "12");
        let body = payload(EntityKind::Sections, &values, FormMode::Update);
        assert_eq!(body["factory_id"], json!(12));
    }

    #[test]
    fn test_number_field_and_identity_exclusion() {
        const FIELDS: &[FieldMetadata] = &[
            FieldMetadata {
                name: "id",
                field_type: FieldType::Number,
                ui: FieldUiMetadata { label: "ID", placeholder: None, widget: None },
                validation: ValidationRules::none(),
                ref_entity: None,
            },
            FieldMetadata {
                name: "capacity",
                field_type: FieldType::Number,
                ui: FieldUiMetadata { label: "Мощность", placeholder: None, widget: None },
                validation: ValidationRules::none(),
                ref_entity: None,
            },
        ];
        let mut values = FormValues::default();
        values.set_text("id", "5");
        values.set_text("capacity", "2.5");
        assert_eq!(
            Value::Object(build_payload(FIELDS, &values, FormMode::Create)),
            json!({"capacity": 2.5})
        );

        values.set_text("capacity", "");
        assert_eq!(
            Value::Object(build_payload(FIELDS, &values, FormMode::Create)),
            json!({})
        );
    }

    #[test]
    fn test_method_by_mode() {
        assert_eq!(FormMode::Create.method(), "POST");
        assert_eq!(FormMode::Update.method(), "PUT");
    }
}
