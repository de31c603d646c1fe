//! Normalisation of REST error bodies
//!
//! The server answers errors with `{"detail": ...}`, where `detail` is either
//! a message string or a list of validation errors (`[{loc, msg, type}]`).

use serde_json::{json, Value};

/// Разобрать тело ответа с ошибкой; не-JSON оборачивается в `{detail: <text>}`
pub fn error_body_from_text(text: &str) -> Value {
    serde_json::from_str::<Value>(text).unwrap_or_else(|_| json!({ "detail": text }))
}

/// Человекочитаемое сообщение из поля `detail`
pub fn detail_message(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::String(_) | Value::Null => None,
        Value::Array(items) => {
            let messages: Vec<String> = items
                .iter()
                .map(|item| match item.get("msg").and_then(Value::as_str) {
                    Some(msg) => msg.to_string(),
                    None => item.to_string(),
                })
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        other => Some(other.to_string()),
    }
}

/// Тело-заглушка для ответа 204 No Content
pub fn no_content_payload() -> Value {
    json!({
        "status": "success",
        "message": "Операция выполнена успешно (204 No Content)"
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_json_body_is_wrapped() {
        let body = error_body_from_text("Internal Server Error");
        assert_eq!(body, json!({"detail": "Internal Server Error"}));
        assert_eq!(detail_message(&body).as_deref(), Some("Internal Server Error"));
    }

    #[test]
    fn test_string_detail() {
        let body = error_body_from_text(r#"{"detail": "Фабрика с таким именем уже существует"}"#);
        assert_eq!(
            detail_message(&body).as_deref(),
            Some("Фабрика с таким именем уже существует")
        );
    }

    #[test]
    fn test_validation_error_list() {
        let body = json!({
            "detail": [
                {"loc": ["body", "factory_id"], "msg": "Input should be a valid integer", "type": "int_type"},
                {"loc": ["body", "name"], "msg": "Field required", "type": "missing"}
            ]
        });
        assert_eq!(
            detail_message(&body).as_deref(),
            Some("Input should be a valid integer; Field required")
        );
    }

    #[test]
    fn test_missing_detail() {
        assert_eq!(detail_message(&json!({"error": "x"})), None);
        assert_eq!(detail_message(&json!({"detail": ""})), None);
        assert_eq!(detail_message(&json!([1, 2])), None);
    }
}
