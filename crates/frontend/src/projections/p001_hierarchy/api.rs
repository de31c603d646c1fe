//! `GET /hierarchy/` over gloo-net
//!
//! Plain request: no cache, no retry, no response region of an entity panel.

use contracts::shared::error_detail::{detail_message, error_body_from_text};
use gloo_net::http::Request;
use serde_json::Value;

use crate::shared::api_client::ApiError;
use crate::shared::api_utils::hierarchy_url;
use crate::shared::config::AppConfig;

/// Сообщение, если сервер не прислал `detail`
pub const FETCH_ERROR: &str = "Не удалось получить данные";

pub fn hierarchy_error(status: u16, body: Value) -> ApiError {
    let detail = detail_message(&body).unwrap_or_else(|| FETCH_ERROR.to_string());
    ApiError::Http {
        status,
        detail,
        body,
    }
}

pub async fn fetch_hierarchy(
    config: &AppConfig,
    entity_type: &str,
    entity_id: i64,
) -> Result<Value, ApiError> {
    let url = hierarchy_url(config, entity_type, entity_id);
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        let err = hierarchy_error(status, error_body_from_text(&text));
        log::warn!("GET {}: {}", url, err);
        return Err(err);
    }

    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_message_uses_detail() {
        let err = hierarchy_error(404, json!({"detail": "Factory with id 9 not found"}));
        assert_eq!(err.to_string(), "Ошибка 404: Factory with id 9 not found");
    }

    #[test]
    fn test_error_message_without_detail() {
        let err = hierarchy_error(500, error_body_from_text(""));
        assert_eq!(err.to_string(), "Ошибка 500: Не удалось получить данные");
    }
}
