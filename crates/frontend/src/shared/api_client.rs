//! Thin wrapper over `fetch` for the REST API
//!
//! Every call sends `Accept: application/json`, turns non-2xx answers into
//! [`ApiError::Http`] with the parsed body, and optionally mirrors the
//! outcome into a [`ResponseDisplay`] region.

use contracts::shared::error_detail::{detail_message, error_body_from_text, no_content_payload};
use serde_json::{json, Value};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::shared::components::response_view::ResponseDisplay;

/// Сообщение, если сервер не прислал `detail`
pub const GENERIC_ERROR: &str = "Не удалось выполнить запрос";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    fn sends_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }
}

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Сетевая ошибка: {0}")]
    Transport(String),

    #[error("Ошибка {status}: {detail}")]
    Http {
        status: u16,
        detail: String,
        body: Value,
    },

    #[error("Некорректный ответ сервера: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn http(status: u16, body: Value) -> Self {
        let detail = detail_message(&body).unwrap_or_else(|| GENERIC_ERROR.to_string());
        ApiError::Http {
            status,
            detail,
            body,
        }
    }

    /// Сообщение для вывода в строке списка
    pub fn detail(&self) -> String {
        match self {
            ApiError::Http { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }

    /// Тело ошибки в виде JSON для области ответа
    pub fn body(&self) -> Value {
        match self {
            ApiError::Http { body, .. } => body.clone(),
            other => json!({ "detail": other.to_string() }),
        }
    }
}

/// Выполнить запрос к API
///
/// При переданной области `display` показывает в ней «Загрузка...», затем
/// отформатированный JSON результата или ошибки. Ошибка в любом случае
/// возвращается вызывающему.
pub async fn call(
    url: &str,
    method: HttpMethod,
    body: Option<&Value>,
    display: Option<ResponseDisplay>,
) -> Result<Value, ApiError> {
    if let Some(display) = display {
        display.loading();
    }

    let result = send(url, method, body).await;

    match &result {
        Ok(value) => {
            if let Some(display) = display {
                display.success(value);
            }
        }
        Err(e) => {
            log::warn!("{} {} failed: {}", method.as_str(), url, e);
            if let Some(display) = display {
                display.failure(e);
            }
        }
    }

    result
}

async fn send(url: &str, method: HttpMethod, body: Option<&Value>) -> Result<Value, ApiError> {
    log::debug!("{} {}", method.as_str(), url);

    let payload = match body {
        Some(b) if method.sends_body() => {
            Some(serde_json::to_string(b).map_err(|e| ApiError::Decode(e.to_string()))?)
        }
        _ => None,
    };

    let opts = RequestInit::new();
    opts.set_method(method.as_str());
    opts.set_mode(RequestMode::Cors);
    if let Some(payload) = &payload {
        opts.set_body(&JsValue::from_str(payload));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(transport)?;
    let headers = request.headers();
    headers
        .set("Accept", "application/json")
        .map_err(transport)?;
    if payload.is_some() {
        headers
            .set("Content-Type", "application/json")
            .map_err(transport)?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".to_string()))?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    let resp: Response = resp_value.dyn_into().map_err(transport)?;

    if resp.status() == 204 {
        return Ok(no_content_payload());
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(transport)?)
        .await
        .map_err(transport)?;
    let text = text.as_string().unwrap_or_default();

    if resp.ok() {
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        Err(ApiError::http(resp.status(), error_body_from_text(&text)))
    }
}

fn transport(e: JsValue) -> ApiError {
    ApiError::Transport(format!("{e:?}"))
}
