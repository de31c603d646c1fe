use leptos::prelude::*;
use serde_json::Value;

use crate::shared::api_client::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseView {
    Idle,
    Loading,
    Success(String),
    Failure { message: String, body: Option<String> },
}

/// Область вывода ответа сервера
#[derive(Clone, Copy)]
pub struct ResponseDisplay(RwSignal<ResponseView>);

impl ResponseDisplay {
    pub fn new() -> Self {
        Self(RwSignal::new(ResponseView::Idle))
    }

    pub fn loading(&self) {
        self.0.set(ResponseView::Loading);
    }

    pub fn success(&self, value: &Value) {
        self.0.set(ResponseView::Success(pretty(value)));
    }

    pub fn failure(&self, error: &ApiError) {
        self.0.set(ResponseView::Failure {
            message: error.to_string(),
            body: Some(pretty(&error.body())),
        });
    }

    /// Ошибка интерфейса без ответа сервера
    pub fn message_error(&self, message: impl Into<String>) {
        self.0.set(ResponseView::Failure {
            message: message.into(),
            body: None,
        });
    }

    pub fn get(&self) -> ResponseView {
        self.0.get()
    }
}

impl Default for ResponseDisplay {
    fn default() -> Self {
        Self::new()
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[component]
pub fn ResponsePanel(
    display: ResponseDisplay,
    /// ID элемента области ответа
    #[prop(into)]
    id: String,
) -> impl IntoView {
    view! {
        <div id=id class="response">
            {move || match display.get() {
                ResponseView::Idle => view! { <></> }.into_any(),
                ResponseView::Loading => view! {
                    <p class="response__loading">"Загрузка..."</p>
                }.into_any(),
                ResponseView::Success(json) => view! {
                    <pre class="response__json">{json}</pre>
                }.into_any(),
                ResponseView::Failure { message, body } => view! {
                    <div class="response__error">
                        <p class="response__error-text">{message}</p>
                        {body.map(|b| view! { <pre class="response__json">{b}</pre> })}
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
