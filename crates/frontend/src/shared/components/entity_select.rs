//! Select bound to an entity list
//!
//! Options come from the [`EntityCache`](crate::shared::state::entity_cache::EntityCache);
//! the list is refetched only when the cache is empty or lacks the inactive
//! records asked for. Cached inactive records are filtered out here when the
//! select shows active ones only. Whenever options are rebuilt, previously
//! chosen values that are no longer offered are dropped from the form values.

use contracts::domain::common::{EntityKind, EntityRecord};
use contracts::shared::metadata::{FieldMetadata, FormValues};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlOptionElement, HtmlSelectElement};

use crate::shared::api_client::ApiError;
use crate::shared::config::AppConfig;
use crate::shared::state::entity_cache::EntityCache;
use crate::shared::state::use_admin_context;

/// Подпись неактивного элемента
pub const INACTIVE_SUFFIX: &str = " - неактивно";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub inactive: bool,
}

/// Options for the items that may be shown with the given activity filter
pub fn build_options(items: &[EntityRecord], include_inactive: bool) -> Vec<SelectOption> {
    items
        .iter()
        .filter(|r| r.is_active() || include_inactive)
        .map(|r| {
            let inactive = !r.is_active();
            let label = if inactive {
                format!("{}{}", r.name(), INACTIVE_SUFFIX)
            } else {
                r.name().to_string()
            };
            SelectOption {
                value: r.id().to_string(),
                label,
                inactive,
            }
        })
        .collect()
}

pub fn option_values(options: &[SelectOption]) -> Vec<String> {
    options.iter().map(|o| o.value.clone()).collect()
}

/// Fill options for `kind`, reusing the cache when it fits
pub async fn populate_select(
    cache: EntityCache,
    config: &AppConfig,
    kind: EntityKind,
    include_inactive: bool,
) -> Result<Vec<SelectOption>, ApiError> {
    let items = cache.ensure(config, kind, include_inactive).await?;
    Ok(build_options(&items, include_inactive))
}

#[derive(Debug, Clone, PartialEq)]
enum SelectState {
    Loading,
    Ready(Vec<SelectOption>),
    Failed,
}

#[component]
pub fn EntitySelect(
    field: &'static FieldMetadata,
    /// Entity kind listed in the options
    kind: EntityKind,
    values: RwSignal<FormValues>,
    #[prop(into)]
    id: String,
    #[prop(optional)]
    include_inactive: bool,
) -> impl IntoView {
    let ctx = use_admin_context();
    let state = RwSignal::new(SelectState::Loading);
    let name = field.name;
    let multiple = field.is_multi();
    let prompt = field.ui.placeholder.unwrap_or("-- Выберите --");

    Effect::new(move |_| {
        // re-run whenever the cache for `kind` is invalidated or touched
        ctx.cache.revision(kind);
        let config = ctx.config();
        wasm_bindgen_futures::spawn_local(async move {
            match populate_select(ctx.cache, &config, kind, include_inactive).await {
                Ok(options) => {
                    let available = option_values(&options);
                    values.update(|v| v.retain_selected(name, &available));
                    state.set(SelectState::Ready(options));
                }
                Err(e) => {
                    log::warn!("select '{}' ({}): {}", name, kind.collection(), e);
                    state.set(SelectState::Failed);
                }
            }
        });
    });

    let on_change = move |ev: web_sys::Event| {
        let Some(select) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
        else {
            return;
        };
        if multiple {
            let chosen = select.selected_options();
            let picked: Vec<String> = (0..chosen.length())
                .filter_map(|i| chosen.item(i))
                .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
                .map(|o| o.value())
                .collect();
            values.update(|v| v.set_many(name, picked));
        } else {
            values.update(|v| v.set_text(name, select.value()));
        }
    };

    view! {
        <select
            id=id
            name=name
            class="form__select"
            class:form__select--multiple=multiple
            multiple=multiple
            on:change=on_change
        >
            {move || match state.get() {
                SelectState::Loading => view! {
                    <option value="" disabled=true>"Загрузка..."</option>
                }.into_any(),
                SelectState::Failed => view! {
                    <option value="" disabled=true selected=true>"Ошибка загрузки"</option>
                }.into_any(),
                SelectState::Ready(options) => {
                    let placeholder = (!multiple).then(|| view! {
                        <option
                            value=""
                            prop:selected=move || values.with(|v| v.text(name).is_empty())
                        >
                            {prompt}
                        </option>
                    });
                    let rows = options
                        .into_iter()
                        .map(|o| {
                            let value = o.value.clone();
                            view! {
                                <option
                                    value=o.value
                                    class:option--inactive=o.inactive
                                    prop:selected=move || values.with(|v| v.is_selected(name, &value))
                                >
                                    {o.label}
                                </option>
                            }
                        })
                        .collect_view();
                    view! { {placeholder} {rows} }.into_any()
                }
            }}
        </select>
    }
}
