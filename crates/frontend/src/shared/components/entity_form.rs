//! Create and update forms generated from field metadata

use contracts::domain::common::EntityKind;
use contracts::shared::metadata::{build_payload, FieldMetadata, FieldType, FormMode, FormValues};
use leptos::prelude::*;
use serde_json::Value;

use crate::shared::api_client::{call, HttpMethod};
use crate::shared::components::entity_select::EntitySelect;
use crate::shared::components::ui::{TextField, TextWidget};
use crate::shared::state::{use_admin_context, AdminContext};
use crate::shared::update_loader::UiError;

/// Submit the create or update form of `kind`
///
/// On success the form is cleared and collapsed and selects listing `kind`
/// are refreshed. The list reloads in any case. Request errors are already
/// shown in the response region by the API client and stop here.
pub async fn submit_entity_form(ctx: AdminContext, kind: EntityKind, mode: FormMode) {
    let Some(panel) = ctx.panels.get(kind) else {
        log::error!("{}", UiError::MissingPanel(kind.collection()));
        return;
    };
    let form = panel.form(mode);

    let path = match mode {
        FormMode::Create => kind.collection_path(),
        FormMode::Update => match form.target_id.get_untracked() {
            Some(id) => kind.item_path(id),
            None => {
                panel.response.message_error(UiError::NoTarget.to_string());
                return;
            }
        },
    };
    let method = match mode {
        FormMode::Create => HttpMethod::Post,
        FormMode::Update => HttpMethod::Put,
    };

    let payload = form
        .values
        .with_untracked(|values| build_payload(kind.fields(), values, mode));
    let body = Value::Object(payload);

    match call(&ctx.url(&path), method, Some(&body), Some(panel.response)).await {
        Ok(_) => {
            form.reset();
            form.open.set(false);
            if mode == FormMode::Update {
                form.target_id.set(None);
            }
            ctx.cache.invalidate(kind);
        }
        Err(e) => {
            log::debug!("{} form of '{}' kept after error: {}", mode.method(), kind.collection(), e);
        }
    }

    panel.request_reload();
}

/// Element id prefix of a form's inputs
fn input_prefix(kind: EntityKind, mode: FormMode) -> String {
    match mode {
        FormMode::Create => format!("create_{}", kind.collection()),
        FormMode::Update => format!("update_{}", kind.collection()),
    }
}

#[component]
pub fn EntityForm(kind: EntityKind, mode: FormMode) -> impl IntoView {
    let ctx = use_admin_context();
    let Some(panel) = ctx.panels.get(kind) else {
        return view! {
            <div class="error">{UiError::MissingPanel(kind.collection()).to_string()}</div>
        }
        .into_any();
    };
    let form = panel.form(mode);
    let ids = kind.dom_ids();
    let form_id = match mode {
        FormMode::Create => ids.create_form,
        FormMode::Update => ids.update_form,
    };
    let prefix = input_prefix(kind, mode);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        wasm_bindgen_futures::spawn_local(submit_entity_form(ctx, kind, mode));
    };

    let identity = (mode == FormMode::Update).then(|| {
        view! {
            <input
                type="hidden"
                name="id"
                prop:value=move || form.target_id.get().map(|id| id.to_string()).unwrap_or_default()
            />
            <p class="form__hint">
                {move || match form.target_id.get() {
                    Some(id) => format!("Редактирование записи ID: {}", id),
                    None => "Запись не выбрана".to_string(),
                }}
            </p>
        }
    });

    view! {
        <form id=form_id class="entity-form" on:submit=on_submit>
            {identity}
            {kind
                .fields()
                .iter()
                .map(|field| view! {
                    <FormField field=field mode=mode values=form.values prefix=prefix.clone() />
                })
                .collect_view()}
            <button type="submit" class="button button--primary">
                {match mode {
                    FormMode::Create => "Создать",
                    FormMode::Update => "Сохранить",
                }}
            </button>
        </form>
    }
    .into_any()
}

#[component]
fn FormField(
    field: &'static FieldMetadata,
    mode: FormMode,
    values: RwSignal<FormValues>,
    prefix: String,
) -> impl IntoView {
    let name = field.name;
    let input_id = format!("{}_{}", prefix, name);
    let label = field.ui.label;
    let placeholder = field.ui.placeholder.unwrap_or_default();
    let value = Signal::derive(move || values.with(|v| v.text(name).to_string()));
    let on_input = Callback::new(move |text: String| values.update(|v| v.set_text(name, text)));

    match (field.field_type, field.ref_entity) {
        (FieldType::AggregateRef | FieldType::AggregateRefList, Some(ref_kind)) => view! {
            <div class="form__group">
                <label class="form__label" for=input_id.clone()>{label}</label>
                <EntitySelect field=field kind=ref_kind values=values id=input_id />
            </div>
        }
        .into_any(),
        (field_type, _) => {
            let widget = match field_type {
                FieldType::Number => TextWidget::Number,
                _ if field.is_textarea() => TextWidget::Area(3),
                _ => TextWidget::Line,
            };
            // blank text on update keeps the stored value
            let required = widget == TextWidget::Line
                && field.validation.required
                && mode == FormMode::Create;
            view! {
                <TextField
                    label=label
                    value=value
                    on_input=on_input
                    id=input_id
                    name=name
                    widget=widget
                    placeholder=placeholder
                    required=required
                />
            }
            .into_any()
        }
    }
}
