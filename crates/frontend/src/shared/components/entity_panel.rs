use contracts::domain::common::EntityKind;
use contracts::shared::metadata::FormMode;
use leptos::prelude::*;

use crate::shared::components::entity_form::EntityForm;
use crate::shared::components::entity_list::{EntityList, RowDetails};
use crate::shared::components::response_view::ResponsePanel;
use crate::shared::icons::icon;
use crate::shared::state::use_admin_context;
use crate::shared::update_loader::UiError;

/// Create form, update form, list and response region of one entity kind
#[component]
pub fn EntityPanel(
    kind: EntityKind,
    /// Type-specific detail lines of list rows
    details: RowDetails,
    /// Icon name shown in the header
    #[prop(into)]
    icon_name: String,
) -> impl IntoView {
    let ctx = use_admin_context();
    let Some(panel) = ctx.panels.get(kind) else {
        return view! {
            <div class="error">{UiError::MissingPanel(kind.collection()).to_string()}</div>
        }
        .into_any();
    };
    let ids = kind.dom_ids();
    let create_open = panel.create.open;
    let update_open = panel.update.open;

    view! {
        <section class="entity-panel" id=format!("{}Panel", kind.collection())>
            <h2 class="entity-panel__title">
                {icon(&icon_name)}
                {kind.list_name()}
            </h2>

            <div class="disclosure" class:disclosure--open=move || create_open.get()>
                <button
                    type="button"
                    class="disclosure__toggle"
                    on:click=move |_| create_open.update(|open| *open = !*open)
                >
                    {move || if create_open.get() { icon("chevron-down") } else { icon("chevron-right") }}
                    {format!("Добавить: {}", kind.element_name())}
                </button>
                <div
                    class="disclosure__body"
                    style:display=move || if create_open.get() { "block" } else { "none" }
                >
                    <EntityForm kind=kind mode=FormMode::Create />
                </div>
            </div>

            // always rendered: the update loader looks the container up by id
            <div id=ids.update_container class="disclosure" class:disclosure--open=move || update_open.get()>
                <button
                    type="button"
                    class="disclosure__toggle"
                    on:click=move |_| update_open.update(|open| *open = !*open)
                >
                    {move || if update_open.get() { icon("chevron-down") } else { icon("chevron-right") }}
                    {format!("Изменить: {}", kind.element_name())}
                </button>
                <div
                    class="disclosure__body"
                    style:display=move || if update_open.get() { "block" } else { "none" }
                >
                    <EntityForm kind=kind mode=FormMode::Update />
                </div>
            </div>

            <ResponsePanel display=panel.response id=ids.response />

            <EntityList kind=kind details=details />
        </section>
    }
    .into_any()
}
