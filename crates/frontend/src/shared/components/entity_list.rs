//! List of entity records with activate / deactivate / edit actions

use contracts::domain::common::{EntityKind, EntityRecord};
use leptos::prelude::*;

use crate::shared::api_client::{call, HttpMethod};
use crate::shared::icons::icon;
use crate::shared::state::entity_cache::EntityCacheStore;
use crate::shared::state::panel_registry::{EntityPanelState, ListState};
use crate::shared::state::{use_admin_context, AdminContext};
use crate::shared::update_loader::{open_update_form, UiError};

/// Type-specific detail lines of a list row
pub type RowDetails = fn(&EntityRecord, &EntityCacheStore) -> Vec<String>;

/// Activity toggle offered by a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Deactivate,
    Activate,
}

impl RowAction {
    pub fn for_record(record: &EntityRecord) -> Self {
        if record.is_active() {
            RowAction::Deactivate
        } else {
            RowAction::Activate
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RowAction::Deactivate => "Деактивировать",
            RowAction::Activate => "Активировать",
        }
    }

    fn button_class(&self) -> &'static str {
        match self {
            RowAction::Deactivate => "button button--danger",
            RowAction::Activate => "button button--primary",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            RowAction::Deactivate => "power",
            RowAction::Activate => "check",
        }
    }
}

pub fn row_class(record: &EntityRecord) -> &'static str {
    if record.is_active() {
        "entity-row"
    } else {
        "entity-row entity-row--inactive"
    }
}

pub fn row_title(record: &EntityRecord) -> String {
    format!("ID: {} - {}", record.id(), record.name())
}

/// Records shown with the include-inactive checkbox in the given state
pub fn visible_items(items: Vec<EntityRecord>, include_inactive: bool) -> Vec<EntityRecord> {
    items
        .into_iter()
        .filter(|r| include_inactive || r.is_active())
        .collect()
}

/// Load the panel's list and show it filtered by its include-inactive checkbox
///
/// The full list is always fetched, so every listed record stays in the
/// cache for the update form. Responses to superseded requests of the same
/// panel are dropped.
pub async fn load_list(ctx: AdminContext, panel: EntityPanelState) {
    let seq = panel
        .list_seq
        .try_update(|n| {
            *n += 1;
            *n
        })
        .unwrap_or_default();
    panel.list.set(ListState::Loading);

    let result = ctx.cache.fetch(&ctx.config(), panel.kind, true).await;

    if panel.list_seq.get_untracked() != seq {
        return;
    }
    match result {
        Ok(items) => {
            let include_inactive = panel.include_inactive.get_untracked();
            panel
                .list
                .set(ListState::Loaded(visible_items(items, include_inactive)));
        }
        Err(e) => panel.list.set(ListState::Failed(e.detail())),
    }
}

fn confirm_deactivate(kind: EntityKind, id: i64) -> bool {
    let message = format!(
        "Вы уверены, что хотите деактивировать {} с ID {}?",
        kind.element_name(),
        id
    );
    web_sys::window()
        .and_then(|w| w.confirm_with_message(&message).ok())
        .unwrap_or(false)
}

/// Soft-deactivate (`DELETE`) or reactivate (`PUT .../activate`) a record
pub async fn set_active(ctx: AdminContext, kind: EntityKind, id: i64, action: RowAction) {
    let Some(panel) = ctx.panels.get(kind) else {
        log::error!("{}", UiError::MissingPanel(kind.collection()));
        return;
    };

    let (method, path) = match action {
        RowAction::Activate => (HttpMethod::Put, kind.activate_path(id)),
        RowAction::Deactivate => (HttpMethod::Delete, kind.item_path(id)),
    };

    match call(&ctx.url(&path), method, None, Some(panel.response)).await {
        Ok(_) => ctx.cache.invalidate(kind),
        Err(e) => log::debug!("{} {}: {}", method.as_str(), path, e),
    }

    panel.request_reload();
}

#[component]
pub fn EntityList(kind: EntityKind, details: RowDetails) -> impl IntoView {
    let ctx = use_admin_context();
    let Some(panel) = ctx.panels.get(kind) else {
        return view! {
            <div class="error">{UiError::MissingPanel(kind.collection()).to_string()}</div>
        }
        .into_any();
    };
    let ids = kind.dom_ids();
    let checkbox_id = ids.include_inactive.clone();

    Effect::new(move |_| {
        panel.reload.track();
        panel.include_inactive.track();
        wasm_bindgen_futures::spawn_local(load_list(ctx, panel));
    });

    view! {
        <div class="entity-list">
            <div class="entity-list__toolbar">
                <div class="form__checkbox-wrapper">
                    <input
                        id=ids.include_inactive
                        type="checkbox"
                        class="form__checkbox"
                        prop:checked=move || panel.include_inactive.get()
                        on:change=move |ev| panel.include_inactive.set(event_target_checked(&ev))
                    />
                    <label class="form__checkbox-label" for=checkbox_id>
                        "Показывать неактивные"
                    </label>
                </div>
                <button
                    type="button"
                    class="button button--secondary"
                    on:click=move |_| panel.request_reload()
                >
                    {icon("refresh")}
                    "Обновить"
                </button>
            </div>
            <ul id=ids.list class="entity-list__items">
                {move || {
                    // related names come from other kinds' caches
                    for related in kind.dependent_selects() {
                        ctx.cache.loaded(related);
                    }
                    match panel.list.get() {
                        ListState::Loading => view! {
                            <li class="entity-list__placeholder">"Загрузка..."</li>
                        }.into_any(),
                        ListState::Failed(message) => view! {
                            <li class="entity-list__error">{format!("Ошибка загрузки: {}", message)}</li>
                        }.into_any(),
                        ListState::Loaded(items) if items.is_empty() => view! {
                            <li class="entity-list__placeholder">"Нет данных"</li>
                        }.into_any(),
                        ListState::Loaded(items) => items
                            .into_iter()
                            .map(|record| {
                                let lines = ctx.cache.with(|store| details(&record, store));
                                view! { <EntityRow record=record lines=lines /> }
                            })
                            .collect_view()
                            .into_any(),
                    }
                }}
            </ul>
        </div>
    }
    .into_any()
}

#[component]
fn EntityRow(record: EntityRecord, lines: Vec<String>) -> impl IntoView {
    let ctx = use_admin_context();
    let kind = record.kind();
    let id = record.id();
    let action = RowAction::for_record(&record);

    let on_edit = move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            // failure is already reported in the response region
            let _ = open_update_form(ctx, kind, id).await;
        });
    };
    let on_toggle = move |_| {
        if action == RowAction::Deactivate && !confirm_deactivate(kind, id) {
            return;
        }
        wasm_bindgen_futures::spawn_local(set_active(ctx, kind, id, action));
    };

    view! {
        <li class=row_class(&record)>
            <div class="entity-row__main">
                <span class="entity-row__title">{row_title(&record)}</span>
                {(action == RowAction::Activate).then(|| view! {
                    <span class="badge badge--neutral">"неактивно"</span>
                })}
            </div>
            {lines
                .into_iter()
                .map(|line| view! { <div class="entity-row__detail">{line}</div> })
                .collect_view()}
            <div class="entity-row__actions">
                <button type="button" class="button button--secondary" on:click=on_edit>
                    {icon("edit")}
                    "Редактировать"
                </button>
                <button type="button" class=action.button_class() on:click=on_toggle>
                    {icon(action.icon_name())}
                    {action.label()}
                </button>
            </div>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_factory::aggregate::Factory;

    fn factory(id: i64, active: bool) -> EntityRecord {
        EntityRecord::Factory(Factory {
            id,
            name: format!("F{id}"),
            is_active: active,
        })
    }

    #[test]
    fn test_row_title() {
        assert_eq!(row_title(&factory(1, true)), "ID: 1 - F1");
    }

    #[test]
    fn test_active_row_offers_deactivate() {
        let record = factory(1, true);
        assert_eq!(RowAction::for_record(&record), RowAction::Deactivate);
        assert_eq!(RowAction::for_record(&record).label(), "Деактивировать");
        assert_eq!(row_class(&record), "entity-row");
    }

    #[test]
    fn test_deactivated_row_offers_activate() {
        let record = factory(1, false);
        assert_eq!(RowAction::for_record(&record), RowAction::Activate);
        assert_eq!(RowAction::for_record(&record).label(), "Активировать");
        assert_eq!(row_class(&record), "entity-row entity-row--inactive");
    }

    #[test]
    fn test_visible_items_follow_checkbox() {
        let items = vec![factory(1, true), factory(2, false)];
        let active = visible_items(items.clone(), false);
        assert_eq!(active.iter().map(|r| r.id()).collect::<Vec<_>>(), vec![1]);
        assert_eq!(visible_items(items, true).len(), 2);
    }
}
