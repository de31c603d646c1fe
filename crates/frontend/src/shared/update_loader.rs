//! Opening the update form for a listed record

use contracts::domain::common::EntityKind;
use contracts::shared::metadata::FormValues;
use leptos::prelude::*;
use thiserror::Error;
use web_sys::Element;

use crate::shared::state::panel_registry::EntityPanelState;
use crate::shared::state::AdminContext;

/// Ошибки связки разметки и обработчиков
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    #[error("Элемент страницы '{0}' не найден")]
    MissingElement(String),

    #[error("Панель для '{0}' не зарегистрирована")]
    MissingPanel(&'static str),

    #[error("{kind}: запись с ID {id} не найдена в загруженном списке")]
    NotInCache { kind: &'static str, id: i64 },

    #[error("Не выбрана запись для обновления")]
    NoTarget,
}

fn find_element(id: &str) -> Result<Element, UiError> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .ok_or_else(|| UiError::MissingElement(id.to_string()))
}

/// Fill the update form of `kind` from the cached record `id` and open it
///
/// Only records present in the cache (i.e. already listed) can be edited.
pub async fn open_update_form(ctx: AdminContext, kind: EntityKind, id: i64) -> Result<(), UiError> {
    let Some(panel) = ctx.panels.get(kind) else {
        let err = UiError::MissingPanel(kind.collection());
        log::error!("{}", err);
        return Err(err);
    };

    let result = fill_update_form(ctx, panel, id).await;
    if let Err(e) = &result {
        log::error!("update form of '{}': {}", kind.collection(), e);
        panel.response.message_error(e.to_string());
    }
    result
}

async fn fill_update_form(ctx: AdminContext, panel: EntityPanelState, id: i64) -> Result<(), UiError> {
    let kind = panel.kind;
    let ids = kind.dom_ids();
    let container = find_element(&ids.update_container)?;
    find_element(&ids.update_form)?;

    // selects first, so the record's relations have options to be matched against
    let config = ctx.config();
    for dep in kind.dependent_selects() {
        if let Err(e) = ctx.cache.ensure(&config, dep, false).await {
            log::warn!("options of '{}' not loaded: {}", dep.collection(), e);
        }
        ctx.cache.touch(dep);
    }

    let record = ctx.cache.find(kind, id).ok_or(UiError::NotInCache {
        kind: kind.element_name(),
        id,
    })?;

    let form = panel.update;
    form.values.set(FormValues::from_record(&record));
    form.target_id.set(Some(id));
    form.open.set(true);
    container.scroll_into_view();

    Ok(())
}
