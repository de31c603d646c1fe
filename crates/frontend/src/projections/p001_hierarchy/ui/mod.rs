use contracts::domain::common::EntityKind;
use contracts::projections::p001_hierarchy::dto::{HierarchyChild, HierarchyResponse};
use leptos::prelude::*;

use crate::projections::p001_hierarchy::api::fetch_hierarchy;
use crate::shared::icons::icon;
use crate::shared::state::use_admin_context;

pub const FORM_ID: &str = "hierarchyForm";
pub const RESPONSE_ID: &str = "hierarchy_response";

#[derive(Debug, Clone, PartialEq)]
enum HierarchyView {
    Idle,
    Loading,
    Loaded {
        json: String,
        tree: Option<HierarchyResponse>,
    },
    Failed(String),
}

/// Проверка введённого ID до запроса
pub fn parse_entity_id(input: &str) -> Result<i64, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Введите ID объекта".to_string());
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| format!("ID должен быть целым числом: '{}'", trimmed))
}

fn type_label(entity_type: &str) -> &str {
    EntityKind::from_hierarchy_type(entity_type)
        .map(|k| k.element_name())
        .unwrap_or(entity_type)
}

fn node_title(entity_type: &str, id: i64, name: &str) -> String {
    format!("{} #{}: {}", type_label(entity_type), id, name)
}

fn tree_node(node: HierarchyChild) -> AnyView {
    let title = node_title(&node.entity_type, node.id, &node.name);
    let children = node.children.unwrap_or_default();
    let leaf = children.is_empty();

    view! {
        <li class="tree__node">
            <span class="tree__label">
                {if leaf { icon("item") } else { icon("folder-open") }}
                {title}
            </span>
            {(!leaf).then(|| view! {
                <ul class="tree__children">
                    {children.into_iter().map(tree_node).collect_view()}
                </ul>
            })}
        </li>
    }
    .into_any()
}

fn tree_summary(tree: HierarchyResponse) -> impl IntoView {
    let count = tree.descendant_count();
    let root = node_title(&tree.entity_type, tree.entity_id, &tree.entity_name);
    let parents = tree
        .parents
        .iter()
        .map(|p| node_title(&p.entity_type, p.id, &p.name))
        .collect::<Vec<_>>();

    view! {
        <div class="tree">
            {(!parents.is_empty()).then(|| view! {
                <p class="tree__parents">{format!("Родители: {}", parents.join(" / "))}</p>
            })}
            <p class="tree__root">
                {icon("tree")}
                {root}
                <span class="tree__count">{format!(" (дочерних объектов: {})", count)}</span>
            </p>
            <ul class="tree__children">
                {tree.children.into_iter().map(tree_node).collect_view()}
            </ul>
        </div>
    }
}

/// Форма просмотра иерархии объекта
#[component]
pub fn HierarchyViewer() -> impl IntoView {
    let ctx = use_admin_context();
    let entity_type = RwSignal::new(EntityKind::Factories.hierarchy_type().to_string());
    let entity_id = RwSignal::new(String::new());
    let state = RwSignal::new(HierarchyView::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let id = match parse_entity_id(&entity_id.get_untracked()) {
            Ok(id) => id,
            Err(message) => {
                state.set(HierarchyView::Failed(message));
                return;
            }
        };
        let kind = entity_type.get_untracked();
        state.set(HierarchyView::Loading);

        wasm_bindgen_futures::spawn_local(async move {
            match fetch_hierarchy(&ctx.config(), &kind, id).await {
                Ok(value) => {
                    let json = serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
                    let tree = serde_json::from_value::<HierarchyResponse>(value).ok();
                    state.set(HierarchyView::Loaded { json, tree });
                }
                Err(e) => state.set(HierarchyView::Failed(e.to_string())),
            }
        });
    };

    view! {
        <section class="entity-panel hierarchy">
            <h2 class="entity-panel__title">
                {icon("tree")}
                "Иерархия"
            </h2>
            <form id=FORM_ID class="entity-form entity-form--inline" on:submit=on_submit>
                <div class="form__group">
                    <label class="form__label" for="entity_type_hierarchy">"Тип объекта"</label>
                    <select
                        id="entity_type_hierarchy"
                        name="entity_type_hierarchy"
                        class="form__select"
                        on:change=move |ev| entity_type.set(event_target_value(&ev))
                    >
                        {EntityKind::all()
                            .into_iter()
                            .map(|kind| {
                                let value = kind.hierarchy_type();
                                view! {
                                    <option
                                        value=value
                                        prop:selected=move || entity_type.with(|t| t == value)
                                    >
                                        {kind.element_name()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="form__group">
                    <label class="form__label" for="entity_id_hierarchy">"ID объекта"</label>
                    <input
                        id="entity_id_hierarchy"
                        name="entity_id_hierarchy"
                        type="number"
                        class="form__input"
                        prop:value=move || entity_id.get()
                        on:input=move |ev| entity_id.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="button button--primary">
                    {icon("search")}
                    "Показать"
                </button>
            </form>
            <div id=RESPONSE_ID class="response">
                {move || match state.get() {
                    HierarchyView::Idle => view! { <></> }.into_any(),
                    HierarchyView::Loading => view! {
                        <p class="response__loading">"Загрузка..."</p>
                    }.into_any(),
                    HierarchyView::Failed(message) => view! {
                        <p class="response__error-text">{message}</p>
                    }.into_any(),
                    HierarchyView::Loaded { json, tree } => view! {
                        {tree.map(tree_summary)}
                        <pre class="response__json">{json}</pre>
                    }.into_any(),
                }}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entity_id() {
        assert_eq!(parse_entity_id(" 12 "), Ok(12));
        assert_eq!(parse_entity_id(""), Err("Введите ID объекта".to_string()));
        assert!(parse_entity_id("abc").is_err());
    }

    #[test]
    fn test_node_title_uses_russian_type() {
        assert_eq!(node_title("section", 2, "Сборка"), "Участок #2: Сборка");
        assert_eq!(node_title("unknown", 1, "X"), "unknown #1: X");
    }
}
