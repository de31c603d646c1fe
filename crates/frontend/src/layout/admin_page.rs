use leptos::prelude::*;

use crate::domain::a001_factory::ui::FactoryPanel;
use crate::domain::a002_section::ui::SectionPanel;
use crate::domain::a003_equipment::ui::EquipmentPanel;
use crate::layout::Shell;
use crate::projections::p001_hierarchy::ui::HierarchyViewer;

/// Список отсутствующих элементов разметки, заполняется проверкой при старте
#[derive(Clone, Copy)]
pub struct MarkupIssues(pub RwSignal<Vec<String>>);

#[component]
pub fn AdminPage() -> impl IntoView {
    let issues = use_context::<MarkupIssues>().expect("MarkupIssues not found in context");

    view! {
        <Shell title="Управление справочниками">
            {move || {
                let messages = issues.0.get();
                (!messages.is_empty()).then(|| view! {
                    <div class="warning-banner">
                        <p class="warning-banner__title">"Страница собрана не полностью:"</p>
                        <ul>
                            {messages.into_iter().map(|m| view! { <li>{m}</li> }).collect_view()}
                        </ul>
                    </div>
                })
            }}
            <div class="panels">
                <FactoryPanel />
                <SectionPanel />
                <EquipmentPanel />
            </div>
            <HierarchyViewer />
        </Shell>
    }
}
