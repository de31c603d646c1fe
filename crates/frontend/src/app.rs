use contracts::domain::common::EntityKind;
use leptos::prelude::*;

use crate::layout::admin_page::{AdminPage, MarkupIssues};
use crate::shared::config::AppConfig;
use crate::shared::dom_validator::validate_page;
use crate::shared::state::panel_registry::PanelRegistry;
use crate::shared::state::AdminContext;

#[component]
pub fn App() -> impl IntoView {
    // Config, entity cache and per-kind panel state for the whole page
    let ctx = AdminContext::new(AppConfig::load(), PanelRegistry::new(&EntityKind::all()));
    provide_context(ctx);

    let issues = MarkupIssues(RwSignal::new(Vec::new()));
    provide_context(issues);

    // Effects run after the view is mounted, so every id is in the document by now
    Effect::new(move |_| {
        let report = validate_page(&ctx.panels.kinds());
        issues.0.set(report.messages());
    });

    view! {
        <AdminPage />
    }
}
