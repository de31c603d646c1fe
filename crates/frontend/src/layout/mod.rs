pub mod admin_page;

use leptos::prelude::*;

/// Page shell: title bar and a single content column
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |               Content                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header class="top-header">
                <h1 class="top-header__title">{title}</h1>
            </header>
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
