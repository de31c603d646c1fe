use leptos::prelude::*;

/// Control used for a text-like field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextWidget {
    Line,
    Number,
    /// Multi-line with the given number of rows
    Area(u32),
}

/// Labelled text input bound to a form value
///
/// The value is bound as a DOM property, so resetting the signal clears
/// what the user typed.
#[component]
pub fn TextField(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)]
    id: String,
    #[prop(into)]
    name: String,
    widget: TextWidget,
    #[prop(optional, into)]
    placeholder: String,
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let control = match widget {
        TextWidget::Area(rows) => view! {
            <textarea
                id=id.clone()
                name=name
                class="form__textarea"
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any(),
        TextWidget::Line | TextWidget::Number => view! {
            <input
                id=id.clone()
                name=name
                class="form__input"
                type=if widget == TextWidget::Number { "number" } else { "text" }
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any(),
    };

    view! {
        <div class="form__group">
            <label class="form__label" for=id>{label}</label>
            {control}
        </div>
    }
}
