use super::{field_error, field_label};
use leptos::prelude::*;

/// Labelled input with an inline validation message
#[component]
pub fn Input(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    /// "text" (default), "email", "tel", "date", "number"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form__group" class:form__group--invalid=move || error.get().is_some()>
            {field_label(label, required)}
            <input
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {field_error(error)}
        </div>
    }
}
