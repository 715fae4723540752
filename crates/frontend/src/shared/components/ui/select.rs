use super::{field_error, field_label};
use leptos::prelude::*;

/// Labelled select over (value, label) options
#[component]
pub fn Select(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    options: Vec<(String, String)>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="form__group" class:form__group--invalid=move || error.get().is_some()>
            {field_label(label, required)}
            <select
                class="form__select"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(val, text)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! { <option value=val selected=is_selected>{text}</option> }
                    })
                    .collect_view()}
            </select>
            {field_error(error)}
        </div>
    }
}
