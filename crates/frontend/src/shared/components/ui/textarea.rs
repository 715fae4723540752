use super::{field_error, field_label};
use leptos::prelude::*;

#[component]
pub fn Textarea(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)]
    rows: Option<u32>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="form__group form__group--wide">
            {field_label(label, false)}
            <textarea
                class="form__textarea"
                rows=rows.unwrap_or(3)
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
            {field_error(error)}
        </div>
    }
}
