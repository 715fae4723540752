use leptos::prelude::*;

#[component]
pub fn Checkbox(
    #[prop(into)]
    label: String,
    #[prop(into)]
    checked: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__checkbox-wrapper">
                <input
                    type="checkbox"
                    class="form__checkbox"
                    prop:checked=move || checked.get()
                    on:change=move |ev| on_change.run(event_target_checked(&ev))
                />
                <span class="form__checkbox-label">{label}</span>
            </label>
        </div>
    }
}
