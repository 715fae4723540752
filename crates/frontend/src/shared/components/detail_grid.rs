use leptos::prelude::*;

/// One label/value row of a detail page
pub type DetailField = (&'static str, String);

/// Read-only two column grid of labelled values
#[component]
pub fn DetailGrid(fields: Vec<DetailField>) -> impl IntoView {
    view! {
        <dl class="detail-grid">
            {fields
                .into_iter()
                .map(|(label, value)| view! {
                    <div class="detail-grid__row">
                        <dt class="detail-grid__label">{label}</dt>
                        <dd class="detail-grid__value">{value}</dd>
                    </div>
                })
                .collect_view()}
        </dl>
    }
}
