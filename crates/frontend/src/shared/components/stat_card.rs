use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::Card;

/// Dashboard tile: icon, label, a preformatted value and an optional hint
#[component]
pub fn StatCard(
    #[prop(into)]
    label: String,
    icon_name: &'static str,
    #[prop(into)]
    value: Signal<String>,
    /// "success", "warning", "error" or neutral (default)
    #[prop(optional)]
    tone: Option<&'static str>,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    let class = match tone {
        Some("success") => "stat-card stat-card--success",
        Some("warning") => "stat-card stat-card--warning",
        Some("error") => "stat-card stat-card--error",
        _ => "stat-card",
    };

    view! {
        <Card class=class>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </Card>
    }
}
