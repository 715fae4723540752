use crate::shared::icons::icon;
use leptos::prelude::*;

/// Title row of a page with an optional back link and action buttons
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: Signal<String>,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    /// Route the arrow button returns to
    #[prop(optional, into)]
    back: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                {back.map(|href| view! {
                    <a class="button button--icon page-header__back" href=href title="ফিরে যান">
                        {icon("arrow-left")}
                    </a>
                })}
                <div class="page-header__text">
                    <h1 class="page-header__title">{move || title.get()}</h1>
                    {move || subtitle.get().map(|s| view! { <div class="page-header__subtitle">{s}</div> })}
                </div>
            </div>
            <div class="page-header__actions">{children()}</div>
        </div>
    }
}
