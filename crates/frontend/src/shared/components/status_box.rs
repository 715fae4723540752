//! Loading, empty and error placeholders shared by the pages

use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn LoadingBox() -> impl IntoView {
    view! { <div class="status-box status-box--loading">"লোড হচ্ছে..."</div> }
}

#[component]
pub fn EmptyBox(#[prop(into)] message: String) -> impl IntoView {
    view! { <div class="status-box status-box--empty">{message}</div> }
}

/// Error banner with a retry button
#[component]
pub fn ErrorBox(#[prop(into)] message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="warning-box warning-box--error">
            <span class="warning-box__icon">{icon("alert-triangle")}</span>
            <span class="warning-box__text">{message}</span>
            <button class="button button--secondary" on:click=move |_| on_retry.run(())>
                {icon("refresh")}
                "আবার চেষ্টা করুন"
            </button>
        </div>
    }
}
