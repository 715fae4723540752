//! Application top bar: sidebar toggle, title and the global search box

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use contracts::shared::search::is_searchable;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

/// `/search?q=...`
pub fn search_href(text: &str) -> String {
    format!("/search?q={}", urlencoding::encode(text.trim()))
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let navigate = use_navigate();
    let text = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let query = text.get_untracked();
        if is_searchable(&query) {
            navigate(&search_href(&query), NavigateOptions::default());
        }
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "মেনু লুকান" } else { "মেনু দেখান" }
                >
                    {icon("menu")}
                </button>
                <a class="top-header__title" href="/">"ট্রাভেল ইআরপি"</a>
            </div>
            <form class="top-header__search" on:submit=submit>
                {icon("search")}
                <input
                    class="top-header__search-input"
                    type="search"
                    placeholder="গ্রাহক, এজেন্ট, PNR খুঁজুন..."
                    prop:value=move || text.get()
                    on:input=move |ev| text.set(event_target_value(&ev))
                />
            </form>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_href() {
        assert_eq!(search_href(" ABC123 "), "/search?q=ABC123");
        assert_eq!(search_href("a b"), "/search?q=a%20b");
    }
}
