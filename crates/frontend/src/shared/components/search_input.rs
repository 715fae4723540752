use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Delay between the last keystroke and the search
const DEBOUNCE_MS: u32 = 350;

/// Text box that reports its value after the user stops typing
///
/// Only the last keystroke of a burst fires `on_search`; Enter fires at once.
#[component]
pub fn SearchInput(
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    initial: String,
    on_search: Callback<String>,
) -> impl IntoView {
    let text = RwSignal::new(initial);
    let generation = RwSignal::new(0u64);

    let schedule = move |value: String| {
        text.set(value.clone());
        generation.update(|g| *g += 1);
        let mine = generation.get_untracked();
        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if generation.get_untracked() == mine {
                on_search.run(value);
            }
        });
    };

    view! {
        <div class="search-input">
            {icon("search")}
            <input
                type="search"
                class="search-input__field"
                placeholder=move || placeholder.get().unwrap_or_else(|| "খুঁজুন...".to_string())
                prop:value=move || text.get()
                on:input=move |ev| schedule(event_target_value(&ev))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        generation.update(|g| *g += 1);
                        on_search.run(text.get_untracked());
                    }
                }
            />
        </div>
    }
}
