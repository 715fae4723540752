use crate::shared::icons::icon;
use contracts::shared::format::to_bengali_digits;
use contracts::shared::list::Pagination;
use leptos::prelude::*;

/// Page sizes offered by the list pages
pub const PAGE_SIZE_OPTIONS: [u64; 4] = [10, 20, 50, 100];

/// "পৃষ্ঠা ২ / ৩ (মোট ২৫)"
pub fn page_summary(p: &Pagination) -> String {
    to_bengali_digits(&format!(
        "পৃষ্ঠা {} / {} (মোট {})",
        p.page,
        p.total_pages.max(1),
        p.total
    ))
}

/// First/previous/next/last buttons and a page size select over a 1-based
/// [`Pagination`]
#[component]
pub fn PaginationControls(
    #[prop(into)]
    pagination: Signal<Pagination>,
    on_page_change: Callback<u64>,
    on_page_size_change: Callback<u64>,
) -> impl IntoView {
    let page = move || pagination.get().page;
    let last = move || pagination.get().total_pages.max(1);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || !pagination.get().has_previous()
                title="প্রথম পৃষ্ঠা"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(page().saturating_sub(1).max(1))
                disabled=move || !pagination.get().has_previous()
                title="আগের পৃষ্ঠা"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">{move || page_summary(&pagination.get())}</span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run((page() + 1).min(last()))
                disabled=move || !pagination.get().has_next()
                title="পরের পৃষ্ঠা"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(last())
                disabled=move || !pagination.get().has_next()
                title="শেষ পৃষ্ঠা"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                prop:value=move || pagination.get().limit.to_string()
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_page_size_change.run(size);
                    }
                }
            >
                {PAGE_SIZE_OPTIONS
                    .iter()
                    .map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || pagination.get().limit == size>
                                {to_bengali_digits(&size.to_string())}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_summary() {
        assert_eq!(page_summary(&Pagination::new(2, 10, 25)), "পৃষ্ঠা ২ / ৩ (মোট ২৫)");
        assert_eq!(page_summary(&Pagination::new(1, 10, 0)), "পৃষ্ঠা ১ / ১ (মোট ০)");
    }
}
