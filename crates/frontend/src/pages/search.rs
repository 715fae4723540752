//! Global search results page (`/search?q=`)

use crate::shared::api_utils;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_box::{EmptyBox, ErrorBox, LoadingBox};
use contracts::domain::a001_asset::aggregate::Asset;
use contracts::domain::a002_vendor::aggregate::Vendor;
use contracts::domain::a003_customer::aggregate::Customer;
use contracts::domain::a004_air_agent::aggregate::AirAgent;
use contracts::domain::a005_gds_record::aggregate::GdsRecord;
use contracts::domain::a006_investment::aggregate::Investment;
use contracts::domain::a007_sar_rate::aggregate::SarRate;
use contracts::domain::a008_markup_rule::aggregate::MarkupRule;
use contracts::domain::a009_expense_category::aggregate::ExpenseCategory;
use contracts::domain::a010_air_refund::aggregate::AirRefund;
use contracts::domain::a011_air_reissue::aggregate::AirReissue;
use contracts::domain::a012_hotel_contract::aggregate::HotelContract;
use contracts::domain::common::AggregateRoot;
use contracts::shared::search::{is_searchable, SearchHit, MIN_SEARCH_LEN};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;

fn label_of<A: AggregateRoot>(entity: &str) -> Option<&'static str> {
    (A::collection_name() == entity).then(A::element_name)
}

/// UI name of the collection a hit came from
pub fn entity_label(entity: &str) -> String {
    label_of::<Customer>(entity)
        .or_else(|| label_of::<AirAgent>(entity))
        .or_else(|| label_of::<Vendor>(entity))
        .or_else(|| label_of::<AirRefund>(entity))
        .or_else(|| label_of::<AirReissue>(entity))
        .or_else(|| label_of::<HotelContract>(entity))
        .or_else(|| label_of::<Asset>(entity))
        .or_else(|| label_of::<Investment>(entity))
        .or_else(|| label_of::<GdsRecord>(entity))
        .or_else(|| label_of::<SarRate>(entity))
        .or_else(|| label_of::<MarkupRule>(entity))
        .or_else(|| label_of::<ExpenseCategory>(entity))
        .map(str::to_string)
        .unwrap_or_else(|| entity.to_string())
}

#[derive(Debug, Clone, PartialEq)]
enum SearchState {
    TooShort,
    Loading,
    Done(Vec<SearchHit>),
    Failed(String),
}

fn hit_row(hit: SearchHit) -> impl IntoView {
    view! {
        <a class="search-result" href=hit.route>
            <span class="badge badge--primary">{entity_label(&hit.entity)}</span>
            <span class="search-result__title">{hit.title}</span>
            {hit.subtitle.map(|s| view! { <span class="search-result__subtitle">{s}</span> })}
        </a>
    }
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let query = use_query_map();
    let text = Signal::derive(move || query.read().get("q").unwrap_or_default());
    let state = RwSignal::new(SearchState::TooShort);

    let run = move || {
        let q = text.get_untracked();
        if !is_searchable(&q) {
            state.set(SearchState::TooShort);
            return;
        }
        state.set(SearchState::Loading);
        spawn_local(async move {
            let result = api_utils::search(&q).await;
            if text.get_untracked() != q {
                return;
            }
            state.set(match result {
                Ok(response) => SearchState::Done(response.results),
                Err(e) => SearchState::Failed(e),
            });
        });
    };

    Effect::new(move |_| {
        text.track();
        run();
    });

    let title = Signal::derive(move || format!("\"{}\" এর ফলাফল", text.get().trim()));

    view! {
        <div class="page">
            <PageHeader title=title>
                {()}
            </PageHeader>
            {move || match state.get() {
                SearchState::TooShort => view! {
                    <EmptyBox message=format!("কমপক্ষে {} অক্ষর লিখুন", MIN_SEARCH_LEN) />
                }
                .into_any(),
                SearchState::Loading => view! { <LoadingBox /> }.into_any(),
                SearchState::Failed(message) => {
                    view! { <ErrorBox message=message on_retry=Callback::new(move |_| run()) /> }.into_any()
                }
                SearchState::Done(hits) if hits.is_empty() => {
                    view! { <EmptyBox message="কোনো ফলাফল পাওয়া যায়নি" /> }.into_any()
                }
                SearchState::Done(hits) => view! {
                    <div class="search-results">
                        {hits.into_iter().map(hit_row).collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_label() {
        assert_eq!(entity_label("customers"), Customer::element_name());
        assert_eq!(entity_label(AirRefund::collection_name()), AirRefund::element_name());
        assert_eq!(entity_label("unknown"), "unknown");
    }
}
