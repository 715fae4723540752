use crate::dashboards::common::{count_label, dashboard_body, money_cards, DashboardState};
use crate::dashboards::d401_hajj_umrah::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use contracts::dashboards::d401_hajj_umrah::dto::HajjUmrahSummary;
use contracts::shared::format::{format_bdt, format_number_bn, format_sar, NOT_AVAILABLE};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn summary_view(s: HajjUmrahSummary) -> impl IntoView {
    let rate = s
        .latest_sar_rate
        .map(|r| format!("৳{}", format_number_bn(r)))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let hotel_hint = format!("{} রুম", format_number_bn(s.hotels.rooms as f64));

    view! {
        <section class="dashboard__section">
            <h2 class="dashboard__section-title">"গ্রাহক"</h2>
            <div class="stat-grid">
                <StatCard label="মোট গ্রাহক" icon_name="users" value=count_label(s.customers.count) />
                <StatCard label="হজ্জ" icon_name="users" value=count_label(s.hajj_count) />
                <StatCard label="ওমরাহ" icon_name="users" value=count_label(s.umrah_count) />
                <StatCard label="সক্রিয়" icon_name="users" tone="success" value=count_label(s.active_count) />
            </div>
            {money_cards("প্যাকেজ মূল্য", s.customers)}
        </section>
        <section class="dashboard__section">
            <h2 class="dashboard__section-title">"হোটেল চুক্তি"</h2>
            <div class="stat-grid">
                <StatCard
                    label="চুক্তি"
                    icon_name="building"
                    value=count_label(s.hotels.contracts)
                    subtitle=hotel_hint
                />
                <StatCard label="মোট (SAR)" icon_name="wallet" value=format_sar(s.hotels.total_sar) />
                <StatCard label="মোট (৳)" icon_name="wallet" value=format_bdt(s.hotels.total_bdt) />
                <StatCard label="সর্বশেষ SAR রেট" icon_name="trending-up" value=rate />
            </div>
            {money_cards("হোটেল পেমেন্ট", s.hotels.money)}
        </section>
    }
}

/// Hajj & Umrah overview: customers, hotel contracts, latest riyal rate
#[component]
pub fn HajjUmrahDashboard() -> impl IntoView {
    let state = RwSignal::new(DashboardState::<HajjUmrahSummary>::Loading);

    let load = move || {
        state.set(DashboardState::Loading);
        spawn_local(async move {
            match api::load_summary().await {
                Ok(summary) => state.set(DashboardState::Ready(summary)),
                Err(e) => {
                    log::error!("Failed to load hajj & umrah dashboard: {}", e);
                    state.set(DashboardState::Failed(e));
                }
            }
        });
    };
    load();

    view! {
        <div class="page dashboard">
            <PageHeader title="হজ্জ ও ওমরাহ ড্যাশবোর্ড".to_string() subtitle="গ্রাহক ও হোটেল চুক্তির সারসংক্ষেপ".to_string()>
                <button class="button button--secondary" on:click=move |_| load()>
                    {icon("refresh")}
                    "রিফ্রেশ"
                </button>
            </PageHeader>
            {dashboard_body(state, load, summary_view)}
        </div>
    }
}
