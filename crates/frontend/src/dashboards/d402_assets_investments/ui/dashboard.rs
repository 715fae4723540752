use crate::dashboards::common::{category_table, count_label, dashboard_body, DashboardState};
use crate::dashboards::d402_assets_investments::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use contracts::dashboards::d402_assets_investments::dto::AssetsInvestmentsSummary;
use contracts::shared::format::format_bdt;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn summary_view(s: AssetsInvestmentsSummary) -> impl IntoView {
    let profit_tone = if s.investments.net_profit < 0.0 { "error" } else { "success" };
    let asset_hint = format!(
        "{} সক্রিয়, {} বাতিল",
        count_label(s.assets.active_count),
        count_label(s.assets.disposed_count)
    );
    let investment_hint = format!("{} সক্রিয়", count_label(s.investments.active_count));

    view! {
        <div class="stat-grid">
            <StatCard label="মোট সম্পদ ও বিনিয়োগ" icon_name="briefcase" value=format_bdt(s.total_holdings) />
            <StatCard
                label=format!("সম্পদ ({})", count_label(s.assets.count))
                icon_name="building"
                value=format_bdt(s.assets.total_value)
                subtitle=asset_hint
            />
            <StatCard
                label=format!("বিনিয়োগ ({})", count_label(s.investments.count))
                icon_name="trending-up"
                value=format_bdt(s.investments.total_invested)
                subtitle=investment_hint
            />
            <StatCard label="মোট রিটার্ন" icon_name="wallet" value=format_bdt(s.investments.total_returns) />
            <StatCard label="নিট লাভ" icon_name="bar-chart" tone=profit_tone value=format_bdt(s.investments.net_profit) />
        </div>
        <div class="dashboard__panels">
            {category_table("ধরন অনুযায়ী সম্পদ", s.assets.by_type)}
            {category_table("ধরন অনুযায়ী বিনিয়োগ", s.investments.by_type)}
        </div>
    }
}

#[component]
pub fn AssetsInvestmentsDashboard() -> impl IntoView {
    let state = RwSignal::new(DashboardState::<AssetsInvestmentsSummary>::Loading);

    let load = move || {
        state.set(DashboardState::Loading);
        spawn_local(async move {
            match api::load_summary().await {
                Ok(summary) => state.set(DashboardState::Ready(summary)),
                Err(e) => {
                    log::error!("Failed to load assets dashboard: {}", e);
                    state.set(DashboardState::Failed(e));
                }
            }
        });
    };
    load();

    view! {
        <div class="page dashboard">
            <PageHeader title="সম্পদ ও বিনিয়োগ ড্যাশবোর্ড".to_string()>
                <button class="button button--secondary" on:click=move |_| load()>
                    {icon("refresh")}
                    "রিফ্রেশ"
                </button>
            </PageHeader>
            {dashboard_body(state, load, summary_view)}
        </div>
    }
}
