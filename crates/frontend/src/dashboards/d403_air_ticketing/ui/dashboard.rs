use crate::dashboards::common::{count_label, dashboard_body, money_cards, DashboardState};
use crate::dashboards::d403_air_ticketing::api::{self, AirTicketingData};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use contracts::dashboards::d403_air_ticketing::dto::{AirTicketingSummary, GdsProviderTotal};
use contracts::shared::format::{format_bdt, format_number_bn, to_bengali_digits};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Table, TableBody, TableCell, TableHeader, TableHeaderCell, TableRow};

/// Per-provider rows followed by the total row
fn gds_table(rows: Vec<GdsProviderTotal>, segments: u64, incentive: f64) -> impl IntoView {
    let body = rows
        .into_iter()
        .map(|row| {
            view! {
                <TableRow>
                    <TableCell>{row.provider.display_name()}</TableCell>
                    <TableCell class="table__cell--number">{format_number_bn(row.segments as f64)}</TableCell>
                    <TableCell class="table__cell--number">{format_bdt(row.incentive)}</TableCell>
                </TableRow>
            }
        })
        .collect_view();
    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"প্রোভাইডার"</TableHeaderCell>
                    <TableHeaderCell>"সেগমেন্ট"</TableHeaderCell>
                    <TableHeaderCell>"ইনসেনটিভ"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {body}
                <TableRow class:table__row--total=true>
                    <TableCell>"মোট"</TableCell>
                    <TableCell class="table__cell--number">{format_number_bn(segments as f64)}</TableCell>
                    <TableCell class="table__cell--number">{format_bdt(incentive)}</TableCell>
                </TableRow>
            </TableBody>
        </Table>
    }
}

fn summary_view(s: AirTicketingSummary) -> impl IntoView {
    let refund_hint = format!("{} অপেক্ষমাণ", count_label(s.refunds.pending_count));
    let reissue_hint = format!("{} অপেক্ষমাণ", count_label(s.reissues.pending_count));

    view! {
        <section class="dashboard__section">
            <h2 class="dashboard__section-title">"এজেন্ট ও ভেন্ডর"</h2>
            {money_cards("এজেন্ট", s.agents)}
            {money_cards("ভেন্ডর", s.vendors)}
        </section>
        <section class="dashboard__section">
            <h2 class="dashboard__section-title">"রিফান্ড ও রিইস্যু"</h2>
            <div class="stat-grid">
                <StatCard
                    label=format!("রিফান্ড ({})", count_label(s.refunds.count))
                    icon_name="refresh"
                    value=format_bdt(s.refunds.total_refund)
                    subtitle=refund_hint
                />
                <StatCard label="রিফান্ড চার্জ আয়" icon_name="wallet" tone="success" value=format_bdt(s.refunds.total_charges) />
                <StatCard
                    label=format!("রিইস্যু ({})", count_label(s.reissues.count))
                    icon_name="plane"
                    value=format_bdt(s.reissues.total_amount)
                    subtitle=reissue_hint
                />
            </div>
        </section>
        <section class="dashboard__section">
            <h2 class="dashboard__section-title">"GDS ইনসেনটিভ"</h2>
            {gds_table(s.gds, s.total_segments, s.total_incentive)}
        </section>
    }
}

/// Agents, vendors, refunds, reissues and GDS incentives
#[component]
pub fn AirTicketingDashboard() -> impl IntoView {
    let state = RwSignal::new(DashboardState::<AirTicketingData>::Loading);
    // empty = all years
    let year = RwSignal::new(String::new());

    let load = move || {
        state.set(DashboardState::Loading);
        spawn_local(async move {
            match api::load_data().await {
                Ok(data) => state.set(DashboardState::Ready(data)),
                Err(e) => {
                    log::error!("Failed to load air ticketing dashboard: {}", e);
                    state.set(DashboardState::Failed(e));
                }
            }
        });
    };
    load();

    let years = move || match state.get() {
        DashboardState::Ready(data) => data.gds_years(),
        _ => Vec::new(),
    };

    view! {
        <div class="page dashboard">
            <PageHeader title="এয়ার টিকেটিং ড্যাশবোর্ড".to_string()>
                <select
                    class="form__select"
                    prop:value=move || year.get()
                    on:change=move |ev| year.set(event_target_value(&ev))
                >
                    <option value="">"সকল বছর"</option>
                    {move || {
                        years()
                            .into_iter()
                            .map(|y| view! { <option value=y.to_string()>{to_bengali_digits(&y.to_string())}</option> })
                            .collect_view()
                    }}
                </select>
                <button class="button button--secondary" on:click=move |_| load()>
                    {icon("refresh")}
                    "রিফ্রেশ"
                </button>
            </PageHeader>
            {dashboard_body(state, load, move |data: AirTicketingData| {
                let selected = year.get().parse::<i32>().ok();
                summary_view(data.summary(selected))
            })}
        </div>
    }
}
