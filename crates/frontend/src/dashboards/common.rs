//! Pieces shared by the dashboards

use crate::shared::components::stat_card::StatCard;
use crate::shared::components::status_box::{ErrorBox, LoadingBox};
use contracts::dashboards::d402_assets_investments::dto::CategoryTotal;
use contracts::dashboards::MoneySummary;
use contracts::shared::format::{format_bdt, format_number_bn, to_bengali_digits};
use leptos::prelude::*;
use thaw::{Card, Table, TableBody, TableCell, TableHeader, TableHeaderCell, TableRow};

/// Dashboard data as seen by the page
#[derive(Debug, Clone)]
pub enum DashboardState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

/// `১২ টি`
pub fn count_label(count: usize) -> String {
    to_bengali_digits(&format!("{} টি", count))
}

/// `৪৫.৫%`
pub fn percent_label(percent: f64) -> String {
    format!("{}%", format_number_bn(percent))
}

/// Paid / due / total cards of a group of accounts
pub fn money_cards(label: &'static str, money: MoneySummary) -> impl IntoView {
    let paid_hint = format!("{} পরিশোধিত", percent_label(money.paid_percent()));
    view! {
        <div class="stat-grid">
            <StatCard
                label=format!("{} ({})", label, count_label(money.count))
                icon_name="wallet"
                value=format_bdt(money.total)
            />
            <StatCard label="পরিশোধিত" icon_name="trending-up" tone="success" value=format_bdt(money.paid) subtitle=paid_hint />
            <StatCard label="বকেয়া" icon_name="alert-triangle" tone="warning" value=format_bdt(money.due) />
        </div>
    }
}

/// Count and amount per category
pub fn category_table(title: &'static str, rows: Vec<CategoryTotal>) -> impl IntoView {
    let body = if rows.is_empty() {
        view! {
            <TableRow><TableCell attr:colspan="3">"কোনো তথ্য নেই"</TableCell></TableRow>
        }
        .into_any()
    } else {
        rows.into_iter()
            .map(|row| {
                view! {
                    <TableRow>
                        <TableCell>{row.label}</TableCell>
                        <TableCell class="table__cell--number">{count_label(row.count)}</TableCell>
                        <TableCell class="table__cell--number">{format_bdt(row.amount)}</TableCell>
                    </TableRow>
                }
            })
            .collect_view()
            .into_any()
    };
    view! {
        <Card class="dashboard__panel">
            <h3 class="dashboard__panel-title">{title}</h3>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"ধরন"</TableHeaderCell>
                        <TableHeaderCell>"সংখ্যা"</TableHeaderCell>
                        <TableHeaderCell>"পরিমাণ"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{body}</TableBody>
            </Table>
        </Card>
    }
}

/// Loading and error branches around a ready dashboard body
pub fn dashboard_body<T, V>(
    state: RwSignal<DashboardState<T>>,
    reload: impl Fn() + Copy + Send + Sync + 'static,
    ready: impl Fn(T) -> V + Send + Sync + 'static,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    V: IntoView + 'static,
{
    move || match state.get() {
        DashboardState::Loading => view! { <LoadingBox /> }.into_any(),
        DashboardState::Failed(message) => {
            view! { <ErrorBox message=message on_retry=Callback::new(move |_| reload()) /> }.into_any()
        }
        DashboardState::Ready(data) => ready(data).into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(count_label(12), "১২ টি");
        assert_eq!(percent_label(45.5), "৪৫.৫%");
    }
}
