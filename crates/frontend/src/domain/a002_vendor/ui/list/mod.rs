use crate::shared::list_page::{entity_list_page, enum_options, Column, FilterParam, ListFilter};
use contracts::domain::a002_vendor::aggregate::Vendor;
use contracts::enums::ActiveStatus;
use contracts::shared::format::or_na;
use leptos::prelude::*;

/// (label, badge variant) of a party status
pub fn active_badge(status: ActiveStatus) -> (&'static str, &'static str) {
    match status {
        ActiveStatus::Active => (status.display_name(), "success"),
        ActiveStatus::Inactive => (status.display_name(), "neutral"),
    }
}

/// Status filter of vendor, agent and customer lists
pub fn active_filter() -> ListFilter {
    ListFilter::new(
        FilterParam::Status,
        "স্ট্যাটাস",
        enum_options(ActiveStatus::all(), ActiveStatus::code, ActiveStatus::display_name),
    )
}

#[component]
pub fn VendorList() -> impl IntoView {
    entity_list_page::<Vendor>(
        vec![
            Column::text("ভেন্ডরের নাম", |v: &Vendor| v.name.clone()),
            Column::text("ট্রেড নাম", |v: &Vendor| or_na(v.trade_name.as_deref())),
            Column::text("ফোন", |v: &Vendor| v.phone.clone()),
            Column::money("পরিশোধিত", |v: &Vendor| v.paid_amount),
            Column::money("বকেয়া", |v: &Vendor| v.due_amount),
            Column::badge("স্ট্যাটাস", |v: &Vendor| active_badge(v.status)),
        ],
        vec![active_filter()],
    )
}
