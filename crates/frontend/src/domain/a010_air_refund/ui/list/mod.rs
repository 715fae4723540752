use crate::shared::list_page::{entity_list_page, enum_options, Column, FilterParam, ListFilter};
use contracts::domain::a010_air_refund::aggregate::{AirRefund, RefundStatus};
use contracts::shared::format::{format_date_opt, or_na};
use leptos::prelude::*;

pub fn status_badge(status: RefundStatus) -> (&'static str, &'static str) {
    let variant = match status {
        RefundStatus::Pending => "warning",
        RefundStatus::Approved => "primary",
        RefundStatus::Completed => "success",
        RefundStatus::Rejected => "error",
    };
    (status.display_name(), variant)
}

#[component]
pub fn AirRefundList() -> impl IntoView {
    entity_list_page::<AirRefund>(
        vec![
            Column::text("যাত্রীর নাম", |r: &AirRefund| r.passenger_name.clone()),
            Column::text("PNR", |r: &AirRefund| r.pnr.clone()),
            Column::text("এয়ারলাইন", |r: &AirRefund| or_na(r.airline.as_deref())),
            Column::money("আসল ভাড়া", |r: &AirRefund| r.actual_fare),
            Column::money("রিফান্ড", |r: &AirRefund| r.refund_amount),
            Column::text("তারিখ", |r: &AirRefund| format_date_opt(r.refund_date)),
            Column::badge("স্ট্যাটাস", |r: &AirRefund| status_badge(r.status)),
        ],
        vec![ListFilter::new(
            FilterParam::Status,
            "স্ট্যাটাস",
            enum_options(RefundStatus::all(), RefundStatus::code, RefundStatus::display_name),
        )],
    )
}
