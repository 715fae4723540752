use crate::shared::components::detail_grid::DetailField;
use crate::shared::detail_page::entity_detail_page;
use contracts::domain::a010_air_refund::aggregate::AirRefund;
use contracts::shared::format::{format_bdt, format_date_opt, or_na};
use leptos::prelude::*;

fn fields(r: &AirRefund) -> Vec<DetailField> {
    vec![
        ("যাত্রীর নাম", r.passenger_name.clone()),
        ("PNR", r.pnr.clone()),
        ("টিকেট নম্বর", or_na(r.ticket_number.as_deref())),
        ("এয়ারলাইন", or_na(r.airline.as_deref())),
        ("আসল ভাড়া", format_bdt(r.actual_fare)),
        ("ব্যবহৃত অংশ", format_bdt(r.used_amount)),
        ("সার্ভিস চার্জ", format_bdt(r.service_charge)),
        ("জরিমানা", format_bdt(r.penalty)),
        ("রিফান্ডের পরিমাণ", format_bdt(r.refund_amount)),
        ("রিফান্ডের তারিখ", format_date_opt(r.refund_date)),
        ("স্ট্যাটাস", r.status.display_name().to_string()),
    ]
}

#[component]
pub fn AirRefundDetails() -> impl IntoView {
    entity_detail_page::<AirRefund>(fields, None)
}
