use crate::shared::detail_page::route_id;
use crate::shared::form::{computed_field, entity_form_page, FormViewModel};
use crate::shared::list_page::enum_options;
use contracts::domain::a010_air_refund::aggregate::{AirRefund, RefundStatus};
use contracts::shared::format::format_bdt;
use leptos::prelude::*;

#[component]
pub fn AirRefundForm() -> impl IntoView {
    let vm = FormViewModel::<AirRefund>::new(route_id().get_untracked());
    let statuses = enum_options(RefundStatus::all(), RefundStatus::code, RefundStatus::display_name);
    let refund = Signal::derive(move || format_bdt(vm.form.with(|d| d.refund_amount())));

    entity_form_page(vm, move || {
        view! {
            {vm.text("যাত্রীর নাম", "passengerName", |d| d.passenger_name.clone(), |d, v| d.passenger_name = v)}
            {vm.text("PNR", "pnr", |d| d.pnr.clone(), |d, v| d.pnr = v.to_uppercase())}
            {vm.optional("টিকেট নম্বর", "ticketNumber", |d| d.ticket_number.clone(), |d, v| d.ticket_number = v)}
            {vm.optional("এয়ারলাইন", "airline", |d| d.airline.clone(), |d, v| d.airline = v)}
            {vm.amount("আসল ভাড়া (৳)", "actualFare", true, |d| d.actual_fare, |d, v| d.actual_fare = v)}
            {vm.amount("ব্যবহৃত অংশ (৳)", "usedAmount", false, |d| d.used_amount, |d, v| d.used_amount = v)}
            {vm.amount("সার্ভিস চার্জ (৳)", "serviceCharge", false, |d| d.service_charge, |d, v| d.service_charge = v)}
            {vm.amount("জরিমানা (৳)", "penalty", false, |d| d.penalty, |d, v| d.penalty = v)}
            {computed_field("রিফান্ডের পরিমাণ", refund)}
            {vm.date("রিফান্ডের তারিখ", "refundDate", false, |d| d.refund_date, |d, v| d.refund_date = v)}
            {vm.select(
                "স্ট্যাটাস",
                "status",
                statuses.clone(),
                |d| d.status.code().to_string(),
                |d, v| d.status = RefundStatus::from_code(v).unwrap_or_default(),
            )}
        }
        .into_any()
    })
}
