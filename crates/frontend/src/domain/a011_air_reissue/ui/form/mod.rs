use crate::shared::detail_page::route_id;
use crate::shared::form::{computed_field, entity_form_page, FormViewModel};
use crate::shared::list_page::enum_options;
use contracts::domain::a011_air_reissue::aggregate::{AirReissue, ReissueStatus};
use contracts::shared::format::format_bdt;
use leptos::prelude::*;

#[component]
pub fn AirReissueForm() -> impl IntoView {
    let vm = FormViewModel::<AirReissue>::new(route_id().get_untracked());
    let statuses = enum_options(ReissueStatus::all(), ReissueStatus::code, ReissueStatus::display_name);
    let total = Signal::derive(move || format_bdt(vm.form.with(|d| d.total_amount())));

    entity_form_page(vm, move || {
        view! {
            {vm.text("যাত্রীর নাম", "passengerName", |d| d.passenger_name.clone(), |d, v| d.passenger_name = v)}
            {vm.text("PNR", "pnr", |d| d.pnr.clone(), |d, v| d.pnr = v.to_uppercase())}
            {vm.optional("পুরাতন টিকেট নম্বর", "oldTicketNumber", |d| d.old_ticket_number.clone(), |d, v| d.old_ticket_number = v)}
            {vm.optional("নতুন টিকেট নম্বর", "newTicketNumber", |d| d.new_ticket_number.clone(), |d, v| d.new_ticket_number = v)}
            {vm.amount("ভাড়ার পার্থক্য (৳)", "fareDifference", false, |d| d.fare_difference, |d, v| d.fare_difference = v)}
            {vm.amount("ট্যাক্সের পার্থক্য (৳)", "taxDifference", false, |d| d.tax_difference, |d, v| d.tax_difference = v)}
            {vm.amount("সার্ভিস ফি (৳)", "serviceFee", false, |d| d.service_fee, |d, v| d.service_fee = v)}
            {vm.amount("জরিমানা (৳)", "penalty", false, |d| d.penalty, |d, v| d.penalty = v)}
            {computed_field("মোট পরিমাণ", total)}
            {vm.date("রিইস্যুর তারিখ", "reissueDate", false, |d| d.reissue_date, |d, v| d.reissue_date = v)}
            {vm.select(
                "স্ট্যাটাস",
                "status",
                statuses.clone(),
                |d| d.status.code().to_string(),
                |d, v| d.status = ReissueStatus::from_code(v).unwrap_or_default(),
            )}
        }
        .into_any()
    })
}
