use crate::shared::detail_page::route_id;
use crate::shared::form::{computed_field, entity_form_page, FormViewModel};
use crate::shared::list_page::enum_options;
use contracts::domain::a012_hotel_contract::aggregate::{ContractStatus, HotelCity, HotelContract};
use contracts::shared::format::{format_bdt, format_sar, to_bengali_digits};
use leptos::prelude::*;

#[component]
pub fn HotelContractForm() -> impl IntoView {
    let vm = FormViewModel::<HotelContract>::new(route_id().get_untracked());
    let cities = enum_options(HotelCity::all(), HotelCity::code, HotelCity::display_name);
    let statuses = enum_options(ContractStatus::all(), ContractStatus::code, ContractStatus::display_name);

    let totals = Memo::new(move |_| vm.form.with(|d| d.totals()));
    let nights = Signal::derive(move || to_bengali_digits(&totals.get().nights.to_string()));
    let total_sar = Signal::derive(move || format_sar(totals.get().total_sar));
    let total_bdt = Signal::derive(move || format_bdt(totals.get().total_bdt));
    let due = Signal::derive(move || format_bdt(totals.get().due_amount));

    entity_form_page(vm, move || {
        view! {
            {vm.text("হোটেলের নাম", "hotelName", |d| d.hotel_name.clone(), |d, v| d.hotel_name = v)}
            {vm.select(
                "শহর",
                "city",
                cities.clone(),
                |d| d.city.code().to_string(),
                |d, v| d.city = HotelCity::from_code(v).unwrap_or_default(),
            )}
            {vm.optional("চুক্তি নম্বর", "contractNumber", |d| d.contract_number.clone(), |d, v| d.contract_number = v)}
            {vm.date("চেক-ইন", "checkIn", true, |d| d.check_in, |d, v| d.check_in = v)}
            {vm.date("চেক-আউট", "checkOut", true, |d| d.check_out, |d, v| d.check_out = v)}
            {computed_field("রাত", nights)}
            {vm.optional("রুমের ধরন", "roomType", |d| d.room_type.clone(), |d, v| d.room_type = v)}
            {vm.integer(
                "রুম সংখ্যা",
                "rooms",
                true,
                |d| d.rooms as i64,
                |d, v| d.rooms = u32::try_from(v).unwrap_or(0),
            )}
            {vm.amount("প্রতি রাতের ভাড়া (SAR)", "ratePerNightSar", true, |d| d.rate_per_night_sar, |d, v| d.rate_per_night_sar = v)}
            {vm.amount("SAR রেট (৳)", "sarRate", true, |d| d.sar_rate, |d, v| d.sar_rate = v)}
            {computed_field("মোট (SAR)", total_sar)}
            {computed_field("মোট (৳)", total_bdt)}
            {vm.amount("পরিশোধিত (৳)", "paidAmount", false, |d| d.paid_amount, |d, v| d.paid_amount = v)}
            {computed_field("বকেয়া", due)}
            {vm.select(
                "স্ট্যাটাস",
                "status",
                statuses.clone(),
                |d| d.status.code().to_string(),
                |d, v| d.status = ContractStatus::from_code(v).unwrap_or_default(),
            )}
            {vm.textarea("নোট", "notes", |d| d.notes.clone(), |d, v| d.notes = v)}
        }
        .into_any()
    })
}
