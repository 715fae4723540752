use crate::shared::list_page::{entity_list_page, enum_options, Column, FilterParam, ListFilter};
use contracts::domain::a012_hotel_contract::aggregate::{ContractStatus, HotelCity, HotelContract};
use contracts::shared::format::{format_date_opt, format_sar, to_bengali_digits};
use leptos::prelude::*;

pub fn status_badge(status: ContractStatus) -> (&'static str, &'static str) {
    let variant = match status {
        ContractStatus::Draft => "warning",
        ContractStatus::Confirmed => "success",
        ContractStatus::Cancelled => "error",
    };
    (status.display_name(), variant)
}

#[component]
pub fn HotelContractList() -> impl IntoView {
    entity_list_page::<HotelContract>(
        vec![
            Column::text("হোটেল", |c: &HotelContract| c.hotel_name.clone()),
            Column::text("শহর", |c: &HotelContract| c.city.display_name().to_string()),
            Column::text("চেক-ইন", |c: &HotelContract| format_date_opt(c.check_in)),
            Column::text("চেক-আউট", |c: &HotelContract| format_date_opt(c.check_out)),
            Column::text("রুম × রাত", |c: &HotelContract| {
                to_bengali_digits(&format!("{} × {}", c.rooms, c.nights))
            }),
            Column::text("মোট (SAR)", |c: &HotelContract| format_sar(c.total_sar)),
            Column::money("মোট (৳)", |c: &HotelContract| c.total_bdt),
            Column::money("বকেয়া", |c: &HotelContract| c.due_amount),
            Column::badge("স্ট্যাটাস", |c: &HotelContract| status_badge(c.status)),
        ],
        vec![
            ListFilter::new(
                FilterParam::Kind,
                "শহর",
                enum_options(HotelCity::all(), HotelCity::code, HotelCity::display_name),
            ),
            ListFilter::new(
                FilterParam::Status,
                "স্ট্যাটাস",
                enum_options(ContractStatus::all(), ContractStatus::code, ContractStatus::display_name),
            ),
        ],
    )
}
