use crate::shared::list_page::{entity_list_page, enum_options, Column, FilterParam, ListFilter};
use contracts::domain::a011_air_reissue::aggregate::{AirReissue, ReissueStatus};
use contracts::shared::format::{format_date_opt, or_na};
use leptos::prelude::*;

pub fn status_badge(status: ReissueStatus) -> (&'static str, &'static str) {
    let variant = match status {
        ReissueStatus::Pending => "warning",
        ReissueStatus::Confirmed => "primary",
        ReissueStatus::Completed => "success",
        ReissueStatus::Cancelled => "error",
    };
    (status.display_name(), variant)
}

#[component]
pub fn AirReissueList() -> impl IntoView {
    entity_list_page::<AirReissue>(
        vec![
            Column::text("যাত্রীর নাম", |r: &AirReissue| r.passenger_name.clone()),
            Column::text("PNR", |r: &AirReissue| r.pnr.clone()),
            Column::text("নতুন টিকেট", |r: &AirReissue| or_na(r.new_ticket_number.as_deref())),
            Column::money("ভাড়ার পার্থক্য", |r: &AirReissue| r.fare_difference),
            Column::money("মোট", |r: &AirReissue| r.total_amount),
            Column::text("তারিখ", |r: &AirReissue| format_date_opt(r.reissue_date)),
            Column::badge("স্ট্যাটাস", |r: &AirReissue| status_badge(r.status)),
        ],
        vec![ListFilter::new(
            FilterParam::Status,
            "স্ট্যাটাস",
            enum_options(ReissueStatus::all(), ReissueStatus::code, ReissueStatus::display_name),
        )],
    )
}
