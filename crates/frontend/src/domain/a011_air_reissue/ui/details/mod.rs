use crate::shared::components::detail_grid::DetailField;
use crate::shared::detail_page::entity_detail_page;
use contracts::domain::a011_air_reissue::aggregate::AirReissue;
use contracts::shared::format::{format_bdt, format_date_opt, or_na};
use leptos::prelude::*;

fn fields(r: &AirReissue) -> Vec<DetailField> {
    vec![
        ("যাত্রীর নাম", r.passenger_name.clone()),
        ("PNR", r.pnr.clone()),
        ("পুরাতন টিকেট", or_na(r.old_ticket_number.as_deref())),
        ("নতুন টিকেট", or_na(r.new_ticket_number.as_deref())),
        ("ভাড়ার পার্থক্য", format_bdt(r.fare_difference)),
        ("ট্যাক্সের পার্থক্য", format_bdt(r.tax_difference)),
        ("সার্ভিস ফি", format_bdt(r.service_fee)),
        ("জরিমানা", format_bdt(r.penalty)),
        ("মোট", format_bdt(r.total_amount)),
        ("রিইস্যুর তারিখ", format_date_opt(r.reissue_date)),
        ("স্ট্যাটাস", r.status.display_name().to_string()),
    ]
}

#[component]
pub fn AirReissueDetails() -> impl IntoView {
    entity_detail_page::<AirReissue>(fields, None)
}
