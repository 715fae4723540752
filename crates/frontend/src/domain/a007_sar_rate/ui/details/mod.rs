use super::list::rate_label;
use crate::shared::components::detail_grid::DetailField;
use crate::shared::detail_page::entity_detail_page;
use contracts::domain::a007_sar_rate::aggregate::SarRate;
use contracts::shared::format::{format_bdt, format_date_opt, or_na};
use leptos::prelude::*;

fn fields(r: &SarRate) -> Vec<DetailField> {
    vec![
        ("তারিখ", format_date_opt(r.date)),
        ("১ SAR", rate_label(r.rate)),
        ("১,০০০ SAR", format_bdt(r.to_bdt(1000.0))),
        ("উৎস", or_na(r.source.as_deref())),
        ("নোট", or_na(r.notes.as_deref())),
    ]
}

#[component]
pub fn SarRateDetails() -> impl IntoView {
    entity_detail_page::<SarRate>(fields, None)
}
