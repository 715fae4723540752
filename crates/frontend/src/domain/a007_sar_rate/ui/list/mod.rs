use crate::shared::list_page::{entity_list_page, Column};
use contracts::domain::a007_sar_rate::aggregate::SarRate;
use contracts::shared::format::{format_date_opt, format_number_bn, or_na};
use leptos::prelude::*;

/// `৳২৮.৫০` per riyal
pub fn rate_label(rate: f64) -> String {
    format!("৳{}", format_number_bn(rate))
}

#[component]
pub fn SarRateList() -> impl IntoView {
    entity_list_page::<SarRate>(
        vec![
            Column::text("তারিখ", |r: &SarRate| format_date_opt(r.date)),
            Column::text("১ SAR", |r: &SarRate| rate_label(r.rate)),
            Column::text("উৎস", |r: &SarRate| or_na(r.source.as_deref())),
            Column::text("নোট", |r: &SarRate| or_na(r.notes.as_deref())),
        ],
        Vec::new(),
    )
}
