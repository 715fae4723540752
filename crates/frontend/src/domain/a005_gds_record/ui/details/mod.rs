use crate::shared::components::detail_grid::DetailField;
use crate::shared::detail_page::entity_detail_page;
use contracts::domain::a005_gds_record::aggregate::GdsRecord;
use contracts::shared::format::{format_bdt, format_number_bn, month_name_bn, or_na};
use leptos::prelude::*;

fn fields(r: &GdsRecord) -> Vec<DetailField> {
    vec![
        ("প্রোভাইডার", r.provider.display_name().to_string()),
        ("পিরিয়ড", r.period()),
        ("মাস", format!("{} {}", month_name_bn(r.month), r.year)),
        ("সেগমেন্ট", format_number_bn(r.segments as f64)),
        ("প্রতি সেগমেন্ট ইনসেনটিভ", format_bdt(r.incentive_per_segment)),
        ("মোট ইনসেনটিভ", format_bdt(r.incentive_amount)),
        ("নোট", or_na(r.notes.as_deref())),
    ]
}

#[component]
pub fn GdsRecordDetails() -> impl IntoView {
    entity_detail_page::<GdsRecord>(fields, None)
}
