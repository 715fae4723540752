use crate::shared::date_utils::current_year_month;
use crate::shared::list_page::{entity_list_page, enum_options, Column, FilterParam, ListFilter};
use contracts::domain::a005_gds_record::aggregate::{GdsProvider, GdsRecord};
use contracts::shared::format::{format_number_bn, month_name_bn};
use leptos::prelude::*;

/// Current year and the four before it, newest first
pub fn recent_years() -> Vec<(String, String)> {
    let (year, _) = current_year_month();
    (0..5)
        .map(|back| {
            let y = (year - back).to_string();
            (y.clone(), y)
        })
        .collect()
}

#[component]
pub fn GdsRecordList() -> impl IntoView {
    entity_list_page::<GdsRecord>(
        vec![
            Column::text("প্রোভাইডার", |r: &GdsRecord| r.provider.display_name().to_string()),
            Column::text("মাস", |r: &GdsRecord| format!("{} {}", month_name_bn(r.month), r.year)),
            Column::text("সেগমেন্ট", |r: &GdsRecord| format_number_bn(r.segments as f64)),
            Column::money("প্রতি সেগমেন্ট", |r: &GdsRecord| r.incentive_per_segment),
            Column::money("মোট ইনসেনটিভ", |r: &GdsRecord| r.incentive_amount),
        ],
        vec![
            ListFilter::new(FilterParam::Year, "বছর", recent_years()),
            ListFilter::new(
                FilterParam::Provider,
                "প্রোভাইডার",
                enum_options(GdsProvider::all(), GdsProvider::code, GdsProvider::display_name),
            ),
        ],
    )
}
