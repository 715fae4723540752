use crate::shared::list_page::{entity_list_page, enum_options, Column, FilterParam, ListFilter};
use contracts::domain::a001_asset::aggregate::{Asset, AssetStatus};
use contracts::shared::format::{format_date_opt, or_na};
use leptos::prelude::*;

/// (label, badge variant) of an asset status
pub fn status_badge(status: AssetStatus) -> (&'static str, &'static str) {
    let variant = match status {
        AssetStatus::Active => "success",
        AssetStatus::Inactive => "warning",
        AssetStatus::Disposed => "neutral",
    };
    (status.display_name(), variant)
}

#[component]
pub fn AssetList() -> impl IntoView {
    entity_list_page::<Asset>(
        vec![
            Column::text("সম্পদের নাম", |a: &Asset| a.name.clone()),
            Column::text("ধরন", |a: &Asset| a.asset_type.clone()),
            Column::text("সরবরাহকারী", |a: &Asset| or_na(a.provider.as_deref())),
            Column::money("মোট মূল্য", |a: &Asset| a.total_paid_amount),
            Column::text("পরিশোধের তারিখ", |a: &Asset| format_date_opt(a.payment_date)),
            Column::badge("স্ট্যাটাস", |a: &Asset| status_badge(a.status)),
        ],
        vec![ListFilter::new(
            FilterParam::Status,
            "স্ট্যাটাস",
            enum_options(AssetStatus::all(), AssetStatus::code, AssetStatus::display_name),
        )],
    )
}
