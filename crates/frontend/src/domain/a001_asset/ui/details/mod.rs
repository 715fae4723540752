use crate::shared::components::detail_grid::DetailField;
use crate::shared::detail_page::entity_detail_page;
use contracts::domain::a001_asset::aggregate::Asset;
use contracts::shared::format::{format_bdt, format_date_opt, or_na};
use leptos::prelude::*;

fn fields(a: &Asset) -> Vec<DetailField> {
    vec![
        ("সম্পদের নাম", a.name.clone()),
        ("ধরন", a.asset_type.clone()),
        ("সরবরাহকারী", or_na(a.provider.as_deref())),
        ("মোট মূল্য", format_bdt(a.total_paid_amount)),
        ("পরিশোধের তারিখ", format_date_opt(a.payment_date)),
        ("স্ট্যাটাস", a.status.display_name().to_string()),
        ("নোট", or_na(a.notes.as_deref())),
    ]
}

#[component]
pub fn AssetDetails() -> impl IntoView {
    entity_detail_page::<Asset>(fields, None)
}
