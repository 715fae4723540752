use super::list::{markup_value, scope_label};
use crate::shared::components::detail_grid::DetailField;
use crate::shared::detail_page::entity_detail_page;
use contracts::domain::a008_markup_rule::aggregate::MarkupRule;
use contracts::shared::format::format_bdt;
use leptos::prelude::*;

/// Sample fare the detail page applies the rule to
const SAMPLE_FARE: f64 = 10000.0;

fn fields(r: &MarkupRule) -> Vec<DetailField> {
    vec![
        ("নিয়মের নাম", r.name.clone()),
        ("এয়ারলাইন", scope_label(r.airline.as_deref())),
        ("রুট", scope_label(r.route.as_deref())),
        ("ধরন", r.markup_type.display_name().to_string()),
        ("মার্কআপ", markup_value(r)),
        ("৳১০,০০০ ভাড়ায় মার্কআপ", format_bdt(r.markup_for(SAMPLE_FARE))),
        ("স্ট্যাটাস", if r.is_active { "সক্রিয়" } else { "নিষ্ক্রিয়" }.to_string()),
    ]
}

#[component]
pub fn MarkupRuleDetails() -> impl IntoView {
    entity_detail_page::<MarkupRule>(fields, None)
}
