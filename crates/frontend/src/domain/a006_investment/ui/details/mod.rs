use crate::shared::components::detail_grid::DetailField;
use crate::shared::detail_page::entity_detail_page;
use contracts::domain::a006_investment::aggregate::Investment;
use contracts::shared::format::{format_bdt, format_date_opt, or_na};
use leptos::prelude::*;

fn fields(i: &Investment) -> Vec<DetailField> {
    vec![
        ("বিনিয়োগের নাম", i.name.clone()),
        ("ধরন", i.investment_type.display_name().to_string()),
        ("পরিমাণ", format_bdt(i.amount)),
        ("রিটার্ন", format_bdt(i.return_amount)),
        ("নিট লাভ", format_bdt(i.profit())),
        ("বিনিয়োগের তারিখ", format_date_opt(i.investment_date)),
        ("মেয়াদপূর্তির তারিখ", format_date_opt(i.maturity_date)),
        ("স্ট্যাটাস", i.status.display_name().to_string()),
        ("নোট", or_na(i.notes.as_deref())),
    ]
}

#[component]
pub fn InvestmentDetails() -> impl IntoView {
    entity_detail_page::<Investment>(fields, None)
}
