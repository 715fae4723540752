use crate::shared::list_page::{entity_list_page, enum_options, Column, FilterParam, ListFilter};
use contracts::domain::a006_investment::aggregate::{Investment, InvestmentStatus, InvestmentType};
use contracts::shared::format::format_date_opt;
use leptos::prelude::*;

pub fn status_badge(status: InvestmentStatus) -> (&'static str, &'static str) {
    let variant = match status {
        InvestmentStatus::Active => "success",
        InvestmentStatus::Matured => "primary",
        InvestmentStatus::Closed => "neutral",
    };
    (status.display_name(), variant)
}

#[component]
pub fn InvestmentList() -> impl IntoView {
    entity_list_page::<Investment>(
        vec![
            Column::text("বিনিয়োগের নাম", |i: &Investment| i.name.clone()),
            Column::text("ধরন", |i: &Investment| i.investment_type.display_name().to_string()),
            Column::money("পরিমাণ", |i: &Investment| i.amount),
            Column::money("রিটার্ন", |i: &Investment| i.return_amount),
            Column::money("লাভ", |i: &Investment| i.profit()),
            Column::text("বিনিয়োগের তারিখ", |i: &Investment| format_date_opt(i.investment_date)),
            Column::badge("স্ট্যাটাস", |i: &Investment| status_badge(i.status)),
        ],
        vec![
            ListFilter::new(
                FilterParam::Kind,
                "ধরন",
                enum_options(InvestmentType::all(), InvestmentType::code, InvestmentType::display_name),
            ),
            ListFilter::new(
                FilterParam::Status,
                "স্ট্যাটাস",
                enum_options(InvestmentStatus::all(), InvestmentStatus::code, InvestmentStatus::display_name),
            ),
        ],
    )
}
