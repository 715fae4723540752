use crate::shared::detail_page::route_id;
use crate::shared::form::{computed_field, entity_form_page, FormViewModel};
use crate::shared::list_page::enum_options;
use contracts::domain::a006_investment::aggregate::{Investment, InvestmentStatus, InvestmentType};
use contracts::shared::calc::round2;
use contracts::shared::format::format_bdt;
use leptos::prelude::*;

#[component]
pub fn InvestmentForm() -> impl IntoView {
    let vm = FormViewModel::<Investment>::new(route_id().get_untracked());
    let types = enum_options(InvestmentType::all(), InvestmentType::code, InvestmentType::display_name);
    let statuses = enum_options(InvestmentStatus::all(), InvestmentStatus::code, InvestmentStatus::display_name);
    let profit = Signal::derive(move || {
        vm.form.with(|d| {
            if d.return_amount > 0.0 {
                format_bdt(round2(d.return_amount - d.amount))
            } else {
                format_bdt(0.0)
            }
        })
    });

    entity_form_page(vm, move || {
        view! {
            {vm.text("বিনিয়োগের নাম", "name", |d| d.name.clone(), |d, v| d.name = v)}
            {vm.select(
                "ধরন",
                "investmentType",
                types.clone(),
                |d| d.investment_type.code().to_string(),
                |d, v| d.investment_type = InvestmentType::from_code(v).unwrap_or_default(),
            )}
            {vm.amount("পরিমাণ (৳)", "amount", true, |d| d.amount, |d, v| d.amount = v)}
            {vm.amount("রিটার্ন (৳)", "returnAmount", false, |d| d.return_amount, |d, v| d.return_amount = v)}
            {computed_field("নিট লাভ", profit)}
            {vm.date("বিনিয়োগের তারিখ", "investmentDate", true, |d| d.investment_date, |d, v| d.investment_date = v)}
            {vm.date("মেয়াদপূর্তির তারিখ", "maturityDate", false, |d| d.maturity_date, |d, v| d.maturity_date = v)}
            {vm.select(
                "স্ট্যাটাস",
                "status",
                statuses.clone(),
                |d| d.status.code().to_string(),
                |d, v| d.status = InvestmentStatus::from_code(v).unwrap_or_default(),
            )}
            {vm.textarea("নোট", "notes", |d| d.notes.clone(), |d, v| d.notes = v)}
        }
        .into_any()
    })
}
