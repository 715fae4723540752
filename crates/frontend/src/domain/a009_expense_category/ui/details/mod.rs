use crate::shared::components::detail_grid::DetailField;
use crate::shared::detail_page::entity_detail_page;
use contracts::domain::a009_expense_category::aggregate::ExpenseCategory;
use contracts::shared::format::{format_bdt, or_na};
use leptos::prelude::*;

fn fields(c: &ExpenseCategory) -> Vec<DetailField> {
    vec![
        ("ক্যাটাগরি", c.name.clone()),
        ("আইকন", or_na(c.icon.as_deref())),
        ("বিবরণ", or_na(c.description.as_deref())),
        ("মাসিক বাজেট", format_bdt(c.monthly_budget)),
    ]
}

#[component]
pub fn ExpenseCategoryDetails() -> impl IntoView {
    entity_detail_page::<ExpenseCategory>(fields, None)
}
