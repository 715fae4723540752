use crate::shared::list_page::{entity_list_page, Column};
use contracts::domain::a009_expense_category::aggregate::ExpenseCategory;
use contracts::shared::format::or_na;
use leptos::prelude::*;

#[component]
pub fn ExpenseCategoryList() -> impl IntoView {
    entity_list_page::<ExpenseCategory>(
        vec![
            Column::text("আইকন", |c: &ExpenseCategory| c.icon.clone().unwrap_or_default()),
            Column::text("ক্যাটাগরি", |c: &ExpenseCategory| c.name.clone()),
            Column::text("বিবরণ", |c: &ExpenseCategory| or_na(c.description.as_deref())),
            Column::money("মাসিক বাজেট", |c: &ExpenseCategory| c.monthly_budget),
        ],
        Vec::new(),
    )
}
