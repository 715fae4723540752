use crate::shared::detail_page::route_id;
use crate::shared::form::{entity_form_page, FormViewModel};
use contracts::domain::a009_expense_category::aggregate::ExpenseCategory;
use leptos::prelude::*;

#[component]
pub fn ExpenseCategoryForm() -> impl IntoView {
    let vm = FormViewModel::<ExpenseCategory>::new(route_id().get_untracked());

    entity_form_page(vm, move || {
        view! {
            {vm.text("ক্যাটাগরির নাম", "name", |d| d.name.clone(), |d, v| d.name = v)}
            {vm.optional("আইকন (ইমোজি)", "icon", |d| d.icon.clone(), |d, v| d.icon = v)}
            {vm.amount("মাসিক বাজেট (৳)", "monthlyBudget", false, |d| d.monthly_budget, |d, v| d.monthly_budget = v)}
            {vm.textarea("বিবরণ", "description", |d| d.description.clone(), |d, v| d.description = v)}
        }
        .into_any()
    })
}
