use crate::shared::detail_page::route_id;
use crate::shared::form::{computed_field, entity_form_page, FormViewModel};
use crate::shared::list_page::enum_options;
use contracts::domain::a003_customer::aggregate::{Customer, CustomerType};
use contracts::enums::ActiveStatus;
use contracts::shared::format::format_bdt;
use leptos::prelude::*;

#[component]
pub fn CustomerForm() -> impl IntoView {
    let vm = FormViewModel::<Customer>::new(route_id().get_untracked());
    let types = enum_options(CustomerType::all(), CustomerType::code, CustomerType::display_name);
    let statuses = enum_options(ActiveStatus::all(), ActiveStatus::code, ActiveStatus::display_name);
    let total = Signal::derive(move || format_bdt(vm.form.with(|d| d.total_amount())));

    entity_form_page(vm, move || {
        view! {
            {vm.text("গ্রাহকের নাম", "name", |d| d.name.clone(), |d, v| d.name = v)}
            {vm.text_input("ফোন", "phone", "tel", true, |d| d.phone.clone(), |d, v| d.phone = v)}
            {vm.optional_input("ইমেইল", "email", "email", |d| d.email.clone(), |d, v| d.email = v)}
            {vm.optional(
                "পাসপোর্ট নম্বর",
                "passportNumber",
                |d| d.passport_number.clone(),
                |d, v| d.passport_number = v.map(|p| p.to_uppercase()),
            )}
            {vm.select(
                "ধরন",
                "customerType",
                types.clone(),
                |d| d.customer_type.code().to_string(),
                |d, v| d.customer_type = CustomerType::from_code(v).unwrap_or_default(),
            )}
            {vm.optional("প্যাকেজ", "packageName", |d| d.package_name.clone(), |d, v| d.package_name = v)}
            {vm.amount("পরিশোধিত (৳)", "paidAmount", false, |d| d.paid_amount, |d, v| d.paid_amount = v)}
            {vm.amount("বকেয়া (৳)", "dueAmount", false, |d| d.due_amount, |d, v| d.due_amount = v)}
            {computed_field("মোট প্যাকেজ মূল্য", total)}
            {vm.select(
                "স্ট্যাটাস",
                "status",
                statuses.clone(),
                |d| d.status.code().to_string(),
                |d, v| d.status = ActiveStatus::from_code(v).unwrap_or_default(),
            )}
            {vm.textarea("ঠিকানা", "address", |d| d.address.clone(), |d, v| d.address = v)}
        }
        .into_any()
    })
}
