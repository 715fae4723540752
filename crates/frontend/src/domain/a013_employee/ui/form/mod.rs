use crate::shared::detail_page::route_id;
use crate::shared::form::{entity_form_page, FormViewModel};
use crate::shared::list_page::enum_options;
use contracts::domain::a013_employee::aggregate::Employee;
use contracts::enums::ActiveStatus;
use leptos::prelude::*;

#[component]
pub fn EmployeeForm() -> impl IntoView {
    let vm = FormViewModel::<Employee>::new(route_id().get_untracked());
    let statuses = enum_options(ActiveStatus::all(), ActiveStatus::code, ActiveStatus::display_name);

    entity_form_page(vm, move || {
        view! {
            {vm.text("নাম", "name", |d| d.name.clone(), |d, v| d.name = v)}
            {vm.optional("পদবি", "designation", |d| d.designation.clone(), |d, v| d.designation = v)}
            {vm.optional("বিভাগ", "department", |d| d.department.clone(), |d, v| d.department = v)}
            {vm.text_input("ফোন", "phone", "tel", true, |d| d.phone.clone(), |d, v| d.phone = v)}
            {vm.optional_input("ইমেইল", "email", "email", |d| d.email.clone(), |d, v| d.email = v)}
            {vm.date("যোগদানের তারিখ", "joiningDate", false, |d| d.joining_date, |d, v| d.joining_date = v)}
            {vm.amount("বেতন (৳)", "salary", false, |d| d.salary, |d, v| d.salary = v)}
            {vm.select(
                "স্ট্যাটাস",
                "status",
                statuses.clone(),
                |d| d.status.code().to_string(),
                |d, v| d.status = ActiveStatus::from_code(v).unwrap_or_default(),
            )}
        }
        .into_any()
    })
}
