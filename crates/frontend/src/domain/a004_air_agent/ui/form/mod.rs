use crate::shared::detail_page::route_id;
use crate::shared::form::{entity_form_page, FormViewModel};
use crate::shared::list_page::enum_options;
use contracts::domain::a004_air_agent::aggregate::AirAgent;
use contracts::enums::ActiveStatus;
use leptos::prelude::*;

#[component]
pub fn AirAgentForm() -> impl IntoView {
    let vm = FormViewModel::<AirAgent>::new(route_id().get_untracked());
    let statuses = enum_options(ActiveStatus::all(), ActiveStatus::code, ActiveStatus::display_name);

    entity_form_page(vm, move || {
        view! {
            {vm.text("এজেন্টের নাম", "name", |d| d.name.clone(), |d, v| d.name = v)}
            {vm.optional("যোগাযোগকারী", "contactPerson", |d| d.contact_person.clone(), |d, v| d.contact_person = v)}
            {vm.text_input("ফোন", "phone", "tel", true, |d| d.phone.clone(), |d, v| d.phone = v)}
            {vm.optional_input("ইমেইল", "email", "email", |d| d.email.clone(), |d, v| d.email = v)}
            {vm.optional("শহর", "city", |d| d.city.clone(), |d, v| d.city = v)}
            {vm.amount("পরিশোধিত (৳)", "paidAmount", false, |d| d.paid_amount, |d, v| d.paid_amount = v)}
            {vm.amount("বকেয়া (৳)", "dueAmount", false, |d| d.due_amount, |d, v| d.due_amount = v)}
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
