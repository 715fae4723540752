use crate::shared::components::detail_grid::DetailField;
use crate::shared::detail_page::entity_detail_page;
use contracts::domain::a013_employee::aggregate::Employee;
use contracts::shared::format::{format_bdt, format_date_opt, or_na};
use leptos::prelude::*;

fn fields(e: &Employee) -> Vec<DetailField> {
    vec![
        ("নাম", e.name.clone()),
        ("পদবি", or_na(e.designation.as_deref())),
        ("বিভাগ", or_na(e.department.as_deref())),
        ("ফোন", e.phone.clone()),
        ("ইমেইল", or_na(e.email.as_deref())),
        ("যোগদানের তারিখ", format_date_opt(e.joining_date)),
        ("বেতন", format_bdt(e.salary)),
        ("স্ট্যাটাস", e.status.display_name().to_string()),
    ]
}

#[component]
pub fn EmployeeDetails() -> impl IntoView {
    entity_detail_page::<Employee>(fields, None)
}
