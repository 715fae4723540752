use crate::domain::a002_vendor::ui::list::{active_badge, active_filter};
use crate::shared::list_page::{entity_list_page, Column};
use contracts::domain::a013_employee::aggregate::Employee;
use contracts::shared::format::or_na;
use leptos::prelude::*;

#[component]
pub fn EmployeeList() -> impl IntoView {
    entity_list_page::<Employee>(
        vec![
            Column::text("নাম", |e: &Employee| e.name.clone()),
            Column::text("পদবি", |e: &Employee| or_na(e.designation.as_deref())),
            Column::text("বিভাগ", |e: &Employee| or_na(e.department.as_deref())),
            Column::text("ফোন", |e: &Employee| e.phone.clone()),
            Column::money("বেতন", |e: &Employee| e.salary),
            Column::badge("স্ট্যাটাস", |e: &Employee| active_badge(e.status)),
        ],
        vec![active_filter()],
    )
}
