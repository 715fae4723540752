use crate::domain::a002_vendor::ui::list::{active_badge, active_filter};
use crate::shared::list_page::{entity_list_page, Column};
use contracts::domain::a004_air_agent::aggregate::AirAgent;
use contracts::shared::format::or_na;
use leptos::prelude::*;

#[component]
pub fn AirAgentList() -> impl IntoView {
    entity_list_page::<AirAgent>(
        vec![
            Column::text("এজেন্টের নাম", |a: &AirAgent| a.name.clone()),
            Column::text("যোগাযোগকারী", |a: &AirAgent| or_na(a.contact_person.as_deref())),
            Column::text("ফোন", |a: &AirAgent| a.phone.clone()),
            Column::text("শহর", |a: &AirAgent| or_na(a.city.as_deref())),
            Column::money("পরিশোধিত", |a: &AirAgent| a.paid_amount),
            Column::money("বকেয়া", |a: &AirAgent| a.due_amount),
            Column::badge("স্ট্যাটাস", |a: &AirAgent| active_badge(a.status)),
        ],
        vec![active_filter()],
    )
}
