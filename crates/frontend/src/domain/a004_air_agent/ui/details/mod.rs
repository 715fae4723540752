use crate::shared::components::detail_grid::DetailField;
use crate::shared::detail_page::entity_detail_page;
use contracts::domain::a004_air_agent::aggregate::AirAgent;
use contracts::shared::format::{format_bdt, or_na};
use leptos::prelude::*;

fn fields(a: &AirAgent) -> Vec<DetailField> {
    vec![
        ("এজেন্টের নাম", a.name.clone()),
        ("যোগাযোগকারী", or_na(a.contact_person.as_deref())),
        ("ফোন", a.phone.clone()),
        ("ইমেইল", or_na(a.email.as_deref())),
        ("শহর", or_na(a.city.as_deref())),
        ("ঠিকানা", or_na(a.address.as_deref())),
        ("পরিশোধিত", format_bdt(a.paid_amount)),
        ("বকেয়া", format_bdt(a.due_amount)),
        ("মোট", format_bdt(a.total_amount())),
        ("স্ট্যাটাস", a.status.display_name().to_string()),
    ]
}

#[component]
pub fn AirAgentDetails() -> impl IntoView {
    entity_detail_page::<AirAgent>(fields, None)
}
