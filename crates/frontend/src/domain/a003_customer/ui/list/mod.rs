use crate::domain::a002_vendor::ui::list::{active_badge, active_filter};
use crate::shared::list_page::{entity_list_page, enum_options, Column, FilterParam, ListFilter};
use contracts::domain::a003_customer::aggregate::{Customer, CustomerType};
use contracts::shared::format::or_na;
use leptos::prelude::*;

#[component]
pub fn CustomerList() -> impl IntoView {
    entity_list_page::<Customer>(
        vec![
            Column::text("নাম", |c: &Customer| c.name.clone()),
            Column::text("ফোন", |c: &Customer| c.phone.clone()),
            Column::text("ধরন", |c: &Customer| c.customer_type.display_name().to_string()),
            Column::text("প্যাকেজ", |c: &Customer| or_na(c.package_name.as_deref())),
            Column::money("পরিশোধিত", |c: &Customer| c.paid_amount),
            Column::money("বকেয়া", |c: &Customer| c.due_amount),
            Column::badge("স্ট্যাটাস", |c: &Customer| active_badge(c.status)),
        ],
        vec![
            ListFilter::new(
                FilterParam::Kind,
                "ধরন",
                enum_options(CustomerType::all(), CustomerType::code, CustomerType::display_name),
            ),
            active_filter(),
        ],
    )
}
