use crate::shared::components::detail_grid::DetailField;
use crate::shared::detail_page::entity_detail_page;
use contracts::domain::a003_customer::aggregate::Customer;
use contracts::shared::format::{format_bdt, or_na};
use leptos::prelude::*;

fn fields(c: &Customer) -> Vec<DetailField> {
    vec![
        ("নাম", c.name.clone()),
        ("ধরন", c.customer_type.display_name().to_string()),
        ("ফোন", c.phone.clone()),
        ("ইমেইল", or_na(c.email.as_deref())),
        ("পাসপোর্ট নম্বর", or_na(c.passport_number.as_deref())),
        ("প্যাকেজ", or_na(c.package_name.as_deref())),
        ("পরিশোধিত", format_bdt(c.paid_amount)),
        ("বকেয়া", format_bdt(c.due_amount)),
        ("মোট প্যাকেজ মূল্য", format_bdt(c.total_amount())),
        ("ঠিকানা", or_na(c.address.as_deref())),
        ("স্ট্যাটাস", c.status.display_name().to_string()),
    ]
}

#[component]
pub fn CustomerDetails() -> impl IntoView {
    entity_detail_page::<Customer>(fields, None)
}
