use crate::shared::components::detail_grid::DetailField;
use crate::shared::detail_page::entity_detail_page;
use contracts::domain::a002_vendor::aggregate::Vendor;
use contracts::shared::format::{format_bdt, or_na};
use leptos::prelude::*;

fn fields(v: &Vendor) -> Vec<DetailField> {
    vec![
        ("ভেন্ডরের নাম", v.name.clone()),
        ("ট্রেড নাম", or_na(v.trade_name.as_deref())),
        ("যোগাযোগকারী", or_na(v.contact_person.as_deref())),
        ("ফোন", v.phone.clone()),
        ("ইমেইল", or_na(v.email.as_deref())),
        ("ঠিকানা", or_na(v.address.as_deref())),
        ("পরিশোধিত", format_bdt(v.paid_amount)),
        ("বকেয়া", format_bdt(v.due_amount)),
        ("মোট", format_bdt(v.total_amount())),
        ("স্ট্যাটাস", v.status.display_name().to_string()),
    ]
}

#[component]
pub fn VendorDetails() -> impl IntoView {
    entity_detail_page::<Vendor>(fields, None)
}
