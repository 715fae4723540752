use crate::shared::detail_page::route_id;
use crate::shared::form::{entity_form_page, FormViewModel};
use crate::shared::list_page::enum_options;
use contracts::domain::a001_asset::aggregate::{Asset, AssetStatus};
use leptos::prelude::*;

/// Add and edit form of an asset (`/assets/add`, `/assets/:id/edit`)
#[component]
pub fn AssetForm() -> impl IntoView {
    let vm = FormViewModel::<Asset>::new(route_id().get_untracked());
    let statuses = enum_options(AssetStatus::all(), AssetStatus::code, AssetStatus::display_name);

    entity_form_page(vm, move || {
        view! {
            {vm.text("সম্পদের নাম", "name", |d| d.name.clone(), |d, v| d.name = v)}
            {vm.text("সম্পদের ধরন", "type", |d| d.asset_type.clone(), |d, v| d.asset_type = v)}
            {vm.optional("সরবরাহকারী", "provider", |d| d.provider.clone(), |d, v| d.provider = v)}
            {vm.amount("মোট মূল্য (৳)", "totalPaidAmount", true, |d| d.total_paid_amount, |d, v| d.total_paid_amount = v)}
            {vm.date("পরিশোধের তারিখ", "paymentDate", true, |d| d.payment_date, |d, v| d.payment_date = v)}
            {vm.select(
                "স্ট্যাটাস",
                "status",
                statuses.clone(),
                |d| d.status.code().to_string(),
                |d, v| d.status = AssetStatus::from_code(v).unwrap_or_default(),
            )}
            {vm.textarea("নোট", "notes", |d| d.notes.clone(), |d, v| d.notes = v)}
        }
        .into_any()
    })
}
