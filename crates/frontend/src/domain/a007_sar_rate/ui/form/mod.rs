use crate::shared::detail_page::route_id;
use crate::shared::form::{entity_form_page, FormViewModel};
use contracts::domain::a007_sar_rate::aggregate::SarRate;
use leptos::prelude::*;

#[component]
pub fn SarRateForm() -> impl IntoView {
    let vm = FormViewModel::<SarRate>::new(route_id().get_untracked());

    entity_form_page(vm, move || {
        view! {
            {vm.date("তারিখ", "date", true, |d| d.date, |d, v| d.date = v)}
            {vm.amount("রেট (১ SAR = ৳)", "rate", true, |d| d.rate, |d, v| d.rate = v)}
            {vm.optional("উৎস", "source", |d| d.source.clone(), |d, v| d.source = v)}
            {vm.textarea("নোট", "notes", |d| d.notes.clone(), |d, v| d.notes = v)}
        }
        .into_any()
    })
}
