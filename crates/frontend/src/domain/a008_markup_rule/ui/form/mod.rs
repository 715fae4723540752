use crate::shared::detail_page::route_id;
use crate::shared::form::{entity_form_page, FormViewModel};
use crate::shared::list_page::enum_options;
use contracts::domain::a008_markup_rule::aggregate::{MarkupRule, MarkupType};
use leptos::prelude::*;

#[component]
pub fn MarkupRuleForm() -> impl IntoView {
    let vm = FormViewModel::<MarkupRule>::new(route_id().get_untracked());
    let types = enum_options(MarkupType::all(), MarkupType::code, MarkupType::display_name);

    entity_form_page(vm, move || {
        view! {
            {vm.text("নিয়মের নাম", "name", |d| d.name.clone(), |d, v| d.name = v)}
            {vm.optional("এয়ারলাইন (খালি = সকল)", "airline", |d| d.airline.clone(), |d, v| d.airline = v)}
            {vm.optional("রুট (খালি = সকল)", "route", |d| d.route.clone(), |d, v| d.route = v)}
            {vm.select(
                "মার্কআপের ধরন",
                "markupType",
                types.clone(),
                |d| d.markup_type.code().to_string(),
                |d, v| d.markup_type = MarkupType::from_code(v).unwrap_or_default(),
            )}
            {vm.amount("মান", "value", true, |d| d.value, |d, v| d.value = v)}
            {vm.checkbox("সক্রিয়", "isActive", |d| d.is_active, |d, v| d.is_active = v)}
        }
        .into_any()
    })
}
