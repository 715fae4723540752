use crate::shared::detail_page::route_id;
use crate::shared::form::{computed_field, entity_form_page, FormViewModel};
use crate::shared::list_page::enum_options;
use contracts::domain::a005_gds_record::aggregate::{GdsProvider, GdsRecord};
use contracts::shared::format::{format_bdt, month_name_bn};
use leptos::prelude::*;

fn month_options() -> Vec<(String, String)> {
    (1..=12u32)
        .map(|m| (m.to_string(), month_name_bn(m).to_string()))
        .collect()
}

#[component]
pub fn GdsRecordForm() -> impl IntoView {
    let vm = FormViewModel::<GdsRecord>::new(route_id().get_untracked());
    let providers = enum_options(GdsProvider::all(), GdsProvider::code, GdsProvider::display_name);
    let incentive = Signal::derive(move || format_bdt(vm.form.with(|d| d.incentive_amount())));

    entity_form_page(vm, move || {
        view! {
            {vm.select(
                "প্রোভাইডার",
                "provider",
                providers.clone(),
                |d| d.provider.code().to_string(),
                |d, v| d.provider = GdsProvider::from_code(v).unwrap_or_default(),
            )}
            {vm.integer("বছর", "year", true, |d| d.year as i64, |d, v| d.year = year_input(v))}
            {vm.select(
                "মাস",
                "month",
                month_options(),
                |d| d.month.to_string(),
                |d, v| d.month = v.parse().unwrap_or(1),
            )}
            {vm.integer(
                "সেগমেন্ট সংখ্যা",
                "segments",
                true,
                |d| d.segments as i64,
                |d, v| d.segments = u32::try_from(v).unwrap_or(0),
            )}
            {vm.amount(
                "প্রতি সেগমেন্ট ইনসেনটিভ (৳)",
                "incentivePerSegment",
                true,
                |d| d.incentive_per_segment,
                |d, v| d.incentive_per_segment = v,
            )}
            {computed_field("মোট ইনসেনটিভ", incentive)}
            {vm.textarea("নোট", "notes", |d| d.notes.clone(), |d, v| d.notes = v)}
        }
        .into_any()
    })
}

/// Out-of-range input becomes 0 so validation flags it
fn year_input(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_options() {
        let options = month_options();
        assert_eq!(options.len(), 12);
        assert_eq!(options[0].0, "1");
        assert_eq!(options[11].0, "12");
    }

    #[test]
    fn oversized_year_is_not_wrapped() {
        assert_eq!(year_input(2025), 2025);
        assert_eq!(year_input(4_294_969_321), 0);
        assert_eq!(year_input(-5_000_000_000), 0);
    }
}
