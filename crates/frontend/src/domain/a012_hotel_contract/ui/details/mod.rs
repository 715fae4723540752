use crate::shared::components::detail_grid::DetailField;
use crate::shared::date_utils::today;
use crate::shared::detail_page::entity_detail_page;
use crate::shared::download::{download_bytes, PDF_MIME};
use crate::shared::icons::icon;
use contracts::domain::a012_hotel_contract::aggregate::HotelContract;
use contracts::domain::a012_hotel_contract::contract_pdf::contract_pdf;
use contracts::shared::format::{format_bdt, format_date_opt, format_number_bn, format_sar, or_na, to_bengali_digits};
use leptos::prelude::*;

fn fields(c: &HotelContract) -> Vec<DetailField> {
    vec![
        ("হোটেল", c.hotel_name.clone()),
        ("শহর", c.city.display_name().to_string()),
        ("চুক্তি নম্বর", or_na(c.contract_number.as_deref())),
        ("চেক-ইন", format_date_opt(c.check_in)),
        ("চেক-আউট", format_date_opt(c.check_out)),
        ("রাত", to_bengali_digits(&c.nights.to_string())),
        ("রুমের ধরন", or_na(c.room_type.as_deref())),
        ("রুম সংখ্যা", to_bengali_digits(&c.rooms.to_string())),
        ("প্রতি রাতের ভাড়া", format_sar(c.rate_per_night_sar)),
        ("SAR রেট", format!("৳{}", format_number_bn(c.sar_rate))),
        ("মোট (SAR)", format_sar(c.total_sar)),
        ("মোট (৳)", format_bdt(c.total_bdt)),
        ("পরিশোধিত", format_bdt(c.paid_amount)),
        ("বকেয়া", format_bdt(c.due_amount)),
        ("স্ট্যাটাস", c.status.display_name().to_string()),
        ("নোট", or_na(c.notes.as_deref())),
    ]
}

/// Generate the contract PDF in the browser and save it
fn download_contract(contract: &HotelContract) -> Result<(), String> {
    let pdf = contract_pdf(contract, today()).map_err(|e| e.to_string())?;
    download_bytes(&pdf.bytes, PDF_MIME, &pdf.file_name)?;
    log::info!("Downloaded {} ({} pages)", pdf.file_name, pdf.page_count);
    Ok(())
}

fn pdf_action(contract: &HotelContract) -> AnyView {
    let contract = StoredValue::new(contract.clone());
    let error = RwSignal::new(None::<String>);
    view! {
        <button
            class="button button--secondary"
            on:click=move |_| {
                let result = contract.with_value(download_contract);
                if let Err(e) = &result {
                    log::error!("Contract PDF failed: {}", e);
                }
                error.set(result.err());
            }
        >
            {icon("download")}
            "PDF ডাউনলোড"
        </button>
        {move || error.get().map(|e| view! { <span class="form__error">{format!("PDF তৈরি করা যায়নি: {}", e)}</span> })}
    }
    .into_any()
}

#[component]
pub fn HotelContractDetails() -> impl IntoView {
    entity_detail_page::<HotelContract>(fields, Some(pdf_action))
}
