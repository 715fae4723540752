//! Printable hotel contract

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::aggregate::{ContractStatus, HotelContract};
use crate::shared::format::{format_bdt_plain, format_date, format_date_opt, format_sar};
use crate::shared::pdf::{self, render_template, GeneratedPdf, PdfError};

const CONTRACT_TEMPLATE: &str = "\
# HOTEL ACCOMMODATION CONTRACT

Contract No.: {{contractNumber}}
Issued on: {{issueDate}}
Status: {{status}}

# Hotel
Hotel name: {{hotelName}}
City: {{city}}
Room type: {{roomType}}
Number of rooms: {{rooms}}

# Stay
Check-in: {{checkIn}}
Check-out: {{checkOut}}
Nights: {{nights}}

# Charges
Rate per room per night: {{ratePerNightSar}}
Total in riyal: {{totalSar}}
Exchange rate: 1 SAR = {{sarRate}} BDT
Total in taka: {{totalBdt}}
Paid: {{paidAmount}}
Due: {{dueAmount}}

# Notes
{{notes}}

# Terms
1. Rooms are held for the dates above. Early departure is charged for the full stay.
2. The balance is due before the first check-in date.
3. Changes to the number of rooms must be agreed in writing by both parties.



______________________________            ______________________________
For the agency                            For the hotel
";

fn contract_values(contract: &HotelContract, issue_date: NaiveDate) -> BTreeMap<String, String> {
    let text = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
    let status = match contract.status {
        ContractStatus::Draft => "Draft",
        ContractStatus::Confirmed => "Confirmed",
        ContractStatus::Cancelled => "Cancelled",
    };
    let pairs = [
        ("contractNumber", text(&contract.contract_number)),
        ("issueDate", format_date(issue_date)),
        ("status", status.to_string()),
        ("hotelName", contract.hotel_name.clone()),
        ("city", contract.city.latin_name().to_string()),
        ("roomType", text(&contract.room_type)),
        ("rooms", contract.rooms.to_string()),
        ("checkIn", format_date_opt(contract.check_in)),
        ("checkOut", format_date_opt(contract.check_out)),
        ("nights", contract.nights.to_string()),
        ("ratePerNightSar", format_sar(contract.rate_per_night_sar)),
        ("totalSar", format_sar(contract.total_sar)),
        ("sarRate", format!("{:.2}", contract.sar_rate)),
        ("totalBdt", format_bdt_plain(contract.total_bdt)),
        ("paidAmount", format_bdt_plain(contract.paid_amount)),
        ("dueAmount", format_bdt_plain(contract.due_amount)),
        ("notes", text(&contract.notes)),
    ];
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// Contract text with every placeholder filled in
pub fn contract_text(contract: &HotelContract, issue_date: NaiveDate) -> Result<String, PdfError> {
    render_template(CONTRACT_TEMPLATE, &contract_values(contract, issue_date))
}

/// Contract as a PDF named `<hotel>_<YYYY-MM-DD>.pdf`
pub fn contract_pdf(contract: &HotelContract, issue_date: NaiveDate) -> Result<GeneratedPdf, PdfError> {
    let text = contract_text(contract, issue_date)?;
    let title = format!("Hotel contract - {}", contract.hotel_name);
    pdf::generate(&text, &title, pdf::pdf_file_name(&contract.hotel_name, issue_date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a012_hotel_contract::aggregate::{HotelCity, HotelContractDto};
    use crate::domain::common::{AggregateRoot, EntityMetadata};

    fn contract() -> HotelContract {
        let dto = HotelContractDto {
            hotel_name: "Dar Al Eiman".into(),
            city: HotelCity::Madinah,
            check_in: NaiveDate::from_ymd_opt(2025, 6, 2),
            check_out: NaiveDate::from_ymd_opt(2025, 6, 6),
            rooms: 2,
            rate_per_night_sar: 400.0,
            sar_rate: 32.0,
            paid_amount: 50000.0,
            ..Default::default()
        };
        HotelContract::from_dto("h1".into(), dto, EntityMetadata::default())
    }

    #[test]
    fn text_contains_computed_amounts() {
        let issue = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();
        let text = contract_text(&contract(), issue).unwrap();
        assert!(text.contains("City: Madinah"));
        assert!(text.contains("Nights: 4"));
        assert!(text.contains("Total in riyal: SAR 3,200.00"));
        assert!(text.contains("Total in taka: BDT 1,02,400.00"));
        assert!(text.contains("Due: BDT 52,400.00"));
        assert!(text.contains("Contract No.: -"));
        assert!(!text.contains("{{"));
    }

    #[test]
    fn pdf_is_named_after_hotel_and_date() {
        let issue = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();
        let pdf = contract_pdf(&contract(), issue).unwrap();
        assert_eq!(pdf.file_name, "Dar_Al_Eiman_2025-05-20.pdf");
        assert_eq!(pdf.page_count, 1);
        assert!(pdf.bytes.starts_with(b"%PDF-1.4"));
    }
}
