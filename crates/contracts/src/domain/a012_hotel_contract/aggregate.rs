use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, EntityMetadata, FormDto};
use crate::shared::calc::{hotel_totals, round2, HotelTotals};
use crate::shared::validation::FieldErrors;
use crate::shared::wire;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotelCity {
    #[default]
    Makkah,
    Madinah,
}

impl HotelCity {
    pub fn code(&self) -> &'static str {
        match self {
            HotelCity::Makkah => "makkah",
            HotelCity::Madinah => "madinah",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            HotelCity::Makkah => "মক্কা",
            HotelCity::Madinah => "মদিনা",
        }
    }

    /// Name printed on contracts
    pub fn latin_name(&self) -> &'static str {
        match self {
            HotelCity::Makkah => "Makkah",
            HotelCity::Madinah => "Madinah",
        }
    }

    pub fn all() -> Vec<HotelCity> {
        vec![HotelCity::Makkah, HotelCity::Madinah]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "makkah" => Some(HotelCity::Makkah),
            "madinah" => Some(HotelCity::Madinah),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    #[default]
    Draft,
    Confirmed,
    Cancelled,
}

impl ContractStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ContractStatus::Draft => "draft",
            ContractStatus::Confirmed => "confirmed",
            ContractStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ContractStatus::Draft => "খসড়া",
            ContractStatus::Confirmed => "নিশ্চিত",
            ContractStatus::Cancelled => "বাতিল",
        }
    }

    pub fn all() -> Vec<ContractStatus> {
        vec![
            ContractStatus::Draft,
            ContractStatus::Confirmed,
            ContractStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "draft" => Some(ContractStatus::Draft),
            "confirmed" => Some(ContractStatus::Confirmed),
            "cancelled" => Some(ContractStatus::Cancelled),
            _ => None,
        }
    }
}

/// Room block booked with a hotel in Makkah or Madinah
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HotelContract {
    #[serde(alias = "_id")]
    pub id: String,
    pub hotel_name: String,
    pub city: HotelCity,
    #[serde(deserialize_with = "wire::opt_text")]
    pub contract_number: Option<String>,
    #[serde(deserialize_with = "wire::opt_date")]
    pub check_in: Option<NaiveDate>,
    #[serde(deserialize_with = "wire::opt_date")]
    pub check_out: Option<NaiveDate>,
    #[serde(deserialize_with = "wire::opt_text")]
    pub room_type: Option<String>,
    #[serde(deserialize_with = "wire::count")]
    pub rooms: u32,
    #[serde(deserialize_with = "wire::amount")]
    pub rate_per_night_sar: f64,
    /// Taka per riyal agreed for this contract
    #[serde(deserialize_with = "wire::amount")]
    pub sar_rate: f64,
    #[serde(deserialize_with = "wire::amount")]
    pub paid_amount: f64,
    #[serde(deserialize_with = "wire::opt_text")]
    pub notes: Option<String>,
    pub status: ContractStatus,

    // Derived, recomputed on every write
    pub nights: i64,
    #[serde(deserialize_with = "wire::amount")]
    pub total_sar: f64,
    #[serde(deserialize_with = "wire::amount")]
    pub total_bdt: f64,
    #[serde(deserialize_with = "wire::amount")]
    pub due_amount: f64,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl AggregateRoot for HotelContract {
    type Dto = HotelContractDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.hotel_name.clone()
    }

    fn subtitle(&self) -> Option<String> {
        Some(self.city.display_name().to_string())
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> HotelContractDto {
        HotelContractDto {
            hotel_name: self.hotel_name.clone(),
            city: self.city,
            contract_number: self.contract_number.clone(),
            check_in: self.check_in,
            check_out: self.check_out,
            room_type: self.room_type.clone(),
            rooms: self.rooms,
            rate_per_night_sar: self.rate_per_night_sar,
            sar_rate: self.sar_rate,
            paid_amount: self.paid_amount,
            notes: self.notes.clone(),
            status: self.status,
        }
    }

    fn from_dto(id: String, dto: HotelContractDto, metadata: EntityMetadata) -> Self {
        let totals = dto.totals();
        Self {
            id,
            hotel_name: dto.hotel_name.trim().to_string(),
            city: dto.city,
            contract_number: dto.contract_number,
            check_in: dto.check_in,
            check_out: dto.check_out,
            room_type: dto.room_type,
            rooms: dto.rooms,
            rate_per_night_sar: round2(dto.rate_per_night_sar),
            sar_rate: dto.sar_rate,
            paid_amount: round2(dto.paid_amount),
            notes: dto.notes,
            status: dto.status,
            nights: totals.nights,
            total_sar: totals.total_sar,
            total_bdt: totals.total_bdt,
            due_amount: totals.due_amount,
            metadata,
        }
    }

    fn aggregate_index() -> &'static str {
        "a012"
    }

    fn collection_name() -> &'static str {
        "contracts"
    }

    fn api_path() -> &'static str {
        "/api/hotel-contracts"
    }

    fn route_base() -> &'static str {
        "/hajj-umrah/hotel-contracts"
    }

    fn element_name() -> &'static str {
        "হোটেল চুক্তি"
    }

    fn list_name() -> &'static str {
        "হোটেল চুক্তি তালিকা"
    }
}

/// Add/edit form of a hotel contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HotelContractDto {
    pub hotel_name: String,
    pub city: HotelCity,
    #[serde(deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub contract_number: Option<String>,
    #[serde(deserialize_with = "wire::opt_date")]
    pub check_in: Option<NaiveDate>,
    #[serde(deserialize_with = "wire::opt_date")]
    pub check_out: Option<NaiveDate>,
    #[serde(deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    #[serde(deserialize_with = "wire::count")]
    pub rooms: u32,
    #[serde(deserialize_with = "wire::amount")]
    pub rate_per_night_sar: f64,
    #[serde(deserialize_with = "wire::amount")]
    pub sar_rate: f64,
    #[serde(deserialize_with = "wire::amount")]
    pub paid_amount: f64,
    #[serde(deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: ContractStatus,
}

impl Default for HotelContractDto {
    fn default() -> Self {
        Self {
            hotel_name: String::new(),
            city: HotelCity::Makkah,
            contract_number: None,
            check_in: None,
            check_out: None,
            room_type: None,
            rooms: 1,
            rate_per_night_sar: 0.0,
            sar_rate: 0.0,
            paid_amount: 0.0,
            notes: None,
            status: ContractStatus::Draft,
        }
    }
}

impl HotelContractDto {
    /// Nights and totals, recomputed on every input change of the form
    pub fn totals(&self) -> HotelTotals {
        hotel_totals(
            self.check_in,
            self.check_out,
            self.rooms,
            self.rate_per_night_sar,
            self.sar_rate,
            self.paid_amount,
        )
    }
}

/// Largest room count one contract may book
pub const MAX_ROOMS: u32 = 10_000;

impl FormDto for HotelContractDto {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_text("hotelName", "হোটেলের নাম", &self.hotel_name);
        errors.require_some("checkIn", "চেক-ইন তারিখ", &self.check_in);
        errors.require_some("checkOut", "চেক-আউট তারিখ", &self.check_out);
        if let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out) {
            if check_out <= check_in {
                errors.add("checkOut", "চেক-আউট তারিখ চেক-ইনের পরে হতে হবে");
            }
        }
        if self.rooms == 0 {
            errors.add("rooms", "কমপক্ষে একটি রুম দিন");
        } else if self.rooms > MAX_ROOMS {
            errors.add("rooms", format!("রুম সংখ্যা সর্বোচ্চ {}", MAX_ROOMS));
        }
        errors.positive("ratePerNightSar", "প্রতি রাতের ভাড়া", self.rate_per_night_sar);
        errors.positive("sarRate", "রিয়াল রেট", self.sar_rate);
        errors.non_negative("paidAmount", "পরিশোধিত", self.paid_amount);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dto() -> HotelContractDto {
        HotelContractDto {
            hotel_name: "Hilton Suites".into(),
            city: HotelCity::Makkah,
            contract_number: Some("HC-2025-014".into()),
            check_in: NaiveDate::from_ymd_opt(2025, 5, 1),
            check_out: NaiveDate::from_ymd_opt(2025, 5, 11),
            room_type: Some("Quad".into()),
            rooms: 4,
            rate_per_night_sar: 350.0,
            sar_rate: 32.5,
            paid_amount: 300000.0,
            notes: None,
            status: ContractStatus::Confirmed,
        }
    }

    #[test]
    fn room_count_is_bounded() {
        let dto = HotelContractDto {
            rooms: 3_000_000_000,
            ..sample_dto()
        };
        assert!(dto.validate().unwrap_err().contains("rooms"));
        let dto = HotelContractDto {
            rooms: MAX_ROOMS,
            ..sample_dto()
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn derived_totals_are_stored() {
        let dto = sample_dto();
        assert!(dto.validate().is_ok());
        let contract = HotelContract::from_dto("h1".into(), dto, EntityMetadata::default());
        assert_eq!(contract.nights, 10);
        assert_eq!(contract.total_sar, 14000.0);
        assert_eq!(contract.total_bdt, 455000.0);
        assert_eq!(contract.due_amount, 155000.0);
    }

    #[test]
    fn check_out_must_follow_check_in() {
        let mut dto = sample_dto();
        dto.check_out = dto.check_in;
        dto.rooms = 0;
        let errors = dto.validate().unwrap_err();
        assert!(errors.contains("checkOut"));
        assert!(errors.contains("rooms"));
    }
}
