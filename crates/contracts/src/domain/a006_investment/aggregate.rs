use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, EntityMetadata, FormDto};
use crate::shared::calc::round2;
use crate::shared::validation::FieldErrors;
use crate::shared::wire;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentType {
    /// Deposit held by IATA airlines against the ticketing limit
    #[default]
    IataAirlinesCapping,
    Others,
}

impl InvestmentType {
    pub fn code(&self) -> &'static str {
        match self {
            InvestmentType::IataAirlinesCapping => "iata_airlines_capping",
            InvestmentType::Others => "others",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            InvestmentType::IataAirlinesCapping => "IATA ও এয়ারলাইন্স ক্যাপিং",
            InvestmentType::Others => "অন্যান্য",
        }
    }

    pub fn all() -> Vec<InvestmentType> {
        vec![InvestmentType::IataAirlinesCapping, InvestmentType::Others]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "iata_airlines_capping" => Some(InvestmentType::IataAirlinesCapping),
            "others" => Some(InvestmentType::Others),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentStatus {
    #[default]
    Active,
    Matured,
    Closed,
}

impl InvestmentStatus {
    pub fn code(&self) -> &'static str {
        match self {
            InvestmentStatus::Active => "active",
            InvestmentStatus::Matured => "matured",
            InvestmentStatus::Closed => "closed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            InvestmentStatus::Active => "চলমান",
            InvestmentStatus::Matured => "মেয়াদপূর্ণ",
            InvestmentStatus::Closed => "বন্ধ",
        }
    }

    pub fn all() -> Vec<InvestmentStatus> {
        vec![
            InvestmentStatus::Active,
            InvestmentStatus::Matured,
            InvestmentStatus::Closed,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "active" => Some(InvestmentStatus::Active),
            "matured" => Some(InvestmentStatus::Matured),
            "closed" => Some(InvestmentStatus::Closed),
            _ => None,
        }
    }
}

/// Money placed with an airline, IATA or elsewhere
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Investment {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub investment_type: InvestmentType,
    #[serde(deserialize_with = "wire::amount")]
    pub amount: f64,
    #[serde(deserialize_with = "wire::amount")]
    pub return_amount: f64,
    #[serde(deserialize_with = "wire::opt_date")]
    pub investment_date: Option<NaiveDate>,
    #[serde(deserialize_with = "wire::opt_date")]
    pub maturity_date: Option<NaiveDate>,
    pub status: InvestmentStatus,
    #[serde(deserialize_with = "wire::opt_text")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Investment {
    /// Return minus principal, zero while nothing has come back
    pub fn profit(&self) -> f64 {
        if self.return_amount > 0.0 {
            round2(self.return_amount - self.amount)
        } else {
            0.0
        }
    }
}

impl AggregateRoot for Investment {
    type Dto = InvestmentDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn subtitle(&self) -> Option<String> {
        Some(self.investment_type.display_name().to_string())
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> InvestmentDto {
        InvestmentDto {
            name: self.name.clone(),
            investment_type: self.investment_type,
            amount: self.amount,
            return_amount: self.return_amount,
            investment_date: self.investment_date,
            maturity_date: self.maturity_date,
            status: self.status,
            notes: self.notes.clone(),
        }
    }

    fn from_dto(id: String, dto: InvestmentDto, metadata: EntityMetadata) -> Self {
        Self {
            id,
            name: dto.name.trim().to_string(),
            investment_type: dto.investment_type,
            amount: round2(dto.amount),
            return_amount: round2(dto.return_amount),
            investment_date: dto.investment_date,
            maturity_date: dto.maturity_date,
            status: dto.status,
            notes: dto.notes,
            metadata,
        }
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "investments"
    }

    fn api_path() -> &'static str {
        "/api/investments"
    }

    fn route_base() -> &'static str {
        "/investments"
    }

    fn element_name() -> &'static str {
        "বিনিয়োগ"
    }

    fn list_name() -> &'static str {
        "বিনিয়োগ তালিকা"
    }
}

/// Add/edit form of an investment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InvestmentDto {
    pub name: String,
    #[serde(rename = "type")]
    pub investment_type: InvestmentType,
    #[serde(deserialize_with = "wire::amount")]
    pub amount: f64,
    #[serde(deserialize_with = "wire::amount")]
    pub return_amount: f64,
    #[serde(deserialize_with = "wire::opt_date")]
    pub investment_date: Option<NaiveDate>,
    #[serde(deserialize_with = "wire::opt_date", skip_serializing_if = "Option::is_none")]
    pub maturity_date: Option<NaiveDate>,
    pub status: InvestmentStatus,
    #[serde(deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl FormDto for InvestmentDto {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_text("name", "বিনিয়োগের নাম", &self.name);
        errors.positive("amount", "বিনিয়োগের পরিমাণ", self.amount);
        errors.non_negative("returnAmount", "রিটার্ন", self.return_amount);
        errors.require_some("investmentDate", "বিনিয়োগের তারিখ", &self.investment_date);
        if let (Some(start), Some(end)) = (self.investment_date, self.maturity_date) {
            if end < start {
                errors.add("maturityDate", "মেয়াদপূর্তির তারিখ বিনিয়োগের তারিখের পরে হতে হবে");
            }
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn maturity_must_follow_investment_date() {
        let mut dto = InvestmentDto {
            name: "Biman capping".into(),
            amount: 500000.0,
            investment_date: date(2024, 6, 1),
            maturity_date: date(2024, 5, 1),
            ..Default::default()
        };
        assert!(dto.validate().unwrap_err().contains("maturityDate"));
        dto.maturity_date = date(2025, 6, 1);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn profit_counts_only_returned_money() {
        let mut investment = Investment {
            amount: 100000.0,
            ..Default::default()
        };
        assert_eq!(investment.profit(), 0.0);
        investment.return_amount = 112500.0;
        assert_eq!(investment.profit(), 12500.0);
    }

    #[test]
    fn type_uses_wire_code() {
        let json = serde_json::to_value(InvestmentDto::default()).unwrap();
        assert_eq!(json["type"], "iata_airlines_capping");
    }
}
