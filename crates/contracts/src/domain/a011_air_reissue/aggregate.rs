use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, EntityMetadata, FormDto};
use crate::shared::calc::{reissue_total, round2};
use crate::shared::validation::FieldErrors;
use crate::shared::wire;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReissueStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl ReissueStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ReissueStatus::Pending => "pending",
            ReissueStatus::Confirmed => "confirmed",
            ReissueStatus::Completed => "completed",
            ReissueStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReissueStatus::Pending => "অপেক্ষমাণ",
            ReissueStatus::Confirmed => "নিশ্চিত",
            ReissueStatus::Completed => "সম্পন্ন",
            ReissueStatus::Cancelled => "বাতিল",
        }
    }

    pub fn all() -> Vec<ReissueStatus> {
        vec![
            ReissueStatus::Pending,
            ReissueStatus::Confirmed,
            ReissueStatus::Completed,
            ReissueStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "pending" => Some(ReissueStatus::Pending),
            "confirmed" => Some(ReissueStatus::Confirmed),
            "completed" => Some(ReissueStatus::Completed),
            "cancelled" => Some(ReissueStatus::Cancelled),
            _ => None,
        }
    }
}

/// Date or route change of an issued ticket
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AirReissue {
    #[serde(alias = "_id")]
    pub id: String,
    pub passenger_name: String,
    pub pnr: String,
    #[serde(deserialize_with = "wire::opt_text")]
    pub old_ticket_number: Option<String>,
    #[serde(deserialize_with = "wire::opt_text")]
    pub new_ticket_number: Option<String>,
    /// Negative when the new flight is cheaper
    #[serde(deserialize_with = "wire::amount")]
    pub fare_difference: f64,
    #[serde(deserialize_with = "wire::amount")]
    pub tax_difference: f64,
    #[serde(deserialize_with = "wire::amount")]
    pub service_fee: f64,
    #[serde(deserialize_with = "wire::amount")]
    pub penalty: f64,
    /// `fareDifference + taxDifference + serviceFee + penalty`
    #[serde(deserialize_with = "wire::amount")]
    pub total_amount: f64,
    #[serde(deserialize_with = "wire::opt_date")]
    pub reissue_date: Option<NaiveDate>,
    pub status: ReissueStatus,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl AggregateRoot for AirReissue {
    type Dto = AirReissueDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.passenger_name.clone()
    }

    fn subtitle(&self) -> Option<String> {
        Some(format!("PNR {}", self.pnr))
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> AirReissueDto {
        AirReissueDto {
            passenger_name: self.passenger_name.clone(),
            pnr: self.pnr.clone(),
            old_ticket_number: self.old_ticket_number.clone(),
            new_ticket_number: self.new_ticket_number.clone(),
            fare_difference: self.fare_difference,
            tax_difference: self.tax_difference,
            service_fee: self.service_fee,
            penalty: self.penalty,
            reissue_date: self.reissue_date,
            status: self.status,
        }
    }

    fn from_dto(id: String, dto: AirReissueDto, metadata: EntityMetadata) -> Self {
        let total_amount = dto.total_amount();
        Self {
            id,
            passenger_name: dto.passenger_name.trim().to_string(),
            pnr: dto.pnr.trim().to_uppercase(),
            old_ticket_number: dto.old_ticket_number,
            new_ticket_number: dto.new_ticket_number,
            fare_difference: round2(dto.fare_difference),
            tax_difference: round2(dto.tax_difference),
            service_fee: round2(dto.service_fee),
            penalty: round2(dto.penalty),
            total_amount,
            reissue_date: dto.reissue_date,
            status: dto.status,
            metadata,
        }
    }

    fn aggregate_index() -> &'static str {
        "a011"
    }

    fn collection_name() -> &'static str {
        "reissues"
    }

    fn api_path() -> &'static str {
        "/api/air-ticketing/reissue"
    }

    fn route_base() -> &'static str {
        "/air-ticketing/reissue"
    }

    fn element_name() -> &'static str {
        "রিইস্যু"
    }

    fn list_name() -> &'static str {
        "টিকেট রিইস্যু"
    }
}

/// Add/edit form of a reissue
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AirReissueDto {
    pub passenger_name: String,
    pub pnr: String,
    #[serde(deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub old_ticket_number: Option<String>,
    #[serde(deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub new_ticket_number: Option<String>,
    #[serde(deserialize_with = "wire::amount")]
    pub fare_difference: f64,
    #[serde(deserialize_with = "wire::amount")]
    pub tax_difference: f64,
    #[serde(deserialize_with = "wire::amount")]
    pub service_fee: f64,
    #[serde(deserialize_with = "wire::amount")]
    pub penalty: f64,
    #[serde(deserialize_with = "wire::opt_date", skip_serializing_if = "Option::is_none")]
    pub reissue_date: Option<NaiveDate>,
    pub status: ReissueStatus,
}

impl AirReissueDto {
    /// Recomputed on every input change of the form
    pub fn total_amount(&self) -> f64 {
        reissue_total(self.fare_difference, self.tax_difference, self.service_fee, self.penalty)
    }
}

impl FormDto for AirReissueDto {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_text("passengerName", "যাত্রীর নাম", &self.passenger_name);
        errors.require_text("pnr", "PNR", &self.pnr);
        errors.non_negative("serviceFee", "সার্ভিস ফি", self.service_fee);
        errors.non_negative("penalty", "পেনাল্টি", self.penalty);
        if let (Some(old), Some(new)) = (&self.old_ticket_number, &self.new_ticket_number) {
            if !old.trim().is_empty() && old.trim() == new.trim() {
                errors.add("newTicketNumber", "নতুন টিকেট নম্বর পুরাতনটির থেকে ভিন্ন হতে হবে");
            }
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_sum_of_components() {
        let dto = AirReissueDto {
            passenger_name: "Nusrat Jahan".into(),
            pnr: "XQ7P2L".into(),
            fare_difference: 4200.0,
            tax_difference: 650.0,
            service_fee: 500.0,
            penalty: 3000.0,
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        let reissue = AirReissue::from_dto("x".into(), dto, EntityMetadata::default());
        assert_eq!(reissue.total_amount, 8350.0);
    }

    #[test]
    fn cheaper_flight_lowers_total() {
        let dto = AirReissueDto {
            fare_difference: -2000.0,
            service_fee: 500.0,
            ..Default::default()
        };
        assert_eq!(dto.total_amount(), -1500.0);
    }

    #[test]
    fn new_ticket_must_differ() {
        let dto = AirReissueDto {
            passenger_name: "A".into(),
            pnr: "B".into(),
            old_ticket_number: Some("997-123".into()),
            new_ticket_number: Some("997-123".into()),
            ..Default::default()
        };
        assert!(dto.validate().unwrap_err().contains("newTicketNumber"));
    }
}
