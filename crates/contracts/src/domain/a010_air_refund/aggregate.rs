use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, EntityMetadata, FormDto};
use crate::shared::calc::{refund_amount, round2};
use crate::shared::validation::FieldErrors;
use crate::shared::wire;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefundStatus {
    #[default]
    Pending,
    Approved,
    Completed,
    Rejected,
}

impl RefundStatus {
    pub fn code(&self) -> &'static str {
        match self {
            RefundStatus::Pending => "pending",
            RefundStatus::Approved => "approved",
            RefundStatus::Completed => "completed",
            RefundStatus::Rejected => "rejected",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RefundStatus::Pending => "অপেক্ষমাণ",
            RefundStatus::Approved => "অনুমোদিত",
            RefundStatus::Completed => "সম্পন্ন",
            RefundStatus::Rejected => "বাতিল",
        }
    }

    pub fn all() -> Vec<RefundStatus> {
        vec![
            RefundStatus::Pending,
            RefundStatus::Approved,
            RefundStatus::Completed,
            RefundStatus::Rejected,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "pending" => Some(RefundStatus::Pending),
            "approved" => Some(RefundStatus::Approved),
            "completed" => Some(RefundStatus::Completed),
            "rejected" => Some(RefundStatus::Rejected),
            _ => None,
        }
    }
}

/// Refund of an unused or partly used air ticket
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AirRefund {
    #[serde(alias = "_id")]
    pub id: String,
    pub passenger_name: String,
    pub pnr: String,
    #[serde(deserialize_with = "wire::opt_text")]
    pub ticket_number: Option<String>,
    #[serde(deserialize_with = "wire::opt_text")]
    pub airline: Option<String>,
    #[serde(deserialize_with = "wire::amount")]
    pub actual_fare: f64,
    #[serde(deserialize_with = "wire::amount")]
    pub used_amount: f64,
    #[serde(deserialize_with = "wire::amount")]
    pub service_charge: f64,
    #[serde(deserialize_with = "wire::amount")]
    pub penalty: f64,
    /// `max(0, actualFare - usedAmount - serviceCharge - penalty)`
    #[serde(deserialize_with = "wire::amount")]
    pub refund_amount: f64,
    #[serde(deserialize_with = "wire::opt_date")]
    pub refund_date: Option<NaiveDate>,
    pub status: RefundStatus,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl AggregateRoot for AirRefund {
    type Dto = AirRefundDto;

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

    fn to_dto(&self) -> AirRefundDto {
        AirRefundDto {
            passenger_name: self.passenger_name.clone(),
            pnr: self.pnr.clone(),
            ticket_number: self.ticket_number.clone(),
            airline: self.airline.clone(),
            actual_fare: self.actual_fare,
            used_amount: self.used_amount,
            service_charge: self.service_charge,
            penalty: self.penalty,
            refund_date: self.refund_date,
            status: self.status,
        }
    }

    fn from_dto(id: String, dto: AirRefundDto, metadata: EntityMetadata) -> Self {
        let refund_amount = dto.refund_amount();
        Self {
            id,
            passenger_name: dto.passenger_name.trim().to_string(),
            pnr: dto.pnr.trim().to_uppercase(),
            ticket_number: dto.ticket_number,
            airline: dto.airline,
            actual_fare: round2(dto.actual_fare),
            used_amount: round2(dto.used_amount),
            service_charge: round2(dto.service_charge),
            penalty: round2(dto.penalty),
            refund_amount,
            refund_date: dto.refund_date,
            status: dto.status,
            metadata,
        }
    }

    fn aggregate_index() -> &'static str {
        "a010"
    }

    fn collection_name() -> &'static str {
        "refunds"
    }

    fn api_path() -> &'static str {
        "/api/air-ticketing/refund"
    }

    fn route_base() -> &'static str {
        "/air-ticketing/refund"
    }

    fn element_name() -> &'static str {
        "রিফান্ড"
    }

    fn list_name() -> &'static str {
        "টিকেট রিফান্ড"
    }
}

/// Add/edit form of a refund
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AirRefundDto {
    pub passenger_name: String,
    pub pnr: String,
    #[serde(deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub ticket_number: Option<String>,
    #[serde(deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub airline: Option<String>,
    #[serde(deserialize_with = "wire::amount")]
    pub actual_fare: f64,
    #[serde(deserialize_with = "wire::amount")]
    pub used_amount: f64,
    #[serde(deserialize_with = "wire::amount")]
    pub service_charge: f64,
    #[serde(deserialize_with = "wire::amount")]
    pub penalty: f64,
    #[serde(deserialize_with = "wire::opt_date", skip_serializing_if = "Option::is_none")]
    pub refund_date: Option<NaiveDate>,
    pub status: RefundStatus,
}

impl AirRefundDto {
    /// Recomputed on every input change of the form
    pub fn refund_amount(&self) -> f64 {
        refund_amount(self.actual_fare, self.used_amount, self.service_charge, self.penalty)
    }
}

impl FormDto for AirRefundDto {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_text("passengerName", "যাত্রীর নাম", &self.passenger_name);
        errors.require_text("pnr", "PNR", &self.pnr);
        errors.positive("actualFare", "প্রকৃত ভাড়া", self.actual_fare);
        errors.non_negative("usedAmount", "ব্যবহৃত অংশ", self.used_amount);
        errors.non_negative("serviceCharge", "সার্ভিস চার্জ", self.service_charge);
        errors.non_negative("penalty", "পেনাল্টি", self.penalty);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_refund_matches_formula() {
        let dto = AirRefundDto {
            passenger_name: "Md. Hasan".into(),
            pnr: "ab12cd".into(),
            actual_fare: 62000.0,
            used_amount: 21000.0,
            service_charge: 2000.0,
            penalty: 4500.0,
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        let refund = AirRefund::from_dto("r1".into(), dto, EntityMetadata::default());
        assert_eq!(refund.refund_amount, 34500.0);
        assert_eq!(refund.pnr, "AB12CD");
    }

    #[test]
    fn client_total_cannot_be_smuggled_in() {
        let dto: AirRefundDto = serde_json::from_value(serde_json::json!({
            "passengerName": "X", "pnr": "P1", "actualFare": 1000,
            "usedAmount": 900, "serviceCharge": 300, "refundAmount": 99999
        }))
        .unwrap();
        let refund = AirRefund::from_dto("r2".into(), dto, EntityMetadata::default());
        assert_eq!(refund.refund_amount, 0.0);
    }

    #[test]
    fn pnr_and_fare_are_required() {
        let errors = AirRefundDto::default().validate().unwrap_err();
        assert!(errors.contains("pnr"));
        assert!(errors.contains("actualFare"));
        assert!(errors.contains("passengerName"));
    }
}
