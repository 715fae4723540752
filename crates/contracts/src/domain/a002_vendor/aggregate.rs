use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, EntityMetadata, FormDto};
use crate::enums::ActiveStatus;
use crate::shared::calc::round2;
use crate::shared::validation::FieldErrors;
use crate::shared::wire;

/// Supplier the agency buys tickets, visas or services from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Vendor {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "wire::opt_text")]
    pub trade_name: Option<String>,
    #[serde(deserialize_with = "wire::opt_text")]
    pub contact_person: Option<String>,
    #[serde(deserialize_with = "wire::opt_text")]
    pub email: Option<String>,
    pub phone: String,
    #[serde(deserialize_with = "wire::opt_text")]
    pub address: Option<String>,
    pub status: ActiveStatus,
    #[serde(deserialize_with = "wire::amount")]
    pub paid_amount: f64,
    #[serde(deserialize_with = "wire::amount")]
    pub due_amount: f64,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Vendor {
    /// Paid plus outstanding
    pub fn total_amount(&self) -> f64 {
        round2(self.paid_amount + self.due_amount)
    }
}

impl AggregateRoot for Vendor {
    type Dto = VendorDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn subtitle(&self) -> Option<String> {
        Some(self.phone.clone())
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> VendorDto {
        VendorDto {
            name: self.name.clone(),
            trade_name: self.trade_name.clone(),
            contact_person: self.contact_person.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            status: self.status,
            paid_amount: self.paid_amount,
            due_amount: self.due_amount,
        }
    }

    fn from_dto(id: String, dto: VendorDto, metadata: EntityMetadata) -> Self {
        Self {
            id,
            name: dto.name.trim().to_string(),
            trade_name: dto.trade_name,
            contact_person: dto.contact_person,
            email: dto.email.map(|e| e.trim().to_lowercase()),
            phone: dto.phone.trim().to_string(),
            address: dto.address,
            status: dto.status,
            paid_amount: round2(dto.paid_amount),
            due_amount: round2(dto.due_amount),
            metadata,
        }
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "vendors"
    }

    fn api_path() -> &'static str {
        "/api/vendors"
    }

    fn route_base() -> &'static str {
        "/vendors"
    }

    fn element_name() -> &'static str {
        "ভেন্ডর"
    }

    fn list_name() -> &'static str {
        "ভেন্ডর তালিকা"
    }
}

/// Add/edit form of a vendor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VendorDto {
    pub name: String,
    #[serde(deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub trade_name: Option<String>,
    #[serde(deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub phone: String,
    #[serde(deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub status: ActiveStatus,
    #[serde(deserialize_with = "wire::amount")]
    pub paid_amount: f64,
    #[serde(deserialize_with = "wire::amount")]
    pub due_amount: f64,
}

impl FormDto for VendorDto {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_text("name", "ভেন্ডরের নাম", &self.name);
        errors.require_text("phone", "ফোন নম্বর", &self.phone);
        errors.optional_email("email", self.email.as_deref());
        errors.non_negative("paidAmount", "পরিশোধিত", self.paid_amount);
        errors.non_negative("dueAmount", "বকেয়া", self.due_amount);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_email_and_accepts_fixed_one() {
        let mut dto = VendorDto {
            name: "Sky Travels".into(),
            phone: "01711000000".into(),
            email: Some("sky@travels".into()),
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains("email"));

        dto.email = Some("Sky@Travels.com".into());
        assert!(dto.validate().is_ok());
        let vendor = Vendor::from_dto("v1".into(), dto, EntityMetadata::default());
        assert_eq!(vendor.email.as_deref(), Some("sky@travels.com"));
    }

    #[test]
    fn total_is_paid_plus_due() {
        let vendor = Vendor {
            paid_amount: 1200.5,
            due_amount: 799.5,
            ..Default::default()
        };
        assert_eq!(vendor.total_amount(), 2000.0);
    }
}
