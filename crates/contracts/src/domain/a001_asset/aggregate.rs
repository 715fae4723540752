use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, EntityMetadata, FormDto};
use crate::shared::calc::round2;
use crate::shared::validation::FieldErrors;
use crate::shared::wire;

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetStatus {
    #[default]
    Active,
    Inactive,
    Disposed,
}

impl AssetStatus {
    pub fn code(&self) -> &'static str {
        match self {
            AssetStatus::Active => "active",
            AssetStatus::Inactive => "inactive",
            AssetStatus::Disposed => "disposed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AssetStatus::Active => "সক্রিয়",
            AssetStatus::Inactive => "নিষ্ক্রিয়",
            AssetStatus::Disposed => "বিক্রিত/বাতিল",
        }
    }

    pub fn all() -> Vec<AssetStatus> {
        vec![AssetStatus::Active, AssetStatus::Inactive, AssetStatus::Disposed]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "active" => Some(AssetStatus::Active),
            "inactive" => Some(AssetStatus::Inactive),
            "disposed" => Some(AssetStatus::Disposed),
            _ => None,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Company asset: equipment, vehicles, office fit-out
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Asset {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    /// Free text category ("IT Equipment", "Vehicle")
    #[serde(rename = "type")]
    pub asset_type: String,
    #[serde(deserialize_with = "wire::opt_text")]
    pub provider: Option<String>,
    #[serde(deserialize_with = "wire::amount")]
    pub total_paid_amount: f64,
    #[serde(deserialize_with = "wire::opt_date")]
    pub payment_date: Option<NaiveDate>,
    pub status: AssetStatus,
    #[serde(deserialize_with = "wire::opt_text")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl AggregateRoot for Asset {
    type Dto = AssetDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn subtitle(&self) -> Option<String> {
        Some(self.asset_type.clone()).filter(|t| !t.is_empty())
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> AssetDto {
        AssetDto {
            name: self.name.clone(),
            asset_type: self.asset_type.clone(),
            provider: self.provider.clone(),
            total_paid_amount: self.total_paid_amount,
            payment_date: self.payment_date,
            status: self.status,
            notes: self.notes.clone(),
        }
    }

    fn from_dto(id: String, dto: AssetDto, metadata: EntityMetadata) -> Self {
        Self {
            id,
            name: dto.name.trim().to_string(),
            asset_type: dto.asset_type.trim().to_string(),
            provider: dto.provider,
            total_paid_amount: round2(dto.total_paid_amount),
            payment_date: dto.payment_date,
            status: dto.status,
            notes: dto.notes,
            metadata,
        }
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "assets"
    }

    fn api_path() -> &'static str {
        "/api/assets"
    }

    fn route_base() -> &'static str {
        "/assets"
    }

    fn element_name() -> &'static str {
        "সম্পদ"
    }

    fn list_name() -> &'static str {
        "সম্পদ তালিকা"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Add/edit form of an asset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssetDto {
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    #[serde(deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(deserialize_with = "wire::amount")]
    pub total_paid_amount: f64,
    #[serde(deserialize_with = "wire::opt_date")]
    pub payment_date: Option<NaiveDate>,
    pub status: AssetStatus,
    #[serde(deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl FormDto for AssetDto {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_text("name", "সম্পদের নাম", &self.name);
        errors.require_text("type", "সম্পদের ধরন", &self.asset_type);
        errors.positive("totalPaidAmount", "মোট মূল্য", self.total_paid_amount);
        errors.require_some("paymentDate", "পরিশোধের তারিখ", &self.payment_date);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn laptop() -> AssetDto {
        AssetDto {
            name: "Laptop".into(),
            asset_type: "IT Equipment".into(),
            total_paid_amount: 50000.0,
            payment_date: NaiveDate::from_ymd_opt(2025, 3, 1),
            status: AssetStatus::Active,
            ..Default::default()
        }
    }

    #[test]
    fn laptop_form_is_valid_and_serializes_to_post_body() {
        let dto = laptop();
        assert!(dto.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({
                "name": "Laptop",
                "type": "IT Equipment",
                "totalPaidAmount": 50000.0,
                "paymentDate": "2025-03-01",
                "status": "active"
            })
        );
    }

    #[test]
    fn empty_form_reports_required_fields() {
        let errors = AssetDto::default().validate().unwrap_err();
        for field in ["name", "type", "totalPaidAmount", "paymentDate"] {
            assert!(errors.contains(field), "missing error for {}", field);
        }
    }

    #[test]
    fn decodes_legacy_record() {
        let asset: Asset = serde_json::from_value(json!({
            "_id": "65f0c1",
            "name": "Printer",
            "type": "Office",
            "totalPaidAmount": "12500",
            "paymentDate": "2024-01-05T00:00:00.000Z",
            "status": "inactive",
            "createdAt": "2024-01-05T08:00:00Z"
        }))
        .unwrap();
        assert_eq!(asset.id, "65f0c1");
        assert_eq!(asset.total_paid_amount, 12500.0);
        assert_eq!(asset.payment_date, NaiveDate::from_ymd_opt(2024, 1, 5));
        assert_eq!(asset.status, AssetStatus::Inactive);
        assert!(asset.metadata.created_at.is_some());
        assert_eq!(asset.provider, None);
    }

    #[test]
    fn from_dto_trims_text() {
        let mut dto = laptop();
        dto.name = "  Laptop ".into();
        let asset = Asset::from_dto("1".into(), dto.clone(), EntityMetadata::default());
        assert_eq!(asset.name, "Laptop");
        assert_eq!(asset.to_dto().name, "Laptop");
        assert_eq!(Asset::item_path("1"), "/api/assets/1");
        assert_eq!(Asset::edit_route("1"), "/assets/1/edit");
    }
}
