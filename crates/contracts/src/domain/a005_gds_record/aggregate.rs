use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, EntityMetadata, FormDto};
use crate::shared::calc::{gds_incentive, round2};
use crate::shared::validation::FieldErrors;
use crate::shared::wire;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GdsProvider {
    #[default]
    Amadeus,
    Sabre,
    Galileo,
    Travelport,
}

impl GdsProvider {
    pub fn code(&self) -> &'static str {
        match self {
            GdsProvider::Amadeus => "amadeus",
            GdsProvider::Sabre => "sabre",
            GdsProvider::Galileo => "galileo",
            GdsProvider::Travelport => "travelport",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GdsProvider::Amadeus => "Amadeus",
            GdsProvider::Sabre => "Sabre",
            GdsProvider::Galileo => "Galileo",
            GdsProvider::Travelport => "Travelport",
        }
    }

    pub fn all() -> Vec<GdsProvider> {
        vec![
            GdsProvider::Amadeus,
            GdsProvider::Sabre,
            GdsProvider::Galileo,
            GdsProvider::Travelport,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "amadeus" => Some(GdsProvider::Amadeus),
            "sabre" => Some(GdsProvider::Sabre),
            "galileo" => Some(GdsProvider::Galileo),
            "travelport" => Some(GdsProvider::Travelport),
            _ => None,
        }
    }
}

/// Monthly segment count booked through a GDS and the incentive it earns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GdsRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub provider: GdsProvider,
    #[serde(deserialize_with = "wire::year")]
    pub year: i32,
    #[serde(deserialize_with = "wire::count")]
    pub month: u32,
    #[serde(deserialize_with = "wire::count")]
    pub segments: u32,
    #[serde(deserialize_with = "wire::amount")]
    pub incentive_per_segment: f64,
    /// `segments × incentivePerSegment`
    #[serde(deserialize_with = "wire::amount")]
    pub incentive_amount: f64,
    #[serde(deserialize_with = "wire::opt_text")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl GdsRecord {
    /// Period as `YYYY-MM`
    pub fn period(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

impl AggregateRoot for GdsRecord {
    type Dto = GdsRecordDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        format!("{} {}", self.provider.display_name(), self.period())
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> GdsRecordDto {
        GdsRecordDto {
            provider: self.provider,
            year: self.year,
            month: self.month,
            segments: self.segments,
            incentive_per_segment: self.incentive_per_segment,
            notes: self.notes.clone(),
        }
    }

    fn from_dto(id: String, dto: GdsRecordDto, metadata: EntityMetadata) -> Self {
        Self {
            id,
            provider: dto.provider,
            year: dto.year,
            month: dto.month,
            segments: dto.segments,
            incentive_per_segment: round2(dto.incentive_per_segment),
            incentive_amount: dto.incentive_amount(),
            notes: dto.notes,
            metadata,
        }
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "gds_records"
    }

    fn api_path() -> &'static str {
        "/api/gds-records"
    }

    fn route_base() -> &'static str {
        "/air-ticketing/gds"
    }

    fn element_name() -> &'static str {
        "জিডিএস রেকর্ড"
    }

    fn list_name() -> &'static str {
        "জিডিএস সেগমেন্ট ও ইনসেনটিভ"
    }
}

/// Add/edit form of a GDS record
///
/// `year` and `month` stay 0 when the body leaves them out, which fails
/// validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GdsRecordDto {
    pub provider: GdsProvider,
    #[serde(deserialize_with = "wire::year")]
    pub year: i32,
    #[serde(deserialize_with = "wire::count")]
    pub month: u32,
    #[serde(deserialize_with = "wire::count")]
    pub segments: u32,
    #[serde(deserialize_with = "wire::amount")]
    pub incentive_per_segment: f64,
    #[serde(deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl GdsRecordDto {
    /// Empty record for the current month
    pub fn for_today() -> Self {
        let today = chrono::Utc::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
            ..Self::default()
        }
    }

    pub fn incentive_amount(&self) -> f64 {
        gds_incentive(self.segments, self.incentive_per_segment)
    }
}

/// Largest segment count of one monthly record
pub const MAX_SEGMENTS: u32 = 1_000_000;

impl FormDto for GdsRecordDto {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if !(2000..=2100).contains(&self.year) {
            errors.add("year", "সঠিক বছর দিন");
        }
        if !(1..=12).contains(&self.month) {
            errors.add("month", "মাস ১ থেকে ১২ এর মধ্যে হতে হবে");
        }
        if self.segments > MAX_SEGMENTS {
            errors.add("segments", format!("সেগমেন্ট সংখ্যা সর্বোচ্চ {}", MAX_SEGMENTS));
        }
        errors.non_negative("incentivePerSegment", "প্রতি সেগমেন্ট ইনসেনটিভ", self.incentive_per_segment);
        errors.into_result()
    }

    fn blank() -> Self {
        Self::for_today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn incentive_is_recomputed_from_inputs() {
        let dto = GdsRecordDto {
            provider: GdsProvider::Sabre,
            year: 2024,
            month: 3,
            segments: 420,
            incentive_per_segment: 1.75,
            notes: None,
        };
        assert!(dto.validate().is_ok());
        let record = GdsRecord::from_dto("g1".into(), dto, EntityMetadata::default());
        assert_eq!(record.incentive_amount, 735.0);
        assert_eq!(record.title(), "Sabre 2024-03");
    }

    #[test]
    fn month_and_year_are_checked() {
        let dto = GdsRecordDto {
            year: 1999,
            month: 13,
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.contains("year"));
        assert!(errors.contains("month"));
    }

    #[test]
    fn segment_count_is_bounded() {
        let dto = GdsRecordDto {
            segments: MAX_SEGMENTS + 1,
            ..GdsRecordDto::for_today()
        };
        assert!(dto.validate().unwrap_err().contains("segments"));
    }

    #[test]
    fn missing_period_is_rejected() {
        let dto: GdsRecordDto = serde_json::from_value(json!({
            "provider": "sabre", "segments": 10, "incentivePerSegment": 2
        }))
        .unwrap();
        assert_eq!((dto.year, dto.month), (0, 0));
        let errors = dto.validate().unwrap_err();
        assert!(errors.contains("year"));
        assert!(errors.contains("month"));
    }

    #[test]
    fn blank_form_starts_at_the_current_month() {
        let today = chrono::Utc::now().date_naive();
        let dto = GdsRecordDto::blank();
        assert_eq!((dto.year, dto.month), (today.year(), today.month()));
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn decodes_string_counts() {
        let record: GdsRecord = serde_json::from_value(json!({
            "id": "g2", "provider": "galileo", "year": "2023", "month": "11", "segments": "90"
        }))
        .unwrap();
        assert_eq!(record.provider, GdsProvider::Galileo);
        assert_eq!((record.year, record.month, record.segments), (2023, 11, 90));
    }
}
