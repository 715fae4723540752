use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, EntityMetadata, FormDto};
use crate::shared::format::format_date_opt;
use crate::shared::validation::FieldErrors;
use crate::shared::wire;

/// Taka per Saudi riyal on a given day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SarRate {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(deserialize_with = "wire::opt_date")]
    pub date: Option<NaiveDate>,
    #[serde(deserialize_with = "wire::amount")]
    pub rate: f64,
    /// Where the rate was taken from (bank, exchange house)
    #[serde(deserialize_with = "wire::opt_text")]
    pub source: Option<String>,
    #[serde(deserialize_with = "wire::opt_text")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl SarRate {
    /// Taka value of `sar` riyals at this rate
    pub fn to_bdt(&self, sar: f64) -> f64 {
        crate::shared::calc::round2(sar * self.rate)
    }
}

/// Most recent rate by date
pub fn latest_rate(rates: &[SarRate]) -> Option<&SarRate> {
    rates
        .iter()
        .filter(|r| r.date.is_some() && r.rate > 0.0)
        .max_by_key(|r| r.date)
}

impl AggregateRoot for SarRate {
    type Dto = SarRateDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        format!("{} · {:.2}", format_date_opt(self.date), self.rate)
    }

    fn subtitle(&self) -> Option<String> {
        self.source.clone()
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> SarRateDto {
        SarRateDto {
            date: self.date,
            rate: self.rate,
            source: self.source.clone(),
            notes: self.notes.clone(),
        }
    }

    fn from_dto(id: String, dto: SarRateDto, metadata: EntityMetadata) -> Self {
        Self {
            id,
            date: dto.date,
            rate: (dto.rate * 10_000.0).round() / 10_000.0,
            source: dto.source,
            notes: dto.notes,
            metadata,
        }
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "sar_rates"
    }

    fn api_path() -> &'static str {
        "/api/hajj-umrah/sar-rates"
    }

    fn route_base() -> &'static str {
        "/hajj-umrah/sar-rates"
    }

    fn element_name() -> &'static str {
        "রিয়াল রেট"
    }

    fn list_name() -> &'static str {
        "সৌদি রিয়াল রেট"
    }
}

/// Add/edit form of a SAR rate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SarRateDto {
    #[serde(deserialize_with = "wire::opt_date")]
    pub date: Option<NaiveDate>,
    #[serde(deserialize_with = "wire::amount")]
    pub rate: f64,
    #[serde(deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl FormDto for SarRateDto {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_some("date", "তারিখ", &self.date);
        errors.positive("rate", "রেট", self.rate);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(id: &str, day: u32, value: f64) -> SarRate {
        SarRate {
            id: id.into(),
            date: NaiveDate::from_ymd_opt(2025, 2, day),
            rate: value,
            ..Default::default()
        }
    }

    #[test]
    fn rate_must_be_positive() {
        let dto = SarRateDto {
            date: NaiveDate::from_ymd_opt(2025, 2, 1),
            rate: 0.0,
            ..Default::default()
        };
        assert!(dto.validate().unwrap_err().contains("rate"));
    }

    #[test]
    fn latest_rate_picks_newest_date() {
        let rates = vec![rate("a", 3, 32.1), rate("b", 9, 32.6), rate("c", 5, 32.4)];
        assert_eq!(latest_rate(&rates).map(|r| r.id.as_str()), Some("b"));
        assert_eq!(latest_rate(&rates[..1]).map(|r| r.to_bdt(100.0)), Some(3210.0));
        assert!(latest_rate(&[]).is_none());
    }
}
