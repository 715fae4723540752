use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, EntityMetadata, FormDto};
use crate::shared::calc::round2;
use crate::shared::validation::FieldErrors;
use crate::shared::wire;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkupType {
    #[default]
    Percentage,
    Fixed,
}

impl MarkupType {
    pub fn code(&self) -> &'static str {
        match self {
            MarkupType::Percentage => "percentage",
            MarkupType::Fixed => "fixed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MarkupType::Percentage => "শতাংশ (%)",
            MarkupType::Fixed => "নির্দিষ্ট (৳)",
        }
    }

    pub fn all() -> Vec<MarkupType> {
        vec![MarkupType::Percentage, MarkupType::Fixed]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "percentage" => Some(MarkupType::Percentage),
            "fixed" => Some(MarkupType::Fixed),
            _ => None,
        }
    }
}

/// Markup added on top of the airline fare when quoting a ticket
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkupRule {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    /// Airline code; `None` applies to every airline
    #[serde(deserialize_with = "wire::opt_text")]
    pub airline: Option<String>,
    /// Route such as `DAC-JED`; `None` applies to every route
    #[serde(deserialize_with = "wire::opt_text")]
    pub route: Option<String>,
    pub markup_type: MarkupType,
    #[serde(deserialize_with = "wire::amount")]
    pub value: f64,
    #[serde(deserialize_with = "wire::flag")]
    pub is_active: bool,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

fn matches(filter: Option<&str>, value: &str) -> bool {
    match filter {
        Some(f) => f.trim().eq_ignore_ascii_case(value.trim()),
        None => true,
    }
}

impl MarkupRule {
    /// Markup in taka for `fare`; inactive rules add nothing
    pub fn markup_for(&self, fare: f64) -> f64 {
        if !self.is_active {
            return 0.0;
        }
        match self.markup_type {
            MarkupType::Percentage => round2(fare * self.value / 100.0),
            MarkupType::Fixed => round2(self.value),
        }
    }

    pub fn applies_to(&self, airline: &str, route: &str) -> bool {
        self.is_active && matches(self.airline.as_deref(), airline) && matches(self.route.as_deref(), route)
    }

    /// How specific the rule is: airline and route beat airline only, which
    /// beats a catch-all rule
    fn specificity(&self) -> u8 {
        u8::from(self.airline.is_some()) * 2 + u8::from(self.route.is_some())
    }
}

/// The most specific active rule for a ticket
pub fn applicable_rule<'a>(rules: &'a [MarkupRule], airline: &str, route: &str) -> Option<&'a MarkupRule> {
    rules
        .iter()
        .filter(|r| r.applies_to(airline, route))
        .max_by_key(|r| r.specificity())
}

impl AggregateRoot for MarkupRule {
    type Dto = MarkupRuleDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> MarkupRuleDto {
        MarkupRuleDto {
            name: self.name.clone(),
            airline: self.airline.clone(),
            route: self.route.clone(),
            markup_type: self.markup_type,
            value: self.value,
            is_active: self.is_active,
        }
    }

    fn from_dto(id: String, dto: MarkupRuleDto, metadata: EntityMetadata) -> Self {
        Self {
            id,
            name: dto.name.trim().to_string(),
            airline: dto.airline.map(|a| a.trim().to_uppercase()),
            route: dto.route.map(|r| r.trim().to_uppercase()),
            markup_type: dto.markup_type,
            value: round2(dto.value),
            is_active: dto.is_active,
            metadata,
        }
    }

    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "markup_rules"
    }

    fn api_path() -> &'static str {
        "/api/settings/markup"
    }

    fn route_base() -> &'static str {
        "/settings/markup"
    }

    fn element_name() -> &'static str {
        "মার্কআপ নিয়ম"
    }

    fn list_name() -> &'static str {
        "মার্কআপ সেটিংস"
    }
}

/// Add/edit form of a markup rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkupRuleDto {
    pub name: String,
    #[serde(deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub airline: Option<String>,
    #[serde(deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    pub markup_type: MarkupType,
    #[serde(deserialize_with = "wire::amount")]
    pub value: f64,
    #[serde(deserialize_with = "wire::flag")]
    pub is_active: bool,
}

impl Default for MarkupRuleDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            airline: None,
            route: None,
            markup_type: MarkupType::Percentage,
            value: 0.0,
            is_active: true,
        }
    }
}

impl FormDto for MarkupRuleDto {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_text("name", "নিয়মের নাম", &self.name);
        errors.positive("value", "মার্কআপ", self.value);
        if self.markup_type == MarkupType::Percentage && self.value > 100.0 {
            errors.add("value", "শতাংশ ১০০ এর বেশি হতে পারে না");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(airline: Option<&str>, route: Option<&str>, kind: MarkupType, value: f64) -> MarkupRule {
        MarkupRule {
            name: "r".into(),
            airline: airline.map(String::from),
            route: route.map(String::from),
            markup_type: kind,
            value,
            is_active: true,
            ..Default::default()
        }
    }

    #[test]
    fn markup_by_type() {
        let pct = rule(None, None, MarkupType::Percentage, 7.0);
        assert_eq!(pct.markup_for(45000.0), 3150.0);
        let mut fixed = rule(None, None, MarkupType::Fixed, 1500.0);
        assert_eq!(fixed.markup_for(45000.0), 1500.0);
        fixed.is_active = false;
        assert_eq!(fixed.markup_for(45000.0), 0.0);
    }

    #[test]
    fn most_specific_rule_wins() {
        let rules = vec![
            rule(None, None, MarkupType::Fixed, 500.0),
            rule(Some("SV"), None, MarkupType::Fixed, 800.0),
            rule(Some("SV"), Some("DAC-JED"), MarkupType::Fixed, 1200.0),
            rule(Some("BG"), None, MarkupType::Fixed, 900.0),
        ];
        assert_eq!(applicable_rule(&rules, "sv", "dac-jed").map(|r| r.value), Some(1200.0));
        assert_eq!(applicable_rule(&rules, "SV", "DAC-MED").map(|r| r.value), Some(800.0));
        assert_eq!(applicable_rule(&rules, "EK", "DAC-DXB").map(|r| r.value), Some(500.0));
    }

    #[test]
    fn percentage_over_hundred_is_rejected() {
        let dto = MarkupRuleDto {
            name: "Peak".into(),
            value: 120.0,
            ..Default::default()
        };
        assert_eq!(dto.validate().unwrap_err().get("value"), Some("শতাংশ ১০০ এর বেশি হতে পারে না"));
        assert!(MarkupRuleDto::default().is_active);
    }
}
