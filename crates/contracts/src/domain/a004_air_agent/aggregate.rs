use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, EntityMetadata, FormDto};
use crate::enums::ActiveStatus;
use crate::shared::calc::round2;
use crate::shared::validation::FieldErrors;
use crate::shared::wire;

/// Sub-agent buying air tickets through the agency
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AirAgent {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "wire::opt_text")]
    pub contact_person: Option<String>,
    #[serde(deserialize_with = "wire::opt_text")]
    pub email: Option<String>,
    pub phone: String,
    #[serde(deserialize_with = "wire::opt_text")]
    pub city: Option<String>,
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

impl AirAgent {
    pub fn total_amount(&self) -> f64 {
        round2(self.paid_amount + self.due_amount)
    }
}

impl AggregateRoot for AirAgent {
    type Dto = AirAgentDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn subtitle(&self) -> Option<String> {
        match self.city.as_deref() {
            Some(city) => Some(format!("{} · {}", self.phone, city)),
            None => Some(self.phone.clone()),
        }
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> AirAgentDto {
        AirAgentDto {
            name: self.name.clone(),
            contact_person: self.contact_person.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            city: self.city.clone(),
            address: self.address.clone(),
            status: self.status,
            paid_amount: self.paid_amount,
            due_amount: self.due_amount,
        }
    }

    fn from_dto(id: String, dto: AirAgentDto, metadata: EntityMetadata) -> Self {
        Self {
            id,
            name: dto.name.trim().to_string(),
            contact_person: dto.contact_person,
            email: dto.email.map(|e| e.trim().to_lowercase()),
            phone: dto.phone.trim().to_string(),
            city: dto.city,
            address: dto.address,
            status: dto.status,
            paid_amount: round2(dto.paid_amount),
            due_amount: round2(dto.due_amount),
            metadata,
        }
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "agents"
    }

    fn api_path() -> &'static str {
        "/api/air-agents"
    }

    fn route_base() -> &'static str {
        "/air-ticketing/agents"
    }

    fn element_name() -> &'static str {
        "এজেন্ট"
    }

    fn list_name() -> &'static str {
        "এয়ার এজেন্ট তালিকা"
    }
}

/// Add/edit form of an air agent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AirAgentDto {
    pub name: String,
    #[serde(deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub phone: String,
    #[serde(deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub status: ActiveStatus,
    #[serde(deserialize_with = "wire::amount")]
    pub paid_amount: f64,
    #[serde(deserialize_with = "wire::amount")]
    pub due_amount: f64,
}

impl FormDto for AirAgentDto {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_text("name", "এজেন্টের নাম", &self.name);
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
    fn negative_amounts_are_rejected() {
        let dto = AirAgentDto {
            name: "Dhaka Air".into(),
            phone: "017".into(),
            paid_amount: -5.0,
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.get("paidAmount"), Some("পরিশোধিত ঋণাত্মক হতে পারে না"));
    }

    #[test]
    fn subtitle_includes_city() {
        let agent = AirAgent {
            phone: "017".into(),
            city: Some("Sylhet".into()),
            ..Default::default()
        };
        assert_eq!(agent.subtitle().as_deref(), Some("017 · Sylhet"));
    }
}
