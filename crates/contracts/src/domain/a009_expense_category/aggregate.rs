use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, EntityMetadata, FormDto};
use crate::shared::calc::round2;
use crate::shared::validation::FieldErrors;
use crate::shared::wire;

/// Category of personal expenses with an optional monthly budget
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExpenseCategory {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    /// Emoji or icon name shown next to the category
    #[serde(deserialize_with = "wire::opt_text")]
    pub icon: Option<String>,
    #[serde(deserialize_with = "wire::opt_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "wire::amount")]
    pub monthly_budget: f64,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl ExpenseCategory {
    /// Budget left after `spent`; negative when overspent
    pub fn remaining_budget(&self, spent: f64) -> f64 {
        round2(self.monthly_budget - spent)
    }
}

impl AggregateRoot for ExpenseCategory {
    type Dto = ExpenseCategoryDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        match self.icon.as_deref() {
            Some(icon) => format!("{} {}", icon, self.name),
            None => self.name.clone(),
        }
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> ExpenseCategoryDto {
        ExpenseCategoryDto {
            name: self.name.clone(),
            icon: self.icon.clone(),
            description: self.description.clone(),
            monthly_budget: self.monthly_budget,
        }
    }

    fn from_dto(id: String, dto: ExpenseCategoryDto, metadata: EntityMetadata) -> Self {
        Self {
            id,
            name: dto.name.trim().to_string(),
            icon: dto.icon,
            description: dto.description,
            monthly_budget: round2(dto.monthly_budget),
            metadata,
        }
    }

    fn aggregate_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "categories"
    }

    fn api_path() -> &'static str {
        "/api/personal-expense/categories"
    }

    fn route_base() -> &'static str {
        "/personal-expense/categories"
    }

    fn element_name() -> &'static str {
        "খরচের ক্যাটাগরি"
    }

    fn list_name() -> &'static str {
        "ব্যক্তিগত খরচের ক্যাটাগরি"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExpenseCategoryDto {
    pub name: String,
    #[serde(deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "wire::amount")]
    pub monthly_budget: f64,
}

impl FormDto for ExpenseCategoryDto {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_text("name", "ক্যাটাগরির নাম", &self.name);
        errors.non_negative("monthlyBudget", "মাসিক বাজেট", self.monthly_budget);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_shows_icon() {
        let category = ExpenseCategory {
            name: "বাজার".into(),
            icon: Some("🛒".into()),
            monthly_budget: 15000.0,
            ..Default::default()
        };
        assert_eq!(category.title(), "🛒 বাজার");
        assert_eq!(category.remaining_budget(16500.0), -1500.0);
    }

    #[test]
    fn name_is_required() {
        assert!(ExpenseCategoryDto::default().validate().unwrap_err().contains("name"));
    }
}
