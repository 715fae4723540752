use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, EntityMetadata, FormDto};
use crate::enums::ActiveStatus;
use crate::shared::calc::round2;
use crate::shared::validation::FieldErrors;
use crate::shared::wire;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerType {
    #[default]
    Hajj,
    Umrah,
}

impl CustomerType {
    pub fn code(&self) -> &'static str {
        match self {
            CustomerType::Hajj => "hajj",
            CustomerType::Umrah => "umrah",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CustomerType::Hajj => "হজ্জ",
            CustomerType::Umrah => "উমরাহ",
        }
    }

    pub fn all() -> Vec<CustomerType> {
        vec![CustomerType::Hajj, CustomerType::Umrah]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "hajj" => Some(CustomerType::Hajj),
            "umrah" => Some(CustomerType::Umrah),
            _ => None,
        }
    }
}

/// Hajj or Umrah pilgrim
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Customer {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(deserialize_with = "wire::opt_text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "wire::opt_text")]
    pub passport_number: Option<String>,
    pub customer_type: CustomerType,
    #[serde(deserialize_with = "wire::opt_text")]
    pub package_name: Option<String>,
    #[serde(deserialize_with = "wire::amount")]
    pub paid_amount: f64,
    #[serde(deserialize_with = "wire::amount")]
    pub due_amount: f64,
    #[serde(deserialize_with = "wire::opt_text")]
    pub address: Option<String>,
    pub status: ActiveStatus,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Customer {
    /// Package price: paid plus outstanding
    pub fn total_amount(&self) -> f64 {
        round2(self.paid_amount + self.due_amount)
    }
}

impl AggregateRoot for Customer {
    type Dto = CustomerDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn subtitle(&self) -> Option<String> {
        Some(format!("{} · {}", self.customer_type.display_name(), self.phone))
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> CustomerDto {
        CustomerDto {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            passport_number: self.passport_number.clone(),
            customer_type: self.customer_type,
            package_name: self.package_name.clone(),
            paid_amount: self.paid_amount,
            due_amount: self.due_amount,
            address: self.address.clone(),
            status: self.status,
        }
    }

    fn from_dto(id: String, dto: CustomerDto, metadata: EntityMetadata) -> Self {
        Self {
            id,
            name: dto.name.trim().to_string(),
            phone: dto.phone.trim().to_string(),
            email: dto.email.map(|e| e.trim().to_lowercase()),
            passport_number: dto.passport_number.map(|p| p.trim().to_uppercase()),
            customer_type: dto.customer_type,
            package_name: dto.package_name,
            paid_amount: round2(dto.paid_amount),
            due_amount: round2(dto.due_amount),
            address: dto.address,
            status: dto.status,
            metadata,
        }
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "customers"
    }

    fn api_path() -> &'static str {
        "/api/hajj-umrah/customers"
    }

    fn route_base() -> &'static str {
        "/hajj-umrah/customers"
    }

    fn element_name() -> &'static str {
        "গ্রাহক"
    }

    fn list_name() -> &'static str {
        "হজ্জ ও উমরাহ গ্রাহক"
    }
}

/// Add/edit form of a pilgrim
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomerDto {
    pub name: String,
    pub phone: String,
    #[serde(deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub passport_number: Option<String>,
    pub customer_type: CustomerType,
    #[serde(deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    #[serde(deserialize_with = "wire::amount")]
    pub paid_amount: f64,
    #[serde(deserialize_with = "wire::amount")]
    pub due_amount: f64,
    #[serde(deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub status: ActiveStatus,
}

impl CustomerDto {
    /// Package price shown under the amount inputs
    pub fn total_amount(&self) -> f64 {
        round2(self.paid_amount + self.due_amount)
    }
}

impl FormDto for CustomerDto {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_text("name", "গ্রাহকের নাম", &self.name);
        errors.require_text("phone", "ফোন নম্বর", &self.phone);
        errors.optional_email("email", self.email.as_deref());
        if let Some(passport) = self.passport_number.as_deref() {
            let passport = passport.trim();
            if !passport.is_empty()
                && (passport.len() < 6 || !passport.chars().all(|c| c.is_ascii_alphanumeric()))
            {
                errors.add("passportNumber", "সঠিক পাসপোর্ট নম্বর দিন");
            }
        }
        errors.non_negative("paidAmount", "পরিশোধিত", self.paid_amount);
        errors.non_negative("dueAmount", "বকেয়া", self.due_amount);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validates_required_fields_and_passport() {
        let mut dto = CustomerDto {
            name: "Abdur Rahim".into(),
            phone: "01811223344".into(),
            passport_number: Some("A1-23".into()),
            customer_type: CustomerType::Umrah,
            ..Default::default()
        };
        assert!(dto.validate().unwrap_err().contains("passportNumber"));
        dto.passport_number = Some("bx0123456".into());
        assert!(dto.validate().is_ok());

        let customer = Customer::from_dto("c1".into(), dto, EntityMetadata::default());
        assert_eq!(customer.passport_number.as_deref(), Some("BX0123456"));
    }

    #[test]
    fn decodes_customer_type() {
        let customer: Customer = serde_json::from_value(json!({
            "id": "c2",
            "name": "Karim",
            "phone": "01900000000",
            "customerType": "umrah",
            "paidAmount": 150000,
            "dueAmount": null
        }))
        .unwrap();
        assert_eq!(customer.customer_type, CustomerType::Umrah);
        assert_eq!(customer.total_amount(), 150000.0);
    }
}
