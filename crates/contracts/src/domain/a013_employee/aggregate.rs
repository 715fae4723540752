use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, EntityMetadata, FormDto};
use crate::enums::ActiveStatus;
use crate::shared::calc::round2;
use crate::shared::validation::FieldErrors;
use crate::shared::wire;

/// Staff member of the agency, served from `/api/users`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Employee {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(alias = "fullName")]
    pub name: String,
    #[serde(deserialize_with = "wire::opt_text")]
    pub designation: Option<String>,
    #[serde(deserialize_with = "wire::opt_text")]
    pub department: Option<String>,
    pub phone: String,
    #[serde(deserialize_with = "wire::opt_text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "wire::opt_date")]
    pub joining_date: Option<NaiveDate>,
    #[serde(deserialize_with = "wire::amount")]
    pub salary: f64,
    pub status: ActiveStatus,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl AggregateRoot for Employee {
    type Dto = EmployeeDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn subtitle(&self) -> Option<String> {
        match self.designation.as_deref() {
            Some(designation) => Some(format!("{} · {}", designation, self.phone)),
            None => Some(self.phone.clone()),
        }
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> EmployeeDto {
        EmployeeDto {
            name: self.name.clone(),
            designation: self.designation.clone(),
            department: self.department.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            joining_date: self.joining_date,
            salary: self.salary,
            status: self.status,
        }
    }

    fn from_dto(id: String, dto: EmployeeDto, metadata: EntityMetadata) -> Self {
        Self {
            id,
            name: dto.name.trim().to_string(),
            designation: dto.designation,
            department: dto.department,
            phone: dto.phone.trim().to_string(),
            email: dto.email.map(|e| e.trim().to_lowercase()),
            joining_date: dto.joining_date,
            salary: round2(dto.salary),
            status: dto.status,
            metadata,
        }
    }

    fn aggregate_index() -> &'static str {
        "a013"
    }

    fn collection_name() -> &'static str {
        "users"
    }

    fn api_path() -> &'static str {
        "/api/users"
    }

    fn route_base() -> &'static str {
        "/settings/employees"
    }

    fn element_name() -> &'static str {
        "কর্মচারী"
    }

    fn list_name() -> &'static str {
        "কর্মচারী তালিকা"
    }
}

/// Add/edit form of an employee
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmployeeDto {
    #[serde(alias = "fullName")]
    pub name: String,
    #[serde(deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub phone: String,
    #[serde(deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(deserialize_with = "wire::opt_date", skip_serializing_if = "Option::is_none")]
    pub joining_date: Option<NaiveDate>,
    #[serde(deserialize_with = "wire::amount")]
    pub salary: f64,
    pub status: ActiveStatus,
}

impl FormDto for EmployeeDto {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_text("name", "কর্মচারীর নাম", &self.name);
        errors.require_text("phone", "ফোন নম্বর", &self.phone);
        errors.optional_email("email", self.email.as_deref());
        errors.non_negative("salary", "বেতন", self.salary);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn name_phone_and_email_are_checked() {
        let dto = EmployeeDto {
            email: Some("karim@".into()),
            salary: -1.0,
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.contains("name"));
        assert!(errors.contains("phone"));
        assert!(errors.contains("email"));
        assert!(errors.contains("salary"));
    }

    #[test]
    fn decodes_legacy_user_payload() {
        let employee: Employee = serde_json::from_value(json!({
            "_id": "u1",
            "fullName": "Karim Uddin",
            "phone": "01912345678",
            "designation": "",
            "joiningDate": "2023-07-01",
            "salary": "35000",
            "status": "active"
        }))
        .unwrap();
        assert_eq!(employee.id, "u1");
        assert_eq!(employee.name, "Karim Uddin");
        assert_eq!(employee.designation, None);
        assert_eq!(employee.joining_date, NaiveDate::from_ymd_opt(2023, 7, 1));
        assert_eq!(employee.salary, 35000.0);
        assert_eq!(employee.subtitle().as_deref(), Some("01912345678"));
    }
}
