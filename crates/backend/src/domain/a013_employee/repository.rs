use contracts::domain::a013_employee::aggregate::Employee;
use contracts::domain::common::EntityMetadata;
use contracts::enums::ActiveStatus;
use contracts::shared::list::ListQuery;
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, Set};

use crate::domain::common::{contains_text, AggregateTable};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a013_users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub designation: Option<String>,
    pub department: Option<String>,
    pub phone: String,
    pub email: Option<String>,
    pub joining_date: Option<Date>,
    pub salary: f64,
    pub status: String,
    pub is_deleted: bool,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Employee {
    fn from(m: Model) -> Self {
        Employee {
            id: m.id,
            name: m.name,
            designation: m.designation,
            department: m.department,
            phone: m.phone,
            email: m.email,
            joining_date: m.joining_date,
            salary: m.salary,
            status: ActiveStatus::from_code(&m.status).unwrap_or_default(),
            metadata: EntityMetadata {
                created_at: m.created_at,
                updated_at: m.updated_at,
            },
        }
    }
}

pub struct Repository;

impl AggregateTable for Repository {
    type Aggregate = Employee;
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn active_model(e: &Employee) -> anyhow::Result<ActiveModel> {
        Ok(ActiveModel {
            id: Set(e.id.clone()),
            name: Set(e.name.clone()),
            designation: Set(e.designation.clone()),
            department: Set(e.department.clone()),
            phone: Set(e.phone.clone()),
            email: Set(e.email.clone()),
            joining_date: Set(e.joining_date),
            salary: Set(e.salary),
            status: Set(e.status.code().to_string()),
            is_deleted: Set(false),
            created_at: Set(e.metadata.created_at),
            updated_at: Set(e.metadata.updated_at),
        })
    }

    /// `type` filters by department
    fn filters(query: &ListQuery) -> Condition {
        let mut condition = Condition::all();
        if let Some(q) = query.search() {
            condition = condition.add(
                Condition::any()
                    .add(contains_text(Column::Name, q))
                    .add(contains_text(Column::Phone, q))
                    .add(contains_text(Column::Designation, q)),
            );
        }
        if let Some(status) = query.status.as_deref() {
            condition = condition.add(Column::Status.eq(status));
        }
        if let Some(department) = query.kind.as_deref() {
            condition = condition.add(Column::Department.eq(department));
        }
        condition
    }
}
