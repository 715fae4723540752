use contracts::domain::a003_customer::aggregate::{Customer, CustomerType};
use contracts::enums::ActiveStatus;
use contracts::domain::common::EntityMetadata;
use contracts::shared::list::ListQuery;
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, Set};

use crate::domain::common::{contains_text, AggregateTable};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a003_customers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub passport_number: Option<String>,
    pub customer_type: String,
    pub package_name: Option<String>,
    pub paid_amount: f64,
    pub due_amount: f64,
    pub address: Option<String>,
    pub status: String,
    pub is_deleted: bool,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Customer {
    fn from(m: Model) -> Self {
        Customer {
            id: m.id,
            name: m.name,
            phone: m.phone,
            email: m.email,
            passport_number: m.passport_number,
            customer_type: CustomerType::from_code(&m.customer_type).unwrap_or_default(),
            package_name: m.package_name,
            paid_amount: m.paid_amount,
            due_amount: m.due_amount,
            address: m.address,
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
    type Aggregate = Customer;
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn active_model(c: &Customer) -> anyhow::Result<ActiveModel> {
        Ok(ActiveModel {
            id: Set(c.id.clone()),
            name: Set(c.name.clone()),
            phone: Set(c.phone.clone()),
            email: Set(c.email.clone()),
            passport_number: Set(c.passport_number.clone()),
            customer_type: Set(c.customer_type.code().to_string()),
            package_name: Set(c.package_name.clone()),
            paid_amount: Set(c.paid_amount),
            due_amount: Set(c.due_amount),
            address: Set(c.address.clone()),
            status: Set(c.status.code().to_string()),
            is_deleted: Set(false),
            created_at: Set(c.metadata.created_at),
            updated_at: Set(c.metadata.updated_at),
        })
    }

    /// Search covers name, phone and passport; `type` filters hajj/umrah
    fn filters(query: &ListQuery) -> Condition {
        let mut condition = Condition::all();
        if let Some(q) = query.search() {
            condition = condition.add(
                Condition::any()
                    .add(contains_text(Column::Name, q))
                    .add(contains_text(Column::Phone, q))
                    .add(contains_text(Column::PassportNumber, &q.to_uppercase())),
            );
        }
        if let Some(status) = query.status.as_deref() {
            condition = condition.add(Column::Status.eq(status));
        }
        if let Some(kind) = query.kind.as_deref() {
            condition = condition.add(Column::CustomerType.eq(kind));
        }
        condition
    }
}
