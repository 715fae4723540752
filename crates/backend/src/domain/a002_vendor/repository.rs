use contracts::domain::a002_vendor::aggregate::Vendor;
use contracts::domain::common::EntityMetadata;
use contracts::enums::ActiveStatus;
use contracts::shared::list::ListQuery;
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, Set};

use crate::domain::common::{contains_text, AggregateTable};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a002_vendors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub trade_name: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: String,
    pub address: Option<String>,
    pub status: String,
    pub paid_amount: f64,
    pub due_amount: f64,
    pub is_deleted: bool,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Vendor {
    fn from(m: Model) -> Self {
        Vendor {
            id: m.id,
            name: m.name,
            trade_name: m.trade_name,
            contact_person: m.contact_person,
            email: m.email,
            phone: m.phone,
            address: m.address,
            status: ActiveStatus::from_code(&m.status).unwrap_or_default(),
            paid_amount: m.paid_amount,
            due_amount: m.due_amount,
            metadata: EntityMetadata {
                created_at: m.created_at,
                updated_at: m.updated_at,
            },
        }
    }
}

pub struct Repository;

impl AggregateTable for Repository {
    type Aggregate = Vendor;
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn active_model(v: &Vendor) -> anyhow::Result<ActiveModel> {
        Ok(ActiveModel {
            id: Set(v.id.clone()),
            name: Set(v.name.clone()),
            trade_name: Set(v.trade_name.clone()),
            contact_person: Set(v.contact_person.clone()),
            email: Set(v.email.clone()),
            phone: Set(v.phone.clone()),
            address: Set(v.address.clone()),
            status: Set(v.status.code().to_string()),
            paid_amount: Set(v.paid_amount),
            due_amount: Set(v.due_amount),
            is_deleted: Set(false),
            created_at: Set(v.metadata.created_at),
            updated_at: Set(v.metadata.updated_at),
        })
    }

    fn filters(query: &ListQuery) -> Condition {
        let mut condition = Condition::all();
        if let Some(q) = query.search() {
            condition = condition.add(
                Condition::any()
                    .add(contains_text(Column::Name, q))
                    .add(contains_text(Column::TradeName, q))
                    .add(contains_text(Column::Phone, q))
                    .add(contains_text(Column::Email, q)),
            );
        }
        if let Some(status) = query.status.as_deref() {
            condition = condition.add(Column::Status.eq(status));
        }
        condition
    }
}
