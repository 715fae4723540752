use contracts::domain::a004_air_agent::aggregate::AirAgent;
use contracts::enums::ActiveStatus;
use contracts::domain::common::EntityMetadata;
use contracts::shared::list::ListQuery;
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, Set};

use crate::domain::common::{contains_text, AggregateTable};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a004_agents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: String,
    pub city: Option<String>,
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

impl From<Model> for AirAgent {
    fn from(m: Model) -> Self {
        AirAgent {
            id: m.id,
            name: m.name,
            contact_person: m.contact_person,
            email: m.email,
            phone: m.phone,
            city: m.city,
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
    type Aggregate = AirAgent;
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn active_model(a: &AirAgent) -> anyhow::Result<ActiveModel> {
        Ok(ActiveModel {
            id: Set(a.id.clone()),
            name: Set(a.name.clone()),
            contact_person: Set(a.contact_person.clone()),
            email: Set(a.email.clone()),
            phone: Set(a.phone.clone()),
            city: Set(a.city.clone()),
            address: Set(a.address.clone()),
            status: Set(a.status.code().to_string()),
            paid_amount: Set(a.paid_amount),
            due_amount: Set(a.due_amount),
            is_deleted: Set(false),
            created_at: Set(a.metadata.created_at),
            updated_at: Set(a.metadata.updated_at),
        })
    }

    fn filters(query: &ListQuery) -> Condition {
        let mut condition = Condition::all();
        if let Some(q) = query.search() {
            condition = condition.add(
                Condition::any()
                    .add(contains_text(Column::Name, q))
                    .add(contains_text(Column::ContactPerson, q))
                    .add(contains_text(Column::Phone, q))
                    .add(contains_text(Column::City, q)),
            );
        }
        if let Some(status) = query.status.as_deref() {
            condition = condition.add(Column::Status.eq(status));
        }
        condition
    }
}
