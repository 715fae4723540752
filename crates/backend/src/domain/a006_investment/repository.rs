use contracts::domain::a006_investment::aggregate::{Investment, InvestmentStatus, InvestmentType};
use contracts::domain::common::EntityMetadata;
use contracts::shared::list::ListQuery;
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, Set};

use crate::domain::common::{contains_text, AggregateTable};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a006_investments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub investment_type: String,
    pub amount: f64,
    pub return_amount: f64,
    pub investment_date: Option<Date>,
    pub maturity_date: Option<Date>,
    pub status: String,
    pub notes: Option<String>,
    pub is_deleted: bool,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Investment {
    fn from(m: Model) -> Self {
        Investment {
            id: m.id,
            name: m.name,
            investment_type: InvestmentType::from_code(&m.investment_type).unwrap_or_default(),
            amount: m.amount,
            return_amount: m.return_amount,
            investment_date: m.investment_date,
            maturity_date: m.maturity_date,
            status: InvestmentStatus::from_code(&m.status).unwrap_or_default(),
            notes: m.notes,
            metadata: EntityMetadata {
                created_at: m.created_at,
                updated_at: m.updated_at,
            },
        }
    }
}

pub struct Repository;

impl AggregateTable for Repository {
    type Aggregate = Investment;
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn active_model(i: &Investment) -> anyhow::Result<ActiveModel> {
        Ok(ActiveModel {
            id: Set(i.id.clone()),
            name: Set(i.name.clone()),
            investment_type: Set(i.investment_type.code().to_string()),
            amount: Set(i.amount),
            return_amount: Set(i.return_amount),
            investment_date: Set(i.investment_date),
            maturity_date: Set(i.maturity_date),
            status: Set(i.status.code().to_string()),
            notes: Set(i.notes.clone()),
            is_deleted: Set(false),
            created_at: Set(i.metadata.created_at),
            updated_at: Set(i.metadata.updated_at),
        })
    }

    fn filters(query: &ListQuery) -> Condition {
        let mut condition = Condition::all();
        if let Some(q) = query.search() {
            condition = condition.add(
                Condition::any()
                    .add(contains_text(Column::Name, q))
                    .add(contains_text(Column::Notes, q)),
            );
        }
        if let Some(status) = query.status.as_deref() {
            condition = condition.add(Column::Status.eq(status));
        }
        if let Some(kind) = query.kind.as_deref() {
            condition = condition.add(Column::InvestmentType.eq(kind));
        }
        condition
    }
}
