use contracts::domain::a007_sar_rate::aggregate::SarRate;
use contracts::domain::common::EntityMetadata;
use contracts::shared::list::ListQuery;
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, Set};

use crate::domain::common::{contains_text, AggregateTable};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a007_sar_rates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub date: Option<Date>,
    pub rate: f64,
    pub source: Option<String>,
    pub notes: Option<String>,
    pub is_deleted: bool,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SarRate {
    fn from(m: Model) -> Self {
        SarRate {
            id: m.id,
            date: m.date,
            rate: m.rate,
            source: m.source,
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
    type Aggregate = SarRate;
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn active_model(r: &SarRate) -> anyhow::Result<ActiveModel> {
        Ok(ActiveModel {
            id: Set(r.id.clone()),
            date: Set(r.date),
            rate: Set(r.rate),
            source: Set(r.source.clone()),
            notes: Set(r.notes.clone()),
            is_deleted: Set(false),
            created_at: Set(r.metadata.created_at),
            updated_at: Set(r.metadata.updated_at),
        })
    }

    fn filters(query: &ListQuery) -> Condition {
        let mut condition = Condition::all();
        if let Some(q) = query.search() {
            condition = condition.add(
                Condition::any()
                    .add(contains_text(Column::Source, q))
                    .add(contains_text(Column::Notes, q)),
            );
        }
        condition
    }
}
