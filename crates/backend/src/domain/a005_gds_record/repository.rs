use contracts::domain::a005_gds_record::aggregate::{GdsProvider, GdsRecord};
use contracts::domain::common::EntityMetadata;
use contracts::shared::list::ListQuery;
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, Set};

use crate::domain::common::{contains_text, AggregateTable};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a005_gds_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub provider: String,
    pub year: i32,
    pub month: i32,
    pub segments: i32,
    pub incentive_per_segment: f64,
    pub incentive_amount: f64,
    pub notes: Option<String>,
    pub is_deleted: bool,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for GdsRecord {
    fn from(m: Model) -> Self {
        GdsRecord {
            id: m.id,
            provider: GdsProvider::from_code(&m.provider).unwrap_or_default(),
            year: m.year,
            month: u32::try_from(m.month).unwrap_or(0),
            segments: u32::try_from(m.segments).unwrap_or(0),
            incentive_per_segment: m.incentive_per_segment,
            incentive_amount: m.incentive_amount,
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
    type Aggregate = GdsRecord;
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn active_model(g: &GdsRecord) -> anyhow::Result<ActiveModel> {
        Ok(ActiveModel {
            id: Set(g.id.clone()),
            provider: Set(g.provider.code().to_string()),
            year: Set(g.year),
            month: Set(i32::try_from(g.month)?),
            segments: Set(i32::try_from(g.segments)?),
            incentive_per_segment: Set(g.incentive_per_segment),
            incentive_amount: Set(g.incentive_amount),
            notes: Set(g.notes.clone()),
            is_deleted: Set(false),
            created_at: Set(g.metadata.created_at),
            updated_at: Set(g.metadata.updated_at),
        })
    }

    /// `year` and `provider` narrow the list; search matches notes
    fn filters(query: &ListQuery) -> Condition {
        let mut condition = Condition::all();
        if let Some(q) = query.search() {
            condition = condition.add(
                Condition::any()
                    .add(contains_text(Column::Provider, &q.to_lowercase()))
                    .add(contains_text(Column::Notes, q)),
            );
        }
        if let Some(year) = query.year {
            condition = condition.add(Column::Year.eq(year));
        }
        if let Some(provider) = query.provider.as_deref() {
            condition = condition.add(Column::Provider.eq(provider));
        }
        condition
    }
}
