use contracts::domain::a001_asset::aggregate::{Asset, AssetStatus};
use contracts::domain::common::EntityMetadata;
use contracts::shared::list::ListQuery;
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, Set};

use crate::domain::common::{contains_text, AggregateTable};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a001_assets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub asset_type: String,
    pub provider: Option<String>,
    pub total_paid_amount: f64,
    pub payment_date: Option<Date>,
    pub status: String,
    pub notes: Option<String>,
    pub is_deleted: bool,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Asset {
    fn from(m: Model) -> Self {
        Asset {
            id: m.id,
            name: m.name,
            asset_type: m.asset_type,
            provider: m.provider,
            total_paid_amount: m.total_paid_amount,
            payment_date: m.payment_date,
            status: AssetStatus::from_code(&m.status).unwrap_or_default(),
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
    type Aggregate = Asset;
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn active_model(a: &Asset) -> anyhow::Result<ActiveModel> {
        Ok(ActiveModel {
            id: Set(a.id.clone()),
            name: Set(a.name.clone()),
            asset_type: Set(a.asset_type.clone()),
            provider: Set(a.provider.clone()),
            total_paid_amount: Set(a.total_paid_amount),
            payment_date: Set(a.payment_date),
            status: Set(a.status.code().to_string()),
            notes: Set(a.notes.clone()),
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
                    .add(contains_text(Column::AssetType, q))
                    .add(contains_text(Column::Provider, q)),
            );
        }
        if let Some(status) = query.status.as_deref() {
            condition = condition.add(Column::Status.eq(status));
        }
        if let Some(kind) = query.kind.as_deref() {
            condition = condition.add(Column::AssetType.eq(kind));
        }
        condition
    }
}
