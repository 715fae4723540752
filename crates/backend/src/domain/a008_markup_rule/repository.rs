use contracts::domain::a008_markup_rule::aggregate::{MarkupRule, MarkupType};
use contracts::domain::common::EntityMetadata;
use contracts::shared::list::ListQuery;
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, Set};

use crate::domain::common::{contains_text, AggregateTable};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a008_markup_rules")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub airline: Option<String>,
    pub route: Option<String>,
    pub markup_type: String,
    pub value: f64,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for MarkupRule {
    fn from(m: Model) -> Self {
        MarkupRule {
            id: m.id,
            name: m.name,
            airline: m.airline,
            route: m.route,
            markup_type: MarkupType::from_code(&m.markup_type).unwrap_or_default(),
            value: m.value,
            is_active: m.is_active,
            metadata: EntityMetadata {
                created_at: m.created_at,
                updated_at: m.updated_at,
            },
        }
    }
}

pub struct Repository;

impl AggregateTable for Repository {
    type Aggregate = MarkupRule;
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn active_model(r: &MarkupRule) -> anyhow::Result<ActiveModel> {
        Ok(ActiveModel {
            id: Set(r.id.clone()),
            name: Set(r.name.clone()),
            airline: Set(r.airline.clone()),
            route: Set(r.route.clone()),
            markup_type: Set(r.markup_type.code().to_string()),
            value: Set(r.value),
            is_active: Set(r.is_active),
            is_deleted: Set(false),
            created_at: Set(r.metadata.created_at),
            updated_at: Set(r.metadata.updated_at),
        })
    }

    /// `status` is `active` / `inactive` against the `is_active` flag
    fn filters(query: &ListQuery) -> Condition {
        let mut condition = Condition::all();
        if let Some(q) = query.search() {
            condition = condition.add(
                Condition::any()
                    .add(contains_text(Column::Name, q))
                    .add(contains_text(Column::Airline, q))
                    .add(contains_text(Column::Route, q)),
            );
        }
        match query.status.as_deref() {
            Some("active") => condition = condition.add(Column::IsActive.eq(true)),
            Some("inactive") => condition = condition.add(Column::IsActive.eq(false)),
            _ => {}
        }
        if let Some(kind) = query.kind.as_deref() {
            condition = condition.add(Column::MarkupType.eq(kind));
        }
        condition
    }
}
