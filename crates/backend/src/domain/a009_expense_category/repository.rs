use contracts::domain::a009_expense_category::aggregate::ExpenseCategory;
use contracts::domain::common::EntityMetadata;
use contracts::shared::list::ListQuery;
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, Set};

use crate::domain::common::{contains_text, AggregateTable};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a009_categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub monthly_budget: f64,
    pub is_deleted: bool,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ExpenseCategory {
    fn from(m: Model) -> Self {
        ExpenseCategory {
            id: m.id,
            name: m.name,
            icon: m.icon,
            description: m.description,
            monthly_budget: m.monthly_budget,
            metadata: EntityMetadata {
                created_at: m.created_at,
                updated_at: m.updated_at,
            },
        }
    }
}

pub struct Repository;

impl AggregateTable for Repository {
    type Aggregate = ExpenseCategory;
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn active_model(c: &ExpenseCategory) -> anyhow::Result<ActiveModel> {
        Ok(ActiveModel {
            id: Set(c.id.clone()),
            name: Set(c.name.clone()),
            icon: Set(c.icon.clone()),
            description: Set(c.description.clone()),
            monthly_budget: Set(c.monthly_budget),
            is_deleted: Set(false),
            created_at: Set(c.metadata.created_at),
            updated_at: Set(c.metadata.updated_at),
        })
    }

    fn filters(query: &ListQuery) -> Condition {
        let mut condition = Condition::all();
        if let Some(q) = query.search() {
            condition = condition.add(
                Condition::any()
                    .add(contains_text(Column::Name, q))
                    .add(contains_text(Column::Description, q)),
            );
        }
        condition
    }
}
