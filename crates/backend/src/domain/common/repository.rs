use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use contracts::domain::common::AggregateRoot;
use contracts::shared::list::ListQuery;
use sea_orm::sea_query::{Expr, LikeExpr, SimpleExpr};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityName,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::shared::data::paging::fetch_page;

/// Table access of one aggregate
///
/// Lists exclude soft-deleted rows and are ordered newest first, with the id
/// as tie-breaker so that the same query always returns the same page.
#[async_trait]
pub trait CrudRepository: Send + Sync + 'static {
    type Aggregate: AggregateRoot + Send + Sync + 'static;

    /// One page matching the query's filters, plus the total match count
    async fn list(
        db: &DatabaseConnection,
        query: &ListQuery,
    ) -> anyhow::Result<(Vec<Self::Aggregate>, u64)>;

    async fn get_by_id(db: &DatabaseConnection, id: &str) -> anyhow::Result<Option<Self::Aggregate>>;

    async fn insert(db: &DatabaseConnection, aggregate: &Self::Aggregate) -> anyhow::Result<()>;

    async fn update(db: &DatabaseConnection, aggregate: &Self::Aggregate) -> anyhow::Result<()>;

    /// Mark the row deleted; `false` when there was no live row
    async fn soft_delete(db: &DatabaseConnection, id: &str) -> anyhow::Result<bool>;
}

/// sea-orm table that stores one aggregate
///
/// Every table has `id`, `is_deleted`, `created_at` and `updated_at` columns;
/// the CRUD statements on them are shared, a table only maps its rows and
/// turns list parameters into filters.
pub trait AggregateTable: Send + Sync + 'static {
    type Aggregate: AggregateRoot + From<<Self::Entity as EntityTrait>::Model>;
    type Entity: EntityTrait;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + 'static;

    /// Row to insert, or to update in place
    fn active_model(aggregate: &Self::Aggregate) -> anyhow::Result<Self::ActiveModel>;

    /// Filters of a list query on top of the soft-delete filter
    fn filters(query: &ListQuery) -> Condition;
}

/// Column present in every aggregate table
pub fn shared_column<E: EntityTrait>(name: &str) -> anyhow::Result<E::Column> {
    E::Column::from_str(name)
        .map_err(|_| anyhow::anyhow!("table {} has no `{}` column", E::default().table_name(), name))
}

/// `column LIKE %text%` with the LIKE wildcards of `text` taken literally
pub fn contains_text<C: ColumnTrait>(column: C, text: &str) -> SimpleExpr {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    Expr::col((column.entity_name(), column)).like(LikeExpr::new(pattern).escape('\\'))
}

#[async_trait]
impl<T> CrudRepository for T
where
    T: AggregateTable,
    T::Aggregate: Send + Sync + 'static,
    <T::Entity as EntityTrait>::Model: IntoActiveModel<T::ActiveModel> + Sync,
{
    type Aggregate = T::Aggregate;

    async fn list(
        db: &DatabaseConnection,
        query: &ListQuery,
    ) -> anyhow::Result<(Vec<T::Aggregate>, u64)> {
        let is_deleted = shared_column::<T::Entity>("is_deleted")?;
        let select = T::Entity::find()
            .filter(T::filters(query).add(is_deleted.eq(false)))
            .order_by_desc(shared_column::<T::Entity>("created_at")?)
            .order_by_desc(shared_column::<T::Entity>("id")?);
        let (rows, total) = fetch_page(db, select, query).await?;
        Ok((rows.into_iter().map(Into::into).collect(), total))
    }

    async fn get_by_id(db: &DatabaseConnection, id: &str) -> anyhow::Result<Option<T::Aggregate>> {
        let model = T::Entity::find()
            .filter(shared_column::<T::Entity>("id")?.eq(id))
            .filter(shared_column::<T::Entity>("is_deleted")?.eq(false))
            .one(db)
            .await?;
        Ok(model.map(Into::into))
    }

    async fn insert(db: &DatabaseConnection, aggregate: &T::Aggregate) -> anyhow::Result<()> {
        T::active_model(aggregate)?.insert(db).await?;
        Ok(())
    }

    async fn update(db: &DatabaseConnection, aggregate: &T::Aggregate) -> anyhow::Result<()> {
        let mut active = T::active_model(aggregate)?;
        active.not_set(shared_column::<T::Entity>("created_at")?);
        active.update(db).await?;
        Ok(())
    }

    async fn soft_delete(db: &DatabaseConnection, id: &str) -> anyhow::Result<bool> {
        let is_deleted = shared_column::<T::Entity>("is_deleted")?;
        let result = T::Entity::update_many()
            .col_expr(is_deleted, Expr::value(true))
            .col_expr(shared_column::<T::Entity>("updated_at")?, Expr::value(Utc::now()))
            .filter(shared_column::<T::Entity>("id")?.eq(id))
            .filter(is_deleted.eq(false))
            .exec(db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_asset::repository::{Column, Entity};
    use sea_orm::{DbBackend, QueryTrait};

    #[test]
    fn shared_columns_resolve_by_name() {
        assert!(matches!(shared_column::<Entity>("is_deleted"), Ok(Column::IsDeleted)));
        assert!(matches!(shared_column::<Entity>("created_at"), Ok(Column::CreatedAt)));
        assert!(shared_column::<Entity>("deleted").is_err());
    }

    #[test]
    fn like_wildcards_in_search_text_are_escaped() {
        let sql = Entity::find()
            .filter(contains_text(Column::Name, "50%_off"))
            .build(DbBackend::Sqlite)
            .to_string();
        assert!(sql.contains(r"'%50\%\_off%'"), "{sql}");
        assert!(sql.contains(r"ESCAPE '\'"), "{sql}");
    }
}
