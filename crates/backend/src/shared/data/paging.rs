use contracts::shared::list::ListQuery;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QuerySelect, Select};

/// Total row count and the rows of the requested page
pub async fn fetch_page<E>(
    db: &DatabaseConnection,
    select: Select<E>,
    query: &ListQuery,
) -> anyhow::Result<(Vec<E::Model>, u64)>
where
    E: EntityTrait,
    E::Model: Sync,
{
    let total = select.clone().count(db).await?;
    let rows = select
        .offset(query.offset())
        .limit(query.limit)
        .all(db)
        .await?;
    Ok((rows, total))
}
