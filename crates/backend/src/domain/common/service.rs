use contracts::domain::common::{new_record_id, AggregateRoot, EntityMetadata, FormDto};
use contracts::shared::list::{ListEnvelope, ListQuery, Pagination};
use sea_orm::DatabaseConnection;

use super::CrudRepository;
use crate::shared::config::PaginationConfig;

type Dto<R> = <<R as CrudRepository>::Aggregate as AggregateRoot>::Dto;

pub async fn list<R: CrudRepository>(
    db: &DatabaseConnection,
    query: ListQuery,
    limits: &PaginationConfig,
) -> anyhow::Result<ListEnvelope<R::Aggregate>> {
    let query = query.normalized(limits.default_limit, limits.max_limit);
    let (items, total) = R::list(db, &query).await?;
    Ok(ListEnvelope::new(
        items,
        Pagination::new(query.page, query.limit, total),
    ))
}

pub async fn get_by_id<R: CrudRepository>(
    db: &DatabaseConnection,
    id: &str,
) -> anyhow::Result<Option<R::Aggregate>> {
    R::get_by_id(db, id).await
}

/// Validate, build the record (derived fields included) and insert it
pub async fn create<R: CrudRepository>(
    db: &DatabaseConnection,
    dto: Dto<R>,
) -> anyhow::Result<R::Aggregate> {
    dto.validate()?;
    let aggregate = R::Aggregate::from_dto(new_record_id(), dto, EntityMetadata::new_now());
    R::insert(db, &aggregate).await?;
    tracing::info!(
        "Created {} {}",
        R::Aggregate::full_name(),
        aggregate.id()
    );
    Ok(aggregate)
}

/// Replace the editable fields of an existing record; `None` when it does
/// not exist
pub async fn update<R: CrudRepository>(
    db: &DatabaseConnection,
    id: &str,
    dto: Dto<R>,
) -> anyhow::Result<Option<R::Aggregate>> {
    dto.validate()?;
    let Some(existing) = R::get_by_id(db, id).await? else {
        return Ok(None);
    };
    let mut metadata = *existing.metadata();
    metadata.touch();
    let aggregate = R::Aggregate::from_dto(id.to_string(), dto, metadata);
    R::update(db, &aggregate).await?;
    tracing::info!("Updated {} {}", R::Aggregate::full_name(), id);
    Ok(Some(aggregate))
}

pub async fn delete<R: CrudRepository>(db: &DatabaseConnection, id: &str) -> anyhow::Result<bool> {
    let deleted = R::soft_delete(db, id).await?;
    if deleted {
        tracing::info!("Deleted {} {}", R::Aggregate::full_name(), id);
    }
    Ok(deleted)
}
