use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use contracts::domain::common::AggregateRoot;
use contracts::shared::list::ListQuery;
use contracts::shared::search::{is_searchable, SearchHit, SearchResponse, MAX_HITS_PER_ENTITY};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::domain::common::CrudRepository;
use crate::domain::{
    a001_asset, a002_vendor, a003_customer, a004_air_agent, a010_air_refund, a011_air_reissue,
};
use crate::shared::error::ApiResult;
use crate::shared::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default, alias = "search")]
    pub q: String,
}

async fn hits<R: CrudRepository>(db: &DatabaseConnection, q: &str) -> anyhow::Result<Vec<SearchHit>> {
    let query = ListQuery {
        q: Some(q.to_string()),
        ..ListQuery::new(1, MAX_HITS_PER_ENTITY)
    };
    let (items, _) = R::list(db, &query).await?;
    Ok(items
        .iter()
        .map(|item| SearchHit {
            entity: R::Aggregate::collection_name().to_string(),
            id: item.id().to_string(),
            title: item.title(),
            subtitle: item.subtitle(),
            route: R::Aggregate::detail_route(item.id()),
        })
        .collect())
}

/// GET /api/search?q=
///
/// Queries shorter than two characters return no results.
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> ApiResult<Json<SearchResponse>> {
    let Query(params) = params?;
    let q = params.q.trim();
    if !is_searchable(q) {
        return Ok(Json(SearchResponse::default()));
    }

    let db = &state.db;
    let mut results = hits::<a003_customer::repository::Repository>(db, q).await?;
    results.extend(hits::<a004_air_agent::repository::Repository>(db, q).await?);
    results.extend(hits::<a002_vendor::repository::Repository>(db, q).await?);
    results.extend(hits::<a001_asset::repository::Repository>(db, q).await?);
    results.extend(hits::<a010_air_refund::repository::Repository>(db, q).await?);
    results.extend(hits::<a011_air_reissue::repository::Repository>(db, q).await?);

    tracing::debug!("Search '{}' found {} hits", q, results.len());
    Ok(Json(SearchResponse { results }))
}
