//! Handlers shared by every collection, instantiated per repository in
//! `routes.rs`

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::common::AggregateRoot;
use contracts::shared::list::{ListEnvelope, ListQuery};
use serde_json::{json, Value};

use crate::domain::common::{service, CrudRepository};
use crate::shared::error::{ApiError, ApiResult};
use crate::shared::state::AppState;

type Dto<R> = <<R as CrudRepository>::Aggregate as AggregateRoot>::Dto;

/// GET /api/<collection>
pub async fn list<R: CrudRepository>(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResult<Json<ListEnvelope<R::Aggregate>>> {
    let Query(query) = query?;
    let page = service::list::<R>(&state.db, query, &state.config.pagination).await?;
    Ok(Json(page))
}

/// GET /api/<collection>/:id
pub async fn get_by_id<R: CrudRepository>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<R::Aggregate>> {
    service::get_by_id::<R>(&state.db, &id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// POST /api/<collection>
pub async fn create<R: CrudRepository>(
    State(state): State<AppState>,
    body: Result<Json<Dto<R>>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<R::Aggregate>)> {
    let Json(dto) = body?;
    let created = service::create::<R>(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/<collection>/:id
pub async fn update<R: CrudRepository>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Dto<R>>, JsonRejection>,
) -> ApiResult<Json<R::Aggregate>> {
    let Json(dto) = body?;
    service::update::<R>(&state.db, &id, dto)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// DELETE /api/<collection>/:id
pub async fn delete<R: CrudRepository>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    if service::delete::<R>(&state.db, &id).await? {
        Ok(Json(json!({ "success": true })))
    } else {
        Err(ApiError::NotFound)
    }
}
