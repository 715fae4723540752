//! HTTP error type of the REST API
//!
//! Every failure is answered with `{ "error": "<message>" }`; validation
//! failures add `"fields": { "<field>": "<message>" }`.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::validation::FieldErrors;
use serde_json::json;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(FieldErrors),

    #[error("তথ্য পাওয়া যায়নি")]
    NotFound,

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Services report validation failures as `anyhow` errors carrying
/// `FieldErrors`; everything else is internal
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<FieldErrors>() {
            Ok(fields) => ApiError::Validation(fields),
            Err(err) => ApiError::Internal(err),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ApiError::Validation(fields) => json!({
                "error": format!("ফর্মে ভুল আছে: {}", fields),
                "fields": fields,
            }),
            ApiError::Internal(err) => {
                tracing::error!("Internal error: {:#}", err);
                json!({ "error": "সার্ভারে সমস্যা হয়েছে, আবার চেষ্টা করুন" })
            }
            other => json!({ "error": other.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_survive_anyhow() {
        let mut fields = FieldErrors::new();
        fields.add("name", "নাম আবশ্যক");
        let err: ApiError = anyhow::Error::new(fields).into();
        assert!(matches!(err, ApiError::Validation(ref f) if f.contains("name")));
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn other_errors_are_internal() {
        let err: ApiError = anyhow::anyhow!("disk full").into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
    }
}
