//! API utilities for frontend-backend communication
//!
//! Every helper returns `Result<_, String>`; the error string is the server's
//! `error` message when the response carries one, a generic text otherwise.

use contracts::domain::common::AggregateRoot;
use contracts::shared::list::{ListEnvelope, ListQuery};
use contracts::shared::search::SearchResponse;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Page size used when a dashboard needs every record
const FETCH_ALL_LIMIT: u64 = 100;

/// Shown when the server gave no usable message
pub const GENERIC_ERROR: &str = "কিছু একটা ভুল হয়েছে, আবার চেষ্টা করুন";

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Append url-encoded query pairs to a path
pub fn with_query(path: &str, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return path.to_string();
    }
    let query = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", path, query)
}

/// `error` field of a JSON error body, if any
pub fn error_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .or_else(|| value.get("message"))
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

async fn failure(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = error_from_body(&body).unwrap_or_else(|| GENERIC_ERROR.to_string());
    log::warn!("API error {}: {}", status, message);
    message
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(failure(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("উত্তর পড়া যায়নি: {}", e))
}

fn network_error(e: gloo_net::Error) -> String {
    log::error!("Request failed: {}", e);
    "সার্ভারের সাথে সংযোগ করা যায়নি".to_string()
}

/// One page of a collection
pub async fn fetch_page<A: AggregateRoot>(query: &ListQuery) -> Result<ListEnvelope<A>, String> {
    let url = api_url(&with_query(A::api_path(), &query.to_pairs()));
    let response = Request::get(&url).send().await.map_err(network_error)?;
    let value: serde_json::Value = read_json(response).await?;
    ListEnvelope::from_value(value, A::collection_name())
        .map_err(|e| format!("উত্তর পড়া যায়নি: {}", e))
}

/// Every record of a collection, page by page
pub async fn fetch_all<A: AggregateRoot>() -> Result<Vec<A>, String> {
    let mut query = ListQuery::new(1, FETCH_ALL_LIMIT);
    let mut items = Vec::new();
    loop {
        let page = fetch_page::<A>(&query).await?;
        let has_next = page.pagination.has_next() && !page.data.is_empty();
        items.extend(page.data);
        if !has_next {
            return Ok(items);
        }
        query.page += 1;
    }
}

/// One record; `None` when the server answers 404
pub async fn fetch_by_id<A: AggregateRoot>(id: &str) -> Result<Option<A>, String> {
    let response = Request::get(&api_url(&A::item_path(id)))
        .send()
        .await
        .map_err(network_error)?;
    if response.status() == 404 {
        return Ok(None);
    }
    read_json(response).await.map(Some)
}

pub async fn create<A: AggregateRoot>(dto: &A::Dto) -> Result<A, String> {
    let response = Request::post(&api_url(A::api_path()))
        .json(dto)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(network_error)?;
    read_json(response).await
}

pub async fn update<A: AggregateRoot>(id: &str, dto: &A::Dto) -> Result<A, String> {
    let response = Request::put(&api_url(&A::item_path(id)))
        .json(dto)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(network_error)?;
    read_json(response).await
}

pub async fn delete<A: AggregateRoot>(id: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&A::item_path(id)))
        .send()
        .await
        .map_err(network_error)?;
    if !response.ok() {
        return Err(failure(response).await);
    }
    Ok(())
}

/// GET /api/search
pub async fn search(q: &str) -> Result<SearchResponse, String> {
    let url = api_url(&with_query("/api/search", &[("q", q.trim().to_string())]));
    let response = Request::get(&url).send().await.map_err(network_error)?;
    read_json(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_from_body() {
        assert_eq!(
            error_from_body(r#"{"error":"PNR আবশ্যক","fields":{}}"#).as_deref(),
            Some("PNR আবশ্যক")
        );
        assert_eq!(error_from_body(r#"{"message":"bad"}"#).as_deref(), Some("bad"));
        assert_eq!(error_from_body(r#"{"error":"  "}"#), None);
        assert_eq!(error_from_body("<html>502</html>"), None);
    }

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("/api/assets", &[]), "/api/assets");
        assert_eq!(
            with_query("/api/assets", &[("page", "2".into()), ("q", "IT Equipment".into())]),
            "/api/assets?page=2&q=IT%20Equipment"
        );
    }
}
