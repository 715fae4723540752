//! List query, pagination metadata and the list response envelope
//!
//! Endpoints are not uniform about how they wrap lists: most return
//! `{ data: [...], pagination: {...} }`, some use the plural entity name as the
//! key (`{ customers: [...] }`), some report `pages` instead of `totalPages`,
//! a few return a bare array. [`ListEnvelope::from_value`] accepts all of them.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Page size used when the client does not ask for one
pub const DEFAULT_LIMIT: u64 = 10;

/// Largest row offset a query may carry (SQL integers are signed 64-bit)
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// Query parameters shared by all list endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// 1-based page number
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// Free text search (`q` or `search`)
    #[serde(default, alias = "search", skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
            q: None,
            status: None,
            kind: None,
            year: None,
            provider: None,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ListQuery {
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page,
            limit,
            ..Self::default()
        }
    }

    /// Clamp page and limit into range and drop blank filters
    ///
    /// `limit=0` falls back to `default_limit`. The page is capped so that
    /// `offset()` fits a signed 64-bit SQL parameter; a capped page lies past
    /// the last row and comes back empty.
    pub fn normalized(self, default_limit: u64, max_limit: u64) -> Self {
        let max_limit = max_limit.clamp(1, MAX_OFFSET);
        let limit = if self.limit == 0 {
            default_limit.clamp(1, max_limit)
        } else {
            self.limit.min(max_limit)
        };
        Self {
            page: self.page.clamp(1, MAX_OFFSET / limit + 1),
            limit,
            q: non_blank(self.q),
            status: non_blank(self.status),
            kind: non_blank(self.kind),
            year: self.year,
            provider: non_blank(self.provider),
        }
    }

    /// Number of rows to skip for the current page
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.limit)
            .min(MAX_OFFSET)
    }

    /// Search text, only when it is not blank
    pub fn search(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }

    /// Set parameters in a fixed order. The same query always yields the same
    /// pairs, so requesting a page twice hits the same URL.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string()), ("limit", self.limit.to_string())];
        if let Some(q) = self.search() {
            pairs.push(("q", q.to_string()));
        }
        let optional = [
            ("status", self.status.as_deref()),
            ("type", self.kind.as_deref()),
            ("provider", self.provider.as_deref()),
        ];
        for (key, value) in optional {
            if let Some(v) = value.map(str::trim).filter(|v| !v.is_empty()) {
                pairs.push((key, v.to_string()));
            }
        }
        if let Some(year) = self.year {
            pairs.push(("year", year.to_string()));
        }
        pairs
    }

    /// Reset to the first page (used whenever a filter changes)
    pub fn first_page(mut self) -> Self {
        self.page = 1;
        self
    }
}

/// Pagination block of a list response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub total: u64,
    #[serde(default, alias = "pages")]
    pub total_pages: u64,
}

/// Number of pages needed for `total` rows, at least one
pub fn total_pages(total: u64, limit: u64) -> u64 {
    if total == 0 || limit == 0 {
        1
    } else {
        total.div_ceil(limit)
    }
}

impl Pagination {
    pub fn new(page: u64, limit: u64, total: u64) -> Self {
        Self {
            page: page.max(1),
            limit,
            total,
            total_pages: total_pages(total, limit),
        }
    }

    /// Single page holding everything that was returned
    pub fn single_page(count: u64) -> Self {
        Self::new(1, count, count)
    }

    /// Fill in values an endpoint left out
    fn completed(self, returned: usize) -> Self {
        let total = if self.total == 0 { returned as u64 } else { self.total };
        let limit = if self.limit == 0 { (returned as u64).max(1) } else { self.limit };
        let pages = if self.total_pages == 0 {
            total_pages(total, limit)
        } else {
            self.total_pages
        };
        Self {
            page: self.page.max(1),
            limit,
            total,
            total_pages: pages,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, DEFAULT_LIMIT, 0)
    }
}

/// A page of records plus pagination metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T> ListEnvelope<T> {
    pub fn new(data: Vec<T>, pagination: Pagination) -> Self {
        Self { data, pagination }
    }

    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            pagination: Pagination::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T: DeserializeOwned> ListEnvelope<T> {
    /// Decode any of the list shapes the API produces
    ///
    /// `plural` is the entity's collection name, tried when there is no `data`
    /// key. A missing or `null` list decodes to an empty page.
    pub fn from_value(value: Value, plural: &str) -> Result<Self, serde_json::Error> {
        match value {
            Value::Array(_) => {
                let data: Vec<T> = serde_json::from_value(value)?;
                let pagination = Pagination::single_page(data.len() as u64);
                Ok(Self { data, pagination })
            }
            Value::Object(mut map) => {
                let items = ["data", plural, "items"]
                    .iter()
                    .find_map(|key| map.remove(*key).filter(|v| v.is_array()))
                    .unwrap_or_else(|| Value::Array(Vec::new()));
                let data: Vec<T> = serde_json::from_value(items)?;
                let pagination = match map.remove("pagination") {
                    Some(p) if p.is_object() => serde_json::from_value::<Pagination>(p)?,
                    _ => Pagination {
                        page: 1,
                        limit: 0,
                        total: 0,
                        total_pages: 0,
                    },
                }
                .completed(data.len());
                Ok(Self { data, pagination })
            }
            _ => Ok(Self::empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        #[serde(alias = "_id")]
        id: String,
    }

    #[test]
    fn query_pairs_are_stable_and_skip_blanks() {
        let query = ListQuery {
            page: 2,
            limit: 20,
            q: Some("  rahim ".into()),
            status: Some("".into()),
            kind: Some("hajj".into()),
            year: Some(2024),
            provider: None,
        };
        let pairs = query.to_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page", "2".to_string()),
                ("limit", "20".to_string()),
                ("q", "rahim".to_string()),
                ("type", "hajj".to_string()),
                ("year", "2024".to_string()),
            ]
        );
        assert_eq!(pairs, query.clone().to_pairs());
    }

    #[test]
    fn normalized_clamps_page_and_limit() {
        let query = ListQuery::new(0, 5000).normalized(DEFAULT_LIMIT, 100);
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 100);
        assert_eq!(ListQuery::new(3, 0).normalized(20, 100).limit, 20);
        assert_eq!(ListQuery::new(3, 0).normalized(0, 100).limit, 1);
        assert_eq!(ListQuery::new(3, 25).offset(), 50);
    }

    #[test]
    fn huge_pages_keep_the_offset_in_sql_range() {
        assert_eq!(ListQuery::new(u64::MAX, 10).offset(), MAX_OFFSET);

        let query = ListQuery::new(u64::MAX, 100).normalized(DEFAULT_LIMIT, 100);
        assert_eq!(query.page, MAX_OFFSET / 100 + 1);
        assert!(query.offset() <= MAX_OFFSET);

        let query = ListQuery::new(100_000_000_000_000_000, 100).normalized(DEFAULT_LIMIT, 100);
        assert!(query.offset() <= MAX_OFFSET);
        assert_eq!(ListQuery::new(7, 10).normalized(DEFAULT_LIMIT, 100).page, 7);
    }

    #[test]
    fn query_accepts_search_alias() {
        let query: ListQuery = serde_json::from_value(json!({"search": "x", "type": "umrah"})).unwrap();
        assert_eq!(query.q.as_deref(), Some("x"));
        assert_eq!(query.kind.as_deref(), Some("umrah"));
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 1);
    }

    #[test]
    fn envelope_with_data_and_total_pages() {
        let value = json!({
            "data": [{"id": "a"}, {"id": "b"}],
            "pagination": {"page": 2, "limit": 2, "total": 5, "totalPages": 3}
        });
        let env = ListEnvelope::<Row>::from_value(value, "assets").unwrap();
        assert_eq!(env.data.len(), 2);
        assert_eq!(env.pagination, Pagination { page: 2, limit: 2, total: 5, total_pages: 3 });
        assert!(env.pagination.has_next());
        assert!(env.pagination.has_previous());
    }

    #[test]
    fn envelope_with_plural_key_and_pages_alias() {
        let value = json!({
            "customers": [{"_id": "x1"}],
            "pagination": {"page": 1, "limit": 10, "total": 1, "pages": 1}
        });
        let env = ListEnvelope::<Row>::from_value(value, "customers").unwrap();
        assert_eq!(env.data, vec![Row { id: "x1".into() }]);
        assert_eq!(env.pagination.total_pages, 1);
    }

    #[test]
    fn envelope_without_pagination_or_list() {
        let env = ListEnvelope::<Row>::from_value(json!({"success": true}), "vendors").unwrap();
        assert!(env.is_empty());
        assert_eq!(env.pagination.total_pages, 1);

        let env = ListEnvelope::<Row>::from_value(json!({"data": null}), "vendors").unwrap();
        assert!(env.is_empty());

        let env = ListEnvelope::<Row>::from_value(json!([{"id": "1"}, {"id": "2"}]), "x").unwrap();
        assert_eq!(env.pagination.total, 2);
        assert_eq!(env.pagination.total_pages, 1);
    }

    #[test]
    fn envelope_missing_total_pages_is_computed() {
        let value = json!({
            "data": [{"id": "a"}],
            "pagination": {"page": 1, "limit": 1, "total": 3}
        });
        let env = ListEnvelope::<Row>::from_value(value, "x").unwrap();
        assert_eq!(env.pagination.total_pages, 3);
    }
}
