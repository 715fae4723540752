use serde::{Deserialize, Serialize};

/// Shortest query the global search runs
pub const MIN_SEARCH_LEN: usize = 2;

/// Hits returned per entity
pub const MAX_HITS_PER_ENTITY: u64 = 10;

/// One row of the global search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Collection name of the hit (for example "customers")
    pub entity: String,
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Client route of the detail page
    pub route: String,
}

/// GET /api/search response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchHit>,
}

/// Whether a query is long enough to be sent
pub fn is_searchable(query: &str) -> bool {
    query.trim().chars().count() >= MIN_SEARCH_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_searchable() {
        assert!(!is_searchable(" a "));
        assert!(is_searchable("ab"));
        assert!(is_searchable("রহ"));
    }

    #[test]
    fn missing_results_decode_to_empty() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.results.is_empty());
    }
}
