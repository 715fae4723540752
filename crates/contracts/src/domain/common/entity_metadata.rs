use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle timestamps carried by every stored record
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EntityMetadata {
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl EntityMetadata {
    /// Metadata for a record that is about to be inserted
    pub fn new_now() -> Self {
        let now = Utc::now();
        Self {
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    /// Update timestamp
    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

/// Generate a new record id (UUID v4, hyphenated)
pub fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_now_sets_both_timestamps() {
        let meta = EntityMetadata::new_now();
        assert!(meta.created_at.is_some());
        assert_eq!(meta.created_at, meta.updated_at);
    }

    #[test]
    fn missing_timestamps_deserialize_to_none() {
        let meta: EntityMetadata = serde_json::from_str("{}").unwrap();
        assert_eq!(meta, EntityMetadata::default());
    }

    #[test]
    fn record_ids_are_unique_uuids() {
        let a = new_record_id();
        let b = new_record_id();
        assert_ne!(a, b);
        assert!(uuid::Uuid::parse_str(&a).is_ok());
    }
}
