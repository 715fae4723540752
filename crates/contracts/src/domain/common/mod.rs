//! Common types and traits for all aggregates

pub mod aggregate_root;
pub mod entity_metadata;

// Re-exports
pub use aggregate_root::{AggregateRoot, FormDto};
pub use entity_metadata::{new_record_id, EntityMetadata};
